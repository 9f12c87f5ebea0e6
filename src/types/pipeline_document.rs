//! Pipeline configuration document: module name → module record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ModuleConfig;

/// Name of the fixed entry module every pipeline starts from.
pub const ROOT_NODE: &str = "source";

/// Pipeline configuration document as exchanged with the pipeline runtime.
///
/// Serializes as a flat JSON object keyed by module name. Keys are kept sorted
/// so that exports are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineDocument {
  pub modules: BTreeMap<String, ModuleConfig>,
}

impl PipelineDocument {
  pub fn new() -> Self {
    Self::default()
  }

  /// Parses a document from JSON text.
  pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(source)
  }

  pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(self)
  }

  /// Inserts or replaces a module, returning the previous record.
  pub fn insert(&mut self, name: impl Into<String>, module: ModuleConfig) -> Option<ModuleConfig> {
    self.modules.insert(name.into(), module)
  }

  pub fn module(&self, name: &str) -> Option<&ModuleConfig> {
    self.modules.get(name)
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.modules.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.modules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  pub fn has_root(&self) -> bool {
    self.modules.contains_key(ROOT_NODE)
  }
}

impl FromIterator<(String, ModuleConfig)> for PipelineDocument {
  fn from_iter<I: IntoIterator<Item = (String, ModuleConfig)>>(iter: I) -> Self {
    Self {
      modules: iter.into_iter().collect(),
    }
  }
}
