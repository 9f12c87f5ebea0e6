//! In-memory model of the pipeline being edited, and its export.
//!
//! The editor owns modules and connections by [`NodeId`]; names are only
//! resolved when a [`PipelineDocument`] is exported. The root module is seeded
//! on construction and cannot be removed.

use std::collections::HashSet;
use std::fmt;

use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use crate::config::ValidatorConfig;
use crate::error::{EditorError, ExportError};
use crate::types::{ModuleConfig, NEXT_MODULES_KEY, ParamValue, PipelineDocument, ROOT_NODE};
use crate::validator::validate_document;

/// Largest number of modules an editor accepts by default.
pub const DEFAULT_MAX_NODES: usize = 64;

/// Keys shown in the editor only; never exported.
const DISPLAY_KEYS: &[&str] = &["desc", "label", "node_id", "name"];
const CUSTOM_PARAMS_KEY: &str = "custom_params";

/// Editor-assigned module id, unique for the lifetime of one editor (until [`PipelineEditor::clear`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// One module on the editing canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorNode {
  pub id: NodeId,
  pub name: String,
  pub removable: bool,
  /// Module parameters (`class`, `parallelism`, `custom_params`, ...).
  pub params: Map<String, Value>,
}

/// Pipeline under construction.
#[derive(Debug, Clone)]
pub struct PipelineEditor {
  config: ValidatorConfig,
  /// Module limit; 0 means unlimited.
  max_nodes: usize,
  root_params: Map<String, Value>,
  nodes: Vec<EditorNode>,
  connections: Vec<(NodeId, NodeId)>,
  seed_id: u32,
}

impl PipelineEditor {
  /// Creates an editor holding only the root module.
  pub fn new(config: ValidatorConfig) -> Self {
    Self::with_root(config, Map::new())
  }

  /// Creates an editor whose root module carries `root_params`.
  pub fn with_root(config: ValidatorConfig, root_params: Map<String, Value>) -> Self {
    let mut editor = Self {
      config,
      max_nodes: DEFAULT_MAX_NODES,
      root_params,
      nodes: Vec::new(),
      connections: Vec::new(),
      seed_id: 0,
    };
    editor.seed_root();
    editor
  }

  fn seed_root(&mut self) {
    let id = self.next_id();
    self.nodes.push(EditorNode {
      id,
      name: ROOT_NODE.to_string(),
      removable: false,
      params: self.root_params.clone(),
    });
  }

  fn next_id(&mut self) -> NodeId {
    let id = NodeId(self.seed_id);
    self.seed_id += 1;
    id
  }

  /// Replaces the module limit ([`DEFAULT_MAX_NODES`] by default, 0 for none).
  pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
    self.max_nodes = max_nodes;
    self
  }

  pub fn config(&self) -> &ValidatorConfig {
    &self.config
  }

  pub fn root(&self) -> NodeId {
    self.nodes[0].id
  }

  pub fn nodes(&self) -> &[EditorNode] {
    &self.nodes
  }

  pub fn connections(&self) -> &[(NodeId, NodeId)] {
    &self.connections
  }

  pub fn node(&self, id: NodeId) -> Option<&EditorNode> {
    self.nodes.iter().find(|n| n.id == id)
  }

  fn node_mut(&mut self, id: NodeId) -> Result<&mut EditorNode, EditorError> {
    self
      .nodes
      .iter_mut()
      .find(|n| n.id == id)
      .ok_or(EditorError::UnknownNode(id))
  }

  fn is_unique_name(&self, name: &str) -> bool {
    self.nodes.iter().all(|n| n.name != name)
  }

  /// Adds a module. A name already in use gets the suffix `-<id>`.
  #[instrument(level = "trace", skip(self, params))]
  pub fn add_node(
    &mut self,
    name: &str,
    mut params: Map<String, Value>,
  ) -> Result<NodeId, EditorError> {
    let max = self.max_nodes;
    if max > 0 && self.nodes.len() >= max {
      return Err(EditorError::NodeLimit { max });
    }
    let id = self.next_id();
    let name = if self.is_unique_name(name) {
      name.to_string()
    } else {
      format!("{}-{}", name, id)
    };
    // Successors come from connections only.
    params.remove(NEXT_MODULES_KEY);
    debug!(%id, name = %name, "module added");
    self.nodes.push(EditorNode {
      id,
      name,
      removable: true,
      params,
    });
    Ok(id)
  }

  /// Removes a module and every connection touching it.
  #[instrument(level = "trace", skip(self))]
  pub fn remove_node(&mut self, id: NodeId) -> Result<EditorNode, EditorError> {
    let pos = self
      .nodes
      .iter()
      .position(|n| n.id == id)
      .ok_or(EditorError::UnknownNode(id))?;
    if !self.nodes[pos].removable {
      return Err(EditorError::NotRemovable(self.nodes[pos].name.clone()));
    }
    self.connections.retain(|(from, to)| *from != id && *to != id);
    Ok(self.nodes.remove(pos))
  }

  /// Renames a module. Duplicates are allowed here and resolved on export.
  pub fn rename_node(&mut self, id: NodeId, name: impl Into<String>) -> Result<(), EditorError> {
    self.node_mut(id)?.name = name.into();
    Ok(())
  }

  /// Connects `from` to `to`. Returns `false` when the connection already exists.
  pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<bool, EditorError> {
    if from == to {
      return Err(EditorError::Loopback(from));
    }
    self.node_mut(from)?;
    self.node_mut(to)?;
    if self.connections.contains(&(from, to)) {
      return Ok(false);
    }
    self.connections.push((from, to));
    Ok(true)
  }

  /// Removes the connection `from → to`; returns whether it existed.
  pub fn disconnect(&mut self, from: NodeId, to: NodeId) -> bool {
    let before = self.connections.len();
    self.connections.retain(|c| *c != (from, to));
    self.connections.len() != before
  }

  /// Sets a top-level parameter from form text. `name` renames the module;
  /// successors can only be changed through [`PipelineEditor::connect`].
  pub fn set_param(&mut self, id: NodeId, key: &str, input: &str) -> Result<(), EditorError> {
    if key == "name" {
      return self.rename_node(id, input);
    }
    if key == NEXT_MODULES_KEY {
      return Err(EditorError::ReservedKey(key.to_string()));
    }
    let value = form_value(input);
    self.node_mut(id)?.params.insert(key.to_string(), value);
    Ok(())
  }

  /// Sets one entry of the module's `custom_params` from form text.
  pub fn set_custom_param(&mut self, id: NodeId, key: &str, input: &str) -> Result<(), EditorError> {
    let value = form_value(input);
    let params = &mut self.node_mut(id)?.params;
    let custom = params
      .entry(CUSTOM_PARAMS_KEY)
      .or_insert_with(|| Value::Object(Map::new()));
    if !custom.is_object() {
      *custom = Value::Object(Map::new());
    }
    if let Value::Object(map) = custom {
      map.insert(key.to_string(), value);
    }
    Ok(())
  }

  /// Drops everything except a fresh root module.
  pub fn clear(&mut self) {
    self.nodes.clear();
    self.connections.clear();
    self.seed_id = 0;
    self.seed_root();
  }

  /// Builds the document for the current state without validating it.
  ///
  /// Duplicate names are resolved first by appending `-<id>`, and the
  /// editor's modules are renamed to match.
  pub fn to_document(&mut self) -> PipelineDocument {
    let mut taken: HashSet<String> = HashSet::new();
    for node in &mut self.nodes {
      if taken.contains(&node.name) {
        let old = node.name.clone();
        while taken.contains(&node.name) {
          node.name = format!("{}-{}", node.name, node.id);
        }
        warn!(old = %old, new = %node.name, "module names must be unique, renamed");
      }
      taken.insert(node.name.clone());
    }

    let mut doc: PipelineDocument = self
      .nodes
      .iter()
      .map(|n| (n.name.clone(), ModuleConfig {
        next_modules: Vec::new(),
        attrs: export_params(&n.params),
      }))
      .collect();

    for (from, to) in &self.connections {
      let (Some(up), Some(down)) = (self.node(*from), self.node(*to)) else {
        continue;
      };
      if let Some(module) = doc.modules.get_mut(&up.name) {
        if !module.next_modules.contains(&down.name) {
          module.next_modules.push(down.name.clone());
        }
      }
    }
    doc
  }

  /// Exports the pipeline if it is a valid DAG rooted at [`ROOT_NODE`].
  #[instrument(level = "trace", skip(self))]
  pub fn export(&mut self) -> Result<PipelineDocument, ExportError> {
    let doc = self.to_document();
    let classification = validate_document(&doc, &self.config);
    if !classification.is_valid() {
      info!(%classification, "export refused");
      return Err(ExportError::Invalid(classification));
    }
    info!(modules = doc.len(), "pipeline exported");
    Ok(doc)
  }
}

fn form_value(input: &str) -> Value {
  ParamValue::parse_input(input)
    .into_value()
    .unwrap_or_else(|| Value::String(String::new()))
}

/// Copies `params` without display-only keys, without empty-string values and
/// without any `next_modules` entry: successors come from connections only.
fn export_params(params: &Map<String, Value>) -> Map<String, Value> {
  params
    .iter()
    .filter(|(k, v)| {
      !DISPLAY_KEYS.contains(&k.as_str()) && k.as_str() != NEXT_MODULES_KEY && !is_empty_string(v)
    })
    .map(|(k, v)| {
      let v = match (k.as_str(), v) {
        (CUSTOM_PARAMS_KEY, Value::Object(custom)) => Value::Object(
          custom
            .iter()
            .filter(|(_, cv)| !is_empty_string(cv))
            .map(|(ck, cv)| (ck.clone(), cv.clone()))
            .collect(),
        ),
        _ => v.clone(),
      };
      (k.clone(), v)
    })
    .collect()
}

fn is_empty_string(v: &Value) -> bool {
  v.as_str().is_some_and(str::is_empty)
}
