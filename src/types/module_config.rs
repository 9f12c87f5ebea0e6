//! One module record of a pipeline document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the successor list; never stored in `attrs`.
pub const NEXT_MODULES_KEY: &str = "next_modules";

/// A processing module as it appears in a pipeline document.
///
/// Only `next_modules` is interpreted; every other key (`class`, `parallelism`,
/// `custom_params`, ...) is carried in `attrs` and serialized back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
  /// Names of the downstream modules, in connection order.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub next_modules: Vec<String>,
  /// Opaque attributes. Must not contain [`NEXT_MODULES_KEY`].
  #[serde(flatten)]
  pub attrs: Map<String, Value>,
}

impl ModuleConfig {
  pub fn new(next_modules: Vec<String>) -> Self {
    Self {
      next_modules,
      attrs: Map::new(),
    }
  }

  /// Builder-style helper that sets one opaque attribute. [`NEXT_MODULES_KEY`]
  /// is ignored; successors only come from `next_modules`.
  pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    let key = key.into();
    if key != NEXT_MODULES_KEY {
      self.attrs.insert(key, value.into());
    }
    self
  }
}
