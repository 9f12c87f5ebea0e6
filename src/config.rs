//! Validation settings shared by the editor, document I/O and the CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do with a `next_modules` entry that names no module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingEdgePolicy {
  /// Classify the graph as [`crate::Classification::DanglingEdge`].
  #[default]
  Reject,
  /// Treat the unknown name as a dead end with no successors.
  Sink,
}

impl fmt::Display for DanglingEdgePolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DanglingEdgePolicy::Reject => write!(f, "reject"),
      DanglingEdgePolicy::Sink => write!(f, "sink"),
    }
  }
}

impl FromStr for DanglingEdgePolicy {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "reject" => Ok(DanglingEdgePolicy::Reject),
      "sink" => Ok(DanglingEdgePolicy::Sink),
      other => Err(format!(
        "unknown dangling edge policy '{}' (expected 'reject' or 'sink')",
        other
      )),
    }
  }
}

/// Validation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
  pub dangling_edges: DanglingEdgePolicy,
}

impl ValidatorConfig {
  pub fn with_dangling_edges(mut self, policy: DanglingEdgePolicy) -> Self {
    self.dangling_edges = policy;
    self
  }
}
