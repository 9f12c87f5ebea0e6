//! Result of validating a pipeline graph.

use std::fmt;

const INVALID_PREFIX: &str = "Json config is invalid";
const CYCLE_HINT: &str = "The pipeline must be a DAG.";
const LINK_HINT: &str = "Please make sure all modules are linked and the pipeline must be a DAG.";

/// Classification of a pipeline graph snapshot.
///
/// Validation failures are ordinary values of this type, never errors: the
/// caller decides how to present them and must refuse to export anything that
/// is not [`Classification::Valid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
  /// Single-rooted DAG, every module reachable from the root.
  Valid,
  /// A path from the root revisits a module already on that path.
  /// `cycle` starts and ends with the repeated module.
  NotDag { cycle: Vec<String> },
  /// Modules exist that the root cannot reach.
  Disconnected { unreachable: Vec<String> },
  /// `from` lists a successor `to` that names no module.
  DanglingEdge { from: String, to: String },
  /// The root module is absent.
  MissingRoot,
}

impl Classification {
  pub fn is_valid(&self) -> bool {
    matches!(self, Classification::Valid)
  }

  /// Legacy `graph` marker (`notDAG` / `invalid`) understood by older front ends.
  pub fn marker(&self) -> Option<&'static str> {
    match self {
      Classification::Valid => None,
      Classification::NotDag { .. } => Some("notDAG"),
      _ => Some("invalid"),
    }
  }

  /// Human-readable message for a blocking alert; `None` when valid.
  pub fn message(&self) -> Option<String> {
    match self {
      Classification::Valid => None,
      Classification::NotDag { .. } => Some(format!("{}\n{}", INVALID_PREFIX, CYCLE_HINT)),
      _ => Some(format!("{}\n{}", INVALID_PREFIX, LINK_HINT)),
    }
  }
}

impl fmt::Display for Classification {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Classification::Valid => write!(f, "valid"),
      Classification::NotDag { cycle } => write!(f, "not_dag ({})", cycle.join(" -> ")),
      Classification::Disconnected { unreachable } => {
        write!(f, "disconnected (unreachable: {})", unreachable.join(", "))
      }
      Classification::DanglingEdge { from, to } => {
        write!(f, "dangling_edge ({} -> {})", from, to)
      }
      Classification::MissingRoot => write!(f, "missing_root"),
    }
  }
}
