//! Tests for `Classification`.

use super::Classification;

fn cycle() -> Classification {
  Classification::NotDag {
    cycle: vec!["source".to_string(), "a".to_string(), "source".to_string()],
  }
}

#[test]
fn only_valid_is_valid() {
  assert!(Classification::Valid.is_valid());
  assert!(!cycle().is_valid());
  assert!(!Classification::MissingRoot.is_valid());
}

#[test]
fn display_labels() {
  assert_eq!(Classification::Valid.to_string(), "valid");
  assert_eq!(cycle().to_string(), "not_dag (source -> a -> source)");
  assert_eq!(
    Classification::Disconnected {
      unreachable: vec!["b".to_string(), "c".to_string()]
    }
    .to_string(),
    "disconnected (unreachable: b, c)"
  );
  assert_eq!(
    Classification::DanglingEdge {
      from: "source".to_string(),
      to: "ghost".to_string()
    }
    .to_string(),
    "dangling_edge (source -> ghost)"
  );
  assert_eq!(Classification::MissingRoot.to_string(), "missing_root");
}

#[test]
fn cycle_and_link_messages_differ() {
  let cycle_msg = cycle().message().unwrap();
  let link_msg = Classification::MissingRoot.message().unwrap();
  assert!(cycle_msg.contains("must be a DAG"));
  assert!(link_msg.contains("all modules are linked"));
  assert_ne!(cycle_msg, link_msg);
  assert!(Classification::Valid.message().is_none());
}

#[test]
fn markers() {
  assert_eq!(Classification::Valid.marker(), None);
  assert_eq!(cycle().marker(), Some("notDAG"));
  assert_eq!(
    Classification::Disconnected {
      unreachable: vec!["x".to_string()]
    }
    .marker(),
    Some("invalid")
  );
}
