//! Tests for `validator`.

use crate::config::{DanglingEdgePolicy, ValidatorConfig};
use crate::graph::PipelineGraph;
use crate::types::{Classification, PipelineDocument};
use crate::validator::{validate, validate_document};

fn check(nodes: &[(&str, &[&str])]) -> Classification {
  check_with(nodes, &ValidatorConfig::default())
}

fn check_with(nodes: &[(&str, &[&str])], config: &ValidatorConfig) -> Classification {
  let g = PipelineGraph::from_edges(nodes.iter().map(|(n, next)| (*n, next.iter().copied())));
  validate(&g, config)
}

fn sink() -> ValidatorConfig {
  ValidatorConfig::default().with_dangling_edges(DanglingEdgePolicy::Sink)
}

#[test]
fn lone_root_is_valid() {
  assert_eq!(check(&[("source", &[])]), Classification::Valid);
}

#[test]
fn linear_chain_is_valid() {
  let doc = PipelineDocument::from_json(
    r#"{"source": {"next_modules": ["decode"]}, "decode": {"next_modules": ["infer"]}, "infer": {"next_modules": []}}"#,
  )
  .unwrap();
  assert_eq!(
    validate_document(&doc, &ValidatorConfig::default()),
    Classification::Valid
  );
}

#[test]
fn back_edge_to_root_is_not_dag() {
  let doc =
    PipelineDocument::from_json(r#"{"source": {"next_modules": ["a"]}, "a": {"next_modules": ["source"]}}"#)
      .unwrap();
  assert_eq!(
    validate_document(&doc, &ValidatorConfig::default()),
    Classification::NotDag {
      cycle: vec!["source".to_string(), "a".to_string(), "source".to_string()]
    }
  );
}

#[test]
fn orphan_is_disconnected() {
  let doc =
    PipelineDocument::from_json(r#"{"source": {"next_modules": []}, "orphan": {"next_modules": []}}"#)
      .unwrap();
  assert_eq!(
    validate_document(&doc, &ValidatorConfig::default()),
    Classification::Disconnected {
      unreachable: vec!["orphan".to_string()]
    }
  );
}

#[test]
fn orphan_beside_chain_is_disconnected() {
  let r = check(&[("source", &["a"]), ("a", &[]), ("b", &[])]);
  assert_eq!(
    r,
    Classification::Disconnected {
      unreachable: vec!["b".to_string()]
    }
  );
}

#[test]
fn diamond_is_valid() {
  let r = check(&[
    ("source", &["a", "b"]),
    ("a", &["c"]),
    ("b", &["c"]),
    ("c", &[]),
  ]);
  assert_eq!(r, Classification::Valid);
}

#[test]
fn self_loop_is_not_dag() {
  let r = check(&[("source", &["a"]), ("a", &["a"])]);
  assert_eq!(
    r,
    Classification::NotDag {
      cycle: vec!["a".to_string(), "a".to_string()]
    }
  );
}

#[test]
fn deep_cycle_reports_only_the_loop() {
  let r = check(&[
    ("source", &["a"]),
    ("a", &["b"]),
    ("b", &["c"]),
    ("c", &["a"]),
  ]);
  assert_eq!(
    r,
    Classification::NotDag {
      cycle: vec![
        "a".to_string(),
        "b".to_string(),
        "c".to_string(),
        "a".to_string()
      ]
    }
  );
}

#[test]
fn cycle_behind_diamond_is_found() {
  let r = check(&[
    ("source", &["a", "b"]),
    ("a", &["c"]),
    ("b", &["c"]),
    ("c", &["d"]),
    ("d", &["b"]),
  ]);
  assert!(matches!(r, Classification::NotDag { .. }));
}

#[test]
fn unreachable_cycle_is_disconnected_not_cycle() {
  let r = check(&[("source", &[]), ("x", &["y"]), ("y", &["x"])]);
  assert_eq!(
    r,
    Classification::Disconnected {
      unreachable: vec!["x".to_string(), "y".to_string()]
    }
  );
}

#[test]
fn missing_root_fails_closed() {
  let r = check(&[("decode", &["infer"]), ("infer", &[])]);
  assert_eq!(r, Classification::MissingRoot);
  let empty = validate(
    &PipelineGraph::from_document(&PipelineDocument::new()),
    &ValidatorConfig::default(),
  );
  assert_eq!(empty, Classification::MissingRoot);
}

#[test]
fn dangling_edge_rejected_by_default() {
  let r = check(&[("source", &["decode"]), ("decode", &["ghost"])]);
  assert_eq!(
    r,
    Classification::DanglingEdge {
      from: "decode".to_string(),
      to: "ghost".to_string()
    }
  );
}

#[test]
fn dangling_edge_is_a_dead_end_under_sink() {
  let r = check_with(&[("source", &["decode"]), ("decode", &["ghost"])], &sink());
  assert_eq!(r, Classification::Valid);
}

#[test]
fn dangling_target_does_not_count_as_a_module() {
  let r = check_with(&[("source", &["ghost"]), ("orphan", &[])], &sink());
  assert_eq!(
    r,
    Classification::Disconnected {
      unreachable: vec!["orphan".to_string()]
    }
  );
}

#[test]
fn duplicate_successors_are_not_a_cycle() {
  let r = check(&[("source", &["a", "a"]), ("a", &[])]);
  assert_eq!(r, Classification::Valid);
}

#[test]
fn validation_is_idempotent() {
  let g = PipelineGraph::from_edges([
    ("source", vec!["a"]),
    ("a", vec!["source"]),
    ("orphan", vec![]),
  ]);
  let config = ValidatorConfig::default();
  let first = validate(&g, &config);
  let second = validate(&g, &config);
  assert_eq!(first, second);
  assert!(matches!(first, Classification::NotDag { .. }));
}

#[test]
fn sixty_four_module_chain_is_valid() {
  let names: Vec<String> = (0..63).map(|i| format!("m{}", i)).collect();
  let mut nodes: Vec<(&str, Vec<&str>)> = vec![("source", vec![names[0].as_str()])];
  for (i, n) in names.iter().enumerate() {
    let next = names.get(i + 1).map(|s| vec![s.as_str()]).unwrap_or_default();
    nodes.push((n.as_str(), next));
  }
  let g = PipelineGraph::from_edges(nodes);
  assert_eq!(g.len(), 64);
  assert_eq!(validate(&g, &ValidatorConfig::default()), Classification::Valid);
}
