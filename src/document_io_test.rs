//! Tests for document load/save.

use crate::config::ValidatorConfig;
use crate::document_io::{DEFAULT_CONFIG_FILENAME, load_document, save_document};
use crate::error::DocumentError;
use crate::types::{Classification, ModuleConfig, PipelineDocument, ROOT_NODE};

fn chain() -> PipelineDocument {
  let mut doc = PipelineDocument::new();
  doc.insert(
    ROOT_NODE,
    ModuleConfig::new(vec!["decode".to_string()]).with_attr("class", "DataSource"),
  );
  doc.insert("decode", ModuleConfig::default().with_attr("class", "Decoder"));
  doc
}

#[test]
fn save_then_load_preserves_document() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("nested").join(DEFAULT_CONFIG_FILENAME);
  let doc = chain();
  save_document(&path, &doc, &ValidatorConfig::default()).unwrap();
  assert!(path.exists());
  let loaded = load_document(&path).unwrap();
  assert_eq!(loaded, doc);
}

#[test]
fn invalid_document_is_never_written() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
  let mut doc = chain();
  doc.insert("orphan", ModuleConfig::default());
  let err = save_document(&path, &doc, &ValidatorConfig::default()).unwrap_err();
  match err {
    DocumentError::Invalid(c) => assert_eq!(
      c,
      Classification::Disconnected {
        unreachable: vec!["orphan".to_string()]
      }
    ),
    other => panic!("unexpected error: {}", other),
  }
  assert!(!path.exists());
}

#[test]
fn load_missing_file_returns_io_error() {
  let dir = tempfile::tempdir().unwrap();
  let r = load_document(&dir.path().join("nonexistent.json"));
  assert!(matches!(r, Err(DocumentError::Io(_))));
}

#[test]
fn load_malformed_json_returns_json_error() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("broken.json");
  std::fs::write(&path, "{\"source\": ").unwrap();
  assert!(matches!(load_document(&path), Err(DocumentError::Json(_))));
}
