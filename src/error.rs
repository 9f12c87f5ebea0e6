//! Error types for editing, exporting and persisting pipelines.
//!
//! Validation outcomes are not errors; they surface here only wrapped in
//! [`ExportError::Invalid`] or [`DocumentError::Invalid`] when an export is refused.

use thiserror::Error;

use crate::editor::NodeId;
use crate::types::Classification;

/// Refused editor mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
  #[error("only support max nodes number: {max}")]
  NodeLimit { max: usize },
  #[error("unknown node id {0}")]
  UnknownNode(NodeId),
  #[error("node '{0}' cannot be removed")]
  NotRemovable(String),
  #[error("node {0} cannot be connected to itself")]
  Loopback(NodeId),
  #[error("parameter '{0}' is reserved")]
  ReservedKey(String),
}

/// Refused export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
  #[error("pipeline cannot be exported: {0}")]
  Invalid(Classification),
}

impl ExportError {
  pub fn classification(&self) -> &Classification {
    match self {
      ExportError::Invalid(c) => c,
    }
  }
}

/// Failure loading or saving a pipeline document.
#[derive(Debug, Error)]
pub enum DocumentError {
  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),
  #[error("invalid JSON: {0}")]
  Json(#[from] serde_json::Error),
  #[error("pipeline cannot be saved: {0}")]
  Invalid(Classification),
}

impl From<ExportError> for DocumentError {
  fn from(e: ExportError) -> Self {
    match e {
      ExportError::Invalid(c) => DocumentError::Invalid(c),
    }
  }
}
