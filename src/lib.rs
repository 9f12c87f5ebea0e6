//! # pipeline-graph
//!
//! Node/edge model, DAG validation and config export for video-analytics
//! pipelines composed in a visual editor.
//!
//! ## Architecture
//!
//! A pipeline is exchanged as a [`PipelineDocument`]: module name → module
//! record, where each record lists its successors in `next_modules`. Before a
//! document is exported it must classify as [`Classification::Valid`]: a DAG
//! rooted at the module named [`ROOT_NODE`] that reaches every module.
//!
//! - [`PipelineGraph`]: index-based graph ingested from a document.
//! - [`validate`]: the classification itself.
//! - [`PipelineEditor`]: editing model with validated export.
//! - [`document_io`]: load/save of config files.
//! - [`ValidateStage`]: async stage validating a stream of documents.

pub mod config;
pub mod document_io;
#[cfg(test)]
mod document_io_test;
pub mod editor;
pub mod error;
pub mod graph;
pub mod stage;
pub mod types;
pub mod validator;
#[cfg(test)]
mod validator_test;

pub use config::{DanglingEdgePolicy, ValidatorConfig};
pub use editor::{DEFAULT_MAX_NODES, EditorNode, NodeId, PipelineEditor};
pub use error::{DocumentError, EditorError, ExportError};
pub use graph::{NodeHandle, PipelineGraph, Successor};
pub use stage::{StageFailure, StageOutputs, ValidateStage};
pub use types::{
  Classification, ModuleConfig, NEXT_MODULES_KEY, ParamValue, PipelineDocument, ROOT_NODE,
};
pub use validator::{validate, validate_document};
