//! Pipeline document and validation types.
//!
//! A pipeline document is a flat map of module name to [`ModuleConfig`]; the
//! module named [`ROOT_NODE`] is the entry point of every pipeline.

mod classification;
#[cfg(test)]
mod classification_test;
mod module_config;
mod param_value;
mod pipeline_document;

pub use classification::Classification;
pub use module_config::{ModuleConfig, NEXT_MODULES_KEY};
pub use param_value::ParamValue;
pub use pipeline_document::{PipelineDocument, ROOT_NODE};
