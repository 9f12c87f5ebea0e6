//! Pipeline document load/save (JSON).

use std::path::Path;

use tracing::{info, instrument};

use crate::config::ValidatorConfig;
use crate::error::DocumentError;
use crate::types::PipelineDocument;
use crate::validator::validate_document;

/// Default filename for an exported pipeline configuration.
pub const DEFAULT_CONFIG_FILENAME: &str = "config.json";

/// Loads a pipeline document from `path`. Does not validate it.
#[instrument(level = "trace", skip(path), fields(file = %path.display()))]
pub fn load_document(path: &Path) -> Result<PipelineDocument, DocumentError> {
  let bytes = std::fs::read(path)?;
  Ok(serde_json::from_slice(&bytes)?)
}

/// Validates `doc` and writes it to `path` as pretty JSON.
///
/// Nothing is written unless the document classifies as valid. Creates the
/// parent directory if needed.
#[instrument(level = "trace", skip(path, doc, config), fields(file = %path.display()))]
pub fn save_document(
  path: &Path,
  doc: &PipelineDocument,
  config: &ValidatorConfig,
) -> Result<(), DocumentError> {
  let classification = validate_document(doc, config);
  if !classification.is_valid() {
    return Err(DocumentError::Invalid(classification));
  }
  let json = doc.to_json_pretty()?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, json)?;
  info!(modules = doc.len(), "pipeline config saved");
  Ok(())
}
