//! Async validation stage: validates a stream of pipeline documents.
//!
//! Valid documents are forwarded on `out`, everything else on `error`
//! together with its [`Classification`].

use std::pin::Pin;

use futures::{Stream, StreamExt};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, instrument};

use crate::config::ValidatorConfig;
use crate::types::{Classification, PipelineDocument};
use crate::validator::validate_document;

/// Channel capacity of each stage output.
const CHANNEL_CAPACITY: usize = 16;

/// Boxed stream of stage items.
pub type StageStream<T> = Pin<Box<dyn Stream<Item = T> + Send>>;

/// Document rejected by the stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageFailure {
  pub document: PipelineDocument,
  pub classification: Classification,
}

/// Output streams of [`ValidateStage::run`].
pub struct StageOutputs {
  pub out: StageStream<PipelineDocument>,
  pub error: StageStream<StageFailure>,
}

/// Stage that validates each incoming document.
#[derive(Debug, Clone)]
pub struct ValidateStage {
  /// Stage display name.
  name: String,
  config: ValidatorConfig,
}

impl ValidateStage {
  /// Creates a new stage with the given display name.
  pub fn new(name: impl Into<String>, config: ValidatorConfig) -> Self {
    Self {
      name: name.into(),
      config,
    }
  }

  /// Spawns the validation task on the current tokio runtime. Both outputs end
  /// once `input` ends and its items are drained.
  ///
  /// Each output buffers at most 16 items; a consumer that reads only one of
  /// them stalls the stage once the other fills up.
  #[instrument(level = "trace", skip(self, input), fields(stage = %self.name))]
  pub fn run<S>(&self, input: S) -> StageOutputs
  where
    S: Stream<Item = PipelineDocument> + Send + 'static,
  {
    let (out_tx, out_rx) = tokio::sync::mpsc::channel(CHANNEL_CAPACITY);
    let (err_tx, err_rx) = tokio::sync::mpsc::channel(CHANNEL_CAPACITY);
    let config = self.config.clone();
    let name = self.name.clone();

    tokio::spawn(async move {
      let mut s = Box::pin(input);
      while let Some(document) = s.next().await {
        let classification = validate_document(&document, &config);
        debug!(stage = %name, %classification, "document validated");
        if classification.is_valid() {
          let _ = out_tx.send(document).await;
        } else {
          let _ = err_tx
            .send(StageFailure {
              document,
              classification,
            })
            .await;
        }
      }
    });

    StageOutputs {
      out: Box::pin(ReceiverStream::new(out_rx)),
      error: Box::pin(ReceiverStream::new(err_rx)),
    }
  }
}
