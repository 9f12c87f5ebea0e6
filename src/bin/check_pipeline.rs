//! CLI: validate a pipeline config (.json node map) before it is run.
//!
//! Usage: `check_pipeline [OPTIONS] <path-to-config>`
//! Example: check_pipeline --out build/config.json pipelines/detection.json
//!
//! Exits 0 when the pipeline is a DAG rooted at `source` that reaches every
//! module, 1 otherwise.
//!
//! Set RUST_LOG=pipeline_graph=trace for TRACE-level span enter/exit and events.

use clap::Parser;
use pipeline_graph::{
  Classification, DanglingEdgePolicy, PipelineGraph, ValidatorConfig, document_io,
  validate_document,
};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

const DANGLING_EDGES_ENV: &str = "PIPELINE_DANGLING_EDGES";

/// Validate a pipeline config and optionally write the checked copy.
#[derive(Parser, Debug)]
#[command(name = "check_pipeline")]
#[command(
  after_help = r#"Environment variables (override the matching flag when set):
  PIPELINE_DANGLING_EDGES   reject | sink. How to treat next_modules entries that name
                            no module (default: reject).

Examples:
  check_pipeline pipelines/detection.json
  check_pipeline --dangling-edges sink --out build/config.json pipelines/detection.json"#
)]
struct Args {
  /// reject: report a dangling edge; sink: treat unknown names as dead ends.
  #[arg(long, value_name = "POLICY", default_value_t = DanglingEdgePolicy::Reject)]
  dangling_edges: DanglingEdgePolicy,

  /// Write the validated config here (only when valid).
  #[arg(long, value_name = "PATH")]
  out: Option<PathBuf>,

  /// Path to the pipeline config (.json)
  #[arg(value_name = "path-to-config")]
  config_path: PathBuf,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  // Env var overrides the flag.
  let dangling_edges = match env::var(DANGLING_EDGES_ENV) {
    Ok(v) => match v.parse::<DanglingEdgePolicy>() {
      Ok(p) => p,
      Err(e) => {
        eprintln!("Error in {}: {}", DANGLING_EDGES_ENV, e);
        process::exit(1);
      }
    },
    Err(_) => args.dangling_edges,
  };
  let config = ValidatorConfig::default().with_dangling_edges(dangling_edges);
  info!(dangling_edges = %config.dangling_edges, path = %args.config_path.display(), "options (env or flags)");

  let doc = match document_io::load_document(&args.config_path) {
    Ok(d) => d,
    Err(e) => {
      eprintln!("Error reading {}: {}", args.config_path.display(), e);
      process::exit(1);
    }
  };

  let classification = validate_document(&doc, &config);
  info!(%classification, modules = doc.len(), "validation completed");
  if let Some(message) = classification.message() {
    eprintln!("{}", message);
    eprintln!("  Reason: {}", classification);
    if matches!(classification, Classification::DanglingEdge { .. }) {
      let graph = PipelineGraph::from_document(&doc);
      for (from, to) in graph.dangling_edges() {
        eprintln!("  Dangling: {} -> {}", from, to);
      }
    }
    process::exit(1);
  }

  println!("Pipeline is valid.");
  println!("  Modules: {}", doc.len());

  if let Some(out) = &args.out {
    if let Err(e) = document_io::save_document(out, &doc, &config) {
      eprintln!("Error writing {}: {}", out.display(), e);
      process::exit(1);
    }
    println!("  Written: {}", out.display());
  }
}
