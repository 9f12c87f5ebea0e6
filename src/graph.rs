//! Index-based pipeline graph built from a [`PipelineDocument`].
//!
//! Every module gets a stable [`NodeHandle`] at ingestion time; adjacency is
//! stored by handle so traversal state can live in plain `Vec<bool>`s.

use std::collections::HashMap;

use tracing::instrument;

use crate::types::{PipelineDocument, ROOT_NODE};

/// Stable handle of a module inside one [`PipelineGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub usize);

/// Target of one `next_modules` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Successor {
  Known(NodeHandle),
  /// Name that matches no module in the document.
  Dangling(String),
}

/// Directed pipeline graph with handle-indexed adjacency.
#[derive(Debug, Clone, Default)]
pub struct PipelineGraph {
  names: Vec<String>,
  index: HashMap<String, NodeHandle>,
  adjacency: Vec<Vec<Successor>>,
}

impl PipelineGraph {
  /// Builds the graph from a document snapshot. Successor order follows each
  /// module's `next_modules`; duplicates are kept.
  #[instrument(level = "trace", skip(doc), fields(modules = doc.len()))]
  pub fn from_document(doc: &PipelineDocument) -> Self {
    let names: Vec<String> = doc.names().map(str::to_string).collect();
    let index: HashMap<String, NodeHandle> = names
      .iter()
      .enumerate()
      .map(|(i, n)| (n.clone(), NodeHandle(i)))
      .collect();
    let adjacency = doc
      .modules
      .values()
      .map(|m| {
        m.next_modules
          .iter()
          .map(|next| match index.get(next) {
            Some(h) => Successor::Known(*h),
            None => Successor::Dangling(next.clone()),
          })
          .collect()
      })
      .collect();
    Self {
      names,
      index,
      adjacency,
    }
  }

  /// Builds a graph from `(name, successors)` pairs. A repeated name keeps its
  /// last successor list.
  pub fn from_edges<'a, I, S>(nodes: I) -> Self
  where
    I: IntoIterator<Item = (&'a str, S)>,
    S: IntoIterator<Item = &'a str>,
  {
    let doc: PipelineDocument = nodes
      .into_iter()
      .map(|(name, next)| {
        (
          name.to_string(),
          crate::types::ModuleConfig::new(next.into_iter().map(str::to_string).collect()),
        )
      })
      .collect();
    Self::from_document(&doc)
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  pub fn handle(&self, name: &str) -> Option<NodeHandle> {
    self.index.get(name).copied()
  }

  pub fn root(&self) -> Option<NodeHandle> {
    self.handle(ROOT_NODE)
  }

  /// Name of the module behind `handle`.
  ///
  /// Panics if the handle was not produced by this graph.
  pub fn name(&self, handle: NodeHandle) -> &str {
    &self.names[handle.0]
  }

  /// Successors of `handle` in `next_modules` order.
  ///
  /// Panics if the handle was not produced by this graph.
  pub fn successors(&self, handle: NodeHandle) -> &[Successor] {
    &self.adjacency[handle.0]
  }

  pub fn handles(&self) -> impl Iterator<Item = NodeHandle> + '_ {
    (0..self.names.len()).map(NodeHandle)
  }

  /// All `(from, to)` pairs whose target names no module, in handle order.
  pub fn dangling_edges(&self) -> Vec<(&str, &str)> {
    self
      .handles()
      .flat_map(|h| {
        self.successors(h).iter().filter_map(move |s| match s {
          Successor::Dangling(to) => Some((self.name(h), to.as_str())),
          Successor::Known(_) => None,
        })
      })
      .collect()
  }
}
