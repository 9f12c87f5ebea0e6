//! DAG validation of a pipeline graph rooted at [`ROOT_NODE`](crate::ROOT_NODE).
//!
//! Depth-first traversal from the root with an explicit frame stack. A module
//! seen again while it is still on the current path is a cycle; a module
//! reached through two disjoint paths (a diamond) is not. Once traversal ends,
//! every module must have been reached.

use tracing::{debug, instrument};

use crate::config::{DanglingEdgePolicy, ValidatorConfig};
use crate::graph::{NodeHandle, PipelineGraph, Successor};
use crate::types::{Classification, PipelineDocument};

/// One DFS frame: the module and the position of its next unexamined successor.
struct Frame {
  node: NodeHandle,
  next: usize,
}

/// Classifies `graph`. Pure: the same snapshot always yields the same result.
#[instrument(level = "trace", skip(graph, config), fields(modules = graph.len()))]
pub fn validate(graph: &PipelineGraph, config: &ValidatorConfig) -> Classification {
  let Some(root) = graph.root() else {
    debug!("root module missing");
    return Classification::MissingRoot;
  };

  let mut visited = vec![false; graph.len()];
  let mut on_path = vec![false; graph.len()];
  visited[root.0] = true;
  on_path[root.0] = true;
  let mut reached = 1usize;
  let mut stack = vec![Frame { node: root, next: 0 }];

  while let Some(frame) = stack.last_mut() {
    let node = frame.node;
    let successors = graph.successors(node);
    if frame.next == successors.len() {
      on_path[node.0] = false;
      stack.pop();
      continue;
    }
    let successor = &successors[frame.next];
    frame.next += 1;

    let next = match successor {
      Successor::Known(h) => *h,
      Successor::Dangling(to) => match config.dangling_edges {
        DanglingEdgePolicy::Sink => continue,
        DanglingEdgePolicy::Reject => {
          debug!(from = graph.name(node), to = %to, "dangling edge");
          return Classification::DanglingEdge {
            from: graph.name(node).to_string(),
            to: to.clone(),
          };
        }
      },
    };

    if on_path[next.0] {
      let cycle = cycle_names(graph, &stack, next);
      debug!(cycle = ?cycle, "cycle detected");
      return Classification::NotDag { cycle };
    }
    // Fully explored already: nothing below it can reach the current path.
    if visited[next.0] {
      continue;
    }
    visited[next.0] = true;
    on_path[next.0] = true;
    reached += 1;
    stack.push(Frame { node: next, next: 0 });
  }

  if reached == graph.len() {
    debug!(reached, "pipeline is a valid DAG");
    return Classification::Valid;
  }
  let unreachable: Vec<String> = graph
    .handles()
    .filter(|h| !visited[h.0])
    .map(|h| graph.name(h).to_string())
    .collect();
  debug!(reached, total = graph.len(), unreachable = ?unreachable, "pipeline is disconnected");
  Classification::Disconnected { unreachable }
}

/// Convenience wrapper: ingest `doc` and classify it.
pub fn validate_document(doc: &PipelineDocument, config: &ValidatorConfig) -> Classification {
  validate(&PipelineGraph::from_document(doc), config)
}

/// Path slice from the first occurrence of `repeated` to the top of the stack,
/// closed with `repeated` again.
fn cycle_names(graph: &PipelineGraph, stack: &[Frame], repeated: NodeHandle) -> Vec<String> {
  let start = stack
    .iter()
    .position(|f| f.node == repeated)
    .unwrap_or(0);
  stack[start..]
    .iter()
    .map(|f| graph.name(f.node).to_string())
    .chain(std::iter::once(graph.name(repeated).to_string()))
    .collect()
}
