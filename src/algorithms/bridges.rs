//! Bridges and edge-biconnected components
//!
//! A bridge is an edge whose removal disconnects its endpoints. Detection uses the
//! discovery/low-link DFS from [`traversal`](super::traversal): tree edge `(p, c)` is a
//! bridge iff `low[c] > disc[p]`.
//!
//! Parallel edges are never bridges, since the second copy acts as a back edge.
//!
//! # Example
//!
//! ```
//! use graph_oracle::{count_biconnected_components, count_bridges, Graph, RawGraph};
//!
//! // Triangle 1-2-3 with a pendant edge 3-4
//! let raw = RawGraph::from_lists([(1, vec![2, 3]), (2, vec![3]), (3, vec![4])]);
//! let graph = Graph::from_raw(&raw);
//!
//! assert_eq!(count_bridges(&graph), 1);
//! assert_eq!(count_biconnected_components(&graph), 2);
//! ```

use super::traversal::LowLink;
use crate::storage::Graph;
use crate::NodeId;

/// Enumerate all bridges as `(smaller, larger)` vertex pairs in ascending order
#[must_use]
pub fn find_bridges(graph: &Graph) -> Vec<(NodeId, NodeId)> {
    let mut bridges: Vec<(NodeId, NodeId)> = bridge_ids(graph)
        .into_iter()
        .map(|id| {
            let edge = graph.edges()[id];
            (graph.node(edge.source), graph.node(edge.target))
        })
        .collect();
    bridges.sort_unstable();
    bridges
}

/// Count bridges
#[must_use]
pub fn count_bridges(graph: &Graph) -> usize {
    bridge_ids(graph).len()
}

/// Count edge-biconnected components (2-edge-connected blocks)
///
/// Removes every bridge and counts the connected components of what remains. Isolated
/// vertices are components of their own.
#[must_use]
pub fn count_biconnected_components(graph: &Graph) -> usize {
    let n = graph.num_vertices();
    let mut is_bridge = vec![false; graph.num_edges()];
    for id in bridge_ids(graph) {
        is_bridge[id] = true;
    }

    let mut visited = vec![false; n];
    let mut stack = Vec::new();
    let mut components = 0;

    for root in 0..n {
        if visited[root] {
            continue;
        }
        components += 1;
        visited[root] = true;
        stack.push(root);

        while let Some(node) = stack.pop() {
            for &(neighbor, edge) in graph.incident(node) {
                if !is_bridge[edge] && !visited[neighbor] {
                    visited[neighbor] = true;
                    stack.push(neighbor);
                }
            }
        }
    }

    components
}

fn bridge_ids(graph: &Graph) -> Vec<usize> {
    LowLink::new(graph.num_vertices()).bridges(graph)
}
