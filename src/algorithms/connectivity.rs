//! Connectivity and bipartiteness
//!
//! - `check_connectivity`: BFS reachability between two vertices
//! - `connected_components`: Count connected components
//! - `check_bipartite`: BFS two-coloring per component
//!
//! # Example
//!
//! ```
//! use graph_oracle::{check_bipartite, check_connectivity, Graph, NodeId, RawGraph};
//!
//! // Path 1 - 2 - 3 and an isolated vertex 4
//! let raw = RawGraph::from_lists([(1, vec![2]), (2, vec![1, 3]), (3, vec![2]), (4, vec![])]);
//! let graph = Graph::from_raw(&raw);
//!
//! assert!(check_connectivity(&graph, NodeId(1), NodeId(3)));
//! assert!(!check_connectivity(&graph, NodeId(1), NodeId(4)));
//! assert!(check_bipartite(&graph));
//! ```

use super::traversal::reachable;
use crate::storage::Graph;
use crate::NodeId;
use std::collections::VecDeque;

/// Check whether `b` is reachable from `a`
///
/// A vertex is always connected to itself, even when absent from the graph. Otherwise
/// an absent endpoint is never connected.
#[must_use]
pub fn check_connectivity(graph: &Graph, a: NodeId, b: NodeId) -> bool {
    if a == b {
        return true;
    }
    match (graph.index_of(a), graph.index_of(b)) {
        (Some(start), Some(target)) => reachable(graph, start)[target],
        _ => false,
    }
}

/// Count the number of connected components
///
/// Isolated vertices form their own component; the empty graph has none. One BFS per
/// component shares a single visited set, so the whole count is `O(V + E)`.
#[must_use]
pub fn connected_components(graph: &Graph) -> usize {
    let n = graph.num_vertices();
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    let mut count = 0;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        count += 1;
        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for &neighbor in graph.neighbors(current) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
    }

    count
}

/// Check whether the graph is bipartite
///
/// Two-colors each component by BFS and fails on the first edge joining equal colors.
/// A self-loop makes a graph non-bipartite; the empty graph is bipartite.
#[must_use]
pub fn check_bipartite(graph: &Graph) -> bool {
    let n = graph.num_vertices();
    if (0..n).any(|v| graph.has_self_loop(v)) {
        return false;
    }

    let mut color: Vec<Option<bool>> = vec![None; n];
    let mut queue = VecDeque::new();

    for start in 0..n {
        if color[start].is_some() {
            continue;
        }
        color[start] = Some(true);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let side = color[current] == Some(true);
            for &neighbor in graph.neighbors(current) {
                match color[neighbor] {
                    None => {
                        color[neighbor] = Some(!side);
                        queue.push_back(neighbor);
                    }
                    Some(other) if other == side => return false,
                    Some(_) => {}
                }
            }
        }
    }

    true
}
