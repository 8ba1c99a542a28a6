//! Shortest path algorithms: Dijkstra's algorithm
//!
//! Provides shortest path computation for weighted graphs:
//! - `dijkstra`: Single-source shortest paths with non-negative weights
//! - `find_shortest_path_length`: Shortest distance between two specific nodes
//!
//! Unweighted edges count as weight 1. Parallel edges are all relaxed, so the lightest copy
//! wins; self-loops never shorten a path.
//!
//! # Example
//!
//! ```
//! use graph_oracle::{dijkstra, Graph, NodeId, RawGraph};
//!
//! // Build a weighted graph
//! let raw = RawGraph::from_weighted_lists([
//!     (0, vec![(1, 1.0), (2, 5.0)]),
//!     (1, vec![(2, 2.0)]),
//! ]);
//! let graph = Graph::from_raw(&raw);
//!
//! // Find shortest paths from node 0
//! let distances = dijkstra(&graph, NodeId(0)).unwrap();
//! assert_eq!(distances.get(&NodeId(0)), Some(&0.0));
//! assert_eq!(distances.get(&NodeId(1)), Some(&1.0));
//! assert_eq!(distances.get(&NodeId(2)), Some(&3.0)); // 0→1→2 = 3.0, not 0→2 = 5.0
//! ```

use crate::error::{GraphError, Result};
use crate::storage::Graph;
use crate::NodeId;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// State for Dijkstra's priority queue
#[derive(Clone, Copy)]
struct State {
    cost: f64,
    node: usize,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute single-source shortest paths using Dijkstra's algorithm
///
/// # Arguments
///
/// * `graph` - The normalized graph; edge weights are used as distances
/// * `source` - The starting node
///
/// # Returns
///
/// A `HashMap` mapping each reachable `NodeId` to its shortest distance from source.
/// Unreachable nodes are not included; an absent source yields an empty map.
///
/// # Errors
///
/// Returns [`GraphError::NegativeWeight`] if any edge weight is negative or NaN
///
/// # Complexity
///
/// O((V + E) log V) using a binary heap
pub fn dijkstra(graph: &Graph, source: NodeId) -> Result<HashMap<NodeId, f64>> {
    check_weights(graph)?;

    let Some(start) = graph.index_of(source) else {
        return Ok(HashMap::new());
    };

    let distances = distances_from(graph, start, None);
    Ok(distances
        .into_iter()
        .enumerate()
        .filter_map(|(i, d)| d.map(|d| (graph.node(i), d)))
        .collect())
}

/// Length of the shortest path between `source` and `target`
///
/// Returns `Ok(None)` if either endpoint is absent or `target` is unreachable.
///
/// # Errors
///
/// Returns [`GraphError::NegativeWeight`] if any edge weight is negative or NaN
///
/// # Example
///
/// ```
/// use graph_oracle::{find_shortest_path_length, Graph, NodeId, RawGraph};
///
/// let raw = RawGraph::from_weighted_lists([(1, vec![(2, 4.0), (3, 1.0)]), (3, vec![(2, 2.0)])]);
/// let graph = Graph::from_raw(&raw);
///
/// assert_eq!(find_shortest_path_length(&graph, NodeId(1), NodeId(2)).unwrap(), Some(3.0));
/// assert_eq!(find_shortest_path_length(&graph, NodeId(1), NodeId(9)).unwrap(), None);
/// ```
pub fn find_shortest_path_length(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
) -> Result<Option<f64>> {
    check_weights(graph)?;

    let (Some(start), Some(goal)) = (graph.index_of(source), graph.index_of(target)) else {
        return Ok(None);
    };

    Ok(distances_from(graph, start, Some(goal))[goal])
}

fn check_weights(graph: &Graph) -> Result<()> {
    match graph.edges().iter().find(|e| e.weight.is_nan() || e.weight < 0.0) {
        Some(edge) => Err(GraphError::NegativeWeight {
            from: graph.node(edge.source),
            to: graph.node(edge.target),
            weight: edge.weight,
        }),
        None => Ok(()),
    }
}

/// Tentative distances from `start`, stopping early once `goal` is settled
fn distances_from(graph: &Graph, start: usize, goal: Option<usize>) -> Vec<Option<f64>> {
    let edges = graph.edges();
    let mut distances: Vec<Option<f64>> = vec![None; graph.num_vertices()];
    let mut heap = BinaryHeap::new();

    // Start with source
    distances[start] = Some(0.0);
    heap.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Skip if we've found a better path
        if distances[node].is_some_and(|d| cost > d) {
            continue;
        }
        if Some(node) == goal {
            break;
        }

        for &(neighbor, edge) in graph.incident(node) {
            let next_cost = cost + edges[edge].weight;

            // Update if this path is shorter
            if distances[neighbor].map_or(true, |d| next_cost < d) {
                distances[neighbor] = Some(next_cost);
                heap.push(State {
                    cost: next_cost,
                    node: neighbor,
                });
            }
        }
    }

    distances
}
