//! Eulerian path and circuit existence
//!
//! Degrees follow the multigraph: parallel edges count individually and a self-loop adds 2.
//! Only vertices that carry at least one edge must be connected.

use crate::storage::Graph;

/// Check whether an Eulerian path exists
///
/// True when the edge-bearing vertices are connected and 0 or 2 vertices have odd degree.
/// A graph without edges has a (trivial) Eulerian path.
///
/// # Example
///
/// ```
/// use graph_oracle::{has_eulerian_circuit, has_eulerian_path, Graph, RawGraph};
///
/// // Path 1 - 2 - 3: endpoints have odd degree
/// let raw = RawGraph::from_lists([(1, vec![2]), (2, vec![3])]);
/// let graph = Graph::from_raw(&raw);
///
/// assert!(has_eulerian_path(&graph));
/// assert!(!has_eulerian_circuit(&graph));
/// ```
#[must_use]
pub fn has_eulerian_path(graph: &Graph) -> bool {
    edge_vertices_connected(graph) && matches!(odd_degree_count(graph), 0 | 2)
}

/// Check whether an Eulerian circuit exists
///
/// True when the edge-bearing vertices are connected and every degree is even.
#[must_use]
pub fn has_eulerian_circuit(graph: &Graph) -> bool {
    edge_vertices_connected(graph) && odd_degree_count(graph) == 0
}

fn odd_degree_count(graph: &Graph) -> usize {
    (0..graph.num_vertices())
        .filter(|&v| graph.degree(v) % 2 == 1)
        .count()
}

/// Connectivity of the subgraph induced by vertices with degree > 0
///
/// A vertex whose only edges are self-loops has no neighbors, so it is connected only
/// when it is the sole edge-bearing vertex.
fn edge_vertices_connected(graph: &Graph) -> bool {
    let n = graph.num_vertices();
    let Some(start) = (0..n).find(|&v| graph.degree(v) > 0) else {
        return true;
    };

    let mut visited = vec![false; n];
    let mut stack = vec![start];
    visited[start] = true;

    while let Some(node) = stack.pop() {
        for &neighbor in graph.neighbors(node) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                stack.push(neighbor);
            }
        }
    }

    (0..n).all(|v| graph.degree(v) == 0 || visited[v])
}
