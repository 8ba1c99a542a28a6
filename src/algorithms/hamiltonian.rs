//! Hamiltonian path and circuit search
//!
//! Exhaustive backtracking over the simple graph. Exponential in the worst case; intended
//! for graphs of a few dozen vertices.

use crate::storage::Graph;

/// Check whether a Hamiltonian path exists
///
/// Tries every vertex as a start and extends a simple path through unvisited neighbors
/// until all vertices are covered. The empty graph has no Hamiltonian path.
///
/// # Example
///
/// ```
/// use graph_oracle::{has_hamiltonian_circuit, has_hamiltonian_path, Graph, RawGraph};
///
/// // Star with center 1: no path can visit all three leaves
/// let star = Graph::from_raw(&RawGraph::from_lists([(1, vec![2, 3, 4])]));
/// assert!(!has_hamiltonian_path(&star));
///
/// // Square 1-2-3-4-1
/// let square = Graph::from_raw(&RawGraph::from_lists([(1, vec![2, 4]), (3, vec![2, 4])]));
/// assert!(has_hamiltonian_circuit(&square));
/// ```
#[must_use]
pub fn has_hamiltonian_path(graph: &Graph) -> bool {
    let n = graph.num_vertices();
    let mut visited = vec![false; n];

    (0..n).any(|start| {
        visited[start] = true;
        let found = extend_path(graph, start, 1, &mut visited, None);
        visited[start] = false;
        found
    })
}

/// Check whether a Hamiltonian circuit exists
///
/// A circuit through every vertex returns to its start, so searching from the first vertex
/// is enough. One vertex needs a self-loop; from two vertices on, the circuit closes when
/// the last vertex is adjacent to the first, so a single edge makes `K2` a circuit.
#[must_use]
pub fn has_hamiltonian_circuit(graph: &Graph) -> bool {
    match graph.num_vertices() {
        0 => false,
        1 => graph.has_self_loop(0),
        n => {
            let mut visited = vec![false; n];
            visited[0] = true;
            extend_path(graph, 0, 1, &mut visited, Some(0))
        }
    }
}

/// Extend a simple path ending at `last` that already covers `count` vertices
///
/// With `close_at`, a full path only succeeds if its last vertex neighbors that vertex.
fn extend_path(
    graph: &Graph,
    last: usize,
    count: usize,
    visited: &mut [bool],
    close_at: Option<usize>,
) -> bool {
    if count == visited.len() {
        return close_at.map_or(true, |start| graph.are_adjacent(last, start));
    }

    for &next in graph.neighbors(last) {
        if visited[next] {
            continue;
        }
        visited[next] = true;
        let found = extend_path(graph, next, count + 1, visited, close_at);
        visited[next] = false;
        if found {
            return true;
        }
    }

    false
}
