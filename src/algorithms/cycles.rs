//! Cycle structure: triangles, simple cycles, girth
//!
//! All three analyzers work on the simple graph: self-loops and parallel edges are not
//! counted as cycles.
//!
//! # Example
//!
//! ```
//! use graph_oracle::{count_cycles, count_triangles, find_minimum_cycle, Graph, RawGraph};
//!
//! // K4: four triangles, seven simple cycles, girth 3
//! let raw = RawGraph::from_lists([(1, vec![2, 3, 4]), (2, vec![3, 4]), (3, vec![4])]);
//! let graph = Graph::from_raw(&raw);
//!
//! assert_eq!(count_triangles(&graph), 4);
//! assert_eq!(count_cycles(&graph), 7);
//! assert_eq!(find_minimum_cycle(&graph), Some(3));
//! ```

use super::traversal::BfsTree;
use crate::storage::Graph;
use std::collections::HashSet;

/// Count triangles
///
/// For every vertex, tests each unordered pair of its neighbors for adjacency. Each
/// triangle is seen once from each of its three corners.
#[must_use]
pub fn count_triangles(graph: &Graph) -> usize {
    let mut count = 0;

    for v in 0..graph.num_vertices() {
        let neighbors = graph.neighbors(v);
        for (i, &a) in neighbors.iter().enumerate() {
            for &b in &neighbors[i + 1..] {
                if graph.are_adjacent(a, b) {
                    count += 1;
                }
            }
        }
    }

    count / 3
}

/// Count distinct simple cycles of length at least 3
///
/// Each search starts at a vertex `s` and only extends to vertices greater than `s`, so
/// `s` is the minimum of every cycle it finds. The two traversal directions of a cycle are
/// merged by keeping the lexicographically smaller of a path and its reverse.
#[must_use]
pub fn count_cycles(graph: &Graph) -> usize {
    let mut cycles: HashSet<Vec<usize>> = HashSet::new();
    let mut on_path = vec![false; graph.num_vertices()];

    for start in 0..graph.num_vertices() {
        let mut path = vec![start];
        on_path[start] = true;
        extend_cycles(graph, start, &mut path, &mut on_path, &mut cycles);
        on_path[start] = false;
    }

    cycles.len()
}

fn extend_cycles(
    graph: &Graph,
    start: usize,
    path: &mut Vec<usize>,
    on_path: &mut [bool],
    cycles: &mut HashSet<Vec<usize>>,
) {
    let Some(&last) = path.last() else {
        return;
    };

    for &next in graph.neighbors(last) {
        if next == start && path.len() >= 3 {
            cycles.insert(canonical_cycle(path));
        } else if next > start && !on_path[next] {
            on_path[next] = true;
            path.push(next);
            extend_cycles(graph, start, path, on_path, cycles);
            path.pop();
            on_path[next] = false;
        }
    }
}

/// Smaller of `[s, a, .., z]` and `[s, z, .., a]`
fn canonical_cycle(path: &[usize]) -> Vec<usize> {
    let mut reversed = Vec::with_capacity(path.len());
    reversed.push(path[0]);
    reversed.extend(path[1..].iter().rev());

    if reversed.as_slice() < path {
        reversed
    } else {
        path.to_vec()
    }
}

/// Length of the shortest cycle (girth)
///
/// Runs a BFS from every vertex; a non-tree edge `(u, v)` closes a cycle of length at most
/// `dist[u] + dist[v] + 1`. Returns `None` for an acyclic graph.
#[must_use]
pub fn find_minimum_cycle(graph: &Graph) -> Option<usize> {
    let mut best: Option<usize> = None;

    for start in 0..graph.num_vertices() {
        let tree = BfsTree::run(graph, start);
        for &u in &tree.order {
            let Some(du) = tree.dist[u] else { continue };
            for &v in graph.neighbors(u) {
                if tree.parent[u] == Some(v) || tree.parent[v] == Some(u) {
                    continue;
                }
                if let Some(dv) = tree.dist[v] {
                    let length = du + dv + 1;
                    best = Some(best.map_or(length, |b| b.min(length)));
                }
            }
        }
    }

    best
}
