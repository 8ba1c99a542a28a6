//! Maximum clique via Bron–Kerbosch with pivoting
//!
//! State is `(R, P, X)`: the clique so far, candidates that extend it, and vertices already
//! explored. Only the size of `R` is tracked since callers need the clique number.

use crate::storage::Graph;

/// Size of the largest clique (clique number)
///
/// The pivot is the vertex of `P ∪ X` with the most neighbors in `P`, and only candidates
/// not adjacent to it are branched on. Self-loops and parallel edges are ignored. Returns
/// 0 for the empty graph.
///
/// # Example
///
/// ```
/// use graph_oracle::{find_max_clique_size, Graph, RawGraph};
///
/// // K4 on {1,2,3,4} plus a pendant vertex 5
/// let raw = RawGraph::from_lists([(1, vec![2, 3, 4]), (2, vec![3, 4]), (3, vec![4]), (4, vec![5])]);
/// let graph = Graph::from_raw(&raw);
///
/// assert_eq!(find_max_clique_size(&graph), 4);
/// ```
#[must_use]
pub fn find_max_clique_size(graph: &Graph) -> usize {
    let mut best = 0;
    let candidates: Vec<usize> = (0..graph.num_vertices()).collect();
    expand(graph, 0, candidates, Vec::new(), &mut best);
    best
}

fn expand(graph: &Graph, size: usize, mut p: Vec<usize>, mut x: Vec<usize>, best: &mut usize) {
    if p.is_empty() && x.is_empty() {
        *best = (*best).max(size);
        return;
    }
    if size + p.len() <= *best {
        return;
    }

    let Some(pivot) = p
        .iter()
        .chain(x.iter())
        .copied()
        .max_by_key(|&u| p.iter().filter(|&&v| graph.are_adjacent(u, v)).count())
    else {
        return;
    };

    let branches: Vec<usize> = p
        .iter()
        .copied()
        .filter(|&v| !graph.are_adjacent(pivot, v))
        .collect();

    for v in branches {
        let next_p = p.iter().copied().filter(|&u| graph.are_adjacent(u, v)).collect();
        let next_x = x.iter().copied().filter(|&u| graph.are_adjacent(u, v)).collect();
        expand(graph, size + 1, next_p, next_x, best);

        p.retain(|&u| u != v);
        x.push(v);
    }
}
