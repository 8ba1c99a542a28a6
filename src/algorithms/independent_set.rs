//! Maximum independent set on general graphs (branch and bound)

use crate::storage::Graph;

/// Size of the largest independent set
///
/// Decides vertices in index order, trying "include" (when no chosen neighbor blocks it)
/// before "exclude". A branch is cut once the vertices still available cannot beat the best
/// size found. Self-loops are ignored. Exponential; intended for small graphs.
///
/// # Example
///
/// ```
/// use graph_oracle::{find_max_independent_set_size, Graph, RawGraph};
///
/// // Path 1 - 2 - 3 - 4 - 5: {1, 3, 5}
/// let raw = RawGraph::from_lists([(1, vec![2]), (2, vec![3]), (3, vec![4]), (4, vec![5])]);
/// let graph = Graph::from_raw(&raw);
///
/// assert_eq!(find_max_independent_set_size(&graph), 3);
/// ```
#[must_use]
pub fn find_max_independent_set_size(graph: &Graph) -> usize {
    let mut search = Search {
        graph,
        blocked: vec![0; graph.num_vertices()],
        best: 0,
    };
    search.branch(0, 0);
    search.best
}

struct Search<'a> {
    graph: &'a Graph,
    /// Number of chosen neighbors per vertex
    blocked: Vec<usize>,
    best: usize,
}

impl Search<'_> {
    fn branch(&mut self, next: usize, size: usize) {
        let available = self.blocked[next..].iter().filter(|&&b| b == 0).count();
        if size + available <= self.best {
            return;
        }
        if next == self.blocked.len() {
            self.best = size;
            return;
        }

        if self.blocked[next] == 0 {
            self.mark(next, 1);
            self.branch(next + 1, size + 1);
            self.mark(next, -1);
        }
        self.branch(next + 1, size);
    }

    fn mark(&mut self, vertex: usize, delta: isize) {
        for &neighbor in self.graph.neighbors(vertex) {
            self.blocked[neighbor] = self.blocked[neighbor].saturating_add_signed(delta);
        }
    }
}
