//! Tree analyzers: diameter, centroid, lowest common ancestor, maximum independent set
//!
//! Every analyzer first checks [`is_tree`] and returns [`GraphError::NotATree`] otherwise.
//! Parent/depth tables come from one BFS (rooted at the first vertex, or at `NodeId(1)`
//! for LCA) and subtree aggregates are folded in reverse BFS order, so no analyzer
//! recurses.
//!
//! # Example
//!
//! ```
//! use graph_oracle::{find_tree_centroid, find_tree_diameter, find_tree_lca, Graph, NodeId, RawGraph};
//!
//! //     1
//! //    / \
//! //   2   3
//! //  / \
//! // 4   5
//! let raw = RawGraph::from_lists([(1, vec![2, 3]), (2, vec![4, 5])]);
//! let graph = Graph::from_raw(&raw);
//!
//! assert_eq!(find_tree_diameter(&graph).unwrap(), 3);
//! assert_eq!(find_tree_centroid(&graph).unwrap(), Some(NodeId(2)));
//! assert_eq!(find_tree_lca(&graph, NodeId(4), NodeId(5)).unwrap(), Some(NodeId(2)));
//! ```

use super::traversal::{reachable, BfsTree};
use crate::error::{GraphError, Result};
use crate::storage::Graph;
use crate::NodeId;

/// Root of the tree for LCA queries
pub const LCA_ROOT: NodeId = NodeId(1);

/// Check whether the graph is a tree: connected with exactly `n - 1` edges
///
/// Self-loops and parallel edges count as edges, so a multigraph with either is never a
/// tree. The empty graph is accepted.
#[must_use]
pub fn is_tree(graph: &Graph) -> bool {
    let n = graph.num_vertices();
    if n == 0 {
        return true;
    }
    graph.num_edges() == n - 1 && reachable(graph, 0).into_iter().all(|seen| seen)
}

fn require_tree(graph: &Graph) -> Result<()> {
    if is_tree(graph) {
        Ok(())
    } else {
        Err(GraphError::NotATree {
            vertices: graph.num_vertices(),
            edges: graph.num_edges(),
        })
    }
}

/// Number of edges on the longest path of the tree
///
/// Two BFS passes: the farthest vertex from any start is an endpoint of a longest path.
///
/// # Errors
///
/// Returns [`GraphError::NotATree`] if the graph is not a tree
pub fn find_tree_diameter(graph: &Graph) -> Result<usize> {
    require_tree(graph)?;
    if graph.is_empty() {
        return Ok(0);
    }

    let (far, _) = BfsTree::run(graph, 0).farthest();
    let (_, diameter) = BfsTree::run(graph, far).farthest();
    Ok(diameter)
}

/// Vertex whose removal leaves the smallest largest component
///
/// Ties go to the smallest identifier. Returns `None` for the empty graph.
///
/// # Errors
///
/// Returns [`GraphError::NotATree`] if the graph is not a tree
pub fn find_tree_centroid(graph: &Graph) -> Result<Option<NodeId>> {
    require_tree(graph)?;
    let n = graph.num_vertices();
    if n == 0 {
        return Ok(None);
    }

    let tree = BfsTree::run(graph, 0);
    let mut size = vec![1usize; n];
    let mut heaviest_child = vec![0usize; n];
    for &v in tree.order.iter().rev() {
        if let Some(p) = tree.parent[v] {
            size[p] += size[v];
            heaviest_child[p] = heaviest_child[p].max(size[v]);
        }
    }

    let centroid = (0..n).min_by_key(|&v| (heaviest_child[v].max(n - size[v]), v));
    Ok(centroid.map(|v| graph.node(v)))
}

/// Lowest common ancestor of `a` and `b` with the tree rooted at [`LCA_ROOT`]
///
/// Returns `None` if the root, `a` or `b` is absent.
///
/// # Errors
///
/// Returns [`GraphError::NotATree`] if the graph is not a tree
pub fn find_tree_lca(graph: &Graph, a: NodeId, b: NodeId) -> Result<Option<NodeId>> {
    require_tree(graph)?;
    let (Some(root), Some(mut a), Some(mut b)) =
        (graph.index_of(LCA_ROOT), graph.index_of(a), graph.index_of(b))
    else {
        return Ok(None);
    };

    let tree = BfsTree::run(graph, root);
    let depth = |v: usize| tree.dist[v].unwrap_or(0);
    let step = |v: usize| tree.parent[v].unwrap_or(root);

    while depth(a) > depth(b) {
        a = step(a);
    }
    while depth(b) > depth(a) {
        b = step(b);
    }
    while a != b {
        a = step(a);
        b = step(b);
    }

    Ok(Some(graph.node(a)))
}

/// Size of the largest independent set of the tree
///
/// Per vertex, `take = 1 + Σ skip(child)` and `skip = Σ max(take, skip)(child)`; the answer
/// is the better of the two at the root. Returns 0 for the empty graph.
///
/// # Errors
///
/// Returns [`GraphError::NotATree`] if the graph is not a tree
pub fn find_tree_max_independent_set(graph: &Graph) -> Result<usize> {
    require_tree(graph)?;
    let n = graph.num_vertices();
    if n == 0 {
        return Ok(0);
    }

    let tree = BfsTree::run(graph, 0);
    let mut take = vec![1usize; n];
    let mut skip = vec![0usize; n];
    for &v in tree.order.iter().rev() {
        if let Some(p) = tree.parent[v] {
            take[p] += skip[v];
            skip[p] += take[v].max(skip[v]);
        }
    }

    Ok(take[0].max(skip[0]))
}
