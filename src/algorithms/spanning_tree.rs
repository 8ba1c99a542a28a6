//! Minimum and second-minimum spanning trees (Kruskal)
//!
//! Candidate edges are the canonical vertex pairs of the graph: parallel edges collapse to
//! their lightest copy and self-loops are dropped. Candidates are sorted by weight (ties in
//! ascending endpoint order) and merged greedily with a [`UnionFind`].
//!
//! # Example
//!
//! ```
//! use graph_oracle::{find_mst_weight, find_second_mst_weight, Graph, RawGraph};
//!
//! // Triangle with weights 1-2: 1, 2-3: 2, 1-3: 4
//! let raw = RawGraph::from_weighted_lists([(1, vec![(2, 1.0), (3, 4.0)]), (2, vec![(3, 2.0)])]);
//! let graph = Graph::from_raw(&raw);
//!
//! assert_eq!(find_mst_weight(&graph), 3.0);
//! assert_eq!(find_second_mst_weight(&graph), Some(5.0));
//! ```

use super::union_find::UnionFind;
use crate::storage::Graph;
use crate::NodeId;
use std::collections::VecDeque;

/// A spanning tree (or the failed attempt at one)
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    /// Total weight; `f64::INFINITY` when the graph is disconnected
    pub weight: f64,
    /// Tree edges as `(smaller, larger, weight)` in the order Kruskal accepted them
    pub edges: Vec<(NodeId, NodeId, f64)>,
}

impl SpanningTree {
    /// `true` if the graph was connected
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.weight.is_finite()
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    a: usize,
    b: usize,
    weight: f64,
}

/// Kruskal's minimum spanning tree
///
/// Stops after `n - 1` merges. A disconnected graph yields weight `f64::INFINITY` and no
/// edges; the empty and single-vertex graphs yield weight 0 and no edges.
#[must_use]
pub fn minimum_spanning_tree(graph: &Graph) -> SpanningTree {
    let (tree, _) = kruskal(graph);
    SpanningTree {
        weight: tree.weight,
        edges: tree
            .chosen
            .iter()
            .map(|c| (graph.node(c.a), graph.node(c.b), c.weight))
            .collect(),
    }
}

/// Total weight of a minimum spanning tree (`f64::INFINITY` if disconnected)
#[must_use]
pub fn find_mst_weight(graph: &Graph) -> f64 {
    kruskal(graph).0.weight
}

/// Edges of a minimum spanning tree (empty if disconnected)
#[must_use]
pub fn find_mst_edges(graph: &Graph) -> Vec<(NodeId, NodeId, f64)> {
    minimum_spanning_tree(graph).edges
}

/// Weight of the cheapest spanning tree strictly heavier than the minimum
///
/// Every candidate edge `(u, v, w)` outside the MST can replace the heaviest tree edge on
/// the `u`–`v` tree path whose weight is strictly below `w`. The answer is the smallest
/// resulting weight. Replacements of equal weight produce another minimum tree and are not
/// counted.
///
/// Returns `None` when no strictly heavier spanning tree exists, the graph is
/// disconnected, or it has fewer than two vertices.
#[must_use]
pub fn find_second_mst_weight(graph: &Graph) -> Option<f64> {
    let (tree, rejected) = kruskal(graph);
    if graph.num_vertices() < 2 || !tree.weight.is_finite() {
        return None;
    }

    let mut tree_adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); graph.num_vertices()];
    for c in &tree.chosen {
        tree_adjacency[c.a].push((c.b, c.weight));
        tree_adjacency[c.b].push((c.a, c.weight));
    }

    let mut best: Option<f64> = None;
    for edge in rejected {
        let Some(replaced) = heaviest_below(&tree_adjacency, edge.a, edge.b, edge.weight) else {
            continue;
        };
        let candidate = tree.weight + (edge.weight - replaced);
        if candidate > tree.weight && best.map_or(true, |b| candidate < b) {
            best = Some(candidate);
        }
    }

    best
}

struct Kruskal {
    weight: f64,
    chosen: Vec<Candidate>,
}

/// Run Kruskal; returns the tree and the candidates it did not take
fn kruskal(graph: &Graph) -> (Kruskal, Vec<Candidate>) {
    let n = graph.num_vertices();
    let mut candidates = canonical_candidates(graph);
    candidates.sort_by(|x, y| x.weight.total_cmp(&y.weight));

    let mut sets = UnionFind::new(n);
    let mut chosen = Vec::with_capacity(n.saturating_sub(1));
    let mut rejected = Vec::new();

    for candidate in candidates {
        if chosen.len() + 1 < n && sets.union(candidate.a, candidate.b) {
            chosen.push(candidate);
        } else {
            rejected.push(candidate);
        }
    }

    if n > 1 && chosen.len() + 1 < n {
        let tree = Kruskal {
            weight: f64::INFINITY,
            chosen: Vec::new(),
        };
        return (tree, rejected);
    }

    let weight: f64 = chosen.iter().map(|c| c.weight).sum();
    (Kruskal { weight, chosen }, rejected)
}

/// Lightest copy of each non-loop vertex pair, in `(source, target)` order
fn canonical_candidates(graph: &Graph) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();

    for edge in graph.edges().iter().filter(|e| !e.is_loop()) {
        match candidates.last_mut() {
            Some(last) if last.a == edge.source && last.b == edge.target => {
                last.weight = last.weight.min(edge.weight);
            }
            _ => candidates.push(Candidate {
                a: edge.source,
                b: edge.target,
                weight: edge.weight,
            }),
        }
    }

    candidates
}

/// Heaviest weight strictly below `limit` on the tree path from `from` to `to`
fn heaviest_below(tree: &[Vec<(usize, f64)>], from: usize, to: usize, limit: f64) -> Option<f64> {
    let mut parent: Vec<Option<(usize, f64)>> = vec![None; tree.len()];
    let mut visited = vec![false; tree.len()];
    let mut queue = VecDeque::from([from]);
    visited[from] = true;

    while let Some(node) = queue.pop_front() {
        if node == to {
            break;
        }
        for &(next, weight) in &tree[node] {
            if !visited[next] {
                visited[next] = true;
                parent[next] = Some((node, weight));
                queue.push_back(next);
            }
        }
    }

    let mut best: Option<f64> = None;
    let mut node = to;
    while let Some((prev, weight)) = parent[node] {
        if weight < limit && best.map_or(true, |b| weight > b) {
            best = Some(weight);
        }
        node = prev;
    }

    best
}
