//! Traversal primitives (BFS reachability, BFS layers, low-link DFS)
//!
//! Shared building blocks for connectivity, bridge, cycle and tree analyzers. All work on
//! dense vertex indices of a normalized [`Graph`].

use crate::storage::Graph;
use crate::NodeId;
use std::collections::{HashMap, VecDeque};

/// Breadth-First Search from source node
///
/// Returns every vertex reachable from `source` (including itself) in ascending order, or
/// an empty vector if `source` is not in the graph.
///
/// # Example
///
/// ```
/// use graph_oracle::{bfs, Graph, NodeId, RawGraph};
///
/// let raw = RawGraph::from_lists([(1, vec![2]), (2, vec![3]), (4, vec![])]);
/// let graph = Graph::from_raw(&raw);
///
/// let reachable = bfs(&graph, NodeId(1));
/// assert_eq!(reachable, vec![NodeId(1), NodeId(2), NodeId(3)]);
/// ```
#[must_use]
pub fn bfs(graph: &Graph, source: NodeId) -> Vec<NodeId> {
    let Some(start) = graph.index_of(source) else {
        return Vec::new();
    };

    reachable(graph, start)
        .iter()
        .enumerate()
        .filter(|(_, seen)| **seen)
        .map(|(i, _)| graph.node(i))
        .collect()
}

/// Hop distance from `source` to every reachable vertex
///
/// Unreachable vertices are not included in the map.
#[must_use]
pub fn bfs_distances(graph: &Graph, source: NodeId) -> HashMap<NodeId, usize> {
    let Some(start) = graph.index_of(source) else {
        return HashMap::new();
    };

    let tree = BfsTree::run(graph, start);
    tree.order
        .iter()
        .filter_map(|&v| tree.dist[v].map(|d| (graph.node(v), d)))
        .collect()
}

/// Visited flags of a BFS from `start`
pub(crate) fn reachable(graph: &Graph, start: usize) -> Vec<bool> {
    let mut visited = vec![false; graph.num_vertices()];
    let mut queue = VecDeque::new();

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

    visited
}

/// Layered BFS result: distance, parent and visit order
pub(crate) struct BfsTree {
    pub(crate) dist: Vec<Option<usize>>,
    pub(crate) parent: Vec<Option<usize>>,
    pub(crate) order: Vec<usize>,
}

impl BfsTree {
    pub(crate) fn run(graph: &Graph, start: usize) -> Self {
        let n = graph.num_vertices();
        let mut dist = vec![None; n];
        let mut parent = vec![None; n];
        let mut order = Vec::with_capacity(n);
        let mut queue = VecDeque::new();

        dist[start] = Some(0);
        queue.push_back((start, 0));

        while let Some((current, d)) = queue.pop_front() {
            order.push(current);
            for &neighbor in graph.neighbors(current) {
                if dist[neighbor].is_none() {
                    dist[neighbor] = Some(d + 1);
                    parent[neighbor] = Some(current);
                    queue.push_back((neighbor, d + 1));
                }
            }
        }

        Self {
            dist,
            parent,
            order,
        }
    }

    /// Farthest visited vertex (first in visit order on ties) and its distance
    pub(crate) fn farthest(&self) -> (usize, usize) {
        self.order
            .iter()
            .filter_map(|&v| self.dist[v].map(|d| (v, d)))
            .fold((self.order[0], 0), |best, (v, d)| if d > best.1 { (v, d) } else { best })
    }
}

/// Tarjan discovery/low-link DFS over the multigraph incidence lists
///
/// The parent edge is skipped by edge id, not by neighbor, so a parallel edge back to
/// the parent counts as a back edge.
pub(crate) struct LowLink {
    disc: Vec<Option<usize>>,
    low: Vec<usize>,
    timer: usize,
    bridges: Vec<usize>,
}

impl LowLink {
    pub(crate) fn new(num_vertices: usize) -> Self {
        Self {
            disc: vec![None; num_vertices],
            low: vec![0; num_vertices],
            timer: 0,
            bridges: Vec::new(),
        }
    }

    /// Run from every undiscovered vertex; returns bridge edge ids in discovery order
    pub(crate) fn bridges(mut self, graph: &Graph) -> Vec<usize> {
        for root in 0..graph.num_vertices() {
            if self.disc[root].is_none() {
                self.visit(graph, root, None);
            }
        }
        self.bridges
    }

    fn visit(&mut self, graph: &Graph, node: usize, parent_edge: Option<usize>) {
        let disc = self.timer;
        self.timer += 1;
        self.disc[node] = Some(disc);
        self.low[node] = disc;

        for &(neighbor, edge) in graph.incident(node) {
            if Some(edge) == parent_edge {
                continue;
            }
            match self.disc[neighbor] {
                Some(neighbor_disc) => {
                    self.low[node] = self.low[node].min(neighbor_disc);
                }
                None => {
                    self.visit(graph, neighbor, Some(edge));
                    self.low[node] = self.low[node].min(self.low[neighbor]);
                    if self.low[neighbor] > disc {
                        self.bridges.push(edge);
                    }
                }
            }
        }
    }
}
