//! Raw adjacency input and its normalized CSR form
//!
//! # Input contract
//!
//! A [`RawGraph`] maps each vertex to a list of [`NeighborRef`]s. A neighbor is a bare
//! vertex or a vertex with attributes (weight, capacity, cost). An undirected edge may be
//! listed under either endpoint or both.
//!
//! # Normalization
//!
//! [`Graph::from_raw`] resolves the raw lists once:
//!
//! ```text
//! raw:   {1: [2, 2], 2: [1, 1, 3]}
//!
//! edges:       (1,2) (1,2) (2,3)      // multiplicity = max(listings under 1, listings under 2)
//! row_offsets: [0, 1, 3, 4]           // simple adjacency, loops and duplicates removed
//! col_indices: [1, 0, 2, 1]           // dense vertex indices
//! degrees:     [2, 3, 1]
//! ```
//!
//! Dense indices follow ascending [`NodeId`] order, so comparing indices is the same as
//! comparing identifiers.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// Vertex identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional attributes carried by a neighbor descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeAttributes {
    /// Edge weight (default 1)
    pub weight: Option<f64>,
    /// Edge capacity (default 1)
    pub capacity: Option<i64>,
    /// Per-unit flow cost (default 0)
    pub cost: Option<i64>,
}

impl EdgeAttributes {
    /// Weight used when none is given
    pub const DEFAULT_WEIGHT: f64 = 1.0;
    /// Capacity used when none is given
    pub const DEFAULT_CAPACITY: i64 = 1;
    /// Cost used when none is given
    pub const DEFAULT_COST: i64 = 0;
}

/// One entry of a vertex's neighbor list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborRef {
    /// Neighbor vertex
    pub target: NodeId,
    /// Attributes, `None` for a bare identifier
    pub attributes: Option<EdgeAttributes>,
}

impl NeighborRef {
    /// Bare neighbor (unweighted, unit capacity)
    #[must_use]
    pub const fn plain(target: NodeId) -> Self {
        Self {
            target,
            attributes: None,
        }
    }

    /// Neighbor with a weight
    #[must_use]
    pub const fn weighted(target: NodeId, weight: f64) -> Self {
        Self {
            target,
            attributes: Some(EdgeAttributes {
                weight: Some(weight),
                capacity: None,
                cost: None,
            }),
        }
    }

    /// Neighbor with a capacity
    #[must_use]
    pub const fn with_capacity(target: NodeId, capacity: i64) -> Self {
        Self {
            target,
            attributes: Some(EdgeAttributes {
                weight: None,
                capacity: Some(capacity),
                cost: None,
            }),
        }
    }

    /// Neighbor with explicit attributes
    #[must_use]
    pub const fn with_attributes(target: NodeId, attributes: EdgeAttributes) -> Self {
        Self {
            target,
            attributes: Some(attributes),
        }
    }
}

/// Raw adjacency mapping as produced by a graph generator or parser
///
/// # Example
///
/// ```
/// use graph_oracle::{Graph, RawGraph};
///
/// // Edge 1-2 listed under 1 only, edge 2-3 listed under both endpoints
/// let raw = RawGraph::from_lists([(1, vec![2]), (2, vec![3]), (3, vec![2])]);
/// let graph = Graph::from_raw(&raw);
///
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_edges(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGraph {
    adjacency: BTreeMap<NodeId, Vec<NeighborRef>>,
}

impl RawGraph {
    /// Create an empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from plain neighbor lists
    pub fn from_lists(lists: impl IntoIterator<Item = (u32, Vec<u32>)>) -> Self {
        Self::from_refs(lists, |v| NeighborRef::plain(NodeId(v)))
    }

    /// Build from `(neighbor, weight)` lists
    pub fn from_weighted_lists(lists: impl IntoIterator<Item = (u32, Vec<(u32, f64)>)>) -> Self {
        Self::from_refs(lists, |(v, w)| NeighborRef::weighted(NodeId(v), w))
    }

    /// Build from `(neighbor, capacity)` lists
    pub fn from_capacity_lists(lists: impl IntoIterator<Item = (u32, Vec<(u32, i64)>)>) -> Self {
        Self::from_refs(lists, |(v, c)| NeighborRef::with_capacity(NodeId(v), c))
    }

    /// Build from `(neighbor, capacity, cost)` lists
    pub fn from_flow_lists(lists: impl IntoIterator<Item = (u32, Vec<(u32, i64, i64)>)>) -> Self {
        Self::from_refs(lists, |(v, capacity, cost)| {
            NeighborRef::with_attributes(
                NodeId(v),
                EdgeAttributes {
                    weight: None,
                    capacity: Some(capacity),
                    cost: Some(cost),
                },
            )
        })
    }

    fn from_refs<T>(
        lists: impl IntoIterator<Item = (u32, Vec<T>)>,
        to_ref: impl Fn(T) -> NeighborRef,
    ) -> Self {
        let mut raw = Self::new();
        for (node, neighbors) in lists {
            let node = NodeId(node);
            raw.add_vertex(node);
            for neighbor in neighbors {
                raw.push_neighbor(node, to_ref(neighbor));
            }
        }
        raw
    }

    /// Register a vertex with an (initially) empty neighbor list
    pub fn add_vertex(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Append one entry to `node`'s neighbor list
    pub fn push_neighbor(&mut self, node: NodeId, neighbor: NeighborRef) {
        self.adjacency.entry(node).or_default().push(neighbor);
    }

    /// Append an undirected edge to both endpoint lists (once for a self-loop)
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, attributes: Option<EdgeAttributes>) {
        self.push_neighbor(u, NeighborRef { target: v, attributes });
        if u != v {
            self.push_neighbor(v, NeighborRef { target: u, attributes });
        }
    }

    /// Neighbor list of a key vertex
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> Option<&[NeighborRef]> {
        self.adjacency.get(&node).map(Vec::as_slice)
    }

    /// Iterate over `(vertex, neighbors)` in ascending vertex order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NeighborRef])> + '_ {
        self.adjacency
            .iter()
            .map(|(node, neighbors)| (*node, neighbors.as_slice()))
    }

    /// Number of key vertices
    #[must_use]
    pub fn num_keys(&self) -> usize {
        self.adjacency.len()
    }

    /// `true` if no vertex is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Logical undirected edge between dense vertex indices (`source <= target`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Smaller endpoint index
    pub source: usize,
    /// Larger endpoint index
    pub target: usize,
    /// Weight (default 1)
    pub weight: f64,
    /// Capacity (default 1)
    pub capacity: i64,
    /// Per-unit cost (default 0)
    pub cost: i64,
}

impl Edge {
    fn new(a: usize, b: usize, attributes: EdgeAttributes) -> Self {
        Self {
            source: a.min(b),
            target: a.max(b),
            weight: attributes.weight.unwrap_or(EdgeAttributes::DEFAULT_WEIGHT),
            capacity: attributes
                .capacity
                .unwrap_or(EdgeAttributes::DEFAULT_CAPACITY),
            cost: attributes.cost.unwrap_or(EdgeAttributes::DEFAULT_COST),
        }
    }

    /// `true` for a self-loop
    #[must_use]
    pub const fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Endpoint opposite to `node`
    #[must_use]
    pub const fn other(&self, node: usize) -> usize {
        if node == self.source {
            self.target
        } else {
            self.source
        }
    }
}

/// Normalized undirected graph
///
/// Holds the full vertex set, a CSR simple adjacency (symmetric, no loops, no duplicate
/// neighbors), a CSR incidence list over logical edges (parallel edges kept, loops
/// dropped), and multigraph degrees (a self-loop contributes 2).
///
/// Built once from a [`RawGraph`] and never mutated, so analyzers can share it freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,

    row_offsets: Vec<usize>,
    col_indices: Vec<usize>,

    inc_offsets: Vec<usize>,
    inc_entries: Vec<(usize, usize)>,

    degrees: Vec<usize>,
    self_loops: Vec<usize>,
}

impl Graph {
    /// Normalize a raw adjacency mapping
    ///
    /// Multiplicity of an edge `{u, v}` is the larger of the number of times `v` is listed
    /// under `u` and `u` under `v`, so a symmetric listing yields one edge while repeated
    /// listings yield parallel edges. Every listing of `u` under `u` is one self-loop.
    #[must_use]
    pub fn from_raw(raw: &RawGraph) -> Self {
        let vertex_set: BTreeSet<NodeId> = raw
            .iter()
            .flat_map(|(node, neighbors)| {
                std::iter::once(node).chain(neighbors.iter().map(|n| n.target))
            })
            .collect();
        let vertices: Vec<NodeId> = vertex_set.into_iter().collect();
        let index: HashMap<NodeId, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, node)| (*node, i))
            .collect();

        // Listings per ordered (from, to) pair
        let mut listings: BTreeMap<(usize, usize), Vec<EdgeAttributes>> = BTreeMap::new();
        for (node, neighbors) in raw.iter() {
            let from = index[&node];
            for neighbor in neighbors {
                listings
                    .entry((from, index[&neighbor.target]))
                    .or_default()
                    .push(neighbor.attributes.unwrap_or_default());
            }
        }

        let mut edges = Vec::new();
        for (&(a, b), forward) in &listings {
            let chosen = match a.cmp(&b) {
                std::cmp::Ordering::Equal => forward,
                std::cmp::Ordering::Less => match listings.get(&(b, a)) {
                    Some(backward) if backward.len() > forward.len() => backward,
                    _ => forward,
                },
                // Listed in both directions: already taken from the (b, a) side
                std::cmp::Ordering::Greater if listings.contains_key(&(b, a)) => continue,
                std::cmp::Ordering::Greater => forward,
            };
            edges.extend(chosen.iter().map(|attrs| Edge::new(a, b, *attrs)));
        }
        edges.sort_by_key(|e| (e.source, e.target));

        let n = vertices.len();
        let mut simple: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
        let mut incidence: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
        let mut degrees = vec![0; n];
        let mut self_loops = vec![0; n];

        for (id, edge) in edges.iter().enumerate() {
            degrees[edge.source] += 1;
            degrees[edge.target] += 1;
            if edge.is_loop() {
                self_loops[edge.source] += 1;
                continue;
            }
            simple[edge.source].insert(edge.target);
            simple[edge.target].insert(edge.source);
            incidence[edge.source].push((edge.target, id));
            incidence[edge.target].push((edge.source, id));
        }

        let (row_offsets, col_indices) =
            to_csr(simple.into_iter().map(|s| s.into_iter().collect::<Vec<usize>>()));
        let (inc_offsets, inc_entries) = to_csr(incidence.into_iter());

        tracing::debug!(vertices = n, edges = edges.len(), "normalized adjacency");

        Self {
            vertices,
            index,
            edges,
            row_offsets,
            col_indices,
            inc_offsets,
            inc_entries,
            degrees,
            self_loops,
        }
    }

    /// Number of vertices (keys and neighbor-only vertices)
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of logical edges, counting parallel edges and self-loops
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// `true` for the graph with no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in ascending order (position = dense index)
    #[must_use]
    pub fn vertices(&self) -> &[NodeId] {
        &self.vertices
    }

    /// Identifier of a dense index
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds
    #[must_use]
    pub fn node(&self, index: usize) -> NodeId {
        self.vertices[index]
    }

    /// Dense index of a vertex, `None` if it does not occur in the graph
    #[must_use]
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.index.get(&node).copied()
    }

    /// Logical edges sorted by `(source, target)`
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Simple-graph neighbors of `index`, ascending
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.col_indices[self.row_offsets[index]..self.row_offsets[index + 1]]
    }

    /// `(neighbor, edge id)` for every non-loop edge at `index`
    #[must_use]
    pub fn incident(&self, index: usize) -> &[(usize, usize)] {
        &self.inc_entries[self.inc_offsets[index]..self.inc_offsets[index + 1]]
    }

    /// Multigraph degree (self-loops count twice)
    #[must_use]
    pub fn degree(&self, index: usize) -> usize {
        self.degrees[index]
    }

    /// `true` if `index` carries at least one self-loop
    #[must_use]
    pub fn has_self_loop(&self, index: usize) -> bool {
        self.self_loops[index] > 0
    }

    /// `true` if `a` and `b` are distinct and joined by an edge
    #[must_use]
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Number of parallel edges between `a` and `b` (self-loops when `a == b`)
    #[must_use]
    pub fn multiplicity(&self, a: usize, b: usize) -> usize {
        if a == b {
            return self.self_loops[a];
        }
        self.incident(a).iter().filter(|(n, _)| *n == b).count()
    }

    /// Number of edges in the simple graph underlying this multigraph
    #[must_use]
    pub fn num_simple_edges(&self) -> usize {
        self.col_indices.len() / 2
    }
}

impl From<&RawGraph> for Graph {
    fn from(raw: &RawGraph) -> Self {
        Self::from_raw(raw)
    }
}

fn to_csr<T>(lists: impl Iterator<Item = Vec<T>>) -> (Vec<usize>, Vec<T>) {
    let mut offsets = vec![0];
    let mut entries = Vec::new();
    for list in lists {
        entries.extend(list);
        offsets.push(entries.len());
    }
    (offsets, entries)
}
