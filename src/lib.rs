//! graph-oracle: exact ground-truth answers for classical graph problems
//!
//! # Overview
//!
//! graph-oracle computes reference answers (counts, booleans, weights, flows) over small
//! undirected graphs, for scoring automated reasoning benchmarks. Inputs may contain
//! self-loops, parallel edges and one-sided adjacency listings; every analyzer agrees on
//! how those are normalized.
//!
//! # Quick Start
//!
//! ```
//! use graph_oracle::{
//!     check_bipartite, count_triangles, find_maximum_flow, find_mst_weight, Graph, NodeId,
//!     RawGraph,
//! };
//!
//! // Triangle 1-2-3
//! let raw = RawGraph::from_lists([(1, vec![2, 3]), (2, vec![1, 3]), (3, vec![1, 2])]);
//! let graph = Graph::from_raw(&raw);
//!
//! assert_eq!(count_triangles(&graph), 1);
//! assert!(!check_bipartite(&graph));
//! assert_eq!(find_mst_weight(&graph), 2.0);
//!
//! // Unit capacities: two edge-disjoint routes from 1 to 3
//! assert_eq!(find_maximum_flow(&graph, NodeId(1), NodeId(3))?, Some(2));
//! # Ok::<(), graph_oracle::GraphError>(())
//! ```
//!
//! # Architecture
//!
//! - **Storage**: [`RawGraph`] adjacency input, normalized once into a CSR [`Graph`]
//! - **Ingestion**: `n m` edge-list text via [`parse_edge_list`] (and async file loading
//!   with the `io` feature)
//! - **Algorithms**: one module per problem family under [`algorithms`]
//! - **Results**: `None` for "no answer" (absent endpoint, no path, no second tree),
//!   [`GraphError`] only for input an analyzer cannot accept

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod config;
pub mod error;
pub mod storage;

// Re-export core types
pub use algorithms::{
    bfs, bfs_distances, check_bipartite, check_connectivity, connected_components,
    count_biconnected_components, count_bridges, count_cycles, count_spanning_trees,
    count_spanning_trees_with, count_triangles, dijkstra, find_bridges, find_max_clique_size,
    find_max_independent_set_size, find_maximum_flow, find_min_cost_max_flow, find_minimum_cut,
    find_minimum_cycle, find_mst_edges, find_mst_weight, find_second_mst_weight,
    find_shortest_path_length, find_tree_centroid, find_tree_diameter, find_tree_lca,
    find_tree_max_independent_set, has_eulerian_circuit, has_eulerian_path,
    has_hamiltonian_circuit, has_hamiltonian_path, is_tree, minimum_spanning_tree, MinCostFlow,
    SpanningTree, UnionFind, LCA_ROOT,
};
pub use config::{AnalysisConfig, ParseMode, DEFAULT_DETERMINANT_TOLERANCE};
pub use error::{GraphError, Result};
#[cfg(feature = "io")]
pub use storage::read_edge_list;
pub use storage::{parse_edge_list, Edge, EdgeAttributes, Graph, NeighborRef, NodeId, RawGraph};
