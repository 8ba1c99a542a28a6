//! Graph algorithms (traversal, structure, optimization, flows, trees)
//!
//! Every analyzer is a pure function of a normalized [`Graph`](crate::Graph). Shared
//! building blocks (BFS/low-link traversal, union-find, residual networks) live in their
//! own modules.

pub mod bridges;
pub mod clique;
pub mod connectivity;
pub mod cycles;
pub mod eulerian;
pub mod hamiltonian;
pub mod independent_set;
pub mod kirchhoff;
pub mod max_flow;
pub mod min_cost_flow;
mod residual;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;
pub mod tree;
pub mod union_find;

pub use bridges::{count_biconnected_components, count_bridges, find_bridges};
pub use clique::find_max_clique_size;
pub use connectivity::{check_bipartite, check_connectivity, connected_components};
pub use cycles::{count_cycles, count_triangles, find_minimum_cycle};
pub use eulerian::{has_eulerian_circuit, has_eulerian_path};
pub use hamiltonian::{has_hamiltonian_circuit, has_hamiltonian_path};
pub use independent_set::find_max_independent_set_size;
pub use kirchhoff::{count_spanning_trees, count_spanning_trees_with};
pub use max_flow::{find_maximum_flow, find_minimum_cut};
pub use min_cost_flow::{find_min_cost_max_flow, MinCostFlow};
pub use shortest_path::{dijkstra, find_shortest_path_length};
pub use spanning_tree::{
    find_mst_edges, find_mst_weight, find_second_mst_weight, minimum_spanning_tree, SpanningTree,
};
pub use traversal::{bfs, bfs_distances};
pub use tree::{
    find_tree_centroid, find_tree_diameter, find_tree_lca, find_tree_max_independent_set,
    is_tree, LCA_ROOT,
};
pub use union_find::UnionFind;
