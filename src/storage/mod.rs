//! Graph ingestion layer
//!
//! Provides the raw adjacency contract, its normalized CSR form, and edge-list parsing.

pub mod edge_list;
pub mod graph;

#[cfg(feature = "io")]
pub use edge_list::read_edge_list;
pub use edge_list::parse_edge_list;
pub use graph::{Edge, EdgeAttributes, Graph, NeighborRef, NodeId, RawGraph};
