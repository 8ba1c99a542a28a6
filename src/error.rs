//! Error type shared by ingestion and analyzers
//!
//! Structural impossibility (disconnected graph, missing endpoint) is never an error:
//! analyzers encode it in their return value. `GraphError` is reserved for input that
//! an analyzer cannot answer for at all, or an exact answer too large to represent.

use crate::NodeId;
use thiserror::Error;

/// Errors raised by graph ingestion and analyzers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Shortest-path search over an edge with negative weight
    #[error("edge ({from}, {to}) has negative weight {weight}; shortest paths require non-negative weights")]
    NegativeWeight {
        /// First endpoint
        from: NodeId,
        /// Second endpoint
        to: NodeId,
        /// Offending weight
        weight: f64,
    },

    /// Flow network edge with negative capacity
    #[error("edge ({from}, {to}) has negative capacity {capacity}")]
    NegativeCapacity {
        /// First endpoint
        from: NodeId,
        /// Second endpoint
        to: NodeId,
        /// Offending capacity
        capacity: i64,
    },

    /// Flow network edge with negative cost (would form a negative cycle in an undirected network)
    #[error("edge ({from}, {to}) has negative cost {cost}")]
    NegativeCost {
        /// First endpoint
        from: NodeId,
        /// Second endpoint
        to: NodeId,
        /// Offending cost
        cost: i64,
    },

    /// Tree analyzer called on a graph that is not a tree
    #[error("graph with {vertices} vertices and {edges} edges is not a tree")]
    NotATree {
        /// Number of vertices
        vertices: usize,
        /// Number of logical edges
        edges: usize,
    },

    /// Malformed edge-list text
    #[error("edge list line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Rejected analysis configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An exact integer answer does not fit in its result type
    #[error("{0} overflows its integer result type")]
    Overflow(&'static str),
}

/// Result alias defaulting to [`GraphError`]
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_edge() {
        let err = GraphError::NegativeWeight {
            from: NodeId(1),
            to: NodeId(2),
            weight: -3.0,
        };
        assert!(err.to_string().contains("(1, 2)"));
        assert!(err.to_string().contains("-3"));

        let err = GraphError::Parse {
            line: 4,
            message: "expected 2 columns".to_string(),
        };
        assert_eq!(err.to_string(), "edge list line 4: expected 2 columns");

        let err = GraphError::Overflow("min-cost flow cost");
        assert_eq!(err.to_string(), "min-cost flow cost overflows its integer result type");
    }
}
