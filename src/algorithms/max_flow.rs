//! Maximum flow and minimum cut (Edmonds–Karp)
//!
//! Each undirected edge lets its capacity flow in either direction. Augmenting paths are
//! found by BFS over arcs with positive residual capacity, so each augmentation uses a
//! shortest path and the number of rounds is `O(V·E)`.
//!
//! # Example
//!
//! ```
//! use graph_oracle::{find_maximum_flow, find_minimum_cut, Graph, NodeId, RawGraph};
//!
//! // 1 -(10)- 2 -(5)- 3: the 2-3 edge is the bottleneck
//! let raw = RawGraph::from_capacity_lists([
//!     (1, vec![(2, 10)]),
//!     (2, vec![(1, 10), (3, 5)]),
//!     (3, vec![(2, 5)]),
//! ]);
//! let graph = Graph::from_raw(&raw);
//!
//! assert_eq!(find_maximum_flow(&graph, NodeId(1), NodeId(3)).unwrap(), Some(5));
//! assert_eq!(find_minimum_cut(&graph, NodeId(1), NodeId(3)).unwrap(), Some(5));
//! ```

use super::residual::ResidualNetwork;
use crate::error::{GraphError, Result};
use crate::storage::Graph;
use crate::NodeId;
use std::collections::VecDeque;

/// Maximum flow value from `source` to `sink`
///
/// Unattributed edges have capacity 1. Returns `Ok(None)` if either endpoint is absent and
/// `Ok(Some(0))` when `source == sink`.
///
/// # Errors
///
/// Returns [`GraphError::NegativeCapacity`] if any edge has negative capacity, or
/// [`GraphError::Overflow`] if the flow value exceeds `i64`
pub fn find_maximum_flow(graph: &Graph, source: NodeId, sink: NodeId) -> Result<Option<i64>> {
    let mut network = ResidualNetwork::build(graph)?;

    let (Some(s), Some(t)) = (graph.index_of(source), graph.index_of(sink)) else {
        return Ok(None);
    };
    if s == t {
        return Ok(Some(0));
    }

    edmonds_karp(&mut network, s, t).map(Some)
}

/// Minimum `source`–`sink` cut capacity
///
/// Equal to the maximum flow by max-flow/min-cut duality.
///
/// # Errors
///
/// Same as [`find_maximum_flow`]
pub fn find_minimum_cut(graph: &Graph, source: NodeId, sink: NodeId) -> Result<Option<i64>> {
    find_maximum_flow(graph, source, sink)
}

fn edmonds_karp(network: &mut ResidualNetwork, source: usize, sink: usize) -> Result<i64> {
    let mut flow: i64 = 0;
    let mut augmentations = 0;

    while let Some(parent_arc) = augmenting_path(network, source, sink) {
        let path = network.path(&parent_arc, source, sink);
        let bottleneck = network.bottleneck(&path);
        if bottleneck <= 0 {
            break;
        }
        for &arc in &path {
            network.push(arc, bottleneck);
        }
        flow = flow
            .checked_add(bottleneck)
            .ok_or(GraphError::Overflow("maximum flow"))?;
        augmentations += 1;
    }
    debug_assert!(network.is_balanced());

    tracing::debug!(source, sink, flow, augmentations, "edmonds-karp finished");
    Ok(flow)
}

/// BFS predecessor arcs, or `None` if `sink` is unreachable in the residual network
fn augmenting_path(
    network: &ResidualNetwork,
    source: usize,
    sink: usize,
) -> Option<Vec<Option<usize>>> {
    let mut parent_arc: Vec<Option<usize>> = vec![None; network.num_vertices()];
    let mut visited = vec![false; network.num_vertices()];
    let mut queue = VecDeque::from([source]);
    visited[source] = true;

    while let Some(node) = queue.pop_front() {
        for &arc in network.outgoing(node) {
            let next = network.head(arc);
            if visited[next] || network.residual(arc) <= 0 {
                continue;
            }
            visited[next] = true;
            parent_arc[next] = Some(arc);
            if next == sink {
                return Some(parent_arc);
            }
            queue.push_back(next);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawGraph;

    #[test]
    fn test_bottleneck_path() {
        let raw = RawGraph::from_capacity_lists([
            (1, vec![(2, 10)]),
            (2, vec![(1, 10), (3, 5)]),
            (3, vec![(2, 5)]),
        ]);
        let graph = Graph::from_raw(&raw);
        assert_eq!(find_maximum_flow(&graph, NodeId(1), NodeId(3)).unwrap(), Some(5));
    }

    #[test]
    fn test_parallel_routes_add_up() {
        // 1 → 2 → 4 (3) and 1 → 3 → 4 (4)
        let raw = RawGraph::from_capacity_lists([
            (1, vec![(2, 3), (3, 4)]),
            (2, vec![(4, 3)]),
            (3, vec![(4, 4)]),
        ]);
        let graph = Graph::from_raw(&raw);
        assert_eq!(find_maximum_flow(&graph, NodeId(1), NodeId(4)).unwrap(), Some(7));
    }

    #[test]
    fn test_classic_network_needs_reverse_arcs() {
        // Diamond with a cross edge 2-3 that a greedy path would saturate
        let raw = RawGraph::from_capacity_lists([
            (1, vec![(2, 10), (3, 10)]),
            (2, vec![(3, 1), (4, 10)]),
            (3, vec![(4, 10)]),
        ]);
        let graph = Graph::from_raw(&raw);
        assert_eq!(find_maximum_flow(&graph, NodeId(1), NodeId(4)).unwrap(), Some(20));
    }

    #[test]
    fn test_flow_is_symmetric_in_undirected_graph() {
        let raw = RawGraph::from_capacity_lists([(1, vec![(2, 2), (3, 5)]), (2, vec![(3, 1)])]);
        let graph = Graph::from_raw(&raw);

        let forward = find_maximum_flow(&graph, NodeId(1), NodeId(3)).unwrap();
        let backward = find_maximum_flow(&graph, NodeId(3), NodeId(1)).unwrap();
        assert_eq!(forward, Some(6));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_unit_capacity_counts_edge_disjoint_paths() {
        // Square 1-2-3-4-1: two edge-disjoint paths between opposite corners
        let raw = RawGraph::from_lists([(1, vec![2, 4]), (3, vec![2, 4])]);
        let graph = Graph::from_raw(&raw);
        assert_eq!(find_maximum_flow(&graph, NodeId(1), NodeId(3)).unwrap(), Some(2));
    }

    #[test]
    fn test_parallel_edges_add_capacity() {
        let raw = RawGraph::from_capacity_lists([(1, vec![(2, 2), (2, 3)])]);
        let graph = Graph::from_raw(&raw);
        assert_eq!(find_maximum_flow(&graph, NodeId(1), NodeId(2)).unwrap(), Some(5));
    }

    #[test]
    fn test_disconnected_is_zero() {
        let raw = RawGraph::from_capacity_lists([(1, vec![(2, 4)]), (3, vec![(4, 4)])]);
        let graph = Graph::from_raw(&raw);
        assert_eq!(find_maximum_flow(&graph, NodeId(1), NodeId(4)).unwrap(), Some(0));
    }

    #[test]
    fn test_absent_endpoint_and_same_endpoint() {
        let raw = RawGraph::from_capacity_lists([(1, vec![(2, 4)])]);
        let graph = Graph::from_raw(&raw);

        assert_eq!(find_maximum_flow(&graph, NodeId(1), NodeId(9)).unwrap(), None);
        assert_eq!(find_minimum_cut(&graph, NodeId(9), NodeId(1)).unwrap(), None);
        assert_eq!(find_maximum_flow(&graph, NodeId(1), NodeId(1)).unwrap(), Some(0));
    }

    #[test]
    fn test_negative_capacity_is_error() {
        let raw = RawGraph::from_capacity_lists([(1, vec![(2, 4)]), (2, vec![(3, -1)])]);
        let graph = Graph::from_raw(&raw);

        assert!(matches!(
            find_maximum_flow(&graph, NodeId(1), NodeId(3)),
            Err(GraphError::NegativeCapacity { capacity: -1, .. })
        ));
        // Rejected even when the endpoint lookup would fail
        assert!(find_minimum_cut(&graph, NodeId(1), NodeId(9)).is_err());
    }

    #[test]
    fn test_residual_pairs_stay_balanced() {
        let raw = RawGraph::from_capacity_lists([
            (1, vec![(2, 10), (3, 10)]),
            (2, vec![(3, 1), (4, 10)]),
            (3, vec![(4, 10)]),
        ]);
        let graph = Graph::from_raw(&raw);
        let mut network = ResidualNetwork::build(&graph).unwrap();

        assert_eq!(edmonds_karp(&mut network, 0, 3), Ok(20));
        assert!(network.is_balanced());
    }

    #[test]
    fn test_flow_overflow_is_error() {
        let raw = RawGraph::from_capacity_lists([(1, vec![(2, i64::MAX), (2, i64::MAX)])]);
        let graph = Graph::from_raw(&raw);

        assert_eq!(
            find_maximum_flow(&graph, NodeId(1), NodeId(2)),
            Err(GraphError::Overflow("maximum flow"))
        );

        let single = RawGraph::from_capacity_lists([(1, vec![(2, i64::MAX)])]);
        assert_eq!(
            find_maximum_flow(&Graph::from_raw(&single), NodeId(1), NodeId(2)),
            Ok(Some(i64::MAX))
        );
    }
}
