//! Minimum-cost maximum flow (successive shortest paths with SPFA)
//!
//! Each round finds the cheapest augmenting path by cost with SPFA, which tolerates the
//! negative-cost reverse arcs created by earlier rounds, and saturates its bottleneck.
//! Rounds stop when the sink is no longer reachable in the residual network.

use super::residual::ResidualNetwork;
use crate::error::{GraphError, Result};
use crate::storage::Graph;
use crate::NodeId;
use std::collections::VecDeque;

/// Result of a min-cost max-flow computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinCostFlow {
    /// Maximum flow value
    pub flow: i64,
    /// Minimum total cost among all maximum flows
    pub cost: i64,
}

/// Minimum-cost maximum flow from `source` to `sink`
///
/// Each unit of flow over an edge costs the edge's cost (default 0). Returns `Ok(None)` if
/// either endpoint is absent and a zero flow when `source == sink`.
///
/// # Errors
///
/// Returns [`GraphError::NegativeCapacity`] or [`GraphError::NegativeCost`] for an edge with
/// a negative capacity or cost. A negative-cost undirected edge is a negative cycle on its
/// own, so no minimum exists. Returns [`GraphError::Overflow`] if the flow value or its
/// total cost exceeds `i64`.
///
/// # Example
///
/// ```
/// use graph_oracle::{find_min_cost_max_flow, Graph, MinCostFlow, NodeId, RawGraph};
///
/// // Two routes 1 → 4: via 2 (capacity 2, cost 1 + 1) and via 3 (capacity 1, cost 3 + 3)
/// let raw = RawGraph::from_flow_lists([
///     (1, vec![(2, 2, 1), (3, 1, 3)]),
///     (2, vec![(4, 2, 1)]),
///     (3, vec![(4, 1, 3)]),
/// ]);
/// let graph = Graph::from_raw(&raw);
///
/// let result = find_min_cost_max_flow(&graph, NodeId(1), NodeId(4)).unwrap();
/// assert_eq!(result, Some(MinCostFlow { flow: 3, cost: 10 }));
/// ```
pub fn find_min_cost_max_flow(
    graph: &Graph,
    source: NodeId,
    sink: NodeId,
) -> Result<Option<MinCostFlow>> {
    if let Some(edge) = graph.edges().iter().find(|e| e.cost < 0) {
        return Err(GraphError::NegativeCost {
            from: graph.node(edge.source),
            to: graph.node(edge.target),
            cost: edge.cost,
        });
    }
    let mut network = ResidualNetwork::build(graph)?;

    let (Some(s), Some(t)) = (graph.index_of(source), graph.index_of(sink)) else {
        return Ok(None);
    };
    if s == t {
        return Ok(Some(MinCostFlow::default()));
    }

    successive_shortest_paths(&mut network, s, t).map(Some)
}

fn successive_shortest_paths(
    network: &mut ResidualNetwork,
    source: usize,
    sink: usize,
) -> Result<MinCostFlow> {
    let mut result = MinCostFlow::default();
    let mut rounds = 0;

    while let Some((path_cost, parent_arc)) = cheapest_path(network, source, sink)? {
        let path = network.path(&parent_arc, source, sink);
        let bottleneck = network.bottleneck(&path);
        if bottleneck <= 0 {
            break;
        }
        for &arc in &path {
            network.push(arc, bottleneck);
        }

        rounds += 1;
        result.flow = result
            .flow
            .checked_add(bottleneck)
            .ok_or(GraphError::Overflow("min-cost flow value"))?;
        result.cost = bottleneck
            .checked_mul(path_cost)
            .and_then(|round_cost| result.cost.checked_add(round_cost))
            .ok_or(GraphError::Overflow("min-cost flow cost"))?;
        tracing::trace!(rounds, bottleneck, path_cost, "augmented along cheapest path");
    }
    debug_assert!(network.is_balanced());

    tracing::debug!(
        source,
        sink,
        flow = result.flow,
        cost = result.cost,
        rounds,
        "min-cost flow finished"
    );
    Ok(result)
}

/// SPFA from `source`; returns the path cost to `sink` and the predecessor arcs
fn cheapest_path(
    network: &ResidualNetwork,
    source: usize,
    sink: usize,
) -> Result<Option<(i64, Vec<Option<usize>>)>> {
    let n = network.num_vertices();
    let mut dist: Vec<Option<i64>> = vec![None; n];
    let mut parent_arc: Vec<Option<usize>> = vec![None; n];
    let mut in_queue = vec![false; n];
    let mut queue = VecDeque::from([source]);
    dist[source] = Some(0);
    in_queue[source] = true;

    while let Some(node) = queue.pop_front() {
        in_queue[node] = false;
        let Some(base) = dist[node] else { continue };

        for &arc in network.outgoing(node) {
            if network.residual(arc) <= 0 {
                continue;
            }
            let next = network.head(arc);
            let candidate = base
                .checked_add(network.cost(arc))
                .ok_or(GraphError::Overflow("min-cost flow path cost"))?;
            if dist[next].map_or(true, |d| candidate < d) {
                dist[next] = Some(candidate);
                parent_arc[next] = Some(arc);
                if !in_queue[next] {
                    in_queue[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }

    Ok(dist[sink].map(|cost| (cost, parent_arc)))
}
