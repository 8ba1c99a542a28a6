//! Residual flow network
//!
//! Arcs are stored in pairs: arc `a` and its reverse `a ^ 1`. Every undirected edge
//! `{u, v}` with capacity `c` and cost `w` contributes two forward arcs:
//!
//! ```text
//! 2k:   u → v  cap c  cost  w      2k+1: v → u  cap 0  cost -w
//! 2k+2: v → u  cap c  cost  w      2k+3: u → v  cap 0  cost -w
//! ```
//!
//! Pushing flow along an arc always moves the same amount into its pair, so
//! `residual[a] + residual[a ^ 1]` never changes.

use crate::error::{GraphError, Result};
use crate::storage::Graph;

/// Paired-arc residual network over dense vertex indices
#[derive(Debug, Clone)]
pub(crate) struct ResidualNetwork {
    head: Vec<usize>,
    capacity: Vec<i64>,
    residual: Vec<i64>,
    cost: Vec<i64>,
    outgoing: Vec<Vec<usize>>,
}

impl ResidualNetwork {
    /// Build from the logical edges of `graph`; self-loops carry no flow and are skipped
    pub(crate) fn build(graph: &Graph) -> Result<Self> {
        let mut network = Self {
            head: Vec::new(),
            capacity: Vec::new(),
            residual: Vec::new(),
            cost: Vec::new(),
            outgoing: vec![Vec::new(); graph.num_vertices()],
        };

        for edge in graph.edges() {
            if edge.capacity < 0 {
                return Err(GraphError::NegativeCapacity {
                    from: graph.node(edge.source),
                    to: graph.node(edge.target),
                    capacity: edge.capacity,
                });
            }
            if edge.is_loop() {
                continue;
            }
            network.add_arc(edge.source, edge.target, edge.capacity, edge.cost);
            network.add_arc(edge.target, edge.source, edge.capacity, edge.cost);
        }

        Ok(network)
    }

    fn add_arc(&mut self, from: usize, to: usize, capacity: i64, cost: i64) {
        let id = self.head.len();
        self.head.extend([to, from]);
        self.capacity.extend([capacity, 0]);
        self.residual.extend([capacity, 0]);
        self.cost.extend([cost, -cost]);
        self.outgoing[from].push(id);
        self.outgoing[to].push(id + 1);
    }

    pub(crate) fn num_vertices(&self) -> usize {
        self.outgoing.len()
    }

    pub(crate) fn outgoing(&self, node: usize) -> &[usize] {
        &self.outgoing[node]
    }

    pub(crate) fn head(&self, arc: usize) -> usize {
        self.head[arc]
    }

    pub(crate) fn tail(&self, arc: usize) -> usize {
        self.head[arc ^ 1]
    }

    pub(crate) fn residual(&self, arc: usize) -> i64 {
        self.residual[arc]
    }

    pub(crate) fn cost(&self, arc: usize) -> i64 {
        self.cost[arc]
    }

    /// Push `amount` along `arc`, returning it to the paired reverse arc
    pub(crate) fn push(&mut self, arc: usize, amount: i64) {
        self.residual[arc] -= amount;
        self.residual[arc ^ 1] += amount;
    }

    /// Arcs from `source` to `sink` recorded in a predecessor table, sink first
    pub(crate) fn path(&self, parent_arc: &[Option<usize>], source: usize, sink: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut node = sink;
        while node != source {
            let Some(arc) = parent_arc[node] else { break };
            path.push(arc);
            node = self.tail(arc);
        }
        path
    }

    /// Smallest residual capacity along `path`
    pub(crate) fn bottleneck(&self, path: &[usize]) -> i64 {
        path.iter()
            .map(|&arc| self.residual[arc])
            .min()
            .unwrap_or(0)
    }

    /// `true` if every arc pair still sums to its original capacity
    pub(crate) fn is_balanced(&self) -> bool {
        (0..self.head.len()).step_by(2).all(|a| {
            self.residual[a] + self.residual[a + 1] == self.capacity[a] + self.capacity[a + 1]
                && self.residual[a] >= 0
                && self.residual[a + 1] >= 0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeId, RawGraph};

    #[test]
    fn test_each_edge_makes_two_arc_pairs() {
        let raw = RawGraph::from_capacity_lists([(1, vec![(2, 4)])]);
        let network = ResidualNetwork::build(&Graph::from_raw(&raw)).unwrap();

        assert_eq!(network.num_vertices(), 2);
        assert_eq!(network.outgoing(0), &[0, 3]);
        assert_eq!(network.outgoing(1), &[1, 2]);
        assert_eq!(network.residual(0), 4);
        assert_eq!(network.residual(1), 0);
        assert_eq!(network.head(0), 1);
        assert_eq!(network.tail(0), 0);
    }

    #[test]
    fn test_push_updates_pair_together() {
        let raw = RawGraph::from_capacity_lists([(1, vec![(2, 4)])]);
        let mut network = ResidualNetwork::build(&Graph::from_raw(&raw)).unwrap();

        network.push(0, 3);
        assert_eq!(network.residual(0), 1);
        assert_eq!(network.residual(1), 3);
        assert!(network.is_balanced());

        network.push(1, 2);
        assert_eq!(network.residual(0), 3);
        assert!(network.is_balanced());
    }

    #[test]
    fn test_reverse_arc_negates_cost() {
        let raw = RawGraph::from_flow_lists([(1, vec![(2, 1, 7)])]);
        let network = ResidualNetwork::build(&Graph::from_raw(&raw)).unwrap();
        assert_eq!(network.cost(0), 7);
        assert_eq!(network.cost(1), -7);
    }

    #[test]
    fn test_self_loop_skipped() {
        let raw = RawGraph::from_capacity_lists([(1, vec![(1, 5), (2, 1)])]);
        let network = ResidualNetwork::build(&Graph::from_raw(&raw)).unwrap();
        assert_eq!(network.outgoing(0).len(), 2);
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let raw = RawGraph::from_capacity_lists([(1, vec![(2, -3)])]);
        let err = ResidualNetwork::build(&Graph::from_raw(&raw)).unwrap_err();
        assert_eq!(
            err,
            GraphError::NegativeCapacity {
                from: NodeId(1),
                to: NodeId(2),
                capacity: -3
            }
        );
    }
}
