//! Property-based tests for graph-oracle
//!
//! Verifies analyzer invariants hold for arbitrary small multigraphs

use graph_oracle::{
    check_connectivity, connected_components, count_biconnected_components, count_bridges,
    count_cycles, count_spanning_trees, count_triangles, find_bridges, find_max_clique_size,
    find_max_independent_set_size, find_maximum_flow, find_min_cost_max_flow, find_minimum_cut,
    find_minimum_cycle, find_mst_weight, find_second_mst_weight, has_eulerian_circuit,
    has_hamiltonian_circuit, has_hamiltonian_path, is_tree, EdgeAttributes, Graph, NodeId,
    RawGraph,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Strategy: undirected edge list over vertices `1..=max_vertex` (loops and repeats allowed)
fn prop_edge_list(max_vertex: u32, max_edges: usize) -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((1..=max_vertex, 1..=max_vertex), 0..max_edges)
}

/// Strategy: edge list with small integer attributes
fn prop_weighted_edge_list(
    max_vertex: u32,
    max_edges: usize,
) -> impl Strategy<Value = Vec<(u32, u32, i64)>> {
    prop::collection::vec((1..=max_vertex, 1..=max_vertex, 0i64..10), 0..max_edges)
}

fn build(edges: &[(u32, u32)]) -> Graph {
    let mut raw = RawGraph::new();
    for &(u, v) in edges {
        raw.add_edge(NodeId(u), NodeId(v), None);
    }
    Graph::from_raw(&raw)
}

fn build_attributed(edges: &[(u32, u32, i64)]) -> Graph {
    let mut raw = RawGraph::new();
    for &(u, v, value) in edges {
        #[allow(clippy::cast_precision_loss)]
        let attributes = EdgeAttributes {
            weight: Some(value as f64),
            capacity: Some(value),
            cost: Some(value),
        };
        raw.add_edge(NodeId(u), NodeId(v), Some(attributes));
    }
    Graph::from_raw(&raw)
}

// Property: every vertex is connected to itself
proptest! {
    #[test]
    fn prop_connectivity_is_reflexive(edges in prop_edge_list(10, 20), outside in 0u32..15) {
        let graph = build(&edges);

        for &v in graph.vertices() {
            prop_assert!(check_connectivity(&graph, v, v));
        }
        prop_assert!(check_connectivity(&graph, NodeId(outside), NodeId(outside)));
    }
}

// Property: connectivity is symmetric
proptest! {
    #[test]
    fn prop_connectivity_is_symmetric(edges in prop_edge_list(8, 12), a in 1u32..=8, b in 1u32..=8) {
        let graph = build(&edges);
        prop_assert_eq!(
            check_connectivity(&graph, NodeId(a), NodeId(b)),
            check_connectivity(&graph, NodeId(b), NodeId(a))
        );
    }
}

// Property: bridges never outnumber edges, and each one separates its endpoints
proptest! {
    #[test]
    fn prop_bridges_bounded_and_disconnecting(edges in prop_edge_list(10, 20)) {
        let graph = build(&edges);
        let bridges = find_bridges(&graph);

        prop_assert!(count_bridges(&graph) <= graph.num_edges());
        prop_assert_eq!(bridges.len(), count_bridges(&graph));

        let components = connected_components(&graph);
        for &(a, b) in &bridges {
            // Drop the single copy of this edge
            let position = edges
                .iter()
                .position(|&(u, v)| (NodeId(u), NodeId(v)) == (a, b) || (NodeId(v), NodeId(u)) == (a, b));
            prop_assert!(position.is_some());

            let mut remaining = edges.clone();
            if let Some(i) = position {
                remaining.remove(i);
            }
            let mut raw = RawGraph::new();
            for &v in graph.vertices() {
                raw.add_vertex(v);
            }
            for &(u, v) in &remaining {
                raw.add_edge(NodeId(u), NodeId(v), None);
            }
            let without = Graph::from_raw(&raw);

            prop_assert_eq!(connected_components(&without), components + 1);
            prop_assert!(!check_connectivity(&without, a, b));
        }
    }
}

// Property: removing all bridges leaves one block per bridge plus one per component
proptest! {
    #[test]
    fn prop_blocks_count_bridges(edges in prop_edge_list(10, 20)) {
        let graph = build(&edges);
        prop_assert_eq!(
            count_biconnected_components(&graph),
            connected_components(&graph) + count_bridges(&graph)
        );
    }
}

// Property: max-flow/min-cut duality and flow symmetry
proptest! {
    #[test]
    fn prop_flow_equals_cut(edges in prop_weighted_edge_list(8, 16), s in 1u32..=8, t in 1u32..=8) {
        let graph = build_attributed(&edges);
        let (s, t) = (NodeId(s), NodeId(t));

        let flow = find_maximum_flow(&graph, s, t).unwrap();
        prop_assert_eq!(flow, find_minimum_cut(&graph, s, t).unwrap());
        prop_assert_eq!(flow, find_maximum_flow(&graph, t, s).unwrap());

        // Flow out of the source is bounded by the capacity at the source
        if let (Some(flow), Some(si)) = (flow, graph.index_of(s)) {
            let capacity_at_source: i64 = graph
                .edges()
                .iter()
                .filter(|e| !e.is_loop() && (e.source == si || e.target == si))
                .map(|e| e.capacity)
                .sum();
            prop_assert!(flow <= capacity_at_source);
            prop_assert!(flow >= 0);
        }
    }
}

// Property: min-cost flow carries exactly the maximum flow
proptest! {
    #[test]
    fn prop_min_cost_flow_is_maximum(edges in prop_weighted_edge_list(7, 14), s in 1u32..=7, t in 1u32..=7) {
        let graph = build_attributed(&edges);
        let (s, t) = (NodeId(s), NodeId(t));

        let max_flow = find_maximum_flow(&graph, s, t).unwrap();
        let min_cost = find_min_cost_max_flow(&graph, s, t).unwrap();
        prop_assert_eq!(max_flow, min_cost.map(|r| r.flow));
        if let Some(result) = min_cost {
            prop_assert!(result.cost >= 0);
        }
    }
}

// Property: the second MST is strictly heavier than the MST
proptest! {
    #[test]
    fn prop_second_mst_strictly_heavier(edges in prop_weighted_edge_list(7, 16)) {
        let graph = build_attributed(&edges);
        let mst = find_mst_weight(&graph);

        if let Some(second) = find_second_mst_weight(&graph) {
            prop_assert!(mst.is_finite());
            prop_assert!(second > mst);
        }
        if mst.is_infinite() {
            prop_assert_eq!(count_spanning_trees(&graph), 0);
        }
    }
}

// Property: Kirchhoff count is zero exactly for disconnected graphs
proptest! {
    #[test]
    fn prop_spanning_tree_count_matches_connectivity(edges in prop_edge_list(7, 14)) {
        let graph = build(&edges);
        let count = count_spanning_trees(&graph);

        if graph.is_empty() {
            prop_assert_eq!(count, 0);
        } else {
            prop_assert_eq!(count > 0, connected_components(&graph) == 1);
        }
        if is_tree(&graph) && !graph.is_empty() {
            prop_assert_eq!(count, 1);
        }
    }
}

// Property: triangle count is invariant under relabeling
proptest! {
    #[test]
    fn prop_triangles_invariant_under_relabel(edges in prop_edge_list(10, 25)) {
        let graph = build(&edges);

        // Order-reversing bijection on 1..=10
        let relabeled: Vec<(u32, u32)> = edges.iter().map(|&(u, v)| (100 - u * 3, 100 - v * 3)).collect();
        let other = build(&relabeled);

        prop_assert_eq!(count_triangles(&graph), count_triangles(&other));
        prop_assert_eq!(count_cycles(&graph), count_cycles(&other));
        prop_assert_eq!(find_minimum_cycle(&graph), find_minimum_cycle(&other));
        prop_assert_eq!(find_max_clique_size(&graph), find_max_clique_size(&other));
    }
}

// Property: a triangle is a 3-cycle, so counts and girth agree
proptest! {
    #[test]
    fn prop_triangles_bounded_by_cycles(edges in prop_edge_list(7, 14)) {
        let graph = build(&edges);
        let triangles = count_triangles(&graph);

        prop_assert!(triangles <= count_cycles(&graph));
        prop_assert_eq!(triangles > 0, find_minimum_cycle(&graph) == Some(3));
        prop_assert_eq!(triangles > 0, find_max_clique_size(&graph) >= 3);
    }
}

// Property: analyzers are idempotent on the same input
proptest! {
    #[test]
    fn prop_analyzers_idempotent(edges in prop_edge_list(7, 14)) {
        let graph = build(&edges);

        prop_assert_eq!(count_bridges(&graph), count_bridges(&graph));
        prop_assert_eq!(count_cycles(&graph), count_cycles(&graph));
        prop_assert_eq!(has_eulerian_circuit(&graph), has_eulerian_circuit(&graph));
        prop_assert_eq!(has_hamiltonian_path(&graph), has_hamiltonian_path(&graph));
        prop_assert_eq!(
            find_max_independent_set_size(&graph),
            find_max_independent_set_size(&graph)
        );
        prop_assert_eq!(count_spanning_trees(&graph), count_spanning_trees(&graph));

        // Rebuilding from the same raw input gives the same answers
        let again = build(&edges);
        prop_assert_eq!(count_triangles(&graph), count_triangles(&again));
        prop_assert_eq!(
            find_mst_weight(&graph).to_bits(),
            find_mst_weight(&again).to_bits()
        );
    }
}

/// Every ordering of `items`
fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut all = Vec::new();
    for (i, &first) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            all.push(tail);
        }
    }
    all
}

/// Index subsets of `0..len` with exactly `size` members
fn subsets_of_size(len: usize, size: usize) -> Vec<Vec<usize>> {
    (0u32..1 << len)
        .filter(|mask| mask.count_ones() as usize == size)
        .map(|mask| (0..len).filter(|&i| mask & (1 << i) != 0).collect())
        .collect()
}

/// Vertex subsets of the graph as index lists
fn vertex_subsets(graph: &Graph) -> Vec<Vec<usize>> {
    let n = graph.num_vertices();
    (0..=n).flat_map(|size| subsets_of_size(n, size)).collect()
}

/// `true` if consecutive vertices of `order` are adjacent
fn is_walk(graph: &Graph, order: &[usize]) -> bool {
    order.windows(2).all(|pair| graph.are_adjacent(pair[0], pair[1]))
}

/// `true` if `pairs` joins all `n` vertices (vacuously for `n == 0`)
fn spans(n: usize, pairs: &[(usize, usize)]) -> bool {
    fn root(parent: &[usize], mut v: usize) -> usize {
        while parent[v] != v {
            v = parent[v];
        }
        v
    }

    let mut parent: Vec<usize> = (0..n).collect();
    let mut merged = 0;
    for &(a, b) in pairs {
        let (ra, rb) = (root(&parent, a), root(&parent, b));
        if ra != rb {
            parent[ra] = rb;
            merged += 1;
        }
    }
    n == 0 || merged + 1 == n
}

/// Spanning trees counted one edge subset at a time (parallel edges are distinct)
fn brute_spanning_trees(graph: &Graph) -> u128 {
    let n = graph.num_vertices();
    if n == 0 {
        return 0;
    }
    let pairs: Vec<(usize, usize)> = graph
        .edges()
        .iter()
        .filter(|e| !e.is_loop())
        .map(|e| (e.source, e.target))
        .collect();
    let count = subsets_of_size(pairs.len(), n - 1)
        .into_iter()
        .filter(|subset| {
            let chosen: Vec<(usize, usize)> = subset.iter().map(|&i| pairs[i]).collect();
            spans(n, &chosen)
        })
        .count();
    count as u128
}

/// Weights of every spanning tree over the lightest copy of each vertex pair
fn brute_tree_weights(graph: &Graph) -> Vec<f64> {
    let n = graph.num_vertices();
    let mut lightest: BTreeMap<(usize, usize), f64> = BTreeMap::new();
    for edge in graph.edges().iter().filter(|e| !e.is_loop()) {
        let weight = lightest.entry((edge.source, edge.target)).or_insert(edge.weight);
        *weight = weight.min(edge.weight);
    }
    let pairs: Vec<((usize, usize), f64)> = lightest.into_iter().collect();

    subsets_of_size(pairs.len(), n.saturating_sub(1))
        .into_iter()
        .filter(|subset| {
            let chosen: Vec<(usize, usize)> = subset.iter().map(|&i| pairs[i].0).collect();
            spans(n, &chosen)
        })
        .map(|subset| subset.iter().map(|&i| pairs[i].1).sum::<f64>())
        .collect()
}

// Property: clique number matches the largest pairwise-adjacent vertex subset
proptest! {
    #[test]
    fn prop_max_clique_matches_subsets(edges in prop_edge_list(7, 16)) {
        let graph = build(&edges);
        let expected = vertex_subsets(&graph)
            .into_iter()
            .filter(|set| {
                set.iter().enumerate().all(|(i, &a)| set[i + 1..].iter().all(|&b| graph.are_adjacent(a, b)))
            })
            .map(|set| set.len())
            .max()
            .unwrap_or(0);

        prop_assert_eq!(find_max_clique_size(&graph), expected);
    }
}

// Property: independence number matches the largest pairwise-nonadjacent vertex subset
proptest! {
    #[test]
    fn prop_max_independent_set_matches_subsets(edges in prop_edge_list(7, 12)) {
        let graph = build(&edges);
        let expected = vertex_subsets(&graph)
            .into_iter()
            .filter(|set| {
                set.iter().enumerate().all(|(i, &a)| set[i + 1..].iter().all(|&b| !graph.are_adjacent(a, b)))
            })
            .map(|set| set.len())
            .max()
            .unwrap_or(0);

        prop_assert_eq!(find_max_independent_set_size(&graph), expected);
    }
}

// Property: simple cycles match closed orderings of each vertex subset of size 3 or more
proptest! {
    #[test]
    fn prop_cycle_count_matches_orderings(edges in prop_edge_list(6, 14)) {
        let graph = build(&edges);
        let mut expected = 0;

        for set in vertex_subsets(&graph).into_iter().filter(|set| set.len() >= 3) {
            // The smallest vertex leads; each cycle then appears once per direction
            let closed = permutations(&set[1..])
                .into_iter()
                .filter(|rest| {
                    let mut order = vec![set[0]];
                    order.extend(rest);
                    is_walk(&graph, &order) && graph.are_adjacent(order[order.len() - 1], set[0])
                })
                .count();
            expected += closed / 2;
        }

        prop_assert_eq!(count_cycles(&graph), expected);
    }
}

// Property: Hamiltonian answers match an exhaustive search over vertex orderings
proptest! {
    #[test]
    fn prop_hamiltonian_matches_orderings(edges in prop_edge_list(7, 14)) {
        let graph = build(&edges);
        let n = graph.num_vertices();
        let orders = permutations(&(0..n).collect::<Vec<_>>());

        let path = n > 0 && orders.iter().any(|order| is_walk(&graph, order));
        let circuit = match n {
            0 => false,
            1 => graph.has_self_loop(0),
            _ => orders
                .iter()
                .any(|order| is_walk(&graph, order) && graph.are_adjacent(order[n - 1], order[0])),
        };

        prop_assert_eq!(has_hamiltonian_path(&graph), path);
        prop_assert_eq!(has_hamiltonian_circuit(&graph), circuit);
    }
}

// Property: MST and second MST weights match the enumerated spanning trees
proptest! {
    #[test]
    fn prop_second_mst_matches_enumeration(edges in prop_weighted_edge_list(6, 12)) {
        let graph = build_attributed(&edges);
        let weights = brute_tree_weights(&graph);
        let mst = weights.iter().copied().reduce(f64::min);

        let second = weights
            .iter()
            .copied()
            .filter(|&w| mst.is_some_and(|m| w > m))
            .reduce(f64::min);
        let expected = if graph.num_vertices() < 2 { None } else { second };

        if let Some(mst) = mst {
            prop_assert_eq!(find_mst_weight(&graph), mst);
        } else {
            prop_assert!(find_mst_weight(&graph).is_infinite());
        }
        prop_assert_eq!(find_second_mst_weight(&graph), expected);
    }
}

// Property: Kirchhoff count matches the enumerated spanning edge subsets
proptest! {
    #[test]
    fn prop_spanning_tree_count_matches_enumeration(edges in prop_edge_list(6, 12)) {
        let graph = build(&edges);
        prop_assert_eq!(count_spanning_trees(&graph), brute_spanning_trees(&graph));
    }
}

/// Cayley's formula `n^(n-2)` for every complete graph up to 25 vertices
#[test]
fn test_spanning_trees_of_complete_graphs_follow_cayley() {
    for n in 1u32..=25 {
        let edges: Vec<(u32, u32)> = (1..=n).flat_map(|u| ((u + 1)..=n).map(move |v| (u, v))).collect();
        let mut raw = RawGraph::new();
        raw.add_vertex(NodeId(1));
        for &(u, v) in &edges {
            raw.add_edge(NodeId(u), NodeId(v), None);
        }
        let graph = Graph::from_raw(&raw);

        let expected = if n == 1 { 1 } else { u128::from(n).pow(n - 2) };
        assert_eq!(count_spanning_trees(&graph), expected, "K{n}");
    }
}

/// Concurrent calls on disjoint graphs must agree with sequential calls
#[test]
fn test_concurrent_disjoint_calls() {
    let graphs: Vec<Graph> = (3..11u32)
        .map(|n| {
            let edges: Vec<(u32, u32)> = (1..=n)
                .flat_map(|u| ((u + 1)..=n).filter(move |v| (u * v) % 3 != 0).map(move |v| (u, v)))
                .collect();
            build(&edges)
        })
        .collect();

    let answers = |graph: &Graph| {
        (
            count_triangles(graph),
            count_bridges(graph),
            find_max_clique_size(graph),
            count_spanning_trees(graph),
            find_maximum_flow(graph, NodeId(1), NodeId(2)).unwrap(),
        )
    };

    let sequential: Vec<_> = graphs.iter().map(answers).collect();
    let concurrent: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = graphs
            .iter()
            .map(|graph| scope.spawn(move || answers(graph)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
}
