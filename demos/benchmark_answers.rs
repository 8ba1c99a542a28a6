//! Compute every ground-truth answer for one graph
//!
//! Run with: cargo run --example benchmark_answers [edge-list-file] [weighted|capacitated|both]
//!
//! Without a file, a built-in 6-vertex sample is used. Edge-list format is `n m` followed
//! by `m` lines `u v [weight] [capacity]`.

use graph_oracle::{
    check_bipartite, check_connectivity, count_biconnected_components, count_bridges,
    count_cycles, count_spanning_trees, count_triangles, find_max_clique_size,
    find_max_independent_set_size, find_maximum_flow, find_min_cost_max_flow, find_minimum_cycle,
    find_mst_weight, find_second_mst_weight, find_shortest_path_length, find_tree_diameter,
    has_eulerian_circuit, has_eulerian_path, has_hamiltonian_circuit, has_hamiltonian_path,
    is_tree, parse_edge_list, read_edge_list, Graph, NodeId, ParseMode,
};

const SAMPLE: &str = "6 8
1 2 4 3
1 3 2 2
2 3 1 1
2 4 5 2
3 5 8 3
4 5 2 2
4 6 6 3
5 6 3 2
";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next();
    let mode = match args.next().as_deref() {
        Some("weighted") => ParseMode::Weighted,
        Some("capacitated") => ParseMode::Capacitated,
        Some("plain") => ParseMode::Plain,
        _ => ParseMode::WeightedCapacitated,
    };

    let raw = match &path {
        Some(path) => read_edge_list(path, mode).await?,
        None => parse_edge_list(SAMPLE, ParseMode::WeightedCapacitated)?,
    };
    let graph = Graph::from_raw(&raw);

    println!("Graph ({mode}): {} vertices, {} edges\n", graph.num_vertices(), graph.num_edges());

    let (first, last) = match graph.vertices() {
        [first, .., last] => (*first, *last),
        [only] => (*only, *only),
        [] => (NodeId(1), NodeId(1)),
    };

    println!("Structure");
    println!("  connected({first}, {last}):  {}", check_connectivity(&graph, first, last));
    println!("  bipartite:             {}", check_bipartite(&graph));
    println!("  bridges:               {}", count_bridges(&graph));
    println!("  2-edge-connected:      {}", count_biconnected_components(&graph));
    println!("  triangles:             {}", count_triangles(&graph));
    println!("  simple cycles:         {}", count_cycles(&graph));
    println!("  shortest cycle:        {}", show(find_minimum_cycle(&graph)));
    println!("  eulerian path/circuit: {} / {}", has_eulerian_path(&graph), has_eulerian_circuit(&graph));
    println!(
        "  hamiltonian path/circuit: {} / {}",
        has_hamiltonian_path(&graph),
        has_hamiltonian_circuit(&graph)
    );

    println!("\nOptimization");
    println!("  max clique:            {}", find_max_clique_size(&graph));
    println!("  max independent set:   {}", find_max_independent_set_size(&graph));
    println!("  MST weight:            {}", find_mst_weight(&graph));
    println!("  second MST weight:     {}", show(find_second_mst_weight(&graph)));
    println!("  spanning trees:        {}", count_spanning_trees(&graph));

    println!("\nPaths and flows ({first} → {last})");
    println!(
        "  shortest path:         {}",
        show(find_shortest_path_length(&graph, first, last)?)
    );
    println!(
        "  maximum flow:          {}",
        show(find_maximum_flow(&graph, first, last)?)
    );
    if let Some(result) = find_min_cost_max_flow(&graph, first, last)? {
        println!("  min-cost max flow:     flow {} at cost {}", result.flow, result.cost);
    }

    if is_tree(&graph) {
        println!("\nTree");
        println!("  diameter:              {}", find_tree_diameter(&graph)?);
    }

    Ok(())
}

/// Render "no answer" the way benchmark questions expect it
fn show<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-1".to_string(), |v| v.to_string())
}
