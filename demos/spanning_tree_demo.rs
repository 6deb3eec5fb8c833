//! Walkthrough of spanning tree construction, including the second-best
//! tree.
//!
//! Run with: `cargo run --example spanning_tree_demo`

use graph_toolkit::Graph;

fn main() -> graph_toolkit::Result<()> {
    let mut graph = Graph::new(false, true);
    graph.add_edge("A", "B", 4.0);
    graph.add_edge("A", "C", 2.0);
    graph.add_edge("B", "C", 1.0);
    graph.add_edge("B", "D", 5.0);
    graph.add_edge("C", "D", 8.0);
    graph.add_edge("C", "E", 10.0);
    graph.add_edge("D", "E", 2.0);

    let mst = graph.minimum_spanning_tree()?;
    println!("Minimum spanning tree ({} trees):", mst.tree_count);
    for edge in &mst.edges {
        println!("  {} - {} ({})", edge.from, edge.to, edge.weight);
    }
    println!("  Total weight: {}", mst.total_weight);

    println!();
    match graph.second_best_spanning_tree()? {
        Some(tree) => {
            println!("Second-best spanning tree:");
            for edge in &tree.edges {
                println!("  {} - {} ({})", edge.from, edge.to, edge.weight);
            }
            println!("  Total weight: {}", tree.total_weight);
        },
        None => println!("No second-best spanning tree exists"),
    }

    Ok(())
}
