//! Walkthrough of shortest-path queries on a small weighted graph.
//!
//! Run with: `cargo run --example dijkstra_demo`

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

    println!("Shortest distances from A:");
    let mut distances: Vec<_> = graph.shortest_distances("A")?.into_iter().collect();
    distances.sort_by(|a, b| a.0.cmp(&b.0));
    for (vertex, distance) in distances {
        println!("  A -> {vertex}: {distance}");
    }

    let path = graph.shortest_path("A", "E")?;
    println!();
    println!("Shortest path from A to E:");
    println!("  Path: {}", path.vertices.join(" -> "));
    println!("  Distance: {}", path.distance);

    Ok(())
}
