//! In-memory graph snapshot and classical graph algorithms.
//!
//! The [`Graph`] container holds vertices (string identifiers), edges with
//! optional weights, a `directed`/`weighted` pair of flags fixed at
//! construction, and a distinguished subset of "marked" vertices. All
//! algorithms in [`algorithms`] borrow the graph read-only and return value
//! results; working state never outlives one invocation.

#![allow(clippy::missing_errors_doc)] // Error conditions are self-evident from Result types
#![allow(clippy::uninlined_format_args)] // Keep format strings readable

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

pub mod algorithms;
pub mod analysis;
mod error;
pub mod loader;
#[cfg(feature = "metrics")]
pub mod metrics;

pub use algorithms::{MstResult, ShortestPath, SpanningTree, UnionFind};
pub use analysis::{BetweennessCentrality, VertexScoring};
pub use error::{GraphError, Result};
pub use loader::{load_graph, parse_graph};

/// A weighted edge between two vertices.
///
/// On unweighted graphs the weight is always 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl Edge {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Mutable in-memory graph.
///
/// Vertex identifiers are opaque strings. Neighbor enumeration is sorted, so
/// every read is deterministic for a given graph instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    directed: bool,
    weighted: bool,
    adjacency: BTreeMap<String, BTreeMap<String, f64>>,
    marked: BTreeSet<String>,
}

impl Graph {
    /// Creates an empty graph with the given orientation and weighting.
    #[must_use]
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            directed,
            weighted,
            adjacency: BTreeMap::new(),
            marked: BTreeSet::new(),
        }
    }

    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    #[must_use]
    pub const fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Registers a vertex. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, name: impl Into<String>) {
        self.adjacency.entry(name.into()).or_default();
    }

    /// Adds an edge, registering both endpoints if needed.
    ///
    /// On unweighted graphs the stored weight is forced to 1.0. Adding an
    /// edge that already exists overwrites its weight.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, weight: f64) {
        let from = from.into();
        let to = to.into();
        let weight = if self.weighted { weight } else { 1.0 };

        self.adjacency.entry(to.clone()).or_default();
        self.adjacency
            .entry(from.clone())
            .or_default()
            .insert(to.clone(), weight);
        if !self.directed && from != to {
            self.adjacency.entry(to).or_default().insert(from, weight);
        }
    }

    #[must_use]
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// All vertices in sorted order.
    #[must_use]
    pub fn vertices(&self) -> Vec<String> {
        self.adjacency.keys().cloned().collect()
    }

    /// All edges as `(from, to, weight)` triples, in sorted order.
    ///
    /// Undirected edges are reported once, with `from <= to`.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (from, neighbors) in &self.adjacency {
            for (to, &weight) in neighbors {
                if !self.directed && from > to {
                    continue;
                }
                edges.push(Edge::new(from.clone(), to.clone(), weight));
            }
        }
        edges
    }

    /// Neighbors of a vertex, in sorted order.
    pub fn neighbors(&self, name: &str) -> Result<Vec<String>> {
        self.adjacency
            .get(name)
            .map(|n| n.keys().cloned().collect())
            .ok_or_else(|| GraphError::VertexNotFound(name.to_string()))
    }

    /// Weight of the edge between two vertices.
    pub fn weight(&self, from: &str, to: &str) -> Result<f64> {
        if !self.contains_vertex(from) {
            return Err(GraphError::VertexNotFound(from.to_string()));
        }
        if !self.contains_vertex(to) {
            return Err(GraphError::VertexNotFound(to.to_string()));
        }
        self.adjacency[from]
            .get(to)
            .copied()
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Adds a vertex to the marked subset.
    pub fn mark_vertex(&mut self, name: &str) -> Result<()> {
        if !self.contains_vertex(name) {
            return Err(GraphError::VertexNotFound(name.to_string()));
        }
        self.marked.insert(name.to_string());
        Ok(())
    }

    #[must_use]
    pub fn is_marked(&self, name: &str) -> bool {
        self.marked.contains(name)
    }

    /// The marked subset, in sorted order.
    #[must_use]
    pub fn marked_vertices(&self) -> Vec<String> {
        self.marked.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let graph = Graph::new(false, true);
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.vertices().is_empty());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut graph = Graph::new(false, false);
        graph.add_vertex("A");
        graph.add_vertex("A");
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn add_edge_registers_endpoints() {
        let mut graph = Graph::new(false, true);
        graph.add_edge("A", "B", 2.0);
        assert!(graph.contains_vertex("A"));
        assert!(graph.contains_vertex("B"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn undirected_edge_visible_from_both_sides() {
        let mut graph = Graph::new(false, true);
        graph.add_edge("A", "B", 3.0);
        assert_eq!(graph.neighbors("A").unwrap(), vec!["B".to_string()]);
        assert_eq!(graph.neighbors("B").unwrap(), vec!["A".to_string()]);
        assert!((graph.weight("B", "A").unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn directed_edge_is_one_way() {
        let mut graph = Graph::new(true, true);
        graph.add_edge("A", "B", 1.0);
        assert_eq!(graph.neighbors("A").unwrap(), vec!["B".to_string()]);
        assert!(graph.neighbors("B").unwrap().is_empty());
        assert!(graph.weight("B", "A").is_err());
    }

    #[test]
    fn unweighted_graph_forces_unit_weight() {
        let mut graph = Graph::new(false, false);
        graph.add_edge("A", "B", 42.0);
        assert!((graph.weight("A", "B").unwrap() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn undirected_edges_reported_once() {
        let mut graph = Graph::new(false, true);
        graph.add_edge("B", "A", 1.0);
        graph.add_edge("B", "C", 2.0);
        let edges = graph.edges();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0], Edge::new("A", "B", 1.0));
        assert_eq!(edges[1], Edge::new("B", "C", 2.0));
    }

    #[test]
    fn directed_edges_keep_orientation() {
        let mut graph = Graph::new(true, true);
        graph.add_edge("B", "A", 1.0);
        graph.add_edge("A", "B", 2.0);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn neighbors_sorted_and_deterministic() {
        let mut graph = Graph::new(false, false);
        graph.add_edge("M", "Z", 1.0);
        graph.add_edge("M", "A", 1.0);
        graph.add_edge("M", "K", 1.0);
        assert_eq!(
            graph.neighbors("M").unwrap(),
            vec!["A".to_string(), "K".to_string(), "Z".to_string()]
        );
    }

    #[test]
    fn neighbors_unknown_vertex() {
        let graph = Graph::new(false, false);
        assert_eq!(
            graph.neighbors("A"),
            Err(GraphError::VertexNotFound("A".to_string()))
        );
    }

    #[test]
    fn weight_missing_edge() {
        let mut graph = Graph::new(false, true);
        graph.add_vertex("A");
        graph.add_vertex("B");
        assert_eq!(
            graph.weight("A", "B"),
            Err(GraphError::EdgeNotFound {
                from: "A".to_string(),
                to: "B".to_string(),
            })
        );
    }

    #[test]
    fn marking_requires_known_vertex() {
        let mut graph = Graph::new(false, false);
        assert!(graph.mark_vertex("A").is_err());

        graph.add_vertex("A");
        graph.mark_vertex("A").unwrap();
        assert!(graph.is_marked("A"));
        assert!(!graph.is_marked("B"));
        assert_eq!(graph.marked_vertices(), vec!["A".to_string()]);
    }

    #[test]
    fn self_loop_counted_once() {
        let mut graph = Graph::new(false, true);
        graph.add_edge("A", "A", 5.0);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors("A").unwrap(), vec!["A".to_string()]);
    }

    #[test]
    fn graph_serde_round_trip() {
        let mut graph = Graph::new(false, true);
        graph.add_edge("A", "B", 4.0);
        graph.mark_vertex("B").unwrap();

        let json = serde_json::to_string(&graph).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(graph, back);
    }
}
