//! Pluggable whole-graph vertex analyses.
//!
//! Which analysis a harness runs is a construction-time decision: callers
//! pick a strategy value (or trait object) up front instead of flipping a
//! shared flag at runtime. Betweenness centrality is the shipped strategy;
//! alternatives with the same shape (score every vertex) plug in alongside
//! it.

use std::collections::HashMap;

use crate::{Graph, Result};

/// An analysis that assigns a score to every vertex of a graph.
pub trait VertexScoring {
    /// Human-readable name for reports.
    fn name(&self) -> &'static str;

    /// Scores for every vertex in the graph.
    fn scores(&self, graph: &Graph) -> Result<HashMap<String, f64>>;
}

/// Betweenness centrality scoring (Brandes' algorithm).
#[derive(Debug, Clone, Copy, Default)]
pub struct BetweennessCentrality;

impl VertexScoring for BetweennessCentrality {
    fn name(&self) -> &'static str {
        "betweenness_centrality"
    }

    fn scores(&self, graph: &Graph) -> Result<HashMap<String, f64>> {
        graph.betweenness_centralities()
    }
}
