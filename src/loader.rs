//! Loading graphs from JSON files.
//!
//! File schema:
//!
//! ```json
//! {
//!   "directed": false,
//!   "weighted": true,
//!   "vertices": ["A", "B"],
//!   "edges": [{"from": "A", "to": "B", "weight": 4.0}],
//!   "marked": ["B"]
//! }
//! ```
//!
//! `vertices`, `marked`, and per-edge `weight` are optional; edge endpoints
//! are registered automatically, and omitted weights default to 1.0.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Graph, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EdgeRecord {
    from: String,
    to: String,
    weight: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct GraphFile {
    #[serde(default)]
    directed: bool,
    #[serde(default)]
    weighted: bool,
    #[serde(default)]
    vertices: Vec<String>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
    #[serde(default)]
    marked: Vec<String>,
}

/// Parses a graph from a JSON string.
///
/// # Errors
///
/// Returns [`crate::GraphError::InvalidGraphFile`] for malformed JSON and
/// [`crate::GraphError::VertexNotFound`] when a marked entry names an
/// unknown vertex.
pub fn parse_graph(json: &str) -> Result<Graph> {
    let file: GraphFile = serde_json::from_str(json)?;
    let mut graph = Graph::new(file.directed, file.weighted);

    for vertex in &file.vertices {
        graph.add_vertex(vertex.clone());
    }

    for edge in &file.edges {
        if !file.weighted {
            if let Some(w) = edge.weight {
                if (w - 1.0).abs() > f64::EPSILON {
                    warn!(
                        from = %edge.from,
                        to = %edge.to,
                        weight = w,
                        "edge weight ignored on unweighted graph"
                    );
                }
            }
        }
        graph.add_edge(edge.from.clone(), edge.to.clone(), edge.weight.unwrap_or(1.0));
    }

    for vertex in &file.marked {
        graph.mark_vertex(vertex)?;
    }

    Ok(graph)
}

/// Loads a graph from a JSON file on disk.
///
/// # Errors
///
/// Returns [`crate::GraphError::InvalidGraphFile`] when the file cannot be
/// read or parsed.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let text = fs::read_to_string(path)?;
    parse_graph(&text)
}
