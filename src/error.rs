//! Error types for the graph toolkit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error type for graph operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphError {
    /// Vertex with the given name was not found.
    VertexNotFound(String),
    /// No edge exists between the given vertices.
    EdgeNotFound { from: String, to: String },
    /// The operation is only defined for undirected graphs.
    DirectedGraph { operation: String },
    /// Negative weight found during weighted path search.
    NegativeWeight { from: String, to: String, weight: f64 },
    /// Element registered twice in a disjoint-set structure.
    DuplicateElement(String),
    /// Graph file could not be read or parsed.
    InvalidGraphFile(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexNotFound(name) => write!(f, "Vertex not found: {name}"),
            Self::EdgeNotFound { from, to } => {
                write!(f, "No edge between {from} and {to}")
            },
            Self::DirectedGraph { operation } => {
                write!(f, "{operation} requires an undirected graph")
            },
            Self::NegativeWeight { from, to, weight } => {
                write!(f, "Edge {from}-{to} has negative weight: {weight}")
            },
            Self::DuplicateElement(name) => {
                write!(f, "Element already registered: {name}")
            },
            Self::InvalidGraphFile(e) => write!(f, "Invalid graph file: {e}"),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<std::io::Error> for GraphError {
    fn from(e: std::io::Error) -> Self {
        Self::InvalidGraphFile(e.to_string())
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidGraphFile(e.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GraphError::VertexNotFound("A".to_string()).to_string(),
            "Vertex not found: A"
        );
        assert_eq!(
            GraphError::EdgeNotFound {
                from: "A".to_string(),
                to: "B".to_string(),
            }
            .to_string(),
            "No edge between A and B"
        );
        assert_eq!(
            GraphError::DirectedGraph {
                operation: "minimum_spanning_tree".to_string(),
            }
            .to_string(),
            "minimum_spanning_tree requires an undirected graph"
        );
    }

    #[test]
    fn negative_weight_display() {
        let err = GraphError::NegativeWeight {
            from: "A".to_string(),
            to: "B".to_string(),
            weight: -2.5,
        };
        assert_eq!(err.to_string(), "Edge A-B has negative weight: -2.5");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GraphError = io.into();
        assert!(matches!(err, GraphError::InvalidGraphFile(_)));
    }

    #[test]
    fn serde_round_trip() {
        let err = GraphError::VertexNotFound("X".to_string());
        let json = serde_json::to_string(&err).unwrap();
        let back: GraphError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
