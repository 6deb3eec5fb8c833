//! Single-source shortest paths on non-negatively-weighted graphs using
//! Dijkstra's algorithm.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Graph, GraphError, Result};

/// A shortest path between two vertices.
///
/// An unreachable target is a normal outcome, not an error: the distance is
/// infinite and the vertex list is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Total weight of the path, `f64::INFINITY` when no path exists.
    pub distance: f64,
    /// Vertices from source to target inclusive; empty when no path exists.
    pub vertices: Vec<String>,
}

impl ShortestPath {
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            vertices: Vec::new(),
        }
    }

    #[must_use]
    pub fn found(&self) -> bool {
        self.distance.is_finite()
    }

    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Entry in the frontier min-heap.
#[derive(Debug, Clone)]
struct FrontierEntry {
    vertex: String,
    distance: f64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (lower distance = higher priority)
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Graph {
    /// Rejects graphs with negative edge weights before any traversal work.
    fn check_non_negative_weights(&self) -> Result<()> {
        for edge in self.edges() {
            if edge.weight < 0.0 {
                return Err(GraphError::NegativeWeight {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                });
            }
        }
        Ok(())
    }

    /// Shortest distances from `source` to every vertex.
    ///
    /// Unreachable vertices keep the `f64::INFINITY` sentinel. Stale frontier
    /// entries (re-inserted vertices whose distance later improved) are
    /// skipped on extraction.
    ///
    /// Time complexity: O((V + E) log V).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the source is absent and
    /// [`GraphError::NegativeWeight`] if any edge weight is negative.
    #[instrument(skip(self))]
    pub fn shortest_distances(&self, source: &str) -> Result<HashMap<String, f64>> {
        if !self.contains_vertex(source) {
            return Err(GraphError::VertexNotFound(source.to_string()));
        }
        self.check_non_negative_weights()?;

        let mut distances: HashMap<String, f64> = self
            .vertices()
            .into_iter()
            .map(|v| (v, f64::INFINITY))
            .collect();
        distances.insert(source.to_string(), 0.0);

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            vertex: source.to_string(),
            distance: 0.0,
        });
        let mut visited = HashSet::new();

        while let Some(current) = frontier.pop() {
            if !visited.insert(current.vertex.clone()) {
                continue;
            }

            for neighbor in self.neighbors(&current.vertex)? {
                if visited.contains(&neighbor) {
                    continue;
                }
                let weight = self.weight(&current.vertex, &neighbor)?;
                let candidate = current.distance + weight;
                if candidate < distances[&neighbor] {
                    distances.insert(neighbor.clone(), candidate);
                    frontier.push(FrontierEntry {
                        vertex: neighbor,
                        distance: candidate,
                    });
                }
            }
        }

        Ok(distances)
    }

    /// Shortest path from `source` to `target`.
    ///
    /// Stops as soon as the target is extracted from the frontier; distances
    /// of unprocessed vertices are not finalized at that point, but the
    /// target's is. Returns the [`ShortestPath::unreachable`] sentinel when
    /// no path exists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if source or target is absent
    /// and [`GraphError::NegativeWeight`] if any edge weight is negative.
    #[instrument(skip(self))]
    pub fn shortest_path(&self, source: &str, target: &str) -> Result<ShortestPath> {
        if !self.contains_vertex(source) {
            return Err(GraphError::VertexNotFound(source.to_string()));
        }
        if !self.contains_vertex(target) {
            return Err(GraphError::VertexNotFound(target.to_string()));
        }
        self.check_non_negative_weights()?;

        if source == target {
            return Ok(ShortestPath {
                distance: 0.0,
                vertices: vec![source.to_string()],
            });
        }

        let mut distances: HashMap<String, f64> = HashMap::new();
        let mut predecessor: HashMap<String, String> = HashMap::new();
        distances.insert(source.to_string(), 0.0);

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            vertex: source.to_string(),
            distance: 0.0,
        });
        let mut visited = HashSet::new();

        while let Some(current) = frontier.pop() {
            if current.vertex == target {
                return Ok(ShortestPath {
                    distance: current.distance,
                    vertices: reconstruct(&predecessor, source, target),
                });
            }
            if !visited.insert(current.vertex.clone()) {
                continue;
            }

            for neighbor in self.neighbors(&current.vertex)? {
                if visited.contains(&neighbor) {
                    continue;
                }
                let weight = self.weight(&current.vertex, &neighbor)?;
                let candidate = current.distance + weight;
                if candidate < distances.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
                    distances.insert(neighbor.clone(), candidate);
                    predecessor.insert(neighbor.clone(), current.vertex.clone());
                    frontier.push(FrontierEntry {
                        vertex: neighbor,
                        distance: candidate,
                    });
                }
            }
        }

        Ok(ShortestPath::unreachable())
    }
}

/// Walks the predecessor table backward from target to source.
fn reconstruct(predecessor: &HashMap<String, String>, source: &str, target: &str) -> Vec<String> {
    let mut vertices = vec![target.to_string()];
    let mut current = target;
    while current != source {
        match predecessor.get(current) {
            Some(p) => {
                vertices.push(p.clone());
                current = p.as_str();
            },
            None => break,
        }
    }
    vertices.reverse();
    vertices
}
