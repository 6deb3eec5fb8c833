//! Betweenness centrality using Brandes' algorithm.
//!
//! For every vertex, sums over all ordered source/target pairs the fraction
//! of shortest paths passing through it. One unweighted BFS per source
//! records distances, shortest-path counts, and predecessors; dependencies
//! are then accumulated backward in decreasing-distance order.

use std::collections::{HashMap, VecDeque};

use tracing::instrument;

use crate::{Graph, Result};

impl Graph {
    /// Betweenness centrality for every vertex.
    ///
    /// Scores on undirected graphs are halved at the end, since each
    /// unordered pair is visited from both sides. All scores are
    /// non-negative; isolated vertices score 0.
    ///
    /// Time complexity: O(V * E) on unweighted graphs.
    #[instrument(skip(self))]
    pub fn betweenness_centralities(&self) -> Result<HashMap<String, f64>> {
        let vertices = self.vertices();
        let mut centrality: HashMap<String, f64> =
            vertices.iter().map(|v| (v.clone(), 0.0)).collect();

        for source in &vertices {
            // Forward pass: BFS recording sigma (shortest path counts),
            // distances, and shortest-path predecessors. `ordered` collects
            // vertices in non-decreasing distance from the source.
            let mut ordered: Vec<String> = Vec::new();
            let mut predecessors: HashMap<String, Vec<String>> = HashMap::new();
            let mut sigma: HashMap<String, f64> = HashMap::new();
            let mut dist: HashMap<String, usize> = HashMap::new();

            sigma.insert(source.clone(), 1.0);
            dist.insert(source.clone(), 0);

            let mut queue = VecDeque::from([source.clone()]);
            while let Some(current) = queue.pop_front() {
                ordered.push(current.clone());
                let next_dist = dist[&current] + 1;
                let current_sigma = sigma[&current];

                for neighbor in self.neighbors(&current)? {
                    if !dist.contains_key(&neighbor) {
                        dist.insert(neighbor.clone(), next_dist);
                        queue.push_back(neighbor.clone());
                    }
                    if dist[&neighbor] == next_dist {
                        *sigma.entry(neighbor.clone()).or_insert(0.0) += current_sigma;
                        predecessors
                            .entry(neighbor.clone())
                            .or_default()
                            .push(current.clone());
                    }
                }
            }

            // Backward pass: pop in reverse BFS order and push each vertex's
            // dependency onto its predecessors, proportional to their share
            // of shortest paths.
            let mut dependency: HashMap<String, f64> = HashMap::new();
            while let Some(vertex) = ordered.pop() {
                let vertex_dependency = dependency.get(&vertex).copied().unwrap_or(0.0);
                let vertex_sigma = sigma[&vertex];
                for predecessor in predecessors.get(&vertex).into_iter().flatten() {
                    let share = sigma[predecessor] / vertex_sigma * (1.0 + vertex_dependency);
                    *dependency.entry(predecessor.clone()).or_insert(0.0) += share;
                }
                if vertex != *source {
                    *centrality.get_mut(&vertex).expect("known vertex") += vertex_dependency;
                }
            }
        }

        if !self.is_directed() {
            // Each unordered pair was counted from both endpoints.
            for score in centrality.values_mut() {
                *score /= 2.0;
            }
        }

        Ok(centrality)
    }
}
