//! Shortest-hop paths that maximize the number of marked vertices.
//!
//! Among all minimum-hop-count paths between two vertices, finds the one
//! traversing the most vertices from the graph's marked subset and returns
//! that count. A plain BFS is not enough: each vertex carries both its best
//! known hop distance and the best marked count achievable at that distance,
//! and a vertex is re-expanded whenever either improves.

use std::collections::{HashMap, VecDeque};

use tracing::instrument;

use crate::{Graph, GraphError, Result};

impl Graph {
    /// Maximum number of marked vertices on any shortest path from `source`
    /// to `target`.
    ///
    /// The endpoints' own marked status counts toward the total: when
    /// `source == target` the result is 1 if the source is marked, else 0.
    /// Returns 0 when no path exists.
    ///
    /// Each vertex is re-enqueued at most once per in-edge (counts only
    /// improve at a fixed distance), so the traversal terminates on every
    /// graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if source or target is absent.
    #[instrument(skip(self))]
    pub fn max_marked_on_shortest_path(&self, source: &str, target: &str) -> Result<usize> {
        if !self.contains_vertex(source) {
            return Err(GraphError::VertexNotFound(source.to_string()));
        }
        if !self.contains_vertex(target) {
            return Err(GraphError::VertexNotFound(target.to_string()));
        }

        let mut dist: HashMap<String, usize> = HashMap::new();
        let mut count: HashMap<String, usize> = HashMap::new();
        dist.insert(source.to_string(), 0);
        count.insert(source.to_string(), usize::from(self.is_marked(source)));

        let mut frontier = VecDeque::from([source.to_string()]);

        while let Some(current) = frontier.pop_front() {
            let current_dist = dist[&current];
            let current_count = count[&current];

            for neighbor in self.neighbors(&current)? {
                let next_dist = current_dist + 1;
                let next_count = current_count + usize::from(self.is_marked(&neighbor));

                match dist.get(&neighbor).copied() {
                    None => {
                        dist.insert(neighbor.clone(), next_dist);
                        count.insert(neighbor.clone(), next_count);
                        frontier.push_back(neighbor);
                    },
                    Some(d) if next_dist < d => {
                        dist.insert(neighbor.clone(), next_dist);
                        count.insert(neighbor.clone(), next_count);
                        frontier.push_back(neighbor);
                    },
                    Some(d) if next_dist == d && next_count > count[&neighbor] => {
                        count.insert(neighbor.clone(), next_count);
                        frontier.push_back(neighbor);
                    },
                    Some(_) => {},
                }
            }
        }

        Ok(count.get(target).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(marked: &[&str]) -> Graph {
        // A - B - C - D - E
        let mut graph = Graph::new(false, false);
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 1.0);
        graph.add_edge("C", "D", 1.0);
        graph.add_edge("D", "E", 1.0);
        for m in marked {
            graph.mark_vertex(m).unwrap();
        }
        graph
    }

    #[test]
    fn worked_example_path_counts_two() {
        let graph = path_graph(&["B", "D"]);
        assert_eq!(graph.max_marked_on_shortest_path("A", "E").unwrap(), 2);
    }

    #[test]
    fn no_marked_vertices_counts_zero() {
        let graph = path_graph(&[]);
        assert_eq!(graph.max_marked_on_shortest_path("A", "E").unwrap(), 0);
    }

    #[test]
    fn source_marked_status_counts() {
        let graph = path_graph(&["A"]);
        assert_eq!(graph.max_marked_on_shortest_path("A", "E").unwrap(), 1);
        assert_eq!(graph.max_marked_on_shortest_path("A", "A").unwrap(), 1);

        let unmarked = path_graph(&["B"]);
        assert_eq!(unmarked.max_marked_on_shortest_path("A", "A").unwrap(), 0);
    }

    #[test]
    fn picks_richer_of_two_shortest_paths() {
        // Two hop-2 routes from S to T; only the one through M is marked.
        let mut graph = Graph::new(false, false);
        graph.add_edge("S", "M", 1.0);
        graph.add_edge("M", "T", 1.0);
        graph.add_edge("S", "U", 1.0);
        graph.add_edge("U", "T", 1.0);
        graph.mark_vertex("M").unwrap();

        assert_eq!(graph.max_marked_on_shortest_path("S", "T").unwrap(), 1);
    }

    #[test]
    fn ignores_longer_path_with_more_marks() {
        // S-A-T is the shortest route (2 hops, no marks); the 3-hop route
        // through two marked vertices must not be chosen.
        let mut graph = Graph::new(false, false);
        graph.add_edge("S", "A", 1.0);
        graph.add_edge("A", "T", 1.0);
        graph.add_edge("S", "M1", 1.0);
        graph.add_edge("M1", "M2", 1.0);
        graph.add_edge("M2", "T", 1.0);
        graph.mark_vertex("M1").unwrap();
        graph.mark_vertex("M2").unwrap();

        assert_eq!(graph.max_marked_on_shortest_path("S", "T").unwrap(), 0);
    }

    #[test]
    fn late_count_improvement_propagates() {
        // C is reached at distance 2 through both A and B; the richer count
        // through B arrives after C was first recorded and must still reach
        // T via re-expansion.
        let mut graph = Graph::new(true, false);
        graph.add_edge("S", "A", 1.0);
        graph.add_edge("S", "B", 1.0);
        graph.add_edge("A", "C", 1.0);
        graph.add_edge("B", "C", 1.0);
        graph.add_edge("C", "T", 1.0);
        graph.mark_vertex("B").unwrap();

        assert_eq!(graph.max_marked_on_shortest_path("S", "T").unwrap(), 1);
    }

    #[test]
    fn no_path_returns_zero() {
        let mut graph = Graph::new(false, false);
        graph.add_edge("A", "B", 1.0);
        graph.add_vertex("Z");
        graph.mark_vertex("Z").unwrap();

        assert_eq!(graph.max_marked_on_shortest_path("A", "Z").unwrap(), 0);
    }

    #[test]
    fn missing_endpoints_are_errors() {
        let mut graph = Graph::new(false, false);
        graph.add_vertex("A");
        assert_eq!(
            graph.max_marked_on_shortest_path("X", "A"),
            Err(GraphError::VertexNotFound("X".to_string()))
        );
        assert_eq!(
            graph.max_marked_on_shortest_path("A", "X"),
            Err(GraphError::VertexNotFound("X".to_string()))
        );
    }

    #[test]
    fn count_bounded_by_path_length_and_marked_set() {
        let mut graph = Graph::new(false, false);
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 1.0);
        for v in ["A", "B", "C"] {
            graph.mark_vertex(v).unwrap();
        }

        let result = graph.max_marked_on_shortest_path("A", "C").unwrap();
        // hop-distance + 1 vertices on the path, all marked
        assert_eq!(result, 3);
        assert!(result <= graph.marked_vertices().len());
    }

    #[test]
    fn directed_marked_path() {
        let mut graph = Graph::new(true, false);
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 1.0);
        graph.mark_vertex("B").unwrap();

        assert_eq!(graph.max_marked_on_shortest_path("A", "C").unwrap(), 1);
        assert_eq!(graph.max_marked_on_shortest_path("C", "A").unwrap(), 0);
    }
}
