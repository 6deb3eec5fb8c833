//! Minimum spanning tree using Kruskal's algorithm, and the second-best
//! spanning tree via cycle-replacement analysis over the MST.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{algorithms::UnionFind, Edge, Graph, GraphError, Result};

/// Result of MST computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult {
    /// Edges in the minimum spanning tree (or forest).
    pub edges: Vec<Edge>,
    /// Total weight of the MST.
    pub total_weight: f64,
    /// Number of trees in the forest (1 for connected graphs).
    pub tree_count: usize,
    /// Vertices covered by the MST.
    pub vertices: Vec<String>,
}

impl MstResult {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
            tree_count: 0,
            vertices: Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.tree_count == 1
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Default for MstResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// A spanning tree candidate produced by cycle replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
    pub total_weight: f64,
}

/// Per-component rooting of the MST, used for tree-path queries.
struct RootedForest {
    /// Vertex -> (parent vertex, weight of the connecting tree edge).
    parent: HashMap<String, (String, f64)>,
    depth: HashMap<String, usize>,
}

impl RootedForest {
    fn build(vertices: &[String], tree_edges: &[Edge]) -> Self {
        let mut adjacency: HashMap<&str, Vec<(&str, f64)>> = HashMap::new();
        for edge in tree_edges {
            adjacency
                .entry(&edge.from)
                .or_default()
                .push((&edge.to, edge.weight));
            adjacency
                .entry(&edge.to)
                .or_default()
                .push((&edge.from, edge.weight));
        }

        let mut parent = HashMap::new();
        let mut depth = HashMap::new();
        for root in vertices {
            if depth.contains_key(root) {
                continue;
            }
            depth.insert(root.clone(), 0);
            let mut queue = VecDeque::from([root.clone()]);
            while let Some(current) = queue.pop_front() {
                let current_depth = depth[&current];
                for &(next, weight) in adjacency.get(current.as_str()).into_iter().flatten() {
                    if depth.contains_key(next) {
                        continue;
                    }
                    depth.insert(next.to_string(), current_depth + 1);
                    parent.insert(next.to_string(), (current.clone(), weight));
                    queue.push_back(next.to_string());
                }
            }
        }

        Self { parent, depth }
    }

    /// The maximum-weight edge on the unique tree path between `u` and `v`,
    /// as (weight, canonical endpoints). Walks both endpoints up to their
    /// lowest common ancestor. `None` when `u == v`.
    fn max_path_edge(&self, u: &str, v: &str) -> Option<(f64, String, String)> {
        let mut a = u.to_string();
        let mut b = v.to_string();
        let mut best: Option<(f64, String, String)> = None;

        let consider = |best: &mut Option<(f64, String, String)>, child: &str, w: f64| {
            let (parent, _) = &self.parent[child];
            let (lo, hi) = if child < parent.as_str() {
                (child.to_string(), parent.clone())
            } else {
                (parent.clone(), child.to_string())
            };
            if best.as_ref().map_or(true, |(bw, _, _)| w > *bw) {
                *best = Some((w, lo, hi));
            }
        };

        while self.depth[&a] > self.depth[&b] {
            let (p, w) = self.parent[&a].clone();
            consider(&mut best, &a, w);
            a = p;
        }
        while self.depth[&b] > self.depth[&a] {
            let (p, w) = self.parent[&b].clone();
            consider(&mut best, &b, w);
            b = p;
        }
        while a != b {
            let (pa, wa) = self.parent[&a].clone();
            consider(&mut best, &a, wa);
            a = pa;
            let (pb, wb) = self.parent[&b].clone();
            consider(&mut best, &b, wb);
            b = pb;
        }

        best
    }
}

impl Graph {
    /// Compute the minimum spanning tree (or forest) using Kruskal's
    /// algorithm.
    ///
    /// Edges are scanned in ascending weight order, ties broken by endpoint
    /// names, so repeated runs on the same graph produce the same edge set.
    /// Disconnected graphs yield a spanning forest (`tree_count` > 1), not an
    /// error.
    ///
    /// Time complexity: O(E log E) for sorting edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DirectedGraph`] if the graph is directed.
    #[instrument(skip(self))]
    pub fn minimum_spanning_tree(&self) -> Result<MstResult> {
        if self.is_directed() {
            return Err(GraphError::DirectedGraph {
                operation: "minimum_spanning_tree".to_string(),
            });
        }

        let vertices = self.vertices();
        if vertices.is_empty() {
            return Ok(MstResult::empty());
        }

        let mut edges = self.edges();
        edges.sort_by(|a, b| {
            a.weight
                .partial_cmp(&b.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.from.cmp(&b.from))
                .then_with(|| a.to.cmp(&b.to))
        });

        let mut uf = UnionFind::new(vertices.iter().cloned());
        let mut tree_edges = Vec::new();
        let mut total_weight = 0.0;

        for edge in edges {
            if uf.union(&edge.from, &edge.to)? {
                total_weight += edge.weight;
                tree_edges.push(edge);
            }
        }

        let tree_count = uf.num_sets();
        debug!(
            edges = tree_edges.len(),
            tree_count, total_weight, "spanning forest computed"
        );

        Ok(MstResult {
            edges: tree_edges,
            total_weight,
            tree_count,
            vertices,
        })
    }

    /// Compute the second-best spanning tree.
    ///
    /// For every non-tree edge, adding it to the MST closes exactly one
    /// cycle; swapping it for the heaviest tree edge on that cycle yields a
    /// candidate tree. The best candidate that is STRICTLY heavier than the
    /// MST is the second-best spanning tree. A candidate tying the MST's
    /// weight is another co-optimal MST, not the second-best.
    ///
    /// Returns `Ok(None)` when no such candidate exists (e.g. the graph has
    /// fewer than two distinct spanning trees).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DirectedGraph`] if the graph is directed.
    #[instrument(skip(self))]
    pub fn second_best_spanning_tree(&self) -> Result<Option<SpanningTree>> {
        if self.is_directed() {
            return Err(GraphError::DirectedGraph {
                operation: "second_best_spanning_tree".to_string(),
            });
        }

        let mst = self.minimum_spanning_tree()?;
        let forest = RootedForest::build(&mst.vertices, &mst.edges);

        let tree_edge_set: HashSet<(&str, &str)> = mst
            .edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect();

        // Best replacement found so far: (weight delta, removed endpoints,
        // added edge). Candidates compare by delta; the candidate tree weighs
        // mst.total_weight + delta.
        let mut best: Option<(f64, (String, String), Edge)> = None;

        for edge in self.edges() {
            if edge.from == edge.to || tree_edge_set.contains(&(edge.from.as_str(), edge.to.as_str()))
            {
                continue;
            }
            let Some((removed_weight, lo, hi)) = forest.max_path_edge(&edge.from, &edge.to) else {
                continue;
            };
            let delta = edge.weight - removed_weight;
            if delta <= 0.0 {
                continue;
            }
            if best.as_ref().map_or(true, |(d, _, _)| delta < *d) {
                best = Some((delta, (lo, hi), edge));
            }
        }

        let Some((delta, (removed_lo, removed_hi), added)) = best else {
            return Ok(None);
        };

        let mut edges: Vec<Edge> = mst
            .edges
            .into_iter()
            .filter(|e| !(e.from == removed_lo && e.to == removed_hi))
            .collect();
        edges.push(added);
        edges.sort_by(|a, b| a.from.cmp(&b.from).then_with(|| a.to.cmp(&b.to)));

        Ok(Some(SpanningTree {
            edges,
            total_weight: mst.total_weight + delta,
        }))
    }
}
