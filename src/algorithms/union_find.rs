//! Disjoint-Set Union (Union-Find) with path compression and union by rank.
//!
//! Tracks a partition of string elements into disjoint sets. Used by the
//! spanning tree builder for cycle detection, and usable on its own for
//! connectivity queries.

use std::collections::HashMap;

use crate::{GraphError, Result};

/// Union-Find data structure over string elements.
///
/// Both optimizations are applied: path compression during [`find`] and
/// union by rank during [`union`], giving near-constant amortized time per
/// operation.
///
/// [`find`]: UnionFind::find
/// [`union`]: UnionFind::union
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: HashMap<String, String>,
    rank: HashMap<String, usize>,
    size: HashMap<String, usize>,
}

impl UnionFind {
    /// Creates a structure where every element is its own singleton set.
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut parent = HashMap::new();
        let mut rank = HashMap::new();
        let mut size = HashMap::new();
        for elem in elements {
            let elem = elem.into();
            parent.insert(elem.clone(), elem.clone());
            rank.insert(elem.clone(), 0);
            size.insert(elem, 1);
        }
        Self { parent, rank, size }
    }

    /// Registers a new singleton set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateElement`] if the element is already
    /// registered.
    pub fn make_set(&mut self, x: &str) -> Result<()> {
        if self.parent.contains_key(x) {
            return Err(GraphError::DuplicateElement(x.to_string()));
        }
        self.parent.insert(x.to_string(), x.to_string());
        self.rank.insert(x.to_string(), 0);
        self.size.insert(x.to_string(), 1);
        Ok(())
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Every node visited on the way to the root is re-pointed directly at
    /// the root, so repeated finds on the same chain flatten it. The walk is
    /// an explicit loop; long parent chains cannot overflow the call stack.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `x` was never registered.
    pub fn find(&mut self, x: &str) -> Result<String> {
        if !self.parent.contains_key(x) {
            return Err(GraphError::VertexNotFound(x.to_string()));
        }

        let mut root = x.to_string();
        loop {
            let p = self.parent[&root].clone();
            if p == root {
                break;
            }
            root = p;
        }

        // Second pass: compress the path onto the root.
        let mut current = x.to_string();
        while current != root {
            let next = self.parent[&current].clone();
            self.parent.insert(current, root.clone());
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` when both elements already share a root (this is how
    /// cycle edges are detected during spanning tree construction).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either element was never
    /// registered.
    pub fn union(&mut self, x: &str, y: &str) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(false);
        }

        let rank_x = self.rank[&root_x];
        let rank_y = self.rank[&root_y];

        let (winner, loser) = match rank_x.cmp(&rank_y) {
            std::cmp::Ordering::Less => (root_y, root_x),
            std::cmp::Ordering::Greater => (root_x, root_y),
            std::cmp::Ordering::Equal => {
                self.rank.insert(root_x.clone(), rank_x + 1);
                (root_x, root_y)
            },
        };

        self.parent.insert(loser.clone(), winner.clone());
        let merged = self.size[&winner] + self.size[&loser];
        self.size.insert(winner, merged);
        Ok(true)
    }

    /// Whether `x` and `y` belong to the same set.
    pub fn connected(&mut self, x: &str, y: &str) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Number of elements in the set containing `x`.
    pub fn set_size(&mut self, x: &str) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[&root])
    }

    /// Number of disjoint sets.
    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.parent.iter().filter(|(elem, p)| elem == p).count()
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
