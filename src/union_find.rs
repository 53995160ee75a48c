//! Weighted quick-union with path compression.
//!
//! Tracks a partition of the fixed universe `{0, .., size-1}` under repeated
//! merges. The smaller tree is always hung under the larger root, and every
//! `find` re-points the nodes it visits straight at the root, so a sequence of
//! m operations costs O(m log* size).
//!
//! Knows nothing about grids; [`crate::percolation::Percolation`] maps sites
//! onto element ids.

use crate::error::{PercolationError, Result};

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    /// Subtree size, only meaningful at roots.
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Create `size` singleton sets.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(PercolationError::invalid("union-find size", size));
        }
        Ok(Self {
            parent: (0..size).collect(),
            size: vec![1; size],
            count: size,
        })
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Always false: construction rejects an empty universe.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    fn validate(&self, element: usize) -> Result<()> {
        if element >= self.parent.len() {
            return Err(PercolationError::ElementOutOfRange {
                element,
                size: self.parent.len(),
            });
        }
        Ok(())
    }

    /// Canonical representative of the set containing `element`.
    pub fn find(&mut self, element: usize) -> Result<usize> {
        self.validate(element)?;

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point every node on the path at the root.
        let mut node = element;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Merge the sets containing `a` and `b`. No-op if they already share one.
    pub fn union(&mut self, a: usize, b: usize) -> Result<()> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(());
        }

        let (small, large) = if self.size[root_a] < self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;
        Ok(())
    }

    /// Size of the set containing `element`.
    pub fn set_size(&mut self, element: usize) -> Result<usize> {
        let root = self.find(element)?;
        Ok(self.size[root])
    }

    /// Height of the tree containing `element`, without compressing it.
    #[cfg(test)]
    fn depth(&self, element: usize) -> usize {
        let mut depth = 0;
        let mut node = element;
        while self.parent[node] != node {
            node = self.parent[node];
            depth += 1;
        }
        depth
    }
}
