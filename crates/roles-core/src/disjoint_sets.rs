//! Union-find over a dense node domain.

use crate::partition::Partition;

/// Disjoint-set forest with path compression.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Number of elements tracked by the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns whether the forest tracks no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `idx`.
    pub fn find(&mut self, idx: usize) -> usize {
        let mut root = idx;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cursor = idx;
        while self.parent[cursor] != root {
            let next = self.parent[cursor];
            self.parent[cursor] = root;
            cursor = next;
        }
        root
    }

    /// Merges the sets containing `a` and `b`. Returns `false` if they were
    /// already merged.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        if ra < rb {
            self.parent[rb] = ra;
        } else {
            self.parent[ra] = rb;
        }
        true
    }

    /// Returns whether `a` and `b` belong to the same set.
    pub fn same(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Converts the forest into the partition it induces.
    pub fn into_partition(mut self) -> Partition {
        let roots: Vec<usize> = (0..self.parent.len()).map(|idx| self.find(idx)).collect();
        Partition::from_labels(&roots)
    }
}
