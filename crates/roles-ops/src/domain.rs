//! How each value lattice turns per-pair verdicts into a value.

use roles_core::{DisjointSets, Lattice, Partition, Relation};

/// A value lattice that equivalence kinds can produce.
///
/// Implemented by [`Partition`] and [`Relation`].
pub trait RoleDomain: Lattice + 'static {
    /// Whether pair verdicts are symmetric. Symmetric domains compare ties
    /// with [`equivalent`](crate::TieComparator::equivalent) in both
    /// directions, the others with
    /// [`dominated`](crate::TieComparator::dominated) from the first node
    /// into the second.
    const SYMMETRIC: bool;

    /// Short domain label used in operator names.
    const LABEL: &'static str;

    /// Whether tie targets `a` and `b` are related in this value.
    fn relates(&self, a: usize, b: usize) -> bool;

    /// Class identifier of `node`, when the value groups nodes into classes.
    fn class_key(&self, _node: usize) -> Option<usize> {
        None
    }

    /// Builds a value over `n` nodes from a pair verdict.
    fn from_verdicts(n: usize, passes: &mut dyn FnMut(usize, usize) -> bool) -> Self;
}

impl RoleDomain for Partition {
    const SYMMETRIC: bool = true;
    const LABEL: &'static str = "equivalence";

    fn relates(&self, a: usize, b: usize) -> bool {
        self.same_class(a, b)
    }

    fn class_key(&self, node: usize) -> Option<usize> {
        Some(self.class_of(node))
    }

    // Pairs already joined through earlier merges are skipped; the result is
    // the transitive closure of the passing pairs.
    fn from_verdicts(n: usize, passes: &mut dyn FnMut(usize, usize) -> bool) -> Self {
        let mut sets = DisjointSets::new(n);
        for u in 0..n {
            for v in (u + 1)..n {
                if !sets.same(u, v) && passes(u, v) {
                    sets.union(u, v);
                }
            }
        }
        sets.into_partition()
    }
}

impl RoleDomain for Relation {
    const SYMMETRIC: bool = false;
    const LABEL: &'static str = "relation";

    fn relates(&self, a: usize, b: usize) -> bool {
        self.contains(a, b)
    }

    fn from_verdicts(n: usize, passes: &mut dyn FnMut(usize, usize) -> bool) -> Self {
        let mut relation = Relation::empty(n);
        for u in 0..n {
            for v in 0..n {
                if passes(u, v) {
                    relation.insert(u, v);
                }
            }
        }
        relation
    }
}
