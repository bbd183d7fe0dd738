//! Tie enumeration contracts consumed by role operators.

/// Exposes, for each node, the ties seen from one perspective of a network
/// (for example its outgoing or incoming ties).
pub trait NetworkView {
    /// Opaque tie value handed to comparators.
    type Tie;

    /// Number of nodes in the underlying network.
    fn node_count(&self) -> usize;

    /// Ties of `node` in a stable order.
    fn ties(&self, node: usize) -> Box<dyn Iterator<Item = Self::Tie> + '_>;

    /// Node at the far end of `tie` as seen from `node`.
    fn tie_target(&self, node: usize, tie: &Self::Tie) -> usize;

    /// Stable index of `tie`, independent of enumeration order.
    fn tie_index(&self, node: usize, tie: &Self::Tie) -> usize;

    /// Number of ties of `node`.
    fn count_ties(&self, node: usize) -> usize {
        self.ties(node).count()
    }
}

/// A view that can answer as if two reference nodes had exchanged identities.
///
/// Structural comparisons of `ref_a` and `ref_b` read the ties of `ref_b`
/// through this view so that loops and mutual ties between the two compared
/// nodes line up. The provided methods implement the swap rule: for
/// `node == ref_b` a target equal to `ref_a` is reported as `ref_b` and a
/// target equal to `ref_b` as `ref_a`; every other node, `ref_a` included,
/// is answered by the plain view.
pub trait TransposableNetworkView: NetworkView {
    /// Ties of `node` with `ref_a` and `ref_b` exchanged.
    fn ties_transposed(
        &self,
        _ref_a: usize,
        _ref_b: usize,
        node: usize,
    ) -> Box<dyn Iterator<Item = Self::Tie> + '_> {
        self.ties(node)
    }

    /// Target of `tie` with `ref_a` and `ref_b` exchanged.
    fn tie_target_transposed(
        &self,
        ref_a: usize,
        ref_b: usize,
        node: usize,
        tie: &Self::Tie,
    ) -> usize {
        transpose_target(ref_a, ref_b, node, self.tie_target(node, tie))
    }

    /// Stable index of `tie` with `ref_a` and `ref_b` exchanged.
    fn tie_index_transposed(
        &self,
        _ref_a: usize,
        _ref_b: usize,
        node: usize,
        tie: &Self::Tie,
    ) -> usize {
        self.tie_index(node, tie)
    }

    /// Number of ties of `node` with `ref_a` and `ref_b` exchanged.
    fn count_ties_transposed(&self, _ref_a: usize, _ref_b: usize, node: usize) -> usize {
        self.count_ties(node)
    }
}

/// Applies the swap rule of [`TransposableNetworkView`] to a single target.
pub fn transpose_target(ref_a: usize, ref_b: usize, node: usize, target: usize) -> usize {
    if node != ref_b {
        target
    } else if target == ref_a {
        ref_b
    } else if target == ref_b {
        ref_a
    } else {
        target
    }
}

impl<V: NetworkView + ?Sized> NetworkView for &V {
    type Tie = V::Tie;

    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn ties(&self, node: usize) -> Box<dyn Iterator<Item = Self::Tie> + '_> {
        (**self).ties(node)
    }

    fn tie_target(&self, node: usize, tie: &Self::Tie) -> usize {
        (**self).tie_target(node, tie)
    }

    fn tie_index(&self, node: usize, tie: &Self::Tie) -> usize {
        (**self).tie_index(node, tie)
    }

    fn count_ties(&self, node: usize) -> usize {
        (**self).count_ties(node)
    }
}

impl<V: TransposableNetworkView + ?Sized> TransposableNetworkView for &V {
    fn ties_transposed(
        &self,
        ref_a: usize,
        ref_b: usize,
        node: usize,
    ) -> Box<dyn Iterator<Item = Self::Tie> + '_> {
        (**self).ties_transposed(ref_a, ref_b, node)
    }

    fn tie_target_transposed(
        &self,
        ref_a: usize,
        ref_b: usize,
        node: usize,
        tie: &Self::Tie,
    ) -> usize {
        (**self).tie_target_transposed(ref_a, ref_b, node, tie)
    }

    fn tie_index_transposed(
        &self,
        ref_a: usize,
        ref_b: usize,
        node: usize,
        tie: &Self::Tie,
    ) -> usize {
        (**self).tie_index_transposed(ref_a, ref_b, node, tie)
    }

    fn count_ties_transposed(&self, ref_a: usize, ref_b: usize, node: usize) -> usize {
        (**self).count_ties_transposed(ref_a, ref_b, node)
    }
}
