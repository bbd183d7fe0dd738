//! The lattice contract shared by partitions and relations.

use std::fmt::Debug;

use crate::errors::RoleError;

/// A finite lattice of values over a fixed node domain `[0, n)`.
///
/// Binary operations reject operands built over different domain sizes.
pub trait Lattice: Clone + Eq + Debug + Send + Sync {
    /// Number of nodes in the domain the value is defined over.
    fn domain_size(&self) -> usize;

    /// Least element over `n` nodes.
    fn bottom(n: usize) -> Self;

    /// Greatest element over `n` nodes.
    fn top(n: usize) -> Self;

    /// Greatest lower bound of `self` and `other`.
    fn meet(&self, other: &Self) -> Result<Self, RoleError>;

    /// Least upper bound of `self` and `other`.
    fn join(&self, other: &Self) -> Result<Self, RoleError>;

    /// Lattice order: whether `self ≤ other`.
    fn leq(&self, other: &Self) -> Result<bool, RoleError>;

    /// Length of the longest strictly increasing chain over `n` nodes.
    fn height(n: usize) -> usize;
}
