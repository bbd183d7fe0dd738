//! Binary relations over a dense node domain, ordered by inclusion.

use serde::{Deserialize, Serialize};

use crate::disjoint_sets::DisjointSets;
use crate::errors::{ensure_same_domain, ErrorInfo, RoleError};
use crate::lattice::Lattice;
use crate::partition::Partition;

const WORD_BITS: usize = 64;

/// A binary relation on `[0, n)` materialized as a row-major bit matrix.
///
/// Bits past column `n - 1` in each row are always zero, so derived equality
/// and hashing compare the relations exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RelationDocument", into = "RelationDocument")]
pub struct Relation {
    size: usize,
    stride: usize,
    words: Vec<u64>,
}

/// Serialized form of a [`Relation`]: its size and the contained pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDocument {
    /// Number of nodes in the domain.
    pub size: usize,
    /// Contained pairs in row-major order.
    pub pairs: Vec<(usize, usize)>,
}

impl Relation {
    /// The empty relation.
    pub fn empty(n: usize) -> Self {
        let stride = n.div_ceil(WORD_BITS);
        Self {
            size: n,
            stride,
            words: vec![0; stride * n],
        }
    }

    /// The relation containing every pair.
    pub fn full(n: usize) -> Self {
        let mut relation = Self::empty(n);
        for i in 0..n {
            relation.fill_row(i);
        }
        relation
    }

    /// The identity relation `{(i, i)}`.
    pub fn identity(n: usize) -> Self {
        let mut relation = Self::empty(n);
        for i in 0..n {
            relation.insert(i, i);
        }
        relation
    }

    /// Builds a relation from a square boolean matrix.
    pub fn from_matrix(matrix: &[Vec<bool>]) -> Result<Self, RoleError> {
        let n = matrix.len();
        let mut relation = Self::empty(n);
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(RoleError::Argument(
                    ErrorInfo::new("matrix-not-square", "relation matrix rows must have n columns")
                        .with_context("row", i.to_string())
                        .with_context("columns", row.len().to_string())
                        .with_context("size", n.to_string()),
                ));
            }
            for (j, &bit) in row.iter().enumerate() {
                if bit {
                    relation.insert(i, j);
                }
            }
        }
        Ok(relation)
    }

    /// Builds a relation on `n` nodes from a list of pairs.
    pub fn from_pairs(
        n: usize,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, RoleError> {
        let mut relation = Self::empty(n);
        for (i, j) in pairs {
            if i >= n || j >= n {
                return Err(RoleError::Argument(
                    ErrorInfo::new("pair-out-of-range", "relation pair outside the domain")
                        .with_context("pair", format!("({i}, {j})"))
                        .with_context("size", n.to_string()),
                ));
            }
            relation.insert(i, j);
        }
        Ok(relation)
    }

    /// Number of nodes in the domain.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns whether the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns whether `(i, j)` is in the relation.
    pub fn contains(&self, i: usize, j: usize) -> bool {
        let word = self.words[i * self.stride + j / WORD_BITS];
        word & (1u64 << (j % WORD_BITS)) != 0
    }

    /// Adds `(i, j)`.
    pub fn insert(&mut self, i: usize, j: usize) {
        self.words[i * self.stride + j / WORD_BITS] |= 1u64 << (j % WORD_BITS);
    }

    /// Removes `(i, j)`.
    pub fn remove(&mut self, i: usize, j: usize) {
        self.words[i * self.stride + j / WORD_BITS] &= !(1u64 << (j % WORD_BITS));
    }

    /// Number of pairs in the relation.
    pub fn pair_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Contained pairs in row-major order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |i| self.successors(i).map(move |j| (i, j)))
    }

    /// Nodes `j` with `(i, j)` in the relation, ascending.
    pub fn successors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&j| self.contains(i, j))
    }

    /// The transpose: `(j, i)` for every `(i, j)`.
    pub fn invert(&self) -> Relation {
        let mut inverted = Relation::empty(self.size);
        for (i, j) in self.pairs() {
            inverted.insert(j, i);
        }
        inverted
    }

    /// Pairs not in the relation.
    pub fn complement(&self) -> Relation {
        let mut complement = self.clone();
        for word in &mut complement.words {
            *word = !*word;
        }
        complement.clear_padding();
        complement
    }

    /// `meet(self, invert(self))`: pairs related in both directions.
    pub fn symmetrize(&self) -> Relation {
        let mut symmetric = Relation::empty(self.size);
        for (i, j) in self.pairs() {
            if self.contains(j, i) {
                symmetric.insert(i, j);
            }
        }
        symmetric
    }

    /// Reflexive-transitive closure (Warshall over word rows).
    pub fn close_transitively(&self) -> Relation {
        let mut closed = self.clone();
        for i in 0..self.size {
            closed.insert(i, i);
        }
        let mut pivot_row = vec![0u64; self.stride];
        for k in 0..self.size {
            pivot_row.copy_from_slice(closed.row(k));
            for i in 0..self.size {
                if closed.contains(i, k) {
                    for (word, pivot) in closed.row_mut(i).iter_mut().zip(&pivot_row) {
                        *word |= pivot;
                    }
                }
            }
        }
        closed
    }

    /// Whether every pair of `self` is in `other`.
    pub fn is_subset_of(&self, other: &Relation) -> Result<bool, RoleError> {
        ensure_same_domain(self.size, other.size)?;
        Ok(self
            .words
            .iter()
            .zip(&other.words)
            .all(|(a, b)| a & !b == 0))
    }

    /// Whether the relation is reflexive, symmetric and transitive.
    pub fn is_equivalence(&self) -> bool {
        (0..self.size).all(|i| self.contains(i, i))
            && self.pairs().all(|(i, j)| self.contains(j, i))
            && self.close_transitively() == *self
    }

    /// The partition whose induced relation is `self`. Fails unless the
    /// relation is an equivalence.
    pub fn to_partition(&self) -> Result<Partition, RoleError> {
        if !self.is_equivalence() {
            return Err(RoleError::Domain(
                ErrorInfo::new("not-an-equivalence", "relation is not an equivalence")
                    .with_context("size", self.size.to_string())
                    .with_hint("close it with symmetrize and close_transitively first"),
            ));
        }
        let mut sets = DisjointSets::new(self.size);
        for (i, j) in self.pairs() {
            sets.union(i, j);
        }
        Ok(sets.into_partition())
    }

    fn row(&self, i: usize) -> &[u64] {
        &self.words[i * self.stride..(i + 1) * self.stride]
    }

    fn row_mut(&mut self, i: usize) -> &mut [u64] {
        &mut self.words[i * self.stride..(i + 1) * self.stride]
    }

    fn fill_row(&mut self, i: usize) {
        for word in self.row_mut(i) {
            *word = u64::MAX;
        }
        self.clear_padding();
    }

    fn clear_padding(&mut self) {
        let tail = self.size % WORD_BITS;
        if tail == 0 || self.stride == 0 {
            return;
        }
        let mask = (1u64 << tail) - 1;
        for i in 0..self.size {
            let last = (i + 1) * self.stride - 1;
            self.words[last] &= mask;
        }
    }

    fn zip_words(&self, other: &Relation, op: impl Fn(u64, u64) -> u64) -> Relation {
        Relation {
            size: self.size,
            stride: self.stride,
            words: self
                .words
                .iter()
                .zip(&other.words)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        }
    }
}

impl Lattice for Relation {
    fn domain_size(&self) -> usize {
        self.size
    }

    fn bottom(n: usize) -> Self {
        Relation::empty(n)
    }

    fn top(n: usize) -> Self {
        Relation::full(n)
    }

    fn meet(&self, other: &Self) -> Result<Self, RoleError> {
        ensure_same_domain(self.size, other.size)?;
        Ok(self.zip_words(other, |a, b| a & b))
    }

    fn join(&self, other: &Self) -> Result<Self, RoleError> {
        ensure_same_domain(self.size, other.size)?;
        Ok(self.zip_words(other, |a, b| a | b))
    }

    fn leq(&self, other: &Self) -> Result<bool, RoleError> {
        self.is_subset_of(other)
    }

    fn height(n: usize) -> usize {
        n * n
    }
}

impl TryFrom<RelationDocument> for Relation {
    type Error = RoleError;

    fn try_from(document: RelationDocument) -> Result<Self, Self::Error> {
        Relation::from_pairs(document.size, document.pairs)
    }
}

impl From<Relation> for RelationDocument {
    fn from(relation: Relation) -> Self {
        RelationDocument {
            size: relation.size,
            pairs: relation.pairs().collect(),
        }
    }
}
