//! Immutable operators over partitions and relations.

use std::fmt;

use roles_core::errors::{ensure_same_domain, RoleError};
use roles_core::Lattice;

use crate::fixpoint::{self, Fixpoint};
use crate::tags::OperatorTags;

/// Boxed refinement rule wrapped by a [`RoleOperator`].
pub type Rule<'a, L> = Box<dyn Fn(&L) -> Result<L, RoleError> + Send + Sync + 'a>;

/// A function on a value lattice together with the algebraic tags it claims.
///
/// Operators are produced by the builders in [`crate::builder`] and never
/// change after construction. The lifetime ties an operator to the network
/// views and comparators it borrows.
pub struct RoleOperator<'a, L: Lattice> {
    name: String,
    domain_size: usize,
    tags: OperatorTags,
    rule: Rule<'a, L>,
}

impl<'a, L: Lattice + 'a> RoleOperator<'a, L> {
    /// Wraps `rule` as an operator over `domain_size` nodes.
    ///
    /// The rule is only ever called with values of the declared size.
    pub fn new(
        name: impl Into<String>,
        domain_size: usize,
        tags: OperatorTags,
        rule: impl Fn(&L) -> Result<L, RoleError> + Send + Sync + 'a,
    ) -> Self {
        Self {
            name: name.into(),
            domain_size,
            tags,
            rule: Box::new(rule),
        }
    }

    /// Human readable operator name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node domain size fixed at build time.
    pub fn domain_size(&self) -> usize {
        self.domain_size
    }

    /// Algebraic tags claimed by the operator.
    pub fn tags(&self) -> OperatorTags {
        self.tags
    }

    /// Applies the operator to `value`.
    pub fn apply(&self, value: &L) -> Result<L, RoleError> {
        ensure_same_domain(self.domain_size, value.domain_size())?;
        (self.rule)(value)
    }

    /// One refinement step relative to `value`: `meet(value, apply(value))`.
    pub fn relative(&self, value: &L) -> Result<L, RoleError> {
        value.meet(&self.apply(value)?)
    }

    /// Greatest value below `value` fixed by [`relative`](Self::relative).
    pub fn interior(&self, value: &L) -> Result<L, RoleError> {
        self.interior_report(value).map(|fixpoint| fixpoint.value)
    }

    /// Least value above `value` fixed by the dual step `join(x, apply(x))`.
    pub fn closure(&self, value: &L) -> Result<L, RoleError> {
        self.closure_report(value).map(|fixpoint| fixpoint.value)
    }

    /// Like [`interior`](Self::interior), also reporting the iteration count.
    pub fn interior_report(&self, value: &L) -> Result<Fixpoint<L>, RoleError> {
        ensure_same_domain(self.domain_size, value.domain_size())?;
        fixpoint::interior(value, |current| (self.rule)(current))
    }

    /// Like [`closure`](Self::closure), also reporting the iteration count.
    pub fn closure_report(&self, value: &L) -> Result<Fixpoint<L>, RoleError> {
        ensure_same_domain(self.domain_size, value.domain_size())?;
        fixpoint::closure(value, |current| (self.rule)(current))
    }

    /// Composite operator applying `self` first and `next` second.
    pub fn then(self, next: RoleOperator<'a, L>) -> Result<RoleOperator<'a, L>, RoleError> {
        ensure_same_domain(self.domain_size, next.domain_size)?;
        let name = format!("{} then {}", self.name, next.name);
        let tags = OperatorTags::compose(self.tags, next.tags);
        let first = self.rule;
        let second = next.rule;
        Ok(RoleOperator {
            name,
            domain_size: self.domain_size,
            tags,
            rule: Box::new(move |value| second(&first(value)?)),
        })
    }
}

impl<L: Lattice> fmt::Debug for RoleOperator<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleOperator")
            .field("name", &self.name)
            .field("domain_size", &self.domain_size)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
