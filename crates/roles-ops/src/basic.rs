//! Utility operators that do not depend on a network.

use std::marker::PhantomData;

use roles_core::errors::{ensure_same_domain, RoleError};
use roles_core::{Partition, Relation};

use crate::domain::RoleDomain;
use crate::operator::RoleOperator;
use crate::tags::OperatorTags;

/// Builder stage reached through `RoleOperators::<domain>().basic()`.
#[derive(Debug)]
pub struct BasicBuilder<L> {
    _lattice: PhantomData<fn() -> L>,
}

impl<L> Clone for BasicBuilder<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for BasicBuilder<L> {}

impl<L: RoleDomain> BasicBuilder<L> {
    pub(crate) fn new() -> Self {
        Self {
            _lattice: PhantomData,
        }
    }

    /// Fixes the node domain size.
    pub fn of(self, n: usize) -> BasicOperators<L> {
        BasicOperators {
            n,
            _lattice: PhantomData,
        }
    }
}

/// Factory for utility operators over `n` nodes.
#[derive(Debug)]
pub struct BasicOperators<L> {
    n: usize,
    _lattice: PhantomData<fn() -> L>,
}

impl<L> Clone for BasicOperators<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for BasicOperators<L> {}

impl<L: RoleDomain> BasicOperators<L> {
    /// Domain size of the produced operators.
    pub fn domain_size(&self) -> usize {
        self.n
    }

    /// The identity operator.
    pub fn forward(&self) -> RoleOperator<'static, L> {
        RoleOperator::new("forward", self.n, OperatorTags::identity(), |value: &L| {
            Ok(value.clone())
        })
    }

    /// Ignores its input and returns `constant`.
    pub fn produce_constant(&self, constant: L) -> Result<RoleOperator<'static, L>, RoleError> {
        ensure_same_domain(self.n, constant.domain_size())?;
        Ok(RoleOperator::new(
            "produce_constant",
            self.n,
            OperatorTags::constant(),
            move |_: &L| Ok(constant.clone()),
        ))
    }

    /// `x ↦ meet(x, constant)`.
    pub fn meet_with_constant(&self, constant: L) -> Result<RoleOperator<'static, L>, RoleError> {
        ensure_same_domain(self.n, constant.domain_size())?;
        Ok(RoleOperator::new(
            "meet_with_constant",
            self.n,
            OperatorTags::interior(),
            move |value: &L| value.meet(&constant),
        ))
    }

    /// `x ↦ join(x, constant)`.
    pub fn join_with_constant(&self, constant: L) -> Result<RoleOperator<'static, L>, RoleError> {
        ensure_same_domain(self.n, constant.domain_size())?;
        Ok(RoleOperator::new(
            "join_with_constant",
            self.n,
            OperatorTags::closure(),
            move |value: &L| value.join(&constant),
        ))
    }
}

impl BasicOperators<Partition> {
    /// Inversion of a symmetric value: the identity.
    pub fn invert(&self) -> RoleOperator<'static, Partition> {
        RoleOperator::new("invert", self.n, OperatorTags::identity(), |value: &Partition| {
            Ok(value.clone())
        })
    }
}

impl BasicOperators<Relation> {
    /// Swaps every pair `(i, j)` to `(j, i)`.
    pub fn invert(&self) -> RoleOperator<'static, Relation> {
        RoleOperator::new("invert", self.n, OperatorTags::isotone(), |value: &Relation| {
            Ok(value.invert())
        })
    }

    /// `r ↦ meet(r, invert(r))`.
    pub fn symmetrize(&self) -> RoleOperator<'static, Relation> {
        RoleOperator::new(
            "symmetrize",
            self.n,
            OperatorTags::interior(),
            |value: &Relation| Ok(value.symmetrize()),
        )
    }

    /// Reflexive-transitive closure.
    pub fn close_transitively(&self) -> RoleOperator<'static, Relation> {
        RoleOperator::new(
            "close_transitively",
            self.n,
            OperatorTags::closure(),
            |value: &Relation| Ok(value.close_transitively()),
        )
    }
}
