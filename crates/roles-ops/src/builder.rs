//! Fluent construction of role operators.
//!
//! ```text
//! RoleOperators::equivalence()             -> Domain<Partition>
//!     .regular()                           -> KindBuilder<Partition, Regular>
//!     .of(n, view)                         -> OperatorBuilder
//!     .comp(|a, b| a.weight.cmp(&b.weight))?
//!     .make()?                             -> RoleOperator
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;

use roles_core::errors::{ensure_same_domain, ErrorInfo, RoleError};
use roles_core::{NetworkView, Partition, Relation};

use crate::basic::BasicBuilder;
use crate::comparator::TieComparator;
use crate::domain::RoleDomain;
use crate::kinds::{
    BuildKind, Equitable, Regular, RoleKind, Strict, StrongStructural, Weak, WeakStructural,
    WeaklyEquitable,
};
use crate::operator::RoleOperator;
use crate::rules::{Coupling, TieRule};

/// Entry point selecting the value lattice operators work on.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleOperators;

impl RoleOperators {
    /// Operators over partitions.
    pub fn equivalence() -> Domain<Partition> {
        Domain::new()
    }

    /// Operators over binary relations.
    pub fn relation() -> Domain<Relation> {
        Domain::new()
    }
}

/// Kind selection for operators over `L`.
#[derive(Debug)]
pub struct Domain<L> {
    _lattice: PhantomData<fn() -> L>,
}

// Marker stages are copyable whatever the lattice type is.
impl<L> Clone for Domain<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Domain<L> {}

impl<L: RoleDomain> Domain<L> {
    fn new() -> Self {
        Self {
            _lattice: PhantomData,
        }
    }

    /// Strong structural equivalence.
    pub fn strong_structural(self) -> KindBuilder<L, StrongStructural> {
        KindBuilder::new()
    }

    /// Weak structural equivalence.
    pub fn weak_structural(self) -> KindBuilder<L, WeakStructural> {
        KindBuilder::new()
    }

    /// One weak refinement step.
    pub fn weak(self) -> KindBuilder<L, Weak> {
        KindBuilder::new()
    }

    /// One weakly equitable refinement step.
    pub fn weakly_equitable(self) -> KindBuilder<L, WeaklyEquitable> {
        KindBuilder::new()
    }

    /// Regular equivalence below the input.
    pub fn regular(self) -> KindBuilder<L, Regular> {
        KindBuilder::new()
    }

    /// Equitable equivalence below the input.
    pub fn equitable(self) -> KindBuilder<L, Equitable> {
        KindBuilder::new()
    }

    /// Kind-independent utility operators.
    pub fn basic(self) -> BasicBuilder<L> {
        BasicBuilder::new()
    }
}

/// A selected kind awaiting its node domain and views.
#[derive(Debug)]
pub struct KindBuilder<L, K> {
    strictness: usize,
    _marker: PhantomData<fn() -> (L, K)>,
}

impl<L, K> Clone for KindBuilder<L, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, K> Copy for KindBuilder<L, K> {}

impl<L, K> KindBuilder<L, K> {
    fn new() -> Self {
        Self {
            strictness: 1,
            _marker: PhantomData,
        }
    }
}

impl<L: RoleDomain, K: Strict> KindBuilder<L, K> {
    /// Per-class tie count tolerance, at least one.
    ///
    /// Two nodes pass when, for every class of related targets and
    /// compatible ties, their tie counts differ by less than `k`. `1` demands
    /// exact counts. Above one the operator no longer claims isotony.
    pub fn strictness(mut self, k: usize) -> Result<Self, RoleError> {
        if k < 1 {
            return Err(RoleError::Argument(
                ErrorInfo::new("strictness-range", "strictness must be at least 1")
                    .with_context("kind", K::NAME)
                    .with_context("strictness", k.to_string()),
            ));
        }
        self.strictness = k;
        Ok(self)
    }
}

impl<L: RoleDomain, K: RoleKind> KindBuilder<L, K> {
    /// Fixes the domain size and reads ties through a single view.
    pub fn of<'a, V: NetworkView>(self, n: usize, view: V) -> OperatorBuilder<'a, L, K, V> {
        OperatorBuilder::new(n, vec![view], self.strictness)
    }

    /// Fixes the domain size and requires the test to pass in both views.
    pub fn of_pair<'a, V: NetworkView>(
        self,
        n: usize,
        view: V,
        second: V,
    ) -> OperatorBuilder<'a, L, K, V> {
        OperatorBuilder::new(n, vec![view, second], self.strictness)
    }
}

/// Final configuration stage: comparator and view restrictions.
pub struct OperatorBuilder<'a, L, K, V: NetworkView> {
    n: usize,
    views: Vec<V>,
    strictness: usize,
    comparator: Option<TieComparator<'a, V::Tie>>,
    _marker: PhantomData<fn() -> (L, K)>,
}

impl<'a, L: RoleDomain, K: RoleKind, V: NetworkView> OperatorBuilder<'a, L, K, V> {
    fn new(n: usize, views: Vec<V>, strictness: usize) -> Self {
        Self {
            n,
            views,
            strictness,
            comparator: None,
            _marker: PhantomData,
        }
    }

    /// Restricts evaluation to the first view.
    pub fn unidirectional(mut self) -> Self {
        self.views.truncate(1);
        self
    }

    /// Compares ties with a strict total order.
    pub fn comp(
        self,
        order: impl Fn(&V::Tie, &V::Tie) -> Ordering + Send + Sync + 'a,
    ) -> Result<Self, RoleError> {
        self.attach(TieComparator::total(order))
    }

    /// Compares ties with a total preorder.
    pub fn comp_weak(
        self,
        order: impl Fn(&V::Tie, &V::Tie) -> Ordering + Send + Sync + 'a,
    ) -> Result<Self, RoleError> {
        self.attach(TieComparator::weak(order))
    }

    /// Compares ties with a partial order; `None` marks incomparable ties.
    pub fn comp_partial(
        self,
        order: impl Fn(&V::Tie, &V::Tie) -> Option<Ordering> + Send + Sync + 'a,
    ) -> Result<Self, RoleError> {
        self.attach(TieComparator::partial(order))
    }

    /// Compares ties with a compatibility predicate.
    ///
    /// Fails for kinds whose definition ranks ties.
    pub fn comp_predicate(
        self,
        compatible: impl Fn(&V::Tie, &V::Tie) -> bool + Send + Sync + 'a,
    ) -> Result<Self, RoleError> {
        self.attach(TieComparator::predicate(compatible))
    }

    /// Attaches an already wrapped comparator.
    pub fn comparator(self, comparator: TieComparator<'a, V::Tie>) -> Result<Self, RoleError> {
        self.attach(comparator)
    }

    fn attach(mut self, comparator: TieComparator<'a, V::Tie>) -> Result<Self, RoleError> {
        if !comparator.is_ordered() && !K::ACCEPTS_PREDICATE {
            return Err(RoleError::Capability(
                ErrorInfo::new("predicate-unsupported", "kind requires an ordering comparator")
                    .with_context("kind", K::NAME)
                    .with_hint("use comp, comp_weak or comp_partial"),
            ));
        }
        if let Some(existing) = &self.comparator {
            return Err(RoleError::Capability(
                ErrorInfo::new("comparator-already-set", "operator already has a comparator")
                    .with_context("kind", K::NAME)
                    .with_context("existing", existing.kind().to_string())
                    .with_context("requested", comparator.kind().to_string()),
            ));
        }
        self.comparator = Some(comparator);
        Ok(self)
    }

    /// Finalizes the operator.
    ///
    /// Fails with a domain error when a view disagrees with the domain size.
    pub fn make(self) -> Result<RoleOperator<'a, L>, RoleError>
    where
        K: BuildKind<'a, V>,
    {
        for view in &self.views {
            ensure_same_domain(self.n, view.node_count())?;
        }
        let name = self.name();
        log::debug!(
            "built {} operator over {} nodes with {} view(s)",
            name,
            self.n,
            self.views.len()
        );
        let rule = TieRule::new(self.views, self.comparator, K::coupling(self.strictness));
        Ok(RoleOperator::new(name, self.n, K::tags(self.strictness), K::build::<L>(rule)))
    }

    fn name(&self) -> String {
        match K::coupling(self.strictness) {
            Coupling::Counts { strictness } if strictness > 1 => {
                format!("{} {}(k={})", L::LABEL, K::NAME, strictness)
            }
            _ => format!("{} {}", L::LABEL, K::NAME),
        }
    }
}
