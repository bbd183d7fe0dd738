//! Equivalence kinds and the capabilities each one carries.
//!
//! Every kind is a zero-sized marker type. The builder consults
//! [`RoleKind`] to gate comparator methods and [`BuildKind`] to decide, at
//! the type level, which network views the kind can be built over.

use std::sync::OnceLock;

use roles_core::{NetworkView, TransposableNetworkView};

use crate::domain::RoleDomain;
use crate::fixpoint;
use crate::operator::Rule;
use crate::rules::{Coupling, TieRule};
use crate::tags::OperatorTags;

mod private {
    /// Restricts [`super::RoleKind`] to the kinds defined here.
    pub trait Sealed {}
}

/// Static description of an equivalence kind.
pub trait RoleKind: private::Sealed {
    /// Name used for operators of this kind.
    const NAME: &'static str;
    /// Whether a bare compatibility predicate is enough for this kind.
    const ACCEPTS_PREDICATE: bool;
    /// Whether the kind reads ties through a transposed view.
    const NEEDS_TRANSPOSE: bool;

    /// Tags claimed by operators of this kind with the given strictness.
    fn tags(strictness: usize) -> OperatorTags;

    /// How ties pair up, given the configured strictness.
    fn coupling(strictness: usize) -> Coupling;
}

/// Kinds that take an unmatched-tie tolerance.
pub trait Strict: RoleKind {}

/// Kinds that can be evaluated over views of type `V`.
pub trait BuildKind<'a, V: NetworkView>: RoleKind {
    /// Turns the configured tie rule into an operator rule on `L`.
    fn build<L: RoleDomain>(rule: TieRule<'a, V>) -> Rule<'a, L>;
}

/// Ties pair up one to one with equal targets and comparator-equal ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrongStructural;

/// Every tie is covered by a tie with the same target.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeakStructural;

/// Every tie is covered by a tie whose target is related in the candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Weak;

/// Per target class, tie counts differ by less than the strictness.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeaklyEquitable;

/// Greatest fixpoint of [`Weak`] below the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Regular;

/// Greatest fixpoint of [`WeaklyEquitable`] below the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Equitable;

impl private::Sealed for StrongStructural {}
impl private::Sealed for WeakStructural {}
impl private::Sealed for Weak {}
impl private::Sealed for WeaklyEquitable {}
impl private::Sealed for Regular {}
impl private::Sealed for Equitable {}

impl RoleKind for StrongStructural {
    const NAME: &'static str = "strong_structural";
    const ACCEPTS_PREDICATE: bool = false;
    const NEEDS_TRANSPOSE: bool = true;

    fn tags(_strictness: usize) -> OperatorTags {
        OperatorTags::constant()
    }

    fn coupling(_strictness: usize) -> Coupling {
        Coupling::Counts { strictness: 1 }
    }
}

impl RoleKind for WeakStructural {
    const NAME: &'static str = "weak_structural";
    const ACCEPTS_PREDICATE: bool = false;
    const NEEDS_TRANSPOSE: bool = true;

    fn tags(_strictness: usize) -> OperatorTags {
        OperatorTags::constant()
    }

    fn coupling(_strictness: usize) -> Coupling {
        Coupling::Cover
    }
}

impl RoleKind for Weak {
    const NAME: &'static str = "weak";
    const ACCEPTS_PREDICATE: bool = true;
    const NEEDS_TRANSPOSE: bool = false;

    fn tags(_strictness: usize) -> OperatorTags {
        OperatorTags::isotone()
    }

    fn coupling(_strictness: usize) -> Coupling {
        Coupling::Cover
    }
}

impl RoleKind for WeaklyEquitable {
    const NAME: &'static str = "weakly_equitable";
    const ACCEPTS_PREDICATE: bool = true;
    const NEEDS_TRANSPOSE: bool = false;

    // Coarsening the candidate merges classes and adds up their count
    // differences, so a tolerance above one is not isotone.
    fn tags(strictness: usize) -> OperatorTags {
        if strictness == 1 {
            OperatorTags::isotone()
        } else {
            OperatorTags::NONE
        }
    }

    fn coupling(strictness: usize) -> Coupling {
        Coupling::Counts { strictness }
    }
}

impl RoleKind for Regular {
    const NAME: &'static str = "regular";
    const ACCEPTS_PREDICATE: bool = false;
    const NEEDS_TRANSPOSE: bool = false;

    fn tags(_strictness: usize) -> OperatorTags {
        OperatorTags::interior()
    }

    fn coupling(_strictness: usize) -> Coupling {
        Coupling::Cover
    }
}

impl RoleKind for Equitable {
    const NAME: &'static str = "equitable";
    const ACCEPTS_PREDICATE: bool = false;
    const NEEDS_TRANSPOSE: bool = false;

    fn tags(strictness: usize) -> OperatorTags {
        if strictness == 1 {
            OperatorTags::interior()
        } else {
            OperatorTags {
                nonincreasing: true,
                ..OperatorTags::NONE
            }
        }
    }

    fn coupling(strictness: usize) -> Coupling {
        Coupling::Counts { strictness }
    }
}

impl Strict for WeaklyEquitable {}
impl Strict for Equitable {}

// Structural results depend on the network only, so the first evaluation is
// kept for the lifetime of the operator.
fn structural_rule<'a, V, L>(rule: TieRule<'a, V>) -> Rule<'a, L>
where
    V: TransposableNetworkView + Send + Sync + 'a,
    L: RoleDomain,
{
    let cached: OnceLock<L> = OnceLock::new();
    Box::new(move |value: &L| {
        Ok(cached
            .get_or_init(|| rule.structural::<L>(value.domain_size()))
            .clone())
    })
}

fn single_step_rule<'a, V, L>(rule: TieRule<'a, V>) -> Rule<'a, L>
where
    V: NetworkView + Send + Sync + 'a,
    L: RoleDomain,
{
    Box::new(move |value: &L| Ok(rule.relative(value)))
}

fn interior_rule<'a, V, L>(rule: TieRule<'a, V>) -> Rule<'a, L>
where
    V: NetworkView + Send + Sync + 'a,
    L: RoleDomain,
{
    Box::new(move |value: &L| {
        fixpoint::interior(value, |current| Ok(rule.relative(current)))
            .map(|fixpoint| fixpoint.value)
    })
}

impl<'a, V: TransposableNetworkView + Send + Sync + 'a> BuildKind<'a, V> for StrongStructural {
    fn build<L: RoleDomain>(rule: TieRule<'a, V>) -> Rule<'a, L> {
        structural_rule(rule)
    }
}

impl<'a, V: TransposableNetworkView + Send + Sync + 'a> BuildKind<'a, V> for WeakStructural {
    fn build<L: RoleDomain>(rule: TieRule<'a, V>) -> Rule<'a, L> {
        structural_rule(rule)
    }
}

impl<'a, V: NetworkView + Send + Sync + 'a> BuildKind<'a, V> for Weak {
    fn build<L: RoleDomain>(rule: TieRule<'a, V>) -> Rule<'a, L> {
        single_step_rule(rule)
    }
}

impl<'a, V: NetworkView + Send + Sync + 'a> BuildKind<'a, V> for WeaklyEquitable {
    fn build<L: RoleDomain>(rule: TieRule<'a, V>) -> Rule<'a, L> {
        single_step_rule(rule)
    }
}

impl<'a, V: NetworkView + Send + Sync + 'a> BuildKind<'a, V> for Regular {
    fn build<L: RoleDomain>(rule: TieRule<'a, V>) -> Rule<'a, L> {
        interior_rule(rule)
    }
}

impl<'a, V: NetworkView + Send + Sync + 'a> BuildKind<'a, V> for Equitable {
    fn build<L: RoleDomain>(rule: TieRule<'a, V>) -> Rule<'a, L> {
        interior_rule(rule)
    }
}
