#![deny(missing_docs)]
#![doc = "Role equivalence operators over partitions and binary relations: \
tie comparators, the equivalence kinds, their algebraic tags, and the \
interior/closure fixpoint engine."]

/// Utility operators independent of any network.
pub mod basic;
/// Fluent operator builders.
pub mod builder;
/// Tie comparators.
pub mod comparator;
/// Value lattices that operators produce.
pub mod domain;
/// Fixpoint iteration.
pub mod fixpoint;
/// Equivalence kind markers.
pub mod kinds;
/// Sample-based tag verification.
pub mod laws;
mod matching;
/// Operators and their composition.
pub mod operator;
mod rules;
/// Algebraic operator tags.
pub mod tags;

pub use basic::{BasicBuilder, BasicOperators};
pub use builder::{Domain, KindBuilder, OperatorBuilder, RoleOperators};
pub use comparator::{ComparatorKind, TieComparator};
pub use domain::RoleDomain;
pub use fixpoint::Fixpoint;
pub use laws::{check_tags, Law, LawViolation};
pub use operator::{RoleOperator, Rule};
pub use rules::Coupling;
pub use tags::OperatorTags;
