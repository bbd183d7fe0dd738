//! Tie comparators that parametrize every equivalence kind.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

type OrderFn<'a, T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync + 'a>;
type PartialFn<'a, T> = Arc<dyn Fn(&T, &T) -> Option<Ordering> + Send + Sync + 'a>;
type PredicateFn<'a, T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync + 'a>;

/// Strength of a comparator, used in diagnostics and capability checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparatorKind {
    /// Strict total order.
    Total,
    /// Total preorder.
    Weak,
    /// Partial order with incomparable pairs.
    Partial,
    /// Compatibility predicate without ordering.
    Predicate,
}

impl fmt::Display for ComparatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComparatorKind::Total => "total",
            ComparatorKind::Weak => "weak",
            ComparatorKind::Partial => "partial",
            ComparatorKind::Predicate => "predicate",
        };
        f.write_str(label)
    }
}

/// A comparator over ties of type `T`, resolved once when an operator is built.
pub enum TieComparator<'a, T> {
    /// Strict total order.
    Total(OrderFn<'a, T>),
    /// Total preorder; distinct ties may compare equal.
    Weak(OrderFn<'a, T>),
    /// Partial order; `None` marks incomparable ties.
    Partial(PartialFn<'a, T>),
    /// Symmetric compatibility test with no ranking.
    Predicate(PredicateFn<'a, T>),
}

impl<'a, T> TieComparator<'a, T> {
    /// Wraps a total order.
    pub fn total(f: impl Fn(&T, &T) -> Ordering + Send + Sync + 'a) -> Self {
        TieComparator::Total(Arc::new(f))
    }

    /// Wraps a total preorder.
    pub fn weak(f: impl Fn(&T, &T) -> Ordering + Send + Sync + 'a) -> Self {
        TieComparator::Weak(Arc::new(f))
    }

    /// Wraps a partial order.
    pub fn partial(f: impl Fn(&T, &T) -> Option<Ordering> + Send + Sync + 'a) -> Self {
        TieComparator::Partial(Arc::new(f))
    }

    /// Wraps a compatibility predicate.
    pub fn predicate(f: impl Fn(&T, &T) -> bool + Send + Sync + 'a) -> Self {
        TieComparator::Predicate(Arc::new(f))
    }

    /// The strength of this comparator.
    pub fn kind(&self) -> ComparatorKind {
        match self {
            TieComparator::Total(_) => ComparatorKind::Total,
            TieComparator::Weak(_) => ComparatorKind::Weak,
            TieComparator::Partial(_) => ComparatorKind::Partial,
            TieComparator::Predicate(_) => ComparatorKind::Predicate,
        }
    }

    /// Whether the comparator ranks ties.
    pub fn is_ordered(&self) -> bool {
        !matches!(self, TieComparator::Predicate(_))
    }

    /// Whether `t` and `s` may stand in for each other.
    ///
    /// Incomparable ties under a partial order are never equivalent.
    pub fn equivalent(&self, t: &T, s: &T) -> bool {
        match self {
            TieComparator::Total(f) | TieComparator::Weak(f) => f(t, s) == Ordering::Equal,
            TieComparator::Partial(f) => f(t, s) == Some(Ordering::Equal),
            TieComparator::Predicate(f) => f(t, s),
        }
    }

    /// Whether `t` is at most `s`. A predicate answers with compatibility.
    pub fn dominated(&self, t: &T, s: &T) -> bool {
        match self {
            TieComparator::Total(f) | TieComparator::Weak(f) => f(t, s) != Ordering::Greater,
            TieComparator::Partial(f) => {
                matches!(f(t, s), Some(Ordering::Less) | Some(Ordering::Equal))
            }
            TieComparator::Predicate(f) => f(t, s),
        }
    }

    /// The order used by the sorted-merge fast path, if the comparator
    /// induces a total preorder.
    pub(crate) fn preorder(&self) -> Option<&OrderFn<'a, T>> {
        match self {
            TieComparator::Total(f) | TieComparator::Weak(f) => Some(f),
            _ => None,
        }
    }
}

impl<T> Clone for TieComparator<'_, T> {
    fn clone(&self) -> Self {
        match self {
            TieComparator::Total(f) => TieComparator::Total(Arc::clone(f)),
            TieComparator::Weak(f) => TieComparator::Weak(Arc::clone(f)),
            TieComparator::Partial(f) => TieComparator::Partial(Arc::clone(f)),
            TieComparator::Predicate(f) => TieComparator::Predicate(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for TieComparator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TieComparator").field(&self.kind()).finish()
    }
}
