//! The per-pair tie test shared by every equivalence kind.

use std::cmp::Ordering;

use roles_core::{NetworkView, TransposableNetworkView};

use crate::comparator::TieComparator;
use crate::domain::RoleDomain;
use crate::matching::{maximum_matching, sorted_excess, sorted_matching};

/// How the ties of two nodes must pair up for the nodes to be related.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coupling {
    /// Every tie has a related, compatible counterpart.
    Cover,
    /// Within every compatibility class (related targets, compatible ties)
    /// the tie counts of the two nodes differ by less than `strictness`.
    Counts {
        /// Per-class count tolerance, at least one.
        strictness: usize,
    },
}

/// Tie views, comparator and coupling of one operator.
pub struct TieRule<'a, V: NetworkView> {
    views: Vec<V>,
    comparator: Option<TieComparator<'a, V::Tie>>,
    coupling: Coupling,
}

type Side<T> = Vec<(usize, T)>;

impl<'a, V: NetworkView> TieRule<'a, V> {
    pub(crate) fn new(
        views: Vec<V>,
        comparator: Option<TieComparator<'a, V::Tie>>,
        coupling: Coupling,
    ) -> Self {
        Self {
            views,
            comparator,
            coupling,
        }
    }

    /// One refinement step: tie targets are related when `candidate` relates
    /// them.
    pub(crate) fn relative<L: RoleDomain>(&self, candidate: &L) -> L {
        let n = candidate.domain_size();
        let sides: Vec<Vec<Side<V::Tie>>> = self
            .views
            .iter()
            .map(|view| (0..n).map(|node| plain_side(view, node)).collect())
            .collect();
        let related = |a: usize, b: usize| candidate.relates(a, b);
        let key = |node: usize| candidate.class_key(node);
        L::from_verdicts(n, &mut |u, v| {
            sides
                .iter()
                .all(|per_node| self.judge::<L>(&per_node[u], &per_node[v], &related, &key))
        })
    }

    fn judge<L: RoleDomain>(
        &self,
        u: &[(usize, V::Tie)],
        v: &[(usize, V::Tie)],
        related: &dyn Fn(usize, usize) -> bool,
        key: &dyn Fn(usize) -> Option<usize>,
    ) -> bool {
        let comparator = self.comparator.as_ref();
        let compatible = |t: &V::Tie, s: &V::Tie| match comparator {
            None => true,
            Some(c) if L::SYMMETRIC => c.equivalent(t, s),
            Some(c) => c.dominated(t, s),
        };
        match self.coupling {
            Coupling::Cover => {
                covered(u, v, related, &compatible)
                    && (!L::SYMMETRIC || covered(v, u, related, &compatible))
            }
            // Exact counts: a perfect matching between equally sized sides.
            Coupling::Counts { strictness: 1 } if L::SYMMETRIC => {
                if u.len() != v.len() {
                    return false;
                }
                let matched = match self.keyed(u, v, key, sorted_matching::<V::Tie>) {
                    Some(matched) => matched,
                    None => matching(u, v, related, &compatible),
                };
                matched == u.len()
            }
            Coupling::Counts { strictness: 1 } => {
                u.len() <= v.len() && matching(u, v, related, &compatible) == u.len()
            }
            Coupling::Counts { strictness } if L::SYMMETRIC => {
                let excess = match self.keyed(u, v, key, sorted_excess::<V::Tie>) {
                    Some(excess) => excess,
                    None => class_excess(u, v, related, &compatible),
                };
                excess < strictness
            }
            Coupling::Counts { strictness } => {
                shortfall(u, v, related, &compatible) < strictness
            }
        }
    }

    // Sorted merge on (class, rank); only valid when compatibility is the
    // equivalence induced by a total preorder.
    fn keyed<M>(
        &self,
        u: &[(usize, V::Tie)],
        v: &[(usize, V::Tie)],
        key: &dyn Fn(usize) -> Option<usize>,
        merge: M,
    ) -> Option<usize>
    where
        M: FnOnce(
            Vec<(usize, &V::Tie)>,
            Vec<(usize, &V::Tie)>,
            &dyn Fn(&V::Tie, &V::Tie) -> Ordering,
        ) -> usize,
    {
        let unordered = |_: &V::Tie, _: &V::Tie| Ordering::Equal;
        let order: &dyn Fn(&V::Tie, &V::Tie) -> Ordering = match &self.comparator {
            None => &unordered,
            Some(c) => &**c.preorder()?,
        };
        Some(merge(keyed_side(u, key)?, keyed_side(v, key)?, order))
    }
}

impl<V: TransposableNetworkView> TieRule<'_, V> {
    /// Structural test over `n` nodes: ties of the second node are read with
    /// the pair transposed and targets must coincide.
    pub(crate) fn structural<L: RoleDomain>(&self, n: usize) -> L {
        let sides: Vec<Vec<Side<V::Tie>>> = self
            .views
            .iter()
            .map(|view| (0..n).map(|node| plain_side(view, node)).collect())
            .collect();
        let related = |a: usize, b: usize| a == b;
        let key = |node: usize| Some(node);
        L::from_verdicts(n, &mut |u, v| {
            self.views.iter().zip(&sides).all(|(view, per_node)| {
                let swapped = transposed_side(view, u, v);
                self.judge::<L>(&per_node[u], &swapped, &related, &key)
            })
        })
    }
}

fn plain_side<V: NetworkView>(view: &V, node: usize) -> Side<V::Tie> {
    view.ties(node)
        .map(|tie| (view.tie_target(node, &tie), tie))
        .collect()
}

fn transposed_side<V: TransposableNetworkView>(view: &V, ref_a: usize, ref_b: usize) -> Side<V::Tie> {
    view.ties_transposed(ref_a, ref_b, ref_b)
        .map(|tie| (view.tie_target_transposed(ref_a, ref_b, ref_b, &tie), tie))
        .collect()
}

fn keyed_side<'s, T>(
    side: &'s [(usize, T)],
    key: &dyn Fn(usize) -> Option<usize>,
) -> Option<Vec<(usize, &'s T)>> {
    side.iter()
        .map(|(target, tie)| key(*target).map(|class| (class, tie)))
        .collect()
}

fn covered<T>(
    from: &[(usize, T)],
    into: &[(usize, T)],
    related: &dyn Fn(usize, usize) -> bool,
    compatible: &dyn Fn(&T, &T) -> bool,
) -> bool {
    from.iter().all(|(a, t)| {
        into.iter()
            .any(|(b, s)| related(*a, *b) && compatible(t, s))
    })
}

fn matching<T>(
    from: &[(usize, T)],
    into: &[(usize, T)],
    related: &dyn Fn(usize, usize) -> bool,
    compatible: &dyn Fn(&T, &T) -> bool,
) -> usize {
    maximum_matching(from.len(), into.len(), |i, j| {
        related(from[i].0, into[j].0) && compatible(&from[i].1, &into[j].1)
    })
}

// Two ties share a class when each target relates to the other and each tie
// is compatible with the other.
fn same_class<T>(
    x: &(usize, T),
    y: &(usize, T),
    related: &dyn Fn(usize, usize) -> bool,
    compatible: &dyn Fn(&T, &T) -> bool,
) -> bool {
    related(x.0, y.0) && related(y.0, x.0) && compatible(&x.1, &y.1) && compatible(&y.1, &x.1)
}

/// Largest per-class count difference between the two sides.
fn class_excess<T>(
    u: &[(usize, T)],
    v: &[(usize, T)],
    related: &dyn Fn(usize, usize) -> bool,
    compatible: &dyn Fn(&T, &T) -> bool,
) -> usize {
    let count = |side: &[(usize, T)], x: &(usize, T)| {
        side.iter()
            .filter(|y| same_class(x, y, related, compatible))
            .count()
    };
    u.iter()
        .chain(v)
        .map(|x| count(u, x).abs_diff(count(v, x)))
        .max()
        .unwrap_or(0)
}

/// Largest number of ties in one class of `u` that `v` has no related,
/// compatible tie for.
fn shortfall<T>(
    u: &[(usize, T)],
    v: &[(usize, T)],
    related: &dyn Fn(usize, usize) -> bool,
    compatible: &dyn Fn(&T, &T) -> bool,
) -> usize {
    u.iter()
        .map(|t| {
            let needed = u
                .iter()
                .filter(|y| same_class(t, y, related, compatible))
                .count();
            let offered = v
                .iter()
                .filter(|s| related(t.0, s.0) && compatible(&t.1, &s.1))
                .count();
            needed.saturating_sub(offered)
        })
        .max()
        .unwrap_or(0)
}
