//! Iterate-to-fixpoint loops over a finite lattice.

use roles_core::errors::{ErrorInfo, RoleError};
use roles_core::Lattice;
use serde::{Deserialize, Serialize};

/// A fixpoint together with the number of refinement steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixpoint<L> {
    /// The stable value.
    pub value: L,
    /// Number of step applications, the final confirming one included.
    pub iterations: usize,
}

/// Greatest value below `start` that the step leaves unchanged under meet.
///
/// Repeats `value := meet(value, step(value))` until nothing changes.
pub fn interior<L, F>(start: &L, step: F) -> Result<Fixpoint<L>, RoleError>
where
    L: Lattice,
    F: FnMut(&L) -> Result<L, RoleError>,
{
    iterate(start, step, Direction::Down)
}

/// Least value above `start` that the step leaves unchanged under join.
///
/// Repeats `value := join(value, step(value))` until nothing changes.
pub fn closure<L, F>(start: &L, step: F) -> Result<Fixpoint<L>, RoleError>
where
    L: Lattice,
    F: FnMut(&L) -> Result<L, RoleError>,
{
    iterate(start, step, Direction::Up)
}

#[derive(Clone, Copy)]
enum Direction {
    Down,
    Up,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Direction::Down => "interior",
            Direction::Up => "closure",
        }
    }
}

fn iterate<L, F>(start: &L, mut step: F, direction: Direction) -> Result<Fixpoint<L>, RoleError>
where
    L: Lattice,
    F: FnMut(&L) -> Result<L, RoleError>,
{
    let n = start.domain_size();
    // Every non-final step moves strictly along a chain of at most `height` links.
    let bound = L::height(n) + 1;
    let mut value = start.clone();
    for iteration in 1..=bound {
        let stepped = step(&value)?;
        let next = match direction {
            Direction::Down => value.meet(&stepped)?,
            Direction::Up => value.join(&stepped)?,
        };
        log::trace!("{} iteration {} over {} nodes", direction.label(), iteration, n);
        if next == value {
            log::debug!(
                "{} converged after {} iterations over {} nodes",
                direction.label(),
                iteration,
                n
            );
            return Ok(Fixpoint {
                value,
                iterations: iteration,
            });
        }
        value = next;
    }
    Err(RoleError::Fixpoint(
        ErrorInfo::new("fixpoint-unsettled", "iteration exceeded the lattice height bound")
            .with_context("mode", direction.label())
            .with_context("bound", bound.to_string())
            .with_context("nodes", n.to_string()),
    ))
}
