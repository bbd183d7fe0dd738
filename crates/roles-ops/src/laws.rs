//! Sample-based verification of the tags an operator claims.

use std::fmt;

use roles_core::errors::RoleError;
use roles_core::Lattice;
use serde::{Deserialize, Serialize};

use crate::operator::RoleOperator;

/// One of the algebraic laws behind [`OperatorTags`](crate::OperatorTags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Law {
    /// `a ≤ b` implies `f(a) ≤ f(b)`.
    Isotone,
    /// `f(a) == f(b)` for all inputs.
    Constant,
    /// `f(x) ≤ x`.
    Nonincreasing,
    /// `f(x) ≥ x`.
    Nondecreasing,
}

/// A claimed law that failed on the given samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawViolation {
    /// The violated law.
    pub law: Law,
    /// Sample indices witnessing the violation.
    pub witnesses: Vec<usize>,
}

impl fmt::Display for LawViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} violated by samples {:?}", self.law, self.witnesses)
    }
}

/// Checks every tag claimed by `operator` on `samples`.
///
/// Isotony is checked on every comparable ordered pair of samples. An empty
/// result means no violation was found.
pub fn check_tags<L: Lattice>(
    operator: &RoleOperator<'_, L>,
    samples: &[L],
) -> Result<Vec<LawViolation>, RoleError> {
    let tags = operator.tags();
    let outputs: Vec<L> = samples
        .iter()
        .map(|sample| operator.apply(sample))
        .collect::<Result<_, _>>()?;
    let mut violations = Vec::new();

    for (idx, (input, output)) in samples.iter().zip(&outputs).enumerate() {
        if tags.nonincreasing && !output.leq(input)? {
            violations.push(LawViolation {
                law: Law::Nonincreasing,
                witnesses: vec![idx],
            });
        }
        if tags.nondecreasing && !input.leq(output)? {
            violations.push(LawViolation {
                law: Law::Nondecreasing,
                witnesses: vec![idx],
            });
        }
        if tags.constant && idx > 0 && *output != outputs[0] {
            violations.push(LawViolation {
                law: Law::Constant,
                witnesses: vec![0, idx],
            });
        }
    }

    if tags.isotone {
        for (i, a) in samples.iter().enumerate() {
            for (j, b) in samples.iter().enumerate() {
                if i != j && a.leq(b)? && !outputs[i].leq(&outputs[j])? {
                    violations.push(LawViolation {
                        law: Law::Isotone,
                        witnesses: vec![i, j],
                    });
                }
            }
        }
    }

    if !violations.is_empty() {
        log::debug!(
            "{} law violation(s) for operator {}",
            violations.len(),
            operator.name()
        );
    }
    Ok(violations)
}
