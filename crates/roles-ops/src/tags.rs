//! Algebraic properties claimed by an operator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag set describing how an operator relates to the lattice order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatorTags {
    /// `a ≤ b` implies `f(a) ≤ f(b)`.
    pub isotone: bool,
    /// `f(x)` does not depend on `x`.
    pub constant: bool,
    /// `f(x) ≤ x`.
    pub nonincreasing: bool,
    /// `f(x) ≥ x`.
    pub nondecreasing: bool,
}

impl OperatorTags {
    /// No claims at all.
    pub const NONE: OperatorTags = OperatorTags {
        isotone: false,
        constant: false,
        nonincreasing: false,
        nondecreasing: false,
    };

    /// Tags of the identity operator.
    pub const fn identity() -> Self {
        Self {
            isotone: true,
            constant: false,
            nonincreasing: true,
            nondecreasing: true,
        }
    }

    /// Isotone only.
    pub const fn isotone() -> Self {
        Self {
            isotone: true,
            ..Self::NONE
        }
    }

    /// Isotone and constant.
    pub const fn constant() -> Self {
        Self {
            isotone: true,
            constant: true,
            ..Self::NONE
        }
    }

    /// Isotone and nonincreasing.
    pub const fn interior() -> Self {
        Self {
            isotone: true,
            nonincreasing: true,
            ..Self::NONE
        }
    }

    /// Isotone and nondecreasing.
    pub const fn closure() -> Self {
        Self {
            isotone: true,
            nondecreasing: true,
            ..Self::NONE
        }
    }

    /// Tags of `second ∘ first`.
    ///
    /// A constant first stage feeds the second a single value, so the
    /// composite is constant as soon as either stage is.
    pub fn compose(first: OperatorTags, second: OperatorTags) -> OperatorTags {
        let constant = first.constant || second.constant;
        OperatorTags {
            isotone: constant || (first.isotone && second.isotone),
            constant,
            nonincreasing: first.nonincreasing && second.nonincreasing,
            nondecreasing: first.nondecreasing && second.nondecreasing,
        }
    }
}

impl fmt::Display for OperatorTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.isotone, "isotone"),
            (self.constant, "constant"),
            (self.nonincreasing, "nonincreasing"),
            (self.nondecreasing, "nondecreasing"),
        ];
        let claimed: Vec<&str> = names
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{{{}}}", claimed.join(", "))
    }
}
