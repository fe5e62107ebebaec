//! # EquationSpec
//!
//! The target equation `a·x + b·y + c·z = d` and its fitness function.
//!
//! The fitness of an individual is the absolute residual
//! `|a·x + b·y + c·z − d|`. It is zero exactly when the individual solves the
//! equation. The residual is computed in `i128` with saturating addition, so
//! extreme coefficients saturate instead of overflowing, and a saturated
//! residual is never zero.
//!
//! ## Example
//!
//! ```rust
//! use lineq_ga::equation::EquationSpec;
//! use lineq_ga::evolution::Challenge;
//! use lineq_ga::individual::Individual;
//!
//! let equation = EquationSpec::new(3, 5, 2, 14);
//! assert_eq!(equation.score(&Individual::new(2, 0, 4)), 0);
//! assert_eq!(equation.score(&Individual::new(0, 0, 0)), 14);
//! assert!(equation.verify(&Individual::new(2, 0, 4)));
//! ```

use std::fmt;

use crate::{
    evolution::challenge::{Challenge, Fitness},
    individual::Individual,
};

/// Integer coefficients `(a, b, c, d)` of `a·x + b·y + c·z = d`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EquationSpec {
    a: i64,
    b: i64,
    c: i64,
    d: i64,
}

impl EquationSpec {
    pub fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self { a, b, c, d }
    }

    /// Returns `(a, b, c, d)`.
    pub fn coefficients(&self) -> (i64, i64, i64, i64) {
        (self.a, self.b, self.c, self.d)
    }

    /// Left-hand side `a·x + b·y + c·z`, saturating at the `i128` limits.
    pub fn left_hand_side(&self, individual: &Individual) -> i128 {
        let term = |coefficient: i64, gene: i64| i128::from(coefficient) * i128::from(gene);

        term(self.a, individual.x())
            .saturating_add(term(self.b, individual.y()))
            .saturating_add(term(self.c, individual.z()))
    }

    /// Signed residual `a·x + b·y + c·z − d`.
    pub fn residual(&self, individual: &Individual) -> i128 {
        self.left_hand_side(individual)
            .saturating_sub(i128::from(self.d))
    }

    /// Returns `true` if the individual satisfies the equation exactly.
    pub fn verify(&self, individual: &Individual) -> bool {
        self.residual(individual) == 0
    }
}

impl Challenge for EquationSpec {
    fn score(&self, individual: &Individual) -> Fitness {
        self.residual(individual).unsigned_abs()
    }
}

impl fmt::Display for EquationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = [(self.a, 'x'), (self.b, 'y'), (self.c, 'z')];

        for (position, (coefficient, unknown)) in terms.iter().enumerate() {
            match (position, *coefficient < 0) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }
            write!(f, "{}{}", coefficient.unsigned_abs(), unknown)?;
        }

        write!(f, " = {}", self.d)
    }
}
