//! # Individual
//!
//! An `Individual` is one candidate solution `(x, y, z)` of the target
//! equation. Every gene lives inside the inclusive range described by
//! [`GeneBounds`]; the operators in [`crate::breeding`] only ever copy genes
//! between valid individuals or draw them from (or clamp them into) that range,
//! so the bound holds for every individual the engine produces.
//!
//! ## Example
//!
//! ```rust
//! use lineq_ga::individual::{GeneBounds, Individual};
//! use lineq_ga::rng::RandomNumberGenerator;
//!
//! let bounds = GeneBounds::new(-100, 100).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let individual = Individual::random(&bounds, &mut rng);
//! assert!(individual.is_within(&bounds));
//! ```

use std::fmt;

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// Number of unknowns in the target equation.
pub const GENE_COUNT: usize = 3;

/// Inclusive integer range `[lo, hi]` that every gene must stay in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeneBounds"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneBounds {
    lo: i64,
    hi: i64,
}

/// Deserialized form of [`GeneBounds`] before validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeneBounds {
    lo: i64,
    hi: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeneBounds> for GeneBounds {
    type Error = GeneticError;

    fn try_from(raw: RawGeneBounds) -> Result<Self> {
        Self::new(raw.lo, raw.hi)
    }
}

impl GeneBounds {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error unless `lo < hi`.
    pub fn new(lo: i64, hi: i64) -> Result<Self> {
        if lo >= hi {
            return Err(GeneticError::Configuration(format!(
                "Value range is empty or inverted: lower bound {} must be smaller than upper bound {}",
                lo, hi
            )));
        }

        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> i64 {
        self.lo
    }

    pub fn hi(&self) -> i64 {
        self.hi
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.lo..=self.hi).contains(&value)
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.lo, self.hi)
    }

    /// Draws a gene uniformly from the range.
    pub fn random(&self, rng: &mut RandomNumberGenerator) -> i64 {
        rng.gen_gene(self.lo, self.hi)
    }
}

impl Default for GeneBounds {
    fn default() -> Self {
        Self { lo: -100, hi: 100 }
    }
}

/// A candidate `(x, y, z)` triple.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Individual {
    genes: [i64; GENE_COUNT],
}

impl Individual {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { genes: [x, y, z] }
    }

    pub fn from_genes(genes: [i64; GENE_COUNT]) -> Self {
        Self { genes }
    }

    /// Creates an individual whose genes are drawn independently and uniformly
    /// from `bounds`.
    pub fn random(bounds: &GeneBounds, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            genes: [bounds.random(rng), bounds.random(rng), bounds.random(rng)],
        }
    }

    pub fn x(&self) -> i64 {
        self.genes[0]
    }

    pub fn y(&self) -> i64 {
        self.genes[1]
    }

    pub fn z(&self) -> i64 {
        self.genes[2]
    }

    pub fn genes(&self) -> &[i64; GENE_COUNT] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [i64; GENE_COUNT] {
        &mut self.genes
    }

    /// Returns `true` if every gene lies inside `bounds`.
    pub fn is_within(&self, bounds: &GeneBounds) -> bool {
        self.genes.iter().all(|&gene| bounds.contains(gene))
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={}, y={}, z={}", self.x(), self.y(), self.z())
    }
}
