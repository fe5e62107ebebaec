//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for a
//! search run. It wraps the `rand` crate's `StdRng` so that a run can be made
//! reproducible by seeding it explicitly.
//!
//! ## Example
//!
//! ```rust
//! use lineq_ga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let gene = rng.gen_gene(-100, 100);
//! assert!((-100..=100).contains(&gene));
//! ```

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// genetic operators need.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws an integer uniformly from the inclusive range `[lo, hi]`.
    ///
    /// Callers guarantee `lo <= hi`.
    pub fn gen_gene(&mut self, lo: i64, hi: i64) -> i64 {
        self.rng.gen_range(lo..=hi)
    }

    /// Returns `true` with the given probability.
    ///
    /// A probability of `0.0` never fires and `1.0` always fires, since the
    /// underlying draw lies in `[0, 1)`.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }

    /// A fair coin flip.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen::<bool>()
    }

    /// Samples `amount` distinct indices from `0..len`, in sampling order.
    ///
    /// `amount` is clamped to `len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
