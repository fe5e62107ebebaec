//! # Breeding
//!
//! Genetic operators and the strategy that combines them into a new
//! generation: [`UniformCrossover`], [`Mutator`] and [`GenerationalStrategy`].
pub mod crossover;
pub mod generational;
pub mod mutation;

pub use crossover::UniformCrossover;
pub use generational::GenerationalStrategy;
pub use mutation::{MutationPolicy, Mutator};
