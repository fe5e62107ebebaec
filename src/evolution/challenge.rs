use crate::individual::Individual;

/// Fitness of an individual. Lower is better and `0` is an exact solution.
pub type Fitness = u128;

/// Scores individuals for the generational loop.
///
/// Implementations must be pure: the same individual always receives the same
/// score, and scoring draws no randomness. This is what allows the loop to
/// spread evaluation over several threads.
pub trait Challenge: Send + Sync {
    fn score(&self, individual: &Individual) -> Fitness;
}
