use crate::individual::Individual;

use super::challenge::Fitness;

/// Statistics recorded for one evaluated generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    /// Lowest fitness in this generation.
    pub best_fitness: Fitness,
    /// Arithmetic mean of all fitness values in this generation.
    pub mean_fitness: f64,
    /// First individual in population order with `best_fitness`.
    pub best_individual: Individual,
}

/// Why a run stopped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// An exact solution (fitness 0) was found.
    Converged,
    /// The generation budget ran out first.
    MaxGenerationsReached,
}

/// Lifecycle of a [`GeneticSearch`](super::GeneticSearch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Initialized,
    Running,
    Done(Termination),
}

/// Outcome of a completed run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// Best individual observed in any generation.
    pub best: Individual,
    /// Fitness of `best`.
    pub best_fitness: Fitness,
    pub termination: Termination,
    /// Number of generations evaluated.
    pub generations: usize,
    /// One entry per evaluated generation, generation 0 first.
    pub history: Vec<GenerationStats>,
}

impl RunResult {
    /// Returns `true` if the best individual solves the equation exactly.
    pub fn is_exact(&self) -> bool {
        self.best_fitness == 0
    }
}
