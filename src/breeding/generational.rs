//! # GenerationalStrategy
//!
//! Builds the next generation from the current one. The best individuals are
//! carried over unchanged into the leading slots, and the remaining slots are
//! filled by repeated select → crossover → mutate cycles. Each cycle picks two
//! parents and yields two children; a child that would overflow the
//! population is discarded.
//!
//! Because the best individual is always carried over, the best fitness of a
//! generation can never be worse than that of the generation before it.

use crate::{
    error::{GeneticError, Result},
    evolution::challenge::Fitness,
    individual::Individual,
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
};

use super::{crossover::UniformCrossover, mutation::Mutator};

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationalStrategy {
    crossover: UniformCrossover,
    mutator: Mutator,
    elite_count: usize,
}

impl GenerationalStrategy {
    /// Creates a strategy carrying `elite_count` individuals over unchanged.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `elite_count` is zero.
    pub fn new(crossover: UniformCrossover, mutator: Mutator, elite_count: usize) -> Result<Self> {
        if elite_count == 0 {
            return Err(GeneticError::Configuration(
                "Elite count must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            crossover,
            mutator,
            elite_count,
        })
    }

    pub fn elite_count(&self) -> usize {
        self.elite_count
    }

    /// Indices of the `elite_count` best individuals, best first. Equal
    /// fitness keeps population order.
    pub fn elite_indices(&self, fitness: &[Fitness]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..fitness.len()).collect();
        order.sort_by_key(|&idx| fitness[idx]);
        order.truncate(self.elite_count);
        order
    }

    /// Breeds a new population of the same size as `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty, or if selection fails.
    pub fn breed<S>(
        &self,
        population: &[Individual],
        fitness: &[Fitness],
        selection: &S,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>
    where
        S: SelectionStrategy + ?Sized,
    {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let target = population.len();
        let mut next: Vec<Individual> = Vec::with_capacity(target + 1);

        next.extend(
            self.elite_indices(fitness)
                .into_iter()
                .map(|idx| population[idx]),
        );

        while next.len() < target {
            let parents = selection.select(population, fitness, 2, rng)?;
            let (parent_a, parent_b) = match parents.as_slice() {
                [a, b] => (*a, *b),
                _ => {
                    return Err(GeneticError::Evolution(format!(
                        "Selection returned {} parents, expected 2",
                        parents.len()
                    )))
                }
            };
            let (mut first, mut second) = self.crossover.crossover(&parent_a, &parent_b, rng);

            self.mutator.mutate(&mut first, rng);
            self.mutator.mutate(&mut second, rng);

            next.push(first);
            next.push(second);
        }

        next.truncate(target);
        Ok(next)
    }
}
