use std::fmt::Debug;

use crate::error::Result;
use crate::evolution::challenge::Fitness;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// Selection strategies choose individuals from a population based on their
/// fitness. Fitness is minimized, so strategies should favour lower values.
/// Selecting never modifies the population.
///
/// # Examples
///
/// ```
/// use lineq_ga::individual::Individual;
/// use lineq_ga::rng::RandomNumberGenerator;
/// use lineq_ga::selection::{SelectionStrategy, TournamentSelection};
///
/// let population = vec![
///     Individual::new(1, 1, 1),
///     Individual::new(2, 2, 2),
///     Individual::new(3, 3, 3),
/// ];
/// let fitness = vec![5, 0, 9];
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// let selection = TournamentSelection::new(3).unwrap();
/// let parents = selection.select(&population, &fitness, 2, &mut rng).unwrap();
///
/// // A tournament over the whole population always picks the best.
/// assert_eq!(parents, vec![Individual::new(2, 2, 2); 2]);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` individuals from the population.
    ///
    /// # Arguments
    ///
    /// * `population` - The current population of individuals.
    /// * `fitness` - The fitness of each individual, index-aligned with `population`.
    /// * `num_to_select` - The number of individuals to select.
    /// * `rng` - The random source of the run.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    fn select(
        &self,
        population: &[Individual],
        fitness: &[Fitness],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}
