use crate::error::{GeneticError, Result};
use crate::evolution::challenge::Fitness;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Default number of participants in a tournament.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament samples `tournament_size` distinct individuals uniformly at
/// random and keeps the one with the lowest fitness. Ties go to the participant
/// that was sampled first. Tournaments are independent of each other, so the
/// same individual can win more than once.
///
/// When the population is smaller than the tournament size, the whole
/// population takes part.
///
/// Tournament selection provides a balance between exploration and exploitation:
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is smaller than 2.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Tournament size must be at least 2, got {}",
                tournament_size
            )));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    pub(crate) fn run_tournament(
        &self,
        fitness: &[Fitness],
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        let participants = rng.sample_indices(fitness.len(), self.tournament_size);

        let (&first, rest) = participants
            .split_first()
            .ok_or(GeneticError::EmptyPopulation)?;

        let mut best_idx = first;
        for &idx in rest {
            if fitness[idx] < fitness[best_idx] {
                best_idx = idx;
            }
        }

        Ok(best_idx)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self {
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
        }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        population: &[Individual],
        fitness: &[Fitness],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if fitness.len() != population.len() {
            return Err(GeneticError::Configuration(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                population.len()
            )));
        }

        (0..num_to_select)
            .map(|_| {
                self.run_tournament(fitness, rng)
                    .map(|winner| population[winner])
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population() -> Vec<Individual> {
        (1..=5).map(|v| Individual::new(v, v, v)).collect()
    }

    #[test]
    fn test_tournament_selection() {
        let population = population();
        let fitness = vec![5, 8, 3, 9, 1];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = TournamentSelection::default();
        let selected = selection.select(&population, &fitness, 10, &mut rng).unwrap();

        assert_eq!(selected.len(), 10);
        assert!(selected.iter().all(|s| population.contains(s)));
    }

    #[test]
    fn test_full_tournament_picks_best() {
        let population = population();
        let fitness = vec![5, 8, 3, 9, 1];
        let mut rng = RandomNumberGenerator::from_seed(7);

        // Tournament size equal to population size is equivalent to elitist selection
        let selection = TournamentSelection::new(5).unwrap();
        let selected = selection.select(&population, &fitness, 4, &mut rng).unwrap();
        assert!(selected.iter().all(|s| *s == Individual::new(5, 5, 5)));

        // Larger than the population: everyone participates
        let selection = TournamentSelection::new(10).unwrap();
        let selected = selection.select(&population, &fitness, 4, &mut rng).unwrap();
        assert!(selected.iter().all(|s| *s == Individual::new(5, 5, 5)));
    }

    #[test]
    fn test_worst_never_wins() {
        let population = population();
        let fitness = vec![5, 8, 3, 9, 1];
        let mut rng = RandomNumberGenerator::from_seed(5);

        let selection = TournamentSelection::new(2).unwrap();
        for _ in 0..200 {
            let winner = selection.run_tournament(&fitness, &mut rng).unwrap();
            assert_ne!(winner, 3);
        }
    }

    #[test]
    fn test_tie_goes_to_first_sampled() {
        let fitness = vec![4, 4];
        let mut rng = RandomNumberGenerator::from_seed(13);
        let selection = TournamentSelection::new(2).unwrap();

        let mut probe = rng.clone();
        let expected = probe.sample_indices(2, 2)[0];

        assert_eq!(selection.run_tournament(&fitness, &mut rng).unwrap(), expected);
    }

    #[test]
    fn test_single_individual_population() {
        let population = vec![Individual::new(1, 2, 3)];
        let fitness = vec![42];
        let mut rng = RandomNumberGenerator::new();

        let selected = TournamentSelection::default()
            .select(&population, &fitness, 3, &mut rng)
            .unwrap();

        assert_eq!(selected, vec![Individual::new(1, 2, 3); 3]);
    }

    #[test]
    fn test_tournament_selection_empty_population() {
        let population: Vec<Individual> = Vec::new();
        let fitness: Vec<Fitness> = Vec::new();
        let mut rng = RandomNumberGenerator::new();

        let result = TournamentSelection::default().select(&population, &fitness, 3, &mut rng);

        assert_eq!(result, Err(GeneticError::EmptyPopulation));
    }

    #[test]
    fn test_tournament_selection_mismatched_lengths() {
        let population = vec![Individual::new(1, 1, 1), Individual::new(2, 2, 2)];
        let fitness = vec![5];
        let mut rng = RandomNumberGenerator::new();

        let result = TournamentSelection::default().select(&population, &fitness, 1, &mut rng);

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_tournament_selection_invalid_size() {
        assert!(TournamentSelection::new(0).is_err());
        assert!(TournamentSelection::new(1).is_err());
        assert!(TournamentSelection::new(2).is_ok());
    }
}
