use rayon::prelude::*;
use tracing::{debug, info, instrument};

use super::{
    challenge::{Challenge, Fitness},
    options::{LogLevel, RunConfig},
    stats::{GenerationStats, RunResult, RunState, Termination},
};
use crate::{
    breeding::{GenerationalStrategy, Mutator, UniformCrossover},
    equation::EquationSpec,
    error::{GeneticError, OptionExt, Result},
    individual::Individual,
    rng::RandomNumberGenerator,
    selection::{SelectionStrategy, TournamentSelection},
};

/// Creates generation 0: `population_size` individuals with every gene drawn
/// uniformly from the configured range.
pub fn initial_population(config: &RunConfig, rng: &mut RandomNumberGenerator) -> Vec<Individual> {
    let bounds = config.get_bounds();
    (0..config.get_population_size())
        .map(|_| Individual::random(&bounds, rng))
        .collect()
}

/// Runs the generational search for one equation.
///
/// The search owns all of its mutable state (population, generation counter,
/// history, best-so-far and random source), so independent instances never
/// interfere with each other.
///
/// A search runs once. Calling [`run`](Self::run) again fails with
/// [`GeneticError::AlreadyExecuted`] until [`reset`](Self::reset) is called;
/// a reset run keeps drawing from the same random source.
///
/// # Example
///
/// ```rust
/// use lineq_ga::equation::EquationSpec;
/// use lineq_ga::evolution::{GeneticSearch, RunConfig};
///
/// let equation = EquationSpec::new(2, 3, 1, 10);
/// let config = RunConfig::builder()
///     .max_generations(300)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let mut search = GeneticSearch::new(equation, config).unwrap();
/// let result = search.run().unwrap();
///
/// assert_eq!(result.history.len(), result.generations);
/// assert!(result.generations <= 300);
/// assert!(search.run().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSearch<Chall = EquationSpec, Sel = TournamentSelection>
where
    Chall: Challenge,
    Sel: SelectionStrategy,
{
    challenge: Chall,
    config: RunConfig,
    selection: Sel,
    strategy: GenerationalStrategy,
    rng: RandomNumberGenerator,
    population: Vec<Individual>,
    generation: usize,
    history: Vec<GenerationStats>,
    best: Option<(Individual, Fitness)>,
    state: RunState,
}

impl GeneticSearch<EquationSpec, TournamentSelection> {
    /// Creates a search for `equation` with tournament selection.
    ///
    /// The random source is seeded from the configured seed, or from system
    /// entropy when none is set.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the operators cannot be built from
    /// `config`.
    pub fn new(equation: EquationSpec, config: RunConfig) -> Result<Self> {
        Self::with_challenge(equation, config)
    }
}

impl<Chall> GeneticSearch<Chall, TournamentSelection>
where
    Chall: Challenge,
{
    /// Creates a search scored by an arbitrary challenge.
    pub fn with_challenge(challenge: Chall, config: RunConfig) -> Result<Self> {
        let selection = TournamentSelection::new(config.get_tournament_size())?;
        let strategy = GenerationalStrategy::new(
            UniformCrossover::new(config.get_crossover_rate())?,
            Mutator::new(
                config.get_mutation_rate(),
                config.get_mutation_policy(),
                config.get_bounds(),
            )?,
            config.get_elite_count(),
        )?;
        let rng = match config.get_seed() {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        };

        Ok(Self {
            challenge,
            config,
            selection,
            strategy,
            rng,
            population: Vec::new(),
            generation: 0,
            history: Vec::new(),
            best: None,
            state: RunState::Initialized,
        })
    }
}

impl<Chall, Sel> GeneticSearch<Chall, Sel>
where
    Chall: Challenge,
    Sel: SelectionStrategy,
{
    /// Replaces the selection strategy.
    pub fn with_selection<Other: SelectionStrategy>(
        self,
        selection: Other,
    ) -> GeneticSearch<Chall, Other> {
        GeneticSearch {
            challenge: self.challenge,
            config: self.config,
            selection,
            strategy: self.strategy,
            rng: self.rng,
            population: self.population,
            generation: self.generation,
            history: self.history,
            best: self.best,
            state: self.state,
        }
    }

    /// Replaces the random source.
    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = rng;
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    pub fn selection(&self) -> &Sel {
        &self.selection
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Index of the current generation.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Statistics of every evaluated generation so far, generation 0 first.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Best individual observed so far and its fitness.
    pub fn best(&self) -> Option<(Individual, Fitness)> {
        self.best
    }

    /// Runs the search to completion.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::AlreadyExecuted`] if the search has already run
    /// and was not reset.
    pub fn run(&mut self) -> Result<RunResult> {
        self.run_with(|_| {})
    }

    /// Runs the search to completion, passing the statistics of every
    /// generation to `observer` as soon as they are recorded.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::AlreadyExecuted`] if the search has already run
    /// and was not reset. Any other error aborts the run and resets the
    /// search.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            population = self.config.get_population_size(),
            max_generations = self.config.get_max_generations()
        )
    )]
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<RunResult>
    where
        F: FnMut(&GenerationStats),
    {
        if self.state != RunState::Initialized {
            return Err(GeneticError::AlreadyExecuted);
        }

        info!(
            crossover_rate = self.config.get_crossover_rate(),
            mutation_rate = self.config.get_mutation_rate(),
            "starting search"
        );

        self.population = initial_population(&self.config, &mut self.rng);
        self.state = RunState::Running;

        let termination = match self.evolve(&mut observer) {
            Ok(termination) => termination,
            Err(e) => {
                self.reset();
                return Err(e);
            }
        };

        self.state = RunState::Done(termination);
        let result = self.result(termination)?;

        info!(
            ?termination,
            generations = result.generations,
            best_fitness = %result.best_fitness,
            best = %result.best,
            "search finished"
        );

        Ok(result)
    }

    /// Evaluates and breeds generations until a stopping criterion holds.
    fn evolve<F>(&mut self, observer: &mut F) -> Result<Termination>
    where
        F: FnMut(&GenerationStats),
    {
        loop {
            let fitness = self.evaluate();
            let stats = self.record(&fitness)?;
            self.log_generation(&stats);
            observer(&stats);
            self.history.push(stats);

            if let Some(termination) = self.check_termination() {
                return Ok(termination);
            }

            self.population =
                self.strategy
                    .breed(&self.population, &fitness, &self.selection, &mut self.rng)?;
            self.generation += 1;
        }
    }

    /// Clears the population, history and best-so-far so the search can run
    /// again.
    pub fn reset(&mut self) {
        self.population.clear();
        self.history.clear();
        self.generation = 0;
        self.best = None;
        self.state = RunState::Initialized;
    }

    /// Scores every individual of the current population.
    ///
    /// Large populations are scored in parallel; scoring is pure, so the
    /// result does not depend on the path taken.
    fn evaluate(&self) -> Vec<Fitness> {
        if self.population.len() >= self.config.get_parallel_threshold() {
            self.population
                .par_iter()
                .map(|individual| self.challenge.score(individual))
                .collect()
        } else {
            self.population
                .iter()
                .map(|individual| self.challenge.score(individual))
                .collect()
        }
    }

    /// Builds the statistics of the current generation and updates the
    /// best-so-far tracker.
    fn record(&mut self, fitness: &[Fitness]) -> Result<GenerationStats> {
        let (best_idx, &best_fitness) = fitness
            .iter()
            .enumerate()
            .min_by_key(|(_, score)| **score)
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        let mean_fitness =
            fitness.iter().map(|&score| score as f64).sum::<f64>() / fitness.len() as f64;
        let best_individual = self.population[best_idx];

        let improved = self
            .best
            .map_or(true, |(_, incumbent)| best_fitness < incumbent);
        if improved {
            self.best = Some((best_individual, best_fitness));
        }

        Ok(GenerationStats {
            generation: self.generation,
            best_fitness,
            mean_fitness,
            best_individual,
        })
    }

    fn check_termination(&self) -> Option<Termination> {
        if matches!(self.best, Some((_, 0))) {
            Some(Termination::Converged)
        } else if self.history.len() >= self.config.get_max_generations() {
            Some(Termination::MaxGenerationsReached)
        } else {
            None
        }
    }

    fn log_generation(&self, stats: &GenerationStats) {
        match self.config.get_log_level() {
            LogLevel::Verbose => debug!(
                generation = stats.generation,
                best_fitness = %stats.best_fitness,
                mean_fitness = stats.mean_fitness,
                best = %stats.best_individual,
                "generation evaluated"
            ),
            LogLevel::Minimal if stats.generation % self.config.get_log_interval() == 0 => info!(
                generation = stats.generation,
                best_fitness = %stats.best_fitness,
                mean_fitness = stats.mean_fitness,
                "progress"
            ),
            LogLevel::Minimal | LogLevel::None => {}
        }
    }

    fn result(&self, termination: Termination) -> Result<RunResult> {
        let (best, best_fitness) = self.best.ok_or_else_genetic(|| {
            GeneticError::Evolution("Search finished without evaluating a generation".to_string())
        })?;

        Ok(RunResult {
            best,
            best_fitness,
            termination,
            generations: self.history.len(),
            history: self.history.clone(),
        })
    }
}
