//! # RunConfig
//!
//! The `RunConfig` struct holds every parameter of a search run: population
//! size, operator probabilities, generation budget, gene range and the
//! tunables of the selection and mutation operators. A `RunConfig` can only be
//! obtained through validation, so a constructed configuration is always
//! usable.
//!
//! ## Example
//!
//! ```rust
//! use lineq_ga::breeding::MutationPolicy;
//! use lineq_ga::evolution::{LogLevel, RunConfig};
//!
//! // Positional constructor covering the core parameters
//! let config = RunConfig::new(100, 0.8, 0.1, 500, (-100, 100)).unwrap();
//! assert_eq!(config.get_population_size(), 100);
//!
//! // Builder for everything else
//! let config = RunConfig::builder()
//!     .population_size(150)
//!     .max_generations(300)
//!     .tournament_size(4)
//!     .mutation_policy(MutationPolicy::Perturb { max_step: 10 })
//!     .log_level(LogLevel::Minimal)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.get_seed(), Some(42));
//!
//! // Invalid values are rejected up front
//! assert!(RunConfig::new(100, 0.8, 1.5, 500, (-100, 100)).is_err());
//! ```
//!
//! ## Defaults
//!
//! | Parameter | Default |
//! |---|---|
//! | population size | 100 |
//! | crossover rate | 0.8 |
//! | mutation rate | 0.1 |
//! | max generations | 1000 |
//! | value range | (-100, 100) |
//! | tournament size | 3 |
//! | elite count | 1 |
//! | mutation policy | `Resample` |
//! | seed | none (entropy) |
//! | log level | `None` |
//! | log interval | 50 |
//! | parallel threshold | 1000 |

use crate::{
    breeding::MutationPolicy,
    error::{GeneticError, Result},
    individual::GeneBounds,
    selection::DEFAULT_TOURNAMENT_SIZE,
};

/// How much the generational loop reports through `tracing`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every generation at `debug`, including its best individual.
    Verbose,
    /// A progress line every `log_interval` generations at `info`.
    Minimal,
    /// No per-generation events.
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRunConfig"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    population_size: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    max_generations: usize,
    bounds: GeneBounds,
    tournament_size: usize,
    elite_count: usize,
    mutation_policy: MutationPolicy,
    seed: Option<u64>,
    log_level: LogLevel,
    /// Generations between progress lines when logging at `Minimal`
    log_interval: usize,
    /// Minimum population size for parallel fitness evaluation
    parallel_threshold: usize,
}

impl RunConfig {
    /// Creates a validated configuration from the core parameters; everything
    /// else takes its default.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if any value is out of its domain.
    pub fn new(
        population_size: usize,
        crossover_rate: f64,
        mutation_rate: f64,
        max_generations: usize,
        range: (i64, i64),
    ) -> Result<Self> {
        Self::builder()
            .population_size(population_size)
            .crossover_rate(crossover_rate)
            .mutation_rate(mutation_rate)
            .max_generations(max_generations)
            .range(range.0, range.1)
            .build()
    }

    /// Returns a builder for creating a `RunConfig` instance.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_bounds(&self) -> GeneBounds {
        self.bounds
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_elite_count(&self) -> usize {
        self.elite_count
    }

    pub fn get_mutation_policy(&self) -> MutationPolicy {
        self.mutation_policy
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_log_interval(&self) -> usize {
        self.log_interval
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        for (name, rate) in [
            ("Crossover", self.crossover_rate),
            ("Mutation", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(GeneticError::Configuration(format!(
                    "{} rate must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }

        if self.max_generations == 0 {
            return Err(GeneticError::Configuration(
                "Maximum number of generations cannot be zero".to_string(),
            ));
        }

        if self.tournament_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Tournament size must be at least 2, got {}",
                self.tournament_size
            )));
        }

        if self.elite_count == 0 || self.elite_count > self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Elite count must be between 1 and the population size ({}), got {}",
                self.population_size, self.elite_count
            )));
        }

        if self.log_interval == 0 {
            return Err(GeneticError::Configuration(
                "Log interval cannot be zero".to_string(),
            ));
        }

        self.mutation_policy.validate()
    }
}

/// Deserialized form of [`RunConfig`] before validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRunConfig {
    population_size: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    max_generations: usize,
    bounds: GeneBounds,
    tournament_size: usize,
    elite_count: usize,
    mutation_policy: MutationPolicy,
    seed: Option<u64>,
    log_level: LogLevel,
    log_interval: usize,
    parallel_threshold: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRunConfig> for RunConfig {
    type Error = GeneticError;

    fn try_from(raw: RawRunConfig) -> Result<Self> {
        let config = RunConfig {
            population_size: raw.population_size,
            crossover_rate: raw.crossover_rate,
            mutation_rate: raw.mutation_rate,
            max_generations: raw.max_generations,
            bounds: raw.bounds,
            tournament_size: raw.tournament_size,
            elite_count: raw.elite_count,
            mutation_policy: raw.mutation_policy,
            seed: raw.seed,
            log_level: raw.log_level,
            log_interval: raw.log_interval,
            parallel_threshold: raw.parallel_threshold,
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            max_generations: 1000,
            bounds: GeneBounds::default(),
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            elite_count: 1,
            mutation_policy: MutationPolicy::Resample,
            seed: None,
            log_level: LogLevel::None,
            log_interval: 50,
            parallel_threshold: 1000,
        }
    }
}

/// Builder for `RunConfig`.
///
/// Provides a fluent interface for constructing `RunConfig` instances. Unset
/// parameters take the defaults listed in the module documentation.
#[derive(Debug, Clone, Default)]
pub struct RunConfigBuilder {
    population_size: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    max_generations: Option<usize>,
    range: Option<(i64, i64)>,
    tournament_size: Option<usize>,
    elite_count: Option<usize>,
    mutation_policy: Option<MutationPolicy>,
    seed: Option<u64>,
    log_level: Option<LogLevel>,
    log_interval: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl RunConfigBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Sets the inclusive gene range `[lo, hi]`.
    pub fn range(mut self, lo: i64, hi: i64) -> Self {
        self.range = Some((lo, hi));
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn elite_count(mut self, value: usize) -> Self {
        self.elite_count = Some(value);
        self
    }

    pub fn mutation_policy(mut self, value: MutationPolicy) -> Self {
        self.mutation_policy = Some(value);
        self
    }

    /// Seeds the run's random source for reproducible results.
    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn log_interval(mut self, value: usize) -> Self {
        self.log_interval = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds and validates the `RunConfig` instance.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error describing the first invalid value.
    pub fn build(self) -> Result<RunConfig> {
        let defaults = RunConfig::default();

        let bounds = match self.range {
            Some((lo, hi)) => GeneBounds::new(lo, hi)?,
            None => defaults.bounds,
        };

        let config = RunConfig {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            bounds,
            tournament_size: self.tournament_size.unwrap_or(defaults.tournament_size),
            elite_count: self.elite_count.unwrap_or(defaults.elite_count),
            mutation_policy: self.mutation_policy.unwrap_or(defaults.mutation_policy),
            seed: self.seed.or(defaults.seed),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            log_interval: self.log_interval.unwrap_or(defaults.log_interval),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        };

        config.validate()?;
        Ok(config)
    }
}
