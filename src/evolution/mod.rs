pub mod challenge;
pub mod launcher;
pub mod options;
pub mod stats;

pub use challenge::{Challenge, Fitness};
pub use launcher::{initial_population, GeneticSearch};
pub use options::{LogLevel, RunConfig, RunConfigBuilder};
pub use stats::{GenerationStats, RunResult, RunState, Termination};
