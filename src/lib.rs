pub mod breeding;
pub mod equation;
pub mod error;
pub mod evolution;
pub mod individual;
pub mod report;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use equation::EquationSpec;
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{GeneticSearch, RunConfig, RunResult};
pub use individual::Individual;
