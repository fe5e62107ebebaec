//! # Error Types
//!
//! This module defines the error type used throughout the search engine.
//! Configuration problems are reported once, when a [`RunConfig`] is built,
//! and are never recovered internally.
//!
//! Failing to find an exact solution is not an error: a run that exhausts its
//! generation budget finishes normally and reports the best approximation.
//!
//! ## Examples
//!
//! ```rust
//! use lineq_ga::error::GeneticError;
//! use lineq_ga::evolution::RunConfig;
//!
//! let result = RunConfig::builder().population_size(0).build();
//! assert!(matches!(result, Err(GeneticError::Configuration(_))));
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use lineq_ga::error::{GeneticError, OptionExt};
//!
//! fn lowest(scores: &[u128]) -> lineq_ga::error::Result<u128> {
//!     scores.iter().min().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(lowest(&[4, 2, 9]).unwrap(), 2);
//! assert!(lowest(&[]).is_err());
//! ```
//!
//! [`RunConfig`]: crate::evolution::RunConfig

use thiserror::Error;

/// Represents errors that can occur while configuring or running a search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a finished search is executed again without a reset.
    #[error("Search already executed: call reset() before running it again")]
    AlreadyExecuted,

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when the generational loop breaks one of its invariants.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for search operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
