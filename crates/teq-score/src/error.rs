//! Error types for the scoring engine.

use teq_context::ContextError;
use thiserror::Error;

/// Errors that can occur when configuring or running a scoring pass.
#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    /// The candidate-breadth ratio must be a positive finite number.
    #[error("max-ratio must be a positive number, got {value}")]
    InvalidMaxRatio {
        /// The rejected value.
        value: f64,
    },

    /// No feature scheme was selected.
    #[error("at least one feature scheme is required")]
    NoFeatures,

    /// The context set could not be normalized.
    #[error(transparent)]
    Context(#[from] ContextError),
}
