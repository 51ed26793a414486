use std::error::Error as StdError;

use descent_core::ShapeError;
use thiserror::Error;

/// Errors that can occur during a line search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("function does not appear to decrease in search direction")]
    Direction,

    #[error("failed to bracket a minimum within {trials} doublings of the step")]
    Bracketing { trials: usize },

    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),

    #[error("gradient error: {0}")]
    Gradient(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }

    pub(crate) fn gradient<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Gradient(Box::new(err))
    }
}

/// Errors that can occur when validating line-search parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("precision must be finite and positive, got {0}")]
    Precision(f64),

    #[error("alpha must lie strictly between 0 and 0.5, got {0}")]
    Alpha(f64),

    #[error("beta must lie strictly between 0 and 1, got {0}")]
    Beta(f64),
}
