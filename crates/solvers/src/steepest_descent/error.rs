use std::error::Error as StdError;

use descent_core::ShapeError;
use thiserror::Error;

use crate::line_search;

/// Errors that can occur during steepest descent.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("line search failed on iteration {iter}")]
    LineSearch {
        iter: usize,
        #[source]
        source: line_search::Error,
    },

    #[error("gradient error: {0}")]
    Gradient(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn gradient<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Gradient(Box::new(err))
    }
}
