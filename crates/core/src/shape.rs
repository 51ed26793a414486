use thiserror::Error;

use crate::Point;

/// Errors raised when a vector has the wrong dimension.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("vector must have at least one element")]
    Empty,

    #[error("dimension mismatch: expected {expected}, found {found}")]
    Mismatch { expected: usize, found: usize },
}

/// Checks that `x` has at least one element.
///
/// # Errors
///
/// Returns [`ShapeError::Empty`] if `x` is empty.
pub fn check_non_empty(x: &Point) -> Result<(), ShapeError> {
    if x.is_empty() {
        return Err(ShapeError::Empty);
    }
    Ok(())
}

/// Checks that `x` is non-empty and has exactly `expected` elements.
///
/// # Errors
///
/// Returns [`ShapeError::Empty`] if `x` is empty, or
/// [`ShapeError::Mismatch`] if its length differs from `expected`.
pub fn check_dimension(x: &Point, expected: usize) -> Result<(), ShapeError> {
    check_non_empty(x)?;
    if x.len() != expected {
        return Err(ShapeError::Mismatch {
            expected,
            found: x.len(),
        });
    }
    Ok(())
}
