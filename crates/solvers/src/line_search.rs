//! Line searches along a ray `x + t·dx`, `t ≥ 0`.
//!
//! # Searches
//!
//! - [`golden_section`] — exact minimization along the ray: checks that `dx`
//!   is a descent direction, brackets a minimum by doubling `t`, then shrinks
//!   the bracket by the golden ratio until it is narrower than the requested
//!   precision
//! - [`backtracking`] — inexact search that shrinks `t` geometrically until
//!   the Armijo sufficient-decrease condition holds
//!
//! Both return a [`LineSearchResult`] holding the accepted point and step.
//! Errors raised by the objective or gradient are returned unchanged as the
//! boxed source of [`Error::Objective`] or [`Error::Gradient`].

mod error;

pub mod backtracking;
pub mod golden_section;

pub use error::{Error, ParameterError};

pub use crate::result::LineSearchResult;

use descent_core::{Point, ShapeError, check_dimension, check_non_empty};

/// Checks that `x` is non-empty and `dx` has the same length.
fn check_ray(x: &Point, dx: &Point) -> Result<(), ShapeError> {
    check_non_empty(x)?;
    check_dimension(dx, x.len())
}
