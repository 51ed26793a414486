//! Core traits and types for the descent toolkit.
//!
//! This crate defines the shared abstractions that the line searches and the
//! steepest-descent driver build on:
//!
//! - [`Point`] — a column vector in Rⁿ
//! - [`Objective`] — a scalar function of a point
//! - [`Gradient`], [`Hessian`] — first and second derivative providers
//! - [`ShapeError`] — raised when a vector has the wrong dimension
//! - [`LeastSquares`] — the objective `‖Ax − b‖²`, usable like any other
//!
//! Closures of the form `Fn(&Point) -> Result<f64, E>` are objectives, and
//! `Fn(&Point) -> Result<Point, E>` closures are gradients, so most callers
//! never implement the traits by hand.

mod objective;
mod problems;
mod shape;

pub use objective::{Gradient, Hessian, Matrix, Objective, Point};
pub use problems::LeastSquares;
pub use shape::{ShapeError, check_dimension, check_non_empty};
