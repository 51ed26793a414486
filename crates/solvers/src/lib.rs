//! Line searches and steepest-descent optimization.
//!
//! The driver in [`steepest_descent`] repeatedly evaluates the gradient,
//! searches along the negative gradient with one of the [`line_search`]
//! methods, and stops once the gradient norm falls below a tolerance.
//!
//! Every run wraps the user's functions in a [`Counted`], which counts
//! objective, gradient, and Hessian evaluations. When no analytic gradient is
//! supplied, the wrapper estimates one with [`CentralDifference`] over its own
//! counted objective, so the reported counts include finite-difference calls.
//!
//! # Modules
//!
//! - [`differentiate`] — central-difference gradient estimation
//! - [`counted`] — evaluation-counting wrapper
//! - [`line_search`] — golden-section and backtracking line searches
//! - [`steepest_descent`] — the descent driver
//! - [`least_squares`] — minimizing a [`LeastSquares`] problem
//! - [`result`] — result records
//!
//! [`LeastSquares`]: descent_core::LeastSquares

pub mod counted;
pub mod differentiate;
pub mod least_squares;
pub mod line_search;
pub mod result;
pub mod steepest_descent;

mod vector;

pub use counted::{Counted, Counts};
pub use differentiate::CentralDifference;
pub use result::{LineSearchResult, OptimizationResult, Status};
