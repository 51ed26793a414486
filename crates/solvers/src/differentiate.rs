//! Central-difference gradient estimation.
//!
//! [`CentralDifference`] turns any [`Objective`] into a [`Gradient`] by
//! perturbing one coordinate at a time:
//!
//! ```text
//! ∂f/∂xᵢ ≈ (f(x + δeᵢ) − f(x − δeᵢ)) / 2δ,    δ = max(ε, ε‖x‖₂)
//! ```
//!
//! The step grows with ‖x‖ so the perturbation stays meaningful for large
//! points, and falls back to ε near the origin. Each gradient costs exactly
//! `2n` objective evaluations.

use descent_core::{Gradient, Objective, Point, ShapeError, check_non_empty};
use thiserror::Error;

use crate::vector::norm;

/// Default relative step for central differences.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Errors that can occur while estimating a gradient.
#[derive(Debug, Error)]
pub enum DifferenceError<E> {
    #[error("invalid shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("objective evaluation failed")]
    Objective(#[source] E),
}

/// A gradient estimated by central differences of an objective.
#[derive(Debug, Clone, Copy)]
pub struct CentralDifference<O> {
    objective: O,
    epsilon: f64,
}

impl<O> CentralDifference<O> {
    /// Creates an estimator with [`DEFAULT_EPSILON`].
    pub fn new(objective: O) -> Self {
        Self::with_epsilon(objective, DEFAULT_EPSILON)
    }

    /// Creates an estimator with a custom relative step.
    ///
    /// `epsilon` should be small and positive.
    pub fn with_epsilon(objective: O, epsilon: f64) -> Self {
        Self { objective, epsilon }
    }

    /// Returns the relative step.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the wrapped objective.
    pub fn objective(&self) -> &O {
        &self.objective
    }
}

/// Returns the finite-difference step used at `x`.
#[must_use]
pub fn step_size(x: &Point, epsilon: f64) -> f64 {
    epsilon.max(epsilon * norm(x))
}

impl<O: Objective> Gradient for CentralDifference<O> {
    type Error = DifferenceError<O::Error>;

    fn gradient(&self, x: &Point) -> Result<Point, Self::Error> {
        check_non_empty(x)?;

        let delta = step_size(x, self.epsilon);
        let mut probe = x.clone();
        let mut grad = Point::zeros(x.len());

        for i in 0..x.len() {
            let xi = x[i];

            probe[i] = xi + delta;
            let forward = self
                .objective
                .value(&probe)
                .map_err(DifferenceError::Objective)?;

            probe[i] = xi - delta;
            let backward = self
                .objective
                .value(&probe)
                .map_err(DifferenceError::Objective)?;

            probe[i] = xi;
            grad[i] = (forward - backward) / (2.0 * delta);
        }

        Ok(grad)
    }
}
