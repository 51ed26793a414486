//! Backtracking line search.
//!
//! Starting from `t = 1`, the step shrinks geometrically by `beta` until the
//! Armijo sufficient-decrease condition holds:
//!
//! ```text
//! f(x + t·dx) ≤ f(x) + alpha · t · ∇f(x)ᵀdx
//! ```
//!
//! The step shrinks at most `max_iters` times, so the smallest step tried is
//! `beta^max_iters`. `f(x)` and `∇f(x)` are evaluated once, so a search costs
//! one gradient and one objective evaluation plus one per trial step.

use descent_core::{Gradient, Objective, Point, check_dimension};
use log::trace;

use crate::vector::along;

use super::{Error, LineSearchResult, ParameterError, check_ray};

/// Default fraction of the linearly predicted decrease that must be achieved.
pub const DEFAULT_ALPHA: f64 = 0.3;

/// Default factor by which the step shrinks after a rejected trial.
pub const DEFAULT_BETA: f64 = 0.8;

/// Default maximum number of step reductions.
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Configuration for the backtracking line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    alpha: f64,
    beta: f64,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            max_iters: DEFAULT_MAX_ITERS,
        }
    }
}

impl Config {
    /// Creates a validated backtracking config.
    ///
    /// Values of `alpha` in `[0.01, 0.3]` and `beta` in `[0.1, 0.8]` are
    /// typical.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if:
    /// - `alpha` is not strictly between 0 and 0.5
    /// - `beta` is not strictly between 0 and 1
    ///
    /// A `max_iters` of zero tries the full step `t = 1` only.
    pub fn new(alpha: f64, beta: f64, max_iters: usize) -> Result<Self, ParameterError> {
        if !(alpha > 0.0 && alpha < 0.5) {
            return Err(ParameterError::Alpha(alpha));
        }
        if !(beta > 0.0 && beta < 1.0) {
            return Err(ParameterError::Beta(beta));
        }
        Ok(Self {
            alpha,
            beta,
            max_iters,
        })
    }

    /// Returns the sufficient-decrease fraction.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the step shrink factor.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the maximum number of step reductions.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// Finds a step along `x + t·dx` that satisfies the Armijo condition.
///
/// # Errors
///
/// Returns an error if:
/// - `x` is empty or `dx` has a different length ([`Error::Shape`])
/// - the gradient at `x` has the wrong length ([`Error::Shape`])
/// - no step down to `beta^max_iters` is accepted ([`Error::Direction`])
/// - the objective or gradient fails ([`Error::Objective`], [`Error::Gradient`])
pub fn search<O: Objective, G: Gradient>(
    objective: &O,
    gradient: &G,
    x: &Point,
    dx: &Point,
    config: &Config,
) -> Result<LineSearchResult, Error> {
    check_ray(x, dx)?;

    let g = gradient.gradient(x).map_err(Error::gradient)?;
    check_dimension(&g, x.len())?;

    search_with_slope(objective, x, dx, g.dot(dx), config)
}

/// Backtracks with a known directional derivative `slope = ∇f(x)ᵀdx`.
///
/// Callers that already hold the gradient at `x` use this to skip a gradient
/// evaluation. The ray is assumed to be well shaped.
pub(crate) fn search_with_slope<O: Objective>(
    objective: &O,
    x: &Point,
    dx: &Point,
    slope: f64,
    config: &Config,
) -> Result<LineSearchResult, Error> {
    let f0 = objective.value(x).map_err(Error::objective)?;

    let mut t = 1.0;
    for shrinks in 0..=config.max_iters {
        let candidate = along(x, dx, t);
        let f = objective.value(&candidate).map_err(Error::objective)?;

        // A NaN value never satisfies the condition, so the step keeps shrinking.
        if f <= f0 + config.alpha * t * slope {
            trace!("backtracking: accepted t = {t} after {shrinks} reductions");
            return Ok(LineSearchResult::accepted(candidate, t));
        }
        t *= config.beta;
    }

    Err(Error::Direction)
}
