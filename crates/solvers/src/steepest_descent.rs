//! Steepest-descent minimization.
//!
//! # Algorithm
//!
//! Starting from `x₀`, each iteration:
//!
//! 1. Evaluates the stopping criterion on the current gradient
//! 2. Stops with [`Status::MaxIters`] if the iteration limit is reached
//! 3. Runs the configured [`LineSearch`] along `−∇f(x)`
//! 4. Moves to the accepted point and evaluates the gradient there
//!
//! The criterion is checked before the limit, so a start point that already
//! satisfies it returns with `niter = 0`, even when `max_iters` is zero.
//!
//! # Evaluation Counts
//!
//! Every run wraps the objective in a [`Counted`], and all evaluations made
//! by the driver and its line searches go through it. The gradient at the
//! returned point is evaluated once more for the result's `jac`.
//!
//! See Boyd & Vandenberghe, *Convex Optimization*, §9.3.

mod config;
mod error;

#[cfg(test)]
mod tests;

pub use config::{
    Config, ConfigError, DEFAULT_MAX_ITERS, DEFAULT_TOL, LineSearch, StopCriterion,
};
pub use error::Error;

use descent_core::{Gradient, Objective, Point, check_dimension, check_non_empty};
use log::{debug, info, warn};

use crate::{
    Counted,
    line_search::{backtracking, golden_section},
    result::{OptimizationResult, Status},
    vector::norm,
};

/// Message reported when the iteration limit is reached.
pub const MAX_ITERS_INFO: &str = "Maximum number of iterations exceeded.";

/// Minimizes `objective` from `x0`, estimating gradients by central differences.
///
/// # Errors
///
/// See [`run`].
pub fn minimize<F: Objective>(
    objective: F,
    x0: &Point,
    config: &Config,
) -> Result<OptimizationResult, Error> {
    run(&Counted::new(objective), x0, config)
}

/// Minimizes `objective` from `x0` using the supplied gradient.
///
/// # Errors
///
/// See [`run`].
pub fn minimize_with_gradient<F: Objective, J: Gradient>(
    objective: F,
    gradient: J,
    x0: &Point,
    config: &Config,
) -> Result<OptimizationResult, Error> {
    run(&Counted::with_gradient(objective, gradient), x0, config)
}

/// Minimizes a counted objective from `x0`.
///
/// The counts reported in the result are those of `counted` when the run
/// finishes, so a fresh wrapper reports exactly the evaluations of this run.
///
/// # Errors
///
/// Returns an error if:
/// - `x0` is empty, or a gradient has the wrong length ([`Error::Shape`])
/// - a gradient evaluation fails ([`Error::Gradient`])
/// - a line search fails ([`Error::LineSearch`]), for example because the
///   objective is unbounded below along the search direction
///
/// Reaching the iteration limit is not an error; the result then has
/// `success == false` and [`Status::MaxIters`].
pub fn run<O, G, H>(
    counted: &Counted<O, G, H>,
    x0: &Point,
    config: &Config,
) -> Result<OptimizationResult, Error>
where
    Counted<O, G, H>: Objective + Gradient,
{
    check_non_empty(x0)?;

    let mut x = x0.clone();
    let mut jac = gradient_at(counted, &x)?;
    let mut path = config.saves_path().then(Vec::new);
    let mut niter = 0;

    let status = loop {
        if config.stop().is_met(&jac, config.tol()) {
            info!(
                "steepest descent converged after {niter} iterations, ‖g‖ = {:e}",
                norm(&jac)
            );
            break Status::Converged;
        }
        if niter == config.max_iters() {
            warn!(
                "steepest descent stopped at the iteration limit ({niter}), ‖g‖ = {:e}",
                norm(&jac)
            );
            break Status::MaxIters;
        }

        if let Some(path) = path.as_mut() {
            path.push(x.clone());
        }

        let dx = -&jac;
        let step = match config.line_search() {
            LineSearch::GoldenSection(ls) => golden_section::search(counted, &x, &dx, ls),
            LineSearch::Backtracking(ls) => {
                backtracking::search_with_slope(counted, &x, &dx, -jac.dot(&jac), ls)
            }
        }
        .map_err(|source| Error::LineSearch { iter: niter, source })?;

        debug!(
            "iteration {niter}: ‖g‖ = {:e}, t = {:e}",
            norm(&jac),
            step.t
        );

        x = step.x;
        jac = gradient_at(counted, &x)?;
        niter += 1;
    };

    if let Some(path) = path.as_mut() {
        path.push(x.clone());
    }

    let jac = gradient_at(counted, &x)?;
    let counts = counted.counts();
    let (success, info) = match status {
        Status::Converged => (true, None),
        Status::MaxIters => (false, Some(MAX_ITERS_INFO.to_owned())),
    };

    Ok(OptimizationResult {
        success,
        status,
        x,
        niter,
        nfev: counts.nfev,
        njev: counts.njev,
        nhev: counts.nhev,
        jac: Some(jac),
        info,
        solution_path: path,
    })
}

/// Evaluates the gradient at `x` and checks its length.
fn gradient_at<F: Gradient>(gradient: &F, x: &Point) -> Result<Point, Error> {
    let jac = gradient.gradient(x).map_err(Error::gradient)?;
    check_dimension(&jac, x.len())?;
    Ok(jac)
}
