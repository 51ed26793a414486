//! Golden-section line search.
//!
//! # Algorithm
//!
//! 1. **Direction check**: the step `10⁻ⁿ·dx` must decrease `f` for at least
//!    one `n` in `0..6`; otherwise `dx` is not a descent direction.
//! 2. **Bracketing**: starting at `t = 1`, double `t` until `f(x + t·dx)`
//!    exceeds `f(x)`, giving at most 64 trials. The minimum then lies in
//!    `[0, t]`.
//! 3. **Subdivision**: shrink the bracket by the golden ratio, keeping the
//!    side with the lower interior value. One interior value carries over on
//!    every shrink, so each step costs one new evaluation after the first.
//!    The search stops once the bracket is no wider than the precision,
//!    measured in x as `width · ‖dx‖`, and returns its midpoint.
//!
//! The search works in the scalar ray parameter, so the reported step `t`
//! is exact even when `dx` has zero components.
//!
//! # When to Use
//!
//! Golden-section search is appropriate when:
//! - The objective is unimodal along the ray
//! - An accurate line minimum is worth extra function evaluations
//!
//! It is the default search for [`steepest_descent`](crate::steepest_descent).

mod bracket;
mod config;


pub use config::{Config, DEFAULT_PRECISION};

use descent_core::{Objective, Point};
use log::trace;

use crate::vector::{along, norm};

use super::{Error, LineSearchResult, check_ray};

use bracket::StepBracket;

/// Number of trial scales, `10⁰` down to `10⁻⁵`, used to check the direction.
pub const DIRECTION_TRIALS: i32 = 6;

/// Maximum number of step doublings while bracketing.
pub const MAX_DOUBLINGS: usize = 64;

/// Minimizes the objective along `x + t·dx`.
///
/// # Errors
///
/// Returns an error if:
/// - `x` is empty or `dx` has a different length ([`Error::Shape`])
/// - no trial step decreases the objective ([`Error::Direction`])
/// - no minimum is bracketed within [`MAX_DOUBLINGS`] trials
///   ([`Error::Bracketing`])
/// - the objective fails at any evaluated point ([`Error::Objective`])
pub fn search<O: Objective>(
    objective: &O,
    x: &Point,
    dx: &Point,
    config: &Config,
) -> Result<LineSearchResult, Error> {
    check_ray(x, dx)?;

    let value = |t: f64| objective.value(&along(x, dx, t)).map_err(Error::objective);

    let f0 = objective.value(x).map_err(Error::objective)?;
    check_direction(&value, f0)?;
    let upper = bracket_minimum(&value, f0)?;

    // A descent direction is non-zero, so the scale is positive.
    let tolerance = config.precision() / norm(dx);
    let subdivision = subdivide(&value, upper, tolerance)?;
    trace!(
        "golden section: t = {} after {} shrinks and {} evaluations",
        subdivision.t, subdivision.shrinks, subdivision.evaluations
    );

    Ok(LineSearchResult::accepted(
        along(x, dx, subdivision.t),
        subdivision.t,
    ))
}

/// Succeeds if any of the trial steps `10⁻ⁿ` decreases the objective.
fn check_direction<F>(value: &F, f0: f64) -> Result<(), Error>
where
    F: Fn(f64) -> Result<f64, Error>,
{
    for n in 0..DIRECTION_TRIALS {
        if value(10f64.powi(-n))? < f0 {
            return Ok(());
        }
    }
    Err(Error::Direction)
}

/// Returns a step `t` with `f(x + t·dx) > f(x)`, doubling from `t = 1`.
fn bracket_minimum<F>(value: &F, f0: f64) -> Result<f64, Error>
where
    F: Fn(f64) -> Result<f64, Error>,
{
    let mut t = 1.0;
    for _ in 0..MAX_DOUBLINGS {
        if value(t)? > f0 {
            trace!("golden section: minimum bracketed in [0, {t}]");
            return Ok(t);
        }
        t *= 2.0;
    }
    Err(Error::Bracketing {
        trials: MAX_DOUBLINGS,
    })
}

/// Outcome of shrinking a bracket.
#[derive(Debug, Clone, Copy)]
struct Subdivision {
    /// Midpoint of the final bracket.
    t: f64,
    shrinks: usize,
    evaluations: usize,
}

/// Shrinks `[0, upper]` until its width is at most `tolerance`.
fn subdivide<F>(value: &F, upper: f64, tolerance: f64) -> Result<Subdivision, Error>
where
    F: Fn(f64) -> Result<f64, Error>,
{
    let mut bracket = StepBracket::new(upper);
    let mut shrinks = 0;
    let mut evaluations = 0;

    if bracket.width() <= tolerance {
        return Ok(Subdivision {
            t: bracket.midpoint(),
            shrinks,
            evaluations,
        });
    }

    let mut f1 = value(bracket.t1)?;
    let mut f2 = value(bracket.t2)?;
    evaluations += 2;

    loop {
        let width = bracket.width();
        let keep_lower = f1 < f2;
        if keep_lower {
            bracket.keep_lower();
        } else {
            bracket.keep_upper();
        }
        shrinks += 1;

        // Stop at the tolerance, or once the width no longer shrinks in
        // floating point.
        if bracket.width() <= tolerance || bracket.width() >= width {
            break;
        }

        if keep_lower {
            f2 = f1;
            f1 = value(bracket.t1)?;
        } else {
            f1 = f2;
            f2 = value(bracket.t2)?;
        }
        evaluations += 1;
    }

    Ok(Subdivision {
        t: bracket.midpoint(),
        shrinks,
        evaluations,
    })
}
