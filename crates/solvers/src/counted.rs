//! Evaluation counting for objectives and their derivatives.
//!
//! [`Counted`] wraps an objective together with a gradient source and an
//! optional Hessian, and counts every call routed through it. Counts are exact:
//! each call increments exactly one counter, and a numerically estimated
//! gradient evaluates the *counted* objective, so its `2n` function calls show
//! up in `nfev` as well as one call in `njev`.
//!
//! A `Counted` implements [`Objective`], [`Gradient`], and [`Hessian`] itself,
//! so it can be handed to any line search in place of the raw functions.
//!
//! ```
//! use std::convert::Infallible;
//!
//! use descent_core::{Gradient, Objective, Point};
//! use descent_solvers::Counted;
//! use ndarray::array;
//!
//! let f = |x: &Point| -> Result<f64, Infallible> { Ok(x.dot(x)) };
//! let counted = Counted::new(f);
//!
//! counted.value(&array![1.0, 2.0]).unwrap();
//! counted.gradient(&array![1.0, 2.0]).unwrap();
//!
//! let counts = counted.counts();
//! assert_eq!((counts.nfev, counts.njev, counts.nhev), (5, 1, 0));
//! ```

use std::cell::Cell;

use descent_core::{Gradient, Hessian, Matrix, Objective, Point};
use thiserror::Error;

use crate::differentiate::{CentralDifference, DEFAULT_EPSILON, DifferenceError};

/// Raised when a Hessian is requested but none was provided.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("hessian not supported: none was provided")]
pub struct NotSupported;

/// Gradient source that differentiates the counted objective numerically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Numerical {
    epsilon: f64,
}

impl Default for Numerical {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl Numerical {
    /// Returns the relative finite-difference step.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

/// Gradient source backed by a user-supplied gradient.
#[derive(Debug, Clone, Copy)]
pub struct Analytic<G>(pub G);

/// Hessian source used when no Hessian was provided.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHessian;

impl Hessian for NoHessian {
    type Error = NotSupported;

    fn hessian(&self, _x: &Point) -> Result<Matrix, NotSupported> {
        Err(NotSupported)
    }
}

/// A snapshot of evaluation counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    /// Objective evaluations.
    pub nfev: usize,

    /// Gradient evaluations.
    pub njev: usize,

    /// Hessian evaluations.
    pub nhev: usize,
}

/// An objective with counted access to its value, gradient, and Hessian.
///
/// Counters use [`Cell`], so evaluation takes `&self` and a `Counted` can be
/// borrowed by a line search while its owner keeps reading the counts. Each
/// optimization run should build its own wrapper.
#[derive(Debug)]
pub struct Counted<O, G = Numerical, H = NoHessian> {
    objective: O,
    gradient: G,
    hessian: H,
    nfev: Cell<usize>,
    njev: Cell<usize>,
    nhev: Cell<usize>,
}

impl<O> Counted<O> {
    /// Wraps an objective whose gradient is estimated by central differences.
    pub fn new(objective: O) -> Self {
        Self::from_parts(objective, Numerical::default(), NoHessian)
    }

    /// Like [`Counted::new`], with a custom finite-difference step.
    pub fn with_epsilon(objective: O, epsilon: f64) -> Self {
        Self::from_parts(objective, Numerical { epsilon }, NoHessian)
    }
}

impl<O, G> Counted<O, Analytic<G>> {
    /// Wraps an objective with a user-supplied gradient.
    pub fn with_gradient(objective: O, gradient: G) -> Self {
        Self::from_parts(objective, Analytic(gradient), NoHessian)
    }
}

impl<O, G, H> Counted<O, G, H> {
    fn from_parts(objective: O, gradient: G, hessian: H) -> Self {
        Self {
            objective,
            gradient,
            hessian,
            nfev: Cell::new(0),
            njev: Cell::new(0),
            nhev: Cell::new(0),
        }
    }

    /// Attaches a Hessian, keeping the counts accumulated so far.
    pub fn with_hessian<H2>(self, hessian: H2) -> Counted<O, G, H2> {
        Counted {
            objective: self.objective,
            gradient: self.gradient,
            hessian,
            nfev: self.nfev,
            njev: self.njev,
            nhev: self.nhev,
        }
    }

    /// Returns the current evaluation counts.
    #[must_use]
    pub fn counts(&self) -> Counts {
        Counts {
            nfev: self.nfev.get(),
            njev: self.njev.get(),
            nhev: self.nhev.get(),
        }
    }

    /// Returns the wrapped objective.
    pub fn objective(&self) -> &O {
        &self.objective
    }
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

impl<O: Objective, G, H> Objective for Counted<O, G, H> {
    type Error = O::Error;

    fn value(&self, x: &Point) -> Result<f64, O::Error> {
        bump(&self.nfev);
        self.objective.value(x)
    }
}

impl<O: Objective, H> Gradient for Counted<O, Numerical, H> {
    type Error = DifferenceError<O::Error>;

    fn gradient(&self, x: &Point) -> Result<Point, Self::Error> {
        bump(&self.njev);
        CentralDifference::with_epsilon(|p: &Point| self.value(p), self.gradient.epsilon)
            .gradient(x)
    }
}

impl<O, G: Gradient, H> Gradient for Counted<O, Analytic<G>, H> {
    type Error = G::Error;

    fn gradient(&self, x: &Point) -> Result<Point, G::Error> {
        bump(&self.njev);
        self.gradient.0.gradient(x)
    }
}

impl<O, G, H: Hessian> Hessian for Counted<O, G, H> {
    type Error = H::Error;

    fn hessian(&self, x: &Point) -> Result<Matrix, H::Error> {
        bump(&self.nhev);
        self.hessian.hessian(x)
    }
}
