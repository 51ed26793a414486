//! Result records for line searches and optimization runs.

use std::fmt;

use descent_core::Point;

/// The outcome of a line search.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSearchResult {
    /// Whether the search terminated normally.
    pub success: bool,

    /// The accepted point `x + t·dx`.
    pub x: Point,

    /// The accepted step along the search direction.
    pub t: f64,
}

impl LineSearchResult {
    pub(crate) fn accepted(x: Point, t: f64) -> Self {
        Self {
            success: true,
            x,
            t,
        }
    }
}

impl fmt::Display for LineSearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "success: {}", self.success)?;
        writeln!(f, "x*: {}", self.x)?;
        write!(f, "t: {}", self.t)
    }
}

/// Indicates whether an optimization converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The stopping criterion was met.
    Converged,

    /// Reached the iteration limit without meeting the stopping criterion.
    MaxIters,
}

/// The outcome of an optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Whether the stopping criterion was met.
    pub success: bool,

    /// Final driver status.
    pub status: Status,

    /// Best estimate of the minimizer.
    pub x: Point,

    /// Number of line searches performed.
    pub niter: usize,

    /// Objective evaluations, including finite-difference calls.
    pub nfev: usize,

    /// Gradient evaluations.
    pub njev: usize,

    /// Hessian evaluations.
    pub nhev: usize,

    /// Gradient at `x`.
    pub jac: Option<Point>,

    /// Additional information, set when the run did not converge.
    pub info: Option<String>,

    /// Every iterate from the start point to `x`, when recording was enabled.
    pub solution_path: Option<Vec<Point>>,
}

impl fmt::Display for OptimizationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "success: {}", self.success)?;
        writeln!(f, "x*: {}", self.x)?;
        match &self.jac {
            Some(jac) => writeln!(f, "jac(x*): {jac}")?,
            None => writeln!(f, "jac(x*): none")?,
        }
        writeln!(f, "niter: {}", self.niter)?;
        writeln!(f, "nfev: {}", self.nfev)?;
        writeln!(f, "njev: {}", self.njev)?;
        writeln!(f, "nhev: {}", self.nhev)?;
        writeln!(f, "info: {}", self.info.as_deref().unwrap_or("none"))?;
        let path = if self.solution_path.is_some() {
            "available"
        } else {
            "unavailable"
        };
        write!(f, "solution path: {path}")
    }
}
