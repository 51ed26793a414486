//! Minimizing linear least-squares problems by steepest descent.
//!
//! The descent starts at the origin and moves along gradients `2Aᵀr`, which
//! lie in the row space of `A`. Iterates therefore never leave that space,
//! and for an underdetermined system the minimizer found is the one with the
//! smallest norm.

use descent_core::{Gradient, LeastSquares, Objective, Point};

use crate::{
    Counted, OptimizationResult,
    steepest_descent::{self, Config, Error},
};

/// Finds a minimizer of `‖Ax − b‖²`, starting from `x = 0`.
///
/// The analytic gradient of the problem is used, so no finite differences
/// are taken.
///
/// # Errors
///
/// See [`steepest_descent::run`].
pub fn solve_minimum(problem: &LeastSquares, config: &Config) -> Result<OptimizationResult, Error> {
    let counted = Counted::with_gradient(
        |x: &Point| problem.value(x),
        |x: &Point| problem.gradient(x),
    );
    steepest_descent::run(&counted, &Point::zeros(problem.dimension()), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    use crate::line_search::golden_section;
    use crate::steepest_descent::{LineSearch, StopCriterion};

    /// Locates line minima far more precisely than the gradient tolerance.
    fn precise_config(tol: f64) -> Config {
        let precise = golden_section::Config::new(1e-10).expect("valid precision");
        Config::new(
            LineSearch::GoldenSection(precise),
            StopCriterion::JacNorm,
            tol,
            4096,
        )
        .expect("valid config")
    }

    #[test]
    fn solves_determined_system() {
        let problem =
            LeastSquares::new(array![[2.0, 1.0], [1.0, 3.0]], array![1.0, 2.0]).expect("valid");

        let result = solve_minimum(&problem, &precise_config(1e-8)).expect("should converge");

        assert!(result.success);
        assert_relative_eq!(result.x[0], 0.2, epsilon = 1e-7);
        assert_relative_eq!(result.x[1], 0.6, epsilon = 1e-7);
        assert_relative_eq!(problem.value(&result.x).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn solves_overdetermined_system() {
        let problem = LeastSquares::new(
            array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
            array![1.0, 1.0, 0.0],
        )
        .expect("valid");

        // With a nonzero minimum, rounding in f limits the attainable
        // gradient norm, so the tolerance is looser here.
        let result = solve_minimum(&problem, &precise_config(1e-6)).expect("should converge");

        assert!(result.success);
        assert_relative_eq!(result.x[0], 1.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(result.x[1], 1.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(
            problem.value(&result.x).unwrap(),
            4.0 / 3.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn underdetermined_system_gives_minimum_norm_solution() {
        let problem = LeastSquares::new(array![[1.0, 2.0]], array![6.0]).expect("valid");

        let result = solve_minimum(&problem, &precise_config(1e-8)).expect("should converge");

        assert!(result.success);
        assert_relative_eq!(result.x[0], 1.2, epsilon = 1e-7);
        assert_relative_eq!(result.x[1], 2.4, epsilon = 1e-7);
    }

    #[test]
    fn uses_the_analytic_gradient() {
        let problem = LeastSquares::new(array![[1.0, 2.0]], array![6.0]).expect("valid");

        let result = solve_minimum(&problem, &precise_config(1e-8)).expect("should converge");

        // Without finite differences every objective call comes from a line
        // search, so a single search keeps nfev small.
        assert_eq!(result.niter, 1);
        assert_eq!(result.njev, 3);
        assert!(result.nfev < 100);
    }
}
