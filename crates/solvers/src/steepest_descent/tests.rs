use std::convert::Infallible;

use approx::assert_relative_eq;
use descent_core::{Point, ShapeError};
use ndarray::{Array1, array};

use crate::{
    Counted, Status,
    line_search::{self, backtracking, golden_section},
};

use super::{
    Config, Error, LineSearch, MAX_ITERS_INFO, StopCriterion, minimize, minimize_with_gradient,
    run,
};

/// f(x) = (x - 4)², minimum at x = 4.
fn shifted_square(x: &Point) -> Result<f64, Infallible> {
    Ok((x[0] - 4.0).powi(2))
}

fn shifted_square_jac(x: &Point) -> Result<Point, Infallible> {
    Ok(array![2.0 * (x[0] - 4.0)])
}

/// f(x) = ½(x₀² + γx₁²), whose level sets have condition number γ.
fn quadratic(gamma: f64) -> impl Fn(&Point) -> Result<f64, Infallible> {
    move |x: &Point| Ok(0.5 * (x[0] * x[0] + gamma * x[1] * x[1]))
}

fn quadratic_jac(gamma: f64) -> impl Fn(&Point) -> Result<Point, Infallible> {
    move |x: &Point| Ok(array![x[0], gamma * x[1]])
}

fn backtracking_config(max_iters: usize) -> Config {
    Config::new(
        LineSearch::Backtracking(backtracking::Config::default()),
        StopCriterion::JacNorm,
        1e-6,
        max_iters,
    )
    .expect("valid config")
}

#[test]
fn minimizes_shifted_square_with_numerical_gradient() {
    let result = minimize(shifted_square, &array![0.0], &Config::default())
        .expect("should converge");

    assert!(result.success);
    assert_eq!(result.status, Status::Converged);
    assert_relative_eq!(result.x[0], 4.0, epsilon = 1e-6);
    assert!(result.jac.expect("jac is reported")[0].abs() < 1e-6);
    assert!(result.niter >= 1);
    assert_eq!(result.info, None);
    assert_eq!(result.solution_path, None);

    // Every gradient costs two objective evaluations in one dimension.
    assert!(result.nfev >= 2 * result.njev);
    assert_eq!(result.nhev, 0);
}

#[test]
fn minimizes_ill_conditioned_quadratic() {
    // Line minima must be located well inside the gradient tolerance once
    // the curvature reaches γ.
    let precise = golden_section::Config::new(1e-9).expect("valid precision");
    let config = Config::new(
        LineSearch::GoldenSection(precise),
        StopCriterion::JacNorm,
        1e-6,
        1024,
    )
    .expect("valid config");

    for gamma in [2.0, 10.0] {
        let x0 = array![gamma, 1.0];

        let result = minimize_with_gradient(quadratic(gamma), quadratic_jac(gamma), &x0, &config)
            .expect("should converge");

        assert!(result.success);
        assert!(result.x.iter().all(|xi| xi.abs() < 1e-6));
    }
}

#[test]
fn stationary_start_needs_no_iterations() {
    let counted = Counted::with_gradient(shifted_square, shifted_square_jac);
    let config = Config::new(LineSearch::default(), StopCriterion::JacNorm, 1e-6, 0)
        .expect("valid config");

    let result = run(&counted, &array![4.0], &config).expect("already optimal");

    assert!(result.success);
    assert_eq!(result.niter, 0);
    assert_eq!(result.x, array![4.0]);
    // The start gradient, then the reported one.
    assert_eq!((result.nfev, result.njev, result.nhev), (0, 2, 0));
}

#[test]
fn backtracking_counts_are_exact() {
    let result = minimize_with_gradient(
        shifted_square,
        shifted_square_jac,
        &array![0.0],
        &backtracking_config(100),
    )
    .expect("should converge");

    // Every step is t = 0.64, which scales the error x - 4 by -0.28.
    assert!(result.success);
    assert_eq!(result.niter, 13);
    assert_relative_eq!(result.x[0], 4.0, epsilon = 5e-7);

    // Per iteration: f(x) plus three trial steps.
    assert_eq!(result.nfev, 4 * 13);
    // The start gradient, one per iteration, and the reported one.
    assert_eq!(result.njev, 1 + 13 + 1);
}

#[test]
fn iteration_limit_is_a_soft_failure() {
    let result = minimize_with_gradient(
        shifted_square,
        shifted_square_jac,
        &array![0.0],
        &backtracking_config(2),
    )
    .expect("limit is not an error");

    assert!(!result.success);
    assert_eq!(result.status, Status::MaxIters);
    assert_eq!(result.niter, 2);
    assert_eq!(result.info.as_deref(), Some(MAX_ITERS_INFO));
    assert_relative_eq!(result.x[0], 4.0 - 4.0 * 0.28 * 0.28, epsilon = 1e-12);

    let jac = result.jac.expect("jac is reported");
    assert_relative_eq!(jac[0], 2.0 * (result.x[0] - 4.0), epsilon = 1e-12);
}

#[test]
fn zero_iteration_limit_returns_start() {
    let config = Config::new(LineSearch::default(), StopCriterion::JacNorm, 1e-6, 0)
        .expect("valid config");

    let result = minimize(shifted_square, &array![0.0], &config).expect("limit is not an error");

    assert!(!result.success);
    assert_eq!(result.niter, 0);
    assert_eq!(result.x, array![0.0]);
}

#[test]
fn records_every_iterate() {
    let x0 = array![0.0];
    let config = backtracking_config(100).save_path(true);

    let result = minimize_with_gradient(shifted_square, shifted_square_jac, &x0, &config)
        .expect("should converge");

    let path = result.solution_path.expect("path was requested");
    assert_eq!(path.len(), result.niter + 1);
    assert_eq!(path.first(), Some(&x0));
    assert_eq!(path.last(), Some(&result.x));
    assert_relative_eq!(path[1][0], 4.0 + 4.0 * 0.28, epsilon = 1e-12);
}

#[test]
fn surfaces_line_search_failures() {
    // Unbounded below, so no minimum can be bracketed.
    let f = |x: &Point| -> Result<f64, Infallible> { Ok(-x[0]) };
    let jac = |_: &Point| -> Result<Point, Infallible> { Ok(array![-1.0]) };

    let result = minimize_with_gradient(f, jac, &array![0.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::LineSearch {
            iter: 0,
            source: line_search::Error::Bracketing { .. }
        })
    ));
}

#[derive(Debug, thiserror::Error)]
#[error("gradient undefined")]
struct Undefined;

#[test]
fn surfaces_gradient_failures() {
    let jac = |_: &Point| -> Result<Point, Undefined> { Err(Undefined) };

    let result = minimize_with_gradient(shifted_square, jac, &array![0.0], &Config::default());

    let Err(Error::Gradient(source)) = result else {
        panic!("expected a gradient error");
    };
    assert!(source.downcast_ref::<Undefined>().is_some());
}

#[test]
fn rejects_bad_shapes() {
    let result = minimize(shifted_square, &Array1::zeros(0), &Config::default());
    assert!(matches!(result, Err(Error::Shape(ShapeError::Empty))));

    let jac = |_: &Point| -> Result<Point, Infallible> { Ok(array![1.0, 2.0]) };
    let result = minimize_with_gradient(shifted_square, jac, &array![0.0], &Config::default());
    assert!(matches!(
        result,
        Err(Error::Shape(ShapeError::Mismatch {
            expected: 1,
            found: 2
        }))
    ));
}
