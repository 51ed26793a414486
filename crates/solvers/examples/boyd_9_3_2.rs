//! Steepest descent on the examples of Boyd & Vandenberghe, §9.3.2.
//!
//! # Usage
//!
//! ```text
//! cargo run --example boyd_9_3_2 -- quadratic 10
//! cargo run --example boyd_9_3_2 -- nonquadratic backtracking
//! ```
//!
//! # Modes
//!
//! - **quadratic [γ]** — minimize ½(x₀² + γx₁²) from (γ, 1). Larger γ makes
//!   the level sets more elongated and the descent zigzag for longer.
//! - **nonquadratic [method]** — minimize
//!   e^(x₀+3x₁−0.1) + e^(x₀−3x₁−0.1) + e^(−x₀−0.1) from (−1, 0.5) with
//!   `golden-section` (default) or `backtracking`.

use std::{convert::Infallible, error::Error};

use descent_core::Point;
use descent_solvers::steepest_descent::{self, Config, DEFAULT_MAX_ITERS, DEFAULT_TOL};
use ndarray::array;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "quadratic".into());
    let config = Config::default().save_path(true);

    let result = match mode.as_str() {
        "quadratic" => {
            let gamma: f64 = args.next().as_deref().unwrap_or("10").parse()?;
            let f = move |x: &Point| -> Result<f64, Infallible> {
                Ok(0.5 * (x[0] * x[0] + gamma * x[1] * x[1]))
            };
            let jac = move |x: &Point| -> Result<Point, Infallible> { Ok(array![x[0], gamma * x[1]]) };
            steepest_descent::minimize_with_gradient(f, jac, &array![gamma, 1.0], &config)?
        }
        "nonquadratic" => {
            let method = args.next().unwrap_or_else(|| "golden-section".into());
            let config = Config::from_names(&method, "jac-norm", DEFAULT_TOL, DEFAULT_MAX_ITERS)?
                .save_path(true);
            let f = |x: &Point| -> Result<f64, Infallible> {
                Ok((x[0] + 3.0 * x[1] - 0.1).exp()
                    + (x[0] - 3.0 * x[1] - 0.1).exp()
                    + (-x[0] - 0.1).exp())
            };
            steepest_descent::minimize(f, &array![-1.0, 0.5], &config)?
        }
        other => return Err(format!("unknown mode: {other}").into()),
    };

    println!("{result}");
    if let Some(path) = &result.solution_path {
        println!("\niterates:");
        for (i, x) in path.iter().enumerate() {
            println!("{i:>4}  {x}");
        }
    }
    Ok(())
}
