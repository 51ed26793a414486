use ndarray::{Array1, Array2};

/// A point in Rⁿ, stored as a column vector.
pub type Point = Array1<f64>;

/// A square matrix, such as a Hessian.
pub type Matrix = Array2<f64>;

/// A scalar function to be minimized.
///
/// The function may be undefined on part of its domain. Returning an error
/// there is enough: solvers pass it back to the caller untouched.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function is undefined at `x`.
    fn value(&self, x: &Point) -> Result<f64, Self::Error>;
}

/// The gradient ∇f of a scalar function.
pub trait Gradient {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the gradient at `x`.
    ///
    /// The returned vector has the same length as `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the gradient cannot be computed at `x`.
    fn gradient(&self, x: &Point) -> Result<Point, Self::Error>;
}

/// The Hessian ∇²f of a scalar function.
pub trait Hessian {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the Hessian at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Hessian cannot be computed at `x`.
    fn hessian(&self, x: &Point) -> Result<Matrix, Self::Error>;
}

impl<F, E> Objective for F
where
    F: Fn(&Point) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn value(&self, x: &Point) -> Result<f64, E> {
        self(x)
    }
}

impl<F, E> Gradient for F
where
    F: Fn(&Point) -> Result<Point, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn gradient(&self, x: &Point) -> Result<Point, E> {
        self(x)
    }
}

impl<F, E> Hessian for F
where
    F: Fn(&Point) -> Result<Matrix, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn hessian(&self, x: &Point) -> Result<Matrix, E> {
        self(x)
    }
}
