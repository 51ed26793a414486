use ndarray::{Array1, Array2};

use crate::{Gradient, Objective, Point, ShapeError, check_dimension};

/// The linear least-squares objective `‖Ax − b‖²`.
///
/// `A` is an `m × n` matrix and `b` has `m` entries, so points have `n`
/// entries. The problem is an ordinary [`Objective`] with an analytic
/// [`Gradient`], `2Aᵀ(Ax − b)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquares {
    a: Array2<f64>,
    b: Array1<f64>,
}

impl LeastSquares {
    /// Creates a least-squares problem from `A` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Empty`] if `A` has no rows or no columns, or
    /// [`ShapeError::Mismatch`] if `b` does not have one entry per row of `A`.
    pub fn new(a: Array2<f64>, b: Array1<f64>) -> Result<Self, ShapeError> {
        if a.nrows() == 0 || a.ncols() == 0 {
            return Err(ShapeError::Empty);
        }
        check_dimension(&b, a.nrows())?;
        Ok(Self { a, b })
    }

    /// Returns the matrix `A`.
    #[must_use]
    pub fn a(&self) -> &Array2<f64> {
        &self.a
    }

    /// Returns the vector `b`.
    #[must_use]
    pub fn b(&self) -> &Array1<f64> {
        &self.b
    }

    /// Returns the number of unknowns, the number of columns of `A`.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.a.ncols()
    }

    /// Returns the residual vector `Ax − b`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if `x` does not have one entry per column of `A`.
    pub fn residual(&self, x: &Point) -> Result<Array1<f64>, ShapeError> {
        check_dimension(x, self.dimension())?;
        Ok(self.a.dot(x) - &self.b)
    }
}

impl Objective for LeastSquares {
    type Error = ShapeError;

    fn value(&self, x: &Point) -> Result<f64, ShapeError> {
        let r = self.residual(x)?;
        Ok(r.dot(&r))
    }
}

impl Gradient for LeastSquares {
    type Error = ShapeError;

    fn gradient(&self, x: &Point) -> Result<Point, ShapeError> {
        let r = self.residual(x)?;
        Ok(self.a.t().dot(&r) * 2.0)
    }
}
