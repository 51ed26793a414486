mod least_squares;

pub use least_squares::LeastSquares;
