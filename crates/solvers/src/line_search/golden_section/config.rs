use crate::line_search::ParameterError;

/// Default precision: the largest bracket width, measured in x, at which the
/// search stops.
pub const DEFAULT_PRECISION: f64 = 1e-6;

/// Configuration for the golden-section line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    precision: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    /// Creates a config with a validated precision.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Precision`] if `precision` is not finite and
    /// positive.
    pub fn new(precision: f64) -> Result<Self, ParameterError> {
        if !precision.is_finite() || precision <= 0.0 {
            return Err(ParameterError::Precision(precision));
        }
        Ok(Self { precision })
    }

    /// Returns the bracket width, measured in x, at which the search stops.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }
}
