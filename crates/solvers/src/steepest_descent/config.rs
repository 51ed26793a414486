use std::{fmt, str::FromStr};

use descent_core::Point;
use thiserror::Error;

use crate::{
    line_search::{backtracking, golden_section},
    vector::norm,
};

/// Default stopping tolerance.
pub const DEFAULT_TOL: f64 = 1e-6;

/// Default maximum number of iterations.
pub const DEFAULT_MAX_ITERS: usize = 1024;

/// Errors that can occur when building a steepest-descent config.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("no such search method: \"{0}\"")]
    UnknownLineSearch(String),

    #[error("no such stopping criterion: \"{0}\"")]
    UnknownStopCriterion(String),

    #[error("tolerance must be finite and positive, got {0}")]
    Tolerance(f64),
}

/// The line search run along the negative gradient on every iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSearch {
    GoldenSection(golden_section::Config),
    Backtracking(backtracking::Config),
}

impl LineSearch {
    /// Returns the method's name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::GoldenSection(_) => "golden-section",
            Self::Backtracking(_) => "backtracking",
        }
    }
}

impl Default for LineSearch {
    fn default() -> Self {
        Self::GoldenSection(golden_section::Config::default())
    }
}

impl FromStr for LineSearch {
    type Err = ConfigError;

    /// Parses a method name into that method with default parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "golden-section" => Ok(Self::GoldenSection(golden_section::Config::default())),
            "backtracking" => Ok(Self::Backtracking(backtracking::Config::default())),
            _ => Err(ConfigError::UnknownLineSearch(s.to_owned())),
        }
    }
}

impl fmt::Display for LineSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// When the descent stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopCriterion {
    /// Stop once `‖∇f(x)‖₂ < tol`.
    #[default]
    JacNorm,
}

impl StopCriterion {
    /// Returns the criterion's name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::JacNorm => "jac-norm",
        }
    }

    /// Returns `true` if the criterion holds for the gradient `jac`.
    #[must_use]
    pub fn is_met(&self, jac: &Point, tol: f64) -> bool {
        match self {
            Self::JacNorm => norm(jac) < tol,
        }
    }
}

impl FromStr for StopCriterion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jac-norm" => Ok(Self::JacNorm),
            _ => Err(ConfigError::UnknownStopCriterion(s.to_owned())),
        }
    }
}

impl fmt::Display for StopCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for steepest descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    line_search: LineSearch,
    stop: StopCriterion,
    tol: f64,
    max_iters: usize,
    save_path: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_search: LineSearch::default(),
            stop: StopCriterion::default(),
            tol: DEFAULT_TOL,
            max_iters: DEFAULT_MAX_ITERS,
            save_path: false,
        }
    }
}

impl Config {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if `tol` is not finite and positive.
    pub fn new(
        line_search: LineSearch,
        stop: StopCriterion,
        tol: f64,
        max_iters: usize,
    ) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tolerance(tol));
        }
        Ok(Self {
            line_search,
            stop,
            tol,
            max_iters,
            save_path: false,
        })
    }

    /// Creates a config from a line-search name and a stopping-criterion name.
    ///
    /// Recognized names are `"golden-section"` and `"backtracking"` for the
    /// line search, and `"jac-norm"` for the criterion.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either name is unknown or `tol` is invalid.
    pub fn from_names(
        line_search: &str,
        stop: &str,
        tol: f64,
        max_iters: usize,
    ) -> Result<Self, ConfigError> {
        Self::new(line_search.parse()?, stop.parse()?, tol, max_iters)
    }

    /// Sets whether every iterate is recorded in the result.
    #[must_use]
    pub fn save_path(mut self, save_path: bool) -> Self {
        self.save_path = save_path;
        self
    }

    /// Returns the line search.
    #[must_use]
    pub fn line_search(&self) -> &LineSearch {
        &self.line_search
    }

    /// Returns the stopping criterion.
    #[must_use]
    pub fn stop(&self) -> StopCriterion {
        self.stop
    }

    /// Returns the stopping tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns whether iterates are recorded.
    #[must_use]
    pub fn saves_path(&self) -> bool {
        self.save_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.line_search().name(), "golden-section");
        assert_eq!(config.stop(), StopCriterion::JacNorm);
        assert_eq!(config.tol(), DEFAULT_TOL);
        assert_eq!(config.max_iters(), DEFAULT_MAX_ITERS);
        assert!(!config.saves_path());
    }

    #[test]
    fn parses_known_names() {
        let config = Config::from_names("backtracking", "jac-norm", 1e-8, 50)
            .expect("known names")
            .save_path(true);

        assert_eq!(
            *config.line_search(),
            LineSearch::Backtracking(backtracking::Config::default())
        );
        assert_eq!(config.tol(), 1e-8);
        assert_eq!(config.max_iters(), 50);
        assert!(config.saves_path());

        assert_eq!(
            Config::from_names("golden-section", "jac-norm", DEFAULT_TOL, DEFAULT_MAX_ITERS),
            Ok(Config::default())
        );
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            Config::from_names("newton", "jac-norm", 1e-6, 10),
            Err(ConfigError::UnknownLineSearch("newton".into()))
        );
        assert_eq!(
            Config::from_names("golden-section", "bogus", 1e-6, 10),
            Err(ConfigError::UnknownStopCriterion("bogus".into()))
        );
    }

    #[test]
    fn rejects_invalid_tolerance() {
        let ls = LineSearch::default();
        let stop = StopCriterion::JacNorm;

        assert_eq!(
            Config::new(ls, stop, 0.0, 10),
            Err(ConfigError::Tolerance(0.0))
        );
        assert!(Config::new(ls, stop, -1.0, 10).is_err());
        assert!(Config::new(ls, stop, f64::NAN, 10).is_err());
    }

    #[test]
    fn names_round_trip_through_display() {
        for name in ["golden-section", "backtracking"] {
            let ls: LineSearch = name.parse().expect("known name");
            assert_eq!(ls.to_string(), name);
        }
        assert_eq!(StopCriterion::JacNorm.to_string(), "jac-norm");
    }

    #[test]
    fn jac_norm_is_strict() {
        let stop = StopCriterion::JacNorm;

        assert!(stop.is_met(&array![3e-7, 4e-7], 1e-6));
        assert!(!stop.is_met(&array![6e-7, 9e-7], 1e-6));
        assert!(!stop.is_met(&array![1.0], 1e-6));
    }
}
