//! Cut planning configuration.

use crate::error::CutError;
use crate::evaluate::{check_non_negative, Constraints};
use crate::rank::TieBreaker;

/// Configuration for a planning run.
///
/// The three constraint fields are required by every run; the rest are
/// optional extensions that trade completeness for speed or memory.
///
/// # Defaults
///
/// ```
/// use u_cutplan::plan::CutConfig;
///
/// let config = CutConfig::default();
/// assert_eq!(config.min_length_floor, 20.0);
/// assert_eq!(config.required_length, 20.0);
/// assert_eq!(config.max_density, 39.0);
/// assert!(config.density_threshold.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_cutplan::plan::CutConfig;
/// use u_cutplan::rank::TieBreaker;
///
/// let config = CutConfig::new(1.0, 20.0, 35.0)
///     .with_density_threshold(1.0)
///     .with_tie_breaker(TieBreaker::FewerSegments)
///     .with_max_results(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CutConfig {
    /// Absolute minimum total length of a selection.
    pub min_length_floor: f64,

    /// Length the order requires.
    pub required_length: f64,

    /// Ceiling on penalty points per 100 units of length.
    pub max_density: f64,

    /// Drop segments whose own density (points per unit, not per 100)
    /// exceeds this value before enumeration.
    ///
    /// `None` disables the pre-filter (the default).
    pub density_threshold: Option<f64>,

    /// Secondary ranking key for equal densities.
    pub tie_breaker: TieBreaker,

    /// Keep only the best `k` solutions.
    ///
    /// Bounds memory by `k` plus the subset in flight. `None` keeps every
    /// feasible subset (the default).
    pub max_results: Option<usize>,

    /// Stop after evaluating this many subsets.
    ///
    /// The result is then the ranking of the subsets seen so far and
    /// [`RunStats::budget_exhausted`](super::RunStats::budget_exhausted)
    /// is set. `None` enumerates everything (the default).
    pub max_evaluations: Option<u64>,

    /// Stop at the first feasible subset with zero penalty.
    ///
    /// Only taken when the tie-breaker
    /// [favors earlier discovery](TieBreaker::favors_earlier_discovery), so
    /// the best solution is unchanged. Ignored under
    /// [`TieBreaker::LongerTotal`].
    pub stop_at_zero_density: bool,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            min_length_floor: 20.0,
            required_length: 20.0,
            max_density: 39.0,
            density_threshold: None,
            tie_breaker: TieBreaker::DiscoveryOrder,
            max_results: None,
            max_evaluations: None,
            stop_at_zero_density: false,
        }
    }
}

impl CutConfig {
    /// Creates a configuration with the given constraints and no extensions.
    pub fn new(min_length_floor: f64, required_length: f64, max_density: f64) -> Self {
        Self {
            min_length_floor,
            required_length,
            max_density,
            ..Self::default()
        }
    }

    /// Sets the minimum length floor.
    pub fn with_min_length_floor(mut self, floor: f64) -> Self {
        self.min_length_floor = floor;
        self
    }

    /// Sets the required length.
    pub fn with_required_length(mut self, length: f64) -> Self {
        self.required_length = length;
        self
    }

    /// Sets the density ceiling (points per 100 units).
    pub fn with_max_density(mut self, max_density: f64) -> Self {
        self.max_density = max_density;
        self
    }

    /// Enables the per-segment density pre-filter.
    pub fn with_density_threshold(mut self, threshold: f64) -> Self {
        self.density_threshold = Some(threshold);
        self
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Retains only the best `k` solutions.
    pub fn with_max_results(mut self, k: usize) -> Self {
        self.max_results = Some(k);
        self
    }

    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, n: u64) -> Self {
        self.max_evaluations = Some(n);
        self
    }

    /// Enables or disables the zero-density early exit.
    pub fn with_stop_at_zero_density(mut self, stop: bool) -> Self {
        self.stop_at_zero_density = stop;
        self
    }

    /// The feasibility constraints of this configuration.
    pub fn constraints(&self) -> Constraints {
        Constraints::new(self.min_length_floor, self.required_length, self.max_density)
    }

    /// Validates the configuration.
    ///
    /// Returns [`CutError::ParameterError`] naming the first bad field.
    pub fn validate(&self) -> Result<(), CutError> {
        self.constraints().validate()?;
        if let Some(threshold) = self.density_threshold {
            check_non_negative("density_threshold", threshold)?;
        }
        if self.max_results == Some(0) {
            return Err(CutError::parameter("max_results", 0));
        }
        if self.max_evaluations == Some(0) {
            return Err(CutError::parameter("max_evaluations", 0));
        }
        Ok(())
    }
}
