//! Length and density constraints.

use super::aggregate::{density_per_100, Aggregate};
use crate::error::CutError;

/// Constraints a subset must meet to be feasible.
///
/// # Examples
///
/// ```
/// use u_cutplan::evaluate::Constraints;
///
/// let c = Constraints::new(1.0, 20.0, 20.0);
/// assert!(c.is_feasible(20, 3.0));   // 15.0 per 100
/// assert!(!c.is_feasible(10, 2.0));  // too short
/// assert!(!c.is_feasible(30, 9.0));  // 30.0 per 100
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    /// Absolute minimum total length.
    pub min_length_floor: f64,
    /// Length the order requires.
    pub required_length: f64,
    /// Ceiling on penalty points per 100 units of length.
    pub max_density: f64,
}

impl Constraints {
    /// Creates a constraint set.
    pub fn new(min_length_floor: f64, required_length: f64, max_density: f64) -> Self {
        Self {
            min_length_floor,
            required_length,
            max_density,
        }
    }

    /// Rejects negative or NaN values.
    pub fn validate(&self) -> Result<(), CutError> {
        check_non_negative("min_length_floor", self.min_length_floor)?;
        check_non_negative("required_length", self.required_length)?;
        check_non_negative("max_density", self.max_density)?;
        Ok(())
    }

    /// The effective length lower bound, `max(min_length_floor, required_length)`.
    pub fn min_total_length(&self) -> f64 {
        self.min_length_floor.max(self.required_length)
    }

    /// Applies both length bounds and the density ceiling.
    ///
    /// `total_length` is at least 1 for any non-empty subset of validated
    /// segments, so the division never sees zero.
    pub fn is_feasible(&self, total_length: u64, total_penalty: f64) -> bool {
        let length = total_length as f64;
        length >= self.min_length_floor
            && length >= self.required_length
            && density_per_100(total_length, total_penalty) <= self.max_density
    }

    /// [`is_feasible`](Self::is_feasible) over an [`Aggregate`].
    pub fn admits(&self, aggregate: &Aggregate) -> bool {
        self.is_feasible(aggregate.total_length, aggregate.total_penalty)
    }
}

/// Free-function form of [`Constraints::is_feasible`].
pub fn is_feasible(total_length: u64, total_penalty: f64, constraints: &Constraints) -> bool {
    constraints.is_feasible(total_length, total_penalty)
}

pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<(), CutError> {
    if value.is_nan() || value < 0.0 {
        return Err(CutError::parameter(name, value));
    }
    Ok(())
}
