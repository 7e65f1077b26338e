//! Error types for cut planning.

use thiserror::Error;

/// Errors raised while validating input or reading results.
///
/// An empty ranking is not an error; only [`CutError::NotFound`] from
/// [`RankedResult::best`](crate::plan::RankedResult::best) signals it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CutError {
    /// A segment failed validation.
    #[error("invalid segment #{index}: {reason}")]
    InvalidSegment {
        /// Position of the segment in the input sequence.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// A configuration value is out of range.
    #[error("invalid parameter `{name}`: {value}")]
    ParameterError {
        /// Parameter name.
        name: &'static str,
        /// Offending value, rendered.
        value: String,
    },

    /// Too many segments for exhaustive enumeration.
    #[error("{count} segments exceed the enumeration limit of {limit}")]
    TooManySegments {
        /// Number of segments after pre-filtering.
        count: usize,
        /// Largest supported count.
        limit: usize,
    },

    /// A severity label could not be parsed.
    #[error("unknown defect severity: {0:?}")]
    UnknownSeverity(String),

    /// No feasible subset exists.
    #[error("no feasible subset found")]
    NotFound,
}

impl CutError {
    /// Create an InvalidSegment error.
    pub fn invalid_segment(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidSegment {
            index,
            reason: reason.into(),
        }
    }

    /// Create a ParameterError.
    pub fn parameter(name: &'static str, value: impl ToString) -> Self {
        Self::ParameterError {
            name,
            value: value.to_string(),
        }
    }
}

/// Result alias used across the crate.
pub type CutResult<T> = Result<T, CutError>;
