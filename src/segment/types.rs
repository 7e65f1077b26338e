//! Segment record and defect severity.

use std::fmt;
use std::str::FromStr;

use crate::error::CutError;

/// Categorical defect severity.
///
/// Informational only: scoring uses [`Segment::penalty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Major defect.
    Major,
    /// Minor defect.
    Minor,
    /// Not recorded.
    #[default]
    Unspecified,
}

impl Severity {
    /// Upper-case label as used in inspection sheets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Major => "MAJOR",
            Severity::Minor => "MINOR",
            Severity::Unspecified => "UNSPECIFIED",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MAJOR" => Ok(Severity::Major),
            "MINOR" => Ok(Severity::Minor),
            "" | "UNSPECIFIED" => Ok(Severity::Unspecified),
            _ => Err(CutError::UnknownSeverity(s.to_string())),
        }
    }
}

/// A contiguous annotated section of one roll.
///
/// `start` and `end` are inclusive offsets, so a segment covering a single
/// meter has `start == end` and length 1.
///
/// # Examples
///
/// ```
/// use u_cutplan::segment::{Segment, Severity};
///
/// let seg = Segment::new("A", 11, 30, 3.0)
///     .with_defect("SLUB", Severity::Major);
/// assert_eq!(seg.length(), 20);
/// assert!((seg.density() - 0.15).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Source roll identifier.
    pub roll_id: String,
    /// First offset covered (inclusive).
    pub start: i64,
    /// Last offset covered (inclusive).
    pub end: i64,
    /// Defect label.
    pub defect_name: String,
    /// Defect category.
    pub defect_severity: Severity,
    /// Penalty points attributed to the defect.
    pub penalty: f64,
}

impl Segment {
    /// Creates a segment with no defect annotation.
    pub fn new(roll_id: impl Into<String>, start: i64, end: i64, penalty: f64) -> Self {
        Self {
            roll_id: roll_id.into(),
            start,
            end,
            defect_name: String::new(),
            defect_severity: Severity::Unspecified,
            penalty,
        }
    }

    /// Attaches a defect label and severity.
    pub fn with_defect(mut self, name: impl Into<String>, severity: Severity) -> Self {
        self.defect_name = name.into();
        self.defect_severity = severity;
        self
    }

    /// Inclusive length `end - start + 1`.
    ///
    /// Returns 0 for a reversed range and saturates at `u64::MAX` for the
    /// full `i64` span; neither passes [`Segment::validate`].
    pub fn length(&self) -> u64 {
        if self.end < self.start {
            return 0;
        }
        self.end.abs_diff(self.start).saturating_add(1)
    }

    /// Penalty per unit of length.
    pub fn density(&self) -> f64 {
        self.penalty / self.length() as f64
    }

    /// Checks the segment invariants.
    ///
    /// `index` is only used to locate the segment in the error.
    pub fn validate(&self, index: usize) -> Result<(), CutError> {
        if self.end < self.start {
            return Err(CutError::invalid_segment(
                index,
                format!("end {} is before start {}", self.end, self.start),
            ));
        }
        if self.end.abs_diff(self.start) == u64::MAX {
            return Err(CutError::invalid_segment(
                index,
                format!("span {}..={} does not fit in u64", self.start, self.end),
            ));
        }
        if !self.penalty.is_finite() {
            return Err(CutError::invalid_segment(
                index,
                format!("penalty {} is not finite", self.penalty),
            ));
        }
        if self.penalty < 0.0 {
            return Err(CutError::invalid_segment(
                index,
                format!("penalty {} is negative", self.penalty),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Roll {} [{}..={}] {} ({}) points={}",
            self.roll_id, self.start, self.end, self.defect_name, self.defect_severity, self.penalty
        )
    }
}
