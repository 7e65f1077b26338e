//! Ranked output of a planning run.

use crate::error::CutError;
use crate::segment::Segment;

/// One feasible subset with its metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Selected segments in input order.
    pub segments: Vec<Segment>,
    /// Positions of the selected segments in the caller's input.
    pub indices: Vec<usize>,
    /// Sum of segment lengths.
    pub total_length: u64,
    /// Sum of segment penalties.
    pub total_penalty: f64,
    /// Penalty points per 100 units of length.
    pub density_per_100: f64,
    /// Position of this subset in enumeration order (0-based).
    pub discovery: u64,
}

impl Solution {
    /// Number of segments, i.e. cuts needed.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

/// Counters describing one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Name of the subset source used.
    pub source: String,
    /// Segments supplied by the caller.
    pub input_segments: usize,
    /// Segments dropped by the pre-filter.
    pub filtered_out: usize,
    /// Subsets aggregated and checked.
    pub evaluated: u64,
    /// Subsets that passed the feasibility filter, including any not
    /// retained because of `max_results`.
    pub feasible: u64,
    /// Enumeration stopped at `max_evaluations`.
    pub budget_exhausted: bool,
    /// Enumeration stopped at a zero-density solution.
    pub stopped_early: bool,
}

impl RunStats {
    /// Segments that took part in enumeration.
    pub fn considered_segments(&self) -> usize {
        self.input_segments - self.filtered_out
    }
}

/// Feasible subsets ordered best first.
///
/// An empty ranking is a successful outcome; [`best`](Self::best) reports
/// it as [`CutError::NotFound`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedResult {
    solutions: Vec<Solution>,
    considered: Vec<usize>,
    stats: RunStats,
}

impl RankedResult {
    pub(crate) fn new(solutions: Vec<Solution>, considered: Vec<usize>, stats: RunStats) -> Self {
        Self {
            solutions,
            considered,
            stats,
        }
    }

    /// The top-ranked solution.
    pub fn best(&self) -> Result<&Solution, CutError> {
        self.solutions.first().ok_or(CutError::NotFound)
    }

    /// All retained solutions, best first.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Iterates best first.
    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    /// Number of retained solutions.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Whether no feasible subset was found.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Input positions of the segments that survived the pre-filter and
    /// took part in enumeration, ascending.
    pub fn considered(&self) -> &[usize] {
        &self.considered
    }

    /// Run counters.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Consumes the result, returning the solutions.
    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}
