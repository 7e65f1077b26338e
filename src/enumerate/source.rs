//! Subset sources: the replaceable enumeration strategy.

use super::combinations::Combinations;
use crate::error::CutError;

/// Largest segment count the exhaustive source accepts.
///
/// Keeps `2^n - 1` and every evaluation counter inside a `u64`.
pub const MAX_EXHAUSTIVE_SEGMENTS: usize = 63;

/// Produces the candidate subsets scored by the pipeline.
///
/// A subset is a strictly increasing list of indices into the (filtered)
/// segment sequence. Aggregation, feasibility and ranking only see these
/// indices, so a bounded or branch-and-bound search can replace full
/// enumeration without touching them.
///
/// Ties in the ranking fall back to the order in which a source emits
/// subsets, so a source must be deterministic for a given `n`.
///
/// # Examples
///
/// ```
/// use u_cutplan::enumerate::{Combinations, SubsetSource};
///
/// /// Only single segments.
/// struct Singles;
///
/// impl SubsetSource for Singles {
///     type Iter = Combinations;
///     fn name(&self) -> &str { "singles" }
///     fn subsets(&self, n: usize) -> Combinations { Combinations::with_sizes(n, 1, 1) }
/// }
///
/// assert_eq!(Singles.subsets(4).count(), 4);
/// ```
pub trait SubsetSource {
    /// Iterator returned by [`subsets`](Self::subsets).
    type Iter: Iterator<Item = Vec<usize>>;

    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fresh enumeration over subsets of `0..n`.
    fn subsets(&self, n: usize) -> Self::Iter;

    /// Rejects inputs the source cannot handle. Called before enumeration.
    fn validate(&self, _n: usize) -> Result<(), CutError> {
        Ok(())
    }
}

/// Every non-empty subset, `2^n - 1` in total.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

impl SubsetSource for Exhaustive {
    type Iter = Combinations;

    fn name(&self) -> &str {
        "exhaustive"
    }

    fn subsets(&self, n: usize) -> Combinations {
        Combinations::new(n)
    }

    fn validate(&self, n: usize) -> Result<(), CutError> {
        if n > MAX_EXHAUSTIVE_SEGMENTS {
            return Err(CutError::TooManySegments {
                count: n,
                limit: MAX_EXHAUSTIVE_SEGMENTS,
            });
        }
        Ok(())
    }
}

/// Subsets with a size in `min_size..=max_size`, i.e. a bounded number of
/// cuts. Enumeration order matches [`Exhaustive`] restricted to those sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounded {
    /// Fewest segments per subset (at least 1).
    pub min_size: usize,
    /// Most segments per subset.
    pub max_size: usize,
}

impl SizeBounded {
    /// Creates a size window.
    pub fn new(min_size: usize, max_size: usize) -> Self {
        Self { min_size, max_size }
    }

    /// At most `max_size` segments.
    pub fn at_most(max_size: usize) -> Self {
        Self::new(1, max_size)
    }
}

impl SubsetSource for SizeBounded {
    type Iter = Combinations;

    fn name(&self) -> &str {
        "size-bounded"
    }

    fn subsets(&self, n: usize) -> Combinations {
        Combinations::with_sizes(n, self.min_size, self.max_size)
    }

    fn validate(&self, _n: usize) -> Result<(), CutError> {
        if self.min_size == 0 {
            return Err(CutError::parameter("min_size", self.min_size));
        }
        if self.max_size < self.min_size {
            return Err(CutError::parameter(
                "max_size",
                format!("{} < min_size {}", self.max_size, self.min_size),
            ));
        }
        Ok(())
    }
}
