//! Candidate subset generation.
//!
//! Full enumeration visits `2^n - 1` subsets. That cost is accepted for the
//! intended input sizes (tens of segments); larger inputs should use a
//! bounded [`SubsetSource`] or an evaluation budget.
//!
//! # Key Types
//!
//! - [`Combinations`]: lazy size-then-lexicographic index subsets
//! - [`SubsetSource`]: strategy trait consumed by the pipeline
//! - [`Exhaustive`], [`SizeBounded`]: built-in sources

mod combinations;
mod source;

pub use combinations::{subset_count, Combinations};
pub use source::{Exhaustive, SizeBounded, SubsetSource, MAX_EXHAUSTIVE_SEGMENTS};
