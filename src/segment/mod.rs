//! Segment records, the validated repository and the density pre-filter.

mod filter;
mod repository;
mod types;

pub use filter::{filter_by_density, retained_positions};
pub use repository::{validate, SegmentRepository};
pub use types::{Segment, Severity};
