//! Subset aggregation and feasibility.

mod aggregate;
mod feasibility;

pub use aggregate::{aggregate, aggregate_indices, density_per_100, Aggregate};
pub use feasibility::{is_feasible, Constraints};

pub(crate) use feasibility::check_non_negative;
