//! Ordering of feasible subsets.
//!
//! Solutions are ranked by `density_per_100`, lowest first. Equal densities
//! keep the order in which the subset source discovered them unless a
//! [`TieBreaker`] asks for something else; discovery order stays the final
//! fallback either way.

mod ranker;

pub use ranker::{Ranker, TieBreaker};
