//! Cut planning pipeline.
//!
//! Chains validation, pre-filtering, subset enumeration, aggregation,
//! feasibility and ranking into one call.
//!
//! # Key Types
//!
//! - [`CutConfig`]: constraints and optional search extensions
//! - [`CutRunner`]: executes the pipeline
//! - [`RankedResult`]: feasible subsets best first, plus [`RunStats`]
//! - [`Solution`]: one feasible subset with its metrics
//!
//! # Examples
//!
//! ```
//! use u_cutplan::plan::{CutConfig, CutRunner};
//! use u_cutplan::segment::Segment;
//!
//! let segments = vec![
//!     Segment::new("A", 1, 10, 2.0),
//!     Segment::new("B", 1, 30, 3.0),
//! ];
//! let result = CutRunner::run(&segments, &CutConfig::new(1.0, 20.0, 20.0)).unwrap();
//! let best = result.best().unwrap();
//! assert_eq!(best.total_length, 30);
//! assert!((best.density_per_100 - 10.0).abs() < 1e-9);
//! ```

mod config;
mod result;
mod runner;

pub use config::CutConfig;
pub use result::{RankedResult, RunStats, Solution};
pub use runner::{CutRunner, LARGE_INPUT_WARNING};
