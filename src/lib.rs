//! Defect-aware roll segment selection.
//!
//! Given defect-annotated segments of one or more material rolls, finds the
//! subsets that reach a required total length while keeping penalty points
//! per 100 units of length under a ceiling, ranked lowest density first.
//!
//! - **Segments** ([`segment`]): records, validation, density pre-filter.
//! - **Enumeration** ([`enumerate`]): lazy subset generation behind the
//!   [`SubsetSource`](enumerate::SubsetSource) strategy trait.
//! - **Evaluation** ([`evaluate`]): totals and the feasibility test.
//! - **Ranking** ([`rank`]): stable density ordering with optional
//!   tie-breakers.
//! - **Planning** ([`plan`]): the [`CutRunner`](plan::CutRunner) pipeline,
//!   its configuration and the ranked result.
//! - **Reporting** ([`report`]): text output and interval layouts.
//!
//! # Complexity
//!
//! Exhaustive enumeration visits `2^n - 1` subsets for `n` segments. This
//! is intended for tens of segments. Use the pre-filter, a size-bounded
//! source or an evaluation budget for anything larger.
//!
//! # Example
//!
//! ```
//! use u_cutplan::fixtures::sample_rolls;
//! use u_cutplan::plan::{CutConfig, CutRunner};
//!
//! let config = CutConfig::new(1.0, 10.0, 65.0).with_density_threshold(1.0);
//! let result = CutRunner::run(&sample_rolls(), &config).unwrap();
//! let best = result.best().unwrap();
//! assert_eq!(best.total_length, 10);
//! assert!((best.density_per_100 - 60.0).abs() < 1e-9);
//! ```

pub mod enumerate;
pub mod error;
pub mod evaluate;
pub mod fixtures;
pub mod plan;
pub mod rank;
pub mod report;
pub mod segment;

pub use error::{CutError, CutResult};
