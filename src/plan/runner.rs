//! Cut planning pipeline execution.
//!
//! # Pipeline
//!
//! 1. Validate the configuration and every segment (fail fast)
//! 2. Apply the density pre-filter, if configured
//! 3. Enumerate subsets from the [`SubsetSource`]
//! 4. Aggregate each subset and apply the feasibility filter
//! 5. Rank the feasible subsets
//!
//! A validation failure returns `Err` before any subset is generated.
//! Finding nothing feasible is a successful, empty [`RankedResult`].

use tracing::{debug, instrument, warn};

use super::config::CutConfig;
use super::result::{RankedResult, RunStats, Solution};
use crate::enumerate::{subset_count, Exhaustive, SubsetSource};
use crate::error::CutError;
use crate::evaluate::{aggregate, Constraints};
use crate::rank::Ranker;
use crate::segment::{retained_positions, Segment, SegmentRepository};

/// Inputs above this many segments log an enumeration-size warning.
pub const LARGE_INPUT_WARNING: usize = 24;

/// Validated input ready for enumeration.
struct Prepared {
    repo: SegmentRepository,
    /// Input positions of the segments that survived the pre-filter.
    considered: Vec<usize>,
    stats: RunStats,
}

/// Cut planning runner.
pub struct CutRunner;

impl CutRunner {
    /// Ranks every feasible subset of `segments`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_cutplan::plan::{CutConfig, CutRunner};
    /// use u_cutplan::segment::Segment;
    ///
    /// let segments = vec![
    ///     Segment::new("A", 1, 10, 2.0),
    ///     Segment::new("A", 11, 30, 3.0),
    /// ];
    /// let config = CutConfig::new(1.0, 20.0, 20.0);
    ///
    /// let result = CutRunner::run(&segments, &config).unwrap();
    /// assert_eq!(result.len(), 2);
    /// assert_eq!(result.best().unwrap().indices, vec![1]);
    /// ```
    pub fn run(segments: &[Segment], config: &CutConfig) -> Result<RankedResult, CutError> {
        Self::run_with_source(segments, config, &Exhaustive)
    }

    /// Ranks the feasible subsets produced by `source`.
    #[instrument(skip_all, fields(segments = segments.len(), source = source.name()))]
    pub fn run_with_source<S: SubsetSource>(
        segments: &[Segment],
        config: &CutConfig,
        source: &S,
    ) -> Result<RankedResult, CutError> {
        let Prepared {
            repo,
            considered,
            mut stats,
        } = prepare(segments, config, source)?;

        let ranker = Ranker::new().with_tie_breaker(config.tie_breaker);
        let mut solutions = Vec::new();

        scan(&repo, &considered, config, source, &mut stats, |solution| {
            match config.max_results {
                Some(limit) => {
                    ranker.insert_bounded(&mut solutions, solution, limit);
                }
                None => solutions.push(solution),
            }
        });

        // Bounded insertion keeps `solutions` ranked already.
        if config.max_results.is_none() {
            solutions = ranker.rank(solutions);
        }

        debug!(
            evaluated = stats.evaluated,
            feasible = stats.feasible,
            retained = solutions.len(),
            "ranking complete"
        );

        Ok(RankedResult::new(solutions, considered, stats))
    }

    /// Returns only the best solution, holding nothing but the running best
    /// in memory.
    ///
    /// Agrees with `run(..).best()` for the same configuration; returns
    /// [`CutError::NotFound`] when nothing is feasible.
    #[instrument(skip_all, fields(segments = segments.len()))]
    pub fn find_best(segments: &[Segment], config: &CutConfig) -> Result<Solution, CutError> {
        let source = Exhaustive;
        let Prepared {
            repo,
            considered,
            mut stats,
        } = prepare(segments, config, &source)?;

        let ranker = Ranker::new().with_tie_breaker(config.tie_breaker);
        let mut best: Option<Solution> = None;

        scan(&repo, &considered, config, &source, &mut stats, |solution| {
            let improves = best
                .as_ref()
                .map_or(true, |b| ranker.compare(&solution, b).is_lt());
            if improves {
                best = Some(solution);
            }
        });

        debug!(
            evaluated = stats.evaluated,
            feasible = stats.feasible,
            "best-only scan complete"
        );

        best.ok_or(CutError::NotFound)
    }
}

/// Validating and pre-filtering stages.
fn prepare<S: SubsetSource>(
    segments: &[Segment],
    config: &CutConfig,
    source: &S,
) -> Result<Prepared, CutError> {
    config.validate()?;
    let repo = SegmentRepository::new(segments.to_vec())?;

    let considered: Vec<usize> = match config.density_threshold {
        Some(threshold) => retained_positions(repo.as_slice(), threshold),
        None => (0..repo.len()).collect(),
    };
    let filtered_out = repo.len() - considered.len();
    if config.density_threshold.is_some() {
        debug!(
            kept = considered.len(),
            dropped = filtered_out,
            "density pre-filter applied"
        );
    }

    if config.stop_at_zero_density && !config.tie_breaker.favors_earlier_discovery() {
        debug!(
            tie_breaker = ?config.tie_breaker,
            "zero-density early exit disabled for this tie-breaker"
        );
    }

    let n = considered.len();
    source.validate(n)?;
    if n > LARGE_INPUT_WARNING {
        match subset_count(n) {
            Some(count) => warn!(n, count, "enumerating a large subset space"),
            None => warn!(n, "enumerating a subset space beyond u64"),
        }
    }

    let stats = RunStats {
        source: source.name().to_string(),
        input_segments: repo.len(),
        filtered_out,
        ..RunStats::default()
    };

    Ok(Prepared {
        repo,
        considered,
        stats,
    })
}

/// Generating, aggregating and feasibility stages. Feeds every feasible
/// subset to `sink` in discovery order.
fn scan<S, F>(
    repo: &SegmentRepository,
    considered: &[usize],
    config: &CutConfig,
    source: &S,
    stats: &mut RunStats,
    mut sink: F,
) where
    S: SubsetSource,
    F: FnMut(Solution),
{
    let constraints: Constraints = config.constraints();
    let all = repo.as_slice();
    let stop_at_zero =
        config.stop_at_zero_density && config.tie_breaker.favors_earlier_discovery();

    for subset in source.subsets(considered.len()) {
        if config.max_evaluations.is_some_and(|budget| stats.evaluated >= budget) {
            stats.budget_exhausted = true;
            warn!(evaluated = stats.evaluated, "evaluation budget exhausted");
            break;
        }
        let discovery = stats.evaluated;
        stats.evaluated += 1;

        let indices: Vec<usize> = subset.iter().map(|&i| considered[i]).collect();
        let totals = aggregate(indices.iter().map(|&i| &all[i]));
        if !constraints.admits(&totals) {
            continue;
        }
        stats.feasible += 1;

        let density = totals.density_per_100();
        sink(Solution {
            segments: indices.iter().map(|&i| all[i].clone()).collect(),
            indices,
            total_length: totals.total_length,
            total_penalty: totals.total_penalty,
            density_per_100: density,
            discovery,
        });

        if stop_at_zero && density == 0.0 {
            stats.stopped_early = true;
            debug!(discovery, "zero-density solution found, stopping");
            break;
        }
    }
}
