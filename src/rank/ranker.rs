//! Stable density ranking.

use std::cmp::Ordering;

use crate::plan::Solution;

/// Secondary key applied when two solutions have the same density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreaker {
    /// Keep discovery order (stable sort).
    #[default]
    DiscoveryOrder,

    /// Prefer the larger total length.
    LongerTotal,

    /// Prefer fewer segments, i.e. fewer cuts.
    FewerSegments,
}

impl TieBreaker {
    /// Whether, among equal densities, a subset discovered earlier never
    /// ranks behind one discovered later.
    ///
    /// Holds for sources that yield smaller subsets first, which every
    /// built-in source does. A longer total can come from a later, larger
    /// subset, so [`TieBreaker::LongerTotal`] does not qualify.
    pub fn favors_earlier_discovery(&self) -> bool {
        match self {
            TieBreaker::DiscoveryOrder | TieBreaker::FewerSegments => true,
            TieBreaker::LongerTotal => false,
        }
    }
}

/// Orders solutions by density ascending.
///
/// # Examples
///
/// ```ignore
/// let ranked = Ranker::new()
///     .with_tie_breaker(TieBreaker::FewerSegments)
///     .rank(feasible);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    tie_breaker: TieBreaker,
}

impl Ranker {
    /// Creates a ranker that breaks ties by discovery order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// The configured tie-breaker.
    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Compares two solutions. `Equal` means "keep relative order".
    pub fn compare(&self, a: &Solution, b: &Solution) -> Ordering {
        a.density_per_100
            .total_cmp(&b.density_per_100)
            .then_with(|| match self.tie_breaker {
                TieBreaker::DiscoveryOrder => Ordering::Equal,
                TieBreaker::LongerTotal => b.total_length.cmp(&a.total_length),
                TieBreaker::FewerSegments => a.segments.len().cmp(&b.segments.len()),
            })
    }

    /// Sorts solutions best first.
    ///
    /// The sort is stable: solutions that compare equal stay in the order
    /// given, which is discovery order when fed from the pipeline.
    pub fn rank(&self, mut solutions: Vec<Solution>) -> Vec<Solution> {
        solutions.sort_by(|a, b| self.compare(a, b));
        solutions
    }

    /// Inserts `solution` into an already ranked vector, keeping at most
    /// `limit` entries.
    ///
    /// The new solution lands after every entry that compares equal, which
    /// matches a stable sort as long as solutions arrive in discovery order.
    /// Returns `false` when it ranked below the retained `limit`.
    pub fn insert_bounded(
        &self,
        ranked: &mut Vec<Solution>,
        solution: Solution,
        limit: usize,
    ) -> bool {
        let pos = ranked.partition_point(|s| self.compare(s, &solution) != Ordering::Greater);
        if pos >= limit {
            return false;
        }
        ranked.insert(pos, solution);
        ranked.truncate(limit);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;

    fn solution(discovery: u64, segs: usize, total_length: u64, density: f64) -> Solution {
        Solution {
            segments: (0..segs)
                .map(|i| Segment::new("A", i as i64, i as i64, 0.0))
                .collect(),
            indices: (0..segs).collect(),
            total_length,
            total_penalty: density * total_length as f64 / 100.0,
            density_per_100: density,
            discovery,
        }
    }

    fn discoveries(solutions: &[Solution]) -> Vec<u64> {
        solutions.iter().map(|s| s.discovery).collect()
    }

    #[test]
    fn test_ascending_density() {
        let ranked = Ranker::new().rank(vec![
            solution(0, 1, 10, 30.0),
            solution(1, 1, 10, 10.0),
            solution(2, 1, 10, 20.0),
        ]);
        assert_eq!(discoveries(&ranked), vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let ranked = Ranker::new().rank(vec![
            solution(0, 2, 40, 15.0),
            solution(1, 1, 10, 5.0),
            solution(2, 1, 20, 15.0),
            solution(3, 3, 60, 15.0),
        ]);
        assert_eq!(discoveries(&ranked), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_longer_total_tie_breaker() {
        let ranked = Ranker::new()
            .with_tie_breaker(TieBreaker::LongerTotal)
            .rank(vec![
                solution(0, 2, 40, 15.0),
                solution(1, 1, 20, 15.0),
                solution(2, 3, 60, 15.0),
                solution(3, 1, 60, 15.0),
            ]);
        assert_eq!(discoveries(&ranked), vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_fewer_segments_tie_breaker() {
        let ranked = Ranker::new()
            .with_tie_breaker(TieBreaker::FewerSegments)
            .rank(vec![
                solution(0, 2, 40, 15.0),
                solution(1, 1, 20, 15.0),
                solution(2, 3, 60, 1.0),
            ]);
        assert_eq!(discoveries(&ranked), vec![2, 1, 0]);
    }

    #[test]
    fn test_favors_earlier_discovery() {
        assert!(TieBreaker::DiscoveryOrder.favors_earlier_discovery());
        assert!(TieBreaker::FewerSegments.favors_earlier_discovery());
        assert!(!TieBreaker::LongerTotal.favors_earlier_discovery());
    }

    #[test]
    fn test_insert_bounded_matches_rank() {
        let ranker = Ranker::new();
        let all = vec![
            solution(0, 1, 10, 30.0),
            solution(1, 1, 10, 10.0),
            solution(2, 1, 10, 20.0),
            solution(3, 1, 10, 10.0),
            solution(4, 1, 10, 5.0),
        ];

        let mut bounded = Vec::new();
        for s in all.clone() {
            ranker.insert_bounded(&mut bounded, s, 3);
        }
        let full = ranker.rank(all);

        assert_eq!(discoveries(&bounded), discoveries(&full[..3]));
        assert_eq!(discoveries(&bounded), vec![4, 1, 3]);
    }

    #[test]
    fn test_insert_bounded_rejects_worse() {
        let ranker = Ranker::new();
        let mut ranked = vec![solution(0, 1, 10, 1.0)];
        assert!(!ranker.insert_bounded(&mut ranked, solution(1, 1, 10, 1.0), 1));
        assert!(ranker.insert_bounded(&mut ranked, solution(2, 1, 10, 0.5), 1));
        assert_eq!(discoveries(&ranked), vec![2]);
    }

    #[test]
    fn test_empty() {
        assert!(Ranker::new().rank(Vec::new()).is_empty());
    }
}
