//! Density pre-filter.
//!
//! Shrinks the enumeration base before the exponential stage. Filtering the
//! candidate subsets afterwards would not save any work, so the pipeline
//! only ever applies it to the segment list.

use super::types::Segment;

/// Keeps segments whose individual density is at most `threshold`.
///
/// Order is preserved. A NaN threshold keeps nothing.
///
/// # Examples
///
/// ```
/// use u_cutplan::segment::{filter_by_density, Segment};
///
/// let segments = vec![
///     Segment::new("A", 7, 7, 4.0),   // density 4.0
///     Segment::new("B", 4, 8, 1.0),   // density 0.2
/// ];
/// let kept = filter_by_density(&segments, 1.0);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].roll_id, "B");
/// ```
pub fn filter_by_density(segments: &[Segment], threshold: f64) -> Vec<Segment> {
    retained_positions(segments, threshold)
        .into_iter()
        .map(|i| segments[i].clone())
        .collect()
}

/// Positions of the segments [`filter_by_density`] keeps, ascending.
pub fn retained_positions(segments: &[Segment], threshold: f64) -> Vec<usize> {
    segments
        .iter()
        .enumerate()
        .filter(|(_, seg)| seg.density() <= threshold)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_order() {
        let segments = vec![
            Segment::new("A", 1, 10, 1.0),
            Segment::new("A", 11, 11, 5.0),
            Segment::new("B", 1, 4, 1.0),
            Segment::new("B", 5, 5, 1.0),
        ];
        let kept = filter_by_density(&segments, 1.0);
        let starts: Vec<i64> = kept.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![1, 1, 5]);
        assert_eq!(retained_positions(&segments, 1.0), vec![0, 2, 3]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let segments = vec![Segment::new("A", 1, 2, 1.0)];
        assert_eq!(filter_by_density(&segments, 0.5).len(), 1);
        assert!(filter_by_density(&segments, 0.49).is_empty());
    }

    #[test]
    fn test_nan_threshold_keeps_nothing() {
        let segments = vec![Segment::new("A", 1, 2, 0.0)];
        assert!(filter_by_density(&segments, f64::NAN).is_empty());
    }
}
