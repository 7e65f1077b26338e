//! Subset totals.

use crate::segment::Segment;

/// Summed length and penalty of a subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    /// Sum of inclusive segment lengths.
    pub total_length: u64,
    /// Sum of segment penalties.
    pub total_penalty: f64,
}

impl Aggregate {
    /// Penalty points per 100 units of length.
    ///
    /// NaN for an empty aggregate; validated non-empty subsets always have
    /// `total_length >= 1`.
    pub fn density_per_100(&self) -> f64 {
        density_per_100(self.total_length, self.total_penalty)
    }
}

/// `total_penalty / total_length * 100`.
pub fn density_per_100(total_length: u64, total_penalty: f64) -> f64 {
    total_penalty / total_length as f64 * 100.0
}

/// Sums length and penalty over the given segments.
///
/// The length sum saturates at `u64::MAX`. Input accepted by
/// [`SegmentRepository`](crate::segment::SegmentRepository) never reaches
/// it, since the repository rejects inputs whose total length overflows.
///
/// # Examples
///
/// ```
/// use u_cutplan::evaluate::aggregate;
/// use u_cutplan::segment::Segment;
///
/// let segments = [Segment::new("A", 1, 10, 2.0), Segment::new("A", 11, 30, 3.0)];
/// let agg = aggregate(&segments);
/// assert_eq!(agg.total_length, 30);
/// assert!((agg.total_penalty - 5.0).abs() < 1e-12);
/// assert!((agg.density_per_100() - 16.666_666).abs() < 1e-4);
/// ```
pub fn aggregate<'a, I>(segments: I) -> Aggregate
where
    I: IntoIterator<Item = &'a Segment>,
{
    segments.into_iter().fold(
        Aggregate {
            total_length: 0,
            total_penalty: 0.0,
        },
        |acc, seg| Aggregate {
            total_length: acc.total_length.saturating_add(seg.length()),
            total_penalty: acc.total_penalty + seg.penalty,
        },
    )
}

/// Aggregates the segments selected by `subset` (indices into `segments`).
///
/// # Panics
///
/// Panics if an index is out of range.
pub fn aggregate_indices(segments: &[Segment], subset: &[usize]) -> Aggregate {
    aggregate(subset.iter().map(|&i| &segments[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        let seg = Segment::new("A", 7, 7, 4.0);
        let agg = aggregate([&seg]);
        assert_eq!(agg.total_length, 1);
        assert!((agg.density_per_100() - 400.0).abs() < 1e-10);
    }

    #[test]
    fn test_indices() {
        let segments = vec![
            Segment::new("A", 1, 10, 2.0),
            Segment::new("A", 11, 30, 3.0),
            Segment::new("B", 4, 8, 1.0),
        ];
        let agg = aggregate_indices(&segments, &[0, 2]);
        assert_eq!(agg.total_length, 15);
        assert!((agg.total_penalty - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_is_nan_density() {
        let agg = aggregate(std::iter::empty::<&Segment>());
        assert_eq!(agg.total_length, 0);
        assert!(agg.density_per_100().is_nan());
    }

    #[test]
    fn test_large_validated_total_is_exact() {
        let segments = vec![
            Segment::new("A", 1, i64::MAX, 0.0),
            Segment::new("B", 1, i64::MAX, 0.0),
        ];
        crate::segment::validate(&segments).unwrap();
        assert_eq!(aggregate(&segments).total_length, u64::MAX - 1);
    }

    #[test]
    fn test_zero_penalty() {
        let segments = [Segment::new("A", 1, 50, 0.0)];
        assert_eq!(aggregate(&segments).density_per_100(), 0.0);
    }
}
