//! Validated, read-only segment collection.

use super::types::Segment;
use crate::error::CutError;

/// Checks every segment, failing on the first invalid one.
///
/// Also requires the summed length of all segments to fit in `u64`, so no
/// subset total can overflow.
pub fn validate(segments: &[Segment]) -> Result<(), CutError> {
    let mut total: u64 = 0;
    for (i, seg) in segments.iter().enumerate() {
        seg.validate(i)?;
        total = total.checked_add(seg.length()).ok_or_else(|| {
            CutError::invalid_segment(i, "total length of the input overflows u64")
        })?;
    }
    Ok(())
}

/// The candidate segments of one run, in insertion order.
///
/// Construction validates every segment, so everything downstream may rely
/// on `length() >= 1` and a finite, non-negative penalty. Enumeration and
/// tie-breaking depend on the order kept here.
///
/// # Examples
///
/// ```
/// use u_cutplan::segment::{Segment, SegmentRepository};
///
/// let repo = SegmentRepository::new(vec![
///     Segment::new("A", 1, 10, 2.0),
///     Segment::new("B", 1, 10, 1.0),
/// ]).unwrap();
/// assert_eq!(repo.len(), 2);
/// assert_eq!(repo.roll_ids(), vec!["A", "B"]);
///
/// assert!(SegmentRepository::new(vec![Segment::new("A", 5, 4, 1.0)]).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SegmentRepository {
    segments: Vec<Segment>,
}

impl SegmentRepository {
    /// Validates and stores the segments.
    pub fn new(segments: Vec<Segment>) -> Result<Self, CutError> {
        validate(&segments)?;
        Ok(Self { segments })
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the repository holds no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// All segments in insertion order.
    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Distinct roll identifiers in first-seen order.
    pub fn roll_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for seg in &self.segments {
            if !ids.contains(&seg.roll_id.as_str()) {
                ids.push(&seg.roll_id);
            }
        }
        ids
    }

    /// Largest `end` offset, or `None` when empty.
    pub fn max_end(&self) -> Option<i64> {
        self.segments.iter().map(|s| s.end).max()
    }
}

impl<'a> IntoIterator for &'a SegmentRepository {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
