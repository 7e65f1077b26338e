//! Text reports and interval layouts for planning results.
//!
//! Nothing here computes or reorders results; it only renders what the
//! pipeline produced.

use std::fmt;

use crate::plan::{RankedResult, Solution};
use crate::segment::Segment;

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total Length: {} meters, Total Defect Points: {}, Defect Points per 100 Meters: {:.2}",
            self.total_length, self.total_penalty, self.density_per_100
        )?;
        for segment in &self.segments {
            writeln!(f, "  {segment}")?;
        }
        Ok(())
    }
}

/// Renders every solution, best first, separated by blank lines.
///
/// # Examples
///
/// ```
/// use u_cutplan::plan::{CutConfig, CutRunner};
/// use u_cutplan::report::render;
/// use u_cutplan::segment::Segment;
///
/// let segments = vec![Segment::new("A", 1, 20, 3.0)];
/// let result = CutRunner::run(&segments, &CutConfig::new(1.0, 20.0, 20.0)).unwrap();
/// assert!(render(&result).starts_with("Total Length: 20 meters, Total Defect Points: 3"));
///
/// let none = CutRunner::run(&segments, &CutConfig::new(1.0, 21.0, 20.0)).unwrap();
/// assert_eq!(render(&none), "No valid combinations found.\n");
/// ```
pub fn render(result: &RankedResult) -> String {
    if result.is_empty() {
        return "No valid combinations found.\n".to_string();
    }
    let mut out = String::new();
    for (i, solution) in result.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&solution.to_string());
    }
    out
}

/// One segment drawn as a bar on the shared offset axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bar {
    /// Roll the segment comes from; renderers color by it.
    pub roll_id: String,
    /// Left edge (the segment start).
    pub x: i64,
    /// Bar width (the inclusive segment length).
    pub width: u64,
    /// Horizontal label position, the midpoint of `start` and `end`.
    pub label_x: f64,
}

/// Bars of one solution plus the axis extent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// One bar per selected segment, in solution order.
    pub bars: Vec<Bar>,
    /// Distinct roll ids in first-seen order.
    pub rolls: Vec<String>,
    /// Axis start.
    pub axis_min: i64,
    /// Axis end.
    pub axis_max: i64,
}

/// Lays out `solution` on an axis from 0 to `axis_max`.
///
/// [`considered_extent`] scales the axis to the segments the run actually
/// considered; [`axis_extent`] over the full input gives layouts of
/// different runs a shared scale.
pub fn layout(solution: &Solution, axis_max: i64) -> Layout {
    let mut rolls: Vec<String> = Vec::new();
    let bars = solution
        .segments
        .iter()
        .map(|seg| {
            if !rolls.contains(&seg.roll_id) {
                rolls.push(seg.roll_id.clone());
            }
            Bar {
                roll_id: seg.roll_id.clone(),
                x: seg.start,
                width: seg.length(),
                label_x: (seg.start as f64 + seg.end as f64) / 2.0,
            }
        })
        .collect();

    Layout {
        bars,
        rolls,
        axis_min: 0,
        axis_max,
    }
}

/// Largest `end` offset among `segments`, or 0 when empty.
pub fn axis_extent(segments: &[Segment]) -> i64 {
    segments.iter().map(|s| s.end).max().unwrap_or(0)
}

/// Largest `end` offset among the segments `result` considered, or 0 when
/// the pre-filter dropped everything.
///
/// `segments` must be the input `result` was computed from.
///
/// # Panics
///
/// Panics if `segments` is shorter than that input.
pub fn considered_extent(result: &RankedResult, segments: &[Segment]) -> i64 {
    result
        .considered()
        .iter()
        .map(|&i| segments[i].end)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{CutConfig, CutRunner};

    fn sample() -> Vec<Segment> {
        vec![Segment::new("A", 1, 10, 2.0), Segment::new("B", 11, 30, 3.0)]
    }

    #[test]
    fn test_solution_display() {
        let result = CutRunner::run(&sample(), &CutConfig::new(1.0, 20.0, 20.0)).unwrap();
        let text = result.solutions()[1].to_string();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Total Length: 30 meters, Total Defect Points: 5, Defect Points per 100 Meters: 16.67")
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_render_separates_solutions() {
        let result = CutRunner::run(&sample(), &CutConfig::new(1.0, 20.0, 20.0)).unwrap();
        let text = render(&result);
        assert_eq!(text.matches("Total Length").count(), 2);
        assert!(text.contains("\n\nTotal Length"));
        assert!(text.starts_with("Total Length: 20 meters"));
    }

    #[test]
    fn test_layout() {
        let segments = sample();
        let result = CutRunner::run(&segments, &CutConfig::new(1.0, 1.0, 100.0)).unwrap();
        let pair = result
            .iter()
            .find(|s| s.segment_count() == 2)
            .unwrap();

        let layout = layout(pair, axis_extent(&segments));
        assert_eq!(layout.axis_max, 30);
        assert_eq!(layout.rolls, vec!["A", "B"]);
        assert_eq!(
            layout.bars[1],
            Bar {
                roll_id: "B".into(),
                x: 11,
                width: 20,
                label_x: 20.5,
            }
        );
    }

    #[test]
    fn test_axis_extent_empty() {
        assert_eq!(axis_extent(&[]), 0);
    }

    #[test]
    fn test_considered_extent_follows_prefilter() {
        let segments = vec![
            Segment::new("A", 1, 20, 1.0),
            Segment::new("A", 76, 76, 4.0),
        ];
        let config = CutConfig::new(1.0, 1.0, 100.0).with_density_threshold(1.0);
        let result = CutRunner::run(&segments, &config).unwrap();

        assert_eq!(axis_extent(&segments), 76);
        assert_eq!(considered_extent(&result, &segments), 20);

        let none = CutRunner::run(&segments, &config.with_density_threshold(0.01)).unwrap();
        assert_eq!(considered_extent(&none, &segments), 0);
    }
}
