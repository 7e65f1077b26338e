//! Sample inspection data: two fabric rolls graded with a 4-point system.
//!
//! Offsets are meters. Used by tests, benchmarks and documentation.

use crate::segment::Segment;
use crate::segment::Severity::{self, Major, Minor};

/// (from, to, defect, severity, points)
type Row = (i64, i64, &'static str, Severity, f64);

const ROLL_A: [Row; 13] = [
    (7, 7, "HOLE", Major, 4.0),
    (15, 15, "MISSING END", Minor, 1.0),
    (23, 23, "MISSING END", Major, 5.0),
    (25, 25, "RUST STAIN", Minor, 1.0),
    (28, 28, "HANDLING STAIN", Minor, 4.0),
    (30, 30, "LOOSE WARP", Minor, 1.0),
    (41, 41, "MISSING END", Minor, 4.0),
    (41, 41, "SLUB", Major, 4.0),
    (52, 52, "RUST STAIN", Minor, 1.0),
    (66, 66, "HANDLING STAIN", Major, 4.0),
    (68, 68, "HANDLING STAIN", Major, 4.0),
    (71, 71, "MISSING END", Minor, 1.0),
    (76, 76, "WRONG END", Major, 4.0),
];

const ROLL_B: [Row; 8] = [
    (4, 8, "MISSING END", Minor, 1.0),
    (10, 10, "RUST STAIN", Minor, 1.0),
    (14, 14, "SLUB YARN", Major, 4.0),
    (16, 16, "SLUB YARN", Major, 4.0),
    (37, 37, "RUST STAIN", Minor, 1.0),
    (41, 41, "CONTAMINATION", Major, 4.0),
    (47, 47, "CONTAMINATION", Major, 4.0),
    (59, 59, "FLOAT", Major, 1.0),
];

fn roll(id: &str, rows: &[Row]) -> Vec<Segment> {
    rows.iter()
        .map(|&(from, to, name, severity, points)| {
            Segment::new(id, from, to, points).with_defect(name, severity)
        })
        .collect()
}

/// Roll "A" (13 segments).
pub fn roll_a() -> Vec<Segment> {
    roll("A", &ROLL_A)
}

/// Roll "B" (8 segments).
pub fn roll_b() -> Vec<Segment> {
    roll("B", &ROLL_B)
}

/// Roll A followed by roll B (21 segments).
pub fn sample_rolls() -> Vec<Segment> {
    let mut segments = roll_a();
    segments.extend(roll_b());
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{CutConfig, CutRunner};
    use crate::segment::SegmentRepository;

    #[test]
    fn test_sample_is_valid() {
        let repo = SegmentRepository::new(sample_rolls()).unwrap();
        assert_eq!(repo.len(), 21);
        assert_eq!(repo.roll_ids(), vec!["A", "B"]);
        assert_eq!(repo.max_end(), Some(76));
    }

    #[test]
    fn test_prefiltered_sample() {
        // Single-meter defects score at least 1 point per meter; only the
        // 5 m stretch on roll B stays under 0.5.
        let config = CutConfig::new(1.0, 20.0, 35.0).with_density_threshold(0.5);
        let result = CutRunner::run(&sample_rolls(), &config).unwrap();
        assert_eq!(result.stats().considered_segments(), 1);
        assert!(result.is_empty());
    }

    #[test]
    fn test_required_length_beyond_sample() {
        // Total sample length is 25 m, so required length 80 is unreachable.
        let total: u64 = sample_rolls().iter().map(Segment::length).sum();
        assert_eq!(total, 25);

        let config = CutConfig::new(20.0, 80.0, 23.0).with_density_threshold(1.0);
        let result = CutRunner::run(&sample_rolls(), &config).unwrap();
        assert!(result.is_empty());
    }
}
