//! Lazy k-combination enumeration over segment indices.

use std::iter::FusedIterator;

/// Number of non-empty subsets of `n` items, `2^n - 1`.
///
/// Returns `None` when the count does not fit in a `u64`.
///
/// ```
/// use u_cutplan::enumerate::subset_count;
///
/// assert_eq!(subset_count(0), Some(0));
/// assert_eq!(subset_count(21), Some(2_097_151));
/// assert_eq!(subset_count(65), None);
/// ```
pub fn subset_count(n: usize) -> Option<u64> {
    if n > 64 {
        return None;
    }
    u64::try_from((1u128 << n) - 1).ok()
}

/// Iterator over index subsets of `0..n`.
///
/// Subsets come out by increasing size, and lexicographically by index
/// within one size: `[0], [1], [2], [0,1], [0,2], [1,2], [0,1,2]` for
/// `n = 3`. Each subset is a sorted `Vec<usize>` and appears exactly once.
/// Only the subset in flight is held in memory.
///
/// # Examples
///
/// ```
/// use u_cutplan::enumerate::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(3).collect();
/// assert_eq!(all.len(), 7);
/// assert_eq!(all[3], vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    max_size: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    /// All non-empty subsets of `0..n`.
    pub fn new(n: usize) -> Self {
        Self::with_sizes(n, 1, n)
    }

    /// Subsets whose size lies in `min_size..=max_size`.
    ///
    /// `min_size` is raised to 1 and `max_size` capped at `n`; an empty
    /// range yields nothing.
    pub fn with_sizes(n: usize, min_size: usize, max_size: usize) -> Self {
        let min_size = min_size.max(1);
        let max_size = max_size.min(n);
        let done = min_size > max_size;
        Self {
            n,
            max_size,
            indices: if done { Vec::new() } else { (0..min_size).collect() },
            done,
        }
    }

    /// Moves `indices` to the next combination of the same size, or to the
    /// first combination of the next size. Sets `done` past the last one.
    fn advance(&mut self) {
        let k = self.indices.len();
        let n = self.n;

        // Rightmost position that can still move right.
        if let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) {
            self.indices[i] += 1;
            for j in (i + 1)..k {
                self.indices[j] = self.indices[j - 1] + 1;
            }
            return;
        }

        if k >= self.max_size {
            self.done = true;
        } else {
            self.indices = (0..=k).collect();
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        self.advance();
        Some(current)
    }
}

impl FusedIterator for Combinations {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_order_for_three() {
        let all: Vec<Vec<usize>> = Combinations::new(3).collect();
        assert_eq!(
            all,
            vec![
                vec![0],
                vec![1],
                vec![2],
                vec![0, 1],
                vec![0, 2],
                vec![1, 2],
                vec![0, 1, 2],
            ]
        );
    }

    #[test]
    fn test_count_and_uniqueness() {
        for n in 0..=10 {
            let all: Vec<Vec<usize>> = Combinations::new(n).collect();
            assert_eq!(all.len() as u64, subset_count(n).unwrap(), "n={n}");

            let unique: HashSet<Vec<usize>> = all.iter().cloned().collect();
            assert_eq!(unique.len(), all.len(), "duplicates for n={n}");
            assert!(all.iter().all(|s| !s.is_empty()));
            assert!(all.iter().all(|s| s.windows(2).all(|w| w[0] < w[1])));
        }
    }

    #[test]
    fn test_sizes_non_decreasing() {
        let sizes: Vec<usize> = Combinations::new(6).map(|s| s.len()).collect();
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert_eq!(Combinations::new(0).count(), 0);
    }

    #[test]
    fn test_size_window() {
        let all: Vec<Vec<usize>> = Combinations::with_sizes(4, 2, 3).collect();
        // C(4,2) + C(4,3)
        assert_eq!(all.len(), 10);
        assert_eq!(all.first(), Some(&vec![0, 1]));
        assert_eq!(all.last(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_size_window_clamped() {
        assert_eq!(Combinations::with_sizes(3, 0, 10).count(), 7);
        assert_eq!(Combinations::with_sizes(3, 3, 2).count(), 0);
        assert_eq!(Combinations::with_sizes(2, 3, 5).count(), 0);
    }

    #[test]
    fn test_restartable() {
        let a: Vec<Vec<usize>> = Combinations::new(5).collect();
        let b: Vec<Vec<usize>> = Combinations::new(5).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fused() {
        let mut it = Combinations::new(1);
        assert_eq!(it.next(), Some(vec![0]));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_subset_count_bounds() {
        assert_eq!(subset_count(1), Some(1));
        assert_eq!(subset_count(63), Some((1u64 << 63) - 1));
        assert_eq!(subset_count(64), Some(u64::MAX));
        assert_eq!(subset_count(65), None);
    }
}
