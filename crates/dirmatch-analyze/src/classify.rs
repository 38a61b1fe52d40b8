//! Status classification of matched pairs.

use serde::{Deserialize, Serialize};

use dirmatch_core::{
    CLOSE_THRESHOLD_PERCENT, CompareConfig, ContentHash, SIZE_MATCH_TOLERANCE, Status,
};

/// Numeric limits used by matching and classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Best-size pass accepts differences strictly below this many bytes.
    pub size_tolerance: u64,
    /// Percent of the D-side size below which unequal sizes are `CLOSE`.
    pub close_threshold_percent: u32,
}

impl Thresholds {
    /// Take the thresholds from a run configuration.
    pub fn from_config(config: &CompareConfig) -> Self {
        Self {
            size_tolerance: config.size_tolerance,
            close_threshold_percent: config.close_threshold_percent,
        }
    }

    /// Whether two sizes are near enough for the best-size pass.
    pub fn within_tolerance(&self, d_size: u64, t_size: u64) -> bool {
        d_size.abs_diff(t_size) < self.size_tolerance
    }

    /// Classify a matched pair.
    ///
    /// A pair is `PERFECT` only when both hashes are known and equal; a missing
    /// hash drops an equal-size pair to `SIZE_OK`. For unequal sizes the
    /// difference is compared against the D-side size with a strict `<`, and a
    /// zero-byte D-side file is always `DIFFERENT`.
    pub fn classify(
        &self,
        d_size: u64,
        t_size: u64,
        d_hash: Option<&ContentHash>,
        t_hash: Option<&ContentHash>,
    ) -> Status {
        if d_size == t_size {
            return match (d_hash, t_hash) {
                (Some(d), Some(t)) if d == t => Status::Perfect,
                _ => Status::SizeOk,
            };
        }

        if d_size == 0 {
            return Status::Different;
        }

        // diff / d_size < pct / 100, kept in integers so the boundary is exact
        let diff = u128::from(d_size.abs_diff(t_size));
        let limit = u128::from(d_size) * u128::from(self.close_threshold_percent);
        if diff * 100 < limit {
            Status::Close
        } else {
            Status::Different
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            size_tolerance: SIZE_MATCH_TOLERANCE,
            close_threshold_percent: CLOSE_THRESHOLD_PERCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H1: ContentHash = ContentHash([1; 32]);
    const H2: ContentHash = ContentHash([2; 32]);

    #[test]
    fn test_equal_sizes() {
        let t = Thresholds::default();
        assert_eq!(t.classify(100, 100, Some(&H1), Some(&H1)), Status::Perfect);
        assert_eq!(t.classify(100, 100, Some(&H1), Some(&H2)), Status::SizeOk);
        assert_eq!(t.classify(100, 100, None, Some(&H1)), Status::SizeOk);
        assert_eq!(t.classify(100, 100, None, None), Status::SizeOk);
    }

    #[test]
    fn test_five_percent_boundary() {
        let t = Thresholds::default();
        assert_eq!(t.classify(1000, 1049, None, None), Status::Close);
        assert_eq!(t.classify(1000, 1050, None, None), Status::Different);
        assert_eq!(t.classify(1000, 951, None, None), Status::Close);
        assert_eq!(t.classify(1000, 950, None, None), Status::Different);
    }

    #[test]
    fn test_hashes_ignored_when_sizes_differ() {
        let t = Thresholds::default();
        assert_eq!(t.classify(1000, 1001, Some(&H1), Some(&H1)), Status::Close);
    }

    #[test]
    fn test_zero_d_size() {
        let t = Thresholds::default();
        assert_eq!(t.classify(0, 1, None, None), Status::Different);
        assert_eq!(t.classify(0, 0, Some(&H1), Some(&H1)), Status::Perfect);
    }

    #[test]
    fn test_tolerance_is_strict() {
        let t = Thresholds::default();
        assert!(t.within_tolerance(0, 5_242_879));
        assert!(!t.within_tolerance(0, 5_242_880));
        assert!(t.within_tolerance(5_242_880, 1));
    }

    #[test]
    fn test_large_sizes_do_not_overflow() {
        let t = Thresholds::default();
        assert_eq!(t.classify(u64::MAX, u64::MAX - 1, None, None), Status::Close);
    }
}
