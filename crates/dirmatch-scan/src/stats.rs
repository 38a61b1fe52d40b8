//! Enumeration statistics.

use serde::{Deserialize, Serialize};

/// Counts of directories seen and skipped while enumerating pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationStats {
    /// Directories found under the D-side root (root excluded).
    pub dirs_seen: u64,
    /// Skipped because T has no directory at the same relative path.
    pub skipped_no_counterpart: u64,
    /// Skipped because the relative path matched an exclusion pattern.
    pub skipped_excluded: u64,
    /// Skipped because neither side has a file directly inside.
    pub skipped_empty: u64,
    /// Pairs produced, root included.
    pub pairs: u64,
}

impl EnumerationStats {
    /// Total number of directories skipped for any reason.
    pub fn skipped(&self) -> u64 {
        self.skipped_no_counterpart + self.skipped_excluded + self.skipped_empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_total() {
        let stats = EnumerationStats {
            dirs_seen: 6,
            skipped_no_counterpart: 1,
            skipped_excluded: 2,
            skipped_empty: 1,
            pairs: 3,
        };
        assert_eq!(stats.skipped(), 4);
        assert_eq!(EnumerationStats::default().skipped(), 0);
    }
}
