//! Whole-run comparison over a sequence of directory pairs.

use tracing::info;

use dirmatch_core::{CompareConfig, DirectoryPair, MatchRecord};

use crate::aggregate::ComparisonReport;
use crate::classify::Thresholds;
use crate::hasher::{Blake3Hasher, ContentHasher};
use crate::matcher::FileMatcher;

/// Runs the matcher over every directory pair and accumulates the report.
pub struct TreeComparator<H = Blake3Hasher> {
    matcher: FileMatcher<H>,
}

impl TreeComparator<Blake3Hasher> {
    /// Create a comparator hashing with BLAKE3.
    pub fn new(config: &CompareConfig) -> Self {
        Self::with_hasher(config, Blake3Hasher::new())
    }
}

impl<H: ContentHasher> TreeComparator<H> {
    /// Create a comparator with a custom hasher.
    pub fn with_hasher(config: &CompareConfig, hasher: H) -> Self {
        Self {
            matcher: FileMatcher::new(hasher, Thresholds::from_config(config)),
        }
    }

    /// Access the underlying matcher.
    pub fn matcher(&self) -> &FileMatcher<H> {
        &self.matcher
    }

    /// Compare all pairs in order, handing each pair's records to `on_pair`
    /// before moving to the next one. An error from `on_pair` stops the run.
    pub fn compare<E, F>(
        &mut self,
        pairs: &[DirectoryPair],
        mut on_pair: F,
    ) -> Result<ComparisonReport, E>
    where
        F: FnMut(&DirectoryPair, &[MatchRecord]) -> Result<(), E>,
    {
        let mut report = ComparisonReport::new();

        for pair in pairs {
            let outcome = self.matcher.match_pair(pair);
            on_pair(pair, &outcome.records)?;
            report.summary.hashes_computed += outcome.hashes_computed;
            report.warnings.extend(outcome.warnings);
            report.extend(outcome.records);
        }

        info!(
            directories = report.summary.directories,
            records = report.summary.total,
            perfect = report.summary.perfect,
            "comparison finished"
        );

        Ok(report)
    }

    /// Compare all pairs without a per-pair callback.
    pub fn compare_all(&mut self, pairs: &[DirectoryPair]) -> ComparisonReport {
        match self.compare(pairs, |_, _| Ok::<(), std::convert::Infallible>(())) {
            Ok(report) => report,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirmatch_core::FileEntry;

    #[test]
    fn test_callback_sees_each_pair_in_order() {
        let config = CompareConfig::new("/d", "/t");
        let pairs = vec![
            DirectoryPair::new("", vec![FileEntry::new("a", 1, "/nonexistent/a")], Vec::new()),
            DirectoryPair::new("x", Vec::new(), vec![FileEntry::new("b", 1, "/nonexistent/b")]),
        ];

        let mut seen = Vec::new();
        let report = TreeComparator::new(&config)
            .compare(&pairs, |pair, records| {
                seen.push((pair.display_name(), records.len()));
                Ok::<(), String>(())
            })
            .unwrap();

        assert_eq!(seen, vec![(".".to_string(), 1), ("x".to_string(), 1)]);
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.directories, 2);
    }

    #[test]
    fn test_callback_error_stops_run() {
        let config = CompareConfig::new("/d", "/t");
        let pairs = vec![
            DirectoryPair::new("", vec![FileEntry::new("a", 1, "/nonexistent/a")], Vec::new()),
            DirectoryPair::new("x", vec![FileEntry::new("b", 1, "/nonexistent/b")], Vec::new()),
        ];

        let mut calls = 0;
        let result = TreeComparator::new(&config).compare(&pairs, |_, _| {
            calls += 1;
            Err("sink closed")
        });

        assert_eq!(result.unwrap_err(), "sink closed");
        assert_eq!(calls, 1);
    }
}
