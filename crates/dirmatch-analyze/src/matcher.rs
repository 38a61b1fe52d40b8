//! Per-directory file matching.
//!
//! Each directory pair is matched in three ordered passes:
//! 1. Exact-name pass: files with the same name on both sides are paired
//! 2. Best-size pass: each remaining D-side file takes the remaining T-side
//!    file with the smallest size difference under the tolerance
//! 3. Leftover pass: unpaired T-side files are reported on their own
//!
//! Hashes are only computed for paired files.

use std::collections::HashMap;
use std::ffi::OsStr;

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use dirmatch_core::{CompareWarning, ContentHash, DirectoryPair, FileEntry, MatchRecord};

use crate::classify::Thresholds;
use crate::hasher::ContentHasher;

/// Records and warnings produced for one directory pair.
#[derive(Debug, Clone, Default)]
pub struct PairOutcome {
    /// One record per file, in pass order.
    pub records: Vec<MatchRecord>,
    /// Hashing failures.
    pub warnings: Vec<CompareWarning>,
    /// Number of files hashed for this pair.
    pub hashes_computed: u64,
}

/// Matches the files of a directory pair and classifies each match.
pub struct FileMatcher<H> {
    hasher: H,
    thresholds: Thresholds,
}

impl<H: ContentHasher> FileMatcher<H> {
    /// Create a matcher with the given hasher and thresholds.
    pub fn new(hasher: H, thresholds: Thresholds) -> Self {
        Self { hasher, thresholds }
    }

    /// Access the hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Match every file of `pair`. Each D-side and T-side entry ends up in
    /// exactly one record.
    pub fn match_pair(&mut self, pair: &DirectoryPair) -> PairOutcome {
        let subdir = pair.display_name();
        let mut outcome = PairOutcome::default();

        // Unconsumed T-side entries by position, in enumeration order
        let mut remaining_t: IndexMap<usize, &FileEntry> =
            pair.t_entries.iter().enumerate().collect();
        let mut t_by_name: HashMap<&OsStr, usize> = HashMap::with_capacity(pair.t_entries.len());
        for (index, t) in pair.t_entries.iter().enumerate() {
            t_by_name.entry(t.raw_name()).or_insert(index);
        }
        let mut remaining_d: Vec<&FileEntry> = Vec::new();

        for d in &pair.d_entries {
            let exact = t_by_name
                .get(d.raw_name())
                .and_then(|index| remaining_t.shift_remove(index));
            match exact {
                Some(t) => {
                    trace!(subdir = %subdir, name = %d.name, "exact name match");
                    let record = self.pair_record(&subdir, d, t, &mut outcome);
                    outcome.records.push(record);
                }
                None => remaining_d.push(d),
            }
        }

        for d in remaining_d {
            match self.best_size_candidate(d, &remaining_t) {
                Some(index) => {
                    // Candidate keys come from the map, so removal always succeeds
                    if let Some(t) = remaining_t.shift_remove(&index) {
                        debug!(
                            subdir = %subdir,
                            d_name = %d.name,
                            t_name = %t.name,
                            "best size match"
                        );
                        let record = self.pair_record(&subdir, d, t, &mut outcome);
                        outcome.records.push(record);
                    }
                }
                None => {
                    trace!(subdir = %subdir, name = %d.name, "only on D-side");
                    outcome.records.push(MatchRecord::only_d(&subdir, d));
                }
            }
        }

        for t in remaining_t.values() {
            trace!(subdir = %subdir, name = %t.name, "only on T-side");
            outcome.records.push(MatchRecord::only_t(&subdir, t));
        }

        debug!(
            subdir = %subdir,
            records = outcome.records.len(),
            hashed = outcome.hashes_computed,
            "matched directory pair"
        );

        outcome
    }

    /// Closest remaining T-side entry by size, strictly inside the tolerance.
    /// The earliest entry wins ties.
    fn best_size_candidate(
        &self,
        d: &FileEntry,
        remaining_t: &IndexMap<usize, &FileEntry>,
    ) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;

        for (&index, t) in remaining_t {
            if !self.thresholds.within_tolerance(d.size, t.size) {
                continue;
            }
            let diff = d.size.abs_diff(t.size);
            if best.is_none_or(|(_, best_diff)| diff < best_diff) {
                best = Some((index, diff));
            }
        }

        best.map(|(index, _)| index)
    }

    fn pair_record(
        &mut self,
        subdir: &str,
        d: &FileEntry,
        t: &FileEntry,
        outcome: &mut PairOutcome,
    ) -> MatchRecord {
        let d_hash = self.hash(d, outcome);
        let t_hash = self.hash(t, outcome);
        let status = self
            .thresholds
            .classify(d.size, t.size, d_hash.as_ref(), t_hash.as_ref());
        MatchRecord::paired(subdir, d, t, d_hash, t_hash, status)
    }

    fn hash(&mut self, entry: &FileEntry, outcome: &mut PairOutcome) -> Option<ContentHash> {
        outcome.hashes_computed += 1;
        match self.hasher.hash_file(&entry.path) {
            Ok(hash) => Some(hash),
            Err(err) => {
                warn!(path = %entry.path.display(), "hash failed, treating as empty: {err}");
                outcome
                    .warnings
                    .push(CompareWarning::hash_error(&entry.path, &err));
                None
            }
        }
    }
}
