//! File matching and classification for dirmatch.
//!
//! This crate turns directory pairs into match records:
//!
//! - **Matching** - pair files by exact name, then by closest size
//! - **Classification** - assign each pair a [`Status`] from sizes and hashes
//! - **Aggregation** - count statuses and build capped detail listings
//!
//! # Matching
//!
//! Each directory pair goes through three ordered passes:
//!
//! 1. Exact-name pass: same-named files are paired and hashed
//! 2. Best-size pass: each remaining D-side file takes the remaining T-side
//!    file with the smallest size difference below 5 MiB (first found wins ties)
//! 3. Leftover pass: unpaired T-side files become `ONLY_T`
//!
//! Files without a partner are never hashed.
//!
//! ```rust,ignore
//! use dirmatch_analyze::TreeComparator;
//! use dirmatch_scan::{CompareConfig, TreeEnumerator};
//!
//! let config = CompareConfig::new("/runs/dev", "/runs/test");
//! let enumeration = TreeEnumerator::new(&config).enumerate().unwrap();
//!
//! let report = TreeComparator::new(&config).compare_all(&enumeration.pairs);
//! println!("{} of {} files identical", report.summary.perfect, report.summary.total);
//! ```

mod aggregate;
mod classify;
mod compare;
mod hasher;
mod matcher;

pub use aggregate::{ComparisonReport, ComparisonSummary, DetailListing, Subtotal};
pub use classify::Thresholds;
pub use compare::TreeComparator;
pub use hasher::{Blake3Hasher, ContentHasher};
pub use matcher::{FileMatcher, PairOutcome};

// Re-export core types
pub use dirmatch_core::{Category, ContentHash, DirectoryPair, FileEntry, MatchRecord, Status};
