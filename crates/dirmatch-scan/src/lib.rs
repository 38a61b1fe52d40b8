//! Directory pair enumeration for dirmatch.
//!
//! This crate walks the D-side tree and produces the ordered list of
//! directories to compare, each paired with its T-side counterpart and the
//! regular files found directly inside both.
//!
//! # Overview
//!
//! - **Root-only mode** compares the two roots and nothing else
//! - **Recursive mode** compares the roots first, then every directory of D
//!   that also exists in T, in version-aware order
//! - **Exclusions** drop directories whose relative path contains a pattern
//! - **Tolerant** traversal: unreadable or vanishing directories count as empty
//!
//! # Example
//!
//! ```rust,no_run
//! use dirmatch_scan::{CompareConfig, TreeEnumerator};
//!
//! let mut config = CompareConfig::new("/runs/dev", "/runs/test");
//! config.recursive = true;
//!
//! let enumeration = TreeEnumerator::new(&config).enumerate().unwrap();
//! for pair in &enumeration.pairs {
//!     println!("{}: {} files", pair.display_name(), pair.file_count());
//! }
//! ```

mod enumerator;
mod listing;
mod stats;

pub use enumerator::{Enumeration, TreeEnumerator};
pub use listing::{list_files, list_subdirectories};
pub use stats::EnumerationStats;

// Re-export core types for convenience
pub use dirmatch_core::{CompareConfig, CompareError, CompareWarning, DirectoryPair, FileEntry};
