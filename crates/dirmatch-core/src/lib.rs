//! Core types for dirmatch.
//!
//! This crate provides the data model shared by the scanning, matching and
//! reporting crates: file entries, directory pairs, match records, the status
//! taxonomy and the comparison configuration.

mod config;
mod entry;
mod error;
mod order;
mod record;

pub use config::{
    CLOSE_THRESHOLD_PERCENT, CompareConfig, CompareConfigBuilder, CompareConfigBuilderError,
    DEFAULT_DISPLAY_CAP, DEFAULT_OUTPUT, SIZE_MATCH_TOLERANCE,
};
pub use entry::{ContentHash, DirectoryPair, FileEntry, ROOT_DISPLAY};
pub use error::{CompareError, CompareWarning, WarningKind};
pub use order::version_cmp;
pub use record::{Category, MatchRecord, Status};
