//! Match records and the status taxonomy.

use std::path::PathBuf;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::entry::{ContentHash, FileEntry};

/// Classification of one record.
///
/// Variants are listed in evaluation priority. `Display` gives the plain CSV
/// token; [`Status::label`] gives the glyph-prefixed terminal form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Sizes equal and hashes equal.
    #[strum(serialize = "PERFECT")]
    Perfect,
    /// Sizes equal, hashes differ (or one could not be computed).
    #[strum(serialize = "SIZE_OK")]
    SizeOk,
    /// Sizes differ by less than the close threshold of the D-side size.
    #[strum(serialize = "CLOSE")]
    Close,
    /// Sizes differ by at least the close threshold.
    #[strum(serialize = "DIFFERENT")]
    Different,
    /// File only exists on the D-side.
    #[strum(serialize = "ONLY_D")]
    OnlyD,
    /// File only exists on the T-side.
    #[strum(serialize = "ONLY_T")]
    OnlyT,
}

impl Status {
    /// Plain token written to the CSV `status` column.
    pub fn csv_token(self) -> &'static str {
        self.into()
    }

    /// Compact terminal form.
    pub fn label(self) -> &'static str {
        match self {
            Status::Perfect => "✓ PERFECT",
            Status::SizeOk => "≈ SIZE_OK",
            Status::Close => "~ CLOSE",
            Status::Different => "✗ DIFFERENT",
            Status::OnlyD => "← ONLY_D",
            Status::OnlyT => "→ ONLY_T",
        }
    }

    /// Aggregate category this status counts towards.
    pub fn category(self) -> Category {
        match self {
            Status::Perfect => Category::Perfect,
            Status::SizeOk => Category::SizeOk,
            Status::Close => Category::Close,
            Status::Different => Category::Different,
            Status::OnlyD | Status::OnlyT => Category::Missing,
        }
    }
}

/// Aggregate grouping used by the summary and detail listings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[strum(serialize = "PERFECT")]
    Perfect,
    #[strum(serialize = "SIZE_OK")]
    SizeOk,
    #[strum(serialize = "CLOSE")]
    Close,
    #[strum(serialize = "DIFFERENT")]
    Different,
    #[strum(serialize = "MISSING")]
    Missing,
}

impl Category {
    /// Whether this category gets a detail listing.
    pub fn has_details(self) -> bool {
        self != Category::Perfect
    }
}

/// One row of the comparison: a matched pair or a lone file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Directory label (`.` for the roots).
    pub subdir: String,
    /// D-side file name.
    pub d_name: Option<CompactString>,
    /// D-side size in bytes.
    pub d_size: Option<u64>,
    /// T-side file name.
    pub t_name: Option<CompactString>,
    /// T-side size in bytes.
    pub t_size: Option<u64>,
    /// D-side content hash, absent when not computed or unreadable.
    pub d_hash: Option<ContentHash>,
    /// T-side content hash, absent when not computed or unreadable.
    pub t_hash: Option<ContentHash>,
    /// Classification.
    pub status: Status,
}

impl MatchRecord {
    /// Record for a matched pair.
    pub fn paired(
        subdir: impl Into<String>,
        d: &FileEntry,
        t: &FileEntry,
        d_hash: Option<ContentHash>,
        t_hash: Option<ContentHash>,
        status: Status,
    ) -> Self {
        Self {
            subdir: subdir.into(),
            d_name: Some(d.name.clone()),
            d_size: Some(d.size),
            t_name: Some(t.name.clone()),
            t_size: Some(t.size),
            d_hash,
            t_hash,
            status,
        }
    }

    /// Record for a file that exists only on the D-side.
    pub fn only_d(subdir: impl Into<String>, d: &FileEntry) -> Self {
        Self {
            subdir: subdir.into(),
            d_name: Some(d.name.clone()),
            d_size: Some(d.size),
            t_name: None,
            t_size: None,
            d_hash: None,
            t_hash: None,
            status: Status::OnlyD,
        }
    }

    /// Record for a file that exists only on the T-side.
    pub fn only_t(subdir: impl Into<String>, t: &FileEntry) -> Self {
        Self {
            subdir: subdir.into(),
            d_name: None,
            d_size: None,
            t_name: Some(t.name.clone()),
            t_size: Some(t.size),
            d_hash: None,
            t_hash: None,
            status: Status::OnlyT,
        }
    }

    /// Absolute size difference for matched pairs.
    pub fn size_difference(&self) -> Option<u64> {
        Some(self.d_size?.abs_diff(self.t_size?))
    }

    /// Size difference as a percentage of the D-side size.
    pub fn percent_difference(&self) -> Option<f64> {
        let d_size = self.d_size?;
        if d_size == 0 {
            return None;
        }
        Some(self.size_difference()? as f64 * 100.0 / d_size as f64)
    }

    /// Relative path of whichever file this record describes, D-side preferred.
    pub fn display_path(&self) -> PathBuf {
        let name = self
            .d_name
            .as_deref()
            .or(self.t_name.as_deref())
            .unwrap_or_default();
        if self.subdir == crate::entry::ROOT_DISPLAY {
            PathBuf::from(name)
        } else {
            PathBuf::from(&self.subdir).join(name)
        }
    }
}
