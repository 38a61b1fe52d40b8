//! Comparison configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Largest absolute size difference (exclusive) accepted by the best-size pass: 5 MiB.
pub const SIZE_MATCH_TOLERANCE: u64 = 5 * 1024 * 1024;

/// Size difference, in percent of the D-side size, below which a pair is `CLOSE`.
pub const CLOSE_THRESHOLD_PERCENT: u32 = 5;

/// Number of entries a detail listing may show before it points at the CSV instead.
pub const DEFAULT_DISPLAY_CAP: usize = 15;

/// CSV file written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Configuration for a tree comparison run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CompareConfig {
    /// Root of the D-side tree.
    pub dir_d: PathBuf,

    /// Root of the T-side tree.
    pub dir_t: PathBuf,

    /// Compare every common subdirectory instead of the roots only.
    #[builder(default = "false")]
    #[serde(default)]
    pub recursive: bool,

    /// Substrings that exclude a subdirectory when found in its relative path.
    #[builder(default)]
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Best-size pass tolerance in bytes (exclusive).
    #[builder(default = "SIZE_MATCH_TOLERANCE")]
    #[serde(default = "default_size_tolerance")]
    pub size_tolerance: u64,

    /// Percentage of the D-side size separating `CLOSE` from `DIFFERENT`.
    #[builder(default = "CLOSE_THRESHOLD_PERCENT")]
    #[serde(default = "default_close_threshold")]
    pub close_threshold_percent: u32,

    /// Maximum entries shown per detail category.
    #[builder(default = "DEFAULT_DISPLAY_CAP")]
    #[serde(default = "default_display_cap")]
    pub display_cap: usize,

    /// CSV output path.
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT)")]
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_size_tolerance() -> u64 {
    SIZE_MATCH_TOLERANCE
}

fn default_close_threshold() -> u32 {
    CLOSE_THRESHOLD_PERCENT
}

fn default_display_cap() -> usize {
    DEFAULT_DISPLAY_CAP
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl CompareConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        for (name, root) in [("D-side", &self.dir_d), ("T-side", &self.dir_t)] {
            match root {
                Some(root) if root.as_os_str().is_empty() => {
                    return Err(format!("{name} root path cannot be empty"));
                }
                None => return Err(format!("{name} root path is required")),
                _ => {}
            }
        }
        if let Some(0) = self.display_cap {
            return Err("Display cap must be at least 1".to_string());
        }
        if let Some(pct) = self.close_threshold_percent
            && !(1..=100).contains(&pct)
        {
            return Err(format!("Close threshold must be within 1..=100, got {pct}"));
        }
        if let Some(0) = self.size_tolerance {
            return Err("Size tolerance must be at least 1 byte".to_string());
        }
        Ok(())
    }
}

impl CompareConfig {
    /// Create a new config builder.
    pub fn builder() -> CompareConfigBuilder {
        CompareConfigBuilder::default()
    }

    /// Create a root-only config with default thresholds.
    pub fn new(dir_d: impl Into<PathBuf>, dir_t: impl Into<PathBuf>) -> Self {
        Self {
            dir_d: dir_d.into(),
            dir_t: dir_t.into(),
            recursive: false,
            exclude: Vec::new(),
            size_tolerance: SIZE_MATCH_TOLERANCE,
            close_threshold_percent: CLOSE_THRESHOLD_PERCENT,
            display_cap: DEFAULT_DISPLAY_CAP,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Check whether a relative directory path matches an exclusion substring.
    ///
    /// The test is a plain case-sensitive substring search, so `cache` also
    /// excludes `cachex` and `data/cache/logs`.
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.exclude
            .iter()
            .filter(|pattern| !pattern.is_empty())
            .any(|pattern| relative_path.contains(pattern.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = CompareConfig::builder()
            .dir_d("/runs/dev")
            .dir_t("/runs/test")
            .recursive(true)
            .exclude(vec!["cache".to_string()])
            .build()
            .unwrap();

        assert_eq!(config.dir_d, PathBuf::from("/runs/dev"));
        assert!(config.recursive);
        assert_eq!(config.size_tolerance, SIZE_MATCH_TOLERANCE);
        assert_eq!(config.display_cap, 15);
        assert_eq!(config.output, PathBuf::from("output.csv"));
    }

    #[test]
    fn test_config_builder_requires_roots() {
        let err = CompareConfig::builder().dir_d("/runs/dev").build();
        assert!(err.is_err());

        let err = CompareConfig::builder().dir_d("").dir_t("/t").build();
        assert!(err.is_err());
    }

    #[test]
    fn test_config_builder_rejects_bad_thresholds() {
        let zero_cap = CompareConfig::builder()
            .dir_d("/d")
            .dir_t("/t")
            .display_cap(0usize)
            .build();
        assert!(zero_cap.is_err());

        let pct = CompareConfig::builder()
            .dir_d("/d")
            .dir_t("/t")
            .close_threshold_percent(101u32)
            .build();
        assert!(pct.is_err());
    }

    #[test]
    fn test_is_excluded_substring() {
        let mut config = CompareConfig::new("/d", "/t");
        config.exclude = vec!["cache".to_string(), String::new()];

        assert!(config.is_excluded("data/cache/logs"));
        assert!(config.is_excluded("data/cachex"));
        assert!(!config.is_excluded("data/Cache"));
        assert!(!config.is_excluded("atmos"));
    }
}
