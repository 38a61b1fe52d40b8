//! Optional TOML settings file, merged under the command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use dirmatch_core::{CompareConfig, CompareError};

use crate::cli::{Cli, OutputFormat};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Values a settings file may provide. Every field is optional.
///
/// ```toml
/// recursive = true
/// exclude = ["tmp", "restart"]
/// close_threshold_percent = 5
/// size_tolerance = 5242880
/// display_cap = 15
/// output = "runs.csv"
/// format = "text"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub recursive: Option<bool>,
    pub exclude: Option<Vec<String>>,
    pub size_tolerance: Option<u64>,
    pub close_threshold_percent: Option<u32>,
    pub display_cap: Option<usize>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl FileSettings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Merge flags over file settings. Flags win wherever they were given.
pub fn resolve_config(cli: &Cli, file: &FileSettings) -> Result<CompareConfig, CompareError> {
    let mut builder = CompareConfig::builder();
    builder
        .dir_d(cli.dir_d.clone())
        .dir_t(cli.dir_t.clone())
        .recursive(cli.recursive || file.recursive.unwrap_or(false));

    if !cli.exclude.is_empty() {
        builder.exclude(cli.exclude.clone());
    } else if let Some(exclude) = &file.exclude {
        builder.exclude(exclude.clone());
    }
    if let Some(output) = cli.output.as_ref().or(file.output.as_ref()) {
        builder.output(output.clone());
    }
    if let Some(cap) = cli.display_cap.or(file.display_cap) {
        builder.display_cap(cap);
    }
    if let Some(tolerance) = file.size_tolerance {
        builder.size_tolerance(tolerance);
    }
    if let Some(pct) = file.close_threshold_percent {
        builder.close_threshold_percent(pct);
    }

    builder.build().map_err(|e| CompareError::InvalidConfig {
        message: e.to_string(),
    })
}

/// Output format: flag, then file, then text.
pub fn resolve_format(cli: &Cli, file: &FileSettings) -> OutputFormat {
    cli.format.or(file.format).unwrap_or_default()
}
