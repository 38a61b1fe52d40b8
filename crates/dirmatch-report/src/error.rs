//! Error types for report output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors writing the terminal report or the CSV file.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The CSV file could not be created.
    #[error("Cannot create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a CSV row failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Writing to the output stream failed.
    #[error("Output write failed: {0}")]
    Io(#[from] std::io::Error),
}
