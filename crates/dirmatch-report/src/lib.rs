//! Output for dirmatch runs.
//!
//! - [`TableRenderer`] prints one side-by-side table per directory pair as
//!   the comparison proceeds
//! - [`CsvSink`] appends one row per match record to the CSV file
//! - [`SummaryRenderer`] prints the closing counts and the capped detail
//!   listings

mod csv_sink;
mod error;
mod format;
mod summary;
mod table;

pub use csv_sink::{CSV_HEADER, CsvSink};
pub use error::ReportError;
pub use format::{SIZE_WIDTH, abbreviate_size, format_bytes, size_cell, truncate};
pub use summary::SummaryRenderer;
pub use table::{NAME_WIDTH, TableRenderer};
