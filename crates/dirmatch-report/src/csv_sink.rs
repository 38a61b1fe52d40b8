//! CSV output of match records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use dirmatch_core::MatchRecord;

use crate::error::ReportError;

/// Column names, in order.
pub const CSV_HEADER: [&str; 8] = [
    "subdir", "d_file", "d_size", "t_file", "t_size", "d_hash", "t_hash", "status",
];

/// One CSV row. Absent values serialize as empty fields.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    subdir: &'a str,
    d_file: &'a str,
    d_size: Option<u64>,
    t_file: &'a str,
    t_size: Option<u64>,
    d_hash: Option<String>,
    t_hash: Option<String>,
    status: &'static str,
}

impl<'a> From<&'a MatchRecord> for CsvRow<'a> {
    fn from(record: &'a MatchRecord) -> Self {
        Self {
            subdir: &record.subdir,
            d_file: record.d_name.as_deref().unwrap_or_default(),
            d_size: record.d_size,
            t_file: record.t_name.as_deref().unwrap_or_default(),
            t_size: record.t_size,
            d_hash: record.d_hash.map(|h| h.to_hex()),
            t_hash: record.t_hash.map(|h| h.to_hex()),
            status: record.status.csv_token(),
        }
    }
}

/// Appends records to a CSV stream. The header is written on creation, so
/// a run without records still produces a valid file.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: u64,
}

impl CsvSink<File> {
    /// Create (or truncate) the CSV file at `path`.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        let file = File::create(path).map_err(|source| ReportError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened CSV output");
        Self::new(file)
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap a writer and emit the header row.
    pub fn new(inner: W) -> Result<Self, ReportError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(CSV_HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    /// Append one row per record.
    pub fn write_records(&mut self, records: &[MatchRecord]) -> Result<(), ReportError> {
        for record in records {
            self.writer.serialize(CsvRow::from(record))?;
            self.rows += 1;
        }
        Ok(())
    }

    /// Number of data rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush buffered rows to the underlying writer.
    pub fn flush(&mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W, ReportError> {
        self.writer
            .into_inner()
            .map_err(|e| ReportError::Io(e.into_error()))
    }
}
