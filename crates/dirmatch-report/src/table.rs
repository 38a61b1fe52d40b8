//! Live side-by-side table, one per directory pair.

use std::io::Write;

use dirmatch_analyze::Subtotal;
use dirmatch_core::MatchRecord;

use crate::error::ReportError;
use crate::format::{SIZE_WIDTH, size_cell, truncate};

/// Width of the file name columns.
pub const NAME_WIDTH: usize = 36;

/// Writes one table per directory pair as the comparison proceeds.
pub struct TableRenderer<W: Write> {
    out: W,
    tables: u64,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, tables: 0 }
    }

    /// Render the records of one directory followed by its subtotal line.
    pub fn render_pair(&mut self, label: &str, records: &[MatchRecord]) -> Result<(), ReportError> {
        if self.tables > 0 {
            writeln!(self.out)?;
        }
        self.tables += 1;

        writeln!(self.out, "== {label} ==")?;
        writeln!(
            self.out,
            "{:<NAME_WIDTH$} {:>SIZE_WIDTH$}  {:<NAME_WIDTH$} {:>SIZE_WIDTH$}  Status",
            "D file", "D size", "T file", "T size",
        )?;
        for record in records {
            writeln!(self.out, "{}", row(record))?;
        }

        let subtotal = Subtotal::from_records(records);
        writeln!(
            self.out,
            "Total={}, Perfect={}",
            subtotal.total, subtotal.perfect
        )?;
        Ok(())
    }

    /// Number of tables rendered so far.
    pub fn tables(&self) -> u64 {
        self.tables
    }

    pub fn flush(&mut self) -> Result<(), ReportError> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn name_cell(name: Option<&str>) -> String {
    let name = truncate(name.unwrap_or_default(), NAME_WIDTH);
    format!("{name:<NAME_WIDTH$}")
}

fn row(record: &MatchRecord) -> String {
    format!(
        "{} {}  {} {}  {}",
        name_cell(record.d_name.as_deref()),
        size_cell(record.d_size),
        name_cell(record.t_name.as_deref()),
        size_cell(record.t_size),
        record.status.label(),
    )
}
