//! Final aggregate and per-category detail listings.

use std::io::Write;
use std::path::Path;

use strum::IntoEnumIterator;

use dirmatch_analyze::{ComparisonReport, DetailListing};
use dirmatch_core::{Category, MatchRecord, Status};

use crate::error::ReportError;
use crate::format::{abbreviate_size, format_bytes};

/// Renders the closing summary of a run.
#[derive(Debug, Clone)]
pub struct SummaryRenderer<'a> {
    display_cap: usize,
    csv_path: &'a Path,
}

impl<'a> SummaryRenderer<'a> {
    /// `csv_path` is what suppressed listings point the reader to.
    pub fn new(display_cap: usize, csv_path: &'a Path) -> Self {
        Self {
            display_cap,
            csv_path,
        }
    }

    /// Write the counts block followed by the detail listings.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        report: &ComparisonReport,
    ) -> Result<(), ReportError> {
        let summary = &report.summary;

        writeln!(out)?;
        writeln!(out, "Summary")?;
        writeln!(out, "  Files compared:     {}", summary.total)?;
        for status in Status::iter() {
            writeln!(out, "  {:<19} {}", status.label(), summary.count(status))?;
        }
        writeln!(out, "  Directories:        {}", summary.directories)?;
        writeln!(out, "  D bytes:            {}", format_bytes(summary.d_bytes))?;
        writeln!(out, "  T bytes:            {}", format_bytes(summary.t_bytes))?;
        if report.has_warnings() {
            writeln!(out, "  Warnings:           {}", report.warnings.len())?;
        }

        for category in Category::iter().filter(|c| c.has_details()) {
            self.render_details(out, report, category)?;
        }

        if summary.total > 0 && summary.all_perfect() {
            writeln!(out)?;
            writeln!(out, "All files identical.")?;
        }
        Ok(())
    }

    fn render_details<W: Write>(
        &self,
        out: &mut W,
        report: &ComparisonReport,
        category: Category,
    ) -> Result<(), ReportError> {
        let count = report.summary.category_count(category);
        if count == 0 {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "{category} ({count}):")?;
        match report.details(category, self.display_cap) {
            DetailListing::Listed(records) => {
                for record in records {
                    writeln!(out, "  {}", detail_line(record))?;
                }
            }
            DetailListing::Suppressed { count } => {
                writeln!(
                    out,
                    "  {count} entries, more than {}; see {}",
                    self.display_cap,
                    self.csv_path.display()
                )?;
            }
        }
        Ok(())
    }
}

fn detail_line(record: &MatchRecord) -> String {
    let path = record.display_path();
    match record.status {
        Status::OnlyD => format!("{} (D only, {})", path.display(), size_text(record.d_size)),
        Status::OnlyT => format!("{} (T only, {})", path.display(), size_text(record.t_size)),
        _ => {
            let renamed = match (&record.d_name, &record.t_name) {
                (Some(d), Some(t)) if d != t => format!(" -> {t}"),
                _ => String::new(),
            };
            let percent = record
                .percent_difference()
                .map(|p| format!(", {p:.2}%"))
                .unwrap_or_default();
            format!(
                "{}{renamed} ({} vs {}{percent})",
                path.display(),
                size_text(record.d_size),
                size_text(record.t_size),
            )
        }
    }
}

fn size_text(size: Option<u64>) -> String {
    size.map(abbreviate_size).unwrap_or_default()
}
