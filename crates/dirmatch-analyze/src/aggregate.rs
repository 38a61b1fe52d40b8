//! Aggregate statistics over match records.

use serde::{Deserialize, Serialize};

use dirmatch_core::{Category, CompareWarning, MatchRecord, Status};

/// Per-directory subtotal shown under each table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtotal {
    pub total: u64,
    pub perfect: u64,
}

impl Subtotal {
    /// Count the records of one directory.
    pub fn from_records(records: &[MatchRecord]) -> Self {
        Self {
            total: records.len() as u64,
            perfect: records
                .iter()
                .filter(|r| r.status == Status::Perfect)
                .count() as u64,
        }
    }
}

/// Counts across the whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Total number of records.
    pub total: u64,
    pub perfect: u64,
    pub size_ok: u64,
    pub close: u64,
    pub different: u64,
    pub only_d: u64,
    pub only_t: u64,
    /// Directory pairs compared.
    pub directories: u64,
    /// Bytes of all D-side files seen.
    pub d_bytes: u64,
    /// Bytes of all T-side files seen.
    pub t_bytes: u64,
    /// Files hashed.
    pub hashes_computed: u64,
}

impl ComparisonSummary {
    /// Create empty counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record.
    pub fn record(&mut self, record: &MatchRecord) {
        self.total += 1;
        *self.slot(record.status) += 1;
        self.d_bytes += record.d_size.unwrap_or(0);
        self.t_bytes += record.t_size.unwrap_or(0);
    }

    /// Number of records with the given status.
    pub fn count(&self, status: Status) -> u64 {
        match status {
            Status::Perfect => self.perfect,
            Status::SizeOk => self.size_ok,
            Status::Close => self.close,
            Status::Different => self.different,
            Status::OnlyD => self.only_d,
            Status::OnlyT => self.only_t,
        }
    }

    /// Number of records in the given category.
    pub fn category_count(&self, category: Category) -> u64 {
        match category {
            Category::Perfect => self.perfect,
            Category::SizeOk => self.size_ok,
            Category::Close => self.close,
            Category::Different => self.different,
            Category::Missing => self.missing(),
        }
    }

    /// Records without a counterpart on the other side.
    pub fn missing(&self) -> u64 {
        self.only_d + self.only_t
    }

    /// Whether every record is `PERFECT`.
    pub fn all_perfect(&self) -> bool {
        self.perfect == self.total
    }

    fn slot(&mut self, status: Status) -> &mut u64 {
        match status {
            Status::Perfect => &mut self.perfect,
            Status::SizeOk => &mut self.size_ok,
            Status::Close => &mut self.close,
            Status::Different => &mut self.different,
            Status::OnlyD => &mut self.only_d,
            Status::OnlyT => &mut self.only_t,
        }
    }
}

/// Detail listing of one category, bounded by the display cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailListing<'a> {
    /// Category has at most `cap` records.
    Listed(Vec<&'a MatchRecord>),
    /// Category is too large to print; only the size is kept.
    Suppressed { count: usize },
}

/// Ordered records of a full run plus their aggregate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Records in processing order.
    pub records: Vec<MatchRecord>,
    /// Aggregate counts.
    pub summary: ComparisonSummary,
    /// Non-fatal problems from enumeration and hashing.
    pub warnings: Vec<CompareWarning>,
}

impl ComparisonReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the records of one directory pair.
    pub fn extend(&mut self, records: Vec<MatchRecord>) {
        self.summary.directories += 1;
        for record in &records {
            self.summary.record(record);
        }
        self.records.extend(records);
    }

    /// Records of a category, in processing order.
    pub fn records_in(&self, category: Category) -> impl Iterator<Item = &MatchRecord> {
        self.records
            .iter()
            .filter(move |r| r.status.category() == category)
    }

    /// Detail listing of a category, suppressed once it holds more than `cap` records.
    pub fn details(&self, category: Category, cap: usize) -> DetailListing<'_> {
        let records: Vec<&MatchRecord> = self.records_in(category).collect();
        if records.len() > cap {
            DetailListing::Suppressed {
                count: records.len(),
            }
        } else {
            DetailListing::Listed(records)
        }
    }

    /// Whether any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirmatch_core::FileEntry;

    fn only_d(name: &str) -> MatchRecord {
        MatchRecord::only_d(".", &FileEntry::new(name, 10, name))
    }

    fn perfect(name: &str) -> MatchRecord {
        let entry = FileEntry::new(name, 100, name);
        MatchRecord::paired(".", &entry, &entry, None, None, Status::Perfect)
    }

    #[test]
    fn test_summary_counts() {
        let mut report = ComparisonReport::new();
        report.extend(vec![perfect("a"), only_d("b")]);
        report.extend(vec![perfect("c")]);

        let s = &report.summary;
        assert_eq!(s.total, 3);
        assert_eq!(s.perfect, 2);
        assert_eq!(s.missing(), 1);
        assert_eq!(s.category_count(Category::Missing), 1);
        assert_eq!(s.directories, 2);
        assert_eq!(s.d_bytes, 210);
        assert_eq!(s.t_bytes, 200);
        assert!(!s.all_perfect());
    }

    #[test]
    fn test_subtotal() {
        let records = vec![perfect("a"), only_d("b"), perfect("c")];
        let subtotal = Subtotal::from_records(&records);
        assert_eq!(subtotal, Subtotal { total: 3, perfect: 2 });
    }

    #[test]
    fn test_details_cap() {
        let mut report = ComparisonReport::new();
        report.extend((0..15).map(|i| only_d(&format!("f{i}"))).collect());

        match report.details(Category::Missing, 15) {
            DetailListing::Listed(records) => assert_eq!(records.len(), 15),
            other => panic!("expected listing, got {other:?}"),
        }

        report.extend(vec![only_d("f15")]);
        assert_eq!(
            report.details(Category::Missing, 15),
            DetailListing::Suppressed { count: 16 }
        );
    }
}
