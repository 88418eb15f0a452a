use crate::cell::CellValue;
use crate::error::{RegisterError, Result};
use crate::expected::ExpectedValues;
use crate::normalizer::normalize_text_str;
use crate::overrides::RowOverride;
use crate::record::{DocumentRecord, RecordSet};
use crate::report::{ReportSummary, export_report};
use crate::row_builder::build_records;
use crate::validation::validate_record;
use crate::workbook::read_sheet_rows;

/// A review of one document register.
///
/// Owns the loaded record set and exposes the review as discrete commands:
/// load, apply reviewer overrides, validate, export. Every command takes the
/// session mutably or immutably as a whole, so no two of them overlap.
#[derive(Debug, Default)]
pub struct ReviewSession {
    records: RecordSet,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a workbook, replacing every previously loaded record.
    ///
    /// Returns the number of records loaded.
    pub fn load_document(&mut self, bytes: Vec<u8>, sheet_name: Option<&str>) -> Result<usize> {
        let rows = read_sheet_rows(bytes, sheet_name)?;
        Ok(self.load_rows(&rows))
    }

    /// Load already-read rows (header first), replacing every previously loaded record
    pub fn load_rows(&mut self, rows: &[Vec<CellValue>]) -> usize {
        self.records.replace(build_records(rows));
        self.records.len()
    }

    /// Apply reviewer edits. Nothing is changed if any override targets a missing row.
    pub fn apply_overrides(&mut self, overrides: &[RowOverride]) -> Result<()> {
        let row_count = self.records.len();
        if let Some(invalid) = overrides.iter().find(|o| o.row >= row_count) {
            return Err(RegisterError::RowOutOfRange {
                row: invalid.row,
                row_count,
            });
        }

        let records = self.records.records_mut();
        for row_override in overrides {
            let record = &mut records[row_override.row];
            if let Some(convention) = row_override.document_naming_convention {
                record.document_naming_convention = convention;
            }
            if let Some(comments) = &row_override.comments {
                record.comments = normalize_text_str(comments);
            }
        }

        Ok(())
    }

    /// Validate every record against the expected values and return the summary
    pub fn validate(&mut self, expected: &ExpectedValues) -> ReportSummary {
        let expectations = expected.normalized();
        for record in self.records.records_mut() {
            let mismatches = validate_record(record, &expectations);
            record.set_outcome(mismatches);
        }
        self.summary()
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_records(self.records.records())
    }

    pub fn export_report(&self) -> Result<String> {
        export_report(self.records.records())
    }

    pub fn records(&self) -> &[DocumentRecord] {
        self.records.records()
    }

    pub fn record(&self, row: usize) -> Option<&DocumentRecord> {
        self.records.get(row)
    }

    /// Number of loads performed in this session
    pub fn version(&self) -> u64 {
        self.records.version()
    }
}
