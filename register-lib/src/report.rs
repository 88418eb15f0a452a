//! Review summary and the combined CSV export.
//!
//! The export has two sections separated by a blank line: a `SUMMARY REPORT`
//! with the file count and percentage OK, and a `FULL REPORT` table with one
//! fully quoted row per record.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;
use std::path::Path;

use crate::cell::CellValue;
use crate::error::Result;
use crate::record::DocumentRecord;
use crate::utils::get_utc_iso_datetime;

/// File name the export is offered under
pub const DEFAULT_REPORT_FILE: &str = "QA_QC_Report.csv";

pub const SUMMARY_SECTION_TITLE: &str = "SUMMARY REPORT";
pub const FULL_SECTION_TITLE: &str = "FULL REPORT";

/// Rendered in place of a cell that was absent from the register
pub const MISSING_PLACEHOLDER: &str = "MISSING";
/// Rendered in place of an empty mismatch list
pub const NO_MISMATCHES_PLACEHOLDER: &str = "NONE";
/// Rendered as the percentage when there is nothing to count
pub const NO_DATA_PLACEHOLDER: &str = "N/A";

pub const REPORT_HEADERS: [&str; 11] = [
    "Sheet Number",
    "Sheet Name",
    "File Name",
    "Revision Code",
    "Revision Date",
    "Suitability Code",
    "Stage Description",
    "Document Naming Convention",
    "Comments",
    "Result",
    "Mismatched Items",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub total_files: usize,
    pub ok_count: usize,
}

impl ReportSummary {
    pub fn from_records(records: &[DocumentRecord]) -> Self {
        ReportSummary {
            total_files: records.len(),
            ok_count: records.iter().filter(|record| record.is_ok()).count(),
        }
    }

    /// Share of records marked OK, or `None` when there are no records
    pub fn percent_ok(&self) -> Option<f64> {
        if self.total_files == 0 {
            return None;
        }
        Some(self.ok_count as f64 / self.total_files as f64 * 100.0)
    }

    /// Percentage with two decimals, e.g. `70.00%`, or `N/A` without records.
    ///
    /// Halves round up, so 1 of 32 reads `3.13%`.
    pub fn percent_ok_label(&self) -> String {
        match self.percent_ok() {
            Some(percent) => format!("{:.2}%", (percent * 100.0).round() / 100.0),
            None => NO_DATA_PLACEHOLDER.to_string(),
        }
    }
}

/// Serialize the summary and every record into the combined CSV report
pub fn export_report(records: &[DocumentRecord]) -> Result<String> {
    let summary = ReportSummary::from_records(records);
    let mut output: Vec<u8> = Vec::new();

    writeln!(output, "{SUMMARY_SECTION_TITLE}")?;
    {
        let mut summary_writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut output);
        summary_writer.write_record(["Total Files", "Percentage OK"])?;
        summary_writer.write_record([summary.total_files.to_string(), summary.percent_ok_label()])?;
        summary_writer.flush()?;
    }
    writeln!(output)?;

    writeln!(output, "{FULL_SECTION_TITLE}")?;
    {
        let mut table_writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut output);
        table_writer.write_record(REPORT_HEADERS)?;
        for record in records {
            table_writer.write_record(record_fields(record))?;
        }
        table_writer.flush()?;
    }

    Ok(String::from_utf8(output)?)
}

/// Write the combined CSV report to `path`
pub fn write_report(records: &[DocumentRecord], path: &Path) -> Result<()> {
    let report = export_report(records)?;
    std::fs::write(path, report)?;
    Ok(())
}

fn record_fields(record: &DocumentRecord) -> [String; 11] {
    let mismatches = if record.mismatches().is_empty() {
        NO_MISMATCHES_PLACEHOLDER.to_string()
    } else {
        record.mismatch_summary()
    };

    [
        cell_field(&record.sheet_number),
        cell_field(&record.sheet_name),
        cell_field(&record.file_name),
        cell_field(&record.revision_code),
        cell_field(&record.revision_date),
        cell_field(&record.suitability_code),
        cell_field(&record.stage_description),
        record.document_naming_convention.label().to_string(),
        record.comments.trim().to_string(),
        record.result().label().to_string(),
        mismatches,
    ]
}

fn cell_field(value: &CellValue) -> String {
    if value.is_absent() {
        return MISSING_PLACEHOLDER.to_string();
    }
    value.to_string().trim().to_string()
}

/// Format the rows needing revision into a structured string for logging.
///
/// Row numbers are spreadsheet row numbers: the header is row 1, so the
/// first record is row 2.
pub fn format_revision_report(records: &[DocumentRecord]) -> String {
    let flagged: Vec<(usize, &DocumentRecord)> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| !record.mismatches().is_empty())
        .collect();

    let mut report = String::new();
    report.push_str("=============================\n");
    report.push_str(&format!("Generated at: {}\n\n", get_utc_iso_datetime()));
    report.push_str(&format!(
        "Total rows needing revision: {} of {}\n\n",
        flagged.len(),
        records.len()
    ));

    for (index, record) in flagged {
        report.push_str(&format!(
            "Row {}: {} mismatch(es)\n",
            index + 2,
            record.mismatches().len()
        ));
        report.push_str(&format!("Sheet number: {}\n", record.sheet_number));
        report.push_str(&format!("File name: {}\n", record.file_name));
        report.push_str("Mismatched items:\n");
        for reason in record.mismatches() {
            report.push_str(&format!("  - {}\n", reason));
        }
        report.push('\n');
    }

    report
}
