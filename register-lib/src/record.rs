use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cell::CellValue;

/// Reviewer verdict on whether a file name follows the naming convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NamingConvention {
    #[default]
    #[serde(rename = "OK", alias = "Ok", alias = "ok")]
    Ok,
    #[serde(
        rename = "Not correct",
        alias = "NotCorrect",
        alias = "Not Correct",
        alias = "not correct"
    )]
    NotCorrect,
}

impl NamingConvention {
    pub fn label(&self) -> &'static str {
        match self {
            NamingConvention::Ok => "OK",
            NamingConvention::NotCorrect => "Not correct",
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewResult {
    #[default]
    Pending,
    Ok,
    PleaseRevise,
}

impl ReviewResult {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewResult::Pending => "Pending",
            ReviewResult::Ok => "OK",
            ReviewResult::PleaseRevise => "Please Revise",
        }
    }
}

impl fmt::Display for ReviewResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One failed check on a register row.
///
/// Variants are declared in the order the checks run, which is also the
/// order they are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MismatchReason {
    MissingData,
    FileName,
    RevisionCode,
    RevisionDate,
    SuitabilityCode,
    StageDescription,
    RevisionDescription,
    DocumentNamingConvention,
    Comments,
}

impl MismatchReason {
    pub fn label(&self) -> &'static str {
        match self {
            MismatchReason::MissingData => "Missing Data",
            MismatchReason::FileName => "File Name",
            MismatchReason::RevisionCode => "Revision Code",
            MismatchReason::RevisionDate => "Revision Date",
            MismatchReason::SuitabilityCode => "Suitability Code",
            MismatchReason::StageDescription => "Stage Description",
            MismatchReason::RevisionDescription => "Revision Description",
            MismatchReason::DocumentNamingConvention => "Document Naming Convention",
            MismatchReason::Comments => "Comments",
        }
    }
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single row of the document register, normalized for comparison
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRecord {
    pub sheet_number: CellValue,
    pub sheet_name: CellValue,
    pub file_name: CellValue,
    pub revision_code: CellValue,
    pub revision_date: CellValue,
    pub suitability_code: CellValue,
    pub stage_description: CellValue,
    pub document_naming_convention: NamingConvention,
    pub comments: String,
    /// Raw trimmed text, compared without case or whitespace normalization
    pub revision_description: Option<String>,
    result: ReviewResult,
    mismatches: Vec<MismatchReason>,
}

impl DocumentRecord {
    /// Create a record in its freshly loaded state
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sheet_number: CellValue,
        sheet_name: CellValue,
        file_name: CellValue,
        revision_code: CellValue,
        revision_date: CellValue,
        suitability_code: CellValue,
        stage_description: CellValue,
        revision_description: Option<String>,
    ) -> Self {
        DocumentRecord {
            sheet_number,
            sheet_name,
            file_name,
            revision_code,
            revision_date,
            suitability_code,
            stage_description,
            document_naming_convention: NamingConvention::Ok,
            comments: String::new(),
            revision_description,
            result: ReviewResult::Pending,
            mismatches: Vec::new(),
        }
    }

    pub fn result(&self) -> ReviewResult {
        self.result
    }

    pub fn mismatches(&self) -> &[MismatchReason] {
        &self.mismatches
    }

    pub fn is_ok(&self) -> bool {
        self.result == ReviewResult::Ok
    }

    /// Mismatch labels joined the way they are displayed and exported
    pub fn mismatch_summary(&self) -> String {
        self.mismatches
            .iter()
            .map(MismatchReason::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Store the outcome of a validation pass; result and mismatches always move together
    pub(crate) fn set_outcome(&mut self, mismatches: Vec<MismatchReason>) {
        self.result = if mismatches.is_empty() {
            ReviewResult::Ok
        } else {
            ReviewResult::PleaseRevise
        };
        self.mismatches = mismatches;
    }
}

/// The loaded register. Replaced as a whole on every load, never merged.
#[derive(Debug, Default)]
pub struct RecordSet {
    version: u64,
    records: Vec<DocumentRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of loads this set has gone through
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [DocumentRecord] {
        &mut self.records
    }

    pub fn get(&self, row: usize) -> Option<&DocumentRecord> {
        self.records.get(row)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn replace(&mut self, records: Vec<DocumentRecord>) {
        self.records = records;
        self.version += 1;
    }
}
