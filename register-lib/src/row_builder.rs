use crate::cell::CellValue;
use crate::normalizer::{normalize_date, normalize_text};
use crate::record::DocumentRecord;

/// Register columns, by position in the sheet
pub const SHEET_NUMBER_COLUMN: usize = 0;
pub const SHEET_NAME_COLUMN: usize = 1;
pub const FILE_NAME_COLUMN: usize = 2;
pub const REVISION_CODE_COLUMN: usize = 3;
pub const REVISION_DATE_COLUMN: usize = 4;
pub const SUITABILITY_CODE_COLUMN: usize = 5;
pub const STAGE_DESCRIPTION_COLUMN: usize = 6;
/// Optional; registers that track a revision description keep it after the stage
pub const REVISION_DESCRIPTION_COLUMN: usize = 7;

/// Build one record per data row. The first row is the header and is skipped.
///
/// Rows are kept in sheet order and blank rows are not filtered out: they
/// become records with empty fields that validation reports as missing data.
pub fn build_records(rows: &[Vec<CellValue>]) -> Vec<DocumentRecord> {
    rows.iter().skip(1).map(|row| build_record(row)).collect()
}

pub fn build_record(row: &[CellValue]) -> DocumentRecord {
    let cell = |column: usize| row.get(column).cloned().unwrap_or(CellValue::Empty);

    let revision_description = row
        .get(REVISION_DESCRIPTION_COLUMN)
        .map(|value| value.to_string().trim().to_string())
        .filter(|value| !value.is_empty());

    DocumentRecord::new(
        normalize_text(&cell(SHEET_NUMBER_COLUMN)),
        normalize_text(&cell(SHEET_NAME_COLUMN)),
        normalize_text(&cell(FILE_NAME_COLUMN)),
        normalize_text(&cell(REVISION_CODE_COLUMN)),
        normalize_date(&cell(REVISION_DATE_COLUMN)),
        normalize_text(&cell(SUITABILITY_CODE_COLUMN)),
        normalize_text(&cell(STAGE_DESCRIPTION_COLUMN)),
        revision_description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NamingConvention, ReviewResult};

    fn text_row(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::text(*v)).collect()
    }

    #[test]
    fn test_header_row_is_discarded() {
        let rows = vec![
            text_row(&["Sheet Number", "Sheet Name", "File Name"]),
            text_row(&["a1-001", "level 1", "a1-001 - level 1"]),
        ];
        let records = build_records(&rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sheet_number, CellValue::text("A1-001"));
    }

    #[test]
    fn test_columns_map_positionally_and_normalize() {
        let row = text_row(&[
            " a1-001 ",
            "level   1",
            "a1-001 - level 1",
            "c01",
            "13.MAR.2025",
            "s2",
            "for  information",
        ]);
        let record = build_record(&row);

        assert_eq!(record.sheet_number, CellValue::text("A1-001"));
        assert_eq!(record.sheet_name, CellValue::text("LEVEL 1"));
        assert_eq!(record.file_name, CellValue::text("A1-001 - LEVEL 1"));
        assert_eq!(record.revision_code, CellValue::text("C01"));
        assert_eq!(record.revision_date, CellValue::text("13/03/2025"));
        assert_eq!(record.suitability_code, CellValue::text("S2"));
        assert_eq!(record.stage_description, CellValue::text("FOR INFORMATION"));
        assert_eq!(record.revision_description, None);
    }

    #[test]
    fn test_defaults_are_attached() {
        let record = build_record(&text_row(&["A1-001"]));
        assert_eq!(record.document_naming_convention, NamingConvention::Ok);
        assert_eq!(record.comments, "");
        assert_eq!(record.result(), ReviewResult::Pending);
        assert!(record.mismatches().is_empty());
    }

    #[test]
    fn test_missing_columns_become_empty() {
        let record = build_record(&text_row(&["A1-001", "LEVEL 1"]));
        assert_eq!(record.file_name, CellValue::Empty);
        assert_eq!(record.stage_description, CellValue::Empty);
    }

    #[test]
    fn test_numeric_cells_pass_through() {
        let row = vec![
            CellValue::Number(101.0),
            CellValue::text("plan"),
            CellValue::text("101 - plan"),
            CellValue::text("C01"),
            CellValue::Number(45729.0),
        ];
        let record = build_record(&row);
        assert_eq!(record.sheet_number, CellValue::Number(101.0));
        assert_eq!(record.revision_date, CellValue::Number(45729.0));
    }

    #[test]
    fn test_revision_description_kept_raw() {
        let mut row = text_row(&["A", "B", "A - B", "C01", "13/03/2025", "S2", "WIP"]);
        row.push(CellValue::text("  Issued for  Review "));
        let record = build_record(&row);
        assert_eq!(
            record.revision_description.as_deref(),
            Some("Issued for  Review")
        );
    }

    #[test]
    fn test_blank_rows_are_kept() {
        let rows = vec![
            text_row(&["Sheet Number"]),
            text_row(&["A1-001"]),
            Vec::new(),
        ];
        let records = build_records(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].sheet_number, CellValue::Empty);
    }
}
