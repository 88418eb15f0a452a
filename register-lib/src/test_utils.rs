// Test utilities available to both unit and integration tests
// Only compiled when testing

use crate::cell::CellValue;
use crate::expected::ExpectedValues;
use crate::row_builder::build_record;
use crate::record::DocumentRecord;

/// Header row as found at the top of a document register
#[allow(dead_code)]
pub fn register_header() -> Vec<CellValue> {
    [
        "Sheet Number",
        "Sheet Name",
        "File Name",
        "Revision Code",
        "Revision Date",
        "Suitability Code",
        "Stage Description",
    ]
    .into_iter()
    .map(CellValue::text)
    .collect()
}

/// Turn a row of string literals into text cells
#[allow(dead_code)]
pub fn text_row(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|value| CellValue::text(*value)).collect()
}

/// A register row that passes every check against [`create_expected_values`]
#[allow(dead_code)]
pub fn create_matching_row(sheet_number: &str, sheet_name: &str) -> Vec<CellValue> {
    text_row(&[
        sheet_number,
        sheet_name,
        &format!("{sheet_number} - {sheet_name}"),
        "C02",
        "13.03.2025",
        "S2",
        "For Information",
    ])
}

/// Header followed by the given data rows
#[allow(dead_code)]
pub fn create_sheet(data_rows: Vec<Vec<CellValue>>) -> Vec<Vec<CellValue>> {
    std::iter::once(register_header()).chain(data_rows).collect()
}

/// A normalized record built from a matching row
#[allow(dead_code)]
pub fn create_matching_record(sheet_number: &str, sheet_name: &str) -> DocumentRecord {
    build_record(&create_matching_row(sheet_number, sheet_name))
}

/// Expected values that [`create_matching_row`] satisfies
#[allow(dead_code)]
pub fn create_expected_values() -> ExpectedValues {
    ExpectedValues {
        revision_code: "C01".to_string(),
        revision_date: "13/03/2025".to_string(),
        suitability_code: "s2".to_string(),
        stage_description: "FOR INFORMATION".to_string(),
        ..ExpectedValues::default()
    }
}
