//! Per-row checks of a register record against the expected values.
//!
//! Every check runs on every record, so one row can collect several reasons.
//! Reasons come out in the order of [`MismatchReason`]'s variants.

use crate::expected::NormalizedExpectations;
use crate::normalizer::normalize_text_str;
use crate::record::{DocumentRecord, MismatchReason, NamingConvention};

/// Run every check against a record and return the failed ones in report order
pub fn validate_record(
    record: &DocumentRecord,
    expected: &NormalizedExpectations,
) -> Vec<MismatchReason> {
    let sheet_number = record.sheet_number.to_string();
    let sheet_name = record.sheet_name.to_string();
    let file_name = record.file_name.to_string();

    let checks = [
        (MismatchReason::MissingData, !has_missing_data(record)),
        (
            MismatchReason::FileName,
            file_name_matches(&sheet_number, &sheet_name, &file_name, expected),
        ),
        (
            MismatchReason::RevisionCode,
            revision_code_satisfies(&record.revision_code.to_string(), &expected.revision_code),
        ),
        (
            MismatchReason::RevisionDate,
            record.revision_date.to_string() == expected.revision_date,
        ),
        (
            MismatchReason::SuitabilityCode,
            record.suitability_code.to_string() == expected.suitability_code,
        ),
        (
            MismatchReason::StageDescription,
            record.stage_description.to_string() == expected.stage_description,
        ),
        (
            MismatchReason::RevisionDescription,
            record.revision_description.as_deref().unwrap_or("").trim()
                == expected.revision_description,
        ),
        (
            MismatchReason::DocumentNamingConvention,
            record.document_naming_convention == NamingConvention::Ok,
        ),
        (
            MismatchReason::Comments,
            normalize_text_str(&record.comments).is_empty(),
        ),
    ];

    checks
        .into_iter()
        .filter(|(_, passed)| !passed)
        .map(|(reason, _)| reason)
        .collect()
}

fn has_missing_data(record: &DocumentRecord) -> bool {
    [
        &record.sheet_number,
        &record.sheet_name,
        &record.file_name,
        &record.revision_code,
        &record.revision_date,
        &record.suitability_code,
        &record.stage_description,
    ]
    .iter()
    .any(|value| value.is_blank())
}

fn file_name_matches(
    sheet_number: &str,
    sheet_name: &str,
    file_name: &str,
    expected: &NormalizedExpectations,
) -> bool {
    if expected.check_only_sheet_number {
        file_name == sheet_number
    } else {
        file_name == format!("{sheet_number}{}{sheet_name}", expected.separator)
    }
}

/// A revision code such as `C02` satisfies `C01` when the leading letter is
/// the same and its number is not lower.
///
/// An empty expected code places no constraint. A code without a readable
/// number never satisfies, and never is satisfied by, a numbered one.
pub fn revision_code_satisfies(actual: &str, expected: &str) -> bool {
    let Some(expected_prefix) = expected.chars().next() else {
        return true;
    };
    let Some(actual_prefix) = actual.chars().next() else {
        return false;
    };
    if actual_prefix != expected_prefix {
        return false;
    }

    let actual_number = leading_integer(&actual[actual_prefix.len_utf8()..]);
    let expected_number = leading_integer(&expected[expected_prefix.len_utf8()..]);
    match (actual_number, expected_number) {
        (Some(actual_number), Some(expected_number)) => actual_number >= expected_number,
        _ => false,
    }
}

/// Read the integer at the start of `s`: optional leading whitespace, an
/// optional sign, then digits. Anything after the digits is ignored and
/// values too large for `i128` saturate.
fn leading_integer(s: &str) -> Option<i128> {
    let s = s.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }
    let value = unsigned[..digits_len].parse::<i128>().unwrap_or(i128::MAX);
    Some(if negative { -value } else { value })
}
