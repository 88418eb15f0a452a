//! Canonical forms for register values.
//!
//! Text is compared trimmed, whitespace-collapsed and uppercased. Dates are
//! compared as `DD/MM/YYYY`, or as the trimmed original text when no date
//! can be read from it. Non-text cells pass through both normalizers
//! unchanged, and both are idempotent.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::cell::CellValue;
use crate::utils::{collapse_whitespace, format_canonical_date, trim_blank};

/// Month abbreviations accepted in `DD.MMM.YYYY` dates
const MONTH_ABBREVIATIONS: [(&str, &str); 12] = [
    ("JAN", "01"),
    ("FEB", "02"),
    ("MAR", "03"),
    ("APR", "04"),
    ("MAY", "05"),
    ("JUN", "06"),
    ("JUL", "07"),
    ("AUG", "08"),
    ("SEP", "09"),
    ("OCT", "10"),
    ("NOV", "11"),
    ("DEC", "12"),
];

/// Formats tried in order for values that match none of the register date patterns
const FALLBACK_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const FALLBACK_DATE_FORMATS: [&str; 11] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d.%m.%Y",
    "%d/%m/%Y",
    "%d.%b.%Y",
];

/// Date layouts commonly typed into document registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DatePattern {
    /// 13.03.2025
    DottedNumeric,
    /// 13/03/2025
    SlashedNumeric,
    /// 13.MAR.2025
    DottedMonthName,
    /// 13/03/25
    SlashedShortYear,
}

pub fn normalize_text(value: &CellValue) -> CellValue {
    match value {
        CellValue::Text(s) => CellValue::Text(normalize_text_str(s)),
        other => other.clone(),
    }
}

pub fn normalize_text_str(value: &str) -> String {
    collapse_whitespace(value).to_uppercase()
}

pub fn normalize_date(value: &CellValue) -> CellValue {
    match value {
        CellValue::Text(s) => CellValue::Text(normalize_date_str(s)),
        other => other.clone(),
    }
}

/// Render a date typed in any supported layout as `DD/MM/YYYY`.
///
/// Values in one of the register patterns are read day-first. Anything else
/// goes through a fixed list of fallback formats. When no date can be read
/// the trimmed input is returned.
pub fn normalize_date_str(value: &str) -> String {
    let trimmed = trim_blank(value);

    let parsed = match detect_date_pattern(trimmed) {
        Some(pattern) => parse_register_date(trimmed, pattern),
        None => parse_fallback_date(trimmed),
    };

    match parsed {
        Some(date) => format_canonical_date(date),
        None => trimmed.to_string(),
    }
}

fn detect_date_pattern(s: &str) -> Option<DatePattern> {
    let bytes = s.as_bytes();
    let digits = |from: usize, to: usize| bytes[from..to].iter().all(u8::is_ascii_digit);

    match bytes.len() {
        10 if digits(0, 2) && digits(3, 5) && digits(6, 10) => match (bytes[2], bytes[5]) {
            (b'.', b'.') => Some(DatePattern::DottedNumeric),
            (b'/', b'/') => Some(DatePattern::SlashedNumeric),
            _ => None,
        },
        11 if digits(0, 2)
            && bytes[2] == b'.'
            && bytes[3..6]
                .iter()
                .all(|c| c.is_ascii_alphanumeric() || *c == b'_')
            && bytes[6] == b'.'
            && digits(7, 11) =>
        {
            Some(DatePattern::DottedMonthName)
        }
        8 if digits(0, 2) && bytes[2] == b'/' && digits(3, 5) && bytes[5] == b'/' && digits(6, 8) => {
            Some(DatePattern::SlashedShortYear)
        }
        _ => None,
    }
}

fn parse_register_date(s: &str, pattern: DatePattern) -> Option<NaiveDate> {
    let standardized = s.replace('.', "/");
    let mut parts = standardized.split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    let month = month_number(month).unwrap_or(month);

    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let mut year: i32 = year.parse().ok()?;
    if pattern == DatePattern::SlashedShortYear {
        year += 2000;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(abbreviation: &str) -> Option<&'static str> {
    let upper = abbreviation.to_ascii_uppercase();
    MONTH_ABBREVIATIONS
        .iter()
        .find(|(name, _)| *name == upper)
        .map(|(_, number)| *number)
}

fn parse_fallback_date(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Some(datetime.date_naive());
    }

    FALLBACK_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|datetime| datetime.date())
        .or_else(|| {
            FALLBACK_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_trims_collapses_and_uppercases() {
        assert_eq!(normalize_text_str("  level   1\tplan "), "LEVEL 1 PLAN");
        assert_eq!(
            normalize_text(&CellValue::text("s2 ")),
            CellValue::text("S2")
        );
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        assert_eq!(normalize_text_str("\u{FEFF}a1 b"), "A1 B");
        assert_eq!(normalize_date_str("\u{FEFF}13.03.2025"), "13/03/2025");
        assert_eq!(normalize_date_str("\u{FEFF}TBC "), "TBC");
    }

    #[test]
    fn test_normalize_text_passes_non_text_through() {
        assert_eq!(
            normalize_text(&CellValue::Number(101.0)),
            CellValue::Number(101.0)
        );
        assert_eq!(normalize_text(&CellValue::Bool(true)), CellValue::Bool(true));
        assert_eq!(normalize_text(&CellValue::Empty), CellValue::Empty);
    }

    #[test]
    fn test_detect_date_pattern() {
        assert_eq!(
            detect_date_pattern("13.03.2025"),
            Some(DatePattern::DottedNumeric)
        );
        assert_eq!(
            detect_date_pattern("13/03/2025"),
            Some(DatePattern::SlashedNumeric)
        );
        assert_eq!(
            detect_date_pattern("13.Mar.2025"),
            Some(DatePattern::DottedMonthName)
        );
        assert_eq!(
            detect_date_pattern("13/03/25"),
            Some(DatePattern::SlashedShortYear)
        );
        assert_eq!(detect_date_pattern("13-03-2025"), None);
        assert_eq!(detect_date_pattern("1.3.2025"), None);
        assert_eq!(detect_date_pattern(""), None);
    }

    #[test]
    fn test_register_patterns_are_read_day_first() {
        assert_eq!(normalize_date_str("13.03.2025"), "13/03/2025");
        assert_eq!(normalize_date_str("01.03.2025"), "01/03/2025");
        assert_eq!(normalize_date_str("01/03/2025"), "01/03/2025");
    }

    #[test]
    fn test_month_abbreviation_is_case_insensitive() {
        assert_eq!(normalize_date_str("13.MAR.2025"), "13/03/2025");
        assert_eq!(normalize_date_str("13.mar.2025"), "13/03/2025");
        assert_eq!(normalize_date_str("02.Dec.2024"), "02/12/2024");
    }

    #[test]
    fn test_unknown_month_abbreviation_keeps_original() {
        assert_eq!(normalize_date_str(" 13.XYZ.2025 "), "13.XYZ.2025");
    }

    #[test]
    fn test_short_year_maps_to_current_century() {
        assert_eq!(normalize_date_str("13/03/25"), "13/03/2025");
        assert_eq!(normalize_date_str("05/11/99"), "05/11/2099");
    }

    #[test]
    fn test_impossible_register_date_keeps_original() {
        assert_eq!(normalize_date_str("31.02.2025"), "31.02.2025");
        assert_eq!(normalize_date_str("13/13/2025"), "13/13/2025");
    }

    #[test]
    fn test_fallback_formats() {
        assert_eq!(normalize_date_str("2025-03-13"), "13/03/2025");
        assert_eq!(normalize_date_str("2025-03-13T10:30:00"), "13/03/2025");
        assert_eq!(normalize_date_str("2025-03-13T10:30:00Z"), "13/03/2025");
        assert_eq!(normalize_date_str("13-03-2025"), "13/03/2025");
        assert_eq!(normalize_date_str("13 Mar 2025"), "13/03/2025");
        assert_eq!(normalize_date_str("13 March 2025"), "13/03/2025");
        assert_eq!(normalize_date_str("March 13, 2025"), "13/03/2025");
    }

    #[test]
    fn test_unparseable_date_returns_trimmed_text() {
        assert_eq!(normalize_date_str("  not a date "), "not a date");
        assert_eq!(normalize_date_str("TBC"), "TBC");
        assert_eq!(normalize_date_str("   "), "");
    }

    #[test]
    fn test_normalize_date_passes_non_text_through() {
        assert_eq!(
            normalize_date(&CellValue::Number(45729.0)),
            CellValue::Number(45729.0)
        );
        assert_eq!(normalize_date(&CellValue::Empty), CellValue::Empty);
    }

    #[test]
    fn test_normalize_date_is_idempotent_on_examples() {
        for input in ["13.03.2025", "13/03/25", "2025-03-13", "TBC", " 13.MAR.2025 "] {
            let once = normalize_date_str(input);
            assert_eq!(normalize_date_str(&once), once, "input: {input}");
        }
    }
}
