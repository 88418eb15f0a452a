use chrono::{NaiveDate, TimeDelta};

/// Canonical rendering of every date compared by the checker
pub const CANONICAL_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn get_utc_iso_datetime() -> String {
    let timestamp = chrono::Utc::now().to_rfc3339();
    return timestamp;
}

pub fn format_canonical_date(date: NaiveDate) -> String {
    date.format(CANONICAL_DATE_FORMAT).to_string()
}

/// Convert an Excel serial day number (1900 date system) into a calendar date.
///
/// The time-of-day fraction is dropped. Returns `None` for values that are
/// not finite or fall outside the range chrono can represent.
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let excel_base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let days = TimeDelta::try_days(serial.trunc() as i64)?;
    excel_base.checked_add_signed(days)
}
