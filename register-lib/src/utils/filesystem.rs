use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::utils::get_utc_iso_datetime;

/// Centralized function to append an entry to the review log file
///
/// # Arguments
/// * `log_path` - The log file, created on first use
/// * `entry_type` - A description of the entry category (e.g., "Register Revision Report")
/// * `message` - The actual message content
pub fn write_error_to_log(log_path: &Path, entry_type: &str, message: &str) {
    let timestamp = get_utc_iso_datetime();
    let log_entry = format!("\n[{}] {}:\n{}\n", timestamp, entry_type, message);

    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_path) {
        let _ = writeln!(file, "{}", log_entry);
    }
}
