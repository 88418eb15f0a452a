/// Byte order mark, left at the start of cells pasted from some exports
const BYTE_ORDER_MARK: char = '\u{FEFF}';

fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c.is_control() || c == BYTE_ORDER_MARK
}

/// Trim whitespace, control characters and byte order marks from both ends
pub fn trim_blank(value: &str) -> &str {
    value.trim_matches(is_blank_char)
}

/// Collapse whitespace so that spreadsheet text compares independently of layout
///
/// Control characters (newlines, tabs, carriage returns) and byte order marks
/// count as whitespace. Runs of whitespace become a single space and both
/// ends are trimmed.
pub fn collapse_whitespace(value: &str) -> String {
    value
        .chars() // Process character by character
        .map(|c| {
            if is_blank_char(c) {
                ' ' // Replace control characters (newlines, tabs, etc.) with spaces
            } else {
                c
            }
        })
        .collect::<String>()
        .split_whitespace() // Split on whitespace to normalize multiple spaces
        .collect::<Vec<&str>>()
        .join(" ")
}
