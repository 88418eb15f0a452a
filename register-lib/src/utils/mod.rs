mod datetime;
mod filesystem;
mod string;

pub use datetime::{
    CANONICAL_DATE_FORMAT, excel_serial_to_date, format_canonical_date, get_utc_iso_datetime,
};
pub use filesystem::write_error_to_log;
pub use string::{collapse_whitespace, trim_blank};
