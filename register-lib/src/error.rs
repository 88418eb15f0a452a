use thiserror::Error;

/// Errors raised at the boundaries of a review session.
///
/// Row-level problems are never errors: they surface as mismatch reasons on
/// the affected record so one malformed row cannot stop the others.
#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("Failed to open workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Sheet '{name}' not found. Available sheets: {available:?}")]
    SheetNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Error reading sheet '{name}': {message}")]
    SheetRead { name: String, message: String },

    #[error("The workbook does not contain any sheet")]
    EmptyWorkbook,

    #[error("The sheet '{0}' is empty")]
    EmptySheet(String),

    #[error("Override targets row {row} but only {row_count} rows are loaded")]
    RowOutOfRange { row: usize, row_count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Report is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, RegisterError>;
