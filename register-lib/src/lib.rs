#![allow(clippy::needless_return)]

mod cell;
mod error;
mod expected;
pub mod normalizer;
mod overrides;
mod record;
pub mod report;
pub mod row_builder;
mod session;
pub mod utils;
pub mod validation;
mod workbook;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use cell::CellValue;
pub use error::{RegisterError, Result};
pub use expected::{DEFAULT_SEPARATOR, ExpectedValues, NormalizedExpectations};
pub use overrides::RowOverride;
pub use record::{DocumentRecord, MismatchReason, NamingConvention, RecordSet, ReviewResult};
pub use report::{DEFAULT_REPORT_FILE, ReportSummary, export_report, write_report};
pub use session::ReviewSession;
pub use workbook::read_sheet_rows;

pub const ERRORS_LOG_FILE: &str = "errors.log";
