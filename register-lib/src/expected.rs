use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::normalizer::{normalize_date_str, normalize_text_str};

/// Separator between sheet number and sheet name in a file name
pub const DEFAULT_SEPARATOR: &str = " - ";

/// Target values for one review pass, as entered by the reviewer.
///
/// Read from a JSON file with camelCase keys; every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpectedValues {
    pub revision_code: String,
    pub revision_date: String,
    pub suitability_code: String,
    pub stage_description: String,
    pub revision_description: String,
    pub separator: String,
    pub check_only_sheet_number: bool,
}

impl Default for ExpectedValues {
    fn default() -> Self {
        ExpectedValues {
            revision_code: String::new(),
            revision_date: String::new(),
            suitability_code: String::new(),
            stage_description: String::new(),
            revision_description: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            check_only_sheet_number: false,
        }
    }
}

impl ExpectedValues {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Bring the expected values into the same canonical forms as the records
    pub fn normalized(&self) -> NormalizedExpectations {
        let separator = if self.separator.is_empty() {
            DEFAULT_SEPARATOR.to_string()
        } else {
            self.separator.clone()
        };

        NormalizedExpectations {
            revision_code: normalize_text_str(&self.revision_code),
            revision_date: normalize_date_str(&self.revision_date),
            suitability_code: normalize_text_str(&self.suitability_code),
            stage_description: normalize_text_str(&self.stage_description),
            revision_description: self.revision_description.trim().to_string(),
            separator,
            check_only_sheet_number: self.check_only_sheet_number,
        }
    }
}

/// Expected values ready to be compared against normalized records
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedExpectations {
    pub revision_code: String,
    pub revision_date: String,
    pub suitability_code: String,
    pub stage_description: String,
    pub revision_description: String,
    pub separator: String,
    pub check_only_sheet_number: bool,
}
