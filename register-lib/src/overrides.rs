use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::record::NamingConvention;

/// Reviewer edits for one register row, keyed by its zero-based record index.
///
/// Fields left out of the JSON keep the record's current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowOverride {
    pub row: usize,
    #[serde(default)]
    pub document_naming_convention: Option<NamingConvention>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl RowOverride {
    pub fn new(row: usize) -> Self {
        RowOverride {
            row,
            document_naming_convention: None,
            comments: None,
        }
    }

    pub fn with_naming_convention(mut self, convention: NamingConvention) -> Self {
        self.document_naming_convention = Some(convention);
        self
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Read a JSON array of overrides
    pub fn load_from_json_file(path: &Path) -> Result<Vec<RowOverride>> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
