// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// One line of the corpus: an article title and its body text.
// Records are consumed straight into an encoded sequence and
// never kept around.
//
// Extra JSON fields are ignored; serde's default behaviour for
// unknown keys does exactly that.

use serde::{Deserialize, Serialize};

use crate::domain::error::{DatasetError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title:   String,
    pub content: String,
}

impl Record {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title:   title.into(),
            content: content.into(),
        }
    }

    /// Parse one JSONL line. `line_no` is 1-based and only used
    /// to make the error point at the offending line.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self> {
        serde_json::from_str(line).map_err(|source| DatasetError::Parse {
            line: line_no,
            source,
        })
    }
}
