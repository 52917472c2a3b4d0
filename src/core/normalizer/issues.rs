//! Cells that had to be defaulted during normalization

use serde::Serialize;
use std::fmt;

/// Why a cell was replaced by a default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Birth date missing or blank; cut-date substituted
    MissingDate,
    /// Birth date did not match the configured format; cut-date substituted
    InvalidDate,
    /// Flag cell held something other than `X` or blank; read as false
    UnexpectedFlag,
    /// Single-character cell held more; only the first character kept
    Truncated,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingDate => "missing date",
            Self::InvalidDate => "invalid date",
            Self::UnexpectedFlag => "unexpected flag value",
            Self::Truncated => "value truncated to one character",
        };
        f.write_str(text)
    }
}

/// A present-but-malformed (or missing) cell that was normalized to a default
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// 1-based data row
    pub row: usize,
    pub column: &'static str,
    /// Raw cell content, empty when the cell was absent
    pub value: String,
    pub kind: IssueKind,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} column {}: {} ({:?})",
            self.row, self.column, self.kind, self.value
        )
    }
}

/// Render up to `limit` issues as one line for logs and error messages
pub fn summarize(issues: &[FieldIssue], limit: usize) -> String {
    let mut parts: Vec<String> = issues.iter().take(limit).map(|i| i.to_string()).collect();
    if issues.len() > limit {
        parts.push(format!("and {} more", issues.len() - limit));
    }
    parts.join("; ")
}
