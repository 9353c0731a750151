//! # Form Errors
//!
//! [`ParseError`] is the only failure a decode ever reports: a mapping
//! from dotted field path to the observed value and message. Raw issue
//! trees never cross this boundary.

use std::fmt;

use formwise_core::Value;
use serde::Serialize;
use thiserror::Error;

use crate::merge::{IssueResult, IssueResultMapping};

/// A submission failed validation.
///
/// `Display` gives a header line followed by one `path: message` line per
/// failing path, with the root path shown as `(root)`.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
#[error("form submission is invalid{}", IssueLines(.issues))]
pub struct ParseError {
    issues: IssueResultMapping,
}

impl ParseError {
    /// Wrap a merged issue mapping.
    pub fn new(issues: IssueResultMapping) -> Self {
        Self { issues }
    }

    /// The entry for a dotted field path.
    pub fn get(&self, path: &str) -> Option<&IssueResult> {
        self.issues.get(path)
    }

    /// The message for a dotted field path.
    pub fn message(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|r| r.message.as_deref())
    }

    /// The observed value for a dotted field path.
    pub fn actual(&self, path: &str) -> Option<&Value> {
        self.get(path).and_then(|r| r.actual.as_ref())
    }

    /// Paths with a problem, in report order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.issues.keys()
    }

    /// Number of failing paths.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if no path failed.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// The full mapping.
    pub fn mapping(&self) -> &IssueResultMapping {
        &self.issues
    }

    /// Consume into the full mapping.
    pub fn into_mapping(self) -> IssueResultMapping {
        self.issues
    }
}

/// Renders a mapping as indented `path: message` lines.
struct IssueLines<'a>(&'a IssueResultMapping);

impl fmt::Display for IssueLines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (path, result) in self.0.iter() {
            let path = if path.is_empty() { "(root)" } else { path };
            let message = result.message.as_deref().unwrap_or("invalid");
            write!(f, "\n  {path}: {message}")?;
        }
        Ok(())
    }
}

/// A submission could not be serialized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// URL-encoded bodies carry text only.
    #[error("entry '{key}' holds a file and cannot be URL-encoded")]
    FileNotUrlEncodable {
        /// Key of the offending entry.
        key: String,
    },
}
