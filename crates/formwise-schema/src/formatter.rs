//! # Issue Formatting
//!
//! Flattens an [`Issue`] tree into one [`FormattedIssue`] per failure,
//! each carrying the full path and a human message. A refinement,
//! transformation or composite node with an override message stands in
//! for its whole subtree; otherwise formatting descends to the leaves.

use std::fmt;

use formwise_core::{join_path, PathSegment};
use serde::Serialize;

use crate::issue::{Issue, IssueTag};

/// One flattened failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedIssue {
    /// Variant of the node the message came from.
    #[serde(rename = "_tag")]
    pub tag: IssueTag,
    /// Full path from the root.
    pub path: Vec<PathSegment>,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for FormattedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", join_path(&self.path), self.message)
        }
    }
}

/// Issue-to-list capability.
pub trait IssueFormatter: Send + Sync {
    /// Flatten `issue` into an ordered list of failures.
    fn format_issue(&self, issue: &Issue) -> Vec<FormattedIssue>;
}

/// Default formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayFormatter;

impl IssueFormatter for ArrayFormatter {
    fn format_issue(&self, issue: &Issue) -> Vec<FormattedIssue> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        go(issue, &mut path, &mut out);
        out
    }
}

fn go(issue: &Issue, path: &mut Vec<PathSegment>, out: &mut Vec<FormattedIssue>) {
    match issue {
        Issue::Pointer {
            path: segments,
            issue: inner,
            ..
        } => {
            let depth = path.len();
            path.extend(segments.iter().cloned());
            go(inner, path, out);
            path.truncate(depth);
        }
        Issue::Composite {
            issues,
            message: None,
            ..
        } => {
            for child in issues {
                go(child, path, out);
            }
        }
        Issue::Refinement {
            issue: inner,
            message: None,
            ..
        }
        | Issue::Transformation {
            issue: inner,
            message: None,
            ..
        } => go(inner, path, out),
        _ => out.push(FormattedIssue {
            tag: issue.tag(),
            path: path.clone(),
            message: leaf_message(issue),
        }),
    }
}

/// Override message if present, otherwise the default for the variant.
fn leaf_message(issue: &Issue) -> String {
    if let Some(message) = issue.message() {
        return message.to_string();
    }
    match issue {
        Issue::Type {
            expected,
            actual: Some(actual),
            ..
        } => format!("Expected {expected}, actual {}", actual.to_json_literal()),
        Issue::Type { expected, .. } => format!("Expected {expected}"),
        Issue::Missing { .. } => "is missing".to_string(),
        Issue::Unexpected { .. } => "is unexpected".to_string(),
        Issue::Forbidden { .. } => "is forbidden".to_string(),
        Issue::Pointer { .. }
        | Issue::Composite { .. }
        | Issue::Refinement { .. }
        | Issue::Transformation { .. } => String::new(),
    }
}
