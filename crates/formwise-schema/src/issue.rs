//! # Validation Issues
//!
//! A failed decode or encode produces a tree of [`Issue`]s. Interior nodes
//! either add path segments ([`Issue::Pointer`]), fan out over several
//! failures sharing a prefix ([`Issue::Composite`]), or mark the boundary of
//! a refinement or transformation. Leaves say what went wrong.
//!
//! Every node may carry the value observed at that point (`actual`). The
//! form layer walks the tree to recover the most specific observed value
//! per field path.

use std::fmt;

use formwise_core::{PathSegment, Value};
use serde::Serialize;

use crate::formatter::{ArrayFormatter, IssueFormatter};

/// Which side of a refinement failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RefinementKind {
    /// The refined (inner) schema failed.
    From,
    /// The inner schema succeeded but the predicate rejected the value.
    Predicate,
}

/// Which stage of a transformation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransformationKind {
    /// The encoded-side schema rejected the input.
    Encoded,
    /// The transformation function itself failed.
    Transformation,
    /// The decoded-side schema rejected the transformed value.
    Type,
}

/// Variant name of an issue node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueTag {
    Pointer,
    Composite,
    Refinement,
    Transformation,
    Type,
    Missing,
    Unexpected,
    Forbidden,
}

impl fmt::Display for IssueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Nested validation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    /// Prepends `path` to everything below it.
    Pointer {
        /// Segments to prepend.
        path: Vec<PathSegment>,
        /// The container the segments were looked up in.
        actual: Option<Value>,
        /// The failure found at the path.
        issue: Box<Issue>,
    },
    /// Several failures under the same prefix.
    Composite {
        /// The value the composite schema was applied to.
        actual: Option<Value>,
        /// Child failures, in the order they were found.
        issues: Vec<Issue>,
        /// Override message for the whole group.
        message: Option<String>,
    },
    /// Failure at a refinement boundary.
    Refinement {
        /// Which side failed.
        kind: RefinementKind,
        /// The refinement's input.
        actual: Value,
        /// The underlying failure.
        issue: Box<Issue>,
        /// Override message.
        message: Option<String>,
    },
    /// Failure at a transformation boundary.
    Transformation {
        /// Which stage failed.
        kind: TransformationKind,
        /// The transformation's input.
        actual: Value,
        /// The underlying failure.
        issue: Box<Issue>,
        /// Override message.
        message: Option<String>,
    },
    /// The value does not have the expected type or does not satisfy a
    /// predicate.
    Type {
        /// Description of what was expected.
        expected: String,
        /// The offending value.
        actual: Option<Value>,
        /// Override message.
        message: Option<String>,
    },
    /// A required key is absent.
    Missing {
        actual: Option<Value>,
        message: Option<String>,
    },
    /// A key was present that the schema does not declare.
    Unexpected {
        actual: Option<Value>,
        message: Option<String>,
    },
    /// The operation is not allowed in this context.
    Forbidden {
        actual: Option<Value>,
        message: Option<String>,
    },
}

impl Issue {
    /// Wrap `issue` under the given path segments.
    pub fn pointer<I, P>(path: I, actual: Option<Value>, issue: Issue) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathSegment>,
    {
        Issue::Pointer {
            path: path.into_iter().map(Into::into).collect(),
            actual,
            issue: Box::new(issue),
        }
    }

    /// Group several failures found while checking `actual`.
    pub fn composite(actual: Option<Value>, issues: Vec<Issue>) -> Self {
        Issue::Composite {
            actual,
            issues,
            message: None,
        }
    }

    /// A refinement boundary around `issue`.
    pub fn refinement(kind: RefinementKind, actual: Value, issue: Issue) -> Self {
        Issue::Refinement {
            kind,
            actual,
            issue: Box::new(issue),
            message: None,
        }
    }

    /// A transformation boundary around `issue`.
    pub fn transformation(kind: TransformationKind, actual: Value, issue: Issue) -> Self {
        Issue::Transformation {
            kind,
            actual,
            issue: Box::new(issue),
            message: None,
        }
    }

    /// `actual` is not what `expected` describes.
    pub fn type_mismatch(expected: impl Into<String>, actual: Option<Value>) -> Self {
        Issue::Type {
            expected: expected.into(),
            actual,
            message: None,
        }
    }

    /// A required key is absent.
    pub fn missing() -> Self {
        Issue::Missing {
            actual: None,
            message: None,
        }
    }

    /// An undeclared key carrying `actual`.
    pub fn unexpected(actual: Value) -> Self {
        Issue::Unexpected {
            actual: Some(actual),
            message: None,
        }
    }

    /// A forbidden operation on `actual`.
    pub fn forbidden(actual: Option<Value>) -> Self {
        Issue::Forbidden {
            actual,
            message: None,
        }
    }

    /// Attach an override message. Pointers carry no message of their own
    /// and are returned unchanged.
    pub fn with_message(self, text: impl Into<String>) -> Self {
        self.with_message_opt(Some(text.into()))
    }

    /// Attach an override message if one is given.
    pub fn with_message_opt(mut self, text: Option<String>) -> Self {
        if text.is_none() {
            return self;
        }
        match &mut self {
            Issue::Pointer { .. } => {}
            Issue::Composite { message, .. }
            | Issue::Refinement { message, .. }
            | Issue::Transformation { message, .. }
            | Issue::Type { message, .. }
            | Issue::Missing { message, .. }
            | Issue::Unexpected { message, .. }
            | Issue::Forbidden { message, .. } => *message = text,
        }
        self
    }

    /// The node's variant.
    pub fn tag(&self) -> IssueTag {
        match self {
            Issue::Pointer { .. } => IssueTag::Pointer,
            Issue::Composite { .. } => IssueTag::Composite,
            Issue::Refinement { .. } => IssueTag::Refinement,
            Issue::Transformation { .. } => IssueTag::Transformation,
            Issue::Type { .. } => IssueTag::Type,
            Issue::Missing { .. } => IssueTag::Missing,
            Issue::Unexpected { .. } => IssueTag::Unexpected,
            Issue::Forbidden { .. } => IssueTag::Forbidden,
        }
    }

    /// The value observed at this node, if any.
    pub fn actual(&self) -> Option<&Value> {
        match self {
            Issue::Refinement { actual, .. } | Issue::Transformation { actual, .. } => Some(actual),
            Issue::Pointer { actual, .. }
            | Issue::Composite { actual, .. }
            | Issue::Type { actual, .. }
            | Issue::Missing { actual, .. }
            | Issue::Unexpected { actual, .. }
            | Issue::Forbidden { actual, .. } => actual.as_ref(),
        }
    }

    /// The override message attached to this node, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Issue::Pointer { .. } => None,
            Issue::Composite { message, .. }
            | Issue::Refinement { message, .. }
            | Issue::Transformation { message, .. }
            | Issue::Type { message, .. }
            | Issue::Missing { message, .. }
            | Issue::Unexpected { message, .. }
            | Issue::Forbidden { message, .. } => message.as_deref(),
        }
    }
}

/// One `path: message` line per formatted failure.
impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in ArrayFormatter.format_issue(self).iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Issue {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_accepts_mixed_segments() {
        let issue = Issue::pointer(["pets"], None, Issue::missing());
        match issue {
            Issue::Pointer { path, .. } => assert_eq!(path, vec![PathSegment::from("pets")]),
            other => panic!("expected Pointer, got {other:?}"),
        }
    }

    #[test]
    fn message_is_ignored_on_pointer() {
        let issue = Issue::pointer(["a"], None, Issue::missing()).with_message("nope");
        assert_eq!(issue.message(), None);
        assert_eq!(issue.tag(), IssueTag::Pointer);
    }

    #[test]
    fn with_message_opt_none_keeps_existing() {
        let issue = Issue::missing()
            .with_message("required")
            .with_message_opt(None);
        assert_eq!(issue.message(), Some("required"));
    }

    #[test]
    fn actual_of_refinement_is_always_present() {
        let leaf = Issue::type_mismatch("a number at least 18", Some(Value::Int(17)));
        let issue = Issue::refinement(RefinementKind::Predicate, Value::from("17"), leaf);
        assert_eq!(issue.actual(), Some(&Value::from("17")));
        assert_eq!(Issue::missing().actual(), None);
    }

    #[test]
    fn display_lists_formatted_lines() {
        let issue = Issue::composite(
            None,
            vec![
                Issue::pointer(["name"], None, Issue::missing()),
                Issue::pointer(
                    ["age"],
                    None,
                    Issue::type_mismatch("number", Some(Value::from("x"))),
                ),
            ],
        );
        assert_eq!(
            issue.to_string(),
            "name: is missing\nage: Expected number, actual \"x\""
        );
    }
}
