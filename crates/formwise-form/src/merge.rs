//! # Result Merger
//!
//! Joins the collector's path → actual map with the formatter's ordered
//! path/message list. The merged key set is exactly the formatted set:
//! actual values recorded at paths that carry no message are dropped.

use formwise_core::{join_path, OrderedMap, Value};
use formwise_schema::FormattedIssue;
use serde::Serialize;

/// What went wrong at one path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueResult {
    /// Value observed at the path, if the issue tree recorded one.
    pub actual: Option<Value>,
    /// Human-readable message.
    pub message: Option<String>,
}

/// Dotted path → [`IssueResult`], in formatter order.
pub type IssueResultMapping = OrderedMap<IssueResult>;

/// Merge collected actuals with formatted messages.
///
/// When the formatter reports one path twice, the later message replaces
/// the earlier one in the earlier entry's position.
pub fn merge_issues(
    actuals: &OrderedMap<Option<Value>>,
    formatted: &[FormattedIssue],
) -> IssueResultMapping {
    let mut merged = IssueResultMapping::with_capacity(formatted.len());
    for entry in formatted {
        let key = join_path(&entry.path);
        let actual = actuals.get(&key).cloned().flatten();
        merged.insert(
            key,
            IssueResult {
                actual,
                message: Some(entry.message.clone()),
            },
        );
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwise_core::PathSegment;
    use formwise_schema::IssueTag;

    fn formatted(path: &[&str], message: &str) -> FormattedIssue {
        FormattedIssue {
            tag: IssueTag::Type,
            path: path.iter().map(|s| PathSegment::from(*s)).collect(),
            message: message.to_string(),
        }
    }

    #[test]
    fn key_set_equals_formatted_set() {
        let actuals: OrderedMap<Option<Value>> = [
            ("", Some(Value::Null)),
            ("age", Some(Value::Int(17))),
            ("name", Some(Value::from("John"))),
        ]
        .into_iter()
        .collect();
        let merged = merge_issues(&actuals, &[formatted(&["age"], "too young")]);
        assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["age"]);
        assert_eq!(
            merged.get("age"),
            Some(&IssueResult {
                actual: Some(Value::Int(17)),
                message: Some("too young".to_string()),
            })
        );
    }

    #[test]
    fn missing_actual_is_none() {
        let merged = merge_issues(&OrderedMap::new(), &[formatted(&["email"], "is missing")]);
        assert_eq!(merged.get("email").and_then(|r| r.actual.clone()), None);
    }

    #[test]
    fn recorded_absence_is_none() {
        let actuals: OrderedMap<Option<Value>> = [("email", None)].into_iter().collect();
        let merged = merge_issues(&actuals, &[formatted(&["email"], "is missing")]);
        assert_eq!(merged.get("email").map(|r| r.actual.is_none()), Some(true));
    }

    #[test]
    fn nested_paths_join_with_dots() {
        let actuals: OrderedMap<Option<Value>> =
            [("pets.1", Some(Value::from("")))].into_iter().collect();
        let entry = FormattedIssue {
            tag: IssueTag::Refinement,
            path: vec![PathSegment::from("pets"), PathSegment::from(1usize)],
            message: "empty".to_string(),
        };
        let merged = merge_issues(&actuals, &[entry]);
        let actual = merged.get("pets.1").and_then(|r| r.actual.clone());
        assert_eq!(actual, Some(Value::from("")));
    }

    #[test]
    fn root_entry_uses_empty_key() {
        let merged = merge_issues(&OrderedMap::new(), &[formatted(&[], "Expected record")]);
        assert!(merged.contains_key(""));
    }

    #[test]
    fn repeated_path_keeps_last_message() {
        let entries = [
            formatted(&["a"], "first"),
            formatted(&["b"], "b"),
            formatted(&["a"], "second"),
        ];
        let merged = merge_issues(&OrderedMap::new(), &entries);
        assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        let message = merged.get("a").and_then(|r| r.message.as_deref());
        assert_eq!(message, Some("second"));
    }
}
