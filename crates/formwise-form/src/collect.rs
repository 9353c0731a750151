//! # Issue Tree Collector
//!
//! Walks an [`Issue`] tree and records the value observed at every path
//! the tree touches.
//!
//! ## Traversal
//!
//! - `Pointer` extends the path, emits its own entry, then descends.
//! - `Composite` emits an entry at the current path, then visits each
//!   child at that same path.
//! - `Refinement` and `Transformation` emit their boundary value, then
//!   descend into the single child.
//! - Leaves emit their entry and stop.
//!
//! ## Ordering
//!
//! [`collect_actuals`] folds the list left to right and a later entry
//! overwrites an earlier one at the same path. Since children are visited
//! after their parent, the value reported by the innermost node of a path
//! is the one that survives. That is a property of traversal order; a
//! reordering of the walk changes which value surfaces.

use formwise_core::{join_path, OrderedMap, PathSegment, Value};
use formwise_schema::Issue;

/// Every `(dotted path, actual)` pair in `issue`, in traversal order.
pub fn collect(issue: &Issue, prefix: &[PathSegment]) -> Vec<(String, Option<Value>)> {
    let mut out = Vec::new();
    let mut path = prefix.to_vec();
    walk(issue, &mut path, &mut out);
    out
}

fn walk(issue: &Issue, path: &mut Vec<PathSegment>, out: &mut Vec<(String, Option<Value>)>) {
    match issue {
        Issue::Pointer {
            path: segments,
            actual,
            issue: inner,
        } => {
            let depth = path.len();
            path.extend(segments.iter().cloned());
            out.push((join_path(path), actual.clone()));
            walk(inner, path, out);
            path.truncate(depth);
        }
        Issue::Composite { actual, issues, .. } => {
            out.push((join_path(path), actual.clone()));
            for child in issues {
                walk(child, path, out);
            }
        }
        Issue::Refinement {
            actual,
            issue: inner,
            ..
        }
        | Issue::Transformation {
            actual,
            issue: inner,
            ..
        } => {
            out.push((join_path(path), Some(actual.clone())));
            walk(inner, path, out);
        }
        Issue::Type { actual, .. }
        | Issue::Missing { actual, .. }
        | Issue::Unexpected { actual, .. }
        | Issue::Forbidden { actual, .. } => {
            out.push((join_path(path), actual.clone()));
        }
    }
}

/// Fold [`collect`] from the root into a path-keyed map, last write wins.
pub fn collect_actuals(issue: &Issue) -> OrderedMap<Option<Value>> {
    let mut actuals = OrderedMap::new();
    for (path, actual) in collect(issue, &[]) {
        actuals.insert(path, actual);
    }
    actuals
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwise_schema::{RefinementKind, TransformationKind};

    fn record(pairs: &[(&str, Value)]) -> Value {
        Value::Object(pairs.iter().cloned().collect())
    }

    #[test]
    fn pointer_under_root_yields_field_key() {
        let issue = Issue::pointer(["name"], None, Issue::missing());
        let actuals = collect_actuals(&issue);
        assert_eq!(actuals.keys().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn root_leaf_yields_empty_key() {
        let issue = Issue::type_mismatch("string", Some(Value::Int(3)));
        assert_eq!(
            collect(&issue, &[]),
            vec![(String::new(), Some(Value::Int(3)))]
        );
    }

    #[test]
    fn prefix_is_prepended() {
        let issue = Issue::pointer(["city"], None, Issue::missing());
        let entries = collect(&issue, &[PathSegment::from("address")]);
        assert_eq!(entries[0].0, "address.city");
    }

    #[test]
    fn composite_emits_itself_first_and_children_share_its_path() {
        let input = record(&[("a", Value::from("x"))]);
        let issue = Issue::composite(
            Some(input.clone()),
            vec![
                Issue::type_mismatch("string", Some(Value::Int(1))),
                Issue::pointer(["b"], Some(input.clone()), Issue::missing()),
            ],
        );
        let entries = collect(&issue, &[]);
        assert_eq!(
            entries,
            vec![
                (String::new(), Some(input.clone())),
                (String::new(), Some(Value::Int(1))),
                ("b".to_string(), Some(input)),
                ("b".to_string(), None),
            ]
        );
    }

    #[test]
    fn leaf_value_beats_transformation_value_at_same_path() {
        let issue = Issue::pointer(
            ["age"],
            None,
            Issue::transformation(
                TransformationKind::Transformation,
                Value::from("abc"),
                Issue::type_mismatch("IntFromString", Some(Value::from("abc!"))),
            ),
        );
        let entries = collect(&issue, &[]);
        assert_eq!(
            entries,
            vec![
                ("age".to_string(), None),
                ("age".to_string(), Some(Value::from("abc"))),
                ("age".to_string(), Some(Value::from("abc!"))),
            ]
        );
        let actuals = collect_actuals(&issue);
        assert_eq!(actuals.get("age"), Some(&Some(Value::from("abc!"))));
    }

    #[test]
    fn later_absence_overwrites_earlier_value() {
        let input = record(&[]);
        let issue = Issue::pointer(["email"], Some(input), Issue::missing());
        assert_eq!(collect_actuals(&issue).get("email"), Some(&None));
    }

    #[test]
    fn refinement_surfaces_decoded_value() {
        let input = record(&[("age", Value::from("17"))]);
        let leaf = Issue::type_mismatch("an adult age", Some(Value::Int(17)));
        let refined = Issue::refinement(RefinementKind::Predicate, Value::Int(17), leaf)
            .with_message("too young");
        let issue = Issue::composite(
            Some(input.clone()),
            vec![Issue::pointer(["age"], Some(input), refined)],
        );
        let actuals = collect_actuals(&issue);
        assert_eq!(actuals.get("age"), Some(&Some(Value::Int(17))));
    }

    #[test]
    fn siblings_do_not_inherit_each_others_segments() {
        let issue = Issue::composite(
            None,
            vec![
                Issue::pointer(["a"], None, Issue::missing()),
                Issue::pointer(["b"], None, Issue::missing()),
            ],
        );
        let actuals = collect_actuals(&issue);
        let keys: Vec<_> = actuals.keys().collect();
        assert_eq!(keys, vec!["", "a", "b"]);
    }

    #[test]
    fn array_indices_join_numerically() {
        let leaf = Issue::type_mismatch("string", Some(Value::Int(2)));
        let items = Issue::composite(None, vec![Issue::pointer([1usize], None, leaf)]);
        let issue = Issue::pointer(["pets"], None, items);
        let actuals = collect_actuals(&issue);
        assert_eq!(actuals.get("pets.1"), Some(&Some(Value::Int(2))));
    }
}
