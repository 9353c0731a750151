//! # Struct Schemas
//!
//! [`Struct`] composes named property schemas into one object schema.
//! Every property failure is wrapped in a [`Issue::Pointer`] naming the
//! property, and all failures of one object are grouped in a single
//! [`Issue::Composite`] whose `actual` is the object itself.

use formwise_core::{ExcessProperty, Fields, ParseOptions, Value};

use crate::issue::Issue;
use crate::kind::Object;
use crate::schema::{erase, Schema, SchemaRef};

/// Object schema built from named property schemas.
#[derive(Debug, Clone, Default)]
pub struct Struct {
    fields: Vec<(String, SchemaRef)>,
}

#[derive(Clone, Copy)]
enum Direction {
    Decode,
    Encode,
}

impl Struct {
    /// Compose a struct from `(name, schema)` pairs, in declaration order.
    pub fn new<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaRef)>,
        K: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|(k, s)| (k.into(), s)).collect(),
        }
    }

    /// Append a property.
    pub fn field<S: Schema>(mut self, name: impl Into<String>, schema: S) -> Self {
        self.fields.push((name.into(), erase(schema)));
        self
    }

    /// Declared properties in order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &SchemaRef)> {
        self.fields.iter().map(|(k, s)| (k.as_str(), s))
    }

    fn declares(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    fn expected_keys(&self) -> String {
        self.fields
            .iter()
            .map(|(k, _)| format!("\"{k}\""))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn apply(
        &self,
        input: &Value,
        options: &ParseOptions,
        direction: Direction,
    ) -> Result<Value, Issue> {
        let Value::Object(object) = input else {
            return Err(Issue::type_mismatch(self.describe(), Some(input.clone())));
        };

        let mut out = Fields::with_capacity(self.fields.len());
        let mut issues = Vec::new();
        let fail = |issues: &mut Vec<Issue>, key: &str, issue: Issue| {
            issues.push(Issue::pointer([key], Some(input.clone()), issue));
            options.stop_at_first()
        };

        for (name, schema) in &self.fields {
            let Some(value) = object.get(name) else {
                if !schema.dyn_is_optional() && fail(&mut issues, name, Issue::missing()) {
                    return Err(Issue::composite(Some(input.clone()), issues));
                }
                continue;
            };
            let result = match direction {
                Direction::Decode => schema.dyn_decode(value, options),
                Direction::Encode => schema.dyn_encode(value, options),
            };
            match result {
                Ok(v) => {
                    out.insert(name.clone(), v);
                }
                Err(issue) => {
                    if fail(&mut issues, name, issue) {
                        return Err(Issue::composite(Some(input.clone()), issues));
                    }
                }
            }
        }

        for (key, value) in object.iter().filter(|(k, _)| !self.declares(k)) {
            match options.on_excess_property {
                ExcessProperty::Ignore => {}
                ExcessProperty::Preserve => {
                    out.insert(key, value.clone());
                }
                ExcessProperty::Error => {
                    let issue = Issue::unexpected(value.clone())
                        .with_message(format!("is unexpected, expected: {}", self.expected_keys()));
                    if fail(&mut issues, key, issue) {
                        return Err(Issue::composite(Some(input.clone()), issues));
                    }
                }
            }
        }

        if issues.is_empty() {
            Ok(Value::Object(out))
        } else {
            Err(Issue::composite(Some(input.clone()), issues))
        }
    }
}

impl Schema for Struct {
    type Encoded = Object;

    fn decode(&self, input: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        self.apply(input, options, Direction::Decode)
    }

    fn encode(&self, value: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        self.apply(value, options, Direction::Encode)
    }

    fn describe(&self) -> String {
        if self.fields.is_empty() {
            return "{}".to_string();
        }
        let props = self
            .fields
            .iter()
            .map(|(k, s)| {
                let marker = if s.dyn_is_optional() { "?" } else { "" };
                format!("readonly {k}{marker}: {}", s.dyn_describe())
            })
            .collect::<Vec<_>>()
            .join("; ");
        format!("{{ {props} }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::optional;
    use crate::primitive::string;
    use crate::transform::int_from_string;
    use crate::SchemaExt;

    fn opts() -> ParseOptions {
        ParseOptions::default()
    }

    fn person() -> Struct {
        Struct::default()
            .field("name", string().min_length(2))
            .field("age", int_from_string())
            .field("nick", optional(string()))
    }

    fn object(pairs: &[(&str, &str)]) -> Value {
        Value::Object(pairs.iter().map(|(k, v)| (*k, Value::from(*v))).collect())
    }

    #[test]
    fn decodes_declared_properties_in_order() {
        let input = object(&[("age", "40"), ("name", "Ann")]);
        let out = person().decode(&input, &opts()).unwrap();
        let keys: Vec<_> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["name", "age"]);
        assert_eq!(out.get("age"), Some(&Value::Int(40)));
    }

    #[test]
    fn missing_required_property_is_pointed() {
        let input = object(&[("name", "Ann")]);
        let err = person().decode(&input, &opts()).unwrap_err();
        assert_eq!(
            err,
            Issue::composite(
                Some(input.clone()),
                vec![Issue::pointer(["age"], Some(input), Issue::missing())]
            )
        );
    }

    #[test]
    fn all_mode_reports_every_property() {
        let input = object(&[("name", "A"), ("age", "x")]);
        let err = person().decode(&input, &opts()).unwrap_err();
        let Issue::Composite { issues, .. } = err else {
            panic!("expected composite");
        };
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn first_mode_stops_after_one() {
        let input = object(&[("name", "A"), ("age", "x")]);
        let options = opts().first_error();
        let err = person().decode(&input, &options).unwrap_err();
        let Issue::Composite { issues, .. } = err else {
            panic!("expected composite");
        };
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn excess_properties_follow_policy() {
        let input = object(&[("name", "Ann"), ("age", "1"), ("extra", "x")]);

        let ignored = person().decode(&input, &opts()).unwrap();
        assert_eq!(ignored.get("extra"), None);

        let preserve = opts().on_excess_property(ExcessProperty::Preserve);
        let preserved = person().decode(&input, &preserve).unwrap();
        assert_eq!(preserved.get("extra"), Some(&Value::from("x")));

        let reject = opts().on_excess_property(ExcessProperty::Error);
        let err = person().decode(&input, &reject).unwrap_err();
        let Issue::Composite { issues, .. } = err else {
            panic!("expected composite");
        };
        let Issue::Pointer { issue, .. } = &issues[0] else {
            panic!("expected pointer");
        };
        assert_eq!(
            issue.message(),
            Some(r#"is unexpected, expected: "name" | "age" | "nick""#)
        );
    }

    #[test]
    fn non_object_input_is_a_type_issue() {
        let err = person().decode(&Value::from("x"), &opts()).unwrap_err();
        assert!(matches!(err, Issue::Type { .. }));
    }

    #[test]
    fn describe_marks_optional_properties() {
        let s = Struct::default()
            .field("a", string())
            .field("b", optional(string()));
        assert_eq!(s.describe(), "{ readonly a: string; readonly b?: string }");
    }

    #[test]
    fn encode_runs_property_encoders() {
        let fields: Fields = [("name", Value::from("Ann")), ("age", Value::Int(40))]
            .into_iter()
            .collect();
        let out = person().encode(&Value::Object(fields), &opts()).unwrap();
        assert_eq!(out.get("age"), Some(&Value::from("40")));
    }
}
