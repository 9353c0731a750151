//! # Transformations
//!
//! A [`Transform`] decodes with its `from` schema, maps the result with a
//! fallible function, then checks the mapped value with its `to` schema.
//! Encoding runs the same three steps backwards. A failure at any stage is
//! wrapped in an [`Issue::Transformation`] whose `actual` is the value the
//! transformation was handed.

use std::fmt;
use std::sync::Arc;

use formwise_core::{ParseOptions, Value};

use crate::issue::{Issue, TransformationKind};
use crate::primitive::{boolean, number, string, BooleanSchema, NumberSchema, StringSchema};
use crate::schema::Schema;

/// Fallible value mapping. `Err` carries the user-facing message.
pub type MapFn = Arc<dyn Fn(&Value) -> Result<Value, String> + Send + Sync>;

/// Schema that converts between two other schemas.
pub struct Transform<F, T> {
    from: F,
    to: T,
    name: String,
    decode: MapFn,
    encode: MapFn,
}

/// Build a transformation from `from` to `to`.
pub fn transform<F, T, D, E>(
    from: F,
    to: T,
    name: impl Into<String>,
    decode: D,
    encode: E,
) -> Transform<F, T>
where
    F: Schema,
    T: Schema,
    D: Fn(&Value) -> Result<Value, String> + Send + Sync + 'static,
    E: Fn(&Value) -> Result<Value, String> + Send + Sync + 'static,
{
    Transform {
        from,
        to,
        name: name.into(),
        decode: Arc::new(decode),
        encode: Arc::new(encode),
    }
}

impl<F: fmt::Debug, T: fmt::Debug> fmt::Debug for Transform<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("name", &self.name)
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

impl<F, T> Transform<F, T> {
    fn failed(&self, input: &Value, message: String) -> Issue {
        Issue::type_mismatch(self.name.clone(), Some(input.clone())).with_message(message)
    }
}

impl<F: Schema, T: Schema> Schema for Transform<F, T> {
    type Encoded = F::Encoded;

    fn decode(&self, input: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        let wrap = |kind, issue| Issue::transformation(kind, input.clone(), issue);
        let encoded = self
            .from
            .decode(input, options)
            .map_err(|issue| wrap(TransformationKind::Encoded, issue))?;
        let mapped = (self.decode)(&encoded).map_err(|message| {
            let leaf = self.failed(&encoded, message);
            wrap(TransformationKind::Transformation, leaf)
        })?;
        self.to
            .decode(&mapped, options)
            .map_err(|issue| wrap(TransformationKind::Type, issue))
    }

    fn encode(&self, value: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        let wrap = |kind, issue| Issue::transformation(kind, value.clone(), issue);
        let decoded = self
            .to
            .encode(value, options)
            .map_err(|issue| wrap(TransformationKind::Type, issue))?;
        let mapped = (self.encode)(&decoded).map_err(|message| {
            let leaf = self.failed(&decoded, message);
            wrap(TransformationKind::Transformation, leaf)
        })?;
        self.from
            .encode(&mapped, options)
            .map_err(|issue| wrap(TransformationKind::Encoded, issue))
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

fn text_of(value: &Value) -> Result<&str, String> {
    value
        .as_str()
        .ok_or_else(|| format!("Expected text, actual {}", value.to_json_literal()))
}

fn unable(value: &Value, target: &str) -> String {
    format!("Unable to decode {} into {target}", value.to_json_literal())
}

fn to_text(value: &Value) -> Result<Value, String> {
    Ok(Value::Text(value.to_string()))
}

/// Text to number. Integral input decodes to an integer, anything else
/// that parses decodes to a float.
pub fn number_from_string() -> Transform<StringSchema, NumberSchema> {
    transform(
        string(),
        number(),
        "NumberFromString",
        |value| {
            let raw = text_of(value)?;
            let trimmed = raw.trim();
            if let Ok(n) = trimmed.parse::<i64>() {
                return Ok(Value::Int(n));
            }
            trimmed
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| unable(value, "a number"))
        },
        to_text,
    )
}

/// Text to integer.
pub fn int_from_string() -> Transform<StringSchema, NumberSchema> {
    transform(
        string(),
        number(),
        "IntFromString",
        |value| {
            text_of(value)?
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| unable(value, "an integer"))
        },
        to_text,
    )
}

/// Checkbox-style text to boolean: `"on"`/`"true"` decode to true,
/// `"off"`/`"false"`/`""` to false.
pub fn boolean_from_string() -> Transform<StringSchema, BooleanSchema> {
    transform(
        string(),
        boolean(),
        "BooleanFromString",
        |value| match text_of(value)?.trim().to_ascii_lowercase().as_str() {
            "on" | "true" => Ok(Value::Bool(true)),
            "off" | "false" | "" => Ok(Value::Bool(false)),
            _ => Err(unable(value, "a boolean")),
        },
        to_text,
    )
}

/// Text with surrounding whitespace removed on decode.
pub fn trimmed() -> Transform<StringSchema, StringSchema> {
    transform(
        string(),
        string(),
        "Trim",
        |value| Ok(Value::Text(text_of(value)?.trim().to_string())),
        |value| Ok(value.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ParseOptions {
        ParseOptions::default()
    }

    #[test]
    fn number_from_string_prefers_integers() {
        let s = number_from_string();
        assert_eq!(s.decode(&Value::from("18"), &opts()), Ok(Value::Int(18)));
        assert_eq!(
            s.decode(&Value::from(" 2.5 "), &opts()),
            Ok(Value::Float(2.5))
        );
    }

    #[test]
    fn unparsable_text_fails_at_transformation_stage() {
        let err = number_from_string()
            .decode(&Value::from("abc"), &opts())
            .unwrap_err();
        match &err {
            Issue::Transformation {
                kind, actual, issue, ..
            } => {
                assert_eq!(*kind, TransformationKind::Transformation);
                assert_eq!(actual, &Value::from("abc"));
                let expected = r#"Unable to decode "abc" into a number"#;
                assert_eq!(issue.message(), Some(expected));
            }
            other => panic!("expected Transformation, got {other:?}"),
        }
    }

    #[test]
    fn wrong_input_kind_fails_at_encoded_stage() {
        let err = int_from_string()
            .decode(&Value::Int(3), &opts())
            .unwrap_err();
        assert!(matches!(
            err,
            Issue::Transformation {
                kind: TransformationKind::Encoded,
                ..
            }
        ));
    }

    #[test]
    fn int_from_string_rejects_fractions() {
        let fraction = Value::from("1.5");
        assert!(int_from_string().decode(&fraction, &opts()).is_err());
    }

    #[test]
    fn encode_writes_text_back() {
        assert_eq!(
            int_from_string().encode(&Value::Int(18), &opts()),
            Ok(Value::from("18"))
        );
        assert_eq!(
            boolean_from_string().encode(&Value::Bool(false), &opts()),
            Ok(Value::from("false"))
        );
    }

    #[test]
    fn encode_rejects_wrong_decoded_kind() {
        let err = int_from_string()
            .encode(&Value::from("18"), &opts())
            .unwrap_err();
        assert!(matches!(
            err,
            Issue::Transformation {
                kind: TransformationKind::Type,
                ..
            }
        ));
    }

    #[test]
    fn checkbox_values() {
        let s = boolean_from_string();
        assert_eq!(s.decode(&Value::from("on"), &opts()), Ok(Value::Bool(true)));
        assert_eq!(s.decode(&Value::from(""), &opts()), Ok(Value::Bool(false)));
        assert!(s.decode(&Value::from("maybe"), &opts()).is_err());
    }

    #[test]
    fn trimmed_strips_whitespace() {
        assert_eq!(
            trimmed().decode(&Value::from("  hi "), &opts()),
            Ok(Value::from("hi"))
        );
    }
}
