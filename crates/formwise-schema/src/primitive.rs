//! # Primitive Schemas
//!
//! Leaf schemas that accept one value kind and pass it through unchanged
//! in both directions.

use formwise_core::{ParseOptions, Value};

use crate::issue::Issue;
use crate::kind::{Blob, Bool, Number, Text};
use crate::refine::{Refine, SchemaExt};
use crate::schema::Schema;

/// Accepts text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSchema;

/// Accepts file handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSchema;

/// Accepts integers and floats.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberSchema;

/// Accepts booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSchema;

/// Accepts one of a fixed set of strings.
#[derive(Debug, Clone)]
pub struct Literals {
    allowed: Vec<String>,
}

/// Text schema.
pub fn string() -> StringSchema {
    StringSchema
}

/// File schema.
pub fn file() -> FileSchema {
    FileSchema
}

/// Number schema.
pub fn number() -> NumberSchema {
    NumberSchema
}

/// Number without a fractional part.
pub fn integer() -> Refine<NumberSchema> {
    number().int()
}

/// Boolean schema.
pub fn boolean() -> BooleanSchema {
    BooleanSchema
}

/// Literal-union schema, e.g. the options of a `<select>`.
pub fn literals<I, S>(allowed: I) -> Literals
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Literals {
        allowed: allowed.into_iter().map(Into::into).collect(),
    }
}

fn check<S: Schema>(
    schema: &S,
    value: &Value,
    accept: impl Fn(&Value) -> bool,
) -> Result<Value, Issue> {
    if accept(value) {
        Ok(value.clone())
    } else {
        Err(Issue::type_mismatch(schema.describe(), Some(value.clone())))
    }
}

impl Schema for StringSchema {
    type Encoded = Text;

    fn decode(&self, input: &Value, _options: &ParseOptions) -> Result<Value, Issue> {
        check(self, input, |v| matches!(v, Value::Text(_)))
    }

    fn encode(&self, value: &Value, _options: &ParseOptions) -> Result<Value, Issue> {
        check(self, value, |v| matches!(v, Value::Text(_)))
    }

    fn describe(&self) -> String {
        "string".to_string()
    }
}

impl Schema for FileSchema {
    type Encoded = Blob;

    fn decode(&self, input: &Value, _options: &ParseOptions) -> Result<Value, Issue> {
        check(self, input, |v| matches!(v, Value::File(_)))
    }

    fn encode(&self, value: &Value, _options: &ParseOptions) -> Result<Value, Issue> {
        check(self, value, |v| matches!(v, Value::File(_)))
    }

    fn describe(&self) -> String {
        "File".to_string()
    }
}

impl Schema for NumberSchema {
    type Encoded = Number;

    fn decode(&self, input: &Value, _options: &ParseOptions) -> Result<Value, Issue> {
        check(self, input, |v| v.as_f64().is_some())
    }

    fn encode(&self, value: &Value, _options: &ParseOptions) -> Result<Value, Issue> {
        check(self, value, |v| v.as_f64().is_some())
    }

    fn describe(&self) -> String {
        "number".to_string()
    }
}

impl Schema for BooleanSchema {
    type Encoded = Bool;

    fn decode(&self, input: &Value, _options: &ParseOptions) -> Result<Value, Issue> {
        check(self, input, |v| v.as_bool().is_some())
    }

    fn encode(&self, value: &Value, _options: &ParseOptions) -> Result<Value, Issue> {
        check(self, value, |v| v.as_bool().is_some())
    }

    fn describe(&self) -> String {
        "boolean".to_string()
    }
}

impl Literals {
    fn accepts(&self, value: &Value) -> bool {
        value
            .as_str()
            .is_some_and(|s| self.allowed.iter().any(|a| a == s))
    }
}

impl Schema for Literals {
    type Encoded = Text;

    fn decode(&self, input: &Value, _options: &ParseOptions) -> Result<Value, Issue> {
        check(self, input, |v| self.accepts(v))
    }

    fn encode(&self, value: &Value, _options: &ParseOptions) -> Result<Value, Issue> {
        check(self, value, |v| self.accepts(v))
    }

    fn describe(&self) -> String {
        self.allowed
            .iter()
            .map(|a| format!("\"{a}\""))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
