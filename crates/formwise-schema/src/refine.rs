//! # Refinements
//!
//! A [`Refine`] narrows another schema with a predicate over the decoded
//! value. [`SchemaExt`] adds the common refinements as chainable methods:
//!
//! ```
//! use formwise_schema::{int_from_string, string, SchemaExt};
//!
//! let age = int_from_string().greater_than_or_equal_to(18.0);
//! let name = string()
//!     .min_length(10)
//!     .with_message("Name must be at least 10 characters long");
//! # let _ = (age, name);
//! ```

use std::fmt;
use std::sync::Arc;

use formwise_core::{ParseOptions, Value};

use crate::issue::{Issue, RefinementKind};
use crate::schema::Schema;

/// Predicate over a decoded value.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A schema narrowed by a predicate.
pub struct Refine<S> {
    from: S,
    description: String,
    predicate: Predicate,
    message: Option<String>,
}

impl<S> Refine<S> {
    /// Message reported when the predicate rejects a value.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<S: fmt::Debug> fmt::Debug for Refine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refine")
            .field("description", &self.description)
            .field("from", &self.from)
            .field("message", &self.message)
            .finish()
    }
}

impl<S: Schema> Refine<S> {
    fn reject(&self, actual: &Value, checked: Value) -> Issue {
        Issue::refinement(
            RefinementKind::Predicate,
            actual.clone(),
            Issue::type_mismatch(self.description.clone(), Some(checked)),
        )
        .with_message_opt(self.message.clone())
    }
}

impl<S: Schema> Schema for Refine<S> {
    type Encoded = S::Encoded;

    fn decode(&self, input: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        let decoded = self
            .from
            .decode(input, options)
            .map_err(|issue| Issue::refinement(RefinementKind::From, input.clone(), issue))?;
        if (self.predicate)(&decoded) {
            Ok(decoded)
        } else {
            Err(self.reject(input, decoded))
        }
    }

    fn encode(&self, value: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        if !(self.predicate)(value) {
            return Err(self.reject(value, value.clone()));
        }
        self.from
            .encode(value, options)
            .map_err(|issue| Issue::refinement(RefinementKind::From, value.clone(), issue))
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn is_optional(&self) -> bool {
        self.from.is_optional()
    }
}

fn number_label(n: f64) -> String {
    Value::Float(n).to_string()
}

fn text_len(value: &Value) -> Option<usize> {
    value.as_str().map(|s| s.chars().count())
}

fn list_len(value: &Value) -> Option<usize> {
    value.as_list().map(<[Value]>::len)
}

/// Chainable refinements for every schema.
pub trait SchemaExt: Schema + Sized {
    /// Narrow with an arbitrary predicate. `description` is what the
    /// default message says was expected.
    fn filter<P>(self, description: impl Into<String>, predicate: P) -> Refine<Self>
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Refine {
            from: self,
            description: description.into(),
            predicate: Arc::new(predicate),
            message: None,
        }
    }

    /// Text with at least `n` characters.
    fn min_length(self, n: usize) -> Refine<Self> {
        self.filter(
            format!("a string at least {n} character(s) long"),
            move |v| text_len(v).is_some_and(|len| len >= n),
        )
    }

    /// Text with at most `n` characters.
    fn max_length(self, n: usize) -> Refine<Self> {
        self.filter(
            format!("a string at most {n} character(s) long"),
            move |v| text_len(v).is_some_and(|len| len <= n),
        )
    }

    /// Text with at least one character.
    fn non_empty(self) -> Refine<Self> {
        self.filter(
            "a non empty string",
            |v| text_len(v).is_some_and(|len| len > 0),
        )
    }

    /// A number without a fractional part.
    fn int(self) -> Refine<Self> {
        self.filter("an integer", |v| match v {
            Value::Int(_) => true,
            Value::Float(n) => n.is_finite() && n.fract() == 0.0,
            _ => false,
        })
    }

    /// A number `>= min`.
    fn greater_than_or_equal_to(self, min: f64) -> Refine<Self> {
        self.filter(
            format!("a number greater than or equal to {}", number_label(min)),
            move |v| v.as_f64().is_some_and(|n| n >= min),
        )
    }

    /// A number `<= max`.
    fn less_than_or_equal_to(self, max: f64) -> Refine<Self> {
        self.filter(
            format!("a number less than or equal to {}", number_label(max)),
            move |v| v.as_f64().is_some_and(|n| n <= max),
        )
    }

    /// A number `> min`.
    fn greater_than(self, min: f64) -> Refine<Self> {
        self.filter(
            format!("a number greater than {}", number_label(min)),
            move |v| v.as_f64().is_some_and(|n| n > min),
        )
    }

    /// A number `< max`.
    fn less_than(self, max: f64) -> Refine<Self> {
        self.filter(
            format!("a number less than {}", number_label(max)),
            move |v| v.as_f64().is_some_and(|n| n < max),
        )
    }

    /// A list with at least `n` items.
    fn min_items(self, n: usize) -> Refine<Self> {
        self.filter(
            format!("an array of at least {n} item(s)"),
            move |v| list_len(v).is_some_and(|len| len >= n),
        )
    }

    /// A list with at most `n` items.
    fn max_items(self, n: usize) -> Refine<Self> {
        self.filter(
            format!("an array of at most {n} item(s)"),
            move |v| list_len(v).is_some_and(|len| len <= n),
        )
    }
}

impl<S: Schema> SchemaExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::string;
    use crate::transform::int_from_string;

    fn opts() -> ParseOptions {
        ParseOptions::default()
    }

    #[test]
    fn predicate_failure_reports_input_and_checked_value() {
        let age = int_from_string().greater_than(17.0);
        let err = age.decode(&Value::from("17"), &opts()).unwrap_err();
        let checked = Issue::type_mismatch("a number greater than 17", Some(Value::Int(17)));
        assert_eq!(
            err,
            Issue::refinement(RefinementKind::Predicate, Value::from("17"), checked)
        );
    }

    #[test]
    fn inner_failure_is_wrapped_as_from() {
        let age = int_from_string().greater_than_or_equal_to(18.0);
        let err = age.decode(&Value::from("x"), &opts()).unwrap_err();
        assert!(matches!(
            err,
            Issue::Refinement {
                kind: RefinementKind::From,
                ..
            }
        ));
    }

    #[test]
    fn message_rides_on_the_refinement_node() {
        let name = string()
            .min_length(10)
            .with_message("Name must be at least 10 characters long");
        let err = name.decode(&Value::from("John"), &opts()).unwrap_err();
        assert_eq!(
            err.message(),
            Some("Name must be at least 10 characters long")
        );
        assert_eq!(err.actual(), Some(&Value::from("John")));
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let s = string().min_length(3);
        assert!(s.decode(&Value::from("äöü"), &opts()).is_ok());
        assert!(s.decode(&Value::from("äö"), &opts()).is_err());
    }

    #[test]
    fn encode_checks_predicate_first() {
        let age = int_from_string().greater_than_or_equal_to(18.0);
        let adult = age.encode(&Value::Int(20), &opts());
        assert_eq!(adult, Ok(Value::from("20")));
        assert!(age.encode(&Value::Int(3), &opts()).is_err());
    }

    #[test]
    fn chained_refinements_describe_outermost() {
        let s = int_from_string().int().less_than(100.0);
        assert_eq!(s.describe(), "a number less than 100");
    }
}
