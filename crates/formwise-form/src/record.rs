//! # Record Codec
//!
//! Converts between a [`Submission`] (flat, repeated keys) and a record
//! (one entry per key). A key submitted once becomes a scalar; a key
//! submitted several times becomes a list in submission order. Keys keep
//! their first-seen order.
//!
//! ## Round Trip
//!
//! `to_record(&from_record(&r)) == r` for every record without null
//! entries. Writing is lossy on purpose: nulls are dropped.

use std::sync::Arc;

use formwise_core::{Fields, ParseOptions, Value};
use formwise_schema::{AsyncValidator, Issue, Struct, Validator};

use crate::submission::{FormValue, Submission};

/// Grouped key → value(s) view of a submission.
pub type Record = Fields;

/// Group a submission by key.
pub fn to_record(submission: &Submission) -> Record {
    let mut record = Record::new();
    for (key, value) in submission.entries() {
        let value = Value::from(value.clone());
        match record.get_mut(key) {
            None => {
                record.insert(key, value);
            }
            Some(Value::List(items)) => items.push(value),
            Some(existing) => {
                let first = std::mem::replace(existing, Value::Null);
                *existing = Value::List(vec![first, value]);
            }
        }
    }
    record
}

/// Flatten a record into a submission. Files pass through as the same
/// handle, other values are written as their form string, nulls are
/// skipped.
pub fn from_record(record: &Record) -> Submission {
    let mut submission = Submission::new();
    for (key, value) in record.iter() {
        match value {
            Value::List(items) => {
                for item in items {
                    if let Some(v) = coerce(item) {
                        submission.append(key, v);
                    }
                }
            }
            scalar => {
                if let Some(v) = coerce(scalar) {
                    submission.append(key, v);
                }
            }
        }
    }
    submission
}

fn coerce(value: &Value) -> Option<FormValue> {
    match value {
        Value::Null => None,
        Value::File(f) => Some(FormValue::File(f.clone())),
        Value::Text(s) => Some(FormValue::Text(s.clone())),
        other => Some(FormValue::Text(other.to_string())),
    }
}

/// A struct schema whose encoded side is a [`Submission`].
///
/// Decoding groups the submission with [`to_record`] and hands the record
/// to the validator; encoding runs the validator backwards and flattens
/// the result with [`from_record`].
#[derive(Debug, Clone)]
pub struct RecordSchema {
    inner: Arc<Struct>,
}

/// Wrap a struct schema so it decodes from and encodes to submissions.
pub fn schema_record(schema: Struct) -> RecordSchema {
    RecordSchema {
        inner: Arc::new(schema),
    }
}

impl RecordSchema {
    /// The wrapped struct schema.
    pub fn schema(&self) -> &Struct {
        &self.inner
    }

    /// Decode a submission.
    pub fn decode<V: Validator + ?Sized>(
        &self,
        validator: &V,
        submission: &Submission,
        options: &ParseOptions,
    ) -> Result<Value, Issue> {
        let record = Value::Object(to_record(submission));
        validator.decode(self.inner.as_ref(), &record, options)
    }

    /// Decode a submission with a validator that may suspend.
    pub async fn decode_async<V: AsyncValidator + ?Sized>(
        &self,
        validator: &V,
        submission: &Submission,
        options: &ParseOptions,
    ) -> Result<Value, Issue> {
        let record = Value::Object(to_record(submission));
        validator
            .decode_async(self.inner.as_ref(), &record, options)
            .await
    }

    /// Encode a value back into a submission.
    pub fn encode<V: Validator + ?Sized>(
        &self,
        validator: &V,
        value: &Value,
        options: &ParseOptions,
    ) -> Result<Submission, Issue> {
        match validator.encode(self.inner.as_ref(), value, options)? {
            Value::Object(record) => Ok(from_record(&record)),
            other => Err(Issue::type_mismatch("record", Some(other))),
        }
    }
}
