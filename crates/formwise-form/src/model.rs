//! # Form Models
//!
//! A [`Model`] names the fields of one submittable form. It is built once,
//! usually at startup, and composes its fields into a single struct schema
//! wrapped as a [`RecordSchema`] so every decode reuses the same schema.

use formwise_core::CompositionError;
use formwise_schema::{Schema, SchemaRef, Struct};

use crate::field::Field;
use crate::record::{schema_record, RecordSchema};

/// Immutable, named collection of [`Field`]s.
#[derive(Debug, Clone)]
pub struct Model {
    fields: Vec<(String, Field)>,
    schema: RecordSchema,
}

impl Model {
    /// Compose a model from `(name, field)` pairs, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::DuplicateField`] if a name repeats and
    /// [`CompositionError::EmptyModel`] if no field is given.
    pub fn new<I, K>(fields: I) -> Result<Self, CompositionError>
    where
        I: IntoIterator<Item = (K, Field)>,
        K: Into<String>,
    {
        let mut named: Vec<(String, Field)> = Vec::new();
        for (name, field) in fields {
            let name = name.into();
            if named.iter().any(|(existing, _)| *existing == name) {
                return Err(CompositionError::DuplicateField(name));
            }
            named.push((name, field));
        }
        if named.is_empty() {
            return Err(CompositionError::EmptyModel);
        }

        let structure = Struct::new(
            named
                .iter()
                .map(|(name, field)| (name.clone(), field.schema().clone())),
        );
        let schema = structure.describe();
        tracing::debug!(fields = named.len(), %schema, "form model composed");

        Ok(Self {
            fields: named,
            schema: schema_record(structure),
        })
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields
            .iter()
            .map(|(name, field)| (name.as_str(), field))
    }

    /// Field name → underlying schema, in declaration order.
    pub fn schemas(&self) -> impl Iterator<Item = (&str, &SchemaRef)> {
        self.fields
            .iter()
            .map(|(name, field)| (name.as_str(), field.schema()))
    }

    /// The field registered under `name`.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, field)| field)
    }

    /// The composed schema, decoding from submissions.
    pub fn record_schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false: models have at least one field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
