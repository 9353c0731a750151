//! # Schema Traits
//!
//! [`Schema`] is the typed trait every schema implements: it names its
//! encoded kind and converts values in both directions, failing with an
//! [`Issue`] tree. [`DynSchema`] is its object-safe twin, implemented for
//! every `Schema`, so heterogeneous schemas can be stored side by side as
//! [`SchemaRef`]s.

use std::fmt;
use std::sync::Arc;

use formwise_core::{ParseOptions, Shape, Value};

use crate::issue::Issue;
use crate::kind::Encoded;

/// A bidirectional schema between an encoded and a decoded value.
pub trait Schema: fmt::Debug + Send + Sync + 'static {
    /// The kind of value this schema decodes from.
    type Encoded: Encoded;

    /// Decode an encoded value.
    fn decode(&self, input: &Value, options: &ParseOptions) -> Result<Value, Issue>;

    /// Encode a decoded value.
    fn encode(&self, value: &Value, options: &ParseOptions) -> Result<Value, Issue>;

    /// Human description used in `Expected ...` messages.
    fn describe(&self) -> String;

    /// Whether a struct may omit the property entirely.
    fn is_optional(&self) -> bool {
        false
    }
}

/// Object-safe view of a [`Schema`].
pub trait DynSchema: fmt::Debug + Send + Sync {
    /// Runtime shape of the encoded side.
    fn encoded_shape(&self) -> Shape;

    /// See [`Schema::decode`].
    fn dyn_decode(&self, input: &Value, options: &ParseOptions) -> Result<Value, Issue>;

    /// See [`Schema::encode`].
    fn dyn_encode(&self, value: &Value, options: &ParseOptions) -> Result<Value, Issue>;

    /// See [`Schema::describe`].
    fn dyn_describe(&self) -> String;

    /// See [`Schema::is_optional`].
    fn dyn_is_optional(&self) -> bool;
}

impl<S: Schema> DynSchema for S {
    fn encoded_shape(&self) -> Shape {
        S::Encoded::shape()
    }

    fn dyn_decode(&self, input: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        self.decode(input, options)
    }

    fn dyn_encode(&self, value: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        self.encode(value, options)
    }

    fn dyn_describe(&self) -> String {
        self.describe()
    }

    fn dyn_is_optional(&self) -> bool {
        self.is_optional()
    }
}

/// Shared, type-erased schema.
pub type SchemaRef = Arc<dyn DynSchema>;

/// Erase a schema into a [`SchemaRef`].
pub fn erase<S: Schema>(schema: S) -> SchemaRef {
    Arc::new(schema)
}
