//! # Validators
//!
//! A [`Validator`] is the capability that runs a schema against a value.
//! The form layer never calls schemas directly; it goes through a
//! validator so the capability can be swapped (instrumented, stubbed in
//! tests, or extended with checks that need I/O).
//!
//! [`AsyncValidator`] is the suspending flavour. Every synchronous
//! validator is also an asynchronous one that completes immediately.

use std::future::{self, Future};

use formwise_core::{ParseOptions, Value};

use crate::issue::Issue;
use crate::schema::DynSchema;

/// Synchronous decode/encode capability.
pub trait Validator: Send + Sync {
    /// Decode `input` with `schema`.
    fn decode(
        &self,
        schema: &dyn DynSchema,
        input: &Value,
        options: &ParseOptions,
    ) -> Result<Value, Issue>;

    /// Encode `value` with `schema`.
    fn encode(
        &self,
        schema: &dyn DynSchema,
        value: &Value,
        options: &ParseOptions,
    ) -> Result<Value, Issue>;
}

/// Decode capability that may suspend, e.g. for a uniqueness lookup.
pub trait AsyncValidator: Send + Sync {
    /// Decode `input` with `schema`.
    fn decode_async(
        &self,
        schema: &dyn DynSchema,
        input: &Value,
        options: &ParseOptions,
    ) -> impl Future<Output = Result<Value, Issue>> + Send;
}

impl<V: Validator> AsyncValidator for V {
    fn decode_async(
        &self,
        schema: &dyn DynSchema,
        input: &Value,
        options: &ParseOptions,
    ) -> impl Future<Output = Result<Value, Issue>> + Send {
        future::ready(self.decode(schema, input, options))
    }
}

/// Runs schemas as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl Validator for SchemaValidator {
    fn decode(
        &self,
        schema: &dyn DynSchema,
        input: &Value,
        options: &ParseOptions,
    ) -> Result<Value, Issue> {
        let result = schema.dyn_decode(input, options);
        tracing::trace!(schema = %schema.dyn_describe(), ok = result.is_ok(), "schema decode");
        result
    }

    fn encode(
        &self,
        schema: &dyn DynSchema,
        value: &Value,
        options: &ParseOptions,
    ) -> Result<Value, Issue> {
        let result = schema.dyn_encode(value, options);
        tracing::trace!(schema = %schema.dyn_describe(), ok = result.is_ok(), "schema encode");
        result
    }
}
