//! # Form Fields
//!
//! A [`Field`] marks one schema as form-eligible: its encoded side must
//! fit in a single record entry, so it is text, a file, or a list of
//! either. [`Field::new`] enforces this with a trait bound, so the
//! following does not compile:
//!
//! ```compile_fail
//! use formwise_form::Field;
//! use formwise_schema::number;
//!
//! let age = Field::new(number());
//! ```
//!
//! Schemas that are only known at runtime go through
//! [`Field::try_from_dyn`], which applies the same rule to the schema's
//! encoded shape and fails with a [`CompositionError`].

use std::fmt;

use formwise_core::CompositionError;
use formwise_schema::{erase, FormEncoded, Schema, SchemaRef};

/// A schema that decodes from a form-coercible value.
#[derive(Clone)]
pub struct Field {
    schema: SchemaRef,
}

impl Field {
    /// Wrap a schema whose encoded kind is form-coercible.
    ///
    /// ```
    /// use formwise_form::Field;
    /// use formwise_schema::{array, int_from_string, string};
    ///
    /// let name = Field::new(string());
    /// let age = Field::new(int_from_string());
    /// let pets = Field::new(array(string()));
    /// ```
    pub fn new<S>(schema: S) -> Self
    where
        S: Schema,
        S::Encoded: FormEncoded,
    {
        Self {
            schema: erase(schema),
        }
    }

    /// Wrap a type-erased schema after checking its encoded shape.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::NotFormCoercible`] when the schema
    /// decodes from a number, boolean, object, or a list of those.
    pub fn try_from_dyn(schema: SchemaRef) -> Result<Self, CompositionError> {
        let shape = schema.encoded_shape();
        if !shape.is_form_coercible() {
            return Err(CompositionError::NotFormCoercible {
                schema: schema.dyn_describe(),
                shape,
            });
        }
        Ok(Self { schema })
    }

    /// The wrapped schema.
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("schema", &self.schema.dyn_describe())
            .field("encoded", &self.schema.encoded_shape().to_string())
            .finish()
    }
}
