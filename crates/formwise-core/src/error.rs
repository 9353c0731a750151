//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared across Formwise. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Composition errors are raised while a model is being defined and are
//!   fatal to that definition. They never surface at decode time.
//! - Configuration errors name the offending source (variable or document)
//!   and the rejected value.
//! - Validation failures are not represented here: they travel as issue
//!   trees inside the schema layer and are reshaped by the form decoder.

use thiserror::Error;

use crate::shape::Shape;

/// Top-level error type for Formwise.
#[derive(Error, Debug)]
pub enum FormwiseError {
    /// A form model could not be composed.
    #[error("composition error: {0}")]
    Composition(#[from] CompositionError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A JSON document could not be deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error raised while composing fields into a form model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// The schema's encoded side cannot be represented as one record entry.
    #[error("schema '{schema}' is not form-coercible: encoded shape is {shape}")]
    NotFormCoercible {
        /// Description of the offending schema.
        schema: String,
        /// The encoded shape that was rejected.
        shape: Shape,
    },

    /// Two fields were registered under the same name.
    #[error("duplicate field name '{0}'")]
    DuplicateField(String),

    /// A model was defined without any fields.
    #[error("a form model needs at least one field")]
    EmptyModel,
}

/// Error while loading parse options.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable held a value outside the accepted set.
    #[error("invalid value '{value}' for {var}")]
    InvalidValue {
        /// Variable name.
        var: String,
        /// Rejected value.
        value: String,
    },

    /// A YAML configuration document could not be parsed.
    #[error("cannot parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
