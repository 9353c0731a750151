//! # formwise-schema — Schema Capability
//!
//! The validation capability the form layer composes with: schemas that
//! decode and encode [`Value`](formwise_core::Value)s, the nested [`Issue`]
//! tree a failure produces, a [`Validator`] that runs schemas, and an
//! [`IssueFormatter`] that flattens issue trees into per-path messages.
//!
//! ## Schemas
//!
//! - Primitives: [`string`], [`file`], [`number`], [`integer`], [`boolean`],
//!   [`literals`].
//! - Transformations: [`number_from_string`], [`int_from_string`],
//!   [`boolean_from_string`], [`trimmed`], and the general [`transform`].
//! - Refinements through [`SchemaExt`]: `min_length`, `greater_than_or_equal_to`,
//!   `filter`, ... each with an optional override message.
//! - Collections: [`array`], [`array_ensure`], [`optional`].
//! - Composition: [`Struct`].
//!
//! Every schema names its encoded kind (see [`kind`]), which is what lets
//! the form layer reject non-form-coercible fields at compile time.
//!
//! ## Crate Policy
//!
//! - Depends only on `formwise-core` internally.
//! - Schemas are immutable once built and are `Send + Sync`.
//! - A failing decode always returns an `Issue`; schemas never panic.

pub mod collection;
pub mod formatter;
pub mod issue;
pub mod kind;
pub mod primitive;
pub mod refine;
pub mod schema;
pub mod structure;
pub mod transform;
pub mod validator;

pub use collection::{array, array_ensure, optional, Array, ArrayEnsure, Optional};
pub use formatter::{ArrayFormatter, FormattedIssue, IssueFormatter};
pub use issue::{Issue, IssueTag, RefinementKind, TransformationKind};
pub use kind::{Encoded, FormEncoded, ScalarEncoded};
pub use primitive::{
    boolean, file, integer, literals, number, string, BooleanSchema, FileSchema, Literals,
    NumberSchema, StringSchema,
};
pub use refine::{Refine, SchemaExt};
pub use schema::{erase, DynSchema, Schema, SchemaRef};
pub use structure::Struct;
pub use transform::{
    boolean_from_string, int_from_string, number_from_string, transform, trimmed, Transform,
};
pub use validator::{AsyncValidator, SchemaValidator, Validator};
