//! # formwise-form — Schema-Driven Form Decoding
//!
//! Decodes flat, multi-valued form submissions into typed values using a
//! schema model, and turns validation failures into a mapping from dotted
//! field path to `{ actual, message }`, ready for per-field error display.
//!
//! ## Pipeline
//!
//! ```text
//! Submission ──to_record──▶ Record ──Validator──▶ Value
//!                                        │
//!                                        └─ Issue ──collect/format/merge──▶ ParseError
//! ```
//!
//! - [`submission`]: the raw input, with URL-encoded read/write.
//! - [`record`]: grouping by key and back, plus [`RecordSchema`].
//! - [`field`] and [`model`]: form-eligible schemas and their composition.
//! - [`collect`]: actual values per path, last write wins.
//! - [`merge`]: actual values joined with formatter messages.
//! - [`decode`]: the orchestrator, [`FormDecoder`].
//!
//! ## Example
//!
//! ```
//! use formwise_form::{Field, FormDecoder, Model, Submission};
//! use formwise_schema::{array, string, SchemaExt};
//!
//! let name = string()
//!     .min_length(10)
//!     .with_message("Name must be at least 10 characters long");
//! let model = Model::new([
//!     ("name", Field::new(name)),
//!     ("pets", Field::new(array(string()))),
//! ])
//! .unwrap();
//!
//! let body = Submission::from_urlencoded(b"name=John&pets=Fido&pets=Rex");
//! let err = FormDecoder::new().decode(&model, &body).unwrap_err();
//! assert_eq!(err.message("name"), Some("Name must be at least 10 characters long"));
//! ```
//!
//! ## Crate Policy
//!
//! - Raw issue trees never escape [`FormDecoder`]; callers only see
//!   [`ParseError`].
//! - Models are immutable after [`Model::new`] and safe to share.
//! - Nothing here performs I/O; suspension happens only inside an
//!   injected [`AsyncValidator`](formwise_schema::AsyncValidator).

pub mod collect;
pub mod decode;
pub mod error;
pub mod field;
pub mod merge;
pub mod model;
pub mod record;
pub mod submission;

pub use collect::{collect, collect_actuals};
pub use decode::{decode_form_model, FormDecoder};
pub use error::{ParseError, SubmissionError};
pub use field::Field;
pub use merge::{merge_issues, IssueResult, IssueResultMapping};
pub use model::Model;
pub use record::{from_record, schema_record, to_record, Record, RecordSchema};
pub use submission::{FormValue, Submission};
