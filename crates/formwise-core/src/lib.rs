//! # formwise-core — Foundational Types for Formwise
//!
//! This crate is the leaf of the Formwise workspace. It defines the value
//! model every other crate speaks, plus the shared configuration and error
//! types. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One dynamic value model.** Submissions, records, decoded values and
//!    the "actual" values carried by validation issues are all [`Value`]s.
//!    "Undefined" is expressed as `Option::None` at the use site, never as a
//!    sentinel variant.
//!
//! 2. **Files are opaque and identity-preserving.** A [`FileHandle`] is a
//!    shared handle; cloning it never copies the payload, and equality is
//!    identity. A file that enters the codec comes out as the same handle.
//!
//! 3. **Order is data.** [`OrderedMap`] keeps first-seen key order, which is
//!    what form grouping and issue merging are defined over.
//!
//! 4. **Capability is described, not guessed.** [`Shape`] describes the
//!    encoded side of a schema so form-coercibility can be checked once,
//!    at model construction.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `formwise-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod file;
pub mod options;
pub mod ordered;
pub mod path;
pub mod shape;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{CompositionError, ConfigError, FormwiseError};
pub use file::FileHandle;
pub use options::{ErrorReporting, ExcessProperty, ParseOptions};
pub use ordered::{Fields, OrderedMap};
pub use path::{join_path, PathSegment};
pub use shape::Shape;
pub use value::Value;
