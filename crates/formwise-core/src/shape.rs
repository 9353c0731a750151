//! # Encoded Shapes
//!
//! Runtime description of the "decoded-from" side of a schema. The form
//! layer uses it to decide whether a schema can be fed from exactly one
//! record entry.

use std::fmt;

/// The shape a schema expects on its encoded side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A single text value.
    Text,
    /// A single opaque file handle.
    File,
    /// A number (integer or float).
    Number,
    /// A boolean.
    Boolean,
    /// A nested object.
    Object,
    /// An ordered list of the inner shape.
    List(Box<Shape>),
    /// Either a single inner value or a list of them.
    OneOrMany(Box<Shape>),
    /// No static knowledge about the encoded side.
    Unknown,
}

impl Shape {
    /// Returns true when a value of this shape always fits into one record
    /// entry: text, a file, or a (possibly collapsed) list of either.
    pub fn is_form_coercible(&self) -> bool {
        match self {
            Shape::Text | Shape::File => true,
            Shape::List(inner) | Shape::OneOrMany(inner) => inner.is_scalar_coercible(),
            Shape::Number | Shape::Boolean | Shape::Object | Shape::Unknown => false,
        }
    }

    fn is_scalar_coercible(&self) -> bool {
        matches!(self, Shape::Text | Shape::File)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Text => write!(f, "text"),
            Shape::File => write!(f, "file"),
            Shape::Number => write!(f, "number"),
            Shape::Boolean => write!(f, "boolean"),
            Shape::Object => write!(f, "object"),
            Shape::List(inner) => write!(f, "list of {inner}"),
            Shape::OneOrMany(inner) => write!(f, "one or many {inner}"),
            Shape::Unknown => write!(f, "unknown"),
        }
    }
}
