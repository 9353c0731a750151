//! # Encoded Kinds
//!
//! Type-level markers for the encoded ("decoded-from") side of a schema.
//! Every [`Schema`](crate::Schema) names its kind through an associated
//! type, which lets the form layer demand at compile time that a field can
//! be fed from exactly one record entry: [`FormEncoded`] is implemented
//! only for text, files, and lists of either.
//!
//! The markers are uninhabited; they exist only in signatures.

use std::marker::PhantomData;

use formwise_core::Shape;

/// A type-level encoded kind with its runtime [`Shape`].
pub trait Encoded: Send + Sync + 'static {
    /// Runtime description of this kind.
    fn shape() -> Shape;
}

/// Kinds that fit one record entry.
pub trait FormEncoded: Encoded {}

/// Kinds that fit one submission value (the element kinds of list fields).
pub trait ScalarEncoded: Encoded {}

/// Single text value.
pub enum Text {}

/// Single opaque file.
pub enum Blob {}

/// Number.
pub enum Number {}

/// Boolean.
pub enum Bool {}

/// Nested object.
pub enum Object {}

/// Statically unknown.
pub enum Unknown {}

/// Ordered list of `K`.
pub struct ListOf<K>(PhantomData<K>, Never);

/// Either one `K` or a list of them.
pub struct OneOrMany<K>(PhantomData<K>, Never);

#[doc(hidden)]
pub enum Never {}

impl Encoded for Text {
    fn shape() -> Shape {
        Shape::Text
    }
}

impl Encoded for Blob {
    fn shape() -> Shape {
        Shape::File
    }
}

impl Encoded for Number {
    fn shape() -> Shape {
        Shape::Number
    }
}

impl Encoded for Bool {
    fn shape() -> Shape {
        Shape::Boolean
    }
}

impl Encoded for Object {
    fn shape() -> Shape {
        Shape::Object
    }
}

impl Encoded for Unknown {
    fn shape() -> Shape {
        Shape::Unknown
    }
}

impl<K: Encoded> Encoded for ListOf<K> {
    fn shape() -> Shape {
        Shape::List(Box::new(K::shape()))
    }
}

impl<K: Encoded> Encoded for OneOrMany<K> {
    fn shape() -> Shape {
        Shape::OneOrMany(Box::new(K::shape()))
    }
}

impl ScalarEncoded for Text {}
impl ScalarEncoded for Blob {}

impl FormEncoded for Text {}
impl FormEncoded for Blob {}
impl<K: ScalarEncoded> FormEncoded for ListOf<K> {}
impl<K: ScalarEncoded> FormEncoded for OneOrMany<K> {}
