//! # Collection Schemas
//!
//! [`Array`] decodes a list element by element. [`ArrayEnsure`] also
//! accepts a bare element and treats it as a one-element list, and encodes
//! a one-element list back to the bare element: this mirrors how a form
//! record collapses a key submitted once into a scalar. [`Optional`] marks
//! a struct property that may be absent.

use formwise_core::{ParseOptions, Value};

use crate::issue::Issue;
use crate::kind::{ListOf, OneOrMany};
use crate::schema::Schema;

/// List of `S`.
#[derive(Debug, Clone)]
pub struct Array<S> {
    item: S,
}

/// One `S` or a list of them, always decoded to a list.
#[derive(Debug, Clone)]
pub struct ArrayEnsure<S> {
    item: S,
}

/// A property that may be omitted.
#[derive(Debug, Clone)]
pub struct Optional<S> {
    inner: S,
}

/// List schema.
pub fn array<S: Schema>(item: S) -> Array<S> {
    Array { item }
}

/// Scalar-or-list schema.
pub fn array_ensure<S: Schema>(item: S) -> ArrayEnsure<S> {
    ArrayEnsure { item }
}

/// Optional property schema.
pub fn optional<S: Schema>(inner: S) -> Optional<S> {
    Optional { inner }
}

#[derive(Clone, Copy)]
enum Direction {
    Decode,
    Encode,
}

/// Apply `item` to every element of `items`. Failures are pointed at
/// their index and grouped under a composite over `container`.
fn each_item<S: Schema>(
    item: &S,
    container: &Value,
    items: &[Value],
    options: &ParseOptions,
    direction: Direction,
) -> Result<Value, Issue> {
    let mut out = Vec::with_capacity(items.len());
    let mut issues = Vec::new();
    for (index, element) in items.iter().enumerate() {
        let result = match direction {
            Direction::Decode => item.decode(element, options),
            Direction::Encode => item.encode(element, options),
        };
        match result {
            Ok(v) => out.push(v),
            Err(issue) => {
                issues.push(Issue::pointer([index], Some(container.clone()), issue));
                if options.stop_at_first() {
                    break;
                }
            }
        }
    }
    if issues.is_empty() {
        Ok(Value::List(out))
    } else {
        Err(Issue::composite(Some(container.clone()), issues))
    }
}

impl<S: Schema> Array<S> {
    fn apply(
        &self,
        input: &Value,
        options: &ParseOptions,
        direction: Direction,
    ) -> Result<Value, Issue> {
        match input {
            Value::List(items) => each_item(&self.item, input, items, options, direction),
            other => Err(Issue::type_mismatch(self.describe(), Some(other.clone()))),
        }
    }
}

impl<S: Schema> Schema for Array<S> {
    type Encoded = ListOf<S::Encoded>;

    fn decode(&self, input: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        self.apply(input, options, Direction::Decode)
    }

    fn encode(&self, value: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        self.apply(value, options, Direction::Encode)
    }

    fn describe(&self) -> String {
        format!("ReadonlyArray<{}>", self.item.describe())
    }
}

impl<S: Schema> Schema for ArrayEnsure<S> {
    type Encoded = OneOrMany<S::Encoded>;

    fn decode(&self, input: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        match input {
            Value::List(items) => each_item(&self.item, input, items, options, Direction::Decode),
            single => {
                let wrapped = Value::List(vec![single.clone()]);
                let items = std::slice::from_ref(single);
                each_item(&self.item, &wrapped, items, options, Direction::Decode)
            }
        }
    }

    fn encode(&self, value: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        let Value::List(items) = value else {
            return Err(Issue::type_mismatch(
                format!("ReadonlyArray<{}>", self.item.describe()),
                Some(value.clone()),
            ));
        };
        match each_item(&self.item, value, items, options, Direction::Encode)? {
            Value::List(mut encoded) if encoded.len() == 1 => Ok(encoded.remove(0)),
            encoded => Ok(encoded),
        }
    }

    fn describe(&self) -> String {
        let item = self.item.describe();
        format!("{item} | ReadonlyArray<{item}>")
    }
}

impl<S: Schema> Schema for Optional<S> {
    type Encoded = S::Encoded;

    fn decode(&self, input: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        self.inner.decode(input, options)
    }

    fn encode(&self, value: &Value, options: &ParseOptions) -> Result<Value, Issue> {
        self.inner.encode(value, options)
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }

    fn is_optional(&self) -> bool {
        true
    }
}
