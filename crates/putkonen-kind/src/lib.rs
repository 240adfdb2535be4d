//! Structural classification of JSON values.
//!
//! Every value falls into exactly one [`Shape`]: a scalar, a sequence or a
//! container. Merge and flatten only ever branch on this classification.

mod kind;
mod mismatch;

pub use kind::{Kind, Shape};
pub use mismatch::ShapeMismatch;

use serde_json::{Map, Value};

/// A key-value mapping with string keys.
pub type Container = Map<String, Value>;

/// True iff `value` is a sequence.
///
/// `null` is not a sequence.
pub fn is_array(value: &Value) -> bool {
    Shape::of(value) == Shape::Sequence
}

/// True iff `value` is a key-value container.
///
/// False for `null`, arrays, strings and every other scalar.
pub fn is_object(value: &Value) -> bool {
    Shape::of(value) == Shape::Container
}

/// Borrow the container inside `value`, or report what was found instead.
pub fn expect_container(value: &Value) -> Result<&Container, ShapeMismatch> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ShapeMismatch::new(Shape::Container, Kind::of(other))),
    }
}

/// Borrow the elements of the sequence inside `value`, or report what was
/// found instead.
pub fn expect_sequence(value: &Value) -> Result<&[Value], ShapeMismatch> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(ShapeMismatch::new(Shape::Sequence, Kind::of(other))),
    }
}
