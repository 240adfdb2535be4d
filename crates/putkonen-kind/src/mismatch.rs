//! Shape mismatch error.

use crate::{Kind, Shape};
use serde::{Deserialize, Serialize};

/// A value did not have the shape an operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct ShapeMismatch {
    /// Shape the operation needed.
    pub expected: Shape,
    /// Kind of the value actually passed.
    pub found: Kind,
}

impl ShapeMismatch {
    pub fn new(expected: Shape, found: Kind) -> Self {
        Self { expected, found }
    }
}
