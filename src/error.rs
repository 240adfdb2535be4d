//! Error types for the helper library.

use putkonen_kind::ShapeMismatch;

/// Errors surfaced by the dynamic entry points, `log` and option parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value did not have the shape the operation requires.
    #[error("shape error: {0}")]
    Shape(#[from] ShapeMismatch),

    /// Serializing a value for output failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing to the output sink failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Option text could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid log options.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience alias for library results.
pub type Result<T> = std::result::Result<T, Error>;
