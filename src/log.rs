//! Pass-through logging
//!
//! `log` pretty-prints a value as JSON to the console and hands the value
//! back, so it can sit in the middle of an expression.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::{self, Write};

use crate::config::{LogOptions, LogTarget};
use crate::error::{Error, Result};

/// Print `value` to stdout with the default options and return it.
pub fn log<T: Serialize>(value: T) -> Result<T> {
    log_with(value, &LogOptions::default())
}

/// Print `value` to the stream selected by `options` and return it.
pub fn log_with<T: Serialize>(value: T, options: &LogOptions) -> Result<T> {
    match options.target {
        LogTarget::Stdout => log_to(&mut io::stdout().lock(), value, options),
        LogTarget::Stderr => log_to(&mut io::stderr().lock(), value, options),
    }
}

/// Write `value` and a trailing newline to `writer`, then return the value.
pub fn log_to<W, T>(writer: &mut W, value: T, options: &LogOptions) -> Result<T>
where
    W: Write,
    T: Serialize,
{
    options.validate()?;
    let text = to_text(&value, options.indent)?;
    writeln!(writer, "{}", text)?;
    writer.flush()?;
    Ok(value)
}

/// Serialize `value` as JSON indented by `indent` spaces per level.
///
/// An indent of zero produces compact single-line output.
pub fn to_text<T>(value: &T, indent: usize) -> Result<String>
where
    T: Serialize + ?Sized,
{
    if indent == 0 {
        return Ok(serde_json::to_string(value)?);
    }

    let indent = vec![b' '; indent];
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
