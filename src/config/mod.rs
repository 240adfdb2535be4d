//! Output configuration for `log`
//!
//! Built-in defaults, optionally overridden from TOML text.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest accepted indentation width.
///
/// A local limit of this library that keeps `log` output readable; JSON
/// serialization itself puts no bound on indentation.
pub const MAX_INDENT: usize = 16;

/// Console stream that `log` writes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Options for `log` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogOptions {
    /// Spaces per indentation level (default: 2)
    pub indent: usize,

    /// Output stream (default: stdout)
    pub target: LogTarget,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            target: LogTarget::Stdout,
        }
    }
}

impl LogOptions {
    /// Parse options from TOML text; missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let options: Self = toml::from_str(contents)
            .map_err(|e| Error::Parse(format!("TOML parse error: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }

    /// Validate option values
    pub fn validate(&self) -> Result<()> {
        if self.indent > MAX_INDENT {
            return Err(Error::Config(format!(
                "indent must be in [0, {}], got {}",
                MAX_INDENT, self.indent
            )));
        }
        Ok(())
    }
}
