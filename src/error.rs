//! Error types for the config linter
//!
//! Malformed config *content* is never an error here: it becomes a
//! [`Diagnostic`](crate::diagnostics::Diagnostic). These types cover the
//! failures that stop the tool itself (I/O, configuration, serialization).

use std::path::PathBuf;
use thiserror::Error;

/// Result type for linter operations
pub type Result<T> = std::result::Result<T, LintError>;

/// Linter errors
#[derive(Error, Debug)]
pub enum LintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Resource root not found: {}", path.display())]
    MissingRoot { path: PathBuf },
}

/// A structural failure in config-tree text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ParseError {
    /// 1-based line where the parser gave up
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}
