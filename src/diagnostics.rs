//! Diagnostics
//!
//! Collects errors and warnings raised while linting config trees. The sink
//! is append-only for the lifetime of one invocation; only error-severity
//! items fail the batch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// Severity
// =============================================================================

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

// =============================================================================
// Diagnostic Item
// =============================================================================

/// A single finding tied to a source location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    /// 1-based line; 0 when the finding concerns the whole file
    pub line: usize,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Renders as `path:line: message` for errors and
/// `path:line: warning: message` for warnings.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "{}:{}: {}", self.path.display(), self.line, self.message),
            Severity::Warning => write!(
                f,
                "{}:{}: warning: {}",
                self.path.display(),
                self.line,
                self.message
            ),
        }
    }
}

// =============================================================================
// Diagnostic Sink
// =============================================================================

/// Ordered collection of diagnostics for a whole lint run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosticSink {
    items: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn report(&mut self, severity: Severity, path: &Path, line: usize, message: impl Into<String>) {
        self.push(Diagnostic {
            path: path.to_path_buf(),
            line,
            severity,
            message: message.into(),
        });
    }

    pub fn error(&mut self, path: &Path, line: usize, message: impl Into<String>) {
        self.report(Severity::Error, path, line, message);
    }

    pub fn warning(&mut self, path: &Path, line: usize, message: impl Into<String>) {
        self.report(Severity::Warning, path, line, message);
    }

    /// True once any error (not warning) has been recorded
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.items.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.items.len() - self.error_count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
