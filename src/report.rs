//! Rendering of lint results

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::error::Result;
use crate::walker::LintReport;

/// One line per diagnostic, in emission order
pub fn render_text(report: &LintReport) -> String {
    let mut out = String::new();
    for diagnostic in report.diagnostics.iter() {
        out.push_str(&diagnostic.to_string());
        out.push('\n');
    }
    out
}

/// `N error(s), M warning(s) in K file(s)`
pub fn summary_line(report: &LintReport) -> String {
    format!(
        "{} error(s), {} warning(s) in {} file(s)",
        report.diagnostics.error_count(),
        report.diagnostics.warning_count(),
        report.files_total()
    )
}

/// Machine-readable form of a lint run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub generated_at: String,
    pub files_checked: usize,
    pub files_failed: usize,
    pub errors: usize,
    pub warnings: usize,
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl JsonReport {
    pub fn from_report(report: &LintReport) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            files_checked: report.files_checked,
            files_failed: report.files_failed,
            errors: report.diagnostics.error_count(),
            warnings: report.diagnostics.warning_count(),
            passed: !report.has_errors(),
            diagnostics: report.diagnostics.as_slice().to_vec(),
        }
    }
}

pub fn render_json(report: &LintReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::from_report(report))?)
}
