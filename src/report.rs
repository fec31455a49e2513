//! Report rendering for validation results.
//!
//! The reporter is the only component that decides presentation: the
//! engine hands it a [`ValidationReport`] and it produces either the
//! human-readable text layout (warnings first, then errors, then a
//! summary line) or a machine-readable JSON document for CI tooling.
//! Exit-status policy lives here too: warnings never fail a run.

use serde::Serialize;
use std::str::FromStr;

use crate::diagnostics::Diagnostic;
use crate::validator::ValidationReport;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}'. Valid formats: text, json",
                other
            )),
        }
    }
}

/// JSON shape emitted by `--format json`
#[derive(Serialize)]
struct JsonReport<'a> {
    schema: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    plugin_count: Option<usize>,
    errors: usize,
    warnings: usize,
    passed: bool,
    diagnostics: &'a [Diagnostic],
}

pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render the full report as one string, trailing newline included
    pub fn render(&self, report: &ValidationReport) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(render_text(report)),
            OutputFormat::Json => render_json(report),
        }
    }
}

fn render_text(report: &ValidationReport) -> String {
    let mut out = String::new();

    if let Some(count) = report.plugin_count {
        out.push_str(&format!("Found {} plugin(s)\n", count));
    }

    if report.warning_count() > 0 {
        out.push_str("\nWarnings:\n");
        for warning in report.warnings() {
            out.push_str(&format!("  ⚠ {}: {}\n", warning.location, warning.message));
        }
    }

    if report.error_count() > 0 {
        out.push_str("\nErrors:\n");
        for error in report.errors() {
            out.push_str(&format!("  ✗ {}: {}\n", error.location, error.message));
        }
    }

    out.push('\n');
    if report.passed() {
        out.push_str(&format!(
            "✓ Validation PASSED: 0 error(s), {} warning(s)\n",
            report.warning_count()
        ));
    } else {
        out.push_str(&format!(
            "✗ Validation FAILED: {} error(s), {} warning(s)\n",
            report.error_count(),
            report.warning_count()
        ));
    }

    out
}

fn render_json(report: &ValidationReport) -> Result<String> {
    let body = serde_json::to_string_pretty(&JsonReport {
        schema: report.schema,
        plugin_count: report.plugin_count,
        errors: report.error_count(),
        warnings: report.warning_count(),
        passed: report.passed(),
        diagnostics: &report.diagnostics,
    })?;
    Ok(body + "\n")
}
