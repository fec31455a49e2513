//! Manifest validation engine.
//!
//! One generic engine consumes a versioned [`SchemaDescriptor`] and runs
//! three passes over the parsed document: top-level shape, per-entry
//! fields and formats, and cross-entry duplicate detection. Findings
//! accumulate into a [`ValidationReport`]; nothing here prints or exits.
//!
//! The only mid-pipeline short-circuit is a `plugins` field that is
//! missing or not an array: without an enumerable list the per-entry and
//! cross-entry passes cannot run, so they are skipped and the report's
//! `plugin_count` stays `None`.

use serde_json::Value;
use tracing::debug;

use crate::diagnostics::{Diagnostic, Severity};
use crate::schema::SchemaDescriptor;

mod duplicates;
mod plugins;
mod top_level;


/// Outcome of validating one manifest document
#[derive(Debug)]
pub struct ValidationReport {
    /// Version label of the schema the manifest was checked against
    pub schema: &'static str,
    pub diagnostics: Vec<Diagnostic>,
    /// Length of the plugin list, when it was enumerable
    pub plugin_count: Option<usize>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Warnings never affect the outcome
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }
}

/// Validate a parsed manifest against one schema generation's rules
pub fn validate(doc: &Value, schema: &SchemaDescriptor) -> ValidationReport {
    let mut diagnostics = Vec::new();

    let plugin_list = top_level::check(doc, schema, &mut diagnostics);

    let plugin_count = plugin_list.map(|list| {
        plugins::check(list, schema, &mut diagnostics);
        duplicates::check(list, schema, &mut diagnostics);
        list.len()
    });

    let report = ValidationReport {
        schema: schema.version,
        diagnostics,
        plugin_count,
    };

    debug!(
        schema = report.schema,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validation complete"
    );

    report
}
