//! Validation diagnostics.
//!
//! A diagnostic is one finding produced by the validation engine: a
//! severity, a stable rule id, the location it pertains to, and a
//! human-readable message. Diagnostics never mutate the manifest; they
//! are collected by the engine and consumed by the reporter.

use serde::Serialize;
use std::fmt;

/// Severity levels for validation findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Does not block the merge, but worth fixing
    Warning,
    /// Blocks the merge
    Error,
}

/// Where in the manifest a finding was made
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    /// The manifest document as a whole
    Manifest,
    /// A named top-level field
    Field { name: String },
    /// One plugin entry, by 1-based position
    Plugin {
        position: usize,
        /// Identity of the entry (id or name, schema-dependent), when known
        #[serde(skip_serializing_if = "Option::is_none")]
        identity: Option<String>,
    },
}

impl Location {
    pub fn field(name: impl Into<String>) -> Self {
        Location::Field { name: name.into() }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Manifest => write!(f, "manifest"),
            Location::Field { .. } => write!(f, "top-level"),
            Location::Plugin {
                position,
                identity: Some(id),
            } => write!(f, "plugin #{} (\"{}\")", position, id),
            Location::Plugin {
                position,
                identity: None,
            } => write!(f, "plugin #{}", position),
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable identifier for the violated rule
    pub rule_id: &'static str,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn error(rule_id: &'static str, location: Location, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            rule_id,
            location,
            message: message.into(),
        }
    }

    pub fn warning(rule_id: &'static str, location: Location, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            rule_id,
            location,
            message: message.into(),
        }
    }
}
