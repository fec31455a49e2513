//! Top-level manifest shape checks.
//!
//! All checks run even when earlier ones fail, so one run reports every
//! top-level problem at once. The return value is the plugin list when it
//! was enumerable; `None` means the rest of the pipeline must be skipped.

use serde_json::{Map, Value};

use crate::diagnostics::{Diagnostic, Location};
use crate::schema::SchemaDescriptor;

const OWNER_SUBFIELDS: &[&str] = &["name", "email", "url"];

pub(super) fn check<'a>(
    doc: &'a Value,
    schema: &SchemaDescriptor,
    out: &mut Vec<Diagnostic>,
) -> Option<&'a Vec<Value>> {
    let Some(root) = doc.as_object() else {
        out.push(Diagnostic::error(
            "document-shape",
            Location::Manifest,
            "manifest root must be a JSON object",
        ));
        return None;
    };

    check_string_field(root, "name", out);
    check_string_field(root, "description", out);

    if let Some(id) = &schema.schema_id {
        check_schema_id(root, id.field, id.expected, out);
    }

    if schema.requires_owner {
        check_owner(root, out);
    }

    // Without an array the entries cannot be enumerated, so this one is
    // fatal for the remaining passes.
    match root.get("plugins") {
        Some(Value::Array(list)) => Some(list),
        Some(_) => {
            out.push(Diagnostic::error(
                "plugins-array",
                Location::field("plugins"),
                "\"plugins\" must be an array",
            ));
            None
        }
        None => {
            out.push(Diagnostic::error(
                "missing-field",
                Location::field("plugins"),
                "missing required field \"plugins\"",
            ));
            None
        }
    }
}

fn check_string_field(root: &Map<String, Value>, name: &str, out: &mut Vec<Diagnostic>) {
    match root.get(name) {
        None => out.push(Diagnostic::error(
            "missing-field",
            Location::field(name),
            format!("missing required field \"{}\"", name),
        )),
        Some(Value::String(s)) if s.trim().is_empty() => out.push(Diagnostic::error(
            "empty-field",
            Location::field(name),
            format!("field \"{}\" cannot be empty", name),
        )),
        Some(Value::String(_)) => {}
        Some(_) => out.push(Diagnostic::error(
            "type-mismatch",
            Location::field(name),
            format!("\"{}\" must be a string", name),
        )),
    }
}

fn check_schema_id(
    root: &Map<String, Value>,
    field: &str,
    expected: &str,
    out: &mut Vec<Diagnostic>,
) {
    match root.get(field) {
        None => out.push(Diagnostic::error(
            "missing-field",
            Location::field(field),
            format!("missing required field \"{}\"", field),
        )),
        // Case-sensitive by contract; "almost right" identifiers are the
        // failure mode this exists to catch.
        Some(Value::String(s)) if s == expected => {}
        Some(Value::String(s)) => out.push(Diagnostic::error(
            "schema-id",
            Location::field(field),
            format!(
                "\"{}\" must equal \"{}\" exactly (found \"{}\")",
                field, expected, s
            ),
        )),
        Some(_) => out.push(Diagnostic::error(
            "type-mismatch",
            Location::field(field),
            format!("\"{}\" must be a string", field),
        )),
    }
}

fn check_owner(root: &Map<String, Value>, out: &mut Vec<Diagnostic>) {
    match root.get("owner") {
        None => out.push(Diagnostic::error(
            "missing-field",
            Location::field("owner"),
            "missing required field \"owner\"",
        )),
        Some(Value::Object(owner)) => {
            // Missing sub-fields are reported individually.
            for sub in OWNER_SUBFIELDS {
                if !owner.contains_key(*sub) {
                    out.push(Diagnostic::error(
                        "missing-field",
                        Location::field(format!("owner.{}", sub)),
                        format!("owner is missing required field \"{}\"", sub),
                    ));
                }
            }
        }
        Some(_) => out.push(Diagnostic::error(
            "type-mismatch",
            Location::field("owner"),
            "\"owner\" must be an object",
        )),
    }
}
