//! Per-entry field and format checks.
//!
//! Every entry gets the full battery of checks regardless of what failed
//! before it; the only per-entry short-circuit is an entry that is not a
//! JSON object at all, since there are no fields to inspect.

use regex::Regex;
use serde_json::{Map, Value};

use crate::diagnostics::{Diagnostic, Location};
use crate::schema::{FieldKind, FieldSpec, RepoShape, SchemaDescriptor};

/// Alphanumerics, underscore, dot, hyphen on each side of exactly one slash
const REPO_PATTERN: &str = r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$";

/// Soft cap before a description draws a warning
const DESCRIPTION_LIMIT: usize = 500;

pub(super) fn check(list: &[Value], schema: &SchemaDescriptor, out: &mut Vec<Diagnostic>) {
    let repo_pattern = Regex::new(REPO_PATTERN).unwrap();

    for (index, entry) in list.iter().enumerate() {
        let position = index + 1;

        let Some(fields) = entry.as_object() else {
            out.push(Diagnostic::error(
                "entry-shape",
                Location::Plugin {
                    position,
                    identity: None,
                },
                "plugin entry must be a JSON object",
            ));
            continue;
        };

        let at = || Location::Plugin {
            position,
            identity: identity_of(fields, schema),
        };

        for spec in schema.required {
            // A structured source reference accepts two shapes, so only
            // its presence is checked here; check_repo diagnoses the
            // rest. A flat reference is a plain string field and gets the
            // full required-field treatment.
            if matches!(schema.repo, RepoShape::Source { .. }) && spec.name == schema.repo.field() {
                if !fields.contains_key(spec.name) {
                    out.push(Diagnostic::error(
                        "missing-field",
                        at(),
                        format!("missing required field \"{}\"", spec.name),
                    ));
                }
                continue;
            }
            check_required(fields, spec, &at, out);
        }

        for spec in schema.optional {
            if let Some(value) = fields.get(spec.name) {
                if !spec.kind.matches(value) {
                    out.push(Diagnostic::error(
                        "type-mismatch",
                        at(),
                        format!("\"{}\" must be {}", spec.name, spec.kind.describe()),
                    ));
                }
            }
        }

        check_repo(fields, schema.repo, &repo_pattern, &at, out);

        if let Some(Value::Array(tags)) = fields.get("tags") {
            if tags.is_empty() {
                out.push(Diagnostic::warning(
                    "empty-tags",
                    at(),
                    "\"tags\" array is empty (consider adding relevant tags)",
                ));
            }
        }

        if let Some(Value::String(description)) = fields.get("description") {
            let length = description.chars().count();
            if length > DESCRIPTION_LIMIT {
                out.push(Diagnostic::warning(
                    "long-description",
                    at(),
                    format!("description is very long ({} chars)", length),
                ));
            }
        }

        // Unknown fields are warnings, never errors: submissions written
        // against a newer schema generation should not be rejected here.
        for key in fields.keys() {
            if !schema.is_known_field(key) {
                out.push(Diagnostic::warning(
                    "unknown-field",
                    at(),
                    format!("unknown field \"{}\"", key),
                ));
            }
        }
    }
}

fn identity_of(fields: &Map<String, Value>, schema: &SchemaDescriptor) -> Option<String> {
    fields
        .get(schema.id_field)
        .and_then(Value::as_str)
        .map(String::from)
}

fn check_required(
    fields: &Map<String, Value>,
    spec: &FieldSpec,
    at: &impl Fn() -> Location,
    out: &mut Vec<Diagnostic>,
) {
    match fields.get(spec.name) {
        None => out.push(Diagnostic::error(
            "missing-field",
            at(),
            format!("missing required field \"{}\"", spec.name),
        )),
        Some(Value::String(s)) if spec.kind == FieldKind::String && s.trim().is_empty() => {
            out.push(Diagnostic::error(
                "empty-field",
                at(),
                format!("field \"{}\" cannot be empty", spec.name),
            ));
        }
        Some(value) if !spec.kind.matches(value) => out.push(Diagnostic::error(
            "type-mismatch",
            at(),
            format!("\"{}\" must be {}", spec.name, spec.kind.describe()),
        )),
        Some(_) => {}
    }
}

fn check_repo(
    fields: &Map<String, Value>,
    shape: RepoShape,
    pattern: &Regex,
    at: &impl Fn() -> Location,
    out: &mut Vec<Diagnostic>,
) {
    let Some(value) = fields.get(shape.field()) else {
        return; // absence already reported by the required-field pass
    };

    match (shape, value) {
        (RepoShape::Flat { field }, Value::String(reference)) => {
            check_flat_reference(field, reference, pattern, at, out);
        }
        // A non-string flat reference is diagnosed by the required pass...
        (RepoShape::Flat { .. }, _) => {}
        (RepoShape::Source { field }, Value::String(reference)) => {
            check_flat_reference(field, reference, pattern, at, out);
        }
        (RepoShape::Source { .. }, Value::Object(source)) => {
            check_source_object(source, pattern, at, out);
        }
        // ...but a structured reference accepts two shapes, so its
        // mismatch is diagnosed here.
        (RepoShape::Source { field }, _) => out.push(Diagnostic::error(
            "type-mismatch",
            at(),
            format!("\"{}\" must be a string or an object", field),
        )),
    }
}

fn check_flat_reference(
    field: &str,
    reference: &str,
    pattern: &Regex,
    at: &impl Fn() -> Location,
    out: &mut Vec<Diagnostic>,
) {
    if !pattern.is_match(reference) {
        out.push(Diagnostic::error(
            "repo-format",
            at(),
            format!(
                "invalid {} format \"{}\": expected \"owner/repo\"",
                field, reference
            ),
        ));
    }
}

fn check_source_object(
    source: &Map<String, Value>,
    pattern: &Regex,
    at: &impl Fn() -> Location,
    out: &mut Vec<Diagnostic>,
) {
    match source.get("source") {
        Some(Value::String(kind)) if kind == "github" => match source.get("repo") {
            Some(Value::String(reference)) => {
                check_flat_reference("repo", reference, pattern, at, out);
            }
            Some(_) => out.push(Diagnostic::error(
                "type-mismatch",
                at(),
                "\"repo\" must be a string",
            )),
            None => out.push(Diagnostic::error(
                "source-field",
                at(),
                "source kind \"github\" requires a \"repo\" field",
            )),
        },
        Some(Value::String(kind)) if kind == "url" => match source.get("url") {
            Some(Value::String(_)) => {}
            Some(_) => out.push(Diagnostic::error(
                "type-mismatch",
                at(),
                "\"url\" must be a string",
            )),
            None => out.push(Diagnostic::error(
                "source-field",
                at(),
                "source kind \"url\" requires a \"url\" field",
            )),
        },
        Some(Value::String(kind)) => out.push(Diagnostic::error(
            "source-kind",
            at(),
            format!("unrecognized source kind \"{}\"", kind),
        )),
        Some(_) => out.push(Diagnostic::error(
            "type-mismatch",
            at(),
            "source kind tag \"source\" must be a string",
        )),
        None => out.push(Diagnostic::error(
            "source-kind",
            at(),
            "source object is missing its \"source\" kind tag",
        )),
    }
}
