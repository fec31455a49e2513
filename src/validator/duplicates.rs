//! Cross-entry duplicate detection.
//!
//! Single forward pass with one seen-set per key. The first occurrence of
//! a key is never flagged; every later occurrence is flagged individually,
//! so N copies of the same identity yield N-1 diagnostics.

use serde_json::Value;
use std::collections::HashSet;

use crate::diagnostics::{Diagnostic, Location};
use crate::schema::SchemaDescriptor;

pub(super) fn check(list: &[Value], schema: &SchemaDescriptor, out: &mut Vec<Diagnostic>) {
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    for (index, entry) in list.iter().enumerate() {
        let position = index + 1;
        // Entries missing the key are skipped; the missing-field error
        // already covers them.
        let Some(fields) = entry.as_object() else {
            continue;
        };

        if let Some(id) = fields.get(schema.id_field).and_then(Value::as_str) {
            if !seen_ids.insert(id) {
                out.push(Diagnostic::error(
                    "duplicate-id",
                    Location::Plugin {
                        position,
                        identity: Some(id.to_string()),
                    },
                    format!("duplicate plugin {} \"{}\"", schema.id_field, id),
                ));
            }
        }

        let Some(name_field) = schema.name_field else {
            continue;
        };
        if let Some(name) = fields.get(name_field).and_then(Value::as_str) {
            // Display names collide case-insensitively, but that is only
            // worth a warning.
            if !seen_names.insert(name.to_lowercase()) {
                out.push(Diagnostic::warning(
                    "duplicate-name",
                    Location::Plugin {
                        position,
                        identity: fields
                            .get(schema.id_field)
                            .and_then(Value::as_str)
                            .map(String::from),
                    },
                    format!("duplicate plugin {} \"{}\"", name_field, name),
                ));
            }
        }
    }
}
