//! One realistic fixture per schema generation, validated under its own
//! rules and under a neighbouring generation to pin the differences down.

use marketlint::schema::SchemaVersion;
use marketlint::validator::{validate, ValidationReport};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn run(raw: &str, version: SchemaVersion) -> ValidationReport {
    let doc: Value = serde_json::from_str(raw).unwrap();
    validate(&doc, version.descriptor())
}

const V1_FIXTURE: &str = r#"{
    "name": "Community Plugins",
    "description": "Curated plugin catalog",
    "plugins": [
        {
            "id": "fmt-helper",
            "name": "Format Helper",
            "description": "Formats code on save",
            "author": "octocat",
            "repo": "octocat/fmt-helper",
            "category": "productivity",
            "tags": ["formatting", "editor"],
            "installCmd": "plugin install fmt-helper",
            "stars": 42
        }
    ]
}"#;

const V3_FIXTURE: &str = r#"{
    "$schema": "https://json.schemastore.org/claude-code-marketplace.json",
    "name": "Community Plugins",
    "description": "Curated plugin catalog",
    "owner": {
        "name": "The Maintainers",
        "email": "maintainers@example.com",
        "url": "https://example.com"
    },
    "plugins": [
        {
            "name": "fmt-helper",
            "description": "Formats code on save",
            "source": {"source": "github", "repo": "octocat/fmt-helper"},
            "version": "1.2.0",
            "tags": ["formatting"]
        },
        {
            "name": "mirror-plugin",
            "description": "Installed from a mirror",
            "source": {"source": "url", "url": "https://mirror.example.com/plugin.git"}
        }
    ]
}"#;

#[test]
fn v1_fixture_is_clean_under_v1() {
    let report = run(V1_FIXTURE, SchemaVersion::V1);
    assert_eq!(report.diagnostics, vec![]);
    assert_eq!(report.plugin_count, Some(1));
}

#[test]
fn v1_fixture_only_draws_warnings_under_v2() {
    // category/tags/installCmd/stars are all optional-but-known in v2, so
    // the stricter fixture still passes there.
    let report = run(V1_FIXTURE, SchemaVersion::V2);
    assert_eq!(report.error_count(), 0);
    assert!(report.passed());
}

#[test]
fn v3_fixture_is_clean_under_v3() {
    let report = run(V3_FIXTURE, SchemaVersion::V3);
    assert_eq!(report.diagnostics, vec![]);
    assert_eq!(report.plugin_count, Some(2));
}

#[test]
fn v3_fixture_fails_under_v2() {
    // The structured generation has no id/author/repo fields, so the flat
    // rule set must reject its entries.
    let report = run(V3_FIXTURE, SchemaVersion::V2);
    assert!(!report.passed());
    assert!(report
        .errors()
        .any(|d| d.message.contains("\"repo\"")));
}

#[test]
fn v2_manifest_without_schema_id_fails_under_v3() {
    let report = run(
        r#"{
            "name": "Catalog",
            "description": "x",
            "plugins": []
        }"#,
        SchemaVersion::V3,
    );

    let missing: Vec<&str> = report.errors().map(|d| d.message.as_str()).collect();
    assert!(missing.iter().any(|m| m.contains("$schema")));
    assert!(missing.iter().any(|m| m.contains("\"owner\"")));
}
