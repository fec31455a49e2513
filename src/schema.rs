//! Versioned manifest schema descriptors.
//!
//! The marketplace manifest format has gone through three generations:
//! a flat layout where every plugin field including `tags` and
//! `installCmd` was mandatory (v1), a relaxed submission layout with a
//! smaller required set (v2), and a structured layout with a `$schema`
//! identifier, an `owner` object, and a discriminated `source` reference
//! (v3). One generic engine consumes these descriptors; nothing about a
//! specific generation is hard-coded in the validation passes.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Expected JSON type of a manifest field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Array,
    Object,
}

impl FieldKind {
    /// Whether a JSON value has this kind
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Array => value.is_array(),
            FieldKind::Object => value.is_object(),
        }
    }

    /// Indefinite article + noun, for diagnostic messages
    pub fn describe(&self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::Number => "a number",
            FieldKind::Array => "an array",
            FieldKind::Object => "an object",
        }
    }
}

/// One field of a plugin entry: its key and expected type
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind }
}

/// Shape of the repository reference carried by each plugin entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoShape {
    /// A flat `"owner/repo"` string under the given key
    Flat { field: &'static str },
    /// Either a flat string or a discriminated source object under the
    /// given key (`{"source": "github", "repo": ...}` and so on)
    Source { field: &'static str },
}

impl RepoShape {
    pub fn field(&self) -> &'static str {
        match self {
            RepoShape::Flat { field } | RepoShape::Source { field } => field,
        }
    }
}

/// Fixed schema-identifier requirement (later generations only)
#[derive(Debug, Clone, Copy)]
pub struct SchemaId {
    pub field: &'static str,
    pub expected: &'static str,
}

/// Rule configuration for one manifest generation
#[derive(Debug)]
pub struct SchemaDescriptor {
    /// Short version label used in reports ("v1", "v2", "v3")
    pub version: &'static str,
    pub schema_id: Option<SchemaId>,
    /// Whether a structured `owner` object (name/email/url) is required
    pub requires_owner: bool,
    /// Required per-plugin fields
    pub required: &'static [FieldSpec],
    /// Optional per-plugin fields (type-checked when present)
    pub optional: &'static [FieldSpec],
    pub repo: RepoShape,
    /// Key whose value must be unique across the plugin list
    pub id_field: &'static str,
    /// Key checked for case-insensitive display-name duplicates, when it
    /// is not already the identity key
    pub name_field: Option<&'static str>,
}

impl SchemaDescriptor {
    /// Whether a plugin field name is in the known required/optional union
    pub fn is_known_field(&self, name: &str) -> bool {
        self.required.iter().chain(self.optional).any(|f| f.name == name)
    }
}

static V1: SchemaDescriptor = SchemaDescriptor {
    version: "v1",
    schema_id: None,
    requires_owner: false,
    required: &[
        field("id", FieldKind::String),
        field("name", FieldKind::String),
        field("description", FieldKind::String),
        field("author", FieldKind::String),
        field("repo", FieldKind::String),
        field("category", FieldKind::String),
        field("tags", FieldKind::Array),
        field("installCmd", FieldKind::String),
    ],
    optional: &[
        field("stars", FieldKind::Number),
        field("version", FieldKind::String),
    ],
    repo: RepoShape::Flat { field: "repo" },
    id_field: "id",
    name_field: Some("name"),
};

static V2: SchemaDescriptor = SchemaDescriptor {
    version: "v2",
    schema_id: None,
    requires_owner: false,
    required: &[
        field("id", FieldKind::String),
        field("name", FieldKind::String),
        field("description", FieldKind::String),
        field("author", FieldKind::String),
        field("repo", FieldKind::String),
    ],
    optional: &[
        field("category", FieldKind::String),
        field("stars", FieldKind::Number),
        field("tags", FieldKind::Array),
        field("installCmd", FieldKind::String),
        field("submittedAt", FieldKind::String),
        field("version", FieldKind::String),
    ],
    repo: RepoShape::Flat { field: "repo" },
    id_field: "id",
    name_field: Some("name"),
};

static V3: SchemaDescriptor = SchemaDescriptor {
    version: "v3",
    schema_id: Some(SchemaId {
        field: "$schema",
        expected: "https://json.schemastore.org/claude-code-marketplace.json",
    }),
    requires_owner: true,
    required: &[
        field("name", FieldKind::String),
        field("source", FieldKind::String),
        field("description", FieldKind::String),
    ],
    optional: &[
        field("version", FieldKind::String),
        field("author", FieldKind::String),
        field("category", FieldKind::String),
        field("tags", FieldKind::Array),
        field("homepage", FieldKind::String),
        field("license", FieldKind::String),
    ],
    repo: RepoShape::Source { field: "source" },
    id_field: "name",
    name_field: None,
};

/// Manifest schema generation selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    V1,
    V2,
    V3,
}

impl SchemaVersion {
    pub fn descriptor(&self) -> &'static SchemaDescriptor {
        match self {
            SchemaVersion::V1 => &V1,
            SchemaVersion::V2 => &V2,
            SchemaVersion::V3 => &V3,
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().version)
    }
}

impl FromStr for SchemaVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(SchemaVersion::V1),
            "v2" => Ok(SchemaVersion::V2),
            "v3" => Ok(SchemaVersion::V3),
            other => Err(format!(
                "unknown schema version '{}'. Valid versions: v1, v2, v3",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_round_trips_through_from_str() {
        for version in [SchemaVersion::V1, SchemaVersion::V2, SchemaVersion::V3] {
            assert_eq!(version.to_string().parse::<SchemaVersion>(), Ok(version));
        }
        assert!("v9".parse::<SchemaVersion>().is_err());
    }

    #[test]
    fn tags_requirement_is_generation_dependent() {
        assert!(SchemaVersion::V1
            .descriptor()
            .required
            .iter()
            .any(|f| f.name == "tags"));
        assert!(SchemaVersion::V2
            .descriptor()
            .optional
            .iter()
            .any(|f| f.name == "tags"));
    }

    #[test]
    fn identity_key_follows_the_generation() {
        assert_eq!(SchemaVersion::V2.descriptor().id_field, "id");
        assert_eq!(SchemaVersion::V3.descriptor().id_field, "name");
        assert_eq!(SchemaVersion::V3.descriptor().name_field, None);
    }

    #[test]
    fn field_kind_matches_json_values() {
        use serde_json::json;
        assert!(FieldKind::String.matches(&json!("x")));
        assert!(!FieldKind::String.matches(&json!(42)));
        assert!(FieldKind::Number.matches(&json!(42)));
        assert!(FieldKind::Array.matches(&json!([])));
        assert!(FieldKind::Object.matches(&json!({})));
    }
}
