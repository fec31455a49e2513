//! Manifest loading and parsing.
//!
//! Both stages are fatal on failure: a missing or unreadable file and a
//! malformed document each abort the run before any validation happens,
//! since the engine needs a well-formed tree to traverse.

use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::{MarketlintError, Result};

/// Conventional manifest location within a marketplace repository
pub const DEFAULT_MANIFEST_PATH: &str = ".claude-plugin/marketplace.json";

/// Read the raw manifest text from disk
pub fn read_manifest(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(MarketlintError::NotFound {
            path: path.to_path_buf(),
        });
    }

    std::fs::read_to_string(path).map_err(|source| MarketlintError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse raw manifest text into a JSON tree
pub fn parse_manifest(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|source| MarketlintError::Syntax { source })
}

/// Read and parse in one step
pub fn load_manifest(path: &Path) -> Result<Value> {
    debug!("loading manifest from {}", path.display());
    let raw = read_manifest(path)?;
    parse_manifest(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarketlintError;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("marketplace.json");

        match load_manifest(&path) {
            Err(MarketlintError::NotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_syntax_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("marketplace.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{{\"name\": ").unwrap();

        assert!(matches!(
            load_manifest(&path),
            Err(MarketlintError::Syntax { .. })
        ));
    }

    #[test]
    fn well_formed_json_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("marketplace.json");
        std::fs::write(&path, r#"{"name":"Catalog","plugins":[]}"#).unwrap();

        let doc = load_manifest(&path).unwrap();
        assert_eq!(doc["name"], "Catalog");
    }
}
