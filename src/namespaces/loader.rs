//! Namespace definition loader
//!
//! Reads the ordered namespace list from a YAML document and rejects
//! definitions whose names cannot become unique permission target files.

use crate::error::NamespaceError;
use crate::namespaces::types::{NamespaceDefinition, NamespaceDocument};
use crate::util::expand_path;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load namespace definitions from a YAML file
pub fn load_namespaces(path: &Path) -> Result<Vec<NamespaceDefinition>, NamespaceError> {
    let path = PathBuf::from(expand_path(&path.to_string_lossy()).into_owned());

    info!(path = %path.display(), "Reading namespace definitions");

    if !path.is_file() {
        return Err(NamespaceError::NotFound { path });
    }

    let content = fs::read_to_string(&path).map_err(|source| NamespaceError::Io {
        path: path.clone(),
        source,
    })?;

    let namespaces = parse(&content, &path.display().to_string())?;
    info!(count = namespaces.len(), "Loaded namespace definitions");
    Ok(namespaces)
}

/// Load namespace definitions from a YAML string (useful for testing)
pub fn load_namespaces_from_str(yaml: &str) -> Result<Vec<NamespaceDefinition>, NamespaceError> {
    parse(yaml, "<string>")
}

fn parse(content: &str, origin: &str) -> Result<Vec<NamespaceDefinition>, NamespaceError> {
    // serde_yaml rejects an empty stream for a struct target
    if content.trim().is_empty() {
        debug!(origin, "Namespace document is empty");
        return Ok(Vec::new());
    }

    let document: Option<NamespaceDocument> =
        serde_yaml::from_str(content).map_err(|source| NamespaceError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    let namespaces = document
        .and_then(|doc| doc.namespaces)
        .unwrap_or_default();

    validate_namespaces(&namespaces)?;
    Ok(namespaces)
}

/// Validate names: non-empty, usable as a file name, unique
pub fn validate_namespaces(namespaces: &[NamespaceDefinition]) -> Result<(), NamespaceError> {
    let mut seen = HashSet::with_capacity(namespaces.len());

    for (index, namespace) in namespaces.iter().enumerate() {
        let name = namespace.name.as_str();

        if name.trim().is_empty() {
            return Err(NamespaceError::invalid(index, name, "name must not be empty"));
        }

        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(NamespaceError::invalid(
                index,
                name,
                "name must not contain path separators",
            ));
        }

        if !seen.insert(name) {
            return Err(NamespaceError::invalid(
                index,
                name,
                "duplicate namespace name",
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_preserves_order() {
        let yaml = r#"
namespaces:
  - name: zeta
    publicPattern: "zeta/**"
  - name: alpha
    internalPattern: "alpha/**"
    write: [alpha-devs]
"#;
        let namespaces = load_namespaces_from_str(yaml).unwrap();
        let names: Vec<_> = namespaces.iter().map(|ns| ns.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(namespaces[1].write, vec!["alpha-devs"]);
    }

    #[test]
    fn test_empty_and_missing_lists() {
        assert!(load_namespaces_from_str("").unwrap().is_empty());
        assert!(load_namespaces_from_str("namespaces:").unwrap().is_empty());
        assert!(load_namespaces_from_str("other: 1").unwrap().is_empty());
        assert!(load_namespaces_from_str("namespaces: []").unwrap().is_empty());
    }

    #[test]
    fn test_missing_name_is_parse_error() {
        let yaml = r#"
namespaces:
  - publicPattern: "x/**"
"#;
        assert!(matches!(
            load_namespaces_from_str(yaml),
            Err(NamespaceError::Parse { .. })
        ));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let yaml = r#"
namespaces:
  - name: team
  - name: team
"#;
        let err = load_namespaces_from_str(yaml).unwrap_err();
        assert!(matches!(err, NamespaceError::Invalid { index: 1, .. }));
    }

    #[test]
    fn test_path_like_name_rejected() {
        let namespaces = vec![NamespaceDefinition::new("../escape")];
        assert!(validate_namespaces(&namespaces).is_err());

        let namespaces = vec![NamespaceDefinition::new("")];
        assert!(validate_namespaces(&namespaces).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_namespaces(Path::new("/nonexistent/namespaces.yaml")).unwrap_err();
        assert!(matches!(err, NamespaceError::NotFound { .. }));
    }
}
