//! Error types for artifactory-namespaces
//!
//! This module defines the error hierarchy used throughout the application.
//! Each stage of a run (configuration, namespace loading, building, writing)
//! has its own `thiserror` enum; `AppError` wraps them for the binary.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Namespace definition error: {0}")]
    Namespaces(#[from] NamespaceError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

/// Errors raised while reading the namespace definition document
#[derive(Error, Debug)]
pub enum NamespaceError {
    #[error("Namespace file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse namespaces from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid namespace #{index} ('{name}'): {reason}")]
    Invalid {
        index: usize,
        name: String,
        reason: String,
    },
}

impl NamespaceError {
    pub fn invalid(index: usize, name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            index,
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while deriving permission targets
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Duplicate permission target name '{name}'")]
    DuplicateTarget { name: String },
}

/// Errors raised while writing generated artifacts
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_invalid_constructor() {
        let err = NamespaceError::invalid(3, "team-a", "duplicate namespace name");
        let message = err.to_string();
        assert!(message.contains("#3"));
        assert!(message.contains("team-a"));
        assert!(message.contains("duplicate"));
    }

    #[test]
    fn test_app_error_wraps_stage_errors() {
        let err: AppError = BuildError::DuplicateTarget {
            name: "ns-a".into(),
        }
        .into();
        assert!(matches!(err, AppError::Build(_)));
        assert!(err.to_string().contains("ns-a"));

        let err: AppError = ConfigError::Invalid {
            message: "output_dir must not be empty".into(),
        }
        .into();
        assert!(err.to_string().starts_with("Configuration error"));

        let err: AppError = ConfigError::Missing {
            path: PathBuf::from("/etc/artifactory/config.yaml"),
        }
        .into();
        assert!(err.to_string().contains("/etc/artifactory/config.yaml"));
    }
}
