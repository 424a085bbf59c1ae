//! Configuration types for artifactory-namespaces
//!
//! This module defines the configuration structure that can be loaded from
//! a YAML file, environment variables and command-line overrides.

use crate::util::de::string_or_list;
use serde::Deserialize;
use std::fmt;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Repository scopes for primary and thirdparty targets
    pub repos: RepositoryConfig,

    /// Users granted the global permission targets
    pub users: PrincipalConfig,

    /// Groups granted the global permission targets
    pub groups: PrincipalConfig,

    /// Directory generated files are written to
    pub output_dir: String,

    /// Serialization format for permission targets
    pub output_format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            repos: RepositoryConfig::default(),
            users: PrincipalConfig::default(),
            groups: PrincipalConfig::default(),
            output_dir: format!("{DEFAULT_OUTPUT_DIR}/"),
            output_format: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn internal_repos(&self) -> &[String] {
        &self.repos.internal
    }

    pub fn thirdparty_repos(&self) -> &[String] {
        &self.repos.thirdparty
    }

    pub fn public_users(&self) -> &[String] {
        &self.users.public
    }

    pub fn internal_users(&self) -> &[String] {
        &self.users.internal
    }

    pub fn public_groups(&self) -> &[String] {
        &self.groups.public
    }

    pub fn internal_groups(&self) -> &[String] {
        &self.groups.internal
    }
}

/// Repository lists, each given as a YAML list or a comma-separated string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Repositories holding first-party artifacts
    #[serde(deserialize_with = "string_or_list")]
    pub internal: Vec<String>,

    /// Repositories holding mirrored thirdparty artifacts
    #[serde(deserialize_with = "string_or_list")]
    pub thirdparty: Vec<String>,
}

/// Public and internal principal lists (users or groups)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PrincipalConfig {
    #[serde(deserialize_with = "string_or_list")]
    pub public: Vec<String>,

    #[serde(deserialize_with = "string_or_list")]
    pub internal: Vec<String>,
}

/// Output serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// File extension for generated permission targets
    pub const fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Configuration keys that may be overridden explicitly (CLI flags).
///
/// Only these keys are ever written on top of the file and environment
/// layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideKey {
    OutputDir,
    OutputFormat,
}

impl OverrideKey {
    /// Configuration path this override writes to
    pub const fn as_key(&self) -> &'static str {
        match self {
            OverrideKey::OutputDir => "output_dir",
            OverrideKey::OutputFormat => "output_format",
        }
    }
}

impl fmt::Display for OverrideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Ordered explicit overrides; later entries win
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    entries: Vec<(OverrideKey, String)>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override. Empty values are ignored so unset CLI/env inputs
    /// never clobber the file.
    pub fn set(mut self, key: OverrideKey, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.entries.push((key, value));
        }
        self
    }

    /// Add an override only if a value is present.
    pub fn optional(self, key: OverrideKey, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (OverrideKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
