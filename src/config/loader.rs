//! Configuration loader with layered sources
//!
//! Loads configuration from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Explicit overrides (CLI flags), restricted to [`OverrideKey`]
//! 2. Environment variables (ARTIFACTORY_NAMESPACES__*)
//! 3. Configuration file (YAML)
//! 4. Default values

use crate::config::types::{AppConfig, ConfigOverrides, OverrideKey};
use crate::error::ConfigError;
use crate::util::{expand_path, with_trailing_separator};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "ARTIFACTORY_NAMESPACES";

/// Load configuration from a YAML string (useful for testing)
pub fn load_config_from_str(
    yaml_str: &str,
    overrides: &ConfigOverrides,
) -> Result<AppConfig, ConfigError> {
    let builder = Config::builder().add_source(File::from_str(yaml_str, FileFormat::Yaml));
    let builder = apply_overrides(builder, overrides)?;
    finish(builder)
}

/// Load configuration from a YAML file, the environment and explicit overrides
pub fn load_config(
    config_path: &Path,
    overrides: &ConfigOverrides,
) -> Result<AppConfig, ConfigError> {
    let expanded = expand_path(&config_path.to_string_lossy()).into_owned();
    let path = Path::new(&expanded);

    // The file is required; a missing file must not silently yield defaults
    if !path.is_file() {
        return Err(ConfigError::Missing {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "Reading configuration file");

    let mut builder = Config::builder().add_source(File::new(&expanded, FileFormat::Yaml));

    // e.g. ARTIFACTORY_NAMESPACES__OUTPUT_FORMAT, ARTIFACTORY_NAMESPACES__REPOS__INTERNAL
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__"),
    );

    let builder = apply_overrides(builder, overrides)?;
    finish(builder)
}

/// Layer explicit overrides on top of the builder.
///
/// Keys come from the closed [`OverrideKey`] set, never from the document.
fn apply_overrides(
    mut builder: ConfigBuilder<DefaultState>,
    overrides: &ConfigOverrides,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (key, value) in overrides.iter() {
        debug!(key = %key, value, "Applying configuration override");
        builder = builder
            .set_override(key.as_key(), value)
            .map_err(|e| ConfigError::Load(e.to_string()))?;
    }
    Ok(builder)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let mut app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;
    app_config.output_dir = normalize_output_dir(&app_config.output_dir);

    Ok(app_config)
}

/// Expand `~` and guarantee a trailing separator
fn normalize_output_dir(dir: &str) -> String {
    with_trailing_separator(&expand_path(dir))
}

/// Validate configuration values
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.output_dir.trim().is_empty() {
        return Err(ConfigError::Invalid {
            message: format!("{} must not be empty", OverrideKey::OutputDir),
        });
    }

    Ok(())
}
