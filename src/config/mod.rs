//! Configuration module
//!
//! Handles loading and validating configuration from YAML files, environment
//! variables and command-line overrides.

pub mod loader;
pub mod types;

pub use loader::{load_config, load_config_from_str};
pub use types::*;
