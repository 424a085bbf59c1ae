//! Artifactory namespace permissions
//!
//! Turns a list of namespace pattern definitions into Artifactory permission
//! targets plus a Markdown summary of which patterns belong to which
//! namespace.
//!
//! ## Visibility Model
//!
//! ```text
//! public     → namespace target, global-public, global-internal
//! internal   → namespace target, global-internal
//! restricted → namespace target only
//! ```
//!
//! Primary patterns are granted on the internal repositories, thirdparty
//! patterns on the thirdparty repositories. Every grant is the full
//! `read`, `write`, `annotate`, `delete` bundle.
//!
//! ## Example Configuration
//!
//! ```yaml
//! repos:
//!   internal: [libs-release, libs-snapshot]
//!   thirdparty: thirdparty-remote
//! users:
//!   public: anonymous
//! groups:
//!   public: [readers]
//!   internal: [employees]
//! output_dir: out
//! output_format: json
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod namespaces;
pub mod output;
pub mod permission;
pub mod util;

// Re-export main types
pub use config::{AppConfig, ConfigOverrides, OutputFormat, OverrideKey, load_config};
pub use error::{AppError, Result};
pub use generator::{GenerationSummary, Generator};
pub use namespaces::{NamespaceDefinition, load_namespaces};
pub use permission::{PermissionTarget, build_permission_targets};
