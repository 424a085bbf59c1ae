//! Permission targets
//!
//! A permission target pairs include patterns and a repository scope with the
//! users and groups granted the full action bundle (`read`, `write`,
//! `annotate`, `delete`).
//!
//! Each run produces:
//!
//! 1. `ns-<name>` - the namespace's primary patterns on the internal repositories
//! 2. `ns-<name>-thirdparty` - its thirdparty patterns on the thirdparty repositories
//! 3. `global-public`, `global-internal`, `global-thirdparty-public` and
//!    `global-thirdparty-internal` - the accumulated visible patterns granted to
//!    the configured public or internal principals

pub mod builder;
pub mod types;

pub use builder::{
    BuildOutput, GLOBAL_INTERNAL, GLOBAL_PUBLIC, GLOBAL_TARGET_NAMES, GLOBAL_THIRDPARTY_INTERNAL,
    GLOBAL_THIRDPARTY_PUBLIC, PatternAccumulator, build_permission_targets,
    namespace_target_name,
};
pub use types::{Action, ActionBundle, Grants, PermissionTarget, RepoPermission};
