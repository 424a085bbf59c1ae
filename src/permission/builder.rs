//! Permission target builder
//!
//! Derives permission targets from namespace definitions in a single forward
//! pass. Pattern visibility determines which global scopes see a pattern:
//!
//! ```text
//! public     → ns target, global-public, global-internal
//! internal   → ns target, global-internal
//! restricted → ns target only
//! ```
//!
//! The same split applies independently to thirdparty patterns and the
//! `global-thirdparty-*` targets.

use crate::config::AppConfig;
use crate::error::BuildError;
use crate::namespaces::{NamespaceDefinition, RepositoryKind, Visibility, VisibilityPatterns};
use crate::output::markdown::{MarkdownReport, MarkdownRow};
use crate::permission::types::PermissionTarget;
use std::collections::HashSet;
use tracing::{debug, trace};

pub const GLOBAL_PUBLIC: &str = "global-public";
pub const GLOBAL_INTERNAL: &str = "global-internal";
pub const GLOBAL_THIRDPARTY_PUBLIC: &str = "global-thirdparty-public";
pub const GLOBAL_THIRDPARTY_INTERNAL: &str = "global-thirdparty-internal";

/// Names of the four global targets, in emission order
pub const GLOBAL_TARGET_NAMES: [&str; 4] = [
    GLOBAL_PUBLIC,
    GLOBAL_INTERNAL,
    GLOBAL_THIRDPARTY_PUBLIC,
    GLOBAL_THIRDPARTY_INTERNAL,
];

/// Name of a namespace's target for the given repository kind
pub fn namespace_target_name(namespace: &str, kind: RepositoryKind) -> String {
    match kind {
        RepositoryKind::Primary => format!("ns-{namespace}"),
        RepositoryKind::Thirdparty => format!("ns-{namespace}-thirdparty"),
    }
}

/// Running pattern sequences feeding the global targets.
///
/// Append-only, duplicates kept, ordered by namespace definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternAccumulator {
    pub public: Vec<String>,
    pub internal: Vec<String>,
    pub public_thirdparty: Vec<String>,
    pub internal_thirdparty: Vec<String>,
}

impl PatternAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one namespace's patterns for a repository kind and return the
    /// namespace's own include list (public, internal, restricted order).
    pub fn absorb(&mut self, kind: RepositoryKind, patterns: VisibilityPatterns<'_>) -> Vec<String> {
        let (public, internal) = match kind {
            RepositoryKind::Primary => (&mut self.public, &mut self.internal),
            RepositoryKind::Thirdparty => {
                (&mut self.public_thirdparty, &mut self.internal_thirdparty)
            }
        };

        let mut own = Vec::with_capacity(3);
        for (visibility, pattern) in patterns.iter() {
            match visibility {
                Visibility::Public => {
                    public.push(pattern.to_string());
                    internal.push(pattern.to_string());
                }
                Visibility::Internal => internal.push(pattern.to_string()),
                Visibility::Restricted => {}
            }
            own.push(pattern.to_string());
        }
        own
    }

    /// Consume the accumulator into the four global targets
    pub fn into_global_targets(self, config: &AppConfig) -> [PermissionTarget; 4] {
        [
            PermissionTarget::new(GLOBAL_PUBLIC, self.public, config.internal_repos())
                .with_groups(config.public_groups().iter().cloned())
                .with_users(config.public_users().iter().cloned()),
            PermissionTarget::new(GLOBAL_INTERNAL, self.internal, config.internal_repos())
                .with_groups(config.internal_groups().iter().cloned())
                .with_users(config.internal_users().iter().cloned()),
            PermissionTarget::new(
                GLOBAL_THIRDPARTY_PUBLIC,
                self.public_thirdparty,
                config.thirdparty_repos(),
            )
            .with_groups(config.public_groups().iter().cloned())
            .with_users(config.public_users().iter().cloned()),
            PermissionTarget::new(
                GLOBAL_THIRDPARTY_INTERNAL,
                self.internal_thirdparty,
                config.thirdparty_repos(),
            )
            .with_groups(config.internal_groups().iter().cloned())
            .with_users(config.internal_users().iter().cloned()),
        ]
    }
}

/// Result of a build pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutput {
    /// Two targets per namespace (primary, thirdparty), then the four globals
    pub targets: Vec<PermissionTarget>,
    /// One row per namespace
    pub report: MarkdownReport,
}

impl BuildOutput {
    pub fn target(&self, name: &str) -> Option<&PermissionTarget> {
        self.targets.iter().find(|t| t.name == name)
    }
}

/// Derive all permission targets and report rows.
///
/// Pure: depends only on its arguments, so identical inputs give identical
/// output.
pub fn build_permission_targets(
    namespaces: &[NamespaceDefinition],
    config: &AppConfig,
) -> Result<BuildOutput, BuildError> {
    let mut targets = Vec::with_capacity(namespaces.len() * 2 + GLOBAL_TARGET_NAMES.len());
    let mut report = MarkdownReport::new();

    let accumulator = namespaces.iter().fold(
        PatternAccumulator::new(),
        |mut accumulator, namespace| {
            let mut row_patterns = Vec::new();

            for &kind in RepositoryKind::all() {
                let include = accumulator.absorb(kind, namespace.patterns(kind));
                let repositories = match kind {
                    RepositoryKind::Primary => config.internal_repos(),
                    RepositoryKind::Thirdparty => config.thirdparty_repos(),
                };

                let target = PermissionTarget::new(
                    namespace_target_name(&namespace.name, kind),
                    include,
                    repositories,
                )
                .with_groups(namespace.write.iter().cloned());

                trace!(
                    name = %target.name,
                    patterns = target.include_patterns().len(),
                    "Derived namespace target"
                );

                row_patterns.extend(target.include_patterns().iter().cloned());
                targets.push(target);
            }

            report.push(MarkdownRow::new(
                namespace.name.as_str(),
                row_patterns.iter().map(String::as_str),
            ));
            accumulator
        },
    );

    debug!(
        public = accumulator.public.len(),
        internal = accumulator.internal.len(),
        public_thirdparty = accumulator.public_thirdparty.len(),
        internal_thirdparty = accumulator.internal_thirdparty.len(),
        "Accumulated global patterns"
    );

    targets.extend(accumulator.into_global_targets(config));
    ensure_unique_names(&targets)?;

    Ok(BuildOutput { targets, report })
}

fn ensure_unique_names(targets: &[PermissionTarget]) -> Result<(), BuildError> {
    let mut seen = HashSet::with_capacity(targets.len());
    for target in targets {
        if !seen.insert(target.name.as_str()) {
            return Err(BuildError::DuplicateTarget {
                name: target.name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PrincipalConfig, RepositoryConfig};

    fn config() -> AppConfig {
        AppConfig {
            repos: RepositoryConfig {
                internal: vec!["repo1".into()],
                thirdparty: vec!["remote1".into()],
            },
            users: PrincipalConfig {
                public: vec!["anonymous".into()],
                internal: vec!["ci".into()],
            },
            groups: PrincipalConfig {
                public: vec!["readers".into()],
                internal: vec!["employees".into()],
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_absorb_primary() {
        let mut acc = PatternAccumulator::new();
        let own = acc.absorb(
            RepositoryKind::Primary,
            VisibilityPatterns {
                public: Some("p"),
                internal: Some("i"),
                restricted: Some("r"),
            },
        );
        assert_eq!(own, vec!["p", "i", "r"]);
        assert_eq!(acc.public, vec!["p"]);
        assert_eq!(acc.internal, vec!["p", "i"]);
        assert!(acc.public_thirdparty.is_empty());
        assert!(acc.internal_thirdparty.is_empty());
    }

    #[test]
    fn test_absorb_thirdparty() {
        let mut acc = PatternAccumulator::new();
        acc.absorb(
            RepositoryKind::Thirdparty,
            VisibilityPatterns {
                public: None,
                internal: Some("i"),
                restricted: Some("r"),
            },
        );
        assert!(acc.public.is_empty());
        assert!(acc.internal.is_empty());
        assert!(acc.public_thirdparty.is_empty());
        assert_eq!(acc.internal_thirdparty, vec!["i"]);
    }

    #[test]
    fn test_empty_input_yields_globals_only() {
        let output = build_permission_targets(&[], &config()).unwrap();
        let names: Vec<_> = output.targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, GLOBAL_TARGET_NAMES);
        assert!(output.report.is_empty());
        assert!(output.targets.iter().all(|t| t.include_patterns().is_empty()));
    }

    #[test]
    fn test_global_grants() {
        let output = build_permission_targets(&[], &config()).unwrap();

        let public = output.target(GLOBAL_PUBLIC).unwrap();
        assert!(public.groups().contains_key("readers"));
        assert!(public.users().contains_key("anonymous"));
        assert_eq!(public.repositories(), ["repo1"]);

        let tp_internal = output.target(GLOBAL_THIRDPARTY_INTERNAL).unwrap();
        assert!(tp_internal.groups().contains_key("employees"));
        assert!(tp_internal.users().contains_key("ci"));
        assert_eq!(tp_internal.repositories(), ["remote1"]);
    }

    #[test]
    fn test_thirdparty_suffix_collision_rejected() {
        let namespaces = vec![
            NamespaceDefinition::new("a"),
            NamespaceDefinition::new("a-thirdparty"),
        ];
        let err = build_permission_targets(&namespaces, &config()).unwrap_err();
        assert!(matches!(
            err,
            BuildError::DuplicateTarget { ref name } if name == "ns-a-thirdparty"
        ));
    }

    #[test]
    fn test_target_names() {
        assert_eq!(namespace_target_name("x", RepositoryKind::Primary), "ns-x");
        assert_eq!(
            namespace_target_name("x", RepositoryKind::Thirdparty),
            "ns-x-thirdparty"
        );
    }
}
