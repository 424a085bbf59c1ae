//! Namespace definition types

use crate::util::de::{non_empty_string, string_or_list};
use serde::Deserialize;

/// Root of the namespace definition document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamespaceDocument {
    /// Ordered namespace definitions; null or absent means none
    #[serde(default)]
    pub namespaces: Option<Vec<NamespaceDefinition>>,
}

/// A named group of repository path patterns with its write groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceDefinition {
    pub name: String,

    #[serde(default, deserialize_with = "non_empty_string")]
    pub public_pattern: Option<String>,

    #[serde(default, deserialize_with = "non_empty_string")]
    pub internal_pattern: Option<String>,

    #[serde(default, deserialize_with = "non_empty_string")]
    pub restricted_pattern: Option<String>,

    #[serde(default, deserialize_with = "non_empty_string")]
    pub public_thirdparty_pattern: Option<String>,

    #[serde(default, deserialize_with = "non_empty_string")]
    pub internal_thirdparty_pattern: Option<String>,

    #[serde(default, deserialize_with = "non_empty_string")]
    pub restricted_thirdparty_pattern: Option<String>,

    /// Groups granted write access to this namespace's targets
    #[serde(default, deserialize_with = "string_or_list")]
    pub write: Vec<String>,
}

/// Repository kind a set of patterns applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryKind {
    Primary,
    Thirdparty,
}

impl RepositoryKind {
    pub fn all() -> &'static [RepositoryKind] {
        &[RepositoryKind::Primary, RepositoryKind::Thirdparty]
    }
}

/// Pattern visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Visible to the public and internal global scopes
    Public,
    /// Visible to the internal global scope
    Internal,
    /// Visible only within the owning namespace
    Restricted,
}

/// The three visibility-tagged patterns of one repository kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityPatterns<'a> {
    pub public: Option<&'a str>,
    pub internal: Option<&'a str>,
    pub restricted: Option<&'a str>,
}

impl<'a> VisibilityPatterns<'a> {
    /// Present patterns in public, internal, restricted order
    pub fn iter(&self) -> impl Iterator<Item = (Visibility, &'a str)> {
        [
            (Visibility::Public, self.public),
            (Visibility::Internal, self.internal),
            (Visibility::Restricted, self.restricted),
        ]
        .into_iter()
        .filter_map(|(visibility, pattern)| pattern.map(|p| (visibility, p)))
    }
}

impl NamespaceDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Patterns for the given repository kind
    pub fn patterns(&self, kind: RepositoryKind) -> VisibilityPatterns<'_> {
        match kind {
            RepositoryKind::Primary => VisibilityPatterns {
                public: self.public_pattern.as_deref(),
                internal: self.internal_pattern.as_deref(),
                restricted: self.restricted_pattern.as_deref(),
            },
            RepositoryKind::Thirdparty => VisibilityPatterns {
                public: self.public_thirdparty_pattern.as_deref(),
                internal: self.internal_thirdparty_pattern.as_deref(),
                restricted: self.restricted_thirdparty_pattern.as_deref(),
            },
        }
    }
}
