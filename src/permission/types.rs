//! Permission target types
//!
//! Field order and `BTreeMap` keys keep serialized output sorted, matching
//! the layout the repository manager's permission API expects.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Repository action granted by a permission target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Write,
    Annotate,
    Delete,
}

/// The one grant level this tool hands out: every action.
///
/// There is no way to construct a partial grant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionBundle;

impl ActionBundle {
    const ACTIONS: [Action; 4] = [Action::Read, Action::Write, Action::Annotate, Action::Delete];

    pub const fn actions(&self) -> &'static [Action] {
        &Self::ACTIONS
    }
}

impl Serialize for ActionBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(Self::ACTIONS.len()))?;
        for action in &Self::ACTIONS {
            seq.serialize_element(action)?;
        }
        seq.end()
    }
}

/// Users and groups granted the action bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grants {
    pub groups: BTreeMap<String, ActionBundle>,
    pub users: BTreeMap<String, ActionBundle>,
}

/// Repository section of a permission target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RepoPermission {
    pub actions: Grants,
    pub exclude_patterns: Vec<String>,
    pub include_patterns: Vec<String>,
    pub repositories: Vec<String>,
}

/// A named permission target record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PermissionTarget {
    pub name: String,
    pub repo: RepoPermission,
}

impl PermissionTarget {
    pub fn new(
        name: impl Into<String>,
        include_patterns: Vec<String>,
        repositories: &[String],
    ) -> Self {
        Self {
            name: name.into(),
            repo: RepoPermission {
                actions: Grants::default(),
                exclude_patterns: Vec::new(),
                include_patterns,
                repositories: repositories.to_vec(),
            },
        }
    }

    /// Grant the action bundle to each group
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.repo
            .actions
            .groups
            .extend(groups.into_iter().map(|g| (g.into(), ActionBundle)));
        self
    }

    /// Grant the action bundle to each user
    pub fn with_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.repo
            .actions
            .users
            .extend(users.into_iter().map(|u| (u.into(), ActionBundle)));
        self
    }

    pub fn include_patterns(&self) -> &[String] {
        &self.repo.include_patterns
    }

    pub fn exclude_patterns(&self) -> &[String] {
        &self.repo.exclude_patterns
    }

    pub fn repositories(&self) -> &[String] {
        &self.repo.repositories
    }

    pub fn groups(&self) -> &BTreeMap<String, ActionBundle> {
        &self.repo.actions.groups
    }

    pub fn users(&self) -> &BTreeMap<String, ActionBundle> {
        &self.repo.actions.users
    }
}
