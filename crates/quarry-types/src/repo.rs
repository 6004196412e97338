//! Repository configuration and the id-sorted repository registry.

use std::collections::btree_map::{Values, ValuesMut};
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata refresh policy for a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MdPolicy {
    /// Fetch only the primary metadata group.
    GroupPrimary,
    /// Fetch every metadata group (maximal refresh).
    GroupAll,
}

impl Default for MdPolicy {
    fn default() -> Self {
        MdPolicy::GroupPrimary
    }
}

/// Configuration for a single package repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Unique repository id (e.g., `"base"`, `"updates"`).
    pub id: String,
    /// Human-readable repository name.
    pub name: String,
    /// Whether the repository participates in metadata sync and queries.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Whether package signatures from this repository are verified.
    #[serde(default)]
    pub gpg_check: bool,
    /// Trust key location, required when `gpg_check` is on.
    #[serde(default)]
    pub gpg_key: Option<String>,
    /// Seconds before cached metadata is considered stale.
    #[serde(default = "default_metadata_expire")]
    pub metadata_expire: u64,
    /// How much metadata to pull on the next sync.
    #[serde(default)]
    pub md_policy: MdPolicy,
}

fn default_enabled() -> bool {
    true
}

fn default_metadata_expire() -> u64 {
    // 90 minutes, the conventional default for package metadata.
    5400
}

impl RepoConfig {
    /// Create an enabled repository with default policy settings.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
            gpg_check: false,
            gpg_key: None,
            metadata_expire: default_metadata_expire(),
            md_policy: MdPolicy::default(),
        }
    }
}

/// All configured repositories, keyed and iterated in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRegistry {
    repos: BTreeMap<String, RepoConfig>,
}

impl RepoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a repository, keyed by its id.
    pub fn insert(&mut self, repo: RepoConfig) {
        self.repos.insert(repo.id.clone(), repo);
    }

    pub fn get(&self, id: &str) -> Option<&RepoConfig> {
        self.repos.get(id)
    }

    /// All repositories, enabled or not, in id order.
    pub fn iter(&self) -> Values<'_, String, RepoConfig> {
        self.repos.values()
    }

    /// Mutable view over every repository, in id order.
    pub fn iter_mut(&mut self) -> ValuesMut<'_, String, RepoConfig> {
        self.repos.values_mut()
    }

    /// Only the enabled repositories, in id order.
    pub fn enabled(&self) -> impl Iterator<Item = &RepoConfig> {
        self.repos.values().filter(|r| r.enabled)
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }
}
