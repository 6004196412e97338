//! Package listing data returned by the backend's category queries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single package as reported by a category query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkgEntry {
    pub name: String,
    pub arch: String,
    /// Epoch-version-release string (e.g., `"2:1.4.0-3"`).
    pub evr: String,
    /// Id of the repository the entry came from; `"installed"` for the
    /// local database.
    pub repo_id: String,
    #[serde(default)]
    pub summary: Option<String>,
}

impl PkgEntry {
    pub fn new(
        name: impl Into<String>,
        arch: impl Into<String>,
        evr: impl Into<String>,
        repo_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            arch: arch.into(),
            evr: evr.into(),
            repo_id: repo_id.into(),
            summary: None,
        }
    }
}

impl fmt::Display for PkgEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<36} {:<20} {}",
            format!("{}.{}", self.name, self.arch),
            self.evr,
            self.repo_id
        )
    }
}

/// Result of a category query: one list per package category, plus the
/// obsoleting pairs and the selector patterns the backend did not consume.
///
/// Backends consume leading special tokens (`installed`, `updates`, …) from
/// the argument list to restrict the query; `patterns` holds whatever
/// remained. Callers use it to tell a restricted request from an
/// unrestricted listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageLists {
    pub installed: Vec<PkgEntry>,
    pub available: Vec<PkgEntry>,
    pub extras: Vec<PkgEntry>,
    pub updates: Vec<PkgEntry>,
    pub obsoletes: Vec<PkgEntry>,
    /// `(newer, older)` pairs backing the `obsoletes` list.
    pub obsoleting: Vec<(PkgEntry, PkgEntry)>,
    pub recent: Vec<PkgEntry>,
    /// Selector arguments left after special-category tokens were consumed.
    pub patterns: Vec<String>,
}
