//! Closed argument vocabularies accepted by individual verbs.

use std::fmt;
use std::str::FromStr;

/// Cache categories accepted by the `clean` verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanTarget {
    Headers,
    Packages,
    Metadata,
    DbCache,
    Plugins,
    All,
}

impl CleanTarget {
    /// Every accepted spelling, in display order for error messages.
    pub const NAMES: [&'static str; 6] = [
        "headers", "packages", "metadata", "dbcache", "plugins", "all",
    ];
}

#[derive(Debug, thiserror::Error)]
#[error("invalid clean argument: '{0}'")]
pub struct ParseCleanTargetError(pub String);

impl FromStr for CleanTarget {
    type Err = ParseCleanTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "headers" => Ok(CleanTarget::Headers),
            "packages" => Ok(CleanTarget::Packages),
            "metadata" => Ok(CleanTarget::Metadata),
            "dbcache" => Ok(CleanTarget::DbCache),
            "plugins" => Ok(CleanTarget::Plugins),
            "all" => Ok(CleanTarget::All),
            other => Err(ParseCleanTargetError(other.to_string())),
        }
    }
}

impl fmt::Display for CleanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CleanTarget::Headers => "headers",
            CleanTarget::Packages => "packages",
            CleanTarget::Metadata => "metadata",
            CleanTarget::DbCache => "dbcache",
            CleanTarget::Plugins => "plugins",
            CleanTarget::All => "all",
        };
        f.write_str(name)
    }
}

/// Repository filter accepted by the `repolist` verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoScope {
    All,
    Enabled,
    Disabled,
}

impl RepoScope {
    /// Whether a repository in the given enablement state is shown.
    pub fn includes(self, enabled: bool) -> bool {
        match self {
            RepoScope::All => true,
            RepoScope::Enabled => enabled,
            RepoScope::Disabled => !enabled,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("repolist argument must be one of: all, enabled, disabled")]
pub struct ParseScopeError;

impl FromStr for RepoScope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(RepoScope::All),
            "enabled" => Ok(RepoScope::Enabled),
            "disabled" => Ok(RepoScope::Disabled),
            _ => Err(ParseScopeError),
        }
    }
}
