//! Error types shared across all quarry crates.

/// Errors raised by the package backend behind the execution context.
///
/// Commands catch these at their boundary and translate them into an
/// error-status [`crate::DispatchResult`]; one that escapes a command is
/// treated by the dispatcher as a contract violation.
#[derive(Debug, thiserror::Error)]
pub enum QuarryError {
    #[error("package operation failed: {0}")]
    PackageError(String),

    #[error("repository error: {0}")]
    RepoError(String),

    #[error("group metadata error: {0}")]
    GroupsError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("no package engine attached: cannot {0}")]
    EngineUnavailable(String),
}

/// Failures of the dispatch machinery itself, outside the command contract.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The verb did not resolve to any registered command. A driver-level
    /// fatal condition, distinct from a failed precondition check.
    #[error("no such command: '{0}'")]
    UnknownCommand(String),

    /// Two command variants declared the same verb. Raised while building
    /// the registry, never at lookup time.
    #[error("conflicting registration: verb '{0}' is already taken")]
    DuplicateVerb(String),
}
