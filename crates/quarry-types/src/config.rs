//! Global configuration threaded through every dispatch cycle.

use serde::{Deserialize, Serialize};

/// Effective uid of the privileged account.
pub const PRIVILEGED_UID: u32 = 0;

/// Mutable global flags owned by the execution context.
///
/// Commands mutate this only serially, inside their own `check`/`execute`
/// phase; nothing in the dispatch core touches it concurrently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarryConfig {
    /// Effective uid of the invoking user, filled in by the driver.
    pub uid: u32,
    /// Treat obsoleting packages as upgrades (set by the `upgrade` verb).
    pub obsoletes: bool,
    /// Prefer cached repository data over fresh downloads (set by `clean`).
    pub cache_only: bool,
}

impl Default for QuarryConfig {
    fn default() -> Self {
        Self {
            uid: PRIVILEGED_UID,
            obsoletes: false,
            cache_only: false,
        }
    }
}

impl QuarryConfig {
    /// Whether the invoking user is the privileged account.
    pub fn is_privileged(&self) -> bool {
        self.uid == PRIVILEGED_UID
    }
}
