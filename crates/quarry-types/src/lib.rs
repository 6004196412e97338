//! Core types shared across all quarry crates.
//!
//! Defines the backend error enum, dispatch status codes, configuration,
//! repository metadata, and package listing types used by the dispatch
//! framework and the CLI driver.

pub mod config;
pub mod error;
pub mod options;
pub mod pkg;
pub mod repo;
pub mod status;

pub use config::{QuarryConfig, PRIVILEGED_UID};
pub use error::{DispatchError, QuarryError};
pub use options::{CleanTarget, ParseCleanTargetError, ParseScopeError, RepoScope};
pub use pkg::{PackageLists, PkgEntry};
pub use repo::{MdPolicy, RepoConfig, RepoRegistry};
pub use status::{DispatchResult, ExitStatus};
