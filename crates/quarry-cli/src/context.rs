//! Offline execution context for the standalone binary.
//!
//! The package-resolution engine is an external collaborator; the bundled
//! binary wires up configuration and repository metadata and reports
//! engine-backed operations as unavailable. Embedding applications supply
//! their own [`ExecutionContext`] implementation instead.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use nix::unistd::Uid;
use serde::Deserialize;
use tracing::debug;

use quarry_dispatch::ExecutionContext;
use quarry_types::{
    CleanTarget, DispatchResult, PackageLists, QuarryConfig, QuarryError, RepoConfig, RepoRegistry,
};

/// On-disk repository configuration: a list of `[[repo]]` tables.
#[derive(Debug, Deserialize)]
struct RepoFile {
    #[serde(default)]
    repo: Vec<RepoConfig>,
}

/// Execution context backed only by local configuration.
pub struct OfflineContext {
    config: QuarryConfig,
    repos: RepoRegistry,
}

impl OfflineContext {
    /// Build a context from the given repository configuration file. A
    /// missing file yields an empty repository set rather than an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config = QuarryConfig {
            uid: Uid::effective().as_raw(),
            ..QuarryConfig::default()
        };

        let mut repos = RepoRegistry::new();
        if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let file: RepoFile = toml::from_str(&raw)
                .with_context(|| format!("parsing {}", path.display()))?;
            for repo in file.repo {
                repos.insert(repo);
            }
        } else {
            debug!(
                "repository configuration {} not found; starting with no repositories",
                path.display()
            );
        }

        Ok(Self { config, repos })
    }

    fn engine_missing(op: &str) -> QuarryError {
        QuarryError::EngineUnavailable(op.to_string())
    }
}

impl ExecutionContext for OfflineContext {
    fn config(&self) -> &QuarryConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut QuarryConfig {
        &mut self.config
    }

    fn repos(&self) -> &RepoRegistry {
        &self.repos
    }

    fn repos_mut(&mut self) -> &mut RepoRegistry {
        &mut self.repos
    }

    fn prepare_transaction(&mut self) -> Result<(), QuarryError> {
        // Nothing to prepare without an engine; fail at the operation
        // itself so the user sees which action was unavailable.
        Ok(())
    }

    fn setup_repos(&mut self) -> Result<(), QuarryError> {
        Ok(())
    }

    fn setup_groups(&mut self) -> Result<(), QuarryError> {
        Err(QuarryError::GroupsError(
            "no group metadata available offline".into(),
        ))
    }

    fn sync_metadata(&mut self) -> Result<(), QuarryError> {
        Err(Self::engine_missing("sync repository metadata"))
    }

    fn install_packages(&mut self, _pkgs: &[String]) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("install packages"))
    }

    fn update_packages(&mut self, _pkgs: &[String]) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("update packages"))
    }

    fn remove_packages(&mut self, _pkgs: &[String]) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("remove packages"))
    }

    fn local_install(
        &mut self,
        _files: &[String],
        _update_only: bool,
    ) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("install local packages"))
    }

    fn search_packages(&mut self, _terms: &[String]) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("search packages"))
    }

    fn provides(&mut self, _terms: &[String]) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("search package capabilities"))
    }

    fn resolve_dependencies(&mut self, _specs: &[String]) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("resolve dependencies"))
    }

    fn list_dependencies(&mut self, _pkgs: &[String]) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("list dependencies"))
    }

    fn package_lists(&mut self, _args: &[String]) -> Result<PackageLists, QuarryError> {
        Err(Self::engine_missing("query package lists"))
    }

    fn group_lists(&mut self, _patterns: &[String]) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("list groups"))
    }

    fn install_groups(&mut self, _groups: &[String]) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("install groups"))
    }

    fn remove_groups(&mut self, _groups: &[String]) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("remove groups"))
    }

    fn group_info(&mut self, _groups: &[String]) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("describe groups"))
    }

    fn clean_caches(&mut self, _targets: &[CleanTarget]) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("clean caches"))
    }

    fn run_shell(&mut self, _script: Option<&str>) -> Result<DispatchResult, QuarryError> {
        Err(Self::engine_missing("run the interactive shell"))
    }
}
