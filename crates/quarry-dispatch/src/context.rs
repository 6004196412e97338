//! The execution context: the seam between the dispatch core and the
//! package backend.
//!
//! Everything slow or stateful lives behind this trait: configuration,
//! repository metadata, dependency resolution, and the package operations
//! themselves. The dispatch core treats every method as an opaque,
//! potentially slow, synchronous call; timeout and retry policy belong to
//! the implementor.

use quarry_types::{
    CleanTarget, DispatchResult, PackageLists, QuarryConfig, QuarryError, RepoRegistry,
};

/// Collaborator interface consumed by every command.
///
/// A `&mut dyn ExecutionContext` is threaded through each dispatch cycle;
/// mutation happens only serially, inside the single selected command's
/// `check` then `execute` phase. Package operations return either a
/// ready-made [`DispatchResult`] or a [`QuarryError`] that the calling
/// command must translate.
pub trait ExecutionContext {
    fn config(&self) -> &QuarryConfig;
    fn config_mut(&mut self) -> &mut QuarryConfig;

    fn repos(&self) -> &RepoRegistry;
    fn repos_mut(&mut self) -> &mut RepoRegistry;

    /// Materialize the package-transaction/resolution state some commands
    /// need before `execute`. Invoked by the dispatcher when the selected
    /// command declares the need.
    fn prepare_transaction(&mut self) -> Result<(), QuarryError>;

    /// Load repository metadata without populating the package sack.
    fn setup_repos(&mut self) -> Result<(), QuarryError>;

    /// Load group metadata; fails with [`QuarryError::GroupsError`] when no
    /// repository provides any.
    fn setup_groups(&mut self) -> Result<(), QuarryError>;

    /// Refresh metadata for every enabled repository.
    fn sync_metadata(&mut self) -> Result<(), QuarryError>;

    // Package operations.

    fn install_packages(&mut self, pkgs: &[String]) -> Result<DispatchResult, QuarryError>;
    fn update_packages(&mut self, pkgs: &[String]) -> Result<DispatchResult, QuarryError>;
    fn remove_packages(&mut self, pkgs: &[String]) -> Result<DispatchResult, QuarryError>;

    /// Install or update from local archive files rather than repositories.
    fn local_install(
        &mut self,
        files: &[String],
        update_only: bool,
    ) -> Result<DispatchResult, QuarryError>;

    fn search_packages(&mut self, terms: &[String]) -> Result<DispatchResult, QuarryError>;

    /// Find packages providing the named capabilities or files.
    fn provides(&mut self, terms: &[String]) -> Result<DispatchResult, QuarryError>;

    fn resolve_dependencies(&mut self, specs: &[String]) -> Result<DispatchResult, QuarryError>;
    fn list_dependencies(&mut self, pkgs: &[String]) -> Result<DispatchResult, QuarryError>;

    /// Run the category queries. Leading special tokens (`installed`,
    /// `updates`, `available`, `extras`, `obsoletes`, `recent`) restrict the
    /// query and are consumed from `args`; the remainder comes back in
    /// [`PackageLists::patterns`].
    fn package_lists(&mut self, args: &[String]) -> Result<PackageLists, QuarryError>;

    // Group operations. Callers run the shared group pre-step first.

    fn group_lists(&mut self, patterns: &[String]) -> Result<DispatchResult, QuarryError>;
    fn install_groups(&mut self, groups: &[String]) -> Result<DispatchResult, QuarryError>;
    fn remove_groups(&mut self, groups: &[String]) -> Result<DispatchResult, QuarryError>;
    fn group_info(&mut self, groups: &[String]) -> Result<DispatchResult, QuarryError>;

    fn clean_caches(&mut self, targets: &[CleanTarget]) -> Result<DispatchResult, QuarryError>;

    /// Enter the interactive shell, optionally replaying a script file.
    fn run_shell(&mut self, script: Option<&str>) -> Result<DispatchResult, QuarryError>;
}
