//! Shared helpers for integration tests.
//!
//! Each integration test file compiles common/ as its own module, so not
//! every helper is used in every file.
#![allow(dead_code)]

use quarry_dispatch::ExecutionContext;
use quarry_types::{
    CleanTarget, DispatchResult, PackageLists, PkgEntry, QuarryConfig, QuarryError, RepoConfig,
    RepoRegistry,
};

/// Category tokens the real backend consumes from the front of a query.
const SPECIAL_TOKENS: &[&str] = &[
    "installed",
    "available",
    "updates",
    "extras",
    "obsoletes",
    "recent",
    "all",
];

/// Recording execution context with scriptable results.
///
/// Every trait call appends an entry to `calls`, so tests can assert both
/// what ran and in which order. Backend failures are injected by naming
/// the operation in `fail_op`.
pub struct MockContext {
    pub config: QuarryConfig,
    pub repos: RepoRegistry,
    pub calls: Vec<String>,
    /// Category lists handed back by `package_lists`.
    pub lists: PackageLists,
    /// Operation name that should fail with a backend error.
    pub fail_op: Option<&'static str>,
    /// Make `setup_groups` report missing group metadata.
    pub no_group_metadata: bool,
    /// Snapshot of the repositories taken when `sync_metadata` ran.
    pub repos_at_sync: Option<RepoRegistry>,
}

impl MockContext {
    pub fn new() -> Self {
        let mut repos = RepoRegistry::new();
        repos.insert(RepoConfig::new("base", "Base packages"));
        let mut source = RepoConfig::new("source", "Source packages");
        source.enabled = false;
        repos.insert(source);

        Self {
            config: QuarryConfig::default(),
            repos,
            calls: Vec::new(),
            lists: PackageLists::default(),
            fail_op: None,
            no_group_metadata: false,
            repos_at_sync: None,
        }
    }

    fn record(&mut self, call: impl Into<String>) {
        self.calls.push(call.into());
    }

    /// Call names with their argument lists stripped.
    pub fn operations(&self) -> Vec<&str> {
        self.calls
            .iter()
            .map(|c| c.split('(').next().unwrap_or(c))
            .collect()
    }

    pub fn ran(&self, op: &str) -> bool {
        self.operations().contains(&op)
    }
}

impl Default for MockContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionContext for MockContext {
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
        self.record("prepare_transaction");
        if self.fail_op == Some("prepare_transaction") {
            return Err(QuarryError::PackageError(
                "prepare_transaction exploded".into(),
            ));
        }
        Ok(())
    }

    fn setup_repos(&mut self) -> Result<(), QuarryError> {
        self.record("setup_repos");
        if self.fail_op == Some("setup_repos") {
            return Err(QuarryError::RepoError("setup_repos exploded".into()));
        }
        Ok(())
    }

    fn setup_groups(&mut self) -> Result<(), QuarryError> {
        self.record("setup_groups");
        if self.no_group_metadata {
            return Err(QuarryError::GroupsError("no repository provides groups".into()));
        }
        Ok(())
    }

    fn sync_metadata(&mut self) -> Result<(), QuarryError> {
        self.record("sync_metadata");
        self.repos_at_sync = Some(self.repos.clone());
        if self.fail_op == Some("sync_metadata") {
            return Err(QuarryError::RepoError("sync_metadata exploded".into()));
        }
        Ok(())
    }

    fn install_packages(&mut self, pkgs: &[String]) -> Result<DispatchResult, QuarryError> {
        let call = format!("install_packages({})", pkgs.join(","));
        self.record(call);
        if self.fail_op == Some("install_packages") {
            return Err(QuarryError::PackageError("install_packages exploded".into()));
        }
        Ok(DispatchResult::more_work())
    }

    fn update_packages(&mut self, pkgs: &[String]) -> Result<DispatchResult, QuarryError> {
        let call = format!("update_packages({})", pkgs.join(","));
        self.record(call);
        if self.fail_op == Some("update_packages") {
            return Err(QuarryError::PackageError("update_packages exploded".into()));
        }
        Ok(DispatchResult::more_work())
    }

    fn remove_packages(&mut self, pkgs: &[String]) -> Result<DispatchResult, QuarryError> {
        let call = format!("remove_packages({})", pkgs.join(","));
        self.record(call);
        if self.fail_op == Some("remove_packages") {
            return Err(QuarryError::PackageError("remove_packages exploded".into()));
        }
        Ok(DispatchResult::more_work())
    }

    fn local_install(
        &mut self,
        files: &[String],
        update_only: bool,
    ) -> Result<DispatchResult, QuarryError> {
        let call = format!("local_install({},update_only={update_only})", files.join(","));
        self.record(call);
        Ok(DispatchResult::more_work())
    }

    fn search_packages(&mut self, terms: &[String]) -> Result<DispatchResult, QuarryError> {
        let call = format!("search_packages({})", terms.join(","));
        self.record(call);
        Ok(DispatchResult::done())
    }

    fn provides(&mut self, terms: &[String]) -> Result<DispatchResult, QuarryError> {
        let call = format!("provides({})", terms.join(","));
        self.record(call);
        Ok(DispatchResult::done())
    }

    fn resolve_dependencies(&mut self, specs: &[String]) -> Result<DispatchResult, QuarryError> {
        let call = format!("resolve_dependencies({})", specs.join(","));
        self.record(call);
        Ok(DispatchResult::done())
    }

    fn list_dependencies(&mut self, pkgs: &[String]) -> Result<DispatchResult, QuarryError> {
        let call = format!("list_dependencies({})", pkgs.join(","));
        self.record(call);
        Ok(DispatchResult::done())
    }

    fn package_lists(&mut self, args: &[String]) -> Result<PackageLists, QuarryError> {
        let call = format!("package_lists({})", args.join(","));
        self.record(call);
        if self.fail_op == Some("package_lists") {
            return Err(QuarryError::PackageError("package_lists exploded".into()));
        }
        // Emulate the backend consuming leading special category tokens.
        let mut lists = self.lists.clone();
        lists.patterns = args
            .iter()
            .skip_while(|arg| SPECIAL_TOKENS.contains(&arg.as_str()))
            .cloned()
            .collect();
        Ok(lists)
    }

    fn group_lists(&mut self, patterns: &[String]) -> Result<DispatchResult, QuarryError> {
        let call = format!("group_lists({})", patterns.join(","));
        self.record(call);
        Ok(DispatchResult::done())
    }

    fn install_groups(&mut self, groups: &[String]) -> Result<DispatchResult, QuarryError> {
        let call = format!("install_groups({})", groups.join(","));
        self.record(call);
        Ok(DispatchResult::more_work())
    }

    fn remove_groups(&mut self, groups: &[String]) -> Result<DispatchResult, QuarryError> {
        let call = format!("remove_groups({})", groups.join(","));
        self.record(call);
        Ok(DispatchResult::more_work())
    }

    fn group_info(&mut self, groups: &[String]) -> Result<DispatchResult, QuarryError> {
        let call = format!("group_info({})", groups.join(","));
        self.record(call);
        Ok(DispatchResult::done())
    }

    fn clean_caches(&mut self, targets: &[CleanTarget]) -> Result<DispatchResult, QuarryError> {
        let names: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
        let call = format!("clean_caches({})", names.join(","));
        self.record(call);
        if self.fail_op == Some("clean_caches") {
            return Err(QuarryError::RepoError("clean_caches exploded".into()));
        }
        Ok(DispatchResult::done())
    }

    fn run_shell(&mut self, script: Option<&str>) -> Result<DispatchResult, QuarryError> {
        let call = format!("run_shell({})", script.unwrap_or("-"));
        self.record(call);
        Ok(DispatchResult::done())
    }
}

/// A context whose invoking user is root.
pub fn root_ctx() -> MockContext {
    MockContext::new()
}

/// A context whose invoking user is unprivileged.
pub fn user_ctx() -> MockContext {
    let mut ctx = MockContext::new();
    ctx.config.uid = 1000;
    ctx
}

/// Turn a slice of string literals into owned arguments.
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A package entry for list fixtures.
pub fn entry(name: &str, repo: &str) -> PkgEntry {
    PkgEntry::new(name, "x86_64", "1.0-1", repo)
}
