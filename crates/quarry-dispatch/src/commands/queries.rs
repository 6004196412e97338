//! Read-only query verbs: info/list, check-update, search, provides,
//! resolvedep, deplist.

use tracing::debug;

use quarry_types::{DispatchResult, ExitStatus, PkgEntry, QuarryError};

use super::translated;
use crate::checks::{check_item_args, check_package_args};
use crate::context::ExecutionContext;
use crate::handler::{CommandDef, CommandError};

/// Print one category of packages under a header. Returns whether the
/// category was empty.
fn print_section(header: &str, entries: &[PkgEntry], detailed: bool) -> bool {
    if entries.is_empty() {
        return true;
    }
    println!("{header}");
    for entry in entries {
        print_entry(entry, detailed);
    }
    false
}

fn print_entry(entry: &PkgEntry, detailed: bool) {
    if detailed {
        println!("Name   : {}", entry.name);
        println!("Arch   : {}", entry.arch);
        println!("Version: {}", entry.evr);
        println!("Repo   : {}", entry.repo_id);
        if let Some(summary) = &entry.summary {
            println!("Summary: {summary}");
        }
        println!();
    } else {
        println!("{entry}");
    }
}

/// List or describe packages by category. `list` prints one line per
/// package, `info` a detail block.
pub struct InfoListCommand;

impl CommandDef for InfoListCommand {
    fn name(&self) -> &'static str {
        "info"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["list"]
    }

    fn usage(&self) -> &'static str {
        "[installed|available|updates|extras|obsoletes|recent] [PATTERN...]"
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        let lists = match ctx.package_lists(args) {
            Ok(lists) => lists,
            Err(err) => return Ok(DispatchResult::error(err.to_string())),
        };

        let detailed = verb == "info";
        let no_installed = print_section("Installed Packages", &lists.installed, detailed);
        let no_available = print_section("Available Packages", &lists.available, detailed);
        let no_extras = print_section("Extra Packages", &lists.extras, detailed);
        let no_updates = print_section("Updated Packages", &lists.updates, detailed);

        // A list request with obsolete information prints the obsoleting
        // pairs directly instead of a plain listing.
        let no_obsoletes = if verb == "list" && !lists.obsoletes.is_empty() {
            println!("Obsoleting Packages");
            for (newer, older) in &lists.obsoleting {
                println!(
                    "{}.{} {} obsoletes {}.{} {}",
                    newer.name, newer.arch, newer.evr, older.name, older.arch, older.evr
                );
            }
            false
        } else {
            print_section("Obsoleting Packages", &lists.obsoletes, detailed)
        };
        let no_recent = print_section("Recently Added Packages", &lists.recent, detailed);

        // A restricted request that matched nothing anywhere is a failure;
        // an unrestricted listing always succeeds. The backend consumed any
        // special category tokens, so `patterns` holds only real selectors.
        if !lists.patterns.is_empty()
            && no_installed
            && no_available
            && no_extras
            && no_updates
            && no_obsoletes
            && no_recent
        {
            return Ok(DispatchResult::error("No matching Packages to list"));
        }
        Ok(DispatchResult::done())
    }

    fn needs_transaction(
        &self,
        _ctx: &dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> bool {
        // Querying only the install database needs no resolution state.
        !(args.len() == 1 && args[0] == "installed")
    }
}

/// Report whether updates exist, with the distinguished exit code 100.
pub struct CheckUpdateCommand;

impl CommandDef for CheckUpdateCommand {
    fn name(&self) -> &'static str {
        "check-update"
    }

    fn usage(&self) -> &'static str {
        "[PATTERN...]"
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        // Force an updates-category query regardless of the arguments.
        let mut query = Vec::with_capacity(args.len() + 1);
        query.push("updates".to_string());
        query.extend_from_slice(args);

        match ctx.package_lists(&query) {
            Err(err) => Ok(DispatchResult::error(err.to_string())),
            Ok(lists) => {
                if lists.updates.is_empty() {
                    Ok(DispatchResult::done())
                } else {
                    for entry in &lists.updates {
                        println!("{entry}");
                    }
                    Ok(DispatchResult {
                        status: ExitStatus::UpdatesAvailable,
                        messages: Vec::new(),
                    })
                }
            }
        }
    }
}

/// Search package names and summaries for the given items.
pub struct SearchCommand;

impl CommandDef for SearchCommand {
    fn name(&self) -> &'static str {
        "search"
    }

    fn usage(&self) -> &'static str {
        "ITEM..."
    }

    fn check(
        &self,
        _ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        check_item_args(args)
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        debug!("searching packages");
        translated(ctx.search_packages(args))
    }

    fn needs_transaction(
        &self,
        _ctx: &dyn ExecutionContext,
        _verb: &str,
        _args: &[String],
    ) -> bool {
        false
    }
}

/// Find the packages providing the named capabilities or files.
pub struct ProvidesCommand;

impl CommandDef for ProvidesCommand {
    fn name(&self) -> &'static str {
        "provides"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["whatprovides"]
    }

    fn usage(&self) -> &'static str {
        "ITEM..."
    }

    fn check(
        &self,
        _ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        check_item_args(args)
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        debug!("searching packages for capability");
        translated(ctx.provides(args))
    }
}

/// Resolve which packages satisfy the given dependency specs.
pub struct ResolveDepCommand;

impl CommandDef for ResolveDepCommand {
    fn name(&self) -> &'static str {
        "resolvedep"
    }

    fn usage(&self) -> &'static str {
        "DEP..."
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        debug!("searching packages for dependency");
        translated(ctx.resolve_dependencies(args))
    }
}

/// List the dependency tree of the named packages.
pub struct DepListCommand;

impl CommandDef for DepListCommand {
    fn name(&self) -> &'static str {
        "deplist"
    }

    fn usage(&self) -> &'static str {
        "PACKAGE..."
    }

    fn check(
        &self,
        _ctx: &mut dyn ExecutionContext,
        verb: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        check_package_args(verb, args)
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        debug!("finding dependencies");
        translated(ctx.list_dependencies(args))
    }
}
