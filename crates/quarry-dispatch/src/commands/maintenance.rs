//! Maintenance verbs: makecache, clean, repolist, shell.

use tracing::debug;

use quarry_types::{DispatchResult, MdPolicy, QuarryError, RepoScope};

use super::translated;
use crate::checks::{check_root, check_shell_args, clean_targets};
use crate::context::ExecutionContext;
use crate::handler::{CommandDef, CommandError};

/// Refresh the metadata cache for every enabled repository.
pub struct MakeCacheCommand;

impl CommandDef for MakeCacheCommand {
    fn name(&self) -> &'static str {
        "makecache"
    }

    fn check(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        _args: &[String],
    ) -> Result<(), CommandError> {
        check_root(ctx)
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        _args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        debug!("rebuilding metadata caches for all configured repositories");
        debug!("this may take a while depending on connection speed");

        // Every repository gets the maximal refresh settings, enabled or
        // not, before the enabled-only sync runs.
        for repo in ctx.repos_mut().iter_mut() {
            repo.metadata_expire = 0;
            repo.md_policy = MdPolicy::GroupAll;
        }
        if let Err(err) = ctx.setup_repos() {
            return Ok(DispatchResult::error(err.to_string()));
        }
        if let Err(err) = ctx.sync_metadata() {
            return Ok(DispatchResult::error(err.to_string()));
        }
        Ok(DispatchResult::done_with("Metadata Cache Created"))
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

/// Drop cached data for the named categories.
pub struct CleanCommand;

impl CommandDef for CleanCommand {
    fn name(&self) -> &'static str {
        "clean"
    }

    fn usage(&self) -> &'static str {
        "{headers|packages|metadata|dbcache|plugins|all}..."
    }

    fn check(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        check_root(ctx)?;
        clean_targets(args).map(|_| ())
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        ctx.config_mut().cache_only = true;
        // check() already validated the arguments; a parse failure here
        // means the dispatcher was driven outside its contract.
        let targets =
            clean_targets(args).map_err(|err| QuarryError::ConfigError(err.message))?;
        // Delegation is deliberately untranslated; the dispatcher contains
        // any fault from the cleaning operation.
        ctx.clean_caches(&targets)
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

/// List configured repositories, filtered by scope.
pub struct RepoListCommand;

impl CommandDef for RepoListCommand {
    fn name(&self) -> &'static str {
        "repolist"
    }

    fn usage(&self) -> &'static str {
        "[all|enabled|disabled]"
    }

    fn check(
        &self,
        _ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        match args {
            [] => Ok(()),
            [scope] => match scope.parse::<RepoScope>() {
                Ok(_) => Ok(()),
                Err(err) => {
                    let message = format!("Error: {err}");
                    tracing::error!("{message}");
                    Err(CommandError::with_usage(message))
                }
            },
            _ => {
                let message = "Error: repolist takes at most one argument";
                tracing::error!("{message}");
                Err(CommandError::with_usage(message))
            }
        }
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        let scope = args
            .first()
            .and_then(|arg| arg.parse::<RepoScope>().ok())
            .unwrap_or(RepoScope::Enabled);

        if !ctx.repos().is_empty() {
            println!("{:<20.20} {:<40.40}  {}", "repo id", "repo name", "status");
        }
        for repo in ctx.repos().iter() {
            if scope.includes(repo.enabled) {
                let status = if repo.enabled { "enabled" } else { "disabled" };
                println!("{:<20.20} {:<40.40}  {}", repo.id, repo.name, status);
            }
        }
        Ok(DispatchResult::done())
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

/// Enter the interactive shell, optionally replaying a script file.
pub struct ShellCommand;

impl CommandDef for ShellCommand {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn usage(&self) -> &'static str {
        "[SCRIPT]"
    }

    fn check(
        &self,
        _ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        check_shell_args(args)
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        debug!("setting up the shell");
        translated(ctx.run_shell(args.first().map(String::as_str)))
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
