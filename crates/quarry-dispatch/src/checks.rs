//! Reusable precondition checks shared by the command variants.
//!
//! Each check either returns `Ok(())` or logs a human-readable reason on
//! the critical channel and fails with a [`CommandError`]. Checks are
//! independent and order-free; a command composes the ones that apply to it
//! and the first failure short-circuits the rest, along with execution.

use std::path::Path;

use tracing::{debug, error};

use quarry_types::CleanTarget;

use crate::context::ExecutionContext;
use crate::handler::CommandError;

/// The invoking user must be the privileged account.
pub fn check_root(ctx: &dyn ExecutionContext) -> Result<(), CommandError> {
    if ctx.config().is_privileged() {
        return Ok(());
    }
    let message = "You need to be root to perform this command.";
    error!("{message}");
    Err(CommandError::new(message))
}

/// Every enabled repository with signature checking on must have a trust
/// key configured.
pub fn check_gpg_keys(ctx: &dyn ExecutionContext) -> Result<(), CommandError> {
    for repo in ctx.repos().enabled() {
        if repo.gpg_check && repo.gpg_key.is_none() {
            let message = format!(
                "Signature checking is enabled for repository '{}', but no trust key is \
                 configured.\nImport the public key for the packages you wish to install, or \
                 point the repository's 'gpg_key' option at the key to use.",
                repo.id
            );
            error!("{message}");
            return Err(CommandError::new(message));
        }
    }
    Ok(())
}

/// At least one package name must be supplied.
pub fn check_package_args(verb: &str, args: &[String]) -> Result<(), CommandError> {
    if !args.is_empty() {
        return Ok(());
    }
    let message = format!("Error: Need to pass a list of packages to {verb}");
    error!("{message}");
    Err(CommandError::with_usage(message))
}

/// At least one search item must be supplied.
pub fn check_item_args(args: &[String]) -> Result<(), CommandError> {
    if !args.is_empty() {
        return Ok(());
    }
    let message = "Error: Need an item to match";
    error!("{message}");
    Err(CommandError::with_usage(message))
}

/// At least one group name must be supplied.
pub fn check_group_args(args: &[String]) -> Result<(), CommandError> {
    if !args.is_empty() {
        return Ok(());
    }
    let message = "Error: Need a group or list of groups";
    error!("{message}");
    Err(CommandError::with_usage(message))
}

/// Every `clean` argument must name a known cache category, and at least
/// one must be present. Returns the parsed targets so `execute` can reuse
/// the same function.
pub fn clean_targets(args: &[String]) -> Result<Vec<CleanTarget>, CommandError> {
    if args.is_empty() {
        let message = format!(
            "Error: clean requires an option: {}",
            CleanTarget::NAMES.join(", ")
        );
        error!("{message}");
        return Err(CommandError::with_usage(message));
    }
    let mut targets = Vec::with_capacity(args.len());
    for arg in args {
        match arg.parse::<CleanTarget>() {
            Ok(target) => targets.push(target),
            Err(err) => {
                let message = format!("Error: {err}");
                error!("{message}");
                return Err(CommandError::with_usage(message));
            }
        }
    }
    Ok(targets)
}

/// `shell` takes either no arguments or exactly one naming an existing
/// script file.
pub fn check_shell_args(args: &[String]) -> Result<(), CommandError> {
    match args {
        [] => {
            debug!("no argument to shell");
            Ok(())
        }
        [file] => {
            debug!("filename passed to shell: {file}");
            if Path::new(file).is_file() {
                return Ok(());
            }
            let message = format!("File {file} given as argument to shell does not exist.");
            error!("{message}");
            Err(CommandError::with_usage(message))
        }
        _ => {
            let message = "Error: more than one file given as argument to shell.";
            error!("{message}");
            Err(CommandError::with_usage(message))
        }
    }
}
