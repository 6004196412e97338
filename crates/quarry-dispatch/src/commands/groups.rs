//! Group verbs: grouplist, groupinstall, groupremove, groupinfo.
//!
//! All four share one pre-step that loads repository and group metadata
//! before the group operation itself runs.

use tracing::debug;

use quarry_types::{DispatchResult, QuarryError};

use super::translated;
use crate::checks::{check_gpg_keys, check_group_args, check_root};
use crate::context::ExecutionContext;
use crate::handler::{CommandDef, CommandError};

/// Shared pre-step: load repo metadata, then group metadata.
///
/// Returns the ready-made failure result when metadata cannot be loaded; a
/// missing-groups fault gets its own message, everything else the generic
/// translation.
fn prepare_group_metadata(ctx: &mut dyn ExecutionContext) -> Result<(), DispatchResult> {
    debug!("setting up group process");
    if let Err(err) = ctx.setup_repos() {
        return Err(DispatchResult::error(err.to_string()));
    }
    match ctx.setup_groups() {
        Ok(()) => Ok(()),
        Err(QuarryError::GroupsError(_)) => {
            Err(DispatchResult::error("No Groups on which to run command"))
        }
        Err(err) => Err(DispatchResult::error(err.to_string())),
    }
}

/// List the groups defined by the enabled repositories.
pub struct GroupListCommand;

impl CommandDef for GroupListCommand {
    fn name(&self) -> &'static str {
        "grouplist"
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
        if let Err(failed) = prepare_group_metadata(ctx) {
            return Ok(failed);
        }
        translated(ctx.group_lists(args))
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

/// Install (or, as `groupupdate`, update) the named groups.
pub struct GroupInstallCommand;

impl CommandDef for GroupInstallCommand {
    fn name(&self) -> &'static str {
        "groupinstall"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["groupupdate"]
    }

    fn usage(&self) -> &'static str {
        "GROUP..."
    }

    fn check(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        check_root(ctx)?;
        check_gpg_keys(ctx)?;
        check_group_args(args)
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        if let Err(failed) = prepare_group_metadata(ctx) {
            return Ok(failed);
        }
        translated(ctx.install_groups(args))
    }
}

/// Remove the packages of the named groups.
pub struct GroupRemoveCommand;

impl CommandDef for GroupRemoveCommand {
    fn name(&self) -> &'static str {
        "groupremove"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["grouperase"]
    }

    fn usage(&self) -> &'static str {
        "GROUP..."
    }

    fn check(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        check_root(ctx)?;
        check_group_args(args)
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        if let Err(failed) = prepare_group_metadata(ctx) {
            return Ok(failed);
        }
        translated(ctx.remove_groups(args))
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

/// Show the packages making up the named groups.
pub struct GroupInfoCommand;

impl CommandDef for GroupInfoCommand {
    fn name(&self) -> &'static str {
        "groupinfo"
    }

    fn usage(&self) -> &'static str {
        "GROUP..."
    }

    fn check(
        &self,
        _ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        check_group_args(args)
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        if let Err(failed) = prepare_group_metadata(ctx) {
            return Ok(failed);
        }
        translated(ctx.group_info(args))
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
