//! Package mutation verbs: install, update, upgrade, erase, localinstall.

use tracing::debug;

use quarry_types::{DispatchResult, QuarryError};

use super::translated;
use crate::checks::{check_gpg_keys, check_package_args, check_root};
use crate::context::ExecutionContext;
use crate::handler::{CommandDef, CommandError};

/// Install named packages from the configured repositories.
pub struct InstallCommand;

impl CommandDef for InstallCommand {
    fn name(&self) -> &'static str {
        "install"
    }

    fn usage(&self) -> &'static str {
        "PACKAGE..."
    }

    fn check(
        &self,
        ctx: &mut dyn ExecutionContext,
        verb: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        check_root(ctx)?;
        check_gpg_keys(ctx)?;
        check_package_args(verb, args)
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        debug!("setting up install process");
        translated(ctx.install_packages(args))
    }
}

/// Update installed packages, all of them when no names are given.
pub struct UpdateCommand;

impl CommandDef for UpdateCommand {
    fn name(&self) -> &'static str {
        "update"
    }

    fn usage(&self) -> &'static str {
        "[PACKAGE...]"
    }

    fn check(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        _args: &[String],
    ) -> Result<(), CommandError> {
        check_root(ctx)?;
        check_gpg_keys(ctx)
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        debug!("setting up update process");
        translated(ctx.update_packages(args))
    }
}

/// Like update, but treats obsoleting packages as upgrades.
pub struct UpgradeCommand;

impl CommandDef for UpgradeCommand {
    fn name(&self) -> &'static str {
        "upgrade"
    }

    fn usage(&self) -> &'static str {
        "[PACKAGE...]"
    }

    fn check(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        _args: &[String],
    ) -> Result<(), CommandError> {
        check_root(ctx)?;
        check_gpg_keys(ctx)
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        ctx.config_mut().obsoletes = true;
        debug!("setting up upgrade process");
        translated(ctx.update_packages(args))
    }
}

/// Remove installed packages.
pub struct EraseCommand;

impl CommandDef for EraseCommand {
    fn name(&self) -> &'static str {
        "erase"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["remove"]
    }

    fn usage(&self) -> &'static str {
        "PACKAGE..."
    }

    fn check(
        &self,
        ctx: &mut dyn ExecutionContext,
        verb: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        check_root(ctx)?;
        check_package_args(verb, args)
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        _verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        debug!("setting up remove process");
        translated(ctx.remove_packages(args))
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

/// Install or update from local archive files. Invoked as `localupdate`,
/// it only touches packages that are already installed.
pub struct LocalInstallCommand;

impl CommandDef for LocalInstallCommand {
    fn name(&self) -> &'static str {
        "localinstall"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["localupdate"]
    }

    fn usage(&self) -> &'static str {
        "FILE..."
    }

    fn check(
        &self,
        ctx: &mut dyn ExecutionContext,
        verb: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        check_root(ctx)?;
        check_gpg_keys(ctx)?;
        check_package_args(verb, args)
    }

    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError> {
        debug!("setting up local package process");
        let update_only = verb == "localupdate";
        translated(ctx.local_install(args, update_only))
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
