//! The concrete command variants behind every quarry verb.
//!
//! - [`packages`]: install, update, upgrade, erase, localinstall.
//! - [`queries`]: info/list, check-update, search, provides, resolvedep,
//!   deplist.
//! - [`groups`]: the shared group pre-step and the four group verbs.
//! - [`maintenance`]: makecache, clean, repolist, shell.

pub mod groups;
pub mod maintenance;
pub mod packages;
pub mod queries;

use quarry_types::{DispatchError, DispatchResult, QuarryError};

use crate::registry::CommandRegistry;

/// Translate an expected backend fault into an error-status result.
///
/// Commands call this at their delegation point so faults stop at the
/// command boundary instead of reaching the dispatcher.
fn translated(
    outcome: Result<DispatchResult, QuarryError>,
) -> Result<DispatchResult, QuarryError> {
    Ok(match outcome {
        Ok(result) => result,
        Err(err) => DispatchResult::error(err.to_string()),
    })
}

/// Register every standard command into the given registry.
pub fn register_standard(registry: &mut CommandRegistry) -> Result<(), DispatchError> {
    registry.register(Box::new(packages::InstallCommand))?;
    registry.register(Box::new(packages::UpdateCommand))?;
    registry.register(Box::new(packages::UpgradeCommand))?;
    registry.register(Box::new(packages::EraseCommand))?;
    registry.register(Box::new(packages::LocalInstallCommand))?;
    registry.register(Box::new(queries::InfoListCommand))?;
    registry.register(Box::new(queries::CheckUpdateCommand))?;
    registry.register(Box::new(queries::SearchCommand))?;
    registry.register(Box::new(queries::ProvidesCommand))?;
    registry.register(Box::new(queries::ResolveDepCommand))?;
    registry.register(Box::new(queries::DepListCommand))?;
    registry.register(Box::new(groups::GroupListCommand))?;
    registry.register(Box::new(groups::GroupInstallCommand))?;
    registry.register(Box::new(groups::GroupRemoveCommand))?;
    registry.register(Box::new(groups::GroupInfoCommand))?;
    registry.register(Box::new(maintenance::MakeCacheCommand))?;
    registry.register(Box::new(maintenance::CleanCommand))?;
    registry.register(Box::new(maintenance::RepoListCommand))?;
    registry.register(Box::new(maintenance::ShellCommand))?;
    Ok(())
}

/// Build a registry holding the full standard command set.
pub fn standard_registry() -> Result<CommandRegistry, DispatchError> {
    let mut registry = CommandRegistry::new();
    register_standard(&mut registry)?;
    Ok(registry)
}
