//! Command dispatch and validation framework for the quarry CLI.
//!
//! Maps a user-typed verb (`install`, `update`, `search`, ...) to a command
//! object and runs it through a uniform lifecycle: precondition checks,
//! optional transaction preparation, then execution. Commands are
//! registered in a [`CommandRegistry`], resolved and run by the
//! [`Dispatcher`], and each implements the [`CommandDef`] trait.
//!
//! # Architecture
//!
//! - [`context`]: the [`ExecutionContext`] trait, the seam to the package
//!   backend (configuration, repositories, package operations).
//! - [`handler`]: the [`CommandDef`] trait and the [`CommandError`]
//!   check-failure signal.
//! - [`checks`]: reusable precondition checks (root identity, GPG trust,
//!   argument arity and shape).
//! - [`registry`]: verb-to-command lookup with build-time conflict
//!   detection.
//! - [`dispatcher`]: the resolve/validate/execute state machine and error
//!   containment.
//! - [`commands`]: the concrete command variants and
//!   [`standard_registry`] to build the full verb set.
//!
//! # Error containment
//!
//! A failed check ends the cycle with status 1 before execution starts.
//! Commands translate backend faults into error results at their own
//! boundary; anything that still escapes is logged by the dispatcher and
//! surfaced as status 1, never propagated to the driver as a raw fault.

pub mod checks;
pub mod commands;
pub mod context;
pub mod dispatcher;
pub mod handler;
pub mod registry;

pub use commands::{register_standard, standard_registry};
pub use context::ExecutionContext;
pub use dispatcher::Dispatcher;
pub use handler::{CommandDef, CommandError};
pub use registry::CommandRegistry;
