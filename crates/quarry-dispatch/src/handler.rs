//! Core command types: the check-failure signal and the command trait.
//!
//! Every verb in the framework is backed by a [`CommandDef`] implementation:
//! a stateless strategy object constructed once at registry build time and
//! shared across calls. All invocation state flows through the arguments,
//! so a command is freely reusable.

use thiserror::Error;

use quarry_types::{DispatchResult, QuarryError};

use crate::context::ExecutionContext;

/// Failure raised by a precondition check or by `check` itself.
///
/// Carries the already-rendered reason; the raising check has also logged
/// it on the critical channel. `show_usage` marks argument-shape failures,
/// for which the driver appends the command's usage text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CommandError {
    pub message: String,
    pub show_usage: bool,
}

impl CommandError {
    /// A precondition failure (no usage text wanted).
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            show_usage: false,
        }
    }

    /// An argument-shape failure; the driver shows usage text.
    pub fn with_usage(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            show_usage: true,
        }
    }
}

/// Trait every command variant implements.
///
/// The dispatcher resolves a verb to one variant, runs `check` to
/// completion, asks `needs_transaction` whether the backend must prepare a
/// transaction context, and only then runs `execute`. Execution never runs
/// if `check` failed.
///
/// `execute` must translate expected backend faults into an error-status
/// [`DispatchResult`]; returning `Err` is reserved for faults the command
/// could not anticipate, which the dispatcher logs and contains.
pub trait CommandDef: Send + Sync {
    /// Primary verb (canonical name used in usage and help text).
    fn name(&self) -> &'static str;

    /// Alternative verbs selecting this command (e.g., `remove` for `erase`).
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Usage pattern shown on argument-shape failures.
    fn usage(&self) -> &'static str {
        ""
    }

    /// Run this command's precondition checks. The first violation wins;
    /// success has no side effects.
    fn check(
        &self,
        _ctx: &mut dyn ExecutionContext,
        _verb: &str,
        _args: &[String],
    ) -> Result<(), CommandError> {
        Ok(())
    }

    /// Perform the verb-specific action by delegating to the context.
    fn execute(
        &self,
        ctx: &mut dyn ExecutionContext,
        verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, QuarryError>;

    /// Whether the backend must materialize a transaction context before
    /// `execute` runs. Read-only queries and cache maintenance override
    /// this to `false`.
    fn needs_transaction(
        &self,
        _ctx: &dyn ExecutionContext,
        _verb: &str,
        _args: &[String],
    ) -> bool {
        true
    }
}
