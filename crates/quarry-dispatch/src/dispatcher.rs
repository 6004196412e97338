//! The dispatcher: resolves a verb, validates, and executes.
//!
//! One dispatch runs the state machine Resolving -> Validating ->
//! Executing -> Done. An unresolvable verb aborts in Resolving with
//! [`DispatchError::UnknownCommand`]; a failed check ends the cycle with
//! status 1 and never reaches execution; a backend fault that escapes a
//! command's own translation is logged and contained as status 1.

use tracing::error;

use quarry_types::{DispatchError, DispatchResult};

use crate::context::ExecutionContext;
use crate::registry::CommandRegistry;

/// Routes `(verb, args)` pairs to registered commands.
pub struct Dispatcher {
    registry: CommandRegistry,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// Run one full dispatch cycle against the given context.
    ///
    /// 1. Resolve the verb in the registry.
    /// 2. Run the command's precondition checks to completion.
    /// 3. Ask the command whether a transaction context is needed and, if
    ///    so, have the backend prepare one.
    /// 4. Execute, containing any backend fault the command leaked.
    pub fn dispatch(
        &self,
        ctx: &mut dyn ExecutionContext,
        verb: &str,
        args: &[String],
    ) -> Result<DispatchResult, DispatchError> {
        let cmd = self
            .registry
            .lookup(verb)
            .ok_or_else(|| DispatchError::UnknownCommand(verb.to_string()))?;

        if let Err(check_err) = cmd.check(ctx, verb, args) {
            let mut messages = vec![check_err.message];
            if check_err.show_usage && !cmd.usage().is_empty() {
                messages.push(format!("usage: {} {}", verb, cmd.usage()));
            }
            return Ok(DispatchResult::errors(messages));
        }

        if cmd.needs_transaction(ctx, verb, args) {
            if let Err(err) = ctx.prepare_transaction() {
                error!("could not prepare a transaction for '{verb}': {err}");
                return Ok(DispatchResult::error(err.to_string()));
            }
        }

        match cmd.execute(ctx, verb, args) {
            Ok(result) => Ok(result),
            Err(err) => {
                // A fault the command did not translate itself. Contain it
                // at the dispatch boundary.
                error!("command '{verb}' leaked a backend fault: {err}");
                Ok(DispatchResult::error(err.to_string()))
            }
        }
    }

    /// Suggest the closest registered verb for a typo, if any is close.
    pub fn suggest(&self, verb: &str) -> Option<String> {
        let verbs = self.registry.all_verbs();

        for v in &verbs {
            if v.starts_with(verb) {
                return Some(v.clone());
            }
        }

        let mut best: Option<(String, usize)> = None;
        for v in &verbs {
            let dist = levenshtein(verb, v);
            if dist <= 3 && best.as_ref().map_or(true, |(_, d)| dist < *d) {
                best = Some((v.clone(), dist));
            }
        }
        best.map(|(v, _)| v)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}

/// Edit distance over a single rolling row.
fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0usize; n + 1];

    for (i, a_ch) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_ch) in b_chars.iter().enumerate() {
            let cost = if a_ch == b_ch { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
