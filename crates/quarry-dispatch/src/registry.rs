//! Command registry: stores and looks up [`CommandDef`] implementations.
//!
//! Every verb a command declares (primary name plus aliases) maps to the
//! same `Arc<dyn CommandDef>`. Lookup is exact-match and case-sensitive.
//! Registering two commands that claim the same verb is a configuration
//! error caught at build time, never at lookup time.

use std::collections::HashMap;
use std::sync::Arc;

use quarry_types::DispatchError;

use crate::handler::CommandDef;

/// Registry of command definitions, keyed by verb.
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn CommandDef>>,
    /// Primary names in registration order, for deduplicated listings.
    primary_names: Vec<String>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            primary_names: Vec::new(),
        }
    }

    /// Register a command under its primary name and all aliases.
    ///
    /// Fails with [`DispatchError::DuplicateVerb`] if any verb is already
    /// taken; the registry is left unchanged in that case.
    pub fn register(&mut self, cmd: Box<dyn CommandDef>) -> Result<(), DispatchError> {
        let arc: Arc<dyn CommandDef> = Arc::from(cmd);

        let mut verbs = vec![arc.name()];
        verbs.extend_from_slice(arc.aliases());
        for verb in &verbs {
            if self.commands.contains_key(*verb) {
                return Err(DispatchError::DuplicateVerb((*verb).to_string()));
            }
        }

        for verb in verbs {
            self.commands.insert(verb.to_string(), Arc::clone(&arc));
        }
        self.primary_names.push(arc.name().to_string());
        Ok(())
    }

    /// Look up a command by verb (exact match, case-sensitive).
    pub fn lookup(&self, verb: &str) -> Option<Arc<dyn CommandDef>> {
        self.commands.get(verb).cloned()
    }

    /// All commands, one entry each, sorted by primary name.
    pub fn list(&self) -> Vec<Arc<dyn CommandDef>> {
        let mut result: Vec<Arc<dyn CommandDef>> = self
            .primary_names
            .iter()
            .filter_map(|name| self.commands.get(name))
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name().cmp(b.name()));
        result
    }

    /// Formatted help for one verb, or `None` if it is not registered.
    pub fn lookup_help(&self, verb: &str) -> Option<String> {
        let cmd = self.lookup(verb)?;
        let aliases = cmd.aliases();
        let alias_str = if aliases.is_empty() {
            String::new()
        } else {
            format!(" (aliases: {})", aliases.join(", "))
        };
        Some(format!(
            "{}{}\n  usage: {}",
            cmd.name(),
            alias_str,
            cmd.usage(),
        ))
    }

    /// Every registered verb (primary names and aliases), for suggestion
    /// matching.
    pub fn all_verbs(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
