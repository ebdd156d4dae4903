//! Command registry
//!
//! Verbs are data records registered into a dispatch map, not a class
//! hierarchy: each [`CommandSpec`] carries its name, aliases, required
//! permission node and usage line, and lookup resolves names and aliases
//! case-insensitively. The front end owns argument tokenization; the
//! engine is the handler behind the `visit` record.

use std::collections::HashMap;

use crate::parse::VISIT_USAGE;

/// One registered command verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Primary name
    pub name: &'static str,
    /// Alternate names; semantics are unaffected
    pub aliases: &'static [&'static str],
    /// Node required to use the command at all
    pub permission: &'static str,
    /// Usage line shown on shape errors
    pub usage: &'static str,
}

/// The visitation command record
pub const VISIT_COMMAND: CommandSpec = CommandSpec {
    name: "visit",
    aliases: &["v", "tp", "teleport", "goto", "warp"],
    permission: "visit",
    usage: VISIT_USAGE,
};

/// Dispatch map from names and aliases to command records
#[derive(Debug, Default)]
pub struct CommandRegistry {
    by_name: HashMap<String, CommandSpec>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in visitation command
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(VISIT_COMMAND);
        registry
    }

    /// Register a command under its name and every alias
    ///
    /// A later registration with a colliding name or alias replaces the
    /// earlier entry.
    pub fn register(&mut self, spec: CommandSpec) {
        self.by_name
            .insert(spec.name.to_ascii_lowercase(), spec.clone());
        for alias in spec.aliases {
            self.by_name.insert(alias.to_ascii_lowercase(), spec.clone());
        }
    }

    /// Look up a command by name or alias, case-insensitive
    pub fn find(&self, name: &str) -> Option<&CommandSpec> {
        self.by_name.get(&name.to_ascii_lowercase())
    }
}
