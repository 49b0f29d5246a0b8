//! Command registry.
//!
//! Name-keyed storage for command definitions.

use std::collections::HashMap;

use crate::command::CommandSpec;

/// Registry of all defined commands.
///
/// Lookup is by exact, case-sensitive name; enumeration follows registration
/// order. The registry is a plain owned value: construct one per dispatcher
/// (or per test) and hand it over.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command.
    ///
    /// A spec whose name is already registered silently replaces the
    /// existing definition in place, keeping its enumeration slot; a new
    /// name appends.
    pub fn register(&mut self, spec: CommandSpec) {
        match self.index.get(spec.name()) {
            Some(&slot) => self.commands[slot] = spec,
            None => {
                self.index
                    .insert(spec.name().to_string(), self.commands.len());
                self.commands.push(spec);
            }
        }
    }

    /// Looks up a command by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.index.get(name).map(|&slot| &self.commands[slot])
    }

    /// Looks up a command by name, mutably (handlers are `FnMut`).
    pub fn get_mut(&mut self, name: &str) -> Option<&mut CommandSpec> {
        self.index
            .get(name)
            .map(|&slot| &mut self.commands[slot])
    }

    /// Checks whether a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns all registered commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    /// Returns the number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Checks whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
