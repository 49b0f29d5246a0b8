//! Command definitions.
//!
//! An immutable record pairing a command's grammar with its handler.

use std::fmt;

use banter_foundation::Result;
use banter_grammar::{ArgSpec, SyntaxCompiler};

use crate::args::BoundArgs;

/// The handler invoked when an input line binds against a command.
///
/// Handlers run synchronously on the dispatching thread and return `Err` to
/// report a failure on the dispatcher's error channel.
pub type CommandHandler = Box<dyn FnMut(&BoundArgs) -> Result<()>>;

/// An immutable command definition.
///
/// The syntax string is compiled into argument slots at construction, so a
/// spec's slots are consistent with its grammar for its whole life.
pub struct CommandSpec {
    name: String,
    description: String,
    syntax: String,
    args: Vec<ArgSpec>,
    handler: CommandHandler,
}

impl CommandSpec {
    /// Creates a command definition, compiling its syntax string.
    ///
    /// Names are case-sensitive lookup keys. A name containing whitespace
    /// can never be matched, since lookup splits input on whitespace.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        syntax: impl Into<String>,
        handler: impl FnMut(&BoundArgs) -> Result<()> + 'static,
    ) -> Self {
        let syntax = syntax.into();
        let args = SyntaxCompiler::compile(&syntax);

        Self {
            name: name.into(),
            description: description.into(),
            syntax,
            args,
            handler: Box::new(handler),
        }
    }

    /// The lookup key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display-only description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The raw grammar string.
    #[must_use]
    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    /// The argument slots compiled from the grammar, in slot order.
    #[must_use]
    pub fn args(&self) -> &[ArgSpec] {
        &self.args
    }

    /// Invokes the handler with bound arguments.
    pub(crate) fn invoke(&mut self, args: &BoundArgs) -> Result<()> {
        (self.handler)(args)
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("syntax", &self.syntax)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}
