//! The dispatch pipeline.
//!
//! Resolves input lines against the registry, binds arguments positionally,
//! and invokes handlers.

use banter_foundation::{Error, Result};
use banter_grammar::{ArgSpec, InputLine};
use tracing::{debug, trace};

use crate::args::BoundArgs;
use crate::command::CommandSpec;
use crate::output::OutputSink;
use crate::registry::CommandRegistry;

/// Dispatches input lines to registered command handlers.
///
/// Owns the registry and the output sink. Every dispatch-path failure,
/// including a handler's own `Err`, is rendered on the sink's error channel;
/// nothing propagates to the caller. All access goes through `&mut self`,
/// which serializes registration against dispatch.
pub struct Dispatcher<S: OutputSink> {
    registry: CommandRegistry,
    output: S,
}

impl<S: OutputSink> Dispatcher<S> {
    /// Creates a dispatcher over a registry and an output sink.
    #[must_use]
    pub fn new(registry: CommandRegistry, output: S) -> Self {
        Self { registry, output }
    }

    /// Returns the registry.
    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Returns the registry mutably.
    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    /// Returns the output sink.
    #[must_use]
    pub fn output(&self) -> &S {
        &self.output
    }

    /// Returns the output sink mutably.
    pub fn output_mut(&mut self) -> &mut S {
        &mut self.output
    }

    /// Registers a command.
    pub fn register(&mut self, spec: CommandSpec) {
        debug!(command = spec.name(), "registered command");
        self.registry.register(spec);
    }

    /// Dispatches one raw input line.
    ///
    /// A blank line dispatches nothing. An unknown command word or a missing
    /// required argument is reported on the error channel without invoking
    /// the handler. Words beyond the command's slots are dropped.
    pub fn dispatch(&mut self, input: &str) {
        let Some(line) = InputLine::parse(input) else {
            return;
        };

        let Some(spec) = self.registry.get_mut(line.command) else {
            debug!(command = line.command, "unknown command");
            self.output
                .error(&Error::unknown_command(line.command).to_string());
            return;
        };

        let bound = match bind(spec.args(), &line.arguments) {
            Ok(bound) => bound,
            Err(e) => {
                self.output
                    .error(&e.with_command(line.command).to_string());
                return;
            }
        };

        trace!(
            command = line.command,
            bound = bound.len(),
            dropped = line.arguments.len().saturating_sub(spec.args().len()),
            "invoking handler"
        );

        if let Err(e) = spec.invoke(&bound) {
            self.output.error(&e.to_string());
        }
    }

    /// Writes one record per registered command to the normal output
    /// channel, in registration order.
    pub fn list(&mut self) {
        for spec in self.registry.commands() {
            self.output
                .line(&format!("{}: {}", spec.name(), spec.description()));
            self.output.line(&format!("  syntax: {}", spec.syntax()));
        }
    }
}

/// Binds argument words to slots by position.
///
/// The i-th word binds to the i-th slot. A missing required slot is an
/// error; a missing optional slot is simply absent from the result; extra
/// words are ignored.
fn bind(specs: &[ArgSpec], words: &[&str]) -> Result<BoundArgs> {
    let mut bound = BoundArgs::new();

    for (i, spec) in specs.iter().enumerate() {
        match words.get(i) {
            Some(word) => bound.bind(&spec.name, *word),
            None if spec.required => return Err(Error::missing_argument(&spec.name)),
            None => {}
        }
    }

    Ok(bound)
}
