//! The interactive console implementation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use banter_dispatch::{CommandRegistry, CommandSpec, ConsoleSink, Dispatcher, OutputSink};
use banter_foundation::{Error, Result};
use tracing::debug;

use crate::config::ConsoleConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Words the console handles itself, before dispatch.
const SPECIAL_WORDS: [&str; 4] = ["help", "commands", "quit", "exit"];

/// The interactive console.
///
/// Reads lines and feeds them to the dispatcher. A handful of words are
/// intercepted before dispatch: `help` / `commands` print the command
/// listing, `quit` / `exit` end the session. Intercepted words shadow
/// registered commands of the same name.
pub struct Console<E: LineEditor = RustylineEditor, S: OutputSink = ConsoleSink> {
    /// The line editor for input.
    editor: E,

    /// The dispatcher owning the command registry and output channels.
    dispatcher: Dispatcher<S>,

    /// Presentation settings.
    config: ConsoleConfig,
}

impl Console<RustylineEditor, ConsoleSink> {
    /// Creates a console with the default rustyline editor and console sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(registry: CommandRegistry) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor_and_sink(editor, registry, ConsoleSink::new()))
    }
}

impl<E: LineEditor, S: OutputSink> Console<E, S> {
    /// Creates a console over the given editor, registry, and sink.
    pub fn with_editor_and_sink(editor: E, registry: CommandRegistry, sink: S) -> Self {
        Self {
            editor,
            dispatcher: Dispatcher::new(registry, sink),
            config: ConsoleConfig::default(),
        }
    }

    /// Sets the console configuration.
    #[must_use]
    pub fn with_config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher<S> {
        &self.dispatcher
    }

    /// Returns the dispatcher mutably.
    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<S> {
        &mut self.dispatcher
    }

    /// Registers a command.
    pub fn register(&mut self, spec: CommandSpec) {
        self.dispatcher.register(spec);
    }

    /// Runs the read-dispatch loop until `quit`, `exit`, or EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.config.banner {
            self.print_banner();
        }
        self.sync_completions();

        debug!(
            commands = self.dispatcher.registry().len(),
            "console started"
        );

        loop {
            match self.editor.read_line(&self.config.prompt)? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(trimmed);
                    if !self.feed(trimmed) {
                        break;
                    }
                }
                ReadResult::Interrupted => {
                    println!();
                }
                ReadResult::Eof => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Feeds one line through the console.
    ///
    /// Handles the intercepted words, dispatching everything else. Returns
    /// `false` when the line asked the session to end.
    pub fn feed(&mut self, line: &str) -> bool {
        match line.trim() {
            "quit" | "exit" => false,
            "help" | "commands" => {
                self.dispatcher.list();
                true
            }
            other => {
                self.dispatcher.dispatch(other);
                true
            }
        }
    }

    /// Feeds a script file line by line, skipping blanks and `#` comments.
    ///
    /// Stops early when a line asks the session to end.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn run_script(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}: {e}", path.display())))?;

        for line in source.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if !self.feed(trimmed) {
                break;
            }
        }

        Ok(())
    }

    /// Pushes registered command names (plus intercepted words) into the
    /// editor's completer.
    fn sync_completions(&mut self) {
        let mut commands: Vec<String> = self
            .dispatcher
            .registry()
            .commands()
            .map(|spec| spec.name().to_string())
            .collect();
        commands.extend(SPECIAL_WORDS.map(String::from));
        self.editor.set_commands(commands);
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        if self.config.color {
            println!("\x1b[1;36m");
        } else {
            println!();
        }
        println!("  ____              _            ");
        println!(" | __ )  __ _ _ __ | |_ ___ _ __ ");
        println!(" |  _ \\ / _` | '_ \\| __/ _ \\ '__|");
        println!(" | |_) | (_| | | | | ||  __/ |   ");
        println!(" |____/ \\__,_|_| |_|\\__\\___|_|   ");
        if self.config.color {
            println!("\x1b[0m");
        } else {
            println!();
        }
        println!("Welcome to Banter v{}", env!("CARGO_PKG_VERSION"));
        println!("Type 'help' to list commands. Use Ctrl+D to exit.\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}
