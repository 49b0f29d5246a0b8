//! Script feeding tests.
//!
//! Tests for batch-mode line feeding from files and from `feed`.

use std::fs;
use std::path::PathBuf;

use banter_dispatch::{BufferSink, CommandRegistry, CommandSpec};
use banter_foundation::{ErrorKind, Result};
use banter_runtime::{Console, ConsoleConfig, LineEditor, ReadResult};

/// An editor that never produces input; scripts don't read it.
struct InertEditor;

impl LineEditor for InertEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_commands(&mut self, _commands: Vec<String>) {}
}

fn test_console() -> Console<InertEditor, BufferSink> {
    let mut registry = CommandRegistry::new();
    registry.register(CommandSpec::new("greet", "Greets a user.", "<name>", |_| {
        Ok(())
    }));
    Console::with_editor_and_sink(InertEditor, registry, BufferSink::new())
        .with_config(ConsoleConfig::default().with_banner(false))
}

/// Writes a throwaway script file under the system temp directory.
fn script_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("banter-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn feed_dispatches_one_line() {
    let mut console = test_console();

    assert!(console.feed("greet Alice"));
    assert!(console.feed("nosuch"));

    assert_eq!(console.dispatcher().output().errors.len(), 1);
}

#[test]
fn run_script_feeds_each_line() {
    let path = script_file("basic.cmds", "greet Alice\ngreet Bob\nnosuch\n");
    let mut console = test_console();

    console.run_script(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let errors = &console.dispatcher().output().errors;
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("'nosuch'"));
}

#[test]
fn run_script_skips_blanks_and_comments() {
    let path = script_file(
        "comments.cmds",
        "# greeting warmup\n\ngreet Alice\n   \n# nosuch would fail here\n",
    );
    let mut console = test_console();

    console.run_script(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(console.dispatcher().output().errors.is_empty());
}

#[test]
fn run_script_stops_at_quit() {
    let path = script_file("quit.cmds", "greet Alice\nquit\nnosuch\n");
    let mut console = test_console();

    console.run_script(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(console.dispatcher().output().errors.is_empty());
}

#[test]
fn run_script_missing_file_is_io_error() {
    let mut console = test_console();
    let err = console
        .run_script(&PathBuf::from("/nonexistent/banter.cmds"))
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

#[test]
fn script_then_interactive_state_is_shared() {
    let path = script_file("state.cmds", "greet Alice\n");
    let mut console = test_console();

    console.run_script(&path).unwrap();
    fs::remove_file(&path).unwrap();

    // The same dispatcher keeps serving interactive lines afterwards.
    console.feed("help");
    let lines = &console.dispatcher().output().lines;
    assert_eq!(lines[0], "greet: Greets a user.");
}
