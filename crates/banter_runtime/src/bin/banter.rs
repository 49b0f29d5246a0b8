//! Banter CLI entry point.

use banter_dispatch::{CommandRegistry, ConsoleSink};
use banter_runtime::{Console, ConsoleConfig, RustylineEditor, builtins};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    scripts: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    no_banner: bool,
    no_color: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--no-banner" => config.no_banner = true,
            "--no-color" => config.no_color = true,
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.scripts.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("banter {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut registry = CommandRegistry::new();
    for spec in builtins::standard_commands() {
        registry.register(spec);
    }

    let sink = if config.no_color {
        ConsoleSink::new().without_color()
    } else {
        ConsoleSink::new()
    };

    // If scripts were given, suppress the banner since context is established.
    let console_config = ConsoleConfig::default()
        .with_color(!config.no_color)
        .with_banner(!config.no_banner && config.scripts.is_empty());

    let editor = RustylineEditor::with_history_size(console_config.history_size)?;
    let mut console =
        Console::with_editor_and_sink(editor, registry, sink).with_config(console_config);

    for script in &config.scripts {
        console.run_script(script)?;
    }

    // If batch mode, exit now
    if config.batch_mode {
        return Ok(());
    }

    console.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mBanter\x1b[0m - Chat command dispatch console

\x1b[1mUSAGE:\x1b[0m
    banter [OPTIONS] [SCRIPTS...]

\x1b[1mARGUMENTS:\x1b[0m
    [SCRIPTS...]  Command scripts to feed before the interactive session

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    -b, --batch      Run scripts and exit (no interactive session)
    --no-banner      Suppress the welcome banner
    --no-color       Disable ANSI color output

\x1b[1mEXAMPLES:\x1b[0m
    banter                   Start the interactive console
    banter demo.cmds         Feed demo.cmds, then go interactive
    banter -b demo.cmds      Feed demo.cmds and exit

\x1b[1mCONSOLE WORDS:\x1b[0m
    help | commands      List registered commands
    quit | exit          End the session
    Ctrl+D               Exit
    Ctrl+C               Cancel current input

Set RUST_LOG=debug for dispatch tracing."
    );
}
