//! Built-in commands for the interactive console.
//!
//! The standard demonstration set shipped with the console: a greeter and a
//! tiny calculator. Handlers print to stdout; failures surface on the
//! dispatcher's error channel.

use banter_dispatch::CommandSpec;

/// The standard command set, in listing order.
#[must_use]
pub fn standard_commands() -> Vec<CommandSpec> {
    vec![greet(), add()]
}

/// `greet <name> [times]`: prints a greeting, optionally repeated.
///
/// An unparsable repeat count falls back to a single greeting rather than
/// failing.
#[must_use]
pub fn greet() -> CommandSpec {
    CommandSpec::new("greet", "Greets a user.", "<name> [times]", |args| {
        let name: String = args.required("name")?;
        let times = args
            .get("times")
            .and_then(|word| word.parse::<u32>().ok())
            .unwrap_or(1);

        for _ in 0..times {
            println!("Hello, {name}!");
        }
        Ok(())
    })
}

/// `add <num1> <num2>`: prints the sum of two numbers.
///
/// Non-numeric input is an invalid-argument failure.
#[must_use]
pub fn add() -> CommandSpec {
    CommandSpec::new("add", "Adds two numbers.", "<num1> <num2>", |args| {
        let num1: f64 = args.required("num1")?;
        let num2: f64 = args.required("num2")?;

        println!("Result: {}", num1 + num2);
        Ok(())
    })
}
