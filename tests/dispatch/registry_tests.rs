//! Registry tests.
//!
//! Tests for name-keyed storage and registration-order enumeration.

use banter_dispatch::{CommandRegistry, CommandSpec};

fn spec(name: &str, description: &str, syntax: &str) -> CommandSpec {
    CommandSpec::new(name, description, syntax, |_| Ok(()))
}

#[test]
fn register_makes_command_retrievable() {
    let mut registry = CommandRegistry::new();
    registry.register(spec("greet", "Greets a user.", "<name> [times]"));

    let found = registry.get("greet").unwrap();
    assert_eq!(found.description(), "Greets a user.");
    assert_eq!(found.syntax(), "<name> [times]");
    assert_eq!(found.args().len(), 2);
}

#[test]
fn unknown_name_is_absent() {
    let registry = CommandRegistry::new();
    assert!(registry.get("greet").is_none());
    assert!(!registry.contains("greet"));
}

#[test]
fn second_registration_wins() {
    let mut registry = CommandRegistry::new();
    registry.register(spec("greet", "first", "<name>"));
    registry.register(spec("greet", "second", "<name> [times]"));

    assert_eq!(registry.len(), 1);
    let found = registry.get("greet").unwrap();
    assert_eq!(found.description(), "second");
    assert_eq!(found.args().len(), 2);
}

#[test]
fn enumeration_follows_registration_order() {
    let mut registry = CommandRegistry::new();
    for name in ["teleport", "greet", "add", "kick"] {
        registry.register(spec(name, "", ""));
    }

    let names: Vec<_> = registry.commands().map(CommandSpec::name).collect();
    assert_eq!(names, vec!["teleport", "greet", "add", "kick"]);
}

#[test]
fn compiled_args_always_match_syntax() {
    let mut registry = CommandRegistry::new();
    registry.register(spec("mix", "", "[lead] <core> [tail]"));

    let args = registry.get("mix").unwrap().args();
    let flags: Vec<_> = args.iter().map(|a| (a.name.as_str(), a.required)).collect();
    assert_eq!(
        flags,
        vec![("lead", false), ("core", true), ("tail", false)]
    );
}
