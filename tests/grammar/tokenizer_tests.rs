//! Line tokenizer tests.
//!
//! Tests for splitting raw input lines into command and argument words.

use banter_grammar::InputLine;

#[test]
fn parse_command_and_arguments() {
    let line = InputLine::parse("add 5 10").unwrap();

    assert_eq!(line.command, "add");
    assert_eq!(line.arguments, vec!["5", "10"]);
}

#[test]
fn parse_bare_command() {
    let line = InputLine::parse("help").unwrap();

    assert_eq!(line.command, "help");
    assert!(line.arguments.is_empty());
}

#[test]
fn parse_mixed_whitespace() {
    let line = InputLine::parse("\tgreet \t Alice   3 ").unwrap();

    assert_eq!(line.command, "greet");
    assert_eq!(line.arguments, vec!["Alice", "3"]);
}

#[test]
fn parse_no_words() {
    assert!(InputLine::parse("").is_none());
    assert!(InputLine::parse(" \t \n").is_none());
}

#[test]
fn parse_never_yields_empty_words() {
    let line = InputLine::parse("greet  Alice").unwrap();

    assert!(line.arguments.iter().all(|w| !w.is_empty()));
}
