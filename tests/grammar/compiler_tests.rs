//! Syntax compiler tests.
//!
//! Tests for compiling grammar strings into argument specs.

use banter_grammar::{ArgKind, ArgSpec, SyntaxCompiler};
use proptest::prelude::*;

#[test]
fn compile_mixed_grammar() {
    let specs = SyntaxCompiler::compile("<name> [times]");

    assert_eq!(
        specs,
        vec![ArgSpec::new("name", true), ArgSpec::new("times", false)]
    );
}

#[test]
fn compile_all_required() {
    let specs = SyntaxCompiler::compile("<num1> <num2>");

    assert_eq!(specs.len(), 2);
    assert!(specs.iter().all(|s| s.required));
}

#[test]
fn compile_all_optional() {
    let specs = SyntaxCompiler::compile("[first] [second] [third]");

    assert_eq!(specs.len(), 3);
    assert!(specs.iter().all(|s| !s.required));
}

#[test]
fn compile_empty_grammar() {
    assert!(SyntaxCompiler::compile("").is_empty());
}

#[test]
fn compile_whitespace_only_grammar() {
    assert!(SyntaxCompiler::compile("   \t ").is_empty());
}

#[test]
fn compile_names_are_inner_text() {
    let specs = SyntaxCompiler::compile("<target-id> [speed_factor]");

    assert_eq!(specs[0].name, "target-id");
    assert_eq!(specs[1].name, "speed_factor");
}

#[test]
fn compile_ignores_text_between_tokens() {
    let specs = SyntaxCompiler::compile("move <target> to [place] quickly");

    let names: Vec<_> = specs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["target", "place"]);
}

#[test]
fn compile_unterminated_token_yields_nothing() {
    assert!(SyntaxCompiler::compile("<name").is_empty());
    assert!(SyntaxCompiler::compile("[times").is_empty());
    assert!(SyntaxCompiler::compile("name>").is_empty());
}

#[test]
fn compile_tokens_after_malformed_fragment() {
    let specs = SyntaxCompiler::compile("[broken <name>");

    // The unclosed "[" swallows nothing; the well-formed span still compiles.
    assert_eq!(specs, vec![ArgSpec::new("name", true)]);
}

#[test]
fn compile_every_slot_is_text_kind() {
    let specs = SyntaxCompiler::compile("<a> [b] <c>");
    assert!(specs.iter().all(|s| s.kind == ArgKind::Text));
}

#[test]
fn compile_does_not_nest() {
    // The first ">" closes the span; the rest is stray text.
    let specs = SyntaxCompiler::compile("<outer <inner>>");

    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].name, "outer <inner");
}

proptest! {
    #[test]
    fn optional_only_grammars_never_require(
        names in prop::collection::vec("[a-z]{1,8}", 0..6),
    ) {
        let syntax = names
            .iter()
            .map(|n| format!("[{n}]"))
            .collect::<Vec<_>>()
            .join(" ");

        let specs = SyntaxCompiler::compile(&syntax);

        prop_assert_eq!(specs.len(), names.len());
        prop_assert!(specs.iter().all(|s| !s.required));
    }
}
