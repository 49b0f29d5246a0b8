//! Syntax grammar compilation.
//!
//! Compiles syntax strings like `"<name> [times]"` into ordered argument
//! specs.

/// The declared kind of an argument value.
///
/// The grammar carries no type annotations, so every slot compiles to
/// [`ArgKind::Text`]; coercion beyond string capture is the handler's
/// business.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArgKind {
    /// A raw text value.
    #[default]
    Text,
}

/// A positional argument slot compiled from a syntax string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgSpec {
    /// Slot name, the inner text of the grammar token.
    pub name: String,
    /// Value kind.
    pub kind: ArgKind,
    /// Whether input must supply this slot.
    pub required: bool,
}

impl ArgSpec {
    /// Creates a new text-kind argument spec.
    #[must_use]
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            kind: ArgKind::Text,
            required,
        }
    }
}

/// Compiles syntax strings into argument specs.
pub struct SyntaxCompiler;

impl SyntaxCompiler {
    /// Compiles a syntax string into its ordered argument specs.
    ///
    /// Scans left to right for well-formed spans: `<` followed by one or
    /// more non-`>` characters followed by `>` compiles to a required slot;
    /// `[` / `]` likewise to an optional slot. Anything else, including
    /// unbalanced brackets, empty `<>` or `[]`, and text between tokens, is
    /// skipped without error; malformed grammar degrades to fewer slots.
    #[must_use]
    pub fn compile(syntax: &str) -> Vec<ArgSpec> {
        let mut specs = Vec::new();
        let bytes = syntax.as_bytes();
        let mut i = 0;

        while i < bytes.len() {
            let (close, required) = match bytes[i] {
                b'<' => ('>', true),
                b'[' => (']', false),
                _ => {
                    i += 1;
                    continue;
                }
            };

            match syntax[i + 1..].find(close) {
                // Empty or unterminated token: skip the opening delimiter.
                Some(0) | None => i += 1,
                Some(len) => {
                    specs.push(ArgSpec::new(&syntax[i + 1..i + 1 + len], required));
                    i += len + 2;
                }
            }
        }

        specs
    }
}
