//! Syntax grammar compiler for chat commands.
//!
//! This crate turns a command's human-readable syntax string into the
//! ordered argument slots the dispatcher binds input against.
//!
//! # Architecture
//!
//! ```text
//! "<name> [times]"
//!        │
//!        ▼
//! ┌─────────────────┐
//! │ SYNTAX          │  → [ArgSpec { name, required: true },
//! │ COMPILER        │     ArgSpec { times, required: false }]
//! └─────────────────┘
//!
//! "greet Alice 3"
//!        │
//!        ▼
//! ┌─────────────────┐
//! │ LINE            │  → InputLine { command: "greet",
//! │ TOKENIZER       │                arguments: ["Alice", "3"] }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`syntax`] - Grammar string compilation into argument specs
//! - [`tokenizer`] - Raw input line splitting

pub mod syntax;
pub mod tokenizer;

// Re-export main types for convenience
pub use syntax::{ArgKind, ArgSpec, SyntaxCompiler};
pub use tokenizer::InputLine;
