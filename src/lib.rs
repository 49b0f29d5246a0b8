//! Banter - Chat command dispatch engine
//!
//! This crate re-exports all layers of the Banter system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: banter_runtime    — Console, line editor, built-in commands
//! Layer 2: banter_dispatch   — Command registry, binding, dispatch
//! Layer 1: banter_grammar    — Syntax grammar compiler, line tokenization
//! Layer 0: banter_foundation — Core error types
//! ```

pub use banter_dispatch as dispatch;
pub use banter_foundation as foundation;
pub use banter_grammar as grammar;
pub use banter_runtime as runtime;
