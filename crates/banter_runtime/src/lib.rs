//! Interactive console for Banter.
//!
//! Reads lines from a terminal (or a script file) and feeds them into a
//! [`banter_dispatch::Dispatcher`]. The console adds no dispatch semantics
//! of its own beyond a handful of intercepted words (`help`, `commands`,
//! `quit`, `exit`).
//!
//! # Modules
//!
//! - [`editor`] - Line editor abstraction and the rustyline implementation
//! - [`console`] - The read-dispatch loop
//! - [`config`] - Console configuration
//! - [`builtins`] - The standard command set

pub mod builtins;
pub mod config;
pub mod console;
pub mod editor;

// Re-export main types for convenience
pub use config::ConsoleConfig;
pub use console::Console;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
