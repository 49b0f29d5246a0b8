//! Core error types for Banter.
//!
//! This crate provides:
//! - [`Error`] - The error type shared by every layer
//! - [`ErrorKind`] - Categorized error kinds for pattern matching
//! - [`Result`] - The workspace-wide result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;

pub use error::{Error, ErrorKind, Result};
