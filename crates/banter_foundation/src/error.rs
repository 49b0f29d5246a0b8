//! Error types for the Banter system.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error as ThisError;

/// The result type used throughout Banter.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Banter operations.
///
/// Displays as its [`ErrorKind`]; the originating command, when known, is
/// carried separately so reporting layers can decide whether to show it.
#[derive(Debug, ThisError)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// The command being dispatched when the error occurred, if known.
    pub command: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            command: None,
        }
    }

    /// Attaches the originating command name to this error.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(name.into()))
    }

    /// Creates a missing required argument error.
    #[must_use]
    pub fn missing_argument(argument: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingArgument {
            argument: argument.into(),
        })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        })
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    /// Input named a command that is not registered.
    #[error("command '{0}' not found")]
    UnknownCommand(String),

    /// A required positional argument had no corresponding input token.
    #[error("missing required argument: <{argument}>")]
    MissingArgument {
        /// The name of the missing argument.
        argument: String,
    },

    /// An argument value failed handler-side validation or coercion.
    #[error("invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// The name of the offending argument.
        argument: String,
        /// Description of what was wrong with the value.
        message: String,
    },

    /// An I/O operation failed (script files, terminal).
    #[error("io error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
