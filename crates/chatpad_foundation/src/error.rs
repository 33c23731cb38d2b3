//! Error types for chatpad.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience alias for results carrying a chatpad [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for chatpad operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid macro definition error.
    #[must_use]
    pub fn invalid_macro(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidMacro {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Creates an invalid synonym definition error.
    #[must_use]
    pub fn invalid_synonym(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSynonym {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig(message.into()))
    }

    /// Creates an unbalanced parentheses error for a macro call.
    #[must_use]
    pub fn unbalanced_parentheses(position: usize) -> Self {
        Self::new(ErrorKind::UnbalancedParentheses { position })
    }

    /// Creates an error for a macro that disappeared from its source mid-expansion.
    #[must_use]
    pub fn macro_vanished(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::MacroVanished(name.into()))
    }

    /// Creates an error for expanded text that grew past its limit.
    #[must_use]
    pub fn text_too_long(limit: usize) -> Self {
        Self::new(ErrorKind::TextTooLong { limit })
    }

    /// Returns the input rule violation, if this error wraps one.
    #[must_use]
    pub fn as_input_error(&self) -> Option<&InputError> {
        match &self.kind {
            ErrorKind::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InputError> for Error {
    fn from(err: InputError) -> Self {
        Self::new(ErrorKind::Input(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A macro definition is malformed.
    #[error("invalid macro \"{name}\": {reason}")]
    InvalidMacro {
        /// The offending macro name.
        name: String,
        /// Why the definition was rejected.
        reason: String,
    },

    /// A synonym definition is malformed.
    #[error("invalid synonym \"{name}\": {reason}")]
    InvalidSynonym {
        /// The offending synonym name.
        name: String,
        /// Why the definition was rejected.
        reason: String,
    },

    /// Parser configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A dynamic macro call never closed its argument list.
    #[error("unbalanced parentheses in macro call at byte {position}")]
    UnbalancedParentheses {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },

    /// A macro was listed by its source but could no longer be read.
    #[error("macro \"{0}\" was removed while expanding")]
    MacroVanished(String),

    /// Expanded text grew past the configured limit.
    #[error("expanded text exceeds {limit} bytes")]
    TextTooLong {
        /// The configured limit in bytes.
        limit: usize,
    },

    /// A message violated an input grammar rule.
    #[error(transparent)]
    Input(InputError),
}

/// A grammar rule violated by a message that was recognizably an input attempt.
///
/// The `Display` text is meant to be shown directly to the sender.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputError {
    /// The port number could not be read.
    #[error("controller port \"{0}\" is invalid")]
    InvalidPort(String),

    /// The port number is above the configured maximum.
    #[error("controller port {port} is greater than the max port {max}")]
    PortOutOfRange {
        /// The requested port, 1-based as written.
        port: u64,
        /// The maximum port, 1-based.
        max: u64,
    },

    /// A port selector with no input after it.
    #[error("controller port \"{0}\" is not followed by a valid input")]
    DanglingPort(String),

    /// A hold marker with no input after it.
    #[error("'_' is not followed by a valid input")]
    DanglingHold,

    /// A release marker with no input after it.
    #[error("'-' is not followed by a valid input")]
    DanglingRelease,

    /// Both a hold and a release marker on one input.
    #[error("an input can't be both held and released")]
    HoldAndRelease,

    /// The percentage is not a plain decimal number.
    #[error("percentage \"{0}%\" is invalid")]
    InvalidPercent(String),

    /// The percentage is above 100.
    #[error("percentage {0}% is not between 0 and 100")]
    PercentOutOfRange(String),

    /// The duration could not be represented.
    #[error("duration \"{0}\" is invalid")]
    InvalidDuration(String),

    /// A `+` with nothing to press alongside.
    #[error("'+' at the end of the input sequence has no input to press with")]
    TrailingSimultaneous,

    /// The whole sequence runs longer than allowed.
    #[error("input sequence lasts {total} ms, exceeding the max duration of {max} ms")]
    MaxDurationExceeded {
        /// Total duration of the sequence in milliseconds.
        total: u64,
        /// Configured maximum in milliseconds.
        max: u64,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The text being processed.
    pub source: Option<String>,
    /// Byte offset in the source.
    pub position: Option<usize>,
    /// Chain of macros being expanded, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source text.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the byte offset.
    #[must_use]
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in \"{source}\"")?;
            if let Some(position) = self.position {
                write!(f, " at byte {position}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  while expanding {frame}")?;
            }
        }
        Ok(())
    }
}
