//! Core types and snapshots for chatpad.
//!
//! This crate provides:
//! - [`InputToken`] and [`InputStep`] - One parsed input and a set of simultaneous inputs
//! - [`ParsedInputSequence`] - The result of parsing one message
//! - [`InputNames`] - The valid input names of the active console
//! - [`MacroTable`] and [`SynonymTable`] - Immutable snapshots of user definitions
//! - [`GrammarConfig`] and [`PreparseConfig`] - Parser configuration
//! - [`Error`] and [`InputError`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod input;
pub mod macros;
pub mod names;
pub mod sequence;
pub mod synonym;

pub use config::{GrammarConfig, PreparseConfig};
pub use error::{Error, ErrorContext, ErrorKind, InputError, Result};
pub use input::{InputStep, InputToken, Modifier};
pub use macros::{MACRO_SIGIL, Macro, MacroSource, MacroTable};
pub use names::InputNames;
pub use sequence::{ParseOutcome, ParsedInputSequence};
pub use synonym::{Synonym, SynonymTable};
