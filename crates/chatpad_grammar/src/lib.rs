//! Input grammar for chatpad.
//!
//! This crate turns preprocessed chat text into a [`ParsedInputSequence`]:
//! - [`matchers`] - One matcher per piece of syntax (port, modifier, name, percent, duration, `+`)
//! - [`Tokenizer`] - Drives the matchers with a single cursor
//! - [`SequenceValidator`] - Groups tokens into steps and enforces limits
//! - [`InputParser`] - The whole pipeline, preparse included
//!
//! # Example
//!
//! ```
//! use chatpad_foundation::{GrammarConfig, MacroTable, SynonymTable};
//! use chatpad_grammar::InputParser;
//!
//! let names = ["a", "b", "start"].into_iter().collect();
//! let parser = InputParser::new(names, GrammarConfig::default()).unwrap();
//! let seq = parser.parse("a+b500ms start", &MacroTable::new(), &SynonymTable::new());
//! assert!(seq.is_valid());
//! assert_eq!(seq.total_duration(), 700);
//! ```
//!
//! [`ParsedInputSequence`]: chatpad_foundation::ParsedInputSequence

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cursor;
pub mod matchers;
pub mod parser;
pub mod tokenizer;
pub mod validator;


pub use cursor::Cursor;
pub use parser::{InputParser, parse_inputs};
pub use tokenizer::{PendingToken, Tokenized, Tokenizer};
pub use validator::SequenceValidator;
