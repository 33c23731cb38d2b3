//! Chatpad - Chat messages to virtual controller inputs
//!
//! This crate re-exports all layers of the Chatpad system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: chatpad_console    — Consoles, reverse parsing, validation, dispatch
//! Layer 2: chatpad_grammar    — Tokenizer, sequence validator, parse pipeline
//! Layer 1: chatpad_preparse   — Macros, synonyms, repetition, preparse
//! Layer 0: chatpad_foundation — Core types (InputToken, ParsedInputSequence, Error)
//! ```

pub use chatpad_console as console;
pub use chatpad_foundation as foundation;
pub use chatpad_grammar as grammar;
pub use chatpad_preparse as preparse;
