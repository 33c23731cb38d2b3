//! Text preprocessing for chatpad.
//!
//! This crate rewrites a raw chat message before the grammar sees it:
//! - [`MacroExpander`] - Recursive macro expansion with arguments
//! - [`substitute_synonyms`] - Literal alias replacement
//! - [`expand_repetitions`] - `[segment]*N` unrolling
//! - [`Preparser`] - Runs the stages in order and normalizes the result

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod macro_expander;
pub mod preparser;
pub mod repetition;
pub mod synonym;


pub use macro_expander::{MacroExpander, expand_macros};
pub use preparser::{Preparser, preparse};
pub use repetition::expand_repetitions;
pub use synonym::substitute_synonyms;
