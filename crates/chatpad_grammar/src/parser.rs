//! The full message-to-sequence pipeline.

use chatpad_foundation::{
    GrammarConfig, InputNames, MacroSource, ParsedInputSequence, PreparseConfig, Result,
    SynonymTable,
};
use chatpad_preparse::Preparser;
use tracing::debug;

use crate::tokenizer::Tokenizer;
use crate::validator::SequenceValidator;

/// Parses chat messages for one console.
///
/// Holds the console's input names and configuration; macro and synonym
/// snapshots are passed per call so each parse sees a fixed view of them.
#[derive(Clone, Debug, Default)]
pub struct InputParser {
    names: InputNames,
    grammar: GrammarConfig,
    preparse: PreparseConfig,
}

impl InputParser {
    /// Creates a parser.
    ///
    /// # Errors
    ///
    /// Returns an error if `grammar` is inconsistent.
    pub fn new(names: InputNames, grammar: GrammarConfig) -> Result<Self> {
        grammar.validate()?;
        Ok(Self {
            names,
            grammar,
            preparse: PreparseConfig::default(),
        })
    }

    /// Replaces the preparse settings.
    #[must_use]
    pub fn with_preparse_config(mut self, preparse: PreparseConfig) -> Self {
        self.preparse = preparse;
        self
    }

    /// Returns the valid input names.
    #[must_use]
    pub fn names(&self) -> &InputNames {
        &self.names
    }

    /// Returns the grammar settings.
    #[must_use]
    pub fn grammar(&self) -> &GrammarConfig {
        &self.grammar
    }

    /// Returns the preparse settings.
    #[must_use]
    pub fn preparse_config(&self) -> &PreparseConfig {
        &self.preparse
    }

    /// Parses a raw chat message.
    ///
    /// Preparse failures mean the message is ordinary chat.
    #[must_use]
    pub fn parse<S: MacroSource + ?Sized>(
        &self,
        message: &str,
        macros: &S,
        synonyms: &SynonymTable,
    ) -> ParsedInputSequence {
        run(message, macros, synonyms, &self.names, &self.grammar, &self.preparse)
    }

    /// Parses text that has already been preparsed.
    #[must_use]
    pub fn parse_preparsed(&self, text: &str) -> ParsedInputSequence {
        classify(text, &self.names, &self.grammar)
    }
}

/// Parses `message` without keeping a parser around.
///
/// # Errors
///
/// Returns an error only if `grammar` is inconsistent; parse outcomes are
/// reported in the returned sequence.
pub fn parse_inputs<S: MacroSource + ?Sized>(
    message: &str,
    macros: &S,
    synonyms: &SynonymTable,
    names: &InputNames,
    grammar: &GrammarConfig,
) -> Result<ParsedInputSequence> {
    grammar.validate()?;
    Ok(run(
        message,
        macros,
        synonyms,
        names,
        grammar,
        &PreparseConfig::default(),
    ))
}

fn run<S: MacroSource + ?Sized>(
    message: &str,
    macros: &S,
    synonyms: &SynonymTable,
    names: &InputNames,
    grammar: &GrammarConfig,
    preparse: &PreparseConfig,
) -> ParsedInputSequence {
    match Preparser::new(macros, synonyms, preparse).preparse(message) {
        Ok(text) => classify(&text, names, grammar),
        Err(err) => {
            debug!(error = %err, "preparse aborted, treating message as chat");
            ParsedInputSequence::not_an_input()
        }
    }
}

fn classify(text: &str, names: &InputNames, grammar: &GrammarConfig) -> ParsedInputSequence {
    let tokenized = Tokenizer::new(names, grammar).tokenize(text);
    SequenceValidator::new(grammar).validate(tokenized)
}
