//! Preparse orchestration.
//!
//! Runs the text stages in their fixed order: macros, synonyms, repetition,
//! then whitespace removal and lowercasing. Macros run first because their
//! templates may contain synonyms and repetition groups.

use chatpad_foundation::{MacroSource, PreparseConfig, Result, SynonymTable};
use tracing::{debug, trace};

use crate::macro_expander::MacroExpander;
use crate::repetition::expand_repetitions;
use crate::synonym::substitute_synonyms;

/// Runs every preparse stage over a message.
pub struct Preparser<'a, S: MacroSource + ?Sized> {
    macros: &'a S,
    synonyms: &'a SynonymTable,
    config: &'a PreparseConfig,
}

impl<'a, S: MacroSource + ?Sized> Preparser<'a, S> {
    /// Creates a preparser over borrowed snapshots.
    pub fn new(macros: &'a S, synonyms: &'a SynonymTable, config: &'a PreparseConfig) -> Self {
        Self {
            macros,
            synonyms,
            config,
        }
    }

    /// Produces the whitespace-free, lowercase text the tokenizer reads.
    ///
    /// # Errors
    ///
    /// Returns an error if macro expansion aborts. The message should then
    /// be treated as ordinary chat.
    pub fn preparse(&self, message: &str) -> Result<String> {
        let expanded = if message.contains(self.config.sigil) {
            MacroExpander::new(self.macros, self.config)
                .expand(message)
                .inspect_err(|err| debug!(error = %err, message, "macro expansion aborted"))?
        } else {
            message.to_owned()
        };
        trace!(%expanded, "macros expanded");

        let substituted = substitute_synonyms(&expanded, self.synonyms);
        trace!(%substituted, "synonyms substituted");

        let repeated = expand_repetitions(&substituted, self.config.max_text_len);
        trace!(%repeated, "repetitions expanded");

        let compact: String = repeated
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        Ok(compact.to_lowercase())
    }
}

/// Preparses `message` with a one-off [`Preparser`].
///
/// # Errors
///
/// See [`Preparser::preparse`].
pub fn preparse<S: MacroSource + ?Sized>(
    message: &str,
    macros: &S,
    synonyms: &SynonymTable,
    config: &PreparseConfig,
) -> Result<String> {
    Preparser::new(macros, synonyms, config).preparse(message)
}
