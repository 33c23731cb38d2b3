//! Sequence validation.
//!
//! Groups pending tokens into simultaneous steps, applies defaults, and
//! enforces the maximum total duration.

use chatpad_foundation::sequence::total_duration;
use chatpad_foundation::{GrammarConfig, InputError, InputStep, ParsedInputSequence};
use tracing::debug;

use crate::tokenizer::{PendingToken, Tokenized};

/// Turns tokenizer output into a classified sequence.
pub struct SequenceValidator<'a> {
    config: &'a GrammarConfig,
}

impl<'a> SequenceValidator<'a> {
    /// Creates a validator using `config` for defaults and limits.
    #[must_use]
    pub fn new(config: &'a GrammarConfig) -> Self {
        Self { config }
    }

    /// Classifies tokenizer output.
    #[must_use]
    pub fn validate(&self, tokenized: Tokenized<'_>) -> ParsedInputSequence {
        let sequence = match tokenized {
            Tokenized::NotAnInput => ParsedInputSequence::not_an_input(),
            Tokenized::Invalid(err) => ParsedInputSequence::invalid(err),
            Tokenized::Tokens(tokens) => self.build(&tokens),
        };
        debug!(
            outcome = %sequence.outcome(),
            steps = sequence.steps().len(),
            total_duration = sequence.total_duration(),
            "classified input sequence"
        );
        sequence
    }

    fn build(&self, tokens: &[PendingToken<'_>]) -> ParsedInputSequence {
        let mut steps = Vec::new();
        let mut current: Vec<_> = Vec::new();
        for token in tokens {
            current.push(token.finish(self.config));
            if !token.simultaneous {
                steps.extend(InputStep::from_tokens(std::mem::take(&mut current)));
            }
        }
        if !current.is_empty() {
            return ParsedInputSequence::invalid(InputError::TrailingSimultaneous);
        }
        if steps.is_empty() {
            return ParsedInputSequence::not_an_input();
        }

        let total = total_duration(&steps);
        if self.config.check_max_duration && total > self.config.max_duration {
            return ParsedInputSequence::invalid(InputError::MaxDurationExceeded {
                total,
                max: self.config.max_duration,
            });
        }
        ParsedInputSequence::valid(steps)
    }
}
