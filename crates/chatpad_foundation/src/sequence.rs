//! The result of parsing one message.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::input::{InputStep, InputToken};

/// How a message was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseOutcome {
    /// The message is a well-formed input sequence.
    Valid,
    /// The message was an input attempt that broke a rule.
    Invalid,
    /// The message is ordinary chat.
    NotAnInput,
}

impl fmt::Display for ParseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
            Self::NotAnInput => "NotAnInput",
        };
        f.write_str(name)
    }
}

/// An ordered list of steps plus its classification.
///
/// Only valid sequences carry steps. The total duration is derived from the
/// steps on demand.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedInputSequence {
    steps: Vec<InputStep>,
    outcome: ParseOutcome,
    error: Option<InputError>,
}

impl ParsedInputSequence {
    /// Creates a valid sequence, or a non-input if `steps` is empty.
    #[must_use]
    pub fn valid(steps: Vec<InputStep>) -> Self {
        if steps.is_empty() {
            return Self::not_an_input();
        }
        Self {
            steps,
            outcome: ParseOutcome::Valid,
            error: None,
        }
    }

    /// Creates an invalid sequence explained by `error`.
    #[must_use]
    pub fn invalid(error: InputError) -> Self {
        Self {
            steps: Vec::new(),
            outcome: ParseOutcome::Invalid,
            error: Some(error),
        }
    }

    /// Creates a sequence for ordinary chat.
    #[must_use]
    pub fn not_an_input() -> Self {
        Self {
            steps: Vec::new(),
            outcome: ParseOutcome::NotAnInput,
            error: None,
        }
    }

    /// Returns the classification.
    #[must_use]
    pub fn outcome(&self) -> ParseOutcome {
        self.outcome
    }

    /// Returns true for well-formed input sequences.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcome == ParseOutcome::Valid
    }

    /// Returns the steps in temporal order.
    #[must_use]
    pub fn steps(&self) -> &[InputStep] {
        &self.steps
    }

    /// Consumes the sequence, returning its steps.
    #[must_use]
    pub fn into_steps(self) -> Vec<InputStep> {
        self.steps
    }

    /// Returns the rule violation of an invalid sequence.
    #[must_use]
    pub fn error(&self) -> Option<&InputError> {
        self.error.as_ref()
    }

    /// Returns the message to show the sender. Empty unless invalid.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.error.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Returns the sum of each step's longest duration, in milliseconds.
    #[must_use]
    pub fn total_duration(&self) -> u64 {
        total_duration(&self.steps)
    }

    /// Returns the number of inputs across all steps.
    #[must_use]
    pub fn input_count(&self) -> usize {
        self.steps.iter().map(InputStep::len).sum()
    }

    /// Returns an iterator over every input in order.
    pub fn tokens(&self) -> impl Iterator<Item = &InputToken> {
        self.steps.iter().flat_map(InputStep::iter)
    }
}

/// Sums the longest duration of each step, saturating on overflow.
#[must_use]
pub fn total_duration(steps: &[InputStep]) -> u64 {
    steps
        .iter()
        .fold(0u64, |total, step| total.saturating_add(step.duration()))
}

impl fmt::Display for ParsedInputSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | steps: {} | duration: {} ms",
            self.outcome,
            self.steps.len(),
            self.total_duration()
        )?;
        if let Some(error) = &self.error {
            write!(f, " | error: {error}")?;
        }
        Ok(())
    }
}
