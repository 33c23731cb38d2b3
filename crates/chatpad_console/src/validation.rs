//! Post-parse checks on valid sequences.
//!
//! A sequence that parses can still be refused for the sender: restricted
//! inputs, inputs above their level, ports without a controller, and combos
//! the console forbids. Checks run in that order and stop at the first
//! failure.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use chatpad_foundation::ParsedInputSequence;
use thiserror::Error;
use tracing::debug;

use crate::console::GameConsole;

/// Why a valid sequence was refused.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The sender may not use this input at all.
    #[error("no permission to use input \"{0}\"")]
    RestrictedInput(String),

    /// The sender's level is below the input's level.
    #[error("no permission to use input \"{input}\", which requires at least level {required}")]
    InsufficientLevel {
        /// Input name.
        input: String,
        /// Level the input requires.
        required: i64,
    },

    /// No controller is plugged in at this port.
    #[error("invalid controller port {port}; {controller_count} controllers available")]
    InvalidPort {
        /// 1-based port as written.
        port: u64,
        /// Number of controllers.
        controller_count: u32,
    },

    /// Every input of a forbidden combo would be down at once.
    #[error("inputs ({}) are not allowed to be pressed at the same time", quoted(.0))]
    InvalidCombo(Vec<String>),
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// InputValidator
// =============================================================================

/// Checks valid sequences against one sender's permissions.
///
/// Sequences that are not valid carry no inputs and always pass.
#[derive(Clone, Debug)]
pub struct InputValidator<'a> {
    console: &'a GameConsole,
    controller_count: u32,
    restricted: HashSet<String>,
    input_levels: HashMap<String, i64>,
    user_level: i64,
    held: BTreeMap<u32, BTreeSet<String>>,
}

impl<'a> InputValidator<'a> {
    /// Creates a validator for `console` with `controller_count` controllers.
    #[must_use]
    pub fn new(console: &'a GameConsole, controller_count: u32) -> Self {
        Self {
            console,
            controller_count,
            restricted: HashSet::new(),
            input_levels: HashMap::new(),
            user_level: 0,
            held: BTreeMap::new(),
        }
    }

    /// Forbids `names` for this sender.
    #[must_use]
    pub fn with_restricted<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.restricted
            .extend(names.into_iter().map(|name| name.as_ref().to_lowercase()));
        self
    }

    /// Sets the level each named input requires.
    #[must_use]
    pub fn with_input_levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        self.input_levels.extend(
            levels
                .into_iter()
                .map(|(name, level)| (name.as_ref().to_lowercase(), level)),
        );
        self
    }

    /// Sets the sender's level.
    #[must_use]
    pub fn with_user_level(mut self, level: i64) -> Self {
        self.user_level = level;
        self
    }

    /// Marks `names` as already down on the controller at `port`.
    #[must_use]
    pub fn with_held<I, S>(mut self, port: u32, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.held
            .entry(port)
            .or_default()
            .extend(names.into_iter().map(|name| name.as_ref().to_lowercase()));
        self
    }

    /// Runs every check in order.
    ///
    /// # Errors
    ///
    /// Returns the first check that fails.
    pub fn validate(&self, sequence: &ParsedInputSequence) -> Result<(), ValidationError> {
        let result = self
            .check_restricted(sequence)
            .and_then(|()| self.check_levels(sequence))
            .and_then(|()| self.check_ports(sequence))
            .and_then(|()| self.check_combos(sequence));
        if let Err(err) = &result {
            debug!(console = self.console.name(), error = %err, "sequence refused");
        }
        result
    }

    /// Refuses restricted inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RestrictedInput`] for the first one found.
    pub fn check_restricted(&self, sequence: &ParsedInputSequence) -> Result<(), ValidationError> {
        match sequence
            .tokens()
            .find(|token| self.restricted.contains(token.name()))
        {
            Some(token) => Err(ValidationError::RestrictedInput(token.name().to_owned())),
            None => Ok(()),
        }
    }

    /// Refuses inputs whose level is above the sender's.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InsufficientLevel`] for the first one found.
    pub fn check_levels(&self, sequence: &ParsedInputSequence) -> Result<(), ValidationError> {
        for token in sequence.tokens() {
            if let Some(&required) = self.input_levels.get(token.name()) {
                if self.user_level < required {
                    return Err(ValidationError::InsufficientLevel {
                        input: token.name().to_owned(),
                        required,
                    });
                }
            }
        }
        Ok(())
    }

    /// Refuses ports with no controller.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPort`] for the first one found.
    pub fn check_ports(&self, sequence: &ParsedInputSequence) -> Result<(), ValidationError> {
        match sequence
            .tokens()
            .find(|token| token.port() >= self.controller_count)
        {
            Some(token) => Err(ValidationError::InvalidPort {
                port: u64::from(token.port()) + 1,
                controller_count: self.controller_count,
            }),
            None => Ok(()),
        }
    }

    /// Refuses steps that would complete a forbidden combo.
    ///
    /// Holds carry into later steps and releases drop them. A release in a
    /// step takes effect before that step's presses are checked. Only ports
    /// that press something in a step are checked for that step.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCombo`] for the first combo found.
    pub fn check_combos(&self, sequence: &ParsedInputSequence) -> Result<(), ValidationError> {
        let combos: Vec<&[String]> = self.console.invalid_combos().collect();
        if combos.is_empty() {
            return Ok(());
        }

        let mut held: BTreeMap<u32, BTreeSet<&str>> = self
            .held
            .iter()
            .map(|(port, names)| (*port, names.iter().map(String::as_str).collect()))
            .collect();

        for step in sequence.steps() {
            for token in step.iter().filter(|token| token.is_release()) {
                if let Some(names) = held.get_mut(&token.port()) {
                    names.remove(token.name());
                }
            }

            let mut pressed: BTreeMap<u32, BTreeSet<&str>> = BTreeMap::new();
            for token in step.iter().filter(|token| !token.is_release()) {
                pressed.entry(token.port()).or_default().insert(token.name());
            }

            for (port, names) in &pressed {
                let already = held.get(port);
                let down = |name: &str| {
                    names.contains(name) || already.is_some_and(|held| held.contains(name))
                };
                if let Some(combo) = combos
                    .iter()
                    .find(|combo| combo.iter().all(|name| down(name.as_str())))
                {
                    return Err(ValidationError::InvalidCombo(combo.to_vec()));
                }
            }

            for token in step.iter().filter(|token| token.is_hold()) {
                held.entry(token.port()).or_default().insert(token.name());
            }
        }
        Ok(())
    }
}
