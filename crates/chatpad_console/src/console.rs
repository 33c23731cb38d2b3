//! Console input tables.
//!
//! A console is an immutable lookup table from input name to what that
//! input drives on a virtual controller. Consoles are built once through
//! [`GameConsoleBuilder`] and cloned cheaply afterwards.

use chatpad_foundation::{Error, GrammarConfig, InputNames, Result};
use chatpad_grammar::InputParser;
use im::{OrdMap, Vector};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What an input name drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputKind {
    /// A digital button.
    Button {
        /// Controller button code.
        code: u32,
    },
    /// An analog axis, pressed by a percent.
    Axis {
        /// Controller axis code.
        code: u32,
    },
    /// A placeholder that only takes up time.
    Blank,
}

// =============================================================================
// GameConsole
// =============================================================================

/// The inputs of one console.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConsole {
    name: String,
    inputs: OrdMap<String, InputKind>,
    invalid_combos: Vector<Vec<String>>,
}

impl GameConsole {
    /// Starts building a console called `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> GameConsoleBuilder {
        GameConsoleBuilder::new(name)
    }

    /// A Super Nintendo layout with `#` and `.` as blank inputs.
    #[must_use]
    pub fn snes() -> Self {
        let buttons = [
            "left", "right", "up", "down", "a", "b", "l", "r", "select", "start", "x", "y",
        ];
        let inputs = buttons
            .iter()
            .zip(1u32..)
            .map(|(name, code)| ((*name).to_owned(), InputKind::Button { code }))
            .chain([
                ("#".to_owned(), InputKind::Blank),
                (".".to_owned(), InputKind::Blank),
            ])
            .collect();
        Self {
            name: "snes".to_owned(),
            inputs,
            invalid_combos: Vector::new(),
        }
    }

    /// Returns the console name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of inputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns true if the console has no inputs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Returns what `name` drives, if it is an input of this console.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<InputKind> {
        self.inputs.get(name).copied()
    }

    /// Returns true if `name` is an input of this console.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inputs.contains_key(name)
    }

    /// Returns true if `name` is a blank input.
    #[must_use]
    pub fn is_blank(&self, name: &str) -> bool {
        self.kind_of(name) == Some(InputKind::Blank)
    }

    /// Returns true if `name` is an axis.
    #[must_use]
    pub fn is_axis(&self, name: &str) -> bool {
        matches!(self.kind_of(name), Some(InputKind::Axis { .. }))
    }

    /// Returns the first blank input by name, if the console has one.
    #[must_use]
    pub fn blank_input(&self) -> Option<&str> {
        self.inputs
            .iter()
            .find(|(_, kind)| **kind == InputKind::Blank)
            .map(|(name, _)| name.as_str())
    }

    /// Returns the combos that may never be pressed together.
    pub fn invalid_combos(&self) -> impl Iterator<Item = &[String]> {
        self.invalid_combos.iter().map(Vec::as_slice)
    }

    /// Iterates over inputs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, InputKind)> {
        self.inputs.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Builds the name set the grammar matches against.
    #[must_use]
    pub fn input_names(&self) -> InputNames {
        self.inputs.keys().collect()
    }

    /// Builds a parser for this console.
    ///
    /// # Errors
    ///
    /// Returns an error if `grammar` is inconsistent.
    pub fn parser(&self, grammar: GrammarConfig) -> Result<InputParser> {
        InputParser::new(self.input_names(), grammar)
    }
}

// =============================================================================
// GameConsoleBuilder
// =============================================================================

/// Collects inputs and combos for a [`GameConsole`].
#[derive(Clone, Debug)]
pub struct GameConsoleBuilder {
    name: String,
    inputs: Vec<(String, InputKind)>,
    invalid_combos: Vec<Vec<String>>,
}

impl GameConsoleBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            invalid_combos: Vec::new(),
        }
    }

    /// Adds an input. A later input with the same name replaces it.
    #[must_use]
    pub fn input(mut self, name: impl Into<String>, kind: InputKind) -> Self {
        self.inputs.push((name.into(), kind));
        self
    }

    /// Adds a button.
    #[must_use]
    pub fn button(self, name: impl Into<String>, code: u32) -> Self {
        self.input(name, InputKind::Button { code })
    }

    /// Adds an axis.
    #[must_use]
    pub fn axis(self, name: impl Into<String>, code: u32) -> Self {
        self.input(name, InputKind::Axis { code })
    }

    /// Adds a blank input.
    #[must_use]
    pub fn blank(self, name: impl Into<String>) -> Self {
        self.input(name, InputKind::Blank)
    }

    /// Forbids pressing all of `names` at once.
    #[must_use]
    pub fn invalid_combo<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.invalid_combos
            .push(names.into_iter().map(Into::into).collect());
        self
    }

    /// Finishes the console.
    ///
    /// Names are stored lowercase, matching how the grammar reads them.
    ///
    /// # Errors
    ///
    /// Returns an error if an input name is empty or contains whitespace, or
    /// if a combo has fewer than two distinct inputs or names an input the
    /// console does not have.
    pub fn build(self) -> Result<GameConsole> {
        let mut inputs = OrdMap::new();
        for (name, kind) in self.inputs {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(Error::invalid_config(format!(
                    "console \"{}\" has invalid input name \"{name}\"",
                    self.name
                )));
            }
            inputs.insert(name.to_lowercase(), kind);
        }

        let mut invalid_combos = Vector::new();
        for combo in self.invalid_combos {
            let mut members: Vec<String> = combo.iter().map(|name| name.to_lowercase()).collect();
            members.sort();
            members.dedup();
            if members.len() < 2 {
                return Err(Error::invalid_config(format!(
                    "invalid combo {combo:?} needs at least two inputs"
                )));
            }
            if let Some(missing) = members.iter().find(|name| !inputs.contains_key(*name)) {
                return Err(Error::invalid_config(format!(
                    "invalid combo names unknown input \"{missing}\""
                )));
            }
            invalid_combos.push_back(members);
        }

        Ok(GameConsole {
            name: self.name,
            inputs,
            invalid_combos,
        })
    }
}
