//! Parsed inputs and simultaneous steps.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full intensity, the percent of every input without a percent suffix.
pub const FULL_PERCENT: f64 = 100.0;

/// How an input interacts with inputs held from earlier steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Modifier {
    /// Pressed for its duration, then released.
    #[default]
    Press,
    /// Pressed and kept down after its duration (`_`).
    Hold,
    /// Releases an input held earlier (`-`).
    Release,
}

impl Modifier {
    /// Returns the syntax marker for this modifier, if any.
    #[must_use]
    pub const fn marker(self) -> Option<char> {
        match self {
            Self::Press => None,
            Self::Hold => Some('_'),
            Self::Release => Some('-'),
        }
    }
}

/// A single parsed input directive.
///
/// Tokens are immutable once built; the hold and release flags can never be
/// set together because both live in one [`Modifier`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputToken {
    name: String,
    modifier: Modifier,
    percent: f64,
    duration: u64,
    port: u32,
}

impl InputToken {
    /// Creates a full-intensity press of `name` on port 0.
    #[must_use]
    pub fn new(name: impl Into<String>, duration: u64) -> Self {
        Self {
            name: name.into(),
            modifier: Modifier::Press,
            percent: FULL_PERCENT,
            duration,
            port: 0,
        }
    }

    /// Sets the modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }

    /// Sets the intensity, clamped to `0..=100`.
    #[must_use]
    pub fn with_percent(mut self, percent: f64) -> Self {
        self.percent = percent.clamp(0.0, FULL_PERCENT);
        self
    }

    /// Sets the duration in milliseconds.
    #[must_use]
    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the 0-based controller port.
    #[must_use]
    pub fn with_port(mut self, port: u32) -> Self {
        self.port = port;
        self
    }

    /// Returns the input name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the modifier.
    #[must_use]
    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    /// Returns true if the input stays down after its duration.
    #[must_use]
    pub fn is_hold(&self) -> bool {
        self.modifier == Modifier::Hold
    }

    /// Returns true if the input releases an earlier hold.
    #[must_use]
    pub fn is_release(&self) -> bool {
        self.modifier == Modifier::Release
    }

    /// Returns the intensity in `0..=100`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Returns the 0-based controller port.
    #[must_use]
    pub fn port(&self) -> u32 {
        self.port
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{}", u64::from(self.port) + 1)?;
        if let Some(marker) = self.modifier.marker() {
            write!(f, "{marker}")?;
        }
        write!(f, "{}{}%{}ms", self.name, self.percent, self.duration)
    }
}

/// A non-empty set of inputs pressed at the same time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputStep {
    inputs: Vec<InputToken>,
}

#[allow(clippy::len_without_is_empty)]
impl InputStep {
    /// Creates a step holding one input.
    #[must_use]
    pub fn single(token: InputToken) -> Self {
        Self {
            inputs: vec![token],
        }
    }

    /// Creates a step from `tokens`, or `None` if there are none.
    #[must_use]
    pub fn from_tokens(tokens: Vec<InputToken>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { inputs: tokens })
        }
    }

    /// Adds another simultaneous input.
    pub fn push(&mut self, token: InputToken) {
        self.inputs.push(token);
    }

    /// Returns the inputs in this step.
    #[must_use]
    pub fn inputs(&self) -> &[InputToken] {
        &self.inputs
    }

    /// Returns the number of inputs. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns how long this step lasts: its longest input.
    #[must_use]
    pub fn duration(&self) -> u64 {
        self.inputs.iter().map(InputToken::duration).max().unwrap_or(0)
    }

    /// Returns an iterator over the inputs.
    pub fn iter(&self) -> std::slice::Iter<'_, InputToken> {
        self.inputs.iter()
    }
}

impl<'a> IntoIterator for &'a InputStep {
    type Item = &'a InputToken;
    type IntoIter = std::slice::Iter<'a, InputToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.inputs.iter()
    }
}
