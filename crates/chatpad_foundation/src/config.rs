//! Parser configuration.
//!
//! Both configs are plain values handed to each parse call. They are cheap to
//! clone and never change underneath a parse.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::macros::MACRO_SIGIL;

/// Default duration applied to inputs without a duration suffix.
pub const DEFAULT_INPUT_DURATION: u64 = 200;

/// Default upper bound on a sequence's total duration.
pub const DEFAULT_MAX_INPUT_DURATION: u64 = 60_000;

/// Default macro recursion bound.
pub const DEFAULT_MAX_MACRO_DEPTH: usize = 10;

/// Default upper bound on preprocessed text, in bytes.
pub const DEFAULT_MAX_TEXT_LEN: usize = 64 * 1024;

/// Timing and port bounds for the grammar tokenizer and sequence validator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrammarConfig {
    /// Duration in milliseconds for inputs without a duration suffix.
    pub default_duration: u64,
    /// Upper bound on the total duration in milliseconds.
    pub max_duration: u64,
    /// Whether `max_duration` is enforced.
    pub check_max_duration: bool,
    /// Highest 0-based controller port a token may target.
    pub max_controller_port: u32,
    /// 0-based port for tokens without a port selector.
    pub default_controller_port: u32,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            default_duration: DEFAULT_INPUT_DURATION,
            max_duration: DEFAULT_MAX_INPUT_DURATION,
            check_max_duration: true,
            max_controller_port: 1,
            default_controller_port: 0,
        }
    }
}

impl GrammarConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that never rejects long sequences.
    #[must_use]
    pub fn unchecked() -> Self {
        Self {
            check_max_duration: false,
            ..Self::default()
        }
    }

    /// Creates a config sized for `controller_count` controllers.
    ///
    /// A count of zero is treated as one.
    #[must_use]
    pub fn for_controllers(controller_count: u32) -> Self {
        Self {
            max_controller_port: controller_count.saturating_sub(1),
            ..Self::default()
        }
    }

    /// Sets the default duration.
    #[must_use]
    pub fn with_default_duration(mut self, ms: u64) -> Self {
        self.default_duration = ms;
        self
    }

    /// Sets the maximum total duration.
    #[must_use]
    pub fn with_max_duration(mut self, ms: u64) -> Self {
        self.max_duration = ms;
        self
    }

    /// Enables or disables the maximum duration check.
    #[must_use]
    pub fn with_check_max_duration(mut self, enabled: bool) -> Self {
        self.check_max_duration = enabled;
        self
    }

    /// Sets the highest 0-based controller port.
    #[must_use]
    pub fn with_max_controller_port(mut self, port: u32) -> Self {
        self.max_controller_port = port;
        self
    }

    /// Sets the 0-based port used when no selector is given.
    #[must_use]
    pub fn with_default_controller_port(mut self, port: u32) -> Self {
        self.default_controller_port = port;
        self
    }

    /// Checks that the settings are consistent.
    ///
    /// # Errors
    ///
    /// Returns an error if the default port is above the maximum port.
    pub fn validate(&self) -> Result<()> {
        if self.default_controller_port > self.max_controller_port {
            return Err(Error::invalid_config(format!(
                "default controller port {} is greater than the max port {}",
                self.default_controller_port, self.max_controller_port
            )));
        }
        Ok(())
    }
}

/// Bounds for macro expansion and repetition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PreparseConfig {
    /// Character that starts a macro invocation.
    pub sigil: char,
    /// Maximum nesting of macro expansions.
    pub max_macro_depth: usize,
    /// Maximum length of preprocessed text in bytes.
    pub max_text_len: usize,
}

impl Default for PreparseConfig {
    fn default() -> Self {
        Self {
            sigil: MACRO_SIGIL,
            max_macro_depth: DEFAULT_MAX_MACRO_DEPTH,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }
}

impl PreparseConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the macro sigil.
    #[must_use]
    pub fn with_sigil(mut self, sigil: char) -> Self {
        self.sigil = sigil;
        self
    }

    /// Sets the macro recursion bound.
    #[must_use]
    pub fn with_max_macro_depth(mut self, depth: usize) -> Self {
        self.max_macro_depth = depth;
        self
    }

    /// Sets the preprocessed text limit.
    #[must_use]
    pub fn with_max_text_len(mut self, len: usize) -> Self {
        self.max_text_len = len;
        self
    }
}
