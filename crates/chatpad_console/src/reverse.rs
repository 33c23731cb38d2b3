//! Rendering parsed sequences back into text.
//!
//! [`ReverseParser::to_syntax`] produces input syntax that parses back to
//! the same sequence; [`ReverseParser::to_natural`] produces a sentence for
//! people reading chat.

use std::fmt::Write;

use chatpad_foundation::input::FULL_PERCENT;
use chatpad_foundation::{InputToken, Modifier, ParsedInputSequence};

use crate::console::GameConsole;

/// Text shown for a sequence that did not parse.
pub const INVALID_NATURAL: &str = "Invalid input!";

/// Which ports to write out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShowPorts {
    /// Never show ports.
    #[default]
    None,
    /// Show every port.
    All,
    /// Show ports other than the default.
    NonDefault,
}

/// Which durations to write out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShowDurations {
    /// Show every duration.
    #[default]
    All,
    /// Show durations other than the default.
    NonDefault,
}

/// Options for [`ReverseParser`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReverseOptions {
    /// Port display policy.
    pub show_ports: ShowPorts,
    /// The 0-based port treated as default.
    pub default_port: u32,
    /// Duration display policy.
    pub show_durations: ShowDurations,
    /// The duration treated as default, in milliseconds.
    pub default_duration: u64,
}

impl Default for ReverseOptions {
    fn default() -> Self {
        Self {
            show_ports: ShowPorts::None,
            default_port: 0,
            show_durations: ShowDurations::All,
            default_duration: chatpad_foundation::config::DEFAULT_INPUT_DURATION,
        }
    }
}

impl ReverseOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the port display policy and the default port.
    #[must_use]
    pub fn with_ports(mut self, show_ports: ShowPorts, default_port: u32) -> Self {
        self.show_ports = show_ports;
        self.default_port = default_port;
        self
    }

    /// Sets the duration display policy and the default duration.
    #[must_use]
    pub fn with_durations(mut self, show_durations: ShowDurations, default_duration: u64) -> Self {
        self.show_durations = show_durations;
        self.default_duration = default_duration;
        self
    }

    fn shows_port(&self, port: u32) -> bool {
        match self.show_ports {
            ShowPorts::None => false,
            ShowPorts::All => true,
            ShowPorts::NonDefault => port != self.default_port,
        }
    }

    fn shows_duration(&self, duration: u64) -> bool {
        match self.show_durations {
            ShowDurations::All => true,
            ShowDurations::NonDefault => duration != self.default_duration,
        }
    }
}

/// Splits milliseconds into a display value and whether it is in seconds.
fn display_duration(ms: u64) -> (u64, bool) {
    if ms >= 1000 && ms % 1000 == 0 {
        (ms / 1000, true)
    } else {
        (ms, false)
    }
}

fn shows_percent(token: &InputToken, console: &GameConsole) -> bool {
    (token.percent() - FULL_PERCENT).abs() > f64::EPSILON || console.is_axis(token.name())
}

// =============================================================================
// ReverseParser
// =============================================================================

/// Renders sequences for a console.
pub struct ReverseParser;

impl ReverseParser {
    /// Renders a valid sequence as input syntax.
    ///
    /// Sequences that are not valid render as the empty string.
    #[must_use]
    pub fn to_syntax(
        sequence: &ParsedInputSequence,
        console: &GameConsole,
        options: &ReverseOptions,
    ) -> String {
        if !sequence.is_valid() {
            return String::new();
        }

        let mut out = String::new();
        for (i, step) in sequence.steps().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            for (j, token) in step.iter().enumerate() {
                if j > 0 {
                    out.push('+');
                }
                let blank = console.is_blank(token.name());
                if !blank && options.shows_port(token.port()) {
                    let _ = write!(out, "&{}", u64::from(token.port()) + 1);
                }
                if let Some(marker) = token.modifier().marker() {
                    out.push(marker);
                }
                out.push_str(token.name());
                if shows_percent(token, console) {
                    let _ = write!(out, "{}%", token.percent());
                }
                if blank || options.shows_duration(token.duration()) {
                    let (value, seconds) = display_duration(token.duration());
                    let _ = write!(out, "{value}{}", if seconds { "s" } else { "ms" });
                }
            }
        }
        out
    }

    /// Renders a valid sequence as an English sentence.
    ///
    /// Sequences that are not valid render as [`INVALID_NATURAL`].
    #[must_use]
    pub fn to_natural(
        sequence: &ParsedInputSequence,
        console: &GameConsole,
        options: &ReverseOptions,
    ) -> String {
        if !sequence.is_valid() {
            return INVALID_NATURAL.to_owned();
        }

        let mut out = String::new();
        for (i, step) in sequence.steps().iter().enumerate() {
            if i > 0 {
                out.push_str(", THEN ");
            }
            for (j, token) in step.iter().enumerate() {
                if j > 0 {
                    out.push_str(" AND ");
                }
                let blank = console.is_blank(token.name());
                let verb = match token.modifier() {
                    Modifier::Hold => "hold",
                    Modifier::Release => "release",
                    Modifier::Press if blank => "wait",
                    Modifier::Press => "press",
                };
                if i == 0 && j == 0 {
                    out.push_str(&capitalize(verb));
                } else {
                    out.push_str(verb);
                }
                out.push(' ');

                if !blank {
                    let _ = write!(out, "\"{}\" ", token.name());
                    if !token.is_release() && shows_percent(token, console) {
                        let _ = write!(out, "{}% ", token.percent());
                    }
                }

                let (value, seconds) = display_duration(token.duration());
                let unit = if seconds { "sec" } else { "msec" };
                let plural = if value == 1 { "" } else { "s" };
                let _ = write!(out, "{value} {unit}{plural}");

                if !blank && options.shows_port(token.port()) {
                    let _ = write!(out, " on port {}", u64::from(token.port()) + 1);
                }
            }
        }
        out.push('.');
        out
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
