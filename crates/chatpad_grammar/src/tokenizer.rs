//! Input grammar tokenization.
//!
//! Scans whitespace-free, lowercase text and produces one pending token per
//! grammar unit:
//!
//! ```text
//! [&<port>] [_|-] <name> [<percent>%] [<n>ms | <n>s] [+]
//! ```
//!
//! The port's digit run is tried longest first and shortened until an input
//! name follows, and a modifier is tried before falling back to none, so
//! names that start with digits or marker characters still resolve. The
//! longest input name at a position always wins.

use chatpad_foundation::{GrammarConfig, InputError, InputNames, InputToken, Modifier};
use tracing::trace;

use crate::cursor::Cursor;
use crate::matchers;

// =============================================================================
// PendingToken
// =============================================================================

/// A token as written, before defaults are applied.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingToken<'t> {
    /// Input name, sliced from the scanned text.
    pub name: &'t str,
    /// Hold, release, or plain press.
    pub modifier: Modifier,
    /// Explicit 0-based port.
    pub port: Option<u32>,
    /// Explicit intensity.
    pub percent: Option<f64>,
    /// Explicit duration in milliseconds.
    pub duration: Option<u64>,
    /// Whether a `+` joins this token to the next.
    pub simultaneous: bool,
}

impl PendingToken<'_> {
    /// Builds the final token, filling in configured defaults.
    #[must_use]
    pub fn finish(&self, config: &GrammarConfig) -> InputToken {
        let token = InputToken::new(self.name, self.duration.unwrap_or(config.default_duration))
            .with_modifier(self.modifier)
            .with_port(self.port.unwrap_or(config.default_controller_port));
        match self.percent {
            Some(percent) => token.with_percent(percent),
            None => token,
        }
    }
}

/// What the tokenizer made of a text.
#[derive(Clone, Debug, PartialEq)]
pub enum Tokenized<'t> {
    /// Every position was consumed by a token.
    Tokens(Vec<PendingToken<'t>>),
    /// A token broke a grammar rule.
    Invalid(InputError),
    /// Some position held no input syntax at all.
    NotAnInput,
}

/// Result of scanning at one position.
enum Scan<'t> {
    Token(PendingToken<'t>, usize),
    Invalid(InputError),
    NoInput,
}

/// Port, modifier, and name at the start of a token.
struct Head<'t> {
    port_digits: Option<&'t str>,
    modifier: Modifier,
    name: &'t str,
    len: usize,
}

// =============================================================================
// Tokenizer
// =============================================================================

/// Splits preprocessed text into pending tokens.
pub struct Tokenizer<'a> {
    names: &'a InputNames,
    config: &'a GrammarConfig,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer for a console's input names.
    #[must_use]
    pub fn new(names: &'a InputNames, config: &'a GrammarConfig) -> Self {
        Self { names, config }
    }

    /// Tokenizes `text`, which must already be lowercase and whitespace-free.
    ///
    /// Scanning stops at the first invalid token, or at the first position
    /// that holds no input syntax.
    #[must_use]
    pub fn tokenize<'t>(&self, text: &'t str) -> Tokenized<'t> {
        let mut cursor = Cursor::new(text);
        let mut tokens = Vec::new();

        while !cursor.is_at_end() {
            match self.scan(cursor.rest()) {
                Scan::Token(token, len) => {
                    trace!(position = cursor.position(), ?token, "token");
                    cursor.advance(len);
                    tokens.push(token);
                }
                Scan::Invalid(err) => {
                    trace!(position = cursor.position(), %err, "invalid token");
                    return Tokenized::Invalid(err);
                }
                Scan::NoInput => {
                    trace!(position = cursor.position(), "no input at position");
                    return Tokenized::NotAnInput;
                }
            }
        }

        if tokens.last().is_some_and(|token| token.simultaneous) {
            return Tokenized::Invalid(InputError::TrailingSimultaneous);
        }
        Tokenized::Tokens(tokens)
    }

    fn scan<'t>(&self, rest: &'t str) -> Scan<'t> {
        let Some(head) = self.head(rest) else {
            return Self::classify_failure(rest);
        };

        let port = match head.port_digits {
            Some(digits) => match matchers::port_value(digits, self.config.max_controller_port) {
                Ok(port) => Some(port),
                Err(err) => return Scan::Invalid(err),
            },
            None => None,
        };

        let mut len = head.len;
        let percent = match matchers::percent(&rest[len..], self.names) {
            Some(Ok((percent, used))) => {
                len += used;
                Some(percent)
            }
            Some(Err(err)) => return Scan::Invalid(err),
            None => None,
        };
        let duration = match matchers::duration(&rest[len..]) {
            Some(Ok((duration, used))) => {
                len += used;
                Some(duration)
            }
            Some(Err(err)) => return Scan::Invalid(err),
            None => None,
        };
        let simultaneous = matchers::simultaneous(&rest[len..]);
        if simultaneous {
            len += matchers::SIMULTANEOUS_MARKER.len_utf8();
        }

        Scan::Token(
            PendingToken {
                name: head.name,
                modifier: head.modifier,
                port,
                percent,
                duration,
                simultaneous,
            },
            len,
        )
    }

    /// Finds the port, modifier, and name a token starts with.
    fn head<'t>(&self, rest: &'t str) -> Option<Head<'t>> {
        if let Some(digits) = matchers::port_digits(rest) {
            let marker_len = matchers::PORT_MARKER.len_utf8();
            for port_len in (1..=digits.len()).rev() {
                let start = marker_len + port_len;
                if let Some((modifier, name, len)) = self.modifier_and_name(&rest[start..]) {
                    return Some(Head {
                        port_digits: Some(&digits[..port_len]),
                        modifier,
                        name,
                        len: start + len,
                    });
                }
            }
        }

        self.modifier_and_name(rest)
            .map(|(modifier, name, len)| Head {
                port_digits: None,
                modifier,
                name,
                len,
            })
    }

    fn modifier_and_name<'t>(&self, rest: &'t str) -> Option<(Modifier, &'t str, usize)> {
        if let Some(modifier) = matchers::modifier(rest) {
            let after = &rest[1..];
            if let Some(name) = matchers::input_name(after, self.names) {
                return Some((modifier, name, 1 + name.len()));
            }
        }
        matchers::input_name(rest, self.names).map(|name| (Modifier::Press, name, name.len()))
    }

    /// Decides whether a position without a name is a broken input or chat.
    fn classify_failure(rest: &str) -> Scan<'_> {
        let (port_text, after) = match matchers::port_digits(rest) {
            Some(digits) => rest.split_at(1 + digits.len()),
            None => ("", rest),
        };

        let first = matchers::modifier(after);
        let second = first.and_then(|_| matchers::modifier(&after[1..]));
        match (first, second) {
            (Some(a), Some(b)) if a != b => Scan::Invalid(InputError::HoldAndRelease),
            (Some(Modifier::Hold), _) => Scan::Invalid(InputError::DanglingHold),
            (Some(_), _) => Scan::Invalid(InputError::DanglingRelease),
            (None, _) if !port_text.is_empty() => {
                Scan::Invalid(InputError::DanglingPort(port_text.to_owned()))
            }
            (None, _) => Scan::NoInput,
        }
    }
}
