//! Independent matchers for each piece of input syntax.
//!
//! Each matcher looks at the start of the unread text and reports what it
//! found and how many bytes it covers. None of them consume anything; the
//! tokenizer decides how to combine them.

use chatpad_foundation::{InputError, InputNames, Modifier};

/// Port selector marker.
pub const PORT_MARKER: char = '&';
/// Hold marker.
pub const HOLD_MARKER: char = '_';
/// Release marker.
pub const RELEASE_MARKER: char = '-';
/// Percent suffix.
pub const PERCENT_MARKER: char = '%';
/// Simultaneous combinator.
pub const SIMULTANEOUS_MARKER: char = '+';
/// Millisecond duration suffix.
pub const MILLISECONDS_SUFFIX: &str = "ms";
/// Second duration suffix.
pub const SECONDS_SUFFIX: &str = "s";

/// Most fractional digits a percent may carry.
const MAX_PERCENT_DECIMALS: usize = 3;

/// Returns the number of leading ASCII digits.
fn digit_len(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Returns the digit run of a `&<digits>` port selector.
#[must_use]
pub fn port_digits(rest: &str) -> Option<&str> {
    let digits = rest.strip_prefix(PORT_MARKER)?;
    let len = digit_len(digits);
    (len > 0).then(|| &digits[..len])
}

/// Reads a port selector's digits as a 0-based port.
///
/// # Errors
///
/// Returns an error if the number does not fit, is zero, or is above
/// `max_port` once made 0-based.
pub fn port_value(digits: &str, max_port: u32) -> Result<u32, InputError> {
    let invalid = || InputError::InvalidPort(format!("{PORT_MARKER}{digits}"));
    let written: u64 = digits.parse().map_err(|_| invalid())?;
    let port = written.checked_sub(1).ok_or_else(invalid)?;
    if port > u64::from(max_port) {
        return Err(InputError::PortOutOfRange {
            port: written,
            max: u64::from(max_port) + 1,
        });
    }
    u32::try_from(port).map_err(|_| invalid())
}

/// Returns the modifier marked by the first character.
#[must_use]
pub fn modifier(rest: &str) -> Option<Modifier> {
    match rest.chars().next()? {
        HOLD_MARKER => Some(Modifier::Hold),
        RELEASE_MARKER => Some(Modifier::Release),
        _ => None,
    }
}

/// Returns the longest input name at the start of `rest`, sliced from `rest`.
#[must_use]
pub fn input_name<'t>(rest: &'t str, names: &InputNames) -> Option<&'t str> {
    names.longest_match(rest).map(|name| &rest[..name.len()])
}

/// Matches a `<number>%` intensity suffix.
///
/// Returns `None` when there is no percent syntax. A `%` with no number in
/// front of it is not treated as a percent when it starts a valid input
/// name.
#[must_use]
pub fn percent(rest: &str, names: &InputNames) -> Option<Result<(f64, usize), InputError>> {
    let run = rest
        .bytes()
        .take_while(|b| b.is_ascii_digit() || *b == b'.')
        .count();
    if !rest[run..].starts_with(PERCENT_MARKER) {
        return None;
    }
    if run == 0 && names.longest_match(rest).is_some() {
        return None;
    }

    let number = &rest[..run];
    let len = run + PERCENT_MARKER.len_utf8();
    if !is_plain_decimal(number) {
        return Some(Err(InputError::InvalidPercent(number.to_owned())));
    }
    let Ok(value) = number.parse::<f64>() else {
        return Some(Err(InputError::InvalidPercent(number.to_owned())));
    };
    if value > 100.0 {
        return Some(Err(InputError::PercentOutOfRange(number.to_owned())));
    }
    Some(Ok((value, len)))
}

/// Checks for `<digits>` or `<digits>.<1-3 digits>`.
fn is_plain_decimal(number: &str) -> bool {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    let whole_ok = !whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit());
    let fraction_ok = if number.contains('.') {
        (1..=MAX_PERCENT_DECIMALS).contains(&fraction.len())
            && fraction.bytes().all(|b| b.is_ascii_digit())
    } else {
        true
    };
    whole_ok && fraction_ok
}

/// Matches a `<digits>ms` or `<digits>s` duration, milliseconds first.
///
/// Returns the duration in milliseconds and the bytes covered.
#[must_use]
pub fn duration(rest: &str) -> Option<Result<(u64, usize), InputError>> {
    let digits = digit_len(rest);
    if digits == 0 {
        return None;
    }
    let after = &rest[digits..];
    let (factor, suffix_len) = if after.starts_with(MILLISECONDS_SUFFIX) {
        (1, MILLISECONDS_SUFFIX.len())
    } else if after.starts_with(SECONDS_SUFFIX) {
        (1000, SECONDS_SUFFIX.len())
    } else {
        return None;
    };

    let len = digits + suffix_len;
    let value = rest[..digits]
        .parse::<u64>()
        .ok()
        .and_then(|value| value.checked_mul(factor))
        .ok_or_else(|| InputError::InvalidDuration(rest[..len].to_owned()));
    Some(value.map(|ms| (ms, len)))
}

/// Returns true if the text starts with the simultaneous combinator.
#[must_use]
pub fn simultaneous(rest: &str) -> bool {
    rest.starts_with(SIMULTANEOUS_MARKER)
}
