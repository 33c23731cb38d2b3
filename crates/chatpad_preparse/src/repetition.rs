//! Repetition expansion.
//!
//! `[segment]*N` becomes `segment` written `N` times, where `N` is one to
//! three digits. The leftmost group with no brackets inside is expanded
//! first and the text is rescanned, so nested groups unroll from the inside
//! out. Brackets without a `*N` suffix are left alone.

use tracing::{debug, trace};

/// Longest repeat count, in digits.
const MAX_COUNT_DIGITS: usize = 3;

/// A located `[segment]*N` group.
#[derive(Debug, PartialEq, Eq)]
struct Group {
    /// Byte offset of `[`.
    start: usize,
    /// Byte offset just past the last count digit.
    end: usize,
    /// Byte range of the segment.
    segment: (usize, usize),
    /// Repeat count.
    count: usize,
}

/// Expands every repetition group in `text`.
///
/// Stops early, returning the partially expanded text, if the next
/// expansion would make the text longer than `max_len` bytes.
#[must_use]
pub fn expand_repetitions(text: &str, max_len: usize) -> String {
    let mut out = text.to_owned();
    while let Some(group) = find_group(&out) {
        let (seg_start, seg_end) = group.segment;
        let segment_len = seg_end - seg_start;
        let new_len = segment_len
            .checked_mul(group.count)
            .and_then(|len| len.checked_add(out.len() - (group.end - group.start)));
        if new_len.is_none_or(|len| len > max_len) {
            debug!(len = out.len(), max_len, "repetition expansion stopped at length limit");
            break;
        }

        let repeated = out[seg_start..seg_end].repeat(group.count);
        out.replace_range(group.start..group.end, &repeated);
        trace!(%out, "expanded repetition");
    }
    out
}

/// Finds the leftmost `[` whose segment closes with `]*` and a count.
fn find_group(text: &str) -> Option<Group> {
    let bytes = text.as_bytes();
    let mut search = 0;
    while let Some(offset) = text[search..].find('[') {
        let start = search + offset;
        search = start + 1;

        let Some(close) = text[start + 1..]
            .find(['[', ']'])
            .map(|i| start + 1 + i)
        else {
            return None;
        };
        if bytes[close] != b']' || bytes.get(close + 1) != Some(&b'*') {
            continue;
        }

        let digits_start = close + 2;
        let digits = bytes[digits_start..]
            .iter()
            .take(MAX_COUNT_DIGITS)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            continue;
        }
        let end = digits_start + digits;
        let Ok(count) = text[digits_start..end].parse() else {
            continue;
        };
        return Some(Group {
            start,
            end,
            segment: (start + 1, close),
            count,
        });
    }
    None
}
