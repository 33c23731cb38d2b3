//! Macro expansion engine.
//!
//! Expands sigil-prefixed macro invocations in chat text against a
//! [`MacroSource`]. Expansion is a recursive descent over the text:
//!
//! 1. At each sigil, read the name candidate: every following character up
//!    to the next sigil, `(`, or whitespace
//! 2. If `(` follows and a dynamic macro with that base exists, split the
//!    balanced argument list on top-level commas, expand each argument, and
//!    look up the dynamic macro of matching arity
//! 3. Otherwise resolve the longest static macro name the candidate starts
//!    with
//! 4. Substitute `<i>` placeholders and expand the result again
//!
//! Every nested expansion runs one level deeper; at the depth bound the text
//! is returned untouched, so circular definitions terminate.

use chatpad_foundation::macros::dynamic_name;
use chatpad_foundation::{Error, ErrorContext, MacroSource, PreparseConfig, Result};
use tracing::{debug, trace};

// =============================================================================
// MacroExpander
// =============================================================================

/// Expands macro invocations using a borrowed snapshot.
pub struct MacroExpander<'a, S: MacroSource + ?Sized> {
    /// Macro definitions.
    source: &'a S,
    /// Sigil, depth bound, and length limit.
    config: &'a PreparseConfig,
}

impl<'a, S: MacroSource + ?Sized> MacroExpander<'a, S> {
    /// Creates an expander over `source`.
    pub fn new(source: &'a S, config: &'a PreparseConfig) -> Self {
        Self { source, config }
    }

    /// Expands every resolvable macro in `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if a dynamic macro call has unbalanced parentheses,
    /// a listed macro has no template, or the output grows past the
    /// configured length limit.
    pub fn expand(&self, text: &str) -> Result<String> {
        self.expand_at(text, 0)
    }

    fn expand_at(&self, text: &str, depth: usize) -> Result<String> {
        if depth >= self.config.max_macro_depth {
            debug!(depth, text, "macro depth bound reached");
            return Ok(text.to_owned());
        }

        let sigil = self.config.sigil;
        let mut out = String::with_capacity(text.len());
        let mut pos = 0;

        while let Some(offset) = text[pos..].find(sigil) {
            let start = pos + offset;
            out.push_str(&text[pos..start]);

            let name_start = start + sigil.len_utf8();
            let name_end = text[name_start..]
                .find(|c: char| c == sigil || c == '(' || c.is_whitespace())
                .map_or(text.len(), |end| name_start + end);

            if name_end == name_start {
                out.push(sigil);
                pos = name_start;
                continue;
            }

            let candidate = &text[start..name_end];

            if text[name_end..].starts_with('(') {
                if let Some((expanded, after)) = self.expand_call(text, candidate, name_end, depth)? {
                    self.append(&mut out, &expanded)?;
                    pos = after;
                    continue;
                }
            }

            if let Some((name, expanded)) = self.expand_static(candidate, depth)? {
                self.append(&mut out, &expanded)?;
                pos = start + name.len();
            } else {
                out.push(sigil);
                pos = name_start;
            }
        }

        out.push_str(&text[pos..]);
        self.check_len(&out)?;
        Ok(out)
    }

    /// Expands a dynamic call whose argument list opens at `open`.
    ///
    /// Returns the expansion and the byte offset just past the closing
    /// parenthesis, or `None` when no dynamic macro of that arity exists.
    fn expand_call(
        &self,
        text: &str,
        candidate: &str,
        open: usize,
        depth: usize,
    ) -> Result<Option<(String, usize)>> {
        let base = format!("{candidate}(");
        if self.source.names_with_prefix(&base).is_empty() {
            return Ok(None);
        }

        let Some(close) = find_closing_paren(text, open) else {
            debug!(candidate, position = open, "unbalanced macro arguments");
            return Err(Error::unbalanced_parentheses(open).with_context(
                ErrorContext::new()
                    .with_source(text)
                    .with_position(open)
                    .with_frame(candidate),
            ));
        };

        let raw_args = split_arguments(&text[open + 1..close]);
        let generic = dynamic_name(candidate, raw_args.len());
        if !self
            .source
            .names_with_prefix(&generic)
            .iter()
            .any(|name| *name == generic)
        {
            return Ok(None);
        }

        let template = self
            .source
            .template(&generic)
            .ok_or_else(|| Error::macro_vanished(&generic))?;

        let args = raw_args
            .iter()
            .map(|arg| self.expand_at(arg, depth + 1))
            .collect::<Result<Vec<_>>>()
            .map_err(|err| in_frame(err, &generic))?;

        let substituted = substitute_placeholders(template, &args);
        trace!(name = %generic, ?args, %substituted, "expanding dynamic macro");
        let expanded = self
            .expand_at(&substituted, depth + 1)
            .map_err(|err| in_frame(err, &generic))?;
        Ok(Some((expanded, close + 1)))
    }

    /// Expands the longest static macro that `candidate` starts with.
    fn expand_static<'c>(
        &self,
        candidate: &'c str,
        depth: usize,
    ) -> Result<Option<(&'c str, String)>> {
        let Some(prefix_end) = candidate
            .char_indices()
            .nth(1)
            .map(|(i, c)| i + c.len_utf8())
        else {
            return Ok(None);
        };

        let Some(len) = self
            .source
            .names_with_prefix(&candidate[..prefix_end])
            .into_iter()
            .filter(|name| !name.contains('(') && candidate.starts_with(name))
            .map(str::len)
            .max()
        else {
            return Ok(None);
        };

        let name = &candidate[..len];
        let template = self
            .source
            .template(name)
            .ok_or_else(|| Error::macro_vanished(name))?;
        trace!(name, template, "expanding static macro");
        let expanded = self
            .expand_at(template, depth + 1)
            .map_err(|err| in_frame(err, name))?;
        Ok(Some((name, expanded)))
    }

    fn append(&self, out: &mut String, expanded: &str) -> Result<()> {
        out.push_str(expanded);
        self.check_len(out)
    }

    fn check_len(&self, text: &str) -> Result<()> {
        if text.len() > self.config.max_text_len {
            debug!(
                len = text.len(),
                limit = self.config.max_text_len,
                "macro output too long"
            );
            return Err(Error::text_too_long(self.config.max_text_len));
        }
        Ok(())
    }
}

/// Expands macros in `text` with a one-off expander.
///
/// # Errors
///
/// See [`MacroExpander::expand`].
pub fn expand_macros<S: MacroSource + ?Sized>(
    text: &str,
    source: &S,
    config: &PreparseConfig,
) -> Result<String> {
    MacroExpander::new(source, config).expand(text)
}

// =============================================================================
// Helpers
// =============================================================================

fn in_frame(err: Error, frame: &str) -> Error {
    let Error { kind, context } = err;
    Error::new(kind).with_context(context.unwrap_or_default().with_frame(frame))
}

/// Finds the parenthesis closing the one at `open`.
fn find_closing_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits an argument list on commas outside nested parentheses.
fn split_arguments(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in args.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&args[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&args[start..]);
    parts
}

/// Replaces `<i>` with `args[i]` in one left-to-right pass.
///
/// Placeholders without a matching argument stay literal.
fn substitute_placeholders(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let arg = (digits > 0 && after[digits..].starts_with('>'))
            .then(|| after[..digits].parse::<usize>().ok())
            .flatten()
            .and_then(|index| args.get(index));
        if let Some(arg) = arg {
            out.push_str(arg);
            rest = &after[digits + 1..];
        } else {
            out.push('<');
            rest = after;
        }
    }
    out.push_str(rest);
    out
}
