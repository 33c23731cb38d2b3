//! Synonym substitution.

use chatpad_foundation::SynonymTable;
use tracing::trace;

/// Replaces every occurrence of each synonym's name with its value.
///
/// Synonyms apply once each, in declaration order, so a later synonym sees
/// the output of earlier ones but never its own.
#[must_use]
pub fn substitute_synonyms(text: &str, synonyms: &SynonymTable) -> String {
    let mut out = text.to_owned();
    for synonym in synonyms.iter() {
        if synonym.name().is_empty() || !out.contains(synonym.name()) {
            continue;
        }
        out = out.replace(synonym.name(), synonym.value());
        trace!(name = synonym.name(), value = synonym.value(), %out, "applied synonym");
    }
    out
}
