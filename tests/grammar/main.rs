//! Integration tests for Layer 2: Grammar
//!
//! Tests for the input grammar: modifiers, ports, percents, durations,
//! simultaneous inputs, and message classification.

mod durations;
mod modifiers;
mod simultaneous;

use chatpad_foundation::{GrammarConfig, InputToken, MacroTable, ParsedInputSequence, SynonymTable};
use chatpad_grammar::InputParser;

/// Parses `text` against `names` with `config`.
pub fn parse_with(text: &str, names: &[&str], config: GrammarConfig) -> ParsedInputSequence {
    InputParser::new(names.iter().collect(), config)
        .unwrap()
        .parse(text, &MacroTable::new(), &SynonymTable::new())
}

/// Parses `text` with no duration limit and up to 100 ports.
pub fn parse(text: &str, names: &[&str]) -> ParsedInputSequence {
    parse_with(
        text,
        names,
        GrammarConfig::unchecked().with_max_controller_port(100),
    )
}

/// Parses `text` and fails the test unless it is valid.
pub fn parse_valid(text: &str, names: &[&str]) -> ParsedInputSequence {
    let seq = parse(text, names);
    assert!(seq.is_valid(), "{text:?} should be valid, got {seq}");
    seq
}

/// The first input of every step.
pub fn firsts(seq: &ParsedInputSequence) -> Vec<&InputToken> {
    seq.steps().iter().map(|step| &step.inputs()[0]).collect()
}
