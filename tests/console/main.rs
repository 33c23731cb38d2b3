//! Integration tests for Layer 3: Console
//!
//! Tests for console tables, reverse parsing, input validation, mid-input
//! delays, and dispatching to virtual controllers.

mod consoles;

use chatpad_console::GameConsole;
use chatpad_foundation::{GrammarConfig, MacroTable, ParsedInputSequence, SynonymTable};

/// Parses `text` for `console` with four controllers.
pub fn parse_for(console: &GameConsole, text: &str) -> ParsedInputSequence {
    console
        .parser(GrammarConfig::for_controllers(4))
        .unwrap()
        .parse(text, &MacroTable::new(), &SynonymTable::new())
}

/// Parses `text` for the SNES preset and fails the test unless it is valid.
pub fn snes(text: &str) -> ParsedInputSequence {
    let seq = parse_for(&GameConsole::snes(), text);
    assert!(seq.is_valid(), "{text:?} should be valid, got {seq}");
    seq
}

/// A console with an axis and two forbidden combos.
pub fn arcade() -> GameConsole {
    GameConsole::builder("arcade")
        .button("a", 1)
        .button("b", 2)
        .button("l", 3)
        .button("r", 4)
        .button("start", 5)
        .button("select", 6)
        .axis("stickup", 10)
        .axis("stickdown", 11)
        .blank("#")
        .invalid_combo(["start", "select"])
        .invalid_combo(["l", "r", "a"])
        .build()
        .unwrap()
}
