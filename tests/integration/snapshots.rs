//! Snapshots shared between concurrent parses

use std::sync::Arc;
use std::thread;

use chatpad_console::GameConsole;
use chatpad_foundation::{GrammarConfig, Macro, MacroTable, ParseOutcome, Synonym, SynonymTable};
use chatpad_grammar::InputParser;

use crate::init_tracing;

fn parser() -> InputParser {
    GameConsole::snes()
        .parser(GrammarConfig::for_controllers(4))
        .unwrap()
}

#[test]
fn parses_in_parallel() {
    init_tracing();
    let parser = Arc::new(parser());
    let macros: MacroTable = [Macro::new("#spin", "[up right down left]*2").unwrap()]
        .into_iter()
        .collect();
    let synonyms: SynonymTable = [Synonym::new("jump", "b").unwrap()].into_iter().collect();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let parser = Arc::clone(&parser);
            let macros = macros.clone();
            let synonyms = synonyms.clone();
            thread::spawn(move || {
                let text = if i % 2 == 0 { "#spin jump" } else { "jump+a" };
                parser.parse(text, &macros, &synonyms)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let seq = handle.join().unwrap();
        assert!(seq.is_valid());
        let expected = if i % 2 == 0 { 9 } else { 1 };
        assert_eq!(seq.steps().len(), expected);
    }
}

#[test]
fn edits_do_not_reach_existing_snapshots() {
    init_tracing();
    let parser = parser();
    let before: MacroTable = [Macro::new("#go", "a").unwrap()].into_iter().collect();
    let after = before.with(Macro::new("#go", "b500ms").unwrap());
    let removed = after.without("#go");

    let seq = parser.parse("#go", &before, &SynonymTable::new());
    assert_eq!(seq.steps()[0].inputs()[0].name(), "a");

    let seq = parser.parse("#go", &after, &SynonymTable::new());
    assert_eq!(seq.steps()[0].inputs()[0].name(), "b");
    assert_eq!(seq.total_duration(), 500);

    let seq = parser.parse("#go", &removed, &SynonymTable::new());
    assert_eq!(seq.outcome(), ParseOutcome::NotAnInput);
    assert_eq!(before.len(), 1);
}

#[test]
fn scoped_threads_borrow_one_snapshot() {
    init_tracing();
    let parser = parser();
    let macros: MacroTable = [Macro::new("#ab", "a+b").unwrap()].into_iter().collect();
    let synonyms = SynonymTable::new();

    let totals: Vec<u64> = thread::scope(|scope| {
        let handles: Vec<_> = ["#ab", "#ab #ab", "#ab . #ab"]
            .into_iter()
            .map(|text| {
                let (parser, macros, synonyms) = (&parser, &macros, &synonyms);
                scope.spawn(move || parser.parse(text, macros, synonyms).total_duration())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(totals, vec![200, 400, 600]);
}
