//! Integration tests for console tables

use chatpad_console::{GameConsole, InputKind};
use chatpad_foundation::{ErrorKind, GrammarConfig, ParseOutcome};

use crate::{arcade, parse_for};

#[test]
fn snes_inputs() {
    let snes = GameConsole::snes();
    assert_eq!(snes.len(), 14);
    assert_eq!(snes.kind_of("left"), Some(InputKind::Button { code: 1 }));
    assert_eq!(snes.kind_of("y"), Some(InputKind::Button { code: 12 }));
    assert!(snes.is_blank("#"));
    assert!(snes.is_blank("."));
    assert!(!snes.is_axis("a"));
}

#[test]
fn names_are_lowercased() {
    let console = GameConsole::builder("pad")
        .button("Start", 1)
        .axis("LStick", 2)
        .build()
        .unwrap();
    assert!(console.contains("start"));
    assert!(console.is_axis("lstick"));
    assert!(!console.contains("Start"));
}

#[test]
fn iterates_in_name_order() {
    let console = arcade();
    let names: Vec<&str> = console.iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec!["#", "a", "b", "l", "r", "select", "start", "stickdown", "stickup"]
    );
}

#[test]
fn combos_are_sorted() {
    let console = arcade();
    let combos: Vec<&[String]> = console.invalid_combos().collect();
    assert_eq!(combos.len(), 2);
    assert_eq!(combos[0], ["select".to_owned(), "start".to_owned()]);
    assert_eq!(combos[1], ["a".to_owned(), "l".to_owned(), "r".to_owned()]);
}

#[test]
fn bad_definitions_are_config_errors() {
    let err = GameConsole::builder("pad")
        .button("a", 1)
        .invalid_combo(["a", "missing"])
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidConfig(_)));
    assert!(err.to_string().contains("missing"));

    let err = GameConsole::builder("pad").button(" ", 1).build().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidConfig(_)));
}

#[test]
fn parser_uses_console_names() {
    let console = arcade();
    assert!(parse_for(&console, "stickup50% a").is_valid());
    assert_eq!(
        parse_for(&console, "x").outcome(),
        ParseOutcome::NotAnInput
    );
}

#[test]
fn parser_rejects_bad_grammar() {
    let config = GrammarConfig::for_controllers(2).with_default_controller_port(3);
    assert!(arcade().parser(config).is_err());
}

#[test]
fn consoles_share_structure_when_cloned() {
    let console = arcade();
    let copy = console.clone();
    assert_eq!(console, copy);
    assert_eq!(copy.name(), "arcade");
}
