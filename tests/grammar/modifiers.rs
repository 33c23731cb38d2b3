//! Integration tests for hold and release modifiers

use chatpad_foundation::{InputError, ParseOutcome};

use crate::{firsts, parse, parse_valid};

// =============================================================================
// Hold
// =============================================================================

#[test]
fn holds() {
    let cases: &[(&str, &[&str], &[bool])] = &[
        ("_q", &["q"], &[true]),
        ("_x_yxy", &["x", "y"], &[true, true, false, false]),
        ("_ab_rl", &["a", "b", "r", "l"], &[true, false, true, false]),
        ("b25_l3l_l", &["l3", "b25", "l"], &[false, true, false, true]),
        ("__", &["_"], &[true]),
        ("____", &["___"], &[true]),
    ];
    for (input, names, expected) in cases {
        let seq = parse_valid(input, names);
        let holds: Vec<bool> = firsts(&seq).iter().map(|t| t.is_hold()).collect();
        assert_eq!(holds, *expected, "holds in {input}");
    }
}

#[test]
fn dangling_holds() {
    let cases: &[(&str, &[&str])] = &[
        ("__a", &["a"]),
        ("b__r", &["r"]),
        ("__n_q", &["n", "q"]),
        ("33_", &["33"]),
        ("___g", &["g"]),
    ];
    for (input, names) in cases {
        let seq = parse(input, names);
        assert!(!seq.is_valid(), "{input} should not be valid");
        assert!(seq.steps().is_empty());
    }
}

// =============================================================================
// Release
// =============================================================================

#[test]
fn releases() {
    let cases: &[(&str, &[&str], &[bool])] = &[
        ("-q", &["q"], &[true]),
        ("-ab-rl", &["a", "b", "r", "l"], &[true, false, true, false]),
        (
            "rwrew-w",
            &["q", "w", "e", "r"],
            &[false, false, false, false, false, true],
        ),
        ("--", &["-"], &[true]),
        ("-----", &["----"], &[true]),
    ];
    for (input, names, expected) in cases {
        let seq = parse_valid(input, names);
        let releases: Vec<bool> = firsts(&seq).iter().map(|t| t.is_release()).collect();
        assert_eq!(releases, *expected, "releases in {input}");
    }
}

#[test]
fn dangling_releases() {
    let cases: &[(&str, &[&str])] = &[
        ("--a", &["a"]),
        ("b--r", &["r"]),
        ("--n-q", &["n", "q"]),
        ("33-", &["33"]),
        ("---g", &["g"]),
    ];
    for (input, names) in cases {
        let seq = parse(input, names);
        assert!(!seq.is_valid(), "{input} should not be valid");
        assert!(seq.steps().is_empty());
    }
}

// =============================================================================
// Hold and Release Together
// =============================================================================

#[test]
fn holds_and_releases() {
    let cases: &[(&str, &[&str], &[bool], &[bool])] = &[
        ("a", &["a"], &[false], &[false]),
        (
            "_l-ab-l_l_b-r-a",
            &["a", "b", "l", "r"],
            &[true, false, false, false, true, true, false, false],
            &[false, true, false, true, false, false, true, true],
        ),
        ("_a_b_a_b", &["a", "b"], &[true; 4], &[false; 4]),
        ("-a-b-a-b", &["a", "b"], &[false; 4], &[true; 4]),
    ];
    for (input, names, holds, releases) in cases {
        let seq = parse_valid(input, names);
        let tokens = firsts(&seq);
        let got_holds: Vec<bool> = tokens.iter().map(|t| t.is_hold()).collect();
        let got_releases: Vec<bool> = tokens.iter().map(|t| t.is_release()).collect();
        assert_eq!(got_holds, *holds, "holds in {input}");
        assert_eq!(got_releases, *releases, "releases in {input}");
    }
}

#[test]
fn hold_and_release_on_one_input() {
    for input in ["_-a", "-_a"] {
        let seq = parse(input, &["a"]);
        assert_eq!(seq.outcome(), ParseOutcome::Invalid);
        assert_eq!(seq.error(), Some(&InputError::HoldAndRelease));
    }
}
