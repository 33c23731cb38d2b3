//! Integration tests for simultaneous inputs

use chatpad_foundation::{InputError, ParseOutcome};

use crate::{parse, parse_valid};

#[test]
fn step_sizes() {
    let cases: &[(&str, &[&str], &[usize])] = &[
        ("a", &["a"], &[1]),
        ("b+r", &["b", "r"], &[2]),
        ("aa+b+cr+b", &["a", "b", "c", "r"], &[1, 3, 2]),
        ("11+r2+b3+n4+q5+76", &["11", "r2", "b3", "n4", "q5", "76"], &[6]),
        (
            "wekl+l2b5+n+k+web5l2",
            &["n", "k", "l", "l2", "b5", "we"],
            &[1, 1, 2, 4, 1, 1],
        ),
        ("+++++++++++++++", &["+"], &[8]),
    ];
    for (input, names, expected) in cases {
        let seq = parse_valid(input, names);
        let sizes: Vec<usize> = seq.steps().iter().map(|step| step.len()).collect();
        assert_eq!(sizes, *expected, "step sizes of {input}");
    }
}

#[test]
fn trailing_plus() {
    let cases: &[(&str, &[&str])] = &[
        ("j+", &["j"]),
        ("w+wj+w+j+", &["j", "w"]),
        ("r+v+d+d+v+r+v+ddrvvdr+v+", &["r", "v", "d"]),
    ];
    for (input, names) in cases {
        let seq = parse(input, names);
        assert_eq!(seq.outcome(), ParseOutcome::Invalid, "{input}");
        assert_eq!(seq.error(), Some(&InputError::TrailingSimultaneous));
    }
}

#[test]
fn whitespace_separates_steps() {
    let names = ["a", "b", "x", "y", "start", "."];
    let seq = parse_valid("a+b start+a+b+x+y . . b . . a", &names);
    assert_eq!(seq.input_count(), 13);
    assert_eq!(seq.steps().len(), 8);
}

#[test]
fn plus_may_span_whitespace() {
    let seq = parse_valid("a + b", &["a", "b"]);
    assert_eq!(seq.steps().len(), 1);
    assert_eq!(seq.input_count(), 2);
}

#[test]
fn step_lasts_as_long_as_its_longest_input() {
    let seq = parse_valid("a100ms+b700ms+x300ms", &["a", "b", "x"]);
    assert_eq!(seq.steps()[0].duration(), 700);
    assert_eq!(seq.total_duration(), 700);
}
