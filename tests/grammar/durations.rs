//! Integration tests for durations and total durations

use chatpad_foundation::{GrammarConfig, InputError, ParseOutcome};

use crate::{firsts, parse, parse_valid, parse_with};

fn durations(input: &str, names: &[&str]) -> Vec<u64> {
    let seq = parse_valid(input, names);
    firsts(&seq).iter().map(|t| t.duration()).collect()
}

// =============================================================================
// Per-Input Durations
// =============================================================================

#[test]
fn second_durations() {
    let cases: &[(&str, &[&str], &[u64])] = &[
        ("a", &["a"], &[200]),
        ("a1s", &["a"], &[1000]),
        ("a150sb7s", &["a", "b"], &[150_000, 7000]),
        ("c0sq11sc2s", &["c", "q"], &[0, 11_000, 2000]),
        ("111s8888s888888s", &["11", "888"], &[1000, 8000, 888_000]),
        ("b443s", &["b"], &[443_000]),
    ];
    for (input, names, expected) in cases {
        assert_eq!(durations(input, names), *expected, "durations in {input}");
    }
}

#[test]
fn millisecond_durations() {
    let cases: &[(&str, &[&str], &[u64])] = &[
        ("a", &["a"], &[200]),
        ("a1500ms", &["a"], &[1500]),
        ("a1msb355557ms", &["a", "b"], &[1, 355_557]),
        ("8134msms99761ms", &["81", "ms"], &[34, 99_761]),
        ("222222ms555555555ms", &["22", "5555"], &[2222, 55_555]),
        (
            "l343msl333msr3100msr31257ms",
            &["r3", "l3"],
            &[43, 33, 100, 1257],
        ),
    ];
    for (input, names, expected) in cases {
        assert_eq!(durations(input, names), *expected, "durations in {input}");
    }
}

#[test]
fn mixed_duration_units() {
    let cases: &[(&str, &[&str], &[u64])] = &[
        ("a1sb2570msr15s", &["a", "b", "r"], &[1000, 2570, 15_000]),
        ("s37msmsss37s", &["ms", "s"], &[37, 200, 200, 37_000]),
        (
            "aab35msab2sabb3s",
            &["ab", "a", "b"],
            &[200, 35, 2000, 200, 3000],
        ),
    ];
    for (input, names, expected) in cases {
        assert_eq!(durations(input, names), *expected, "durations in {input}");
    }
}

#[test]
fn durations_after_percents() {
    let seq = parse_valid("q34msba1sr30%l23%", &["q", "b", "a", "r", "l"]);
    let got: Vec<(f64, u64)> = firsts(&seq)
        .iter()
        .map(|t| (t.percent(), t.duration()))
        .collect();
    assert_eq!(
        got,
        vec![
            (100.0, 34),
            (100.0, 200),
            (100.0, 1000),
            (30.0, 200),
            (23.0, 200)
        ]
    );
}

#[test]
fn incomplete_durations() {
    let cases: &[(&str, &[&str])] = &[
        ("as", &["a"]),
        ("bss", &["bs"]),
        ("r7se2s", &["r", "e2"]),
        ("ams", &["a"]),
        ("mss1ms1", &["ms", "s"]),
        (";35msqq;ms", &["q", ";"]),
    ];
    for (input, names) in cases {
        assert!(!parse(input, names).is_valid(), "{input} should not be valid");
    }
}

#[test]
fn overflowing_duration_is_invalid() {
    let seq = parse("a99999999999999999999ms", &["a"]);
    assert_eq!(seq.outcome(), ParseOutcome::Invalid);
    assert!(matches!(seq.error(), Some(InputError::InvalidDuration(_))));
}

// =============================================================================
// Total Durations
// =============================================================================

#[test]
fn total_durations() {
    let cases: &[(&str, u64, u64)] = &[
        ("a . b", 600, 200),
        ("a . b", 900, 300),
        ("a200ms #200ms b200ms", 600, 200),
        ("a1s", 1000, 200),
        ("a1000ms", 1000, 200),
        ("_a2s", 2000, 200),
        ("_a2000ms", 2000, 200),
        ("a1000ms+b1000ms", 1000, 200),
        ("a1000ms b1000ms", 2000, 200),
        ("_a500ms b200ms #1s", 1700, 200),
        ("_a500ms b200ms #1s -a1300ms", 3000, 200),
    ];
    for (input, total, default) in cases {
        let config = GrammarConfig::default().with_default_duration(*default);
        let seq = parse_with(input, &["a", ".", "b", "#"], config);
        assert!(seq.is_valid(), "{input} should be valid");
        assert_eq!(seq.total_duration(), *total, "total of {input}");
    }
}

#[test]
fn explicit_durations_per_input() {
    let seq = parse_valid("_a17ms -x34ms y1024ms+b512ms", &["a", "x", "y", "b"]);
    let all: Vec<u64> = seq.tokens().map(|t| t.duration()).collect();
    assert_eq!(all, vec![17, 34, 1024, 512]);
    assert_eq!(seq.total_duration(), 17 + 34 + 1024);
}

#[test]
fn max_duration() {
    let cases: &[(&str, u64, bool)] = &[
        ("a", 60_000, true),
        ("jump", 60_000, true),
        ("y65s", 60_000, false),
        ("r5200ms", 5000, false),
        ("r5000ms", 5000, true),
    ];
    for (input, max, valid) in cases {
        let config = GrammarConfig::default().with_max_duration(*max);
        let seq = parse_with(input, &["a", "jump", "y", "r"], config);
        assert_eq!(seq.is_valid(), *valid, "{input} with max {max}");
        if !valid {
            assert!(matches!(
                seq.error(),
                Some(InputError::MaxDurationExceeded { .. })
            ));
        }
    }
}

#[test]
fn max_duration_can_be_disabled() {
    let seq = parse_valid("a3256ms #8s r150s", &["a", "r", "#"]);
    assert_eq!(seq.total_duration(), 3256 + 8000 + 150_000);
}
