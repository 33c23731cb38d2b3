//! Integration tests for tokens, steps, and sequences
//!
//! Tests token construction, step durations, and sequence outcomes.

use chatpad_foundation::{
    InputError, InputStep, InputToken, Modifier, ParseOutcome, ParsedInputSequence,
};

fn token(name: &str, duration: u64) -> InputToken {
    InputToken::new(name, duration)
}

// =============================================================================
// InputToken
// =============================================================================

#[test]
fn token_defaults() {
    let a = token("a", 200);
    assert_eq!(a.name(), "a");
    assert_eq!(a.modifier(), Modifier::Press);
    assert_eq!(a.port(), 0);
    assert!((a.percent() - 100.0).abs() < f64::EPSILON);
    assert!(!a.is_hold());
    assert!(!a.is_release());
}

#[test]
fn token_percent_is_clamped() {
    assert!((token("a", 1).with_percent(150.0).percent() - 100.0).abs() < f64::EPSILON);
    assert!(token("a", 1).with_percent(-5.0).percent().abs() < f64::EPSILON);
}

#[test]
fn token_equality_uses_every_field() {
    let a = token("a", 200).with_percent(50.0);
    assert_eq!(a, token("a", 200).with_percent(50.0));
    assert_ne!(a, token("a", 200).with_percent(50.5));
    assert_ne!(a, a.clone().with_port(1));
    assert_ne!(a, a.clone().with_modifier(Modifier::Hold));
}

#[test]
fn token_display_shows_one_based_port() {
    let held = token("b", 34)
        .with_port(2)
        .with_modifier(Modifier::Hold)
        .with_percent(8.0);
    assert_eq!(held.to_string(), "&3_b8%34ms");
}

// =============================================================================
// InputStep
// =============================================================================

#[test]
fn step_lasts_as_long_as_its_longest_input() {
    let mut step = InputStep::single(token("a", 100));
    step.push(token("b", 1000));
    step.push(token("c", 300));
    assert_eq!(step.len(), 3);
    assert_eq!(step.duration(), 1000);
}

#[test]
fn empty_step_cannot_be_built() {
    assert!(InputStep::from_tokens(Vec::new()).is_none());
    assert_eq!(
        InputStep::from_tokens(vec![token("a", 1)]).map(|s| s.len()),
        Some(1)
    );
}

// =============================================================================
// ParsedInputSequence
// =============================================================================

#[test]
fn valid_sequence_totals_steps() {
    let seq = ParsedInputSequence::valid(vec![
        InputStep::single(token("a", 500)),
        InputStep::from_tokens(vec![token("b", 200), token("c", 700)]).unwrap(),
    ]);
    assert_eq!(seq.outcome(), ParseOutcome::Valid);
    assert_eq!(seq.total_duration(), 1200);
    assert_eq!(seq.input_count(), 3);
    assert!(seq.error().is_none());
}

#[test]
fn valid_without_steps_is_not_an_input() {
    let seq = ParsedInputSequence::valid(Vec::new());
    assert_eq!(seq.outcome(), ParseOutcome::NotAnInput);
}

#[test]
fn invalid_sequence_keeps_its_error() {
    let seq = ParsedInputSequence::invalid(InputError::HoldAndRelease);
    assert_eq!(seq.outcome(), ParseOutcome::Invalid);
    assert!(seq.steps().is_empty());
    assert_eq!(seq.total_duration(), 0);
    assert_eq!(seq.error_message(), InputError::HoldAndRelease.to_string());
}

#[test]
fn sequence_display_summarizes() {
    let seq = ParsedInputSequence::valid(vec![InputStep::single(token("a", 200))]);
    let text = seq.to_string();
    assert!(text.contains("Valid"));
    assert!(text.contains("200"));
}
