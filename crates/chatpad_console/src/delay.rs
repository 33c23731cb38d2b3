//! Mid-input delays.

use chatpad_foundation::{InputStep, InputToken, ParsedInputSequence};
use tracing::debug;

use crate::console::GameConsole;

fn is_all_blank(step: &InputStep, console: &GameConsole) -> bool {
    step.iter().all(|token| console.is_blank(token.name()))
}

/// Spaces out consecutive steps with a blank input lasting `delay_ms`.
///
/// A delay step goes between two steps only when neither of them is made
/// entirely of blank inputs. Sequences that are not valid, a zero delay, or
/// a console with no blank input leave the sequence unchanged.
#[must_use]
pub fn insert_mid_input_delays(
    sequence: &ParsedInputSequence,
    console: &GameConsole,
    delay_ms: u64,
    port: u32,
) -> ParsedInputSequence {
    let Some(blank) = console.blank_input() else {
        return sequence.clone();
    };
    if !sequence.is_valid() || delay_ms == 0 {
        return sequence.clone();
    }

    let delay = InputStep::single(InputToken::new(blank, delay_ms).with_port(port));
    let mut steps: Vec<InputStep> = Vec::with_capacity(sequence.steps().len() * 2);
    let mut inserted = 0usize;
    for step in sequence.steps() {
        let pad = steps.last().is_some_and(|previous| {
            !is_all_blank(previous, console) && !is_all_blank(step, console)
        });
        if pad {
            steps.push(delay.clone());
            inserted += 1;
        }
        steps.push(step.clone());
    }

    debug!(inserted, delay_ms, "inserted mid-input delays");
    ParsedInputSequence::valid(steps)
}
