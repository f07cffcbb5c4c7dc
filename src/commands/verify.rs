//! Verify command
//!
//! Replays a guess sequence from scratch, printing the feedback for every
//! step and rejecting sequences that break a deduction or reach the target
//! before the final guess.

use crate::core::{Pattern, Word};
use crate::output::{print_verify_step, print_verify_summary};
use crate::search::Deductions;

/// Replay and validate a sequence whose last word is the target
///
/// # Errors
///
/// Returns an error if the sequence is empty, any guess contradicts the
/// deductions from earlier feedback, or the target is hit early.
pub fn run_verify(guesses: &[Word]) -> Result<(), String> {
    let target = *guesses.last().ok_or_else(|| "Sequence is empty".to_string())?;

    let mut state = Deductions::new();
    let mut failure = None;

    for (i, guess) in guesses.iter().enumerate() {
        let turn = i + 1;
        let pattern = Pattern::calculate(guess, &target);
        print_verify_step(turn, guess, pattern);

        if !state.is_consistent(guess) {
            failure = Some(format!("'{guess}' is not consistent at turn {turn}"));
            break;
        }
        if pattern.is_perfect() && turn != guesses.len() {
            failure = Some(format!("target reached early at turn {turn}"));
            break;
        }

        state.update(guess, pattern);
    }

    print_verify_summary(failure.is_none(), guesses.len());
    match failure {
        None => Ok(()),
        Some(reason) => Err(reason),
    }
}
