//! Score command
//!
//! Prints the feedback pattern for a single guess/target pair.

use crate::core::{Pattern, Word};
use crate::output::pattern_colored;

/// Score a guess against a target and print the pattern
///
/// # Errors
///
/// Returns an error if either word is invalid.
pub fn run_score(guess: &str, target: &str) -> Result<(), String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target: {e}"))?;

    let pattern = Pattern::calculate(&guess, &target);
    println!(
        "{} vs {} -> {}",
        guess.text().to_uppercase(),
        target.text().to_uppercase(),
        pattern_colored(pattern)
    );

    Ok(())
}
