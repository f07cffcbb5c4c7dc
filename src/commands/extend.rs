//! Extend command
//!
//! Refines a known-long sequence by inserting one extra consistent guess,
//! printing each improvement as the lazy refinement iterator yields it.

use crate::core::Word;
use crate::output::print_refinement;
use crate::search::{Deductions, Refinements, replay};

/// Refine a sequence and print every improvement found
///
/// The final word of `guesses` is taken as the target. Returns the number
/// of improved sequences printed.
///
/// # Errors
///
/// Returns an error if the sequence is empty or does not replay cleanly
/// from a fresh state.
pub fn run_extend(
    dictionary: &[Word],
    guesses: &[Word],
    limit: Option<usize>,
) -> Result<usize, String> {
    let target = guesses.last().ok_or_else(|| "Sequence is empty".to_string())?;

    if !replay(guesses, target, &Deductions::new()) {
        return Err("Input sequence does not replay cleanly".to_string());
    }

    let mut printed = 0;
    for sequence in Refinements::new(dictionary, guesses) {
        printed += 1;
        print_refinement(printed, &sequence);

        if let Some(limit) = limit
            && printed >= limit
        {
            break;
        }
    }

    Ok(printed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn extend_rejects_empty_sequence() {
        let dictionary = words(&["crane", "robot"]);
        let result = run_extend(&dictionary, &[], None);
        assert!(result.is_err());
    }

    #[test]
    fn extend_rejects_broken_sequence() {
        let dictionary = words(&["crane", "robot"]);
        // Repeated word never replays
        let guesses = words(&["crane", "crane"]);
        let result = run_extend(&dictionary, &guesses, None);
        assert!(result.is_err());
    }

    #[test]
    fn extend_counts_improvements() {
        let dictionary = words(&["crane", "sooty", "robot"]);
        let guesses = words(&["robot"]);

        // Both CRANE and SOOTY can be prepended
        let printed = run_extend(&dictionary, &guesses, None).unwrap();
        assert_eq!(printed, 2);
    }

    #[test]
    fn extend_honors_limit() {
        let dictionary = words(&["crane", "sooty", "robot"]);
        let guesses = words(&["robot"]);

        let printed = run_extend(&dictionary, &guesses, Some(1)).unwrap();
        assert_eq!(printed, 1);
    }
}
