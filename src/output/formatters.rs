//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern, Word};
use colored::Colorize;

/// Render a pattern as colored symbols (G green, Y yellow, X dimmed)
#[must_use]
pub fn pattern_colored(pattern: Pattern) -> String {
    pattern
        .marks()
        .iter()
        .map(|mark| {
            let symbol = mark.symbol().to_string();
            match mark {
                Mark::Correct => symbol.green().bold().to_string(),
                Mark::Present => symbol.yellow().bold().to_string(),
                Mark::Absent => symbol.bright_black().to_string(),
            }
        })
        .collect()
}

/// Join words with spaces for one-line sequence display
#[must_use]
pub fn join_words(words: &[Word]) -> String {
    words
        .iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_colored_holds_all_five_symbols() {
        colored::control::set_override(false);
        let pattern = Pattern::from_str("GYXGY").unwrap();
        assert_eq!(pattern_colored(pattern), "GYXGY");
        colored::control::unset_override();
    }

    #[test]
    fn join_words_spaces() {
        let words = vec![
            Word::new("crane").unwrap(),
            Word::new("slate").unwrap(),
        ];
        assert_eq!(join_words(&words), "crane slate");
    }

    #[test]
    fn join_words_empty() {
        assert_eq!(join_words(&[]), "");
    }
}
