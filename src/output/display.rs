//! Display functions for command results

use super::formatters::{join_words, pattern_colored};
use crate::core::{Pattern, Word};
use crate::search::Record;
use colored::Colorize;

/// Print a new-best record found by the hunt
///
/// Complete sequences (ending at the target) print in green; in-progress
/// lower bounds carry a `+` and print in yellow.
pub fn print_record(record: &Record) {
    let header = if record.complete {
        format!("Length {:>3}", record.length).green().bold()
    } else {
        format!("Length {:>2}+", record.length).yellow().bold()
    };

    println!(
        "{}  target {}  {}",
        header,
        record.target.text().to_uppercase().bright_yellow(),
        join_words(&record.guesses)
    );
}

/// Print one improved sequence produced by refinement
pub fn print_refinement(index: usize, sequence: &[Word]) {
    println!(
        "{} {} words: {}",
        format!("#{index}").cyan(),
        sequence.len(),
        join_words(sequence)
    );
}

/// Print one replayed step of a sequence verification
pub fn print_verify_step(turn: usize, guess: &Word, pattern: Pattern) {
    println!(
        "Turn {:>2}: {} {}",
        turn,
        guess.text().to_uppercase(),
        pattern_colored(pattern)
    );
}

/// Print the outcome of a sequence verification
pub fn print_verify_summary(valid: bool, length: usize) {
    if valid {
        println!(
            "{}",
            format!("Valid sequence of {length} guesses").green().bold()
        );
    } else {
        println!("{}", "Invalid sequence".red().bold());
    }
}
