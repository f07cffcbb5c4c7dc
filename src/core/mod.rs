//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod pattern;
mod word;

pub use pattern::{Mark, Pattern};
pub use word::{Word, WordError};

/// Number of letters in a word
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the alphabet
pub const ALPHABET: usize = 26;
