//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = X (letter not in word)
//! - 1 = Y (letter in word, wrong position)
//! - 2 = G (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{ALPHABET, WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter not in word, or all its occurrences already accounted for (X)
    Absent,
    /// Letter in word but wrong position (Y)
    Present,
    /// Letter in correct position (G)
    Correct,
}

impl Mark {
    /// Display symbol: G for correct, Y for present, X for absent
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }

    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            1 => Self::Present,
            2 => Self::Correct,
            _ => Self::Absent,
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Calculate the pattern when `guess` is guessed and `target` is hidden
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and pool the unmatched
    ///    target letters into a 26-way multiset
    /// 2. Second pass: mark present-but-misplaced (yellows) by consuming the
    ///    pool left to right; everything else is gray
    ///
    /// The green+yellow marks for a letter never exceed its count in the
    /// target, and earlier guess positions claim matches first.
    ///
    /// # Examples
    /// ```
    /// use wordle_marathon::core::{Pattern, Word};
    ///
    /// let guess = Word::new("coots").unwrap();
    /// let target = Word::new("scoot").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    /// assert_eq!(pattern.to_string(), "YYGYY");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut unmatched = [0u8; ALPHABET];

        // First pass: greens, and the multiset of leftover target letters
        // Allow: index needed to compare guess[i] with target[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == target.letter_at(i) {
                marks[i] = Mark::Correct;
            } else {
                unmatched[usize::from(target.letter_at(i) - b'a')] += 1;
            }
        }

        // Second pass: yellows consume the leftover pool
        // Allow: index needed to check marks[i] while reading guess[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Correct {
                continue;
            }
            let idx = usize::from(guess.letter_at(i) - b'a');
            if unmatched[idx] > 0 {
                marks[i] = Mark::Present;
                unmatched[idx] -= 1;
            }
        }

        Self::from_marks(marks)
    }

    /// Build a pattern from per-position marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            value += mark.digit() * multiplier;
            multiplier = multiplier.saturating_mul(3);
        }
        Self(value)
    }

    /// Decode the pattern into per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut value = self.0;
        let mut marks = [Mark::Absent; WORD_LENGTH];
        for mark in &mut marks {
            *mark = Mark::from_digit(value % 3);
            value /= 3;
        }
        marks
    }

    /// Count the number of green marks
    #[must_use]
    pub fn count_correct(self) -> u8 {
        self.marks().iter().filter(|&&m| m == Mark::Correct).count() as u8
    }

    /// Count the number of yellow marks
    #[must_use]
    pub fn count_present(self) -> u8 {
        self.marks().iter().filter(|&&m| m == Mark::Present).count() as u8
    }

    /// Parse a pattern from a string like "GYXXY"
    ///
    /// Accepts 'G'/'g' for green, 'Y'/'y' for yellow, 'X'/'x'/'-' for gray.
    ///
    /// # Examples
    /// ```
    /// use wordle_marathon::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GYXGY").unwrap();
    /// let p2 = Pattern::from_str("gy-gy").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' => Mark::Correct,
                'Y' | 'y' => Mark::Present,
                'X' | 'x' | '-' => Mark::Absent,
                _ => return None,
            };
        }

        Some(Self::from_marks(marks))
    }
}

impl fmt::Display for Pattern {
    /// Renders as five symbols, e.g. "YYGYY"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
