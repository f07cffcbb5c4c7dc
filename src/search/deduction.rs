//! Incremental deductions from guess feedback
//!
//! `Deductions` accumulates everything a sequence of guess/pattern pairs
//! reveals about the hidden target: per-position letter sets and per-letter
//! multiplicity bounds. Constraints only ever tighten; a candidate rejected
//! once stays rejected in every state derived from this one.

use crate::core::{ALPHABET, Mark, Pattern, WORD_LENGTH, Word};

/// A set of letters, one bit per letter of the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The full alphabet
    pub const FULL: Self = Self((1 << ALPHABET) - 1);

    /// The set containing a single letter
    #[inline]
    #[must_use]
    pub const fn only(letter: u8) -> Self {
        Self(Self::bit(letter))
    }

    /// Check whether a letter is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Remove a letter from the set
    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        self.0 &= !Self::bit(letter);
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Check whether the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }
}

/// Accumulated knowledge about the hidden target
///
/// Built incrementally from `update` calls and forked via `Clone` so sibling
/// search branches never observe each other's tightened constraints.
#[derive(Debug, Clone)]
pub struct Deductions {
    /// Minimum required occurrence count per letter
    at_least: [u8; ALPHABET],
    /// Maximum allowed occurrence count per letter
    at_most: [u8; ALPHABET],
    /// Letters still permitted at each position
    allowed: [LetterSet; WORD_LENGTH],
    /// Guesses already made in this branch
    history: Vec<Word>,
}

impl Default for Deductions {
    fn default() -> Self {
        Self::new()
    }
}

impl Deductions {
    /// A fresh state: every word is consistent with it
    #[must_use]
    pub fn new() -> Self {
        Self {
            at_least: [0; ALPHABET],
            at_most: [WORD_LENGTH as u8; ALPHABET],
            allowed: [LetterSet::FULL; WORD_LENGTH],
            history: Vec::new(),
        }
    }

    /// Guesses already made in this branch, in order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.history
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Absorb one guess and its feedback
    ///
    /// The pattern must have been produced by `Pattern::calculate` against
    /// the target under analysis; feeding feedback from a different target
    /// silently corrupts later consistency checks. The guess must not have
    /// been played before in this branch (checked only in debug builds;
    /// `is_consistent` is what keeps the search from repeating words).
    pub fn update(&mut self, guess: &Word, pattern: Pattern) {
        debug_assert!(
            !self.history.contains(guess),
            "guess repeated within one branch"
        );
        self.history.push(*guess);

        let marks = pattern.marks();

        // Positional evidence: a green pins the position, anything else
        // rules the guessed letter out of it.
        for (i, (&letter, mark)) in guess.letters().iter().zip(marks).enumerate() {
            match mark {
                Mark::Correct => self.allowed[i] = LetterSet::only(letter),
                Mark::Present | Mark::Absent => self.allowed[i].remove(letter),
            }
        }

        // Multiplicity evidence: count hits (green or yellow) and misses
        // (gray) per letter within this one guess.
        let mut hits = [0u8; ALPHABET];
        let mut misses = [0u8; ALPHABET];
        for (&letter, mark) in guess.letters().iter().zip(marks) {
            let idx = usize::from(letter - b'a');
            match mark {
                Mark::Correct | Mark::Present => hits[idx] += 1,
                Mark::Absent => misses[idx] += 1,
            }
        }

        for idx in 0..ALPHABET {
            if hits[idx] == 0 && misses[idx] == 0 {
                continue;
            }
            if hits[idx] > 0 {
                self.at_least[idx] = self.at_least[idx].max(hits[idx]);
                if misses[idx] > 0 {
                    // A gray alongside hits fixes the exact multiplicity:
                    // the target holds precisely `hits` copies.
                    self.at_most[idx] = self.at_most[idx].min(hits[idx]);
                }
            } else {
                // Only grays: the letter is not in the target at all.
                // Clear it everywhere it is not already pinned green.
                self.at_most[idx] = 0;
                let letter = b'a' + idx as u8;
                for slot in &mut self.allowed {
                    if *slot != LetterSet::only(letter) {
                        slot.remove(letter);
                    }
                }
            }
        }
    }

    /// Could `candidate` still be the hidden target, and is it playable?
    ///
    /// Rejects words already guessed in this branch, words whose letter at
    /// some position is no longer permitted there, and words violating any
    /// multiplicity bound.
    #[must_use]
    pub fn is_consistent(&self, candidate: &Word) -> bool {
        if self.history.contains(candidate) {
            return false;
        }

        for (slot, &letter) in self.allowed.iter().zip(candidate.letters()) {
            if !slot.contains(letter) {
                return false;
            }
        }

        let counts = candidate.letter_counts();
        for idx in 0..ALPHABET {
            if counts[idx] < self.at_least[idx] || counts[idx] > self.at_most[idx] {
                return false;
            }
        }

        true
    }
}
