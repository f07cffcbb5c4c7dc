//! Insertion-based refinement of known sequences
//!
//! Takes a valid long sequence and tries to wedge one extra consistent
//! guess in at every prefix position. Candidate insertions are validated
//! twice: the suffix must replay from the prefix state, and the augmented
//! sequence must replay end-to-end from scratch. Improvements are yielded
//! lazily so a caller can stop after the first or drain them all.

use crate::core::{Pattern, Word};
use crate::search::Deductions;
use crate::search::sequence::replay;

/// Lazy iterator over one-word-longer variants of a guess sequence
///
/// The target is the final guess of the input sequence. This is a local
/// refinement pass, not an exhaustive search: each yielded sequence is the
/// input with a single extra word inserted somewhere before the end.
pub struct Refinements<'a> {
    dictionary: &'a [Word],
    guesses: &'a [Word],
    target: Option<Word>,
    /// Insertion point currently being tried
    position: usize,
    /// Next dictionary word to try at that point
    candidate: usize,
    /// Deductions after `guesses[..position]`
    prefix: Deductions,
}

impl<'a> Refinements<'a> {
    /// Refine `guesses` (whose last word is the target) using `dictionary`
    #[must_use]
    pub fn new(dictionary: &'a [Word], guesses: &'a [Word]) -> Self {
        Self {
            dictionary,
            guesses,
            target: guesses.last().copied(),
            position: 0,
            candidate: 0,
            prefix: Deductions::new(),
        }
    }

    fn augmented(&self, insert: Word) -> Vec<Word> {
        let mut sequence = Vec::with_capacity(self.guesses.len() + 1);
        sequence.extend_from_slice(&self.guesses[..self.position]);
        sequence.push(insert);
        sequence.extend_from_slice(&self.guesses[self.position..]);
        sequence
    }
}

impl Iterator for Refinements<'_> {
    type Item = Vec<Word>;

    fn next(&mut self) -> Option<Self::Item> {
        let target = self.target?;

        while self.position < self.guesses.len() {
            while self.candidate < self.dictionary.len() {
                let insert = self.dictionary[self.candidate];
                self.candidate += 1;

                if !self.prefix.is_consistent(&insert) {
                    continue;
                }

                // The inserted word plus the untouched suffix must replay
                // from the prefix state...
                let mut tail = Vec::with_capacity(self.guesses.len() - self.position + 1);
                tail.push(insert);
                tail.extend_from_slice(&self.guesses[self.position..]);
                if !replay(&tail, &target, &self.prefix) {
                    continue;
                }

                // ...and the whole augmented sequence must survive a fresh
                // end-to-end validation.
                let sequence = self.augmented(insert);
                if replay(&sequence, &target, &Deductions::new()) {
                    return Some(sequence);
                }
            }

            // Advance the insertion point: absorb the guess we just walked
            // past and restart the dictionary scan.
            let guess = self.guesses[self.position];
            self.prefix
                .update(&guess, Pattern::calculate(&guess, &target));
            self.position += 1;
            self.candidate = 0;
        }

        None
    }
}
