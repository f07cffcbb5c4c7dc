//! Depth-first hunt for maximally long guess sequences
//!
//! For a fixed target, extend a guess sequence one consistent word at a
//! time, scoring each hypothetical guess against the true target with the
//! feedback oracle. Every time the sequence length beats the global best a
//! record is reported; a wall-clock deadline makes the whole thing an
//! anytime algorithm rather than an exhaustive one.

use crate::core::{Pattern, Word};
use crate::search::Deductions;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// A new-best sequence found by the search
#[derive(Debug, Clone)]
pub struct Record {
    /// Number of guesses in the sequence
    pub length: usize,
    /// The hidden target this sequence was found for
    pub target: Word,
    /// The guesses, in play order
    pub guesses: Vec<Word>,
    /// True when the sequence ends by guessing the target (a terminating
    /// witness); false for an in-progress lower bound
    pub complete: bool,
}

/// Deadline-bounded depth-first search over a guess dictionary
///
/// The dictionary order decides which maximal sequence is found first, not
/// correctness; callers shuffle it to explore different corners of the
/// space on every run.
pub struct SequenceSearch<'a> {
    dictionary: &'a [Word],
    deadline: Instant,
}

impl<'a> SequenceSearch<'a> {
    /// Create a search over `dictionary` that stops descending at `deadline`
    #[must_use]
    pub const fn new(dictionary: &'a [Word], deadline: Instant) -> Self {
        Self {
            dictionary,
            deadline,
        }
    }

    /// Hunt for sequences ending at `target`, reporting every global best
    ///
    /// `best` is the process-wide best length; it persists across targets so
    /// reported record lengths are strictly increasing within one run. It is
    /// atomic so several targets may be hunted in parallel against the same
    /// counter.
    pub fn run<F>(&self, target: &Word, best: &AtomicUsize, report: &F)
    where
        F: Fn(&Record),
    {
        self.extend(0, target, &Deductions::new(), best, report);
    }

    fn extend<F>(
        &self,
        depth: usize,
        target: &Word,
        state: &Deductions,
        best: &AtomicUsize,
        report: &F,
    ) where
        F: Fn(&Record),
    {
        // Checked once per descent; an expired deadline unwinds the whole
        // branch without finishing the remaining candidates.
        if Instant::now() >= self.deadline {
            return;
        }

        let reached = depth + 1;
        for guess in self.dictionary {
            if !state.is_consistent(guess) {
                continue;
            }

            let complete = guess == target;
            if raise_best(reached, best) {
                let mut guesses = state.guesses().to_vec();
                guesses.push(*guess);
                report(&Record {
                    length: reached,
                    target: *target,
                    guesses,
                    complete,
                });
            }

            if !complete {
                let mut branch = state.clone();
                branch.update(guess, Pattern::calculate(guess, target));
                self.extend(reached, target, &branch, best, report);
            }
        }
    }
}

/// Raise the global best to `length` if it improves on it
///
/// The cheap load filters out the common case; the `fetch_max` re-checks
/// under contention so two branches can never both claim the same record.
fn raise_best(length: usize, best: &AtomicUsize) -> bool {
    if length <= best.load(Ordering::Relaxed) {
        return false;
    }
    best.fetch_max(length, Ordering::Relaxed) < length
}

/// Replay a guess sequence against `start`, validating every step
///
/// Each guess must be consistent with the state so far; feedback is scored
/// against the true target. Returns false as soon as a step fails.
#[must_use]
pub fn replay(guesses: &[Word], target: &Word, start: &Deductions) -> bool {
    let mut state = start.clone();
    for guess in guesses {
        if !state.is_consistent(guess) {
            return false;
        }
        state.update(guess, Pattern::calculate(guess, target));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Duration;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn far_deadline() -> Instant {
        Instant::now() + Duration::from_secs(60)
    }

    /// Run a search and collect every reported record
    fn collect_records(dictionary: &[Word], target: &Word, deadline: Instant) -> Vec<Record> {
        let search = SequenceSearch::new(dictionary, deadline);
        let best = AtomicUsize::new(0);
        let records = RefCell::new(Vec::new());
        search.run(target, &best, &|record: &Record| {
            records.borrow_mut().push(record.clone());
        });
        records.into_inner()
    }

    #[test]
    fn expired_deadline_reports_nothing() {
        let dictionary = words(&["hello", "world", "robot"]);
        let target = Word::new("robot").unwrap();
        let records = collect_records(&dictionary, &target, Instant::now());
        assert!(records.is_empty());
    }

    #[test]
    fn record_lengths_strictly_increase() {
        let dictionary = words(&["crane", "sooty", "robot", "rotor", "motor"]);
        let target = Word::new("robot").unwrap();
        let records = collect_records(&dictionary, &target, far_deadline());

        assert!(!records.is_empty());
        for pair in records.windows(2) {
            assert!(pair[1].length > pair[0].length);
        }
    }

    #[test]
    fn complete_records_replay_and_end_at_target() {
        let dictionary = words(&["crane", "sooty", "robot", "rotor", "motor", "odors"]);
        let target = Word::new("robot").unwrap();
        let records = collect_records(&dictionary, &target, far_deadline());

        let complete: Vec<&Record> = records.iter().filter(|r| r.complete).collect();
        assert!(!complete.is_empty(), "search never reached the target");

        for record in complete {
            assert_eq!(record.length, record.guesses.len());
            assert_eq!(record.guesses.last(), Some(&target));
            // The target appears exactly once, at the end
            assert_eq!(
                record.guesses.iter().filter(|&&g| g == target).count(),
                1
            );
            assert!(replay(&record.guesses, &target, &Deductions::new()));
        }
    }

    #[test]
    fn incomplete_records_are_consistent_prefixes() {
        let dictionary = words(&["crane", "sooty", "robot", "rotor", "motor"]);
        let target = Word::new("robot").unwrap();
        let records = collect_records(&dictionary, &target, far_deadline());

        for record in records.iter().filter(|r| !r.complete) {
            assert_eq!(record.length, record.guesses.len());
            assert!(!record.guesses.contains(&target));
            assert!(replay(&record.guesses, &target, &Deductions::new()));
        }
    }

    #[test]
    fn best_counter_persists_across_targets() {
        let dictionary = words(&["crane", "sooty", "robot", "rotor", "motor", "mooed"]);
        let targets = words(&["robot", "motor"]);

        let best = AtomicUsize::new(0);
        let records = RefCell::new(Vec::new());
        for target in &targets {
            let search = SequenceSearch::new(&dictionary, far_deadline());
            search.run(target, &best, &|record: &Record| {
                records.borrow_mut().push(record.clone());
            });
        }

        // Across both targets the reported lengths still strictly increase
        let records = records.into_inner();
        for pair in records.windows(2) {
            assert!(pair[1].length > pair[0].length);
        }
    }

    #[test]
    fn replay_rejects_broken_sequences() {
        let target = Word::new("robot").unwrap();

        // Repeating a word is never valid
        let repeated = words(&["crane", "crane"]);
        assert!(!replay(&repeated, &target, &Deductions::new()));

        // A word contradicting earlier feedback is rejected: after CRANE
        // scores XYXXX against ROBOT, any word without an R is out
        let contradicting = words(&["crane", "sooty"]);
        assert!(!replay(&contradicting, &target, &Deductions::new()));

        let fine = words(&["crane", "odors", "rotor", "robot"]);
        assert!(replay(&fine, &target, &Deductions::new()));
    }
}
