//! Hunt command
//!
//! The driving loop of the analyzer: cycle over target words, give each one
//! a fixed wall-clock budget, and let the depth-first search report every
//! new global-best sequence. The best length deliberately persists across
//! targets, so the console only ever shows strictly improving records.

use crate::core::Word;
use crate::output::print_record;
use crate::search::{Record, SequenceSearch};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::sync::atomic::AtomicUsize;
use std::time::{Duration, Instant};

/// Configuration for a hunt run
pub struct HuntConfig {
    /// Wall-clock budget per target
    pub budget: Duration,
    /// Number of passes over the target list; 0 means run forever
    pub passes: u64,
    /// Fan targets out over the rayon thread pool
    pub parallel: bool,
    /// Seed for dictionary shuffling; random when absent
    pub seed: Option<u64>,
}

/// Run the hunt over all targets
///
/// Each target gets its own shuffled copy of the dictionary (a different
/// shuffle per pass), its own deadline, and the shared best-length counter.
pub fn run_hunt(dictionary: &[Word], targets: &[Word], config: &HuntConfig) {
    let best = AtomicUsize::new(0);
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());

    let mut shuffled_targets = targets.to_vec();
    shuffled_targets.shuffle(&mut StdRng::seed_from_u64(base_seed));

    let mut pass: u64 = 0;
    loop {
        if config.passes != 0 && pass >= config.passes {
            break;
        }

        if config.parallel {
            hunt_pass_parallel(
                dictionary,
                &shuffled_targets,
                config.budget,
                base_seed,
                pass,
                &best,
            );
        } else {
            hunt_pass(
                dictionary,
                &shuffled_targets,
                config.budget,
                base_seed,
                pass,
                &best,
            );
        }

        pass += 1;
    }
}

/// One sequential pass over the targets, with a progress bar
fn hunt_pass(
    dictionary: &[Word],
    targets: &[Word],
    budget: Duration,
    base_seed: u64,
    pass: u64,
    best: &AtomicUsize,
) {
    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    for (index, target) in targets.iter().enumerate() {
        pb.set_message(target.text().to_string());
        hunt_target(
            dictionary,
            target,
            budget,
            target_seed(base_seed, pass, index),
            best,
            &|record| pb.suspend(|| print_record(record)),
        );
        pb.inc(1);
    }

    pb.finish_and_clear();
}

/// One pass with targets fanned out over the rayon pool
///
/// The shared atomic best keeps reports strictly increasing even when
/// several targets improve at nearly the same moment.
fn hunt_pass_parallel(
    dictionary: &[Word],
    targets: &[Word],
    budget: Duration,
    base_seed: u64,
    pass: u64,
    best: &AtomicUsize,
) {
    targets.par_iter().enumerate().for_each(|(index, target)| {
        hunt_target(
            dictionary,
            target,
            budget,
            target_seed(base_seed, pass, index),
            best,
            &|record| print_record(record),
        );
    });
}

/// Search one target with a freshly shuffled dictionary
fn hunt_target(
    dictionary: &[Word],
    target: &Word,
    budget: Duration,
    seed: u64,
    best: &AtomicUsize,
    report: &impl Fn(&Record),
) {
    let mut pool = dictionary.to_vec();
    pool.shuffle(&mut StdRng::seed_from_u64(seed));

    let search = SequenceSearch::new(&pool, Instant::now() + budget);
    search.run(target, best, report);
}

/// Deterministic per-target shuffle seed, distinct across passes
const fn target_seed(base_seed: u64, pass: u64, index: usize) -> u64 {
    base_seed
        .wrapping_add(pass.wrapping_mul(0x9e37_79b9_7f4a_7c15))
        .wrapping_add(index as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::atomic::Ordering;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn hunt_target_reports_records() {
        let dictionary = words(&["crane", "sooty", "robot", "rotor", "motor"]);
        let target = Word::new("robot").unwrap();
        let best = AtomicUsize::new(0);
        let records = RefCell::new(Vec::new());

        hunt_target(
            &dictionary,
            &target,
            Duration::from_secs(5),
            7,
            &best,
            &|record: &Record| records.borrow_mut().push(record.clone()),
        );

        let records = records.into_inner();
        assert!(!records.is_empty());
        assert_eq!(best.load(Ordering::Relaxed), records.last().unwrap().length);
    }

    #[test]
    fn hunt_target_zero_budget_is_prompt_and_silent() {
        let dictionary = words(&["crane", "sooty", "robot"]);
        let target = Word::new("robot").unwrap();
        let best = AtomicUsize::new(0);
        let records = RefCell::new(Vec::new());

        hunt_target(&dictionary, &target, Duration::ZERO, 7, &best, &|record: &Record| {
            records.borrow_mut().push(record.clone());
        });

        assert!(records.into_inner().is_empty());
        assert_eq!(best.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn target_seed_varies_by_pass_and_index() {
        let a = target_seed(1, 0, 0);
        let b = target_seed(1, 1, 0);
        let c = target_seed(1, 0, 1);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn run_hunt_single_pass_completes() {
        let dictionary = words(&["crane", "sooty", "robot", "rotor"]);
        let targets = words(&["robot"]);
        let config = HuntConfig {
            budget: Duration::from_millis(50),
            passes: 1,
            parallel: false,
            seed: Some(42),
        };

        // Finishes within the pass budget and does not panic
        run_hunt(&dictionary, &targets, &config);
    }
}
