//! Adversarial search for maximally long games
//!
//! This module holds the deduction engine and the two searches built on it:
//! the depth-first hunt for long guess sequences and the insertion-based
//! refinement of known sequences.

mod deduction;
mod refine;
mod sequence;

pub use deduction::{Deductions, LetterSet};
pub use refine::Refinements;
pub use sequence::{Record, SequenceSearch, replay};
