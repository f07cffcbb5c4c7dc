//! Wordle Marathon
//!
//! An adversarial Wordle analyzer: instead of solving quickly, it hunts for
//! the *longest* possible games. For a fixed hidden target it searches for
//! sequences of legal guesses, each consistent with all prior feedback,
//! that delay reaching the target for as many turns as possible.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_marathon::core::{Pattern, Word};
//! use wordle_marathon::search::Deductions;
//!
//! let guess = Word::new("coots").unwrap();
//! let target = Word::new("scoot").unwrap();
//!
//! // Score a guess against a target
//! let pattern = Pattern::calculate(&guess, &target);
//! assert_eq!(pattern.to_string(), "YYGYY");
//!
//! // Accumulate deductions and test candidates against them
//! let mut state = Deductions::new();
//! state.update(&guess, pattern);
//! assert!(state.is_consistent(&target));
//! ```

// Core domain types
pub mod core;

// The deduction engine and the adversarial searches
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
