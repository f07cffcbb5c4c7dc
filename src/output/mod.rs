//! Terminal output formatting

mod display;
mod formatters;

pub use display::{print_record, print_refinement, print_verify_step, print_verify_summary};
pub use formatters::{join_words, pattern_colored};
