//! Terminal output formatting
//!
//! Display utilities for the console game and command results. This is the only
//! place (besides the TUI) that turns verdicts into colours.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_corpus_summary, write_attempt_header, write_outcome, write_turn,
};
