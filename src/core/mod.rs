//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types and the guess evaluator.
//! Everything here is pure: no I/O, no randomness.

mod evaluator;
mod verdict;
mod word;

pub use evaluator::{evaluate, evaluate_words};
pub use verdict::{Classification, LetterVerdict};
pub use word::{Word, WordError};

/// Letters in every secret word and every guess
pub const WORD_LENGTH: usize = 5;

/// Attempts a player gets before the secret is disclosed
pub const MAX_ATTEMPTS: u8 = 6;
