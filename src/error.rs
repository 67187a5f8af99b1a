//! Engine error types

use crate::core::WordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the game engine
///
/// A syntactically invalid guess is not an error: the input layer re-prompts and
/// nothing reaches the session.
#[derive(Debug, Error)]
pub enum GameError {
    /// The corpus yielded no 5-letter alphabetic word
    #[error("corpus contains no eligible 5-letter words")]
    NoCandidates,

    /// `evaluate` was handed something other than a 5-letter word
    #[error("{argument} must be exactly 5 letters, got {length}")]
    InvalidLength {
        argument: &'static str,
        length: usize,
    },

    /// A word given on the command line is not a valid 5-letter word
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// The corpus file could not be read
    #[error("failed to read corpus {}: {source}", .path.display())]
    Corpus {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a guess or writing a prompt failed
    #[error("input error: {0}")]
    Input(#[from] io::Error),

    /// The player kept typing invalid guesses
    #[error("gave up after {limit} invalid guesses in a row")]
    TooManyInvalidGuesses { limit: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
