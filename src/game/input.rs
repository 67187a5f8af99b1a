//! Reading guesses from a line-oriented source
//!
//! Invalid lines are rejected here and re-prompted; they never reach the session
//! and never cost an attempt.

use crate::core::{WORD_LENGTH, Word};
use crate::error::{GameError, Result};
use log::debug;
use std::io::{BufRead, Write};

/// Prompt shown before every guess
pub const PROMPT: &str = "Please enter your 5 letter guess: ";

/// Consecutive invalid lines tolerated before giving up
pub const DEFAULT_MAX_RETRIES: usize = 100;

/// Check whether a raw line is an acceptable guess
///
/// Only the line terminator is stripped, so padding spaces make a line invalid.
/// Case is not significant.
#[must_use]
pub fn is_valid_guess(raw: &str) -> bool {
    let line = strip_line_ending(raw);
    line.len() == WORD_LENGTH && line.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parse a raw line into an uppercase guess
#[must_use]
pub fn parse_guess(raw: &str) -> Option<Word> {
    if is_valid_guess(raw) {
        Word::new(strip_line_ending(raw)).ok()
    } else {
        None
    }
}

fn strip_line_ending(raw: &str) -> &str {
    raw.trim_end_matches(['\r', '\n'])
}

/// Prompts for guesses until a valid one arrives
///
/// Also usable as an iterator that yields only valid guesses and stops at end of
/// input.
pub struct GuessPrompt<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    max_retries: usize,
}

impl<R: BufRead, W: Write> GuessPrompt<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    #[must_use]
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Access the output side, for callers that print between prompts
    pub const fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Read the next valid guess
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Input` on I/O failure, or
    /// `GameError::TooManyInvalidGuesses` after `max_retries` invalid lines in a row.
    pub fn next_guess(&mut self) -> Result<Option<Word>> {
        let mut rejected = 0;
        loop {
            write!(self.writer, "{PROMPT}")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            if let Some(guess) = parse_guess(&line) {
                return Ok(Some(guess));
            }

            rejected += 1;
            debug!(
                "rejected guess {:?} ({rejected} in a row)",
                strip_line_ending(&line)
            );
            if rejected >= self.max_retries {
                return Err(GameError::TooManyInvalidGuesses {
                    limit: self.max_retries,
                });
            }
        }
    }
}

impl<R: BufRead, W: Write> Iterator for GuessPrompt<R, W> {
    type Item = Result<Word>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_guess().transpose()
    }
}
