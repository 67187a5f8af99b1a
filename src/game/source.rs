//! Candidate secret words from a text corpus
//!
//! Any readable text works: tokens are whitespace-delimited, surrounding ASCII
//! punctuation is stripped, and only tokens of exactly five letters survive.

use crate::core::Word;
use crate::error::{GameError, Result};
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Extract the candidate set from corpus text
///
/// Words are uppercased and deduplicated, keeping first-occurrence order.
///
/// # Errors
///
/// Returns `GameError::NoCandidates` if no token qualifies.
///
/// # Examples
/// ```
/// use wordle_game::game::source::candidates_from_text;
///
/// let words = candidates_from_text("\"Hello,\" said the ghost. Hello!").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "HELLO");
/// assert_eq!(words[1].text(), "GHOST");
/// ```
pub fn candidates_from_text(text: &str) -> Result<Vec<Word>> {
    let mut seen = FxHashSet::default();
    let mut tokens = 0usize;

    let words: Vec<Word> = text
        .split_whitespace()
        .inspect(|_| tokens += 1)
        .filter_map(|token| Word::new(strip_punctuation(token)).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect();

    debug!("scanned {tokens} corpus tokens");
    if words.is_empty() {
        return Err(GameError::NoCandidates);
    }

    info!("corpus yielded {} candidate words", words.len());
    Ok(words)
}

/// Load the candidate set from a corpus file
///
/// # Errors
///
/// Returns `GameError::Corpus` if the file cannot be read, or
/// `GameError::NoCandidates` if it holds no eligible word.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::Corpus {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("read {} bytes from {}", content.len(), path.display());
    candidates_from_text(&content)
}

fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation())
}
