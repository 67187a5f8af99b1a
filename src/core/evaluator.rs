//! Guess evaluation
//!
//! Compares a guess against the secret word and classifies every letter.
//!
//! # Algorithm
//! 1. Count the secret's letters into a pool of remaining occurrences
//! 2. First pass: mark exact position matches (greens) and remove them from the pool
//! 3. Second pass: for every other position, mark the letter present (yellow) only
//!    while the pool still holds an occurrence of it, consuming one each time
//!
//! A letter appearing k times in the secret is therefore matched at most k times
//! across the whole guess, and an exact match is never pre-empted by an earlier
//! yellow for the same letter.

use super::{Classification, LetterVerdict, WORD_LENGTH, Word};
use crate::error::{GameError, Result};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Evaluate `guess` against `secret`
///
/// Both arguments are compared case-insensitively.
///
/// # Errors
/// Returns `GameError::InvalidLength` if either argument is not exactly 5 characters.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, LetterVerdict::*};
///
/// let result = evaluate("SLATE", "CRANE").unwrap();
/// assert_eq!(result.verdicts(), &[Absent, Absent, Correct, Absent, Correct]);
/// ```
pub fn evaluate(secret: &str, guess: &str) -> Result<Classification> {
    let secret = to_letters(secret, "secret")?;
    let guess = to_letters(guess, "guess")?;
    Ok(classify(&secret, &guess))
}

/// Evaluate a validated guess against a validated secret
#[must_use]
pub fn evaluate_words(secret: &Word, guess: &Word) -> Classification {
    classify(secret.chars(), guess.chars())
}

fn to_letters(word: &str, argument: &'static str) -> Result<[char; WORD_LENGTH]> {
    let letters: Vec<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
    letters.try_into().map_err(|letters: Vec<char>| {
        GameError::InvalidLength {
            argument,
            length: letters.len(),
        }
    })
}

fn classify<T>(secret: &[T; WORD_LENGTH], guess: &[T; WORD_LENGTH]) -> Classification
where
    T: Copy + Eq + Hash,
{
    let mut verdicts = [LetterVerdict::Absent; WORD_LENGTH];
    let mut remaining: FxHashMap<T, u8> = FxHashMap::default();
    for &letter in secret {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    // First pass: greens
    for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            verdicts[i] = LetterVerdict::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows, consuming from what the greens left over
    for (i, &g) in guess.iter().enumerate() {
        if verdicts[i] == LetterVerdict::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            verdicts[i] = LetterVerdict::Present;
            *count -= 1;
        }
    }

    Classification::new(verdicts)
}
