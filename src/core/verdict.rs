//! Per-letter verdicts and the classification of a whole guess
//!
//! A classification is the only artifact the evaluator produces. It carries the
//! abstract verdict for each position; colours and glyphs belong to the front ends.

use super::WORD_LENGTH;
use std::fmt;
use std::ops::Index;

/// Relationship of one guessed letter to the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterVerdict {
    /// Letter is not in the word (or all its occurrences are already matched)
    Absent,
    /// Letter is in the word, at a different position
    Present,
    /// Letter is in the correct position
    Correct,
}

impl LetterVerdict {
    /// Single-character code: G (correct), Y (present), - (absent)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Square emoji used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Verdicts for a whole guess, positionally aligned with the guess letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification([LetterVerdict; WORD_LENGTH]);

impl Classification {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterVerdict::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(verdicts: [LetterVerdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Always WORD_LENGTH
    pub const fn len(&self) -> usize {
        WORD_LENGTH
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterVerdict> + '_ {
        self.0.iter().copied()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.iter().filter(|&v| v == LetterVerdict::Correct).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.iter().filter(|&v| v == LetterVerdict::Present).count()
    }

    /// Convert to emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Classification, LetterVerdict::*};
    ///
    /// let c = Classification::new([Correct, Present, Absent, Correct, Present]);
    /// assert_eq!(c.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(LetterVerdict::emoji).collect()
    }
}

impl Index<usize> for Classification {
    type Output = LetterVerdict;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in self.iter() {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}
