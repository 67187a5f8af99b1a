//! Single evaluation command
//!
//! Scores one guess against a chosen secret without playing a game.

use crate::core::{Classification, Word, evaluate_words};
use crate::error::Result;

/// Result of evaluating a guess against a secret
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub classification: Classification,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns `GameError::InvalidWord` if either argument is not a 5-letter word.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let classification = evaluate_words(&secret, &guess);

    Ok(CheckResult {
        secret,
        guess,
        classification,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict::{Absent, Correct, Present};
    use crate::core::WordError;
    use crate::error::GameError;

    #[test]
    fn check_scores_guess() {
        let result = check_guess("speed", "erase").unwrap();
        assert_eq!(result.secret.text(), "SPEED");
        assert_eq!(result.guess.text(), "ERASE");
        assert_eq!(
            result.classification.verdicts(),
            &[Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn check_exact_match() {
        let result = check_guess("crane", "CRANE").unwrap();
        assert!(result.classification.is_perfect());
        assert_eq!(result.classification[0], Correct);
    }

    #[test]
    fn check_rejects_invalid_words() {
        assert!(matches!(
            check_guess("crane", "cranes"),
            Err(GameError::InvalidWord(WordError::InvalidLength(6)))
        ));
        assert!(matches!(
            check_guess("cr4ne", "crane"),
            Err(GameError::InvalidWord(WordError::InvalidCharacters))
        ));
    }
}
