//! Formatting utilities for terminal output

use crate::core::{Classification, LetterVerdict, Word};
use colored::{ColoredString, Colorize};

/// Colour one guessed letter by its verdict
#[must_use]
pub fn colorize_letter(letter: char, verdict: LetterVerdict) -> ColoredString {
    let text = letter.to_string();
    match verdict {
        LetterVerdict::Correct => text.green().bold(),
        LetterVerdict::Present => text.yellow().bold(),
        LetterVerdict::Absent => text.red(),
    }
}

/// Render a guess with each letter coloured by its verdict
#[must_use]
pub fn colorize_guess(guess: &Word, classification: &Classification) -> String {
    guess
        .letters()
        .zip(classification.iter())
        .map(|(letter, verdict)| colorize_letter(letter, verdict).to_string())
        .collect()
}

/// Format a classification as emoji string
#[must_use]
pub fn classification_to_emoji(classification: &Classification) -> String {
    classification.to_emoji()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate_words;

    #[test]
    fn emoji_all_absent() {
        let secret = Word::new("fghij").unwrap();
        let guess = Word::new("abcde").unwrap();
        let emoji = classification_to_emoji(&evaluate_words(&secret, &guess));
        assert_eq!(emoji, "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_correct() {
        assert_eq!(
            classification_to_emoji(&Classification::PERFECT),
            "🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn colorized_guess_keeps_letters_in_order() {
        colored::control::set_override(false);
        let secret = Word::new("slate").unwrap();
        let guess = Word::new("crane").unwrap();
        let rendered = colorize_guess(&guess, &evaluate_words(&secret, &guess));
        assert_eq!(rendered, "CRANE");
    }
}
