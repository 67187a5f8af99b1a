//! Display functions for game events and command results

use super::formatters::{classification_to_emoji, colorize_guess};
use crate::commands::{CheckResult, CorpusSummary};
use crate::game::{GameOutcome, Turn};
use colored::Colorize;
use std::io::{self, Write};

/// Header printed before each attempt
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_attempt_header<W: Write>(out: &mut W, attempt: u8) -> io::Result<()> {
    writeln!(out, "Attempt {attempt}")
}

/// Coloured row for an evaluated guess
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_turn<W: Write>(out: &mut W, turn: &Turn) -> io::Result<()> {
    writeln!(out, "{}", colorize_guess(&turn.guess, &turn.classification))
}

/// Closing message: the feedback label on a win, the secret on a loss
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &GameOutcome,
    feedback: Option<&str>,
) -> io::Result<()> {
    match outcome {
        GameOutcome::Won { .. } => {
            if let Some(label) = feedback {
                writeln!(out, "{}", label.bright_green().bold())?;
            }
        }
        GameOutcome::Lost { secret } => {
            writeln!(out, "The correct answer is {secret}")?;
        }
    }
    Ok(())
}

/// Print the result of a single evaluation
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().bright_white().bold(),
        result.secret.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\n  {}  {}",
        colorize_guess(&result.guess, &result.classification),
        classification_to_emoji(&result.classification)
    );
    println!(
        "  Correct: {}  Present: {}",
        result.classification.count_correct().to_string().green(),
        result.classification.count_present().to_string().yellow()
    );
    if result.classification.is_perfect() {
        println!("\n{}", "✅ Exact match".green().bold());
    }
}

/// Print how many candidates a corpus yields
pub fn print_corpus_summary(summary: &CorpusSummary) {
    println!(
        "{} candidate words in {}",
        summary.count.to_string().bright_yellow().bold(),
        summary.path.display()
    );
    if !summary.sample.is_empty() {
        let sample: Vec<&str> = summary.sample.iter().map(|w| w.text()).collect();
        println!("  e.g. {}", sample.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameSession;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn attempt_header() {
        assert_eq!(render(|out| write_attempt_header(out, 3)), "Attempt 3\n");
    }

    #[test]
    fn turn_row() {
        let mut game = GameSession::new(Word::new("slate").unwrap());
        let turn = game.submit(Word::new("crane").unwrap()).unwrap();
        assert_eq!(render(|out| write_turn(out, &turn)), "CRANE\n");
    }

    #[test]
    fn loss_discloses_secret() {
        let outcome = GameOutcome::Lost {
            secret: Word::new("slate").unwrap(),
        };
        assert_eq!(
            render(|out| write_outcome(out, &outcome, None)),
            "The correct answer is SLATE\n"
        );
    }

    #[test]
    fn win_prints_label() {
        let outcome = GameOutcome::Won { attempt: 2 };
        assert_eq!(
            render(|out| write_outcome(out, &outcome, Some("Magnificent!"))),
            "Magnificent!\n"
        );
    }
}
