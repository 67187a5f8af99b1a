//! Simple console game
//!
//! Line-based play: six attempts, a coloured row after each guess, feedback on a
//! win and the answer on a loss.

use crate::core::Word;
use crate::error::Result;
use crate::game::{GameOutcome, GameSession, GuessPrompt, Selector, SessionState};
use crate::output::{write_attempt_header, write_outcome, write_turn};
use log::info;
use rand::Rng;
use std::io::{BufRead, Write};

/// Play one game on the given reader and writer
///
/// Returns the outcome, or `None` if input ended before the game did.
///
/// # Errors
///
/// Returns `GameError::NoCandidates` if `candidates` is empty, or an input error
/// if reading guesses or writing output fails.
pub fn run_simple<G, R, W>(
    candidates: &[Word],
    selector: &mut Selector<G>,
    reader: R,
    writer: W,
) -> Result<Option<GameOutcome>>
where
    G: Rng,
    R: BufRead,
    W: Write,
{
    let mut session = GameSession::from_candidates(candidates, selector)?;
    let mut prompt = GuessPrompt::new(reader, writer);
    let mut feedback = None;

    while let SessionState::AwaitingGuess { attempt } = session.state() {
        write_attempt_header(prompt.writer(), attempt)?;

        let Some(guess) = prompt.next_guess()? else {
            info!("input ended on attempt {attempt}");
            return Ok(None);
        };
        let Some(turn) = session.submit(guess) else {
            break;
        };

        write_turn(prompt.writer(), &turn)?;
        feedback = turn.feedback;
    }

    let outcome = session.outcome();
    if let Some(outcome) = &outcome {
        info!("game over: {outcome:?}");
        write_outcome(prompt.writer(), outcome, feedback)?;
    }
    Ok(outcome)
}
