//! Game session state machine
//!
//! ```text
//! AwaitingGuess(1) --wrong--> AwaitingGuess(2) --wrong--> ... AwaitingGuess(6) --wrong--> Lost
//!        |                          |                               |
//!        +--------correct-----------+------------correct------------+--> Won(n)
//! ```
//!
//! Only valid words can be submitted, so every submission consumes an attempt.

use super::feedback::feedback_label;
use super::selector::Selector;
use super::source::candidates_from_text;
use crate::core::{Classification, MAX_ATTEMPTS, Word, evaluate_words};
use crate::error::Result;
use log::debug;
use rand::Rng;

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for guess number `attempt` (1..=6)
    AwaitingGuess { attempt: u8 },
    /// Guessed correctly on `attempt`
    Won { attempt: u8 },
    /// Six wrong guesses
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingGuess { .. })
    }
}

/// Final result of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Won { attempt: u8 },
    /// Carries the secret so the caller can disclose it
    Lost { secret: Word },
}

/// One evaluated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub attempt: u8,
    pub guess: Word,
    pub classification: Classification,
    /// State after this guess
    pub state: SessionState,
    /// Set only when this guess won the game
    pub feedback: Option<&'static str>,
}

/// A single game against one secret word
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    state: SessionState,
    history: Vec<(Word, Classification)>,
}

impl GameSession {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            state: SessionState::AwaitingGuess { attempt: 1 },
            history: Vec::with_capacity(MAX_ATTEMPTS.into()),
        }
    }

    /// Start a session with a secret drawn from `candidates`
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoCandidates` if `candidates` is empty.
    pub fn from_candidates<R: Rng>(candidates: &[Word], selector: &mut Selector<R>) -> Result<Self> {
        let secret = selector.choose(candidates)?;
        debug!("new session, secret {secret}");
        Ok(Self::new(secret))
    }

    /// Start a session with a secret drawn from raw corpus text
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoCandidates` if the corpus has no eligible word.
    pub fn from_corpus<R: Rng>(text: &str, selector: &mut Selector<R>) -> Result<Self> {
        let candidates = candidates_from_text(text)?;
        Self::from_candidates(&candidates, selector)
    }

    /// Submit a guess for the current attempt
    ///
    /// Returns `None` without changing anything once the session is over.
    pub fn submit(&mut self, guess: Word) -> Option<Turn> {
        let SessionState::AwaitingGuess { attempt } = self.state else {
            return None;
        };

        let classification = evaluate_words(&self.secret, &guess);
        self.state = if guess == self.secret {
            SessionState::Won { attempt }
        } else if attempt >= MAX_ATTEMPTS {
            SessionState::Lost
        } else {
            SessionState::AwaitingGuess {
                attempt: attempt + 1,
            }
        };
        debug!("attempt {attempt}: {guess} -> {classification}, now {:?}", self.state);

        let feedback = match self.state {
            SessionState::Won { attempt } => feedback_label(attempt),
            _ => None,
        };
        self.history.push((guess.clone(), classification));

        Some(Turn {
            attempt,
            guess,
            classification,
            state: self.state,
            feedback,
        })
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Attempt number of the next guess, or of the winning guess
    ///
    /// Returns `None` after a loss.
    #[must_use]
    pub const fn attempt(&self) -> Option<u8> {
        match self.state {
            SessionState::AwaitingGuess { attempt } | SessionState::Won { attempt } => {
                Some(attempt)
            }
            SessionState::Lost => None,
        }
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> u8 {
        match self.state {
            SessionState::AwaitingGuess { attempt } => MAX_ATTEMPTS - attempt + 1,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Guesses so far with their classifications, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Classification)] {
        &self.history
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            SessionState::AwaitingGuess { .. } => None,
            SessionState::Won { attempt } => Some(GameOutcome::Won { attempt }),
            SessionState::Lost => Some(GameOutcome::Lost {
                secret: self.secret.clone(),
            }),
        }
    }

    /// The secret, available only once the game is lost
    #[must_use]
    pub const fn disclosed_secret(&self) -> Option<&Word> {
        match self.state {
            SessionState::Lost => Some(&self.secret),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict::{Absent, Correct, Present};
    use crate::error::GameError;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn session(secret: &str) -> GameSession {
        GameSession::new(word(secret))
    }

    #[test]
    fn starts_awaiting_first_guess() {
        let game = session("crane");
        assert_eq!(game.state(), SessionState::AwaitingGuess { attempt: 1 });
        assert_eq!(game.attempts_remaining(), 6);
        assert!(!game.is_over());
        assert_eq!(game.outcome(), None);
        assert_eq!(game.disclosed_secret(), None);
    }

    #[test]
    fn first_guess_win() {
        let mut game = session("crane");
        let turn = game.submit(word("crane")).unwrap();

        assert_eq!(turn.attempt, 1);
        assert!(turn.classification.is_perfect());
        assert_eq!(turn.state, SessionState::Won { attempt: 1 });
        assert_eq!(turn.feedback, Some("Genius!"));
        assert_eq!(game.outcome(), Some(GameOutcome::Won { attempt: 1 }));
    }

    #[test]
    fn wrong_guess_advances_attempt() {
        let mut game = session("slate");
        let turn = game.submit(word("crane")).unwrap();

        assert_eq!(turn.attempt, 1);
        assert_eq!(
            turn.classification.verdicts(),
            &[Absent, Absent, Correct, Absent, Correct]
        );
        assert_eq!(turn.feedback, None);
        assert_eq!(game.state(), SessionState::AwaitingGuess { attempt: 2 });
        assert_eq!(game.attempts_remaining(), 5);
    }

    #[test]
    fn win_on_nth_attempt() {
        for n in 1..=MAX_ATTEMPTS {
            let mut game = session("slate");
            for _ in 1..n {
                game.submit(word("crane")).unwrap();
            }
            let turn = game.submit(word("slate")).unwrap();
            assert_eq!(turn.state, SessionState::Won { attempt: n });
            assert_eq!(turn.feedback, feedback_label(n));
            assert_eq!(game.history().len(), usize::from(n));
        }
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut game = session("slate");
        for attempt in 1..=5 {
            let turn = game.submit(word("crane")).unwrap();
            assert_eq!(
                turn.state,
                SessionState::AwaitingGuess {
                    attempt: attempt + 1
                }
            );
        }
        let last = game.submit(word("crane")).unwrap();

        assert_eq!(last.attempt, 6);
        assert_eq!(last.state, SessionState::Lost);
        assert_eq!(last.feedback, None);
        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.attempt(), None);
        assert_eq!(game.disclosed_secret(), Some(&word("slate")));
        assert_eq!(
            game.outcome(),
            Some(GameOutcome::Lost {
                secret: word("slate")
            })
        );
    }

    #[test]
    fn win_on_last_attempt_is_not_a_loss() {
        let mut game = session("slate");
        for _ in 0..5 {
            game.submit(word("crane")).unwrap();
        }
        let turn = game.submit(word("slate")).unwrap();
        assert_eq!(turn.state, SessionState::Won { attempt: 6 });
        assert_eq!(turn.feedback, Some("Phew!"));
        assert_eq!(game.disclosed_secret(), None);
    }

    #[test]
    fn terminal_session_ignores_further_guesses() {
        let mut won = session("crane");
        won.submit(word("crane")).unwrap();
        assert!(won.submit(word("slate")).is_none());
        assert_eq!(won.state(), SessionState::Won { attempt: 1 });
        assert_eq!(won.history().len(), 1);

        let mut lost = session("crane");
        for _ in 0..6 {
            lost.submit(word("slate")).unwrap();
        }
        assert!(lost.submit(word("crane")).is_none());
        assert_eq!(lost.state(), SessionState::Lost);
        assert_eq!(lost.history().len(), 6);
    }

    #[test]
    fn history_keeps_guess_order() {
        let mut game = session("floor");
        game.submit(word("robot")).unwrap();
        game.submit(word("crane")).unwrap();

        let guesses: Vec<&str> = game.history().iter().map(|(w, _)| w.text()).collect();
        assert_eq!(guesses, ["ROBOT", "CRANE"]);
        assert_eq!(
            game.history()[0].1.verdicts(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn from_candidates_empty_is_no_candidates() {
        let mut selector = Selector::seeded(3);
        assert!(matches!(
            GameSession::from_candidates(&[], &mut selector),
            Err(GameError::NoCandidates)
        ));
    }

    #[test]
    fn from_corpus_without_words_is_no_candidates() {
        let mut selector = Selector::seeded(3);
        assert!(matches!(
            GameSession::from_corpus("a an the 1234567", &mut selector),
            Err(GameError::NoCandidates)
        ));
    }

    #[test]
    fn single_word_corpus_fixes_secret() {
        let mut selector = Selector::seeded(3);
        let mut game = GameSession::from_corpus("An apple a day.", &mut selector).unwrap();

        let turn = game.submit(word("pleas")).unwrap();
        assert_eq!(
            turn.classification.verdicts(),
            &[Present, Present, Present, Present, Absent]
        );

        let turn = game.submit(word("apple")).unwrap();
        assert_eq!(turn.state, SessionState::Won { attempt: 2 });
        assert_eq!(turn.feedback, Some("Magnificent!"));
    }
}
