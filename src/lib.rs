//! Wordle Game
//!
//! A console Wordle: a secret five-letter word is drawn from any text corpus and the
//! player has six attempts to find it. Guesses are scored letter by letter, with
//! repeated letters matched at most as often as they occur in the secret.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::LetterVerdict::*;
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameSession, SessionState};
//!
//! let mut game = GameSession::new(Word::new("apple").unwrap());
//!
//! let turn = game.submit(Word::new("pleas").unwrap()).unwrap();
//! assert_eq!(turn.classification.verdicts(), &[Present, Present, Present, Present, Absent]);
//!
//! let turn = game.submit(Word::new("apple").unwrap()).unwrap();
//! assert_eq!(turn.state, SessionState::Won { attempt: 2 });
//! assert_eq!(turn.feedback, Some("Magnificent!"));
//! ```

// Core domain types and the guess evaluator
pub mod core;

// Engine errors
pub mod error;

// Corpus, selection, input and session state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::GameError;
