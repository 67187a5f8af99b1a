//! Game engine
//!
//! Corpus loading, secret selection, guess input and the session state machine.

pub mod feedback;
pub mod input;
pub mod selector;
pub mod session;
pub mod source;

pub use feedback::feedback_label;
pub use input::{GuessPrompt, is_valid_guess, parse_guess};
pub use selector::Selector;
pub use session::{GameOutcome, GameSession, SessionState, Turn};
pub use source::{candidates_from_text, load_from_file};
