//! TUI application state and logic

use crate::core::{LetterVerdict, MAX_ATTEMPTS, WORD_LENGTH, Word};
use crate::error::GameError;
use crate::game::{GameOutcome, GameSession, Selector, parse_guess};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, G: Rng> {
    pub candidates: &'a [Word],
    pub selector: Selector<G>,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, G: Rng> App<'a, G> {
    /// Create the app and draw the first secret
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoCandidates` if `candidates` is empty.
    pub fn new(candidates: &'a [Word], mut selector: Selector<G>) -> Result<Self, GameError> {
        let session = GameSession::from_candidates(candidates, &mut selector)?;

        Ok(Self {
            candidates,
            selector,
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!("Guess the word in {MAX_ATTEMPTS} tries. Type letters, Enter to submit."),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if self.session.is_over() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < WORD_LENGTH {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    pub fn submit_guess(&mut self) {
        let Some(guess) = parse_guess(&self.input_buffer) else {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        };
        self.input_buffer.clear();

        let Some(turn) = self.session.submit(guess) else {
            return;
        };

        match self.session.outcome() {
            Some(GameOutcome::Won { attempt }) => {
                let label = turn.feedback.unwrap_or("Solved!");
                self.add_message(
                    &format!("{label} Solved in {attempt}/{MAX_ATTEMPTS}."),
                    MessageStyle::Success,
                );
                self.add_message("Press Enter for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Some(GameOutcome::Lost { secret }) => {
                self.add_message(
                    &format!("The correct answer is {secret}"),
                    MessageStyle::Error,
                );
                self.add_message("Press Enter for a new game or 'q' to quit.", MessageStyle::Info);
            }
            None => {}
        }
    }

    pub fn new_game(&mut self) {
        match GameSession::from_candidates(self.candidates, &mut self.selector) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
                info!("new game from the TUI");
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Best verdict seen so far for every guessed letter
    #[must_use]
    pub fn letter_states(&self) -> FxHashMap<char, LetterVerdict> {
        let mut states = FxHashMap::default();
        for (word, classification) in self.session.history() {
            for (letter, verdict) in word.letters().zip(classification.iter()) {
                let best = states.entry(letter).or_insert(verdict);
                *best = (*best).max(verdict);
            }
        }
        states
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<G: Rng>(app: App<G>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, G>(terminal: &mut Terminal<B>, mut app: App<G>) -> Result<()>
where
    B: ratatui::backend::Backend,
    G: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
