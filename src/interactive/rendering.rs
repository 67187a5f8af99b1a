//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and message log for the game.

use super::app::{App, MessageStyle};
use crate::core::{LetterVerdict, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::SessionState;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<G: Rng>(f: &mut Frame, app: &App<G>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Board and messages
            Constraint::Length(5),  // Keyboard
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn verdict_style(verdict: LetterVerdict) -> Style {
    let bg = match verdict {
        LetterVerdict::Correct => Color::Green,
        LetterVerdict::Present => Color::Yellow,
        LetterVerdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<G: Rng>(f: &mut Frame, app: &App<G>, area: Rect) {
    let history = app.session.history();
    let mut lines = Vec::with_capacity(usize::from(MAX_ATTEMPTS));

    for (word, classification) in history {
        let spans: Vec<Span> = word
            .letters()
            .zip(classification.iter())
            .map(|(letter, verdict)| Span::styled(format!(" {letter} "), verdict_style(verdict)))
            .collect();
        lines.push(Line::from(spans));
    }

    if !app.session.is_over() {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .map(|i| {
                let letter = typed.get(i).copied().unwrap_or('_');
                Span::styled(
                    format!(" {letter} "),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        lines.push(Line::from(spans));
    }

    while lines.len() < usize::from(MAX_ATTEMPTS) {
        lines.push(Line::from(" ·  ·  ·  ·  · ").style(Style::default().fg(Color::DarkGray)));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<G: Rng>(f: &mut Frame, app: &App<G>, area: Rect) {
    let states: FxHashMap<char, LetterVerdict> = app.letter_states();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|key| {
                    let style = states
                        .get(&key)
                        .map_or_else(|| Style::default().fg(Color::White), |&v| verdict_style(v));
                    Span::styled(format!(" {key} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<G: Rng>(f: &mut Frame, app: &App<G>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<G: Rng>(f: &mut Frame, app: &App<G>, area: Rect) {
    let text = match app.session.state() {
        SessionState::AwaitingGuess { attempt } => format!(
            "Attempt {attempt}/{MAX_ATTEMPTS} | Enter: Submit | Backspace: Delete | Esc: Quit"
        ),
        SessionState::Won { .. } | SessionState::Lost => {
            "Enter/n: New Game | q/Esc: Quit".to_string()
        }
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
