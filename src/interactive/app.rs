//! TUI application state and logic

use crate::core::ROW_LENGTH;
use crate::error::GameError;
use crate::game::{GameEngine, MAX_ATTEMPTS, SubmissionStatus};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<R: Rng> {
    pub engine: GameEngine<R>,
    /// Column of the active row that receives the next typed letter
    pub cursor: usize,
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

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(engine: GameEngine<R>) -> Self {
        Self {
            engine,
            cursor: 0,
            messages: vec![
                Message {
                    text: format!("Welcome! Guess the five-letter word in {MAX_ATTEMPTS} tries."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, Tab for a hint.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => self.new_game(),
                _ => {}
            }
            return;
        }

        if self.engine.is_over() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {
                    // Board is frozen until a new game starts
                }
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.request_hint(),
            KeyCode::Enter => self.submit(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(ROW_LENGTH - 1),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = ROW_LENGTH - 1,
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.clear_cell(self.cursor),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.type_letter(c),
            _ => {}
        }
    }

    fn type_letter(&mut self, letter: char) {
        if let Err(e) = self.engine.enter_letter(self.cursor, letter) {
            self.report(&e);
            return;
        }
        if self.cursor < ROW_LENGTH - 1 {
            self.cursor += 1;
        }
    }

    /// Erase the cell under the cursor, or step left and erase when it is empty
    fn backspace(&mut self) {
        if !self.engine.pending().is_filled(self.cursor) && self.cursor > 0 {
            self.cursor -= 1;
        }
        self.clear_cell(self.cursor);
    }

    fn clear_cell(&mut self, column: usize) {
        if let Err(e) = self.engine.clear_letter(column) {
            self.report(&e);
        }
    }

    pub fn submit(&mut self) {
        let result = match self.engine.submit_pending() {
            Ok(result) => result,
            Err(e) => {
                self.report(&e);
                return;
            }
        };
        self.cursor = 0;

        match result.status {
            SubmissionStatus::Continue { .. } => self.add_message(
                &format!(
                    "{} {}",
                    result.guess.text().to_uppercase(),
                    result.feedback.to_emoji()
                ),
                MessageStyle::Info,
            ),
            SubmissionStatus::Won { attempts } => {
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Congratulations, you win!",
                    2 | 3 => "🔥 SPLENDID! Congratulations, you win!",
                    _ => "🎉 Congratulations, you win!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Play again? Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SubmissionStatus::Lost { secret } => {
                self.add_message(
                    &format!(
                        "Sorry you didn't win this time! The correct word was: {}",
                        secret.text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
                self.add_message("Play again? Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn request_hint(&mut self) {
        match self.engine.request_hint() {
            Ok(hint) => self.add_message(
                &format!(
                    "💡 Letter {} goes in position {} ({} left)",
                    hint.letter.to_ascii_uppercase(),
                    hint.column + 1,
                    hint.hints_remaining
                ),
                MessageStyle::Success,
            ),
            Err(e) => self.report(&e),
        }
    }

    pub fn new_game(&mut self) {
        self.engine.reset();
        self.cursor = 0;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    fn report(&mut self, error: &GameError) {
        debug!("action rejected: {error:?}");
        let text = match error {
            GameError::InvalidGuess(_) => "Please enter a valid five-letter word.".to_string(),
            GameError::NoHintsRemaining => "No more hints available.".to_string(),
            GameError::RowFull => "Free up a space for a hint.".to_string(),
            other => other.to_string(),
        };
        self.add_message(&text, MessageStyle::Error);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
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
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MAX_HINTS, Outcome, PendingRow};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> App<StdRng> {
        let engine =
            GameEngine::new(words_from_slice(&["crane"]), StdRng::seed_from_u64(11)).unwrap();
        App::new(engine)
    }

    fn press(app: &mut App<StdRng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<StdRng>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn last_message(app: &App<StdRng>) -> &str {
        &app.messages.last().unwrap().text
    }

    #[test]
    fn typing_fills_cells_and_advances_cursor() {
        let mut app = app();
        type_word(&mut app, "cra");
        assert_eq!(app.cursor, 3);
        assert_eq!(app.engine.pending().as_guess(), "cra  ");
    }

    #[test]
    fn cursor_stays_on_last_cell() {
        let mut app = app();
        type_word(&mut app, "slatex");
        assert_eq!(app.cursor, ROW_LENGTH - 1);
        assert_eq!(app.engine.pending().as_guess(), "slatx");
    }

    #[test]
    fn backspace_steps_left_over_empty_cell() {
        let mut app = app();
        type_word(&mut app, "cr");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.cursor, 1);
        assert_eq!(app.engine.pending().as_guess(), "c    ");
    }

    #[test]
    fn incomplete_row_is_rejected() {
        let mut app = app();
        type_word(&mut app, "cra");
        press(&mut app, KeyCode::Enter);
        assert_eq!(last_message(&app), "Please enter a valid five-letter word.");
        assert_eq!(app.engine.active_row(), 0);
    }

    #[test]
    fn submitting_moves_to_next_row() {
        let mut app = app();
        type_word(&mut app, "trace");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine.active_row(), 1);
        assert_eq!(app.cursor, 0);
        assert_eq!(last_message(&app), "TRACE ⬜🟩🟩🟨🟩");
    }

    #[test]
    fn win_freezes_board_until_new_game() {
        let mut app = app();
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine.outcome(), Outcome::Won);

        type_word(&mut app, "abc");
        assert_eq!(*app.engine.pending(), PendingRow::default());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.engine.outcome(), Outcome::InProgress);
        assert_eq!(last_message(&app), "New game started!");
    }

    #[test]
    fn hint_messages() {
        let mut app = app();
        for _ in 0..MAX_HINTS {
            press(&mut app, KeyCode::Tab);
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(last_message(&app), "No more hints available.");
    }

    #[test]
    fn hint_on_full_row() {
        let mut app = app();
        type_word(&mut app, "slate");
        press(&mut app, KeyCode::Tab);
        assert_eq!(last_message(&app), "Free up a space for a hint.");
        assert_eq!(app.engine.hints_used(), 0);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_r_resets() {
        let mut app = app();
        type_word(&mut app, "slate");
        press(&mut app, KeyCode::Enter);
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.engine.active_row(), 0);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
