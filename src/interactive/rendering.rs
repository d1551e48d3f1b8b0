//! TUI rendering with ratatui
//!
//! Board, message log and status bar for the game.

use super::app::{App, MessageStyle};
use crate::core::{LetterFeedback, ROW_LENGTH};
use crate::game::{AttemptRow, MAX_ATTEMPTS, MAX_HINTS, Outcome, RowStatus};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let title = match (app.engine.outcome(), app.engine.secret()) {
        (Outcome::InProgress, Some(secret)) => {
            format!("🔤 GUESS THE WORD  [debug: {}]", secret.text().to_uppercase())
        }
        _ => "🔤 GUESS THE WORD".to_string(),
    };

    let header = Paragraph::new(title)
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

fn feedback_style(feedback: LetterFeedback) -> Style {
    let bg = match feedback {
        LetterFeedback::Correct => Color::LightGreen,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in app.engine.rows() {
        let mut spans = vec![Span::raw(format!(" {} ", row.index() + 1))];
        for column in 0..ROW_LENGTH {
            spans.push(board_cell(app, row, column));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

/// One cell of the board; hinted letters stay underlined after submission
fn board_cell<R: Rng>(app: &App<R>, row: &AttemptRow, column: usize) -> Span<'static> {
    let engine = &app.engine;
    let index = row.index();
    let hinted = engine.is_hinted(index, column);

    let (text, mut style) = match (engine.row_status(index), row.submission()) {
        (RowStatus::Submitted, Some(submission)) => (
            format!(
                " {} ",
                char::from(submission.guess.char_at(column)).to_ascii_uppercase()
            ),
            feedback_style(submission.feedback.at(column)),
        ),
        (RowStatus::Active, _) => {
            let letter = engine
                .pending()
                .get(column)
                .map_or('_', |c| c.to_ascii_uppercase());
            let mut style = Style::default().fg(Color::White);
            if hinted {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if column == app.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            (format!(" {letter} "), style)
        }
        (RowStatus::Unreachable, _) => (" · ".to_string(), Style::default().fg(Color::DarkGray)),
        _ => (" _ ".to_string(), Style::default().fg(Color::DarkGray)),
    };

    if hinted {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    Span::styled(text, style)
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Hint gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_hints(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_hints<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let remaining = app.engine.hints_remaining();
    let percent = (remaining * 100 / MAX_HINTS) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Hints ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{remaining}/{MAX_HINTS} remaining"));

    f.render_widget(gauge, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
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

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let engine = &app.engine;
    let status_text = match engine.outcome() {
        Outcome::InProgress => format!("Attempt {} of {MAX_ATTEMPTS}", engine.active_row() + 1),
        Outcome::Won => "You win!".to_string(),
        Outcome::Lost => "Game over".to_string(),
    };
    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[0]);

    let help_text = if engine.is_over() {
        "n/Enter: Play again | q: Quit"
    } else {
        "Enter: Submit | Tab: Hint | ←/→: Move | Ctrl+R: Reset | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameEngine;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_board_and_status() {
        let engine =
            GameEngine::new(words_from_slice(&["crane"]), StdRng::seed_from_u64(2)).unwrap();
        let mut app = App::new(engine);
        app.engine.submit_guess("trace").unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Attempt 2 of 6"));
        assert!(text.contains("3/3 remaining"));
        assert!(text.contains(" T "));
    }

    #[test]
    fn hinted_cell_stays_marked_after_submission() {
        let engine =
            GameEngine::new(words_from_slice(&["crane"]), StdRng::seed_from_u64(2)).unwrap();
        let mut app = App::new(engine);
        let hint = app.engine.request_hint().unwrap();
        for (column, letter) in "crane".chars().enumerate() {
            if column != hint.column {
                app.engine.enter_letter(column, letter).unwrap();
            }
        }
        app.engine.submit_pending().unwrap();

        let row = &app.engine.rows()[0];
        let hinted = board_cell(&app, row, hint.column);
        let other = board_cell(&app, row, (hint.column + 1) % ROW_LENGTH);

        assert!(hinted.style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(!other.style.add_modifier.contains(Modifier::UNDERLINED));
        assert_eq!(hinted.style.bg, Some(Color::LightGreen));
    }
}
