//! Display functions for the text front end

use super::formatters::{create_meter, letter_tile};
use crate::core::ROW_LENGTH;
use crate::game::{
    GameEngine, HintResult, MAX_ATTEMPTS, MAX_HINTS, RowStatus, SubmissionResult, SubmissionStatus,
};
use colored::Colorize;
use rand::Rng;

/// Render the whole board, one line per attempt row
///
/// Letters placed by hints are shown underlined, on the active row and on
/// rows that have already been submitted.
#[must_use]
pub fn render_board<R: Rng>(engine: &GameEngine<R>) -> String {
    let mut out = String::new();

    for row in engine.rows() {
        let index = row.index();
        let status = engine.row_status(index);
        let marker = if status == RowStatus::Active { '▶' } else { ' ' };
        out.push_str(&format!("  {marker} {} ", index + 1));

        for column in 0..ROW_LENGTH {
            let tile = match (status, row.submission()) {
                (RowStatus::Submitted, Some(submission)) => letter_tile(
                    Some(char::from(submission.guess.char_at(column))),
                    Some(submission.feedback.at(column)),
                ),
                (RowStatus::Active, _) => letter_tile(engine.pending().get(column), None),
                _ => letter_tile(None, None).bright_black(),
            };
            let tile = if engine.is_hinted(index, column) {
                tile.underline()
            } else {
                tile
            };
            out.push_str(&tile.to_string());
        }

        if let Some(feedback) = row.feedback() {
            out.push_str("  ");
            out.push_str(&feedback.to_emoji());
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "  Hints: {} ({} left)\n",
        create_meter(engine.hints_remaining(), MAX_HINTS),
        engine.hints_remaining()
    ));
    out
}

pub fn print_board<R: Rng>(engine: &GameEngine<R>) {
    println!("\n{}", render_board(engine));
}

/// Print the message that goes with an accepted guess
pub fn print_submission(result: &SubmissionResult) {
    println!(
        "Row {}: {} {}",
        result.row + 1,
        result.guess.text().to_uppercase().bold(),
        result.feedback.to_emoji()
    );

    match &result.status {
        SubmissionStatus::Continue { next_row } => {
            println!("{}", format!("Attempt {} of {MAX_ATTEMPTS}", next_row + 1).bright_black());
        }
        SubmissionStatus::Won { attempts } => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!("{}", "  🎉 Congratulations, you win! 🎉".bright_green().bold());
            println!(
                "  Solved in {} {}",
                attempts.to_string().bright_cyan().bold(),
                if *attempts == 1 { "guess" } else { "guesses" }
            );
            println!("{}", "═".repeat(40).bright_cyan());
        }
        SubmissionStatus::Lost { secret } => {
            println!("\n{}", "═".repeat(40).bright_red());
            println!(
                "  Sorry you didn't win this time! The correct word was: {}",
                secret.text().to_uppercase().bright_yellow().bold()
            );
            println!("{}", "═".repeat(40).bright_red());
        }
    }
}

/// Print where a hint landed
pub fn print_hint(hint: &HintResult) {
    println!(
        "💡 Hint: letter {} goes in position {} ({} hint{} left)",
        hint.letter.to_ascii_uppercase().to_string().cyan().bold(),
        hint.column + 1,
        hint.hints_remaining,
        if hint.hints_remaining == 1 { "" } else { "s" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn board_shows_submitted_rows_and_hint_count() {
        colored::control::set_override(false);
        let mut engine =
            GameEngine::new(words_from_slice(&["crane"]), StdRng::seed_from_u64(5)).unwrap();
        engine.submit_guess("trace").unwrap();
        engine.request_hint().unwrap();

        let board = render_board(&engine);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].contains(" T  R  A  C  E "));
        assert!(lines[0].ends_with("⬜🟩🟩🟨🟩"));
        assert!(lines[1].contains('▶'));
        assert!(lines[6].contains("(2 left)"));
    }
}
