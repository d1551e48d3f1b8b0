//! Formatting utilities for terminal output

use crate::core::LetterFeedback;
use colored::{ColoredString, Colorize};

/// Format one board cell as a colored tile like " A "
///
/// Unevaluated cells (typed or hinted letters, or blanks) have no background.
#[must_use]
pub fn letter_tile(letter: Option<char>, feedback: Option<LetterFeedback>) -> ColoredString {
    let text = format!(" {} ", letter.map_or('_', |c| c.to_ascii_uppercase()));
    match feedback {
        Some(LetterFeedback::Correct) => text.black().on_bright_green().bold(),
        Some(LetterFeedback::Present) => text.black().on_bright_yellow().bold(),
        Some(LetterFeedback::Absent) => text.white().on_bright_black(),
        None => text.bright_white(),
    }
}

/// Create a meter string of `filled` marks out of `width`
#[must_use]
pub fn create_meter(filled: usize, width: usize) -> String {
    let filled = filled.min(width);
    format!("{}{}", "●".repeat(filled), "○".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_is_clamped() {
        assert_eq!(create_meter(2, 3), "●●○");
        assert_eq!(create_meter(0, 3), "○○○");
        assert_eq!(create_meter(5, 3), "●●●");
    }

    #[test]
    fn tile_text_is_uppercase() {
        colored::control::set_override(false);
        assert_eq!(letter_tile(Some('a'), None).to_string(), " A ");
        assert_eq!(
            letter_tile(Some('q'), Some(LetterFeedback::Correct)).to_string(),
            " Q "
        );
        assert_eq!(letter_tile(None, None).to_string(), " _ ");
    }
}
