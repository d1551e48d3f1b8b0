//! Board rows and the partially typed active row

use crate::core::{Feedback, ROW_LENGTH, Word};

/// A guess that has been evaluated against the secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Where a row stands in the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    /// Not reached yet
    Pending,
    /// Currently accepting input
    Active,
    /// Evaluated and immutable
    Submitted,
    /// The game ended before this row was used
    Unreachable,
}

/// One guess slot on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRow {
    index: usize,
    submission: Option<Submission>,
}

impl AttemptRow {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            submission: None,
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.submission.as_ref().map(|s| &s.feedback)
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submission.is_some()
    }

    /// Record the evaluated guess; a row is written at most once per game
    pub(crate) fn submit(&mut self, guess: Word, feedback: Feedback) {
        debug_assert!(self.submission.is_none(), "row {} already submitted", self.index);
        self.submission = Some(Submission { guess, feedback });
    }
}

/// Letters entered so far into the active row
///
/// Cells may be filled out of order (hints land on random cells), so each
/// cell is tracked separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingRow {
    cells: [Option<u8>; ROW_LENGTH],
}

impl PendingRow {
    /// Letter at `column`, lowercase
    #[must_use]
    pub fn get(&self, column: usize) -> Option<char> {
        self.cells.get(column).copied().flatten().map(char::from)
    }

    #[must_use]
    pub fn is_filled(&self, column: usize) -> bool {
        self.get(column).is_some()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Columns that hold no letter, in ascending order
    #[must_use]
    pub fn empty_columns(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.is_none().then_some(i))
            .collect()
    }

    /// Render the row as a guess string; empty cells become spaces
    ///
    /// A row with gaps therefore never validates as a guess.
    #[must_use]
    pub fn as_guess(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or(' ', char::from))
            .collect()
    }

    pub(crate) fn set(&mut self, column: usize, letter: u8) {
        self.cells[column] = Some(letter.to_ascii_lowercase());
    }

    pub(crate) fn clear(&mut self, column: usize) {
        self.cells[column] = None;
    }
}
