//! Game error types

use thiserror::Error;

/// Errors reported by the word source and the game engine
///
/// Every failing operation leaves the game state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The candidate word pool contained no words
    #[error("word list is empty, cannot pick a secret word")]
    EmptyWordList,
    /// The guess was not exactly five letters
    #[error("please enter a valid five-letter word (got {0:?})")]
    InvalidGuess(String),
    /// A guess or hint arrived after the game was won or lost
    #[error("the game is already over")]
    GameAlreadyOver,
    /// The hint budget is spent
    #[error("no more hints available")]
    NoHintsRemaining,
    /// Every cell of the active row is already filled
    #[error("free up a space for a hint")]
    RowFull,
    /// A pending-input edit addressed a column outside the row
    #[error("column {0} is outside the row")]
    InvalidColumn(usize),
}

/// Type alias for Results using `GameError`
pub type GameResult<T> = Result<T, GameError>;
