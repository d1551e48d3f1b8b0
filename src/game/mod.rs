//! Game engine
//!
//! Owns a single game: the secret word, six attempt rows, the hint budget and
//! the partially typed active row.

mod board;
mod engine;

pub use board::{AttemptRow, PendingRow, RowStatus, Submission};
pub use engine::{
    GameEngine, HintResult, MAX_ATTEMPTS, MAX_HINTS, Outcome, SubmissionResult, SubmissionStatus,
};
