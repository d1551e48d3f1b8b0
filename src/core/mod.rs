//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with no I/O and no randomness.
//! All types here are pure and testable in isolation.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use word::{ROW_LENGTH, Word, WordError};
