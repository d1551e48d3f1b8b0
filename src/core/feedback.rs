//! Per-letter feedback calculation and representation
//!
//! Each position of a submitted guess is classified as:
//! - `Correct`: the letter matches the secret word at that position
//! - `Present`: the letter occurs somewhere else in the secret word
//! - `Absent`: the letter does not occur in the secret word
//!
//! Presence is a plain containment test. Repeated letters in a guess are not
//! balanced against the letters already matched, so every copy of a letter
//! found in the secret word is marked at least `Present`.

use super::{ROW_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

impl LetterFeedback {
    /// Emoji tile for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code: G (green), Y (yellow), - (gray)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; ROW_LENGTH]);

impl Feedback {
    /// All letters in the correct position
    pub const PERFECT: Self = Self([LetterFeedback::Correct; ROW_LENGTH]);

    /// Calculate the feedback when `guess` is evaluated against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::calculate(&guess, &secret).letters(),
    ///     &[Absent, Correct, Correct, Present, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; ROW_LENGTH];

        for (i, (&letter, &target)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            result[i] = if letter == target {
                LetterFeedback::Correct
            } else if secret.has_letter(letter) {
                LetterFeedback::Present
            } else {
                LetterFeedback::Absent
            };
        }

        Self(result)
    }

    /// Per-position classifications
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; ROW_LENGTH] {
        &self.0
    }

    /// Classification at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterFeedback {
        self.0[position]
    }

    /// Whether every letter is in its correct position
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert feedback to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter.code())?;
        }
        Ok(())
    }
}
