//! Game state machine
//!
//! The `GameEngine` owns the secret word, the board and the hint budget.
//! All mutation goes through its public operations, each of which either
//! applies fully or leaves the state untouched.

use super::board::{AttemptRow, PendingRow, RowStatus};
use crate::core::{Feedback, ROW_LENGTH, Word};
use crate::error::{GameError, GameResult};
use crate::wordlists::WordPool;
use log::{debug, info};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Number of guesses the player gets
pub const MAX_ATTEMPTS: usize = 6;

/// Number of hints the player may use per game
pub const MAX_HINTS: usize = 3;

/// Outcome of the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// What happened after a guess was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Play moves on to `next_row`
    Continue { next_row: usize },
    /// The guess matched the secret word
    Won { attempts: usize },
    /// The last row was used without a match
    Lost { secret: Word },
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub row: usize,
    pub guess: Word,
    pub feedback: Feedback,
    pub status: SubmissionStatus,
}

/// Result of a placed hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintResult {
    pub row: usize,
    pub column: usize,
    /// Revealed letter, lowercase
    pub letter: char,
    pub hints_used: usize,
    pub hints_remaining: usize,
}

/// Core game engine
///
/// Randomness (secret draw and hint placement) comes from the injected `rng`,
/// so a seeded generator makes a whole game reproducible.
pub struct GameEngine<R: Rng> {
    pool: WordPool,
    rng: R,
    secret: Word,
    rows: [AttemptRow; MAX_ATTEMPTS],
    active_row: usize,
    outcome: Outcome,
    hints_used: usize,
    hinted: FxHashSet<(usize, usize)>,
    pending: PendingRow,
    debug: bool,
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine and start the first game
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameEngine, Outcome, SubmissionStatus};
    ///
    /// let words = vec![Word::new("crane").unwrap()];
    /// let mut engine = GameEngine::new(words, StdRng::seed_from_u64(1)).unwrap();
    ///
    /// let result = engine.submit_guess("CRANE").unwrap();
    /// assert_eq!(result.status, SubmissionStatus::Won { attempts: 1 });
    /// assert_eq!(engine.outcome(), Outcome::Won);
    /// ```
    pub fn new(words: Vec<Word>, rng: R) -> GameResult<Self> {
        Ok(Self::from_pool(WordPool::new(words)?, rng))
    }

    /// Create an engine over an already validated pool
    pub fn from_pool(pool: WordPool, mut rng: R) -> Self {
        let secret = pool.draw(&mut rng).clone();
        let engine = Self {
            pool,
            rng,
            secret,
            rows: std::array::from_fn(AttemptRow::new),
            active_row: 0,
            outcome: Outcome::InProgress,
            hints_used: 0,
            hinted: FxHashSet::default(),
            pending: PendingRow::default(),
            debug: false,
        };
        engine.log_start();
        engine
    }

    /// Enable or disable debug mode, in which the secret word is always queryable
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Replace the word pool and start a fresh game
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if `words` is empty; the current
    /// game is left untouched in that case.
    pub fn start_new_game(&mut self, words: Vec<Word>) -> GameResult<()> {
        self.pool = WordPool::new(words)?;
        self.reset();
        Ok(())
    }

    /// Start a fresh game from the current pool
    ///
    /// Clears every submitted row, the hint budget and any pending input.
    pub fn reset(&mut self) {
        self.secret = self.pool.draw(&mut self.rng).clone();
        self.rows = std::array::from_fn(AttemptRow::new);
        self.active_row = 0;
        self.outcome = Outcome::InProgress;
        self.hints_used = 0;
        self.hinted.clear();
        self.pending = PendingRow::default();
        self.log_start();
    }

    fn log_start(&self) {
        info!("new game started from {} candidate words", self.pool.len());
        debug!("secret word is {}", self.secret);
    }

    /// Evaluate a complete guess against the secret word
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidGuess` unless `raw_input` is exactly five letters
    /// - `GameError::GameAlreadyOver` once the game is won or lost
    pub fn submit_guess(&mut self, raw_input: &str) -> GameResult<SubmissionResult> {
        let guess = Word::new(raw_input).map_err(|e| {
            debug!("rejected guess {raw_input:?}: {e}");
            GameError::InvalidGuess(raw_input.to_string())
        })?;
        self.ensure_in_progress()?;

        let row = self.active_row;
        let feedback = Feedback::calculate(&guess, &self.secret);
        self.rows[row].submit(guess.clone(), feedback);
        self.pending = PendingRow::default();
        info!("row {} guess {guess} scored {feedback}", row + 1);

        let status = if feedback.is_perfect() {
            self.outcome = Outcome::Won;
            info!("game won in {} attempts", row + 1);
            SubmissionStatus::Won { attempts: row + 1 }
        } else if row == MAX_ATTEMPTS - 1 {
            self.outcome = Outcome::Lost;
            info!("game lost, secret word was {}", self.secret);
            SubmissionStatus::Lost {
                secret: self.secret.clone(),
            }
        } else {
            self.active_row += 1;
            SubmissionStatus::Continue {
                next_row: self.active_row,
            }
        };

        Ok(SubmissionResult {
            row,
            guess,
            feedback,
            status,
        })
    }

    /// Submit whatever has been entered into the active row
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::submit_guess`]; a row with gaps is an invalid guess.
    pub fn submit_pending(&mut self) -> GameResult<SubmissionResult> {
        let input = self.pending.as_guess();
        self.submit_guess(&input)
    }

    /// Reveal the secret letter in a random empty cell of the active row
    ///
    /// The hint counter only moves when a letter is actually placed.
    ///
    /// # Errors
    ///
    /// - `GameError::GameAlreadyOver` once the game is won or lost
    /// - `GameError::NoHintsRemaining` after `MAX_HINTS` hints
    /// - `GameError::RowFull` if every cell of the active row is filled
    pub fn request_hint(&mut self) -> GameResult<HintResult> {
        self.ensure_in_progress()?;
        if self.hints_used >= MAX_HINTS {
            return Err(GameError::NoHintsRemaining);
        }

        if self.pending.is_full() {
            return Err(GameError::RowFull);
        }

        let empty = self.pending.empty_columns();
        let column = empty[self.rng.random_range(0..empty.len())];
        let letter = self.secret.char_at(column);
        self.pending.set(column, letter);
        self.hinted.insert((self.active_row, column));
        self.hints_used += 1;
        debug!(
            "hint {}/{MAX_HINTS} placed at row {} column {}",
            self.hints_used,
            self.active_row + 1,
            column + 1
        );

        Ok(HintResult {
            row: self.active_row,
            column,
            letter: char::from(letter),
            hints_used: self.hints_used,
            hints_remaining: self.hints_remaining(),
        })
    }

    /// Type a letter into a cell of the active row
    ///
    /// Overwriting a hinted cell turns it into an ordinary typed cell.
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidColumn` if `column` is outside the row
    /// - `GameError::InvalidGuess` if `letter` is not an ASCII letter
    /// - `GameError::GameAlreadyOver` once the game is won or lost
    pub fn enter_letter(&mut self, column: usize, letter: char) -> GameResult<()> {
        Self::check_column(column)?;
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidGuess(letter.to_string()));
        }
        self.ensure_in_progress()?;

        self.pending.set(column, letter as u8);
        self.hinted.remove(&(self.active_row, column));
        Ok(())
    }

    /// Erase a cell of the active row
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidColumn` if `column` is outside the row
    /// - `GameError::GameAlreadyOver` once the game is won or lost
    pub fn clear_letter(&mut self, column: usize) -> GameResult<()> {
        Self::check_column(column)?;
        self.ensure_in_progress()?;

        self.pending.clear(column);
        self.hinted.remove(&(self.active_row, column));
        Ok(())
    }

    fn check_column(column: usize) -> GameResult<()> {
        if column >= ROW_LENGTH {
            return Err(GameError::InvalidColumn(column));
        }
        Ok(())
    }

    fn ensure_in_progress(&self) -> GameResult<()> {
        if self.outcome == Outcome::InProgress {
            Ok(())
        } else {
            Err(GameError::GameAlreadyOver)
        }
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Index of the row accepting input (or the last row used once the game is over)
    #[must_use]
    pub const fn active_row(&self) -> usize {
        self.active_row
    }

    #[must_use]
    pub const fn rows(&self) -> &[AttemptRow; MAX_ATTEMPTS] {
        &self.rows
    }

    /// Status of row `index`
    ///
    /// # Panics
    /// Panics if `index >= MAX_ATTEMPTS`
    #[must_use]
    pub fn row_status(&self, index: usize) -> RowStatus {
        if self.rows[index].is_submitted() {
            RowStatus::Submitted
        } else if self.outcome != Outcome::InProgress {
            RowStatus::Unreachable
        } else if index == self.active_row {
            RowStatus::Active
        } else {
            RowStatus::Pending
        }
    }

    #[must_use]
    pub const fn hints_used(&self) -> usize {
        self.hints_used
    }

    #[must_use]
    pub const fn hints_remaining(&self) -> usize {
        MAX_HINTS - self.hints_used
    }

    /// Whether the letter at `(row, column)` was placed by a hint
    #[must_use]
    pub fn is_hinted(&self, row: usize, column: usize) -> bool {
        self.hinted.contains(&(row, column))
    }

    /// Letters entered so far into the active row
    #[must_use]
    pub const fn pending(&self) -> &PendingRow {
        &self.pending
    }

    /// The secret word, available once the game is over or in debug mode
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        (self.debug || self.is_over()).then_some(&self.secret)
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }
}
