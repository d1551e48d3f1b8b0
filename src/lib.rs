//! Wordle Game
//!
//! A single-player five-letter word guessing game: six attempts, per-letter
//! feedback after each guess, and up to three hints per game.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use wordle_game::game::{GameEngine, SubmissionStatus};
//! use wordle_game::wordlists::{WORDS, loader::words_from_slice};
//!
//! let mut engine = GameEngine::new(words_from_slice(WORDS), StdRng::seed_from_u64(7)).unwrap();
//!
//! let hint = engine.request_hint().unwrap();
//! println!("position {} is '{}'", hint.column + 1, hint.letter);
//!
//! let result = engine.submit_guess("crane").unwrap();
//! println!("{}", result.feedback.to_emoji());
//! if let SubmissionStatus::Won { attempts } = result.status {
//!     println!("won in {attempts}");
//! }
//! ```

// Core domain types
pub mod core;

// Error types shared by the word source and the engine
pub mod error;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{GameError, GameResult};
