//! Terminal output formatting
//!
//! Display utilities for the text front end.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_hint, print_submission, render_board};
