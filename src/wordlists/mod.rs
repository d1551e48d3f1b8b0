//! Word source for the game
//!
//! Provides the embedded default word list, file loading, and the random
//! secret-word draw.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::WordPool;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_build_a_pool() {
        let pool = WordPool::new(loader::words_from_slice(WORDS)).unwrap();
        assert_eq!(pool.len(), WORDS_COUNT);
    }
}
