//! Word list loading and secret-word selection
//!
//! Provides functions to load word lists from files or embedded constants,
//! and the uniform random draw of a secret word from a pool.

use crate::core::Word;
use crate::error::{GameError, GameResult};
use log::{debug, warn};
use rand::Rng;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Blank lines are skipped; lines that are not five ASCII letters are skipped
/// with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = load_from_str(&content);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a newline-delimited word list
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::load_from_str;
///
/// let words = load_from_str("crane\n\n  SLATE \nab1de\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
/// ```
#[must_use]
pub fn load_from_str(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("skipping word list line {}: {trimmed:?} ({e})", line_no + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// A non-empty pool of candidate secret words
///
/// Emptiness is rejected once at construction, so drawing cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    /// Wrap a candidate list
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<Word>) -> GameResult<Self> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Choose a word uniformly at random
    pub fn draw<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn load_from_str_skips_blank_and_invalid_lines() {
        let words = load_from_str("crane\n\n   \nsl@te\nTRACE\r\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "trace"]);
    }

    #[test]
    fn load_from_file_reads_every_line() {
        let path = std::env::temp_dir().join("wordle_game_loader_test.txt");
        fs::write(&path, "apple\ncrane\n").unwrap();

        let words = load_from_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "apple");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn word_pool_draw_is_deterministic_for_a_seed() {
        let pool = WordPool::new(words_from_slice(&["crane", "slate", "apple", "trace"])).unwrap();
        let first = pool.draw(&mut StdRng::seed_from_u64(42)).clone();
        let second = pool.draw(&mut StdRng::seed_from_u64(42)).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn word_pool_rejects_empty() {
        assert_eq!(WordPool::new(Vec::new()), Err(GameError::EmptyWordList));
    }

    #[test]
    fn word_pool_draw_covers_all_words() {
        let pool = WordPool::new(words_from_slice(&["crane", "slate"])).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen_crane = false;
        let mut seen_slate = false;
        for _ in 0..100 {
            match pool.draw(&mut rng).text() {
                "crane" => seen_crane = true,
                "slate" => seen_slate = true,
                other => panic!("unexpected word {other}"),
            }
        }
        assert!(seen_crane && seen_slate);
        assert_eq!(pool.len(), 2);
    }
}
