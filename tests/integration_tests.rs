// Integration tests: word list loading, the engine and the text front end together

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use wordle_game::GameError;
use wordle_game::commands::run_simple;
use wordle_game::core::LetterFeedback::{Absent, Correct, Present};
use wordle_game::game::{GameEngine, MAX_HINTS, Outcome, RowStatus, SubmissionStatus};
use wordle_game::wordlists::{WORDS, loader};

#[test]
fn word_file_to_finished_game() {
    let path = std::env::temp_dir().join("wordle_game_integration_words.txt");
    std::fs::write(&path, "CRANE\n\nnot-a-word\n").unwrap();
    let words = loader::load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(words.len(), 1);
    let mut engine = GameEngine::new(words, StdRng::seed_from_u64(1)).unwrap();

    let first = engine.submit_guess("TRACE").unwrap();
    assert_eq!(
        first.feedback.letters(),
        &[Absent, Correct, Correct, Present, Correct]
    );

    let second = engine.submit_guess("crane").unwrap();
    assert_eq!(second.status, SubmissionStatus::Won { attempts: 2 });
    assert_eq!(engine.row_status(0), RowStatus::Submitted);
    assert_eq!(engine.row_status(2), RowStatus::Unreachable);
}

#[test]
fn empty_word_file_cannot_start_a_game() {
    let words = loader::load_from_str("\n\n12345\n");
    let result = GameEngine::new(words, StdRng::seed_from_u64(1));
    assert!(matches!(result, Err(GameError::EmptyWordList)));
}

#[test]
fn embedded_list_games_are_reproducible() {
    let play = |seed| {
        let mut engine =
            GameEngine::new(loader::words_from_slice(WORDS), StdRng::seed_from_u64(seed))
                .unwrap()
                .with_debug(true);
        let hint = engine.request_hint().unwrap();
        (engine.secret().cloned(), hint.column)
    };

    assert_eq!(play(99), play(99));
}

#[test]
fn hint_then_type_rest_of_row() {
    let mut engine =
        GameEngine::new(loader::words_from_slice(&["apple"]), StdRng::seed_from_u64(4)).unwrap();

    let hint = engine.request_hint().unwrap();
    for (column, letter) in "apple".chars().enumerate() {
        if column != hint.column {
            engine.enter_letter(column, letter).unwrap();
        }
    }
    assert_eq!(engine.request_hint(), Err(GameError::RowFull));
    assert_eq!(engine.hints_used(), 1);

    let result = engine.submit_pending().unwrap();
    assert_eq!(result.status, SubmissionStatus::Won { attempts: 1 });
    assert!(engine.is_hinted(0, hint.column));
}

#[test]
fn text_mode_full_session() {
    let mut engine =
        GameEngine::new(loader::words_from_slice(&["crane"]), StdRng::seed_from_u64(8)).unwrap();

    // Lose one game, play again, use all hints, then win and stop
    let input = "bbbbb\nddddd\nfffff\nggggg\nhhhhh\niiiii\nyes\nhint\nhint\nhint\nhint\ncrane\nno\n";
    run_simple(&mut engine, Cursor::new(input)).unwrap();

    assert_eq!(engine.outcome(), Outcome::Won);
    assert_eq!(engine.hints_used(), MAX_HINTS);
    assert_eq!(engine.active_row(), 0);
}
