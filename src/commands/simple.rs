//! Simple interactive text mode
//!
//! Line-based game front end without a TUI. Reads one command per line:
//! a five-letter guess (`_` keeps a hinted letter), `hint`, `new`, `show`,
//! or `quit`.

use crate::core::ROW_LENGTH;
use crate::error::GameError;
use crate::game::{GameEngine, MAX_ATTEMPTS, PendingRow};
use crate::output::{print_board, print_hint, print_submission};
use colored::Colorize;
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Characters that stand for "keep whatever is already in this cell"
const GAP_MARKS: [char; 2] = ['_', '.'];

/// What the player asked for on one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Hint,
    NewGame,
    Board,
    Quit,
}

impl Command {
    /// Parse a trimmed input line
    ///
    /// A row-length line of letters and gap marks is always a guess, so no
    /// word can be shadowed by a command name. Anything else that is not a
    /// keyword is passed on as a guess and rejected by the engine.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if is_guess_shaped(input) {
            return Self::Guess(input.to_string());
        }
        match input.to_lowercase().as_str() {
            "hint" | "h" | "?" => Self::Hint,
            "new" | "n" => Self::NewGame,
            "show" | "b" => Self::Board,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Guess(input.to_string()),
        }
    }
}

fn is_guess_shaped(input: &str) -> bool {
    input.chars().count() == ROW_LENGTH
        && input
            .chars()
            .all(|c| c.is_ascii_alphabetic() || GAP_MARKS.contains(&c))
}

/// Fill gap marks in `guess` from the letters already in the active row
///
/// Gaps with nothing behind them stay blank, which the engine rejects.
fn fill_gaps(guess: &str, pending: &PendingRow) -> String {
    guess
        .chars()
        .enumerate()
        .map(|(column, c)| {
            if GAP_MARKS.contains(&c) {
                pending.get(column).unwrap_or(' ')
            } else {
                c
            }
        })
        .collect()
}

/// Run the simple interactive text mode until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple<R: Rng, I: BufRead>(engine: &mut GameEngine<R>, mut input: I) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Guess the Five-Letter Word                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("You have {MAX_ATTEMPTS} attempts to guess the secret word. After each guess:\n");
    println!("  - {} letter is in the correct position", "green".bright_green());
    println!("  - {} letter is in the word, wrong position", "yellow".bright_yellow());
    println!("  - {} letter is not in the word\n", "gray".bright_black());
    println!("Commands: 'hint' to reveal a letter, 'new' for new game, 'show' to redraw, 'quit' to exit");
    println!("Type '_' in a guess to keep a letter revealed by a hint, e.g. 'cr_ne'\n");

    announce_game(engine);

    loop {
        let Some(line) = get_user_input(&mut input, "Your guess")? else {
            return Ok(());
        };

        match Command::parse(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                engine.reset();
                println!("\n🔄 New game started!");
                announce_game(engine);
            }
            Command::Board => print_board(engine),
            Command::Hint => match engine.request_hint() {
                Ok(hint) => {
                    print_hint(&hint);
                    print_board(engine);
                }
                Err(e) => report(&e),
            },
            Command::Guess(guess) => {
                let guess = fill_gaps(&guess, engine.pending());
                match engine.submit_guess(&guess) {
                    Ok(result) => {
                        print_board(engine);
                        print_submission(&result);

                        if engine.is_over() {
                            if !play_again(&mut input)? {
                                println!("\n👋 Thanks for playing!\n");
                                return Ok(());
                            }
                            engine.reset();
                            println!("\n🔄 New game started!");
                            announce_game(engine);
                        }
                    }
                    Err(e) => report(&e),
                }
            }
        }
    }
}

fn announce_game<R: Rng>(engine: &GameEngine<R>) {
    println!(
        "{}",
        format!("A secret word was drawn from {} candidates.", engine.pool().len()).bright_black()
    );
    if let Some(secret) = engine.secret() {
        println!("{}", format!("[debug] secret word: {secret}").bright_black());
    }
    print_board(engine);
}

fn report(error: &GameError) {
    debug!("command rejected: {error:?}");
    println!("❌ {}", capitalize(&error.to_string()).red());
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn play_again<I: BufRead>(input: &mut I) -> io::Result<bool> {
    let answer = get_user_input(input, "Play again? (yes/no)")?;
    Ok(matches!(
        answer.map(|a| a.to_lowercase()).as_deref(),
        Some("yes" | "y")
    ))
}

/// Get user input with a prompt; `None` once input is exhausted
fn get_user_input<I: BufRead>(input: &mut I, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
