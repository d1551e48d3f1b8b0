//! Wordle Game - CLI
//!
//! Five-letter word guessing game with TUI and simple text modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::run_simple,
    core::Word,
    game::GameEngine,
    wordlists::{WORDS, WORDS_COUNT, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for the random source, makes secret words and hints reproducible
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show the secret word while playing
    #[arg(long, global = true)]
    debug: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (line-based, no TUI)
    Simple,
}

/// Load the word pool based on the -w flag
fn load_words(path: Option<&Path>) -> Result<Vec<Word>> {
    match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display())),
        None => {
            debug!("using the embedded list of {WORDS_COUNT} words");
            Ok(loader::words_from_slice(WORDS))
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init()
        .unwrap_or(());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_words(cli.wordlist.as_deref())?;
    info!("word pool holds {} words", words.len());

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let engine = GameEngine::new(words, rng)
        .context("cannot start a game")?
        .with_debug(cli.debug);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(engine),
        Commands::Simple => run_simple_command(engine),
    }
}

fn run_simple_command(mut engine: GameEngine<StdRng>) -> Result<()> {
    run_simple(&mut engine, io::stdin().lock()).context("text mode failed")
}

fn run_play_command(engine: GameEngine<StdRng>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    run_tui(App::new(engine))
}
