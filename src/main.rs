//! Wordle Game - CLI
//!
//! Console and full-screen Wordle with secrets drawn from any text corpus.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{check_guess, run_simple, summarize_corpus},
    core::Word,
    game::{Selector, load_from_file},
    output::{print_check_result, print_corpus_summary},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus text file to draw the secret word from (prompted for if omitted)
    corpus: Option<PathBuf>,

    /// Seed the secret word selection for a reproducible game
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based console game (default)
    Simple,

    /// Full-screen terminal game
    Play,

    /// Score a guess against a secret word
    Check {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Count the candidate words in the corpus
    Words,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    if let Commands::Check { secret, guess } = &command {
        let result = check_guess(secret, guess)?;
        print_check_result(&result);
        return Ok(());
    }

    let corpus = match cli.corpus {
        Some(path) => path,
        None => prompt_filename()?,
    };

    if matches!(command, Commands::Words) {
        let summary = summarize_corpus(&corpus)?;
        print_corpus_summary(&summary);
        return Ok(());
    }

    let candidates = load_candidates(&corpus)?;
    match cli.seed {
        Some(seed) => {
            info!("using seed {seed}");
            run_game(&command, &candidates, Selector::seeded(seed))
        }
        None => run_game(&command, &candidates, Selector::default()),
    }
}

fn load_candidates(corpus: &Path) -> Result<Vec<Word>> {
    load_from_file(corpus)
        .with_context(|| format!("cannot start a game from {}", corpus.display()))
}

fn run_game<G: Rng>(command: &Commands, candidates: &[Word], mut selector: Selector<G>) -> Result<()> {
    match command {
        Commands::Play => run_play_command(candidates, selector),
        _ => {
            let stdin = io::stdin();
            run_simple(candidates, &mut selector, stdin.lock(), io::stdout())?;
            Ok(())
        }
    }
}

fn run_play_command<G: Rng>(candidates: &[Word], selector: Selector<G>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(candidates, selector)?;
    run_tui(app)
}

/// Ask for the corpus path, as the game does when none is given
fn prompt_filename() -> Result<PathBuf> {
    print!("Please enter the filename: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let name = input.trim();
    anyhow::ensure!(!name.is_empty(), "no corpus file given");

    Ok(PathBuf::from(name))
}
