//! Rordle - CLI
//!
//! Brainrot guessing game with TUI and console modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::TypedValueParser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rordle::{
    commands::{check_guess, print_dataset, run_simple},
    core::{DEFAULT_MAX_ATTEMPTS, DEFAULT_REVEAL_SECS, Game, GameConfig},
    dataset::{Dataset, loader::load_from_file},
    logging::init_logging,
    output::print_check_result,
};

#[derive(Parser)]
#[command(
    name = "rordle",
    about = "Brainrot Guesser: study the image, then guess the word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses per round
    #[arg(
        short = 'a',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    max_attempts: usize,

    /// Seconds the image is shown before guessing starts
    #[arg(short = 'r', long, global = true, default_value_t = DEFAULT_REVEAL_SECS)]
    reveal_secs: u32,

    /// Dataset: 'embedded' (default, built-in entries) or path to a TSV file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dataset: String,

    /// Seed for round selection (random if omitted)
    #[arg(short = 's', long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (line-based, no TUI)
    Simple,

    /// Evaluate a guess against a target word
    Check {
        /// The word to guess
        target: String,

        /// The guess to evaluate
        guess: String,
    },

    /// List the dataset entries
    List {
        /// Also show the words and image references
        #[arg(long)]
        reveal: bool,
    },
}

/// Load the dataset based on the -d flag
fn load_dataset(source: &str) -> Result<Dataset> {
    match source {
        "embedded" => Ok(Dataset::embedded()),
        path => load_from_file(path).with_context(|| format!("Failed to load dataset '{path}'")),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let dataset = load_dataset(&cli.dataset)?;
    let config = GameConfig::new(cli.max_attempts, cli.reveal_secs);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dataset, config, cli.seed),
        Commands::Simple => run_simple_command(&dataset, config, cli.seed),
        Commands::Check { target, guess } => run_check_command(&target, &guess),
        Commands::List { reveal } => {
            print_dataset(&dataset, reveal);
            Ok(())
        }
    }
}

fn run_check_command(target: &str, guess: &str) -> Result<()> {
    let result = check_guess(target, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result.target, &result.attempt);
    Ok(())
}

fn run_simple_command(dataset: &Dataset, config: GameConfig, seed: Option<u64>) -> Result<()> {
    let mut game = Game::new(dataset, config, make_rng(seed));
    run_simple(&mut game)
}

fn run_play_command(dataset: &Dataset, config: GameConfig, seed: Option<u64>) -> Result<()> {
    use rordle::interactive::{App, run_tui};

    let game = Game::new(dataset, config, make_rng(seed));
    run_tui(App::new(game))
}
