//! Simple console mode
//!
//! Line-based game loop without the TUI

use crate::core::{Game, RoundId, SessionStats, SubmitOutcome, TICK_INTERVAL, TickOutcome};
use crate::output::{print_board, print_reveal, print_reveal_tick, print_round_result, print_stats};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::thread;

/// What the player typed at the guess prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Stats,
    Guess(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "/quit" | "/q" | "/exit" => Self::Quit,
            "/new" | "/n" => Self::New,
            "/stats" => Self::Stats,
            _ => Self::Guess(input.to_string()),
        }
    }
}

/// Run the simple console mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<R: Rng>(game: &mut Game<'_, R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   RORDLE - Guess the brainrot                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let config = game.config();
    println!(
        "Watch the image for {} seconds, then guess what it represents.",
        config.reveal_secs
    );
    println!("You have {} attempts to get it right.\n", config.max_attempts);
    println!("Commands: '/quit' to exit, '/new' to skip to a new challenge, '/stats' for stats\n");

    if !get_user_input("Press Enter to START (or 'q' to quit)")?.is_empty() {
        println!("\n👋 Thanks for playing!\n");
        return Ok(());
    }

    let mut stats = SessionStats::new();

    loop {
        let id = game.start_round();
        run_reveal(game, id);

        let finished = loop {
            if let Some(round) = game.round() {
                print_board(round);
            }

            let input = get_user_input("Your guess")?;
            match Command::parse(&input) {
                Command::Quit => {
                    game.quit();
                    print_stats(&stats);
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Command::New => break false,
                Command::Stats => print_stats(&stats),
                Command::Guess(text) => {
                    if let Some(round) = game.round_mut() {
                        round.set_input(&text);
                    }
                    match game.submit() {
                        SubmitOutcome::Ignored => println!("{}", "Type something first!".red()),
                        SubmitOutcome::Recorded => {}
                        SubmitOutcome::Won | SubmitOutcome::Lost => break true,
                    }
                }
            }
        };

        if finished && let Some(round) = game.round() {
            print_board(round);
            print_round_result(round);
            stats.record(round);
            print_stats(&stats);
        }

        match get_user_input("\nNext challenge? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "" | "yes" | "y" => {
                println!("\n🔄 New challenge!\n");
            }
            _ => {
                game.quit();
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Show the image and block until the countdown ends
fn run_reveal<R: Rng>(game: &mut Game<'_, R>, id: RoundId) {
    if let Some(round) = game.round() {
        print_reveal(round);
        print_reveal_tick(round);
    }

    let mut delay = game.config().first_tick_delay();
    loop {
        thread::sleep(delay);
        delay = TICK_INTERVAL;
        match game.tick(id) {
            TickOutcome::Counting(_) => {
                if let Some(round) = game.round() {
                    print_reveal_tick(round);
                }
            }
            TickOutcome::Revealed | TickOutcome::Ignored => break,
        }
    }

    println!(
        "\n{}",
        "Time's up! What was that image? Type your guess!".bright_yellow()
    );
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        anyhow::bail!("stdin closed");
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("/quit"), Command::Quit);
        assert_eq!(Command::parse(" /Q "), Command::Quit);
        assert_eq!(Command::parse("/new"), Command::New);
        assert_eq!(Command::parse("/stats"), Command::Stats);
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(Command::parse("quit"), Command::Guess("quit".to_string()));
        assert_eq!(Command::parse("rizz"), Command::Guess("rizz".to_string()));
        assert_eq!(Command::parse(""), Command::Guess(String::new()));
    }
}
