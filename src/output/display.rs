//! Display functions for console play and command results

use super::formatters::{attempt_row, create_progress_bar, keyboard_lines};
use crate::core::{GuessAttempt, Phase, RoundState, SessionStats};
use colored::Colorize;

/// Headline shown when a round ends
#[must_use]
pub fn result_message(round: &RoundState<'_>) -> Option<String> {
    let word = round.revealed_word()?;
    match round.phase() {
        Phase::Won => Some(format!("🎉 BRAINROT MASTERY! You guessed \"{word}\"! 🧠💯")),
        Phase::Lost => Some(format!(
            "💀 RIP BRAIN CELLS! The answer was \"{word}\" ({})",
            round.description()
        )),
        Phase::Revealing | Phase::Guessing => None,
    }
}

/// Print the reveal countdown line
pub fn print_reveal_tick(round: &RoundState<'_>) {
    let countdown = round.countdown();
    let bar = create_progress_bar(
        f64::from(countdown.total() - countdown.remaining()),
        f64::from(countdown.total()),
        30,
    );
    println!(
        "   [{}] {}s",
        bar.cyan(),
        countdown.remaining().to_string().bright_red().bold()
    );
}

/// Print the reveal screen header
pub fn print_reveal(round: &RoundState<'_>) {
    println!("\n{}", "═".repeat(60).magenta());
    println!(" {}", "BRAINROT ALERT! 🧠💀".bright_yellow().bold());
    println!("{}", "═".repeat(60).magenta());
    println!(
        "\n{}",
        "Study this image carefully! You'll need to guess what it is!".bright_cyan()
    );
    println!("\n   🖼  {}\n", round.image_url().underline());
}

/// Print the board: past attempts, remaining count and keyboard
pub fn print_board(round: &RoundState<'_>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Hint: {}", round.description().bright_black());
    println!("{}", "─".repeat(60).cyan());

    for attempt in round.attempts() {
        println!("   {}", attempt_row(attempt));
    }

    if !round.phase().is_terminal() {
        println!(
            "\nAttempt {} of {} | Target length: {} letters",
            round.attempts().len() + 1,
            round.config().max_attempts,
            round.target_len()
        );
    }

    println!();
    for line in keyboard_lines(round.letters()) {
        println!("   {line}");
    }
    println!();
}

/// Print the end-of-round message
pub fn print_round_result(round: &RoundState<'_>) {
    let Some(message) = result_message(round) else {
        return;
    };

    println!("\n{}", "═".repeat(60).bright_cyan());
    match round.phase() {
        Phase::Won => {
            println!("{}", message.bright_green().bold());
            println!(
                "✅ You correctly identified: {}",
                round.description().green()
            );
        }
        _ => {
            println!("{}", message.red().bold());
            println!("🖼  The image was: {}", round.image_url().underline());
        }
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print session statistics
pub fn print_stats(stats: &SessionStats) {
    println!(
        "\n📊 {} played | {} won | {:.0}% | streak {} (best {})",
        stats.games_played,
        stats.games_won,
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    );

    if stats.games_won == 0 {
        return;
    }
    for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let pct = count as f64 / stats.games_won as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 20);
        println!("   {attempts}: {} {count:3}", bar.green());
    }
}

/// Print the result of the check command
pub fn print_check_result(target: &str, attempt: &GuessAttempt) {
    println!(
        "Target: {} ({} letters)",
        target.to_uppercase().bright_yellow().bold(),
        target.chars().count()
    );
    println!("Guess:  {}", attempt_row(attempt));
    println!("        {}", attempt.to_emoji());

    if attempt.is_perfect() {
        println!("{}", "✅ Exact match".green().bold());
    }
}
