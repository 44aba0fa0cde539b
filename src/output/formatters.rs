//! Formatting utilities for terminal output

use crate::core::{GuessAttempt, KeyStatus, LetterBoard, Verdict};
use colored::{ColoredString, Colorize};

/// On-screen keyboard rows
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Colour one letter tile by its verdict
#[must_use]
pub fn verdict_tile(letter: Option<char>, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", letter.unwrap_or(' '));
    match verdict {
        Verdict::Correct => text.white().bold().on_green(),
        Verdict::Present => text.white().bold().on_yellow(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// Render an attempt as a row of coloured tiles
#[must_use]
pub fn attempt_row(attempt: &GuessAttempt) -> String {
    attempt
        .verdicts()
        .iter()
        .map(|v| verdict_tile(v.letter, v.verdict).to_string())
        .collect()
}

/// Render the keyboard as three lines coloured from the letter board
#[must_use]
pub fn keyboard_lines(board: &LetterBoard) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|c| key_label(c, board.status(c)).to_string())
                .collect();
            format!("{}{}", " ".repeat(i), keys.join(" "))
        })
        .collect()
}

fn key_label(c: char, status: KeyStatus) -> ColoredString {
    let text = c.to_string();
    match status {
        KeyStatus::Unused => text.normal(),
        KeyStatus::Correct => text.green().bold(),
        KeyStatus::Present => text.yellow().bold(),
        KeyStatus::Absent => text.bright_black().strikethrough(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        width
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
