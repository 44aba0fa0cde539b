//! Guess checking command
//!
//! Evaluates an arbitrary guess against an arbitrary target without playing a round.

use crate::core::{GuessAttempt, Verdict};

/// Result of checking a guess
pub struct CheckResult {
    pub target: String,
    pub guess: String,
    pub attempt: GuessAttempt,
}

impl CheckResult {
    #[must_use]
    pub fn correct(&self) -> usize {
        self.attempt.count(Verdict::Correct)
    }

    #[must_use]
    pub fn present(&self) -> usize {
        self.attempt.count(Verdict::Present)
    }
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either string is blank.
pub fn check_guess(target: &str, guess: &str) -> Result<CheckResult, String> {
    let target = target.trim();
    let guess = guess.trim();

    if target.is_empty() {
        return Err("Target word must not be empty".to_string());
    }
    if guess.is_empty() {
        return Err("Guess must not be empty".to_string());
    }

    Ok(CheckResult {
        target: target.to_uppercase(),
        guess: guess.to_uppercase(),
        attempt: GuessAttempt::evaluate(target, guess),
    })
}
