//! Round state machine
//!
//! A round moves `Revealing -> Guessing -> Won | Lost`. Every player action is
//! a method on [`RoundState`]; actions that make no sense in the current phase
//! are silent no-ops.

use super::letters::LetterBoard;
use super::timer::{Countdown, TICK_INTERVAL, Tick};
use super::verdict::{GuessAttempt, normalize};
use crate::dataset::Entry;
use log::{debug, info};
use std::fmt;
use std::time::Duration;

/// Default number of guesses per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Default length of the image reveal, in seconds
pub const DEFAULT_REVEAL_SECS: u32 = 5;

/// Tunables for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub reveal_secs: u32,
}

impl GameConfig {
    /// Build a config; a round always allows at least one guess
    #[must_use]
    pub const fn new(max_attempts: usize, reveal_secs: u32) -> Self {
        Self {
            max_attempts: if max_attempts == 0 { 1 } else { max_attempts },
            reveal_secs,
        }
    }

    /// Wait before the first reveal tick
    #[must_use]
    pub const fn first_tick_delay(&self) -> Duration {
        if self.reveal_secs == 0 {
            Duration::ZERO
        } else {
            TICK_INTERVAL
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            reveal_secs: DEFAULT_REVEAL_SECS,
        }
    }
}

/// Identifies one round so late timer ticks can be told apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(u64);

impl RoundId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Revealing,
    Guessing,
    Won,
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a submit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input or wrong phase; nothing changed
    Ignored,
    /// Attempt recorded, still guessing
    Recorded,
    Won,
    Lost,
}

/// What a timer tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Wrong round, wrong phase or countdown already over
    Ignored,
    /// Still revealing; seconds left
    Counting(u32),
    /// Reveal finished, now guessing
    Revealed,
}

/// Everything owned by one round
#[derive(Debug, Clone)]
pub struct RoundState<'a> {
    id: RoundId,
    entry: &'a Entry,
    config: GameConfig,
    phase: Phase,
    attempts: Vec<GuessAttempt>,
    input: String,
    letters: LetterBoard,
    countdown: Countdown,
}

impl<'a> RoundState<'a> {
    /// Start a fresh round for `entry` in the revealing phase
    #[must_use]
    pub fn new(id: RoundId, entry: &'a Entry, config: GameConfig) -> Self {
        let config = GameConfig::new(config.max_attempts, config.reveal_secs);
        debug!(
            "round {id} started: {} letters, {} attempts, {}s reveal",
            entry.word_len(),
            config.max_attempts,
            config.reveal_secs
        );

        Self {
            id,
            entry,
            config,
            phase: Phase::Revealing,
            attempts: Vec::new(),
            input: String::new(),
            letters: LetterBoard::new(),
            countdown: Countdown::new(config.reveal_secs),
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> RoundId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[GuessAttempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterBoard {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Length of the target word, safe to show during play
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.entry.word_len()
    }

    /// The answer, only once the round is over
    #[must_use]
    pub fn revealed_word(&self) -> Option<&str> {
        self.phase.is_terminal().then(|| self.entry.word())
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        self.entry.image_url()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.entry.description()
    }

    /// Guesses left before the round is lost
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.attempts.len())
    }

    /// Append a typed character (uppercased); ignored outside guessing
    pub fn push_char(&mut self, c: char) {
        if self.phase != Phase::Guessing || c.is_control() {
            return;
        }
        self.input.extend(c.to_uppercase());
    }

    /// Remove the last typed character; ignored outside guessing
    pub fn backspace(&mut self) {
        if self.phase == Phase::Guessing {
            self.input.pop();
        }
    }

    /// Replace the whole input line; ignored outside guessing
    pub fn set_input(&mut self, text: &str) {
        if self.phase != Phase::Guessing {
            return;
        }
        self.input.clear();
        for c in text.chars() {
            self.push_char(c);
        }
    }

    /// Advance the reveal countdown for `round`
    ///
    /// Ticks carrying another round's id are stale and ignored.
    pub fn tick(&mut self, round: RoundId) -> TickOutcome {
        if round != self.id || self.phase != Phase::Revealing {
            debug!("ignoring stale tick for round {round} (current {})", self.id);
            return TickOutcome::Ignored;
        }

        match self.countdown.tick() {
            Tick::Remaining(left) => TickOutcome::Counting(left),
            Tick::Elapsed => {
                self.phase = Phase::Guessing;
                debug!("round {} reveal finished", self.id);
                TickOutcome::Revealed
            }
            Tick::Inactive => TickOutcome::Ignored,
        }
    }

    /// End the reveal immediately (the timer-elapsed event)
    pub fn finish_reveal(&mut self, round: RoundId) -> TickOutcome {
        if round != self.id || self.phase != Phase::Revealing {
            return TickOutcome::Ignored;
        }
        self.countdown.cancel();
        self.phase = Phase::Guessing;
        TickOutcome::Revealed
    }

    /// Submit the current input as a guess
    ///
    /// On a real submit exactly one attempt is appended, the letter board is
    /// updated and the input is cleared before the phase is decided.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase != Phase::Guessing || self.input.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let guess = std::mem::take(&mut self.input);
        let attempt = GuessAttempt::evaluate(self.entry.word(), &guess);
        self.letters.record(&attempt);
        debug!("round {} attempt {}: {attempt}", self.id, self.attempts.len() + 1);
        self.attempts.push(attempt);

        if normalize(&guess) == normalize(self.entry.word()) {
            self.phase = Phase::Won;
            info!("round {} won in {} attempts", self.id, self.attempts.len());
            SubmitOutcome::Won
        } else if self.attempts.len() >= self.config.max_attempts {
            self.phase = Phase::Lost;
            info!("round {} lost", self.id);
            SubmitOutcome::Lost
        } else {
            SubmitOutcome::Recorded
        }
    }

    /// Stop the countdown because the round is being torn down
    pub fn teardown(&mut self) {
        self.countdown.cancel();
    }
}
