//! Core game logic
//!
//! Guess evaluation, the per-letter keyboard board, the reveal timer and the
//! round state machine. Nothing here touches the terminal.

mod game;
mod letters;
mod round;
mod stats;
mod timer;
mod verdict;

pub use game::Game;
pub use letters::{KeyStatus, LetterBoard};
pub use round::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_REVEAL_SECS, GameConfig, Phase, RoundId, RoundState,
    SubmitOutcome, TickOutcome,
};
pub use stats::SessionStats;
pub use timer::{Countdown, TICK_INTERVAL, Tick, TickSchedule};
pub use verdict::{GuessAttempt, LetterVerdict, Verdict};
