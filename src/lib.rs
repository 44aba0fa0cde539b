//! Rordle
//!
//! A brainrot guessing game: study an image for a few seconds, then guess the
//! word behind it Wordle-style, with per-letter feedback after every attempt.
//!
//! # Quick Start
//!
//! ```rust
//! use rordle::core::{GuessAttempt, Verdict};
//!
//! let attempt = GuessAttempt::evaluate("CAP", "CAT");
//! assert_eq!(
//!     attempt.statuses(),
//!     vec![Verdict::Correct, Verdict::Correct, Verdict::Absent]
//! );
//! ```

// Core game logic
pub mod core;

// Word and image dataset
pub mod dataset;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log backend
pub mod logging;
