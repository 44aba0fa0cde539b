//! Terminal output formatting
//!
//! Display utilities for console play and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_reveal, print_reveal_tick, print_round_result,
    print_stats, result_message,
};
