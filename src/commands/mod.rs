//! Command implementations

pub mod check;
pub mod list;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use list::print_dataset;
pub use simple::run_simple;
