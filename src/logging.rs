//! Minimal stderr logger for the `log` facade

use log::{self, LevelFilter, Metadata, Record};
use std::env;
use std::io::Write;

/// Environment variable holding the log level
pub const LOG_ENV: &str = "RORDLE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr(),
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `warn`
#[must_use]
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Initialize logging with a level taken from the `RORDLE_LOG` environment variable.
/// Defaults to `warn` if the variable is not set or invalid.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

/// Silences logging until dropped, then restores the previous level
#[must_use = "logging is restored as soon as the guard is dropped"]
pub struct QuietGuard {
    previous: LevelFilter,
}

impl Drop for QuietGuard {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}

/// Turn logging off while something else owns the terminal
pub fn quiet() -> QuietGuard {
    let previous = log::max_level();
    log::set_max_level(LevelFilter::Off);
    QuietGuard { previous }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_accepts_names() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("OFF")), LevelFilter::Off);
        assert_eq!(parse_level(Some(" info ")), LevelFilter::Info);
    }

    #[test]
    fn parse_level_defaults_to_warn() {
        assert_eq!(parse_level(None), LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Warn);
    }

    #[test]
    fn quiet_guard_restores_level() {
        log::set_max_level(LevelFilter::Debug);
        {
            let _quiet = quiet();
            assert_eq!(log::max_level(), LevelFilter::Off);
        }
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
