//! Reveal countdown and its tick scheduling
//!
//! The countdown itself is a plain counter. [`TickSchedule`] holds the single
//! pending one-second tick for the current round and can be cancelled when the
//! round is torn down, so a tick armed for an old round never fires.

use super::round::RoundId;
use std::time::{Duration, Instant};

/// Interval between countdown ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Result of advancing a countdown by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting; seconds left after this tick
    Remaining(u32),
    /// The count reached zero on this tick
    Elapsed,
    /// Already elapsed or cancelled
    Inactive,
}

/// Seconds-resolution countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    active: bool,
}

impl Countdown {
    #[must_use]
    pub const fn new(total: u32) -> Self {
        Self {
            total,
            remaining: total,
            active: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Stop the countdown; later ticks are inactive
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Advance by one second
    ///
    /// A zero-length countdown elapses on its first tick.
    pub fn tick(&mut self) -> Tick {
        if !self.active {
            return Tick::Inactive;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.active = false;
            Tick::Elapsed
        } else {
            Tick::Remaining(self.remaining)
        }
    }

    /// Fraction of the countdown already spent (0.0 - 1.0)
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        f64::from(self.total - self.remaining) / f64::from(self.total)
    }
}

/// A single cancellable pending tick
#[derive(Debug, Clone, Default)]
pub struct TickSchedule {
    pending: Option<(RoundId, Instant)>,
}

impl TickSchedule {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Arm a tick for `round` at `at`, replacing anything already pending
    pub fn schedule(&mut self, round: RoundId, at: Instant) {
        self.pending = Some((round, at));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending tick, `None` when nothing is armed
    #[must_use]
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, at)| at.saturating_duration_since(now))
    }

    /// Take the pending tick if it is due
    pub fn take_due(&mut self, now: Instant) -> Option<RoundId> {
        match self.pending {
            Some((round, at)) if at <= now => {
                self.pending = None;
                Some(round)
            }
            _ => None,
        }
    }
}
