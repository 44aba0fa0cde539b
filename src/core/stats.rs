//! Session statistics
//!
//! Kept in memory for the lifetime of the process only.

use super::round::{Phase, RoundState};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// `guess_distribution[n]` counts wins that took `n` attempts
    pub guess_distribution: Vec<usize>,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a finished round; rounds still in play are ignored
    pub fn record(&mut self, round: &RoundState<'_>) {
        match round.phase() {
            Phase::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);

                let attempts = round.attempts().len();
                if self.guess_distribution.len() <= attempts {
                    self.guess_distribution.resize(attempts + 1, 0);
                }
                self.guess_distribution[attempts] += 1;
            }
            Phase::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
            }
            Phase::Revealing | Phase::Guessing => {}
        }
    }

    /// Win percentage (0-100)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, RoundId};
    use crate::dataset::Entry;

    fn finished_round<'a>(entry: &'a Entry, guesses: &[&str]) -> RoundState<'a> {
        let id = RoundId::new(1);
        let mut round = RoundState::new(id, entry, GameConfig::default());
        let _ = round.finish_reveal(id);
        for guess in guesses {
            round.set_input(guess);
            let _ = round.submit();
        }
        round
    }

    #[test]
    fn empty_stats() {
        let stats = SessionStats::new();
        assert_eq!(stats.games_played, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn wins_and_losses_update_streaks() {
        let entry = Entry::new("cap", "CAP", "", "");
        let mut stats = SessionStats::new();

        stats.record(&finished_round(&entry, &["CAT", "CAP"]));
        stats.record(&finished_round(&entry, &["CAP"]));
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.best_streak, 2);

        stats.record(&finished_round(&entry, &["X"; 6]));
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.guess_distribution[1], 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn unfinished_round_is_not_counted() {
        let entry = Entry::new("cap", "CAP", "", "");
        let mut stats = SessionStats::new();
        stats.record(&finished_round(&entry, &["CAT"]));
        assert_eq!(stats, SessionStats::default());
    }
}
