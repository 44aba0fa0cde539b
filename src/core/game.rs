//! Game controller
//!
//! Owns the dataset reference and the random source, and replaces the round
//! wholesale on every start. Quitting drops the round entirely.

use super::round::{GameConfig, RoundId, RoundState, SubmitOutcome, TickOutcome};
use crate::dataset::{Dataset, Entry};
use log::debug;
use rand::Rng;

pub struct Game<'a, R: Rng> {
    dataset: &'a Dataset,
    config: GameConfig,
    rng: R,
    round: Option<RoundState<'a>>,
    last_id: RoundId,
}

impl<'a, R: Rng> Game<'a, R> {
    #[must_use]
    pub fn new(dataset: &'a Dataset, config: GameConfig, rng: R) -> Self {
        Self {
            dataset,
            config: GameConfig::new(config.max_attempts, config.reveal_secs),
            rng,
            round: None,
            last_id: RoundId::new(0),
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// The round in progress, if any
    #[inline]
    #[must_use]
    pub const fn round(&self) -> Option<&RoundState<'a>> {
        self.round.as_ref()
    }

    #[inline]
    pub fn round_mut(&mut self) -> Option<&mut RoundState<'a>> {
        self.round.as_mut()
    }

    /// Start a new round with a randomly chosen entry
    ///
    /// Any running round is torn down and replaced.
    pub fn start_round(&mut self) -> RoundId {
        let dataset = self.dataset;
        let entry = dataset.choose(&mut self.rng);
        self.replace_round(entry)
    }

    /// Start a new round for a specific word from the dataset
    ///
    /// Returns `None` if the word is not in the dataset.
    pub fn start_round_with(&mut self, word: &str) -> Option<RoundId> {
        let dataset = self.dataset;
        let entry = dataset.find_by_word(word)?;
        Some(self.replace_round(entry))
    }

    fn replace_round(&mut self, entry: &'a Entry) -> RoundId {
        if let Some(mut old) = self.round.take() {
            old.teardown();
        }
        self.last_id = self.last_id.next();
        self.round = Some(RoundState::new(self.last_id, entry, self.config));
        self.last_id
    }

    /// Abandon the current round
    pub fn quit(&mut self) {
        if let Some(mut old) = self.round.take() {
            debug!("round {} abandoned", old.id());
            old.teardown();
        }
    }

    /// Forward a timer tick; ticks with no live round are ignored
    pub fn tick(&mut self, round: RoundId) -> TickOutcome {
        self.round
            .as_mut()
            .map_or(TickOutcome::Ignored, |r| r.tick(round))
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(round) = self.round.as_mut() {
            round.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.backspace();
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.round
            .as_mut()
            .map_or(SubmitOutcome::Ignored, RoundState::submit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_dataset() -> Dataset {
        Dataset::from_entries(vec![
            Entry::new("cap", "CAP", "https://img/cap", "A lie"),
            Entry::new("rizz", "RIZZ", "https://img/rizz", "Charisma"),
        ])
        .unwrap()
    }

    #[test]
    fn zero_attempt_config_is_floored() {
        let data = small_dataset();
        let config = GameConfig {
            max_attempts: 0,
            reveal_secs: 0,
        };
        let mut game = Game::new(&data, config, StdRng::seed_from_u64(1));
        assert_eq!(game.config().max_attempts, 1);

        let id = game.start_round();
        assert_eq!(game.tick(id), TickOutcome::Revealed);
        for c in "zzzz".chars() {
            game.push_char(c);
        }
        assert_eq!(game.submit(), SubmitOutcome::Lost);
        assert_eq!(game.round().unwrap().attempts().len(), 1);
        assert_eq!(game.round().unwrap().phase(), Phase::Lost);
    }

    fn game(dataset: &Dataset) -> Game<'_, StdRng> {
        let config = GameConfig {
            max_attempts: 6,
            reveal_secs: 1,
        };
        Game::new(dataset, config, StdRng::seed_from_u64(1))
    }

    #[test]
    fn no_round_until_started() {
        let dataset = small_dataset();
        let mut game = game(&dataset);

        assert!(game.round().is_none());
        assert_eq!(game.submit(), SubmitOutcome::Ignored);
        assert_eq!(game.tick(RoundId::new(1)), TickOutcome::Ignored);
    }

    #[test]
    fn start_round_picks_from_dataset() {
        let dataset = small_dataset();
        let mut game = game(&dataset);
        game.start_round();

        let round = game.round().unwrap();
        assert_eq!(round.phase(), Phase::Revealing);
        assert!(round.target_len() == 3 || round.target_len() == 4);
    }

    #[test]
    fn new_round_resets_state() {
        let dataset = small_dataset();
        let mut game = game(&dataset);

        let first = game.start_round_with("cap").unwrap();
        assert_eq!(game.tick(first), TickOutcome::Revealed);
        game.push_char('c');
        game.push_char('o');
        assert_eq!(game.submit(), SubmitOutcome::Recorded);
        game.push_char('x');

        let second = game.start_round();
        assert_ne!(first, second);

        let round = game.round().unwrap();
        assert!(round.attempts().is_empty());
        assert!(round.letters().is_empty());
        assert_eq!(round.input(), "");
        assert_eq!(round.phase(), Phase::Revealing);
    }

    #[test]
    fn tick_from_replaced_round_is_stale() {
        let dataset = small_dataset();
        let mut game = game(&dataset);

        let first = game.start_round();
        let second = game.start_round();

        assert_eq!(game.tick(first), TickOutcome::Ignored);
        assert_eq!(game.round().unwrap().phase(), Phase::Revealing);
        assert_eq!(game.tick(second), TickOutcome::Revealed);
    }

    #[test]
    fn quit_drops_round_and_ignores_late_ticks() {
        let dataset = small_dataset();
        let mut game = game(&dataset);

        let id = game.start_round();
        game.quit();

        assert!(game.round().is_none());
        assert_eq!(game.tick(id), TickOutcome::Ignored);
    }

    #[test]
    fn full_round_through_controller() {
        let dataset = small_dataset();
        let mut game = game(&dataset);

        let id = game.start_round_with("RIZZ").unwrap();
        assert_eq!(game.tick(id), TickOutcome::Revealed);
        for c in "rizz".chars() {
            game.push_char(c);
        }
        game.push_char('!');
        game.backspace();
        assert_eq!(game.submit(), SubmitOutcome::Won);
        assert_eq!(game.round().unwrap().revealed_word(), Some("RIZZ"));
    }

    #[test]
    fn unknown_word_does_not_start_round() {
        let dataset = small_dataset();
        let mut game = game(&dataset);
        assert!(game.start_round_with("nope").is_none());
        assert!(game.round().is_none());
    }
}
