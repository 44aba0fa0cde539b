//! Best-known status per letter across a round
//!
//! Folds every evaluated guess into a map used to colour the on-screen keyboard.

use super::verdict::{GuessAttempt, Verdict};
use rustc_hash::FxHashMap;

/// Keyboard colouring for a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyStatus {
    Unused,
    Absent,
    Present,
    Correct,
}

impl From<Verdict> for KeyStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Absent => Self::Absent,
            Verdict::Present => Self::Present,
            Verdict::Correct => Self::Correct,
        }
    }
}

/// Aggregate letter status for the current round
///
/// Entries only ever move up in precedence (correct > present > absent).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBoard {
    statuses: FxHashMap<char, Verdict>,
}

impl LetterBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one attempt into the board
    ///
    /// Padding positions (no guessed letter) are skipped.
    pub fn record(&mut self, attempt: &GuessAttempt) {
        for v in attempt.verdicts() {
            if let Some(letter) = v.letter {
                self.upgrade(letter, v.verdict);
            }
        }
    }

    /// Set `letter` to `verdict` if it ranks strictly higher than what is stored
    pub fn upgrade(&mut self, letter: char, verdict: Verdict) {
        self.statuses
            .entry(letter)
            .and_modify(|current| {
                if verdict > *current {
                    *current = verdict;
                }
            })
            .or_insert(verdict);
    }

    /// Current colouring for a key
    #[must_use]
    pub fn status(&self, letter: char) -> KeyStatus {
        self.statuses
            .get(&letter)
            .map_or(KeyStatus::Unused, |&v| KeyStatus::from(v))
    }

    /// Number of letters seen so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_letters_are_unused() {
        let board = LetterBoard::new();
        assert_eq!(board.status('A'), KeyStatus::Unused);
        assert!(board.is_empty());
    }

    #[test]
    fn record_sets_each_letter() {
        let mut board = LetterBoard::new();
        board.record(&GuessAttempt::evaluate("CAP", "CAT"));

        assert_eq!(board.status('C'), KeyStatus::Correct);
        assert_eq!(board.status('A'), KeyStatus::Correct);
        assert_eq!(board.status('T'), KeyStatus::Absent);
        assert_eq!(board.status('P'), KeyStatus::Unused);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut board = LetterBoard::new();
        board.upgrade('S', Verdict::Correct);
        board.upgrade('S', Verdict::Present);
        board.upgrade('S', Verdict::Absent);
        assert_eq!(board.status('S'), KeyStatus::Correct);
    }

    #[test]
    fn present_upgrades_to_correct_but_not_back() {
        let mut board = LetterBoard::new();
        board.upgrade('O', Verdict::Absent);
        board.upgrade('O', Verdict::Present);
        assert_eq!(board.status('O'), KeyStatus::Present);

        board.upgrade('O', Verdict::Absent);
        assert_eq!(board.status('O'), KeyStatus::Present);

        board.upgrade('O', Verdict::Correct);
        assert_eq!(board.status('O'), KeyStatus::Correct);
    }

    #[test]
    fn same_letter_in_one_attempt_keeps_best() {
        // The surplus A's are absent but the exact ones win
        let mut board = LetterBoard::new();
        board.record(&GuessAttempt::evaluate("ALPHA", "AAAAA"));
        assert_eq!(board.status('A'), KeyStatus::Correct);
    }

    #[test]
    fn padding_positions_are_ignored() {
        let mut board = LetterBoard::new();
        board.record(&GuessAttempt::evaluate("BRAINROT", "X"));
        assert_eq!(board.len(), 1);
        assert_eq!(board.status('X'), KeyStatus::Absent);
    }

    #[test]
    fn clear_resets_everything() {
        let mut board = LetterBoard::new();
        board.record(&GuessAttempt::evaluate("CAP", "CAT"));
        board.clear();
        assert!(board.is_empty());
        assert_eq!(board.status('C'), KeyStatus::Unused);
    }
}
