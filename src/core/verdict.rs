//! Per-letter guess feedback
//!
//! Evaluates a guess against a target word using the two-pass Wordle rules:
//! - Correct = letter in the right position
//! - Present = letter elsewhere in the target (counted against unused target letters)
//! - Absent = letter not available in the target
//!
//! Unlike classic Wordle the two strings may differ in length. Positions are
//! compared one-to-one and the result always covers `max(len(target), len(guess))`.

use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Emoji square used for shareable rows
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Verdict for one position of a guess
///
/// `letter` is `None` for positions past the end of a guess that was shorter
/// than the target. Such positions are always `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterVerdict {
    pub letter: Option<char>,
    pub verdict: Verdict,
}

impl LetterVerdict {
    #[must_use]
    pub const fn new(letter: Option<char>, verdict: Verdict) -> Self {
        Self { letter, verdict }
    }
}

/// One evaluated guess, in position order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessAttempt {
    verdicts: Vec<LetterVerdict>,
}

impl GuessAttempt {
    /// Evaluate `guess` against `target`
    ///
    /// Both strings are compared on their uppercase forms.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and clear them from both pools
    /// 2. Second pass: for every unresolved guessed letter, consume the first
    ///    remaining occurrence in the target pool (present) or mark it absent
    ///
    /// # Examples
    /// ```
    /// use rordle::core::{GuessAttempt, Verdict};
    ///
    /// let attempt = GuessAttempt::evaluate("SKIBIDI", "BIIIIII");
    /// assert_eq!(attempt.statuses()[0], Verdict::Present);
    /// assert_eq!(attempt.count(Verdict::Correct), 3);
    /// assert_eq!(attempt.count(Verdict::Absent), 3);
    /// ```
    #[must_use]
    pub fn evaluate(target: &str, guess: &str) -> Self {
        let mut target_pool: Vec<Option<char>> = normalize(target).into_iter().map(Some).collect();
        let guess_letters = normalize(guess);
        let mut guess_pool: Vec<Option<char>> = guess_letters.iter().copied().map(Some).collect();

        let len = target_pool.len().max(guess_pool.len());
        target_pool.resize(len, None);
        guess_pool.resize(len, None);

        let mut result: Vec<Option<Verdict>> = vec![None; len];

        // First pass: exact matches
        // Allow: Index needed to access both pools and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess_pool[i].is_some() && guess_pool[i] == target_pool[i] {
                result[i] = Some(Verdict::Correct);
                target_pool[i] = None;
                guess_pool[i] = None;
            }
        }

        // Second pass: letters present elsewhere
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            let Some(letter) = guess_pool[i] else {
                continue;
            };

            if let Some(slot) = target_pool.iter().position(|&c| c == Some(letter)) {
                result[i] = Some(Verdict::Present);
                target_pool[slot] = None;
            } else {
                result[i] = Some(Verdict::Absent);
            }
        }

        let verdicts = result
            .into_iter()
            .enumerate()
            .map(|(i, verdict)| {
                LetterVerdict::new(
                    guess_letters.get(i).copied(),
                    verdict.unwrap_or(Verdict::Absent),
                )
            })
            .collect();

        Self { verdicts }
    }

    /// All position verdicts in order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.verdicts
    }

    /// Just the statuses, in order
    #[must_use]
    pub fn statuses(&self) -> Vec<Verdict> {
        self.verdicts.iter().map(|v| v.verdict).collect()
    }

    /// Number of evaluated positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// True when every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.verdicts.is_empty() && self.verdicts.iter().all(|v| v.verdict == Verdict::Correct)
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.verdicts.iter().filter(|v| v.verdict == verdict).count()
    }

    /// The guessed text as evaluated (uppercase)
    #[must_use]
    pub fn guess_text(&self) -> String {
        self.verdicts.iter().filter_map(|v| v.letter).collect()
    }

    /// Convert to an emoji string like "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.verdict.emoji()).collect()
    }
}

impl fmt::Display for GuessAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess_text(), self.to_emoji())
    }
}

/// Uppercase a word into its comparison characters
pub(crate) fn normalize(word: &str) -> Vec<char> {
    word.chars().flat_map(char::to_uppercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    #[test]
    fn evaluate_all_correct() {
        let attempt = GuessAttempt::evaluate("SIGMA", "SIGMA");
        assert_eq!(attempt.statuses(), vec![Correct; 5]);
        assert!(attempt.is_perfect());
    }

    #[test]
    fn evaluate_is_case_insensitive() {
        let attempt = GuessAttempt::evaluate("RIZZ", "rizz");
        assert!(attempt.is_perfect());
        assert_eq!(attempt.guess_text(), "RIZZ");
    }

    #[test]
    fn evaluate_duplicate_letters_consume_target_counts() {
        // Both A's of ALPHA are matched in place, so no A is left for the middle
        let attempt = GuessAttempt::evaluate("ALPHA", "AAAAA");
        assert_eq!(
            attempt.statuses(),
            vec![Correct, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn evaluate_surplus_letters_are_absent() {
        // One A is exact, the other is found elsewhere, the rest exceed the count
        let attempt = GuessAttempt::evaluate("ALPHA", "AAXXX");
        assert_eq!(
            attempt.statuses(),
            vec![Correct, Present, Absent, Absent, Absent]
        );

        let attempt = GuessAttempt::evaluate("GYATT", "TTTTT");
        assert_eq!(
            attempt.statuses(),
            vec![Absent, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn evaluate_cap_vs_cat() {
        let attempt = GuessAttempt::evaluate("CAP", "CAT");
        assert_eq!(attempt.statuses(), vec![Correct, Correct, Absent]);
    }

    #[test]
    fn evaluate_exact_match_wins_over_earlier_present() {
        // ROBOT vs FLOOR: the second O is exact, so the first O only gets the
        // other O in FLOOR
        let attempt = GuessAttempt::evaluate("FLOOR", "ROBOT");
        assert_eq!(
            attempt.statuses(),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn evaluate_guess_longer_than_target() {
        let attempt = GuessAttempt::evaluate("SUS", "SUSSY");
        assert_eq!(attempt.len(), 5);
        assert_eq!(
            attempt.statuses(),
            vec![Correct, Correct, Correct, Absent, Absent]
        );
        assert!(!attempt.is_perfect());
    }

    #[test]
    fn evaluate_guess_shorter_than_target() {
        let attempt = GuessAttempt::evaluate("BRAINROT", "RAIN");
        assert_eq!(attempt.len(), 8);
        assert_eq!(
            attempt.statuses(),
            vec![Present, Present, Present, Present, Absent, Absent, Absent, Absent]
        );
        // Padding positions carry no letter
        assert!(attempt.verdicts()[4..].iter().all(|v| v.letter.is_none()));
        assert_eq!(attempt.guess_text(), "RAIN");
    }

    #[test]
    fn evaluate_shifted_letters_are_present() {
        let attempt = GuessAttempt::evaluate("OHIO", "HOOI");
        assert_eq!(attempt.statuses(), vec![Present, Present, Present, Present]);
    }

    #[test]
    fn evaluate_empty_guess() {
        let attempt = GuessAttempt::evaluate("CAP", "");
        assert_eq!(attempt.statuses(), vec![Absent; 3]);
        assert!(attempt.verdicts().iter().all(|v| v.letter.is_none()));
    }

    #[test]
    fn counts_and_emoji() {
        let attempt = GuessAttempt::evaluate("ALPHA", "AAXXX");
        assert_eq!(attempt.count(Correct), 1);
        assert_eq!(attempt.count(Present), 1);
        assert_eq!(attempt.count(Absent), 3);
        assert_eq!(attempt.to_emoji(), "🟩🟨⬜⬜⬜");
        assert_eq!(attempt.to_string(), "AAXXX 🟩🟨⬜⬜⬜");
    }

    #[test]
    fn verdict_precedence_order() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }
}
