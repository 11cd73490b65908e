//! Feedback calculation and representation
//!
//! Feedback is the pair (exact, misplaced):
//! - exact: positions where both codes hold the same digit
//! - misplaced: further digit matches once exact positions are removed,
//!   bounded by the multiset overlap of the leftover digits

use super::code::{CODE_LENGTH, Code};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Score of a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    exact: u8,
    misplaced: u8,
}

/// Error type for malformed feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Feedback counts must be between 0 and 4, got {exact} exact and {misplaced} misplaced")]
    OutOfRange { exact: u8, misplaced: u8 },
    #[error("Exact plus misplaced cannot exceed 4, got {exact} + {misplaced}")]
    TooMany { exact: u8, misplaced: u8 },
    #[error("Could not read feedback from '{0}' (try '2 1' for 2 exact, 1 misplaced)")]
    Unparseable(String),
}

impl Feedback {
    /// All four digits in place
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH as u8,
        misplaced: 0,
    };

    /// Create validated feedback
    ///
    /// # Errors
    /// Returns `FeedbackError` if either count exceeds 4 or the sum exceeds 4.
    pub const fn new(exact: u8, misplaced: u8) -> Result<Self, FeedbackError> {
        let max = CODE_LENGTH as u8;
        if exact > max || misplaced > max {
            return Err(FeedbackError::OutOfRange { exact, misplaced });
        }
        if exact + misplaced > max {
            return Err(FeedbackError::TooMany { exact, misplaced });
        }
        Ok(Self { exact, misplaced })
    }

    /// Number of digits in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of right digits in the wrong position
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> u8 {
        self.misplaced
    }

    /// Check if this is a perfect match
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact == CODE_LENGTH as u8
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. Count exact position matches
    /// 2. Tally the unmatched digits of each code into ten buckets
    /// 3. Misplaced is the sum of the per-digit minimum of the two tallies
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("1123").unwrap();
    /// let guess = Code::parse("1111").unwrap();
    /// let feedback = Feedback::score(secret, guess);
    ///
    /// assert_eq!((feedback.exact(), feedback.misplaced()), (2, 0));
    /// ```
    #[must_use]
    pub fn score(secret: Code, guess: Code) -> Self {
        let mut exact = 0u8;
        let mut secret_counts = [0u8; 10];
        let mut guess_counts = [0u8; 10];

        for (&s, &g) in secret.digits().iter().zip(guess.digits()) {
            if s == g {
                exact += 1;
            } else {
                secret_counts[usize::from(s)] += 1;
                guess_counts[usize::from(g)] += 1;
            }
        }

        let misplaced = secret_counts
            .iter()
            .zip(&guess_counts)
            .map(|(&s, &g)| s.min(g))
            .sum();

        Self { exact, misplaced }
    }

    /// Every legal feedback value, ordered by (exact, misplaced)
    ///
    /// This is the option list a feedback picker offers. It includes (3, 1),
    /// which no real pair of codes can produce.
    pub fn all() -> impl Iterator<Item = Self> {
        let max = CODE_LENGTH as u8;
        (0..=max).flat_map(move |exact| {
            (0..=max - exact).map(move |misplaced| Self { exact, misplaced })
        })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} misplaced", self.exact, self.misplaced)
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Accepts "2 1", "2,1", "2-1", "2e1m" and "win"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        if matches!(text.as_str(), "win" | "correct" | "solved") {
            return Ok(Self::PERFECT);
        }

        let unparseable = || FeedbackError::Unparseable(s.trim().to_string());
        let split = text
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(unparseable)?;
        let (exact, rest) = text.split_at(split);

        // Either "2e1m" style, or two numbers around a single separator
        let misplaced = if let Some(rest) = rest.strip_prefix('e') {
            let rest = rest.trim_start();
            rest.strip_suffix('m').unwrap_or(rest)
        } else {
            let trimmed = rest.trim_start();
            match trimmed.strip_prefix([',', '-', '/']) {
                Some(after) => after.trim_start(),
                None if trimmed.len() < rest.len() => trimmed,
                None => return Err(unparseable()),
            }
        };

        let is_number = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_number(exact) || !is_number(misplaced) {
            return Err(unparseable());
        }
        let exact: u8 = exact.parse().map_err(|_| unparseable())?;
        let misplaced: u8 = misplaced.parse().map_err(|_| unparseable())?;

        Self::new(exact, misplaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    fn pair(feedback: Feedback) -> (u8, u8) {
        (feedback.exact(), feedback.misplaced())
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(pair(Feedback::PERFECT), (4, 0));
    }

    #[test]
    fn score_identical_codes_is_perfect() {
        assert!(Code::all().all(|c| Feedback::score(c, c) == Feedback::PERFECT));
    }

    #[test]
    fn score_repeated_digits() {
        // Positions 0 and 1 match; leftover {2,3} vs {1,1} share nothing
        assert_eq!(pair(Feedback::score(code("1123"), code("1111"))), (2, 0));
    }

    #[test]
    fn score_repeated_digits_bounded_by_overlap() {
        // Secret has a single 1, so only one misplaced credit
        assert_eq!(pair(Feedback::score(code("1234"), code("5111"))), (0, 1));
        // Two 1s unmatched on each side
        assert_eq!(pair(Feedback::score(code("1122"), code("2211"))), (0, 4));
        assert_eq!(pair(Feedback::score(code("1122"), code("1212"))), (2, 2));
    }

    #[test]
    fn score_no_overlap() {
        assert_eq!(pair(Feedback::score(code("1234"), code("5678"))), (0, 0));
    }

    #[test]
    fn score_all_misplaced() {
        assert_eq!(pair(Feedback::score(code("1234"), code("4321"))), (0, 4));
    }

    #[test]
    fn score_is_symmetric() {
        let codes = ["0012", "1200", "9909", "3141", "5926", "0000"];
        for a in codes {
            for b in codes {
                assert_eq!(
                    Feedback::score(code(a), code(b)),
                    Feedback::score(code(b), code(a)),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn score_is_always_bounded() {
        // Every code against a handful of probes covering repeats and zeros
        for probe in ["0000", "0123", "1123", "9898", "7777"] {
            let probe = code(probe);
            for candidate in Code::all() {
                let feedback = Feedback::score(candidate, probe);
                assert!(feedback.exact() <= 4);
                assert!(feedback.misplaced() <= 4);
                assert!(feedback.exact() + feedback.misplaced() <= 4);
            }
        }
    }

    #[test]
    fn score_never_yields_three_and_one() {
        let probe = code("1234");
        assert!(Code::all().all(|c| pair(Feedback::score(c, probe)) != (3, 1)));
    }

    #[test]
    fn new_validates_ranges() {
        assert!(Feedback::new(0, 0).is_ok());
        assert!(Feedback::new(2, 2).is_ok());
        assert!(Feedback::new(4, 0).is_ok());
        assert_eq!(
            Feedback::new(5, 0),
            Err(FeedbackError::OutOfRange {
                exact: 5,
                misplaced: 0
            })
        );
        assert_eq!(
            Feedback::new(3, 2),
            Err(FeedbackError::TooMany {
                exact: 3,
                misplaced: 2
            })
        );
    }

    #[test]
    fn all_lists_fifteen_options_in_order() {
        let options: Vec<(u8, u8)> = Feedback::all().map(pair).collect();
        assert_eq!(options.len(), 15);
        assert_eq!(options.first(), Some(&(0, 0)));
        assert_eq!(options[5], (1, 0));
        assert_eq!(options.last(), Some(&(4, 0)));
        assert!(options.iter().all(|&(e, m)| e + m <= 4));
    }

    #[test]
    fn parse_accepted_forms() {
        for input in ["2 1", "2,1", "2-1", "2e1m", " 2 , 1 ", "2E 1M"] {
            let feedback: Feedback = input.parse().unwrap();
            assert_eq!(pair(feedback), (2, 1), "input {input:?}");
        }
        assert_eq!("win".parse::<Feedback>().unwrap(), Feedback::PERFECT);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "abc".parse::<Feedback>(),
            Err(FeedbackError::Unparseable(_))
        ));
        assert!(matches!(
            "1 2 3".parse::<Feedback>(),
            Err(FeedbackError::Unparseable(_))
        ));
        for input in ["-1 2", "e1m2", "21", "2 1m", "2,,1", "2 -", "m2e1"] {
            assert!(
                matches!(input.parse::<Feedback>(), Err(FeedbackError::Unparseable(_))),
                "input {input:?}"
            );
        }
        assert!(matches!(
            "4 1".parse::<Feedback>(),
            Err(FeedbackError::TooMany { .. })
        ));
    }

    #[test]
    fn display_reads_naturally() {
        assert_eq!(
            Feedback::new(1, 2).unwrap().to_string(),
            "1 exact, 2 misplaced"
        );
    }
}
