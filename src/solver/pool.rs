//! Candidate pool: the solver's belief state
//!
//! Holds every code still consistent with the feedback received this round,
//! plus the codes already offered as guesses.

use crate::core::{CODE_SPACE, Code, Feedback};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Error type for guess selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Every consistent code has already been tried, so the feedback so far
    /// contradicts itself
    #[error("No candidates left: the feedback given so far is inconsistent")]
    NoCandidatesLeft,
}

/// Codes consistent with the evidence, and codes already guessed
#[derive(Debug, Clone)]
pub struct CandidatePool {
    candidates: Vec<Code>,
    tried: FxHashSet<Code>,
}

impl CandidatePool {
    /// Create a pool holding the full code space
    #[must_use]
    pub fn new() -> Self {
        Self {
            candidates: Code::all().collect(),
            tried: FxHashSet::default(),
        }
    }

    /// Refill with all 10,000 codes and forget tried guesses
    pub fn reset(&mut self) {
        self.candidates.clear();
        self.candidates.extend(Code::all());
        self.tried.clear();
    }

    /// Pick a random consistent code that has not been guessed yet
    ///
    /// The choice is uniform over `pool − tried` and is recorded as tried.
    ///
    /// # Errors
    /// Returns `PoolError::NoCandidatesLeft` if no untried candidate remains.
    pub fn pick_guess<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Code, PoolError> {
        let available: Vec<Code> = self
            .candidates
            .iter()
            .copied()
            .filter(|code| !self.tried.contains(code))
            .collect();

        let &guess = available.choose(rng).ok_or(PoolError::NoCandidatesLeft)?;
        self.tried.insert(guess);
        Ok(guess)
    }

    /// Keep only the codes that would have produced `feedback` for `guess`
    ///
    /// This is an exact filter: truthful feedback never removes the secret.
    pub fn apply_feedback(&mut self, guess: Code, feedback: Feedback) {
        self.candidates = self
            .candidates
            .iter()
            .copied()
            .filter(|&candidate| Feedback::score(candidate, guess) == feedback)
            .collect();
    }

    /// Number of consistent codes (tried or not)
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of consistent codes that have not been guessed yet
    #[must_use]
    pub fn available_len(&self) -> usize {
        self.candidates
            .iter()
            .filter(|code| !self.tried.contains(code))
            .count()
    }

    /// True when the next `pick_guess` would fail
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.available_len() == 0
    }

    /// Number of guesses produced since the last reset
    #[must_use]
    pub fn tried_len(&self) -> usize {
        self.tried.len()
    }

    #[must_use]
    pub fn contains(&self, code: Code) -> bool {
        self.candidates.binary_search(&code).is_ok()
    }

    #[must_use]
    pub fn was_tried(&self, code: Code) -> bool {
        self.tried.contains(&code)
    }

    /// The consistent codes, in ascending order
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// True when the pool still holds the whole code space
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.candidates.len() == CODE_SPACE
    }
}

impl Default for CandidatePool {
    fn default() -> Self {
        Self::new()
    }
}
