//! Gameplay error conditions
//!
//! None of these are fatal: each describes a move the session refused.

use super::session::Phase;
use crate::core::{CodeError, FeedbackError};
use crate::solver::PoolError;
use thiserror::Error;

/// Why the session refused a call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid guess: {0}")]
    InvalidCode(#[from] CodeError),
    #[error("Invalid feedback: {0}")]
    InvalidFeedback(#[from] FeedbackError),
    #[error("Cannot {action} right now ({phase})")]
    TurnViolation { action: Action, phase: Phase },
    #[error("{0}")]
    NoCandidatesLeft(#[from] PoolError),
}

impl GameError {
    /// True for malformed input the player can correct and resubmit
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidCode(_) | Self::InvalidFeedback(_))
    }
}

/// A call into the session, named for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    SubmitFeedback,
    SubmitGuess,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Start => "start a new game",
            Self::SubmitFeedback => "give feedback",
            Self::SubmitGuess => "submit a guess",
        };
        f.write_str(text)
    }
}
