//! Turn-based game session
//!
//! The session alternates between the system guessing the player's secret and
//! the player guessing the system's secret, until one side wins or the player's
//! feedback turns out to be contradictory.
//!
//! ```text
//! Idle ──start──▶ AwaitingPlayerFeedback ──feedback──▶ AwaitingPlayerGuess
//!                        ▲                                   │
//!                        └────── SystemThinking ◀──guess─────┘
//!
//! exact == 4 on either side ──▶ Idle
//! no candidates left        ──▶ Stuck (reset only)
//! ```

use super::error::{Action, GameError};
use super::event::{Command, Event, Speaker, Transcript};
use crate::core::{Code, Feedback};
use crate::solver::CandidatePool;
use rand::Rng;
use rand::rngs::StdRng;
use std::fmt;

/// Where the session is in its turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    SystemThinking,
    AwaitingPlayerFeedback,
    AwaitingPlayerGuess,
    Stuck,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Idle => "no game in progress",
            Self::SystemThinking => "the system is thinking",
            Self::AwaitingPlayerFeedback => "waiting for feedback on the system's guess",
            Self::AwaitingPlayerGuess => "waiting for the player's guess",
            Self::Stuck => "the game is stuck, reset to play again",
        };
        f.write_str(text)
    }
}

/// Whose move it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    System,
    Player,
}

/// One game between the solver and a human
pub struct GameSession<R: Rng = StdRng> {
    rng: R,
    secret: Option<Code>,
    pool: CandidatePool,
    phase: Phase,
    pending_guess: Option<Code>,
    epoch: u64,
    transcript: Transcript,
}

impl<R: Rng> GameSession<R> {
    /// Create an idle session drawing randomness from `rng`
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            secret: None,
            pool: CandidatePool::new(),
            phase: Phase::Idle,
            pending_guess: None,
            epoch: 0,
            transcript: Transcript::new(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose move it is, if a round is running
    #[must_use]
    pub const fn turn(&self) -> Option<Turn> {
        match self.phase {
            Phase::SystemThinking | Phase::AwaitingPlayerFeedback => Some(Turn::System),
            Phase::AwaitingPlayerGuess => Some(Turn::Player),
            Phase::Idle | Phase::Stuck => None,
        }
    }

    /// True while a round is in progress
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.turn().is_some()
    }

    /// Generation counter, advanced by every start and reset
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether something scheduled under `epoch` still belongs to this round
    #[must_use]
    pub const fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// The system guess waiting for feedback
    #[must_use]
    pub const fn pending_guess(&self) -> Option<Code> {
        self.pending_guess
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The system's secret, once a round has started
    ///
    /// Presentation layers should only reveal this after the round ends.
    #[must_use]
    pub const fn secret(&self) -> Option<Code> {
        self.secret
    }

    /// Start a round with a fresh random secret
    ///
    /// # Errors
    /// Returns `GameError::TurnViolation` unless the session is idle.
    pub fn start(&mut self) -> Result<Vec<Event>, GameError> {
        self.expect_phase(Phase::Idle, Action::Start)?;
        let secret = Code::from_index(self.rng.random_range(0..10_000));
        self.start_with_secret(secret)
    }

    /// Start a round with a chosen secret
    ///
    /// # Errors
    /// Returns `GameError::TurnViolation` unless the session is idle.
    pub fn start_with_secret(&mut self, secret: Code) -> Result<Vec<Event>, GameError> {
        self.expect_phase(Phase::Idle, Action::Start)?;

        self.epoch += 1;
        self.secret = Some(secret);
        self.pool.reset();
        self.pending_guess = None;
        self.transcript.clear();
        self.transcript.push(
            Speaker::System,
            "Hello! I will start by guessing your 4-digit secret. \
             Tell me how close each guess is.",
        );

        let mut events = Vec::new();
        self.system_turn(&mut events);
        Ok(events)
    }

    /// Score the pending system guess
    ///
    /// # Errors
    /// Returns `GameError::TurnViolation` outside `AwaitingPlayerFeedback`, or
    /// `GameError::InvalidFeedback` if the counts are out of range. Neither
    /// changes the session.
    pub fn submit_feedback(&mut self, exact: u8, misplaced: u8) -> Result<Vec<Event>, GameError> {
        self.expect_phase(Phase::AwaitingPlayerFeedback, Action::SubmitFeedback)?;
        let feedback = Feedback::new(exact, misplaced)?;
        let Some(guess) = self.pending_guess.take() else {
            return Err(self.violation(Action::SubmitFeedback));
        };

        self.transcript
            .push(Speaker::Player, format!("Feedback for {guess}: {feedback}"));

        if feedback.is_perfect() {
            let system_secret = self.secret.unwrap_or(guess);
            self.transcript.push(
                Speaker::System,
                format!("I guessed it! Your secret is {guess}. I win."),
            );
            self.transcript.push(
                Speaker::Notice,
                format!("System wins! My secret was {system_secret}."),
            );
            self.phase = Phase::Idle;
            return Ok(vec![Event::SystemWon {
                player_secret: guess,
                system_secret,
            }]);
        }

        self.pool.apply_feedback(guess, feedback);
        let remaining = self.pool.len();
        self.transcript.push(
            Speaker::System,
            "Ok, now it's your turn. Please type a guess at my secret.",
        );
        self.phase = Phase::AwaitingPlayerGuess;

        Ok(vec![
            Event::FeedbackApplied {
                guess,
                feedback,
                remaining,
            },
            Event::PromptPlayerTurn,
        ])
    }

    /// Guess the system's secret
    ///
    /// # Errors
    /// Returns `GameError::TurnViolation` outside `AwaitingPlayerGuess`, or
    /// `GameError::InvalidCode` if `text` is not four digits. Neither changes
    /// the session.
    pub fn submit_player_guess(&mut self, text: &str) -> Result<Vec<Event>, GameError> {
        self.expect_phase(Phase::AwaitingPlayerGuess, Action::SubmitGuess)?;
        let guess = Code::parse(text)?;
        let Some(secret) = self.secret else {
            return Err(self.violation(Action::SubmitGuess));
        };

        self.transcript
            .push(Speaker::Player, format!("I guess: {guess}"));

        let feedback = Feedback::score(secret, guess);
        let mut events = vec![Event::GuessScored { guess, feedback }];

        if feedback.is_perfect() {
            self.transcript.push(
                Speaker::System,
                format!("Correct! You guessed my secret ({secret}). You win!"),
            );
            self.transcript.push(Speaker::Notice, "Player wins!");
            self.phase = Phase::Idle;
            events.push(Event::PlayerWon { secret });
            return Ok(events);
        }

        self.transcript.push(
            Speaker::System,
            format!("Nope, {feedback}. My turn to guess now."),
        );
        self.system_turn(&mut events);
        Ok(events)
    }

    /// Abandon the round and return to `Idle`
    ///
    /// Valid in every phase. Anything scheduled under the previous epoch is
    /// stale afterwards.
    pub fn reset(&mut self) -> Vec<Event> {
        self.epoch += 1;
        self.secret = None;
        self.pool.reset();
        self.pending_guess = None;
        self.transcript.clear();
        self.phase = Phase::Idle;
        vec![Event::Reset]
    }

    /// Run a command, reporting refusals as `Event::TurnRejected`
    pub fn dispatch(&mut self, command: Command) -> Vec<Event> {
        let result = match command {
            Command::Start => self.start(),
            Command::Feedback { exact, misplaced } => self.submit_feedback(exact, misplaced),
            Command::Guess(text) => self.submit_player_guess(&text),
            Command::Reset => Ok(self.reset()),
        };
        result.unwrap_or_else(|err| vec![Event::TurnRejected(err.to_string())])
    }

    /// Pick the next system guess, or get stuck trying
    fn system_turn(&mut self, events: &mut Vec<Event>) {
        self.phase = Phase::SystemThinking;
        events.push(Event::Thinking);

        match self.pool.pick_guess(&mut self.rng) {
            Ok(guess) => {
                self.pending_guess = Some(guess);
                self.phase = Phase::AwaitingPlayerFeedback;
                // The guess line goes last so a front end can hold it back
                self.transcript
                    .push(Speaker::System, format!("I guess: {guess}"));
                events.push(Event::SystemGuessed(guess));
            }
            Err(err) => {
                let err = GameError::from(err);
                self.phase = Phase::Stuck;
                self.transcript.push(
                    Speaker::System,
                    format!("{err}. Please reset the game."),
                );
                events.push(Event::Stuck);
            }
        }
    }

    fn expect_phase(&self, expected: Phase, action: Action) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.violation(action))
        }
    }

    const fn violation(&self, action: Action) -> GameError {
        GameError::TurnViolation {
            action,
            phase: self.phase,
        }
    }
}
