//! Bulls and Cows
//!
//! A two-player code-breaking game against a candidate-elimination solver.
//! Both sides hide a 4-digit code (digits 0-9, repeats allowed) and take turns
//! guessing; each guess is scored as (exact, misplaced).
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_and_cows::core::{Code, Feedback};
//! use bulls_and_cows::game::{Event, GameSession};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut session = GameSession::new(StdRng::seed_from_u64(1));
//! let events = session.start().unwrap();
//! let Some(Event::SystemGuessed(guess)) = events.last() else { unreachable!() };
//!
//! // Score the system's guess against our secret
//! let feedback = Feedback::score(Code::parse("4321").unwrap(), *guess);
//! session.submit_feedback(feedback.exact(), feedback.misplaced()).unwrap();
//! ```

// Core domain types
pub mod core;

// Candidate elimination
pub mod solver;

// Turn-based session state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
