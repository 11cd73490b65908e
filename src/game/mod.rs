//! The game session and everything it exchanges with a front end
//!
//! Front ends call into [`GameSession`] (directly or through
//! [`GameSession::dispatch`]) and render the [`Event`]s and [`Transcript`] it
//! produces.

mod config;
mod error;
mod event;
mod session;

pub use config::GameConfig;
pub use error::{Action, GameError};
pub use event::{Command, Event, Message, Speaker, Transcript};
pub use session::{GameSession, Phase, Turn};
