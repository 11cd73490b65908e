//! Interactive TUI interface
//!
//! Full-screen chat front end for a game session.

mod app;
mod rendering;

pub use app::{App, InputMode, MessageStyle, PendingReveal, Statistics, Status, run_tui};
