//! Core domain types for Bulls and Cows
//!
//! This module contains the fundamental domain types. Both are pure values with
//! clear mathematical properties; the feedback oracle lives here too.

mod code;
mod feedback;

pub use code::{CODE_LENGTH, CODE_SPACE, Code, CodeError};
pub use feedback::{Feedback, FeedbackError};
