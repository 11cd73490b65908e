//! Calls into the session and events out of it, plus the chat transcript

use crate::core::{Code, Feedback};

/// A request from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Feedback { exact: u8, misplaced: u8 },
    Guess(String),
    Reset,
}

/// Something the presentation layer should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The system is choosing its next guess
    Thinking,
    /// The system guessed this code and waits for feedback
    SystemGuessed(Code),
    /// Feedback was accepted; `remaining` codes are still consistent
    FeedbackApplied {
        guess: Code,
        feedback: Feedback,
        remaining: usize,
    },
    /// The player should now guess the system's secret
    PromptPlayerTurn,
    /// The player's guess was scored against the system's secret
    GuessScored { guess: Code, feedback: Feedback },
    /// The system found the player's secret
    SystemWon {
        player_secret: Code,
        system_secret: Code,
    },
    /// The player found the system's secret
    PlayerWon { secret: Code },
    /// The feedback contradicts itself; only a reset helps
    Stuck,
    /// The call was refused and nothing changed
    TurnRejected(String),
    /// The session was cleared
    Reset,
}

impl Event {
    /// True for events that end the round
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(
            self,
            Self::SystemWon { .. } | Self::PlayerWon { .. } | Self::Stuck
        )
    }
}

/// Who a transcript line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    System,
    Player,
    Notice,
}

/// One line of the chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub speaker: Speaker,
    pub text: String,
}

/// Ordered chat history with its own id counter
#[derive(Debug, Clone)]
pub struct Transcript {
    next_id: u64,
    messages: Vec<Message>,
}

impl Transcript {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 1,
            messages: Vec::new(),
        }
    }

    /// Append a line and return its id
    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            speaker,
            text: text.into(),
        });
        id
    }

    /// Drop every line and restart ids at 1
    pub fn clear(&mut self) {
        self.messages.clear();
        self.next_id = 1;
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_ids_increase() {
        let mut transcript = Transcript::new();
        let a = transcript.push(Speaker::System, "hello");
        let b = transcript.push(Speaker::Player, "hi");
        let c = transcript.push(Speaker::Notice, "go");

        assert_eq!((a, b, c), (1, 2, 3));
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.last().map(|m| m.speaker), Some(Speaker::Notice));
    }

    #[test]
    fn transcript_clear_restarts_ids() {
        let mut transcript = Transcript::new();
        transcript.push(Speaker::System, "one");
        transcript.push(Speaker::System, "two");
        transcript.clear();

        assert!(transcript.is_empty());
        assert_eq!(transcript.push(Speaker::System, "again"), 1);
    }

    #[test]
    fn game_over_events() {
        let code = Code::parse("1234").unwrap();
        assert!(Event::Stuck.is_game_over());
        assert!(Event::PlayerWon { secret: code }.is_game_over());
        assert!(!Event::SystemGuessed(code).is_game_over());
        assert!(!Event::TurnRejected("no".into()).is_game_over());
    }
}
