//! TUI application state and logic

use crate::core::Feedback;
use crate::game::{Command, Event, GameConfig, GameSession, Message, Phase};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How often the event loop wakes up to check reveal timers
const TICK: Duration = Duration::from_millis(50);

/// A system guess that is committed but not shown yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReveal {
    /// Session epoch the guess belongs to
    pub epoch: u64,
    pub due: Instant,
    /// First transcript id to hold back
    pub hide_from: u64,
}

/// Application state
pub struct App {
    pub session: GameSession,
    pub config: GameConfig,
    pub input_buffer: String,
    pub feedback_choice: usize,
    pub feedback_options: Vec<Feedback>,
    pub pending_reveal: Option<PendingReveal>,
    pub status: Option<Status>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// What the keyboard currently drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Idle,
    Waiting,
    Feedback,
    Guess,
    Stuck,
}

#[derive(Debug, Clone)]
pub struct Status {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub system_wins: usize,
    pub player_wins: usize,
    pub stuck: usize,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let session = GameSession::new(config.rng());

        Self {
            session,
            config,
            input_buffer: String::new(),
            feedback_choice: 0,
            feedback_options: Feedback::all().collect(),
            pending_reveal: None,
            status: Some(Status {
                text: "Think of a 4-digit secret (do NOT type it), then press Enter to start."
                    .to_string(),
                style: MessageStyle::Info,
            }),
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Current keyboard mode, derived from the session and the reveal timer
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.is_revealing() {
            return InputMode::Waiting;
        }
        match self.session.phase() {
            Phase::Idle => InputMode::Idle,
            Phase::SystemThinking => InputMode::Waiting,
            Phase::AwaitingPlayerFeedback => InputMode::Feedback,
            Phase::AwaitingPlayerGuess => InputMode::Guess,
            Phase::Stuck => InputMode::Stuck,
        }
    }

    /// True while a system guess is held back for the thinking pause
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.pending_reveal
            .is_some_and(|p| self.session.is_current(p.epoch))
    }

    /// Transcript lines that may be shown right now
    pub fn visible_messages(&self) -> impl Iterator<Item = &Message> {
        let hide_from = self
            .pending_reveal
            .filter(|p| self.session.is_current(p.epoch))
            .map_or(u64::MAX, |p| p.hide_from);
        self.session
            .transcript()
            .messages()
            .iter()
            .filter(move |m| m.id < hide_from)
    }

    /// Send a command to the session and react to what it emits
    pub fn submit(&mut self, command: Command, now: Instant) {
        let opening = matches!(command, Command::Start);
        let events = self.session.dispatch(command);
        self.handle_events(&events, opening, now);
    }

    fn handle_events(&mut self, events: &[Event], opening: bool, now: Instant) {
        for event in events {
            match event {
                Event::Thinking => {}
                Event::SystemGuessed(_) => {
                    let delay = if opening {
                        self.config.first_reveal_delay
                    } else {
                        self.config.reveal_delay
                    };
                    // The guess is the newest transcript line
                    if let Some(last) = self.session.transcript().last() {
                        self.pending_reveal = Some(PendingReveal {
                            epoch: self.session.epoch(),
                            due: now + delay,
                            hide_from: last.id,
                        });
                    }
                    self.feedback_choice = 0;
                    self.status = None;
                }
                Event::FeedbackApplied { remaining, .. } => {
                    if *remaining == 0 {
                        self.set_status(
                            "That feedback contradicts your earlier answers.",
                            MessageStyle::Error,
                        );
                    } else {
                        self.status = None;
                    }
                }
                Event::PromptPlayerTurn | Event::GuessScored { .. } => {
                    self.input_buffer.clear();
                }
                Event::SystemWon { .. } => {
                    self.record_game_over();
                    self.stats.system_wins += 1;
                    self.set_status(
                        "System wins! Press Enter for a new game or Esc to reset.",
                        MessageStyle::Success,
                    );
                }
                Event::PlayerWon { .. } => {
                    self.record_game_over();
                    self.stats.player_wins += 1;
                    self.set_status(
                        "You win! Press Enter for a new game or Esc to reset.",
                        MessageStyle::Success,
                    );
                }
                Event::Stuck => {
                    self.record_game_over();
                    self.stats.stuck += 1;
                    self.set_status(
                        "No candidates left, the feedback seems inconsistent. Press Esc to reset.",
                        MessageStyle::Error,
                    );
                }
                Event::TurnRejected(reason) => self.set_status(reason, MessageStyle::Error),
                Event::Reset => {
                    self.pending_reveal = None;
                    self.input_buffer.clear();
                    self.feedback_choice = 0;
                    self.set_status(
                        "Ready. Think of a 4-digit secret, then press Enter to start.",
                        MessageStyle::Info,
                    );
                }
            }
        }
    }

    /// Release or discard the pending reveal
    pub fn tick(&mut self, now: Instant) {
        if let Some(pending) = self.pending_reveal
            && (!self.session.is_current(pending.epoch) || now >= pending.due)
        {
            self.pending_reveal = None;
        }
    }

    pub fn select_previous_feedback(&mut self) {
        self.feedback_choice = self.feedback_choice.saturating_sub(1);
    }

    pub fn select_next_feedback(&mut self) {
        let last = self.feedback_options.len().saturating_sub(1);
        self.feedback_choice = (self.feedback_choice + 1).min(last);
    }

    #[must_use]
    pub fn selected_feedback(&self) -> Option<Feedback> {
        self.feedback_options.get(self.feedback_choice).copied()
    }

    pub fn submit_selected_feedback(&mut self, now: Instant) {
        if let Some(feedback) = self.selected_feedback() {
            self.submit(
                Command::Feedback {
                    exact: feedback.exact(),
                    misplaced: feedback.misplaced(),
                },
                now,
            );
        }
    }

    pub fn submit_guess(&mut self, now: Instant) {
        let text = self.input_buffer.clone();
        self.submit(Command::Guess(text), now);
    }

    fn record_game_over(&mut self) {
        self.stats.total_games += 1;
        self.input_buffer.clear();
    }

    fn set_status(&mut self, text: &str, style: MessageStyle) {
        self.status = Some(Status {
            text: text.to_string(),
            style,
        });
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }

        if let TermEvent::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let now = Instant::now();

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => app.submit(Command::Reset, now),
                code => match app.input_mode() {
                    InputMode::Idle => match code {
                        KeyCode::Enter | KeyCode::Char('s') => app.submit(Command::Start, now),
                        KeyCode::Char('q') => app.should_quit = true,
                        _ => {}
                    },
                    InputMode::Stuck => match code {
                        KeyCode::Enter | KeyCode::Char('r') => app.submit(Command::Reset, now),
                        KeyCode::Char('q') => app.should_quit = true,
                        _ => {}
                    },
                    InputMode::Waiting => {
                        // Input is disabled while the system thinks
                    }
                    InputMode::Feedback => match code {
                        KeyCode::Up => app.select_previous_feedback(),
                        KeyCode::Down => app.select_next_feedback(),
                        KeyCode::Enter => app.submit_selected_feedback(now),
                        _ => {}
                    },
                    InputMode::Guess => match code {
                        KeyCode::Char(c) if c.is_ascii_digit() && app.input_buffer.len() < 4 => {
                            app.input_buffer.push(c);
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => app.submit_guess(now),
                        _ => {}
                    },
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;

    fn app() -> App {
        App::new(GameConfig::default().with_seed(Some(7)))
    }

    #[test]
    fn start_holds_back_first_guess() {
        let mut app = app();
        let now = Instant::now();
        app.submit(Command::Start, now);

        assert!(app.is_revealing());
        assert_eq!(app.input_mode(), InputMode::Waiting);
        let hidden = app.session.transcript().len() - app.visible_messages().count();
        assert_eq!(hidden, 1);

        app.tick(now + app.config.first_reveal_delay);
        assert!(!app.is_revealing());
        assert_eq!(app.input_mode(), InputMode::Feedback);
        assert_eq!(
            app.visible_messages().count(),
            app.session.transcript().len()
        );
    }

    #[test]
    fn tick_before_due_keeps_guess_hidden() {
        let mut app = app();
        let now = Instant::now();
        app.submit(Command::Start, now);

        app.tick(now + Duration::from_millis(10));
        assert!(app.is_revealing());
    }

    #[test]
    fn reset_discards_pending_reveal() {
        let mut app = app();
        let now = Instant::now();
        app.submit(Command::Start, now);
        let stale = app.pending_reveal.unwrap();

        app.submit(Command::Reset, now);
        assert!(app.pending_reveal.is_none());
        assert!(!app.session.is_current(stale.epoch));

        // A timer that fires late for the old round must not resurrect it
        app.pending_reveal = Some(stale);
        assert!(!app.is_revealing());
        app.tick(now);
        assert!(app.pending_reveal.is_none());
        assert_eq!(app.input_mode(), InputMode::Idle);
    }

    #[test]
    fn feedback_picker_walks_options() {
        let mut app = app();
        assert_eq!(app.feedback_options.len(), 15);
        app.select_previous_feedback();
        assert_eq!(app.feedback_choice, 0);

        for _ in 0..20 {
            app.select_next_feedback();
        }
        assert_eq!(app.selected_feedback(), Some(Feedback::PERFECT));
    }

    #[test]
    fn perfect_feedback_counts_system_win() {
        let mut app = app();
        let now = Instant::now();
        app.submit(Command::Start, now);
        app.tick(now + Duration::from_secs(1));

        app.feedback_choice = app.feedback_options.len() - 1;
        app.submit_selected_feedback(now);

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.system_wins, 1);
        assert_eq!(app.input_mode(), InputMode::Idle);
    }

    #[test]
    fn guess_round_trip_and_rejection() {
        let mut app = app();
        let now = Instant::now();
        app.session.start_with_secret(Code::parse("0420").unwrap()).unwrap();
        app.submit(
            Command::Feedback {
                exact: 0,
                misplaced: 0,
            },
            now,
        );
        assert_eq!(app.input_mode(), InputMode::Guess);

        app.input_buffer = "12".to_string();
        app.submit_guess(now);
        assert!(app.status.as_ref().is_some_and(|s| s.style == MessageStyle::Error));
        assert_eq!(app.input_mode(), InputMode::Guess);

        app.input_buffer = "0420".to_string();
        app.submit_guess(now);
        assert_eq!(app.stats.player_wins, 1);
        assert!(app.input_buffer.is_empty());
    }
}
