//! TUI rendering with ratatui
//!
//! Chat view, feedback picker and solver progress for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::CODE_SPACE;
use crate::game::Speaker;
use crate::output::formatters::feedback_to_pegs;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(62), // Chat
            Constraint::Percentage(38), // Side panel
        ])
        .split(chunks[1]);

    render_chat(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐂 BULLS AND COWS - Guess the 4-Digit Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_chat(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .visible_messages()
        .map(|message| match message.speaker {
            Speaker::System => Line::from(vec![
                Span::styled("B ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::raw(message.text.clone()),
            ]),
            Speaker::Player => Line::from(vec![
                Span::styled(message.text.clone(), Style::default().fg(Color::Yellow)),
                Span::styled(" Y", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            ])
            .alignment(Alignment::Right),
            Speaker::Notice => Line::from(Span::styled(
                message.text.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        })
        .collect();

    if app.is_revealing() {
        lines.push(
            Line::from(Span::styled(
                "System is thinking...",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
        );
    } else if lines.is_empty() {
        lines.push(
            Line::from("Ready. Press Enter to start. Think of a 4-digit secret (do NOT type it).")
                .alignment(Alignment::Center),
        );
    }

    let chat = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Chat ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    // Keep the newest wrapped rows in view
    let rows = chat.line_count(area.width);
    let offset = u16::try_from(rows.saturating_sub(usize::from(area.height))).unwrap_or(u16::MAX);
    let chat = chat.scroll((offset, 0));

    f.render_widget(chat, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Elimination gauge
            Constraint::Min(6),    // Feedback picker
            Constraint::Length(6), // Statistics
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_feedback_picker(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.pool().len();
    let eliminated = CODE_SPACE - remaining.min(CODE_SPACE);
    let progress_pct = (eliminated * 100 / CODE_SPACE) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Codes Ruled Out ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{remaining} candidates remain"));

    f.render_widget(gauge, area);
}

fn render_feedback_picker(f: &mut Frame, app: &App, area: Rect) {
    let active = app.input_mode() == InputMode::Feedback;
    let title = app
        .session
        .pending_guess()
        .filter(|_| active)
        .map_or_else(
            || " Feedback ".to_string(),
            |guess| format!(" Feedback for {guess} "),
        );

    let items: Vec<ListItem> = app
        .feedback_options
        .iter()
        .enumerate()
        .map(|(i, feedback)| {
            let selected = active && i == app.feedback_choice;
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if active {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(format!(
                "{marker}{} {feedback}",
                feedback_to_pegs(*feedback)
            ))
            .style(style)
        })
        .collect();

    // Scroll so the selection stays visible
    let height = usize::from(area.height.saturating_sub(2)).max(1);
    let skip = (app.feedback_choice + 1).saturating_sub(height);
    let items: Vec<ListItem> = items.into_iter().skip(skip).collect();

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(if active { Color::Yellow } else { Color::Gray })),
    );

    f.render_widget(list, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let content = vec![
        Line::from(format!("Games:        {}", stats.total_games)),
        Line::from(vec![
            Span::raw("System wins:  "),
            Span::styled(stats.system_wins.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("Your wins:    "),
            Span::styled(stats.player_wins.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Stuck:        "),
            Span::styled(stats.stuck.to_string(), Style::default().fg(Color::Red)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode() {
        InputMode::Idle => (" Press Enter to start | q to quit ", "", Color::Green),
        InputMode::Waiting => (" Please wait... ", "", Color::DarkGray),
        InputMode::Feedback => (
            " Pick feedback with ↑/↓ and press Enter ",
            "",
            Color::Yellow,
        ),
        InputMode::Guess => (
            " Type your guess (4 digits) and press Enter ",
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
        InputMode::Stuck => (" Press Enter or Esc to reset ", "", Color::Red),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let (text, style) = app.status.as_ref().map_or_else(
        || (String::new(), Style::default()),
        |status| {
            let color = match status.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            (status.text.clone(), Style::default().fg(color))
        },
    );
    let status = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(status, chunks[0]);

    let help = Paragraph::new("Esc: Reset | Ctrl-C: Quit")
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Command, GameConfig};
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::{Duration, Instant};

    fn screen_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn narrow_chat_keeps_newest_guess_visible() {
        let mut app = App::new(GameConfig::default().with_seed(Some(21)));
        let mut now = Instant::now();
        let step = Duration::from_secs(5);

        app.submit(Command::Start, now);
        // Two all-miss rounds still leave at least two digits in play
        for _ in 0..2 {
            now += step;
            app.tick(now);
            app.submit(Command::Feedback { exact: 0, misplaced: 0 }, now);
            let miss = if app.session.secret().is_some_and(|s| s.to_string() == "5678") {
                "1234"
            } else {
                "5678"
            };
            app.submit(Command::Guess(miss.to_string()), now);
        }
        now += step;
        app.tick(now);

        let guess = app.session.pending_guess().unwrap();
        let text = screen_text(&app, 40, 24);
        assert!(text.contains(&format!("I guess: {guess}")), "{text}");
    }
}
