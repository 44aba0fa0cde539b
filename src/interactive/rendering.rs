//! TUI rendering with ratatui
//!
//! Start, reveal and guessing screens for the game.

use super::app::{App, MessageStyle, Screen};
use crate::core::{KeyStatus, LetterBoard, Phase, RoundState, Verdict};
use crate::output::formatters::KEYBOARD_ROWS;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match (app.screen(), app.round()) {
        (Screen::Reveal, Some(round)) => render_reveal(f, round, chunks[1]),
        (Screen::Guessing | Screen::Finished, Some(round)) => {
            render_round(f, app, round, chunks[1]);
        }
        _ => render_start(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧠 RORDLE - Guess the brainrot")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn render_start<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let config = app.game.config();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "R O R D L E",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Guess the brainrot",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ Press Enter to START ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Watch the image for {} seconds, then guess what it represents.",
            config.reveal_secs
        )),
        Line::from(format!(
            "You have {} attempts to get it right.",
            config.max_attempts
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_reveal(f: &mut Frame, round: &RoundState<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Image
            Constraint::Length(3), // Countdown gauge
        ])
        .split(area);

    let countdown = round.countdown();
    let content = vec![
        Line::from(Span::styled(
            "BRAINROT ALERT! 🧠💀",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Study this image carefully! You'll need to guess what it is!",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("🖼  "),
            Span::styled(
                round.image_url().to_string(),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}", countdown.remaining()),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let image = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(image, chunks[0]);

    let percent = (countdown.progress() * 100.0).round() as u16;
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent.min(100))
        .label(format!("{}s left", countdown.remaining()));
    f.render_widget(gauge, chunks[1]);
}

fn render_round<R: Rng>(f: &mut Frame, app: &App<'_, R>, round: &RoundState<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Keyboard and messages
        ])
        .split(area);

    render_board(f, round, chunks[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Keyboard
            Constraint::Length(3), // Legend
            Constraint::Min(3),    // Messages
        ])
        .split(chunks[1]);

    render_keyboard(f, round.letters(), side[0]);
    render_legend(f, side[1]);
    render_messages(f, app, side[2]);
}

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, round: &RoundState<'_>, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Hint: {}", round.description()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for attempt in round.attempts() {
        let tiles: Vec<Span> = attempt
            .verdicts()
            .iter()
            .flat_map(|v| {
                [
                    Span::styled(format!(" {} ", v.letter.unwrap_or(' ')), verdict_style(v.verdict)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(tiles));
        lines.push(Line::from(""));
    }

    if round.phase() == Phase::Guessing {
        lines.push(input_row(round));
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "Attempt {} of {}",
            round.attempts().len() + 1,
            round.config().max_attempts
        )));
        lines.push(Line::from(Span::styled(
            format!("Target length: {} letters", round.target_len()),
            Style::default().fg(Color::Magenta),
        )));
    } else if let Some(word) = round.revealed_word() {
        let (headline, color) = if round.phase() == Phase::Won {
            ("✅ You correctly identified:", Color::Green)
        } else {
            ("💀 The answer was:", Color::Red)
        };
        lines.push(Line::from(Span::styled(
            format!("{headline} {word}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(round.description().to_string()));
        if round.phase() == Phase::Lost {
            lines.push(Line::from(format!("🖼  {}", round.image_url())));
        }
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" What was that image? ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(board, area);
}

/// Typed letters followed by empty boxes up to the target length
fn input_row(round: &RoundState<'_>) -> Line<'static> {
    let typed: Vec<char> = round.input().chars().collect();
    let width = round.target_len().max(typed.len() + 1);

    let current = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let empty = Style::default().fg(Color::DarkGray);

    let spans: Vec<Span> = (0..width)
        .flat_map(|i| {
            let tile = typed.get(i).map_or_else(
                || Span::styled(" _ ", empty),
                |c| Span::styled(format!(" {c} "), current),
            );
            [tile, Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Unused => Style::default().fg(Color::Gray),
        KeyStatus::Correct => Style::default().fg(Color::White).bg(Color::Green),
        KeyStatus::Present => Style::default().fg(Color::White).bg(Color::Yellow),
        KeyStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_keyboard(f: &mut Frame, board: &LetterBoard, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let keys: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    [
                        Span::styled(format!(" {c} "), key_style(board.status(c))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(keys)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let legend = Paragraph::new(Line::from(vec![
        Span::styled("   ", verdict_style(Verdict::Correct)),
        Span::raw(" Correct  "),
        Span::styled("   ", verdict_style(Verdict::Present)),
        Span::raw(" Wrong position  "),
        Span::styled("   ", verdict_style(Verdict::Absent)),
        Span::raw(" Not in word"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(legend, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = &app.stats;
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {} (best {})",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    );
    let stats_widget = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(stats_widget, chunks[0]);

    let help_text = match app.screen() {
        Screen::Start => "Enter: Start | q: Quit",
        Screen::Reveal => "Esc: Quit round",
        Screen::Guessing => "Enter: Submit | Backspace: Delete | Esc: Quit round",
        Screen::Finished => "Enter: Next challenge | Esc: Quit round",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}
