//! TUI application state and logic

use crate::core::{
    Game, Phase, RoundState, SessionStats, SubmitOutcome, TICK_INTERVAL, TickOutcome,
    TickSchedule,
};
use crate::logging::quiet;
use crate::output::result_message;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input when no tick is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Reveal,
    Guessing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a, R: Rng> {
    pub game: Game<'a, R>,
    pub schedule: TickSchedule,
    pub stats: SessionStats,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(game: Game<'a, R>) -> Self {
        Self {
            game,
            schedule: TickSchedule::new(),
            stats: SessionStats::new(),
            messages: Vec::new(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match self.game.round().map(RoundState::phase) {
            None => Screen::Start,
            Some(Phase::Revealing) => Screen::Reveal,
            Some(Phase::Guessing) => Screen::Guessing,
            Some(Phase::Won | Phase::Lost) => Screen::Finished,
        }
    }

    #[must_use]
    pub fn round(&self) -> Option<&RoundState<'a>> {
        self.game.round()
    }

    /// Begin a fresh round and arm its first countdown tick
    pub fn start_round(&mut self, now: Instant) {
        self.schedule.cancel();
        self.messages.clear();

        let id = self.game.start_round();
        self.schedule
            .schedule(id, now + self.game.config().first_tick_delay());
    }

    /// Drop the round and go back to the start screen
    pub fn quit_round(&mut self) {
        self.schedule.cancel();
        self.game.quit();
        self.messages.clear();
    }

    /// Fire the pending countdown tick if it is due
    pub fn on_tick(&mut self, now: Instant) {
        let Some(id) = self.schedule.take_due(now) else {
            return;
        };

        match self.game.tick(id) {
            TickOutcome::Counting(_) => self.schedule.schedule(id, now + TICK_INTERVAL),
            TickOutcome::Revealed => {
                self.add_message("What was that image? Type your guess!", MessageStyle::Info);
            }
            TickOutcome::Ignored => {}
        }
    }

    fn submit(&mut self) {
        match self.game.submit() {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::Recorded => {
                if let Some(round) = self.game.round() {
                    let left = round.attempts_left();
                    let text = format!(
                        "Not quite! {left} attempt{} left",
                        if left == 1 { "" } else { "s" }
                    );
                    self.add_message(&text, MessageStyle::Info);
                }
            }
            outcome @ (SubmitOutcome::Won | SubmitOutcome::Lost) => {
                let Some(round) = self.game.round() else {
                    return;
                };
                self.stats.record(round);
                let text = result_message(round).unwrap_or_default();
                let style = if outcome == SubmitOutcome::Won {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&text, style);
                self.add_message(
                    "Press Enter for the next challenge or Esc to quit.",
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen() {
            Screen::Start => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.start_round(now),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::Reveal => {
                if key.code == KeyCode::Esc {
                    self.quit_round();
                }
            }
            Screen::Guessing => match key.code {
                KeyCode::Esc => self.quit_round(),
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => self.game.backspace(),
                KeyCode::Char(c) => self.game.push_char(c),
                _ => {}
            },
            Screen::Finished => match key.code {
                KeyCode::Enter | KeyCode::Char('n') => self.start_round(now),
                KeyCode::Esc | KeyCode::Char('q') => self.quit_round(),
                _ => {}
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Log lines would draw over the alternate screen
    let _quiet = quiet();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = app
            .schedule
            .timeout(Instant::now())
            .map_or(IDLE_POLL, |t| t.min(IDLE_POLL));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::dataset::{Dataset, Entry};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dataset() -> Dataset {
        Dataset::from_entries(vec![Entry::new("cap", "CAP", "https://img/cap", "A lie")]).unwrap()
    }

    fn app(dataset: &Dataset, reveal_secs: u32) -> App<'_, StdRng> {
        let config = GameConfig {
            max_attempts: 2,
            reveal_secs,
        };
        App::new(Game::new(dataset, config, StdRng::seed_from_u64(3)))
    }

    fn press(app: &mut App<'_, StdRng>, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_word(app: &mut App<'_, StdRng>, word: &str, now: Instant) {
        for c in word.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    #[test]
    fn starts_on_start_screen() {
        let data = dataset();
        let app = app(&data, 2);
        assert_eq!(app.screen(), Screen::Start);
        assert!(!app.schedule.is_pending());
    }

    #[test]
    fn countdown_reveals_after_ticks() {
        let data = dataset();
        let mut app = app(&data, 2);
        let t0 = Instant::now();

        press(&mut app, KeyCode::Enter, t0);
        assert_eq!(app.screen(), Screen::Reveal);

        // Not due yet
        app.on_tick(t0);
        assert_eq!(app.round().unwrap().countdown().remaining(), 2);

        app.on_tick(t0 + TICK_INTERVAL);
        assert_eq!(app.screen(), Screen::Reveal);
        app.on_tick(t0 + TICK_INTERVAL * 2);
        assert_eq!(app.screen(), Screen::Guessing);
        assert!(!app.schedule.is_pending());
    }

    #[test]
    fn zero_reveal_fires_immediately() {
        let data = dataset();
        let mut app = app(&data, 0);
        let t0 = Instant::now();

        press(&mut app, KeyCode::Enter, t0);
        app.on_tick(t0);
        assert_eq!(app.screen(), Screen::Guessing);
    }

    #[test]
    fn typing_during_reveal_is_ignored() {
        let data = dataset();
        let mut app = app(&data, 5);
        let t0 = Instant::now();

        press(&mut app, KeyCode::Enter, t0);
        type_word(&mut app, "cap", t0);
        assert_eq!(app.round().unwrap().input(), "");
    }

    #[test]
    fn quit_during_reveal_cancels_tick() {
        let data = dataset();
        let mut app = app(&data, 1);
        let t0 = Instant::now();

        press(&mut app, KeyCode::Enter, t0);
        press(&mut app, KeyCode::Esc, t0);
        assert_eq!(app.screen(), Screen::Start);
        assert!(!app.schedule.is_pending());

        // Start again; the new round must not be advanced by anything from the old one
        press(&mut app, KeyCode::Enter, t0 + TICK_INTERVAL);
        app.on_tick(t0 + TICK_INTERVAL);
        assert_eq!(app.screen(), Screen::Reveal);
    }

    #[test]
    fn win_records_stats() {
        let data = dataset();
        let mut app = app(&data, 0);
        let t0 = Instant::now();

        press(&mut app, KeyCode::Enter, t0);
        app.on_tick(t0);
        type_word(&mut app, "cax", t0);
        press(&mut app, KeyCode::Backspace, t0);
        press(&mut app, KeyCode::Char('p'), t0);
        assert_eq!(app.round().unwrap().input(), "CAP");
        press(&mut app, KeyCode::Enter, t0);

        assert_eq!(app.screen(), Screen::Finished);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.messages[app.messages.len() - 2].style, MessageStyle::Success);
    }

    #[test]
    fn loss_then_next_challenge() {
        let data = dataset();
        let mut app = app(&data, 0);
        let t0 = Instant::now();

        press(&mut app, KeyCode::Enter, t0);
        app.on_tick(t0);
        for _ in 0..2 {
            type_word(&mut app, "zzz", t0);
            press(&mut app, KeyCode::Enter, t0);
        }
        assert_eq!(app.round().unwrap().phase(), Phase::Lost);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.games_won, 0);

        // Enter on a finished round starts a fresh one
        press(&mut app, KeyCode::Enter, t0);
        assert_eq!(app.screen(), Screen::Reveal);
        assert!(app.round().unwrap().attempts().is_empty());
    }

    #[test]
    fn q_is_a_letter_while_guessing() {
        let data = dataset();
        let mut app = app(&data, 0);
        let t0 = Instant::now();

        press(&mut app, KeyCode::Enter, t0);
        app.on_tick(t0);
        press(&mut app, KeyCode::Char('q'), t0);
        assert!(!app.should_quit);
        assert_eq!(app.round().unwrap().input(), "Q");
    }

    #[test]
    fn ctrl_c_always_quits() {
        let data = dataset();
        let mut app = app(&data, 0);
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit);
    }
}
