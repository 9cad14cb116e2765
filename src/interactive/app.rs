//! TUI application state and logic

use crate::core::{CODE_LENGTH, Code, Color};
use crate::game::Session;
use crate::output::formatters::feedback_counts;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest win tracked by the turn distribution
const TRACKED_TURNS: usize = 10;

/// Application state
pub struct App {
    pub session: Session,
    /// In-progress guess: up to four picked colors, cleared on submit
    pub selected: Vec<Color>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
    rng: Option<StdRng>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Selecting,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_won: usize,
    pub guess_distribution: [usize; TRACKED_TURNS + 1],
}

impl Statistics {
    pub fn record_win(&mut self, turn: usize) {
        self.games_won += 1;
        if turn < self.guess_distribution.len() {
            self.guess_distribution[turn] += 1;
        }
    }

    /// Fewest turns any tracked win took
    #[must_use]
    pub fn fastest_win(&self) -> Option<usize> {
        self.guess_distribution
            .iter()
            .enumerate()
            .skip(1)
            .find(|&(_, &count)| count > 0)
            .map(|(turn, _)| turn)
    }

    /// Compact wins-by-turn summary, `turn:count` per tracked turn with wins
    #[must_use]
    pub fn distribution_summary(&self) -> String {
        let entries: Vec<String> = self
            .guess_distribution
            .iter()
            .enumerate()
            .skip(1)
            .filter(|&(_, &count)| count > 0)
            .map(|(turn, &count)| format!("{turn}:{count}"))
            .collect();

        if entries.is_empty() {
            "-".to_string()
        } else {
            entries.join(" ")
        }
    }
}

impl App {
    /// Create the app, drawing the first secret (seeded when a seed is
    /// given)
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = seed.map(StdRng::seed_from_u64);
        let session = next_session(&mut rng);

        Self {
            session,
            selected: Vec::with_capacity(CODE_LENGTH),
            messages: vec![
                Message {
                    text: "Welcome! Pick 4 colors and press Enter to guess.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Keys: 1-6 or r/b/g/y/o/p to pick, Backspace to unpick.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            input_mode: InputMode::Selecting,
            should_quit: false,
            rng,
        }
    }

    /// Translate a pressed key into a palette pick
    pub fn handle_color_key(&mut self, ch: char) {
        let color = match ch.to_digit(10) {
            Some(digit) => Color::from_code(digit as u8),
            None => Color::from_initial(ch),
        };
        if let Some(color) = color {
            self.select_color(color);
        }
    }

    /// Add a color to the in-progress guess, up to four
    pub fn select_color(&mut self, color: Color) {
        if self.selected.len() < CODE_LENGTH {
            self.selected.push(color);
        }
    }

    /// Remove the most recently picked color
    pub fn remove_last(&mut self) {
        self.selected.pop();
    }

    /// Submit the in-progress guess
    ///
    /// An under-filled selection is rejected here with a prompt; it never
    /// reaches the scorer.
    pub fn submit_selection(&mut self) {
        if self.selected.len() < CODE_LENGTH {
            self.add_message("Select 4 colors for your guess first", MessageStyle::Error);
            return;
        }
        let Ok(guess) = Code::from_slice(&self.selected) else {
            return; // selection is capped at exactly four colors
        };
        self.selected.clear();

        let feedback = self.session.submit(guess);

        if feedback.is_win() {
            let turn = self.session.history().len();
            self.stats.record_win(turn);
            self.input_mode = InputMode::WinCelebration;

            let celebration = match turn {
                1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "🎊 CRACKED! 🎊",
            };

            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        } else {
            self.add_message(&feedback_counts(&feedback), MessageStyle::Info);
            if feedback.exact() > 0 {
                self.add_message(
                    "Solved positions show in the secret row",
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session = next_session(&mut self.rng);
        self.selected.clear();
        self.messages.clear();
        self.input_mode = InputMode::Selecting;
        self.add_message("New game started! A fresh code awaits.", MessageStyle::Info);
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

/// Draw the next secret: from the seeded stream when one is set, otherwise
/// from the thread RNG
fn next_session(rng: &mut Option<StdRng>) -> Session {
    match rng.as_mut() {
        Some(rng) => Session::with_rng(rng),
        None => Session::new(),
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
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
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // In celebration mode, ignore other keys
                    }
                },
                InputMode::Selecting => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char(ch) => {
                        app.handle_color_key(ch);
                    }
                    KeyCode::Backspace => {
                        app.remove_last();
                    }
                    KeyCode::Enter => {
                        app.submit_selection();
                    }
                    _ => {}
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
    use crate::core::Color::{Blue, Green, Purple, Red, Yellow};

    fn fixed_app() -> App {
        let mut app = App::new(Some(1));
        app.session = Session::with_secret(Code::new([Red, Blue, Green, Yellow]));
        app
    }

    #[test]
    fn selection_caps_at_code_length() {
        let mut app = fixed_app();
        for _ in 0..2 * CODE_LENGTH {
            app.select_color(Red);
        }
        assert_eq!(app.selected.len(), CODE_LENGTH);
    }

    #[test]
    fn remove_last_pops_the_newest_pick() {
        let mut app = fixed_app();
        app.select_color(Red);
        app.select_color(Blue);
        app.remove_last();
        assert_eq!(app.selected, vec![Red]);

        app.remove_last();
        app.remove_last();
        assert!(app.selected.is_empty());
    }

    #[test]
    fn underfilled_submission_never_reaches_the_session() {
        let mut app = fixed_app();
        app.select_color(Red);
        app.select_color(Blue);
        app.submit_selection();

        assert!(app.session.history().is_empty());
        // The picks stay put so the player can complete them
        assert_eq!(app.selected, vec![Red, Blue]);
        assert!(matches!(
            app.messages.last().map(|message| &message.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn submission_records_and_resets_the_selection() {
        let mut app = fixed_app();
        for color in [Red, Red, Red, Red] {
            app.select_color(color);
        }
        app.submit_selection();

        assert!(app.selected.is_empty());
        assert_eq!(app.session.history().len(), 1);
        assert_eq!(app.input_mode, InputMode::Selecting);
    }

    #[test]
    fn winning_submission_enters_celebration_and_counts_the_win() {
        let mut app = fixed_app();
        for color in [Red, Blue, Green, Yellow] {
            app.select_color(color);
        }
        app.submit_selection();

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.fastest_win(), Some(1));
    }

    #[test]
    fn key_presses_map_digits_and_initials_to_picks() {
        let mut app = fixed_app();
        app.handle_color_key('1');
        app.handle_color_key('p');
        app.handle_color_key('x');
        app.handle_color_key('0');

        assert_eq!(app.selected, vec![Red, Purple]);
    }

    #[test]
    fn new_game_resets_ui_state_but_keeps_stats() {
        let mut app = fixed_app();
        for color in [Red, Blue, Green, Yellow] {
            app.select_color(color);
        }
        app.submit_selection();
        app.new_game();

        assert_eq!(app.input_mode, InputMode::Selecting);
        assert!(app.selected.is_empty());
        assert!(app.session.history().is_empty());
        assert!(!app.session.is_won());
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn message_log_keeps_the_last_five() {
        let mut app = fixed_app();
        for i in 0..8 {
            app.add_message(&format!("note {i}"), MessageStyle::Info);
        }

        assert_eq!(app.messages.len(), 5);
        assert_eq!(
            app.messages.last().map(|message| message.text.as_str()),
            Some("note 7")
        );
    }

    #[test]
    fn fastest_win_reports_the_lowest_winning_turn() {
        let mut stats = Statistics::default();
        assert_eq!(stats.fastest_win(), None);

        stats.record_win(5);
        assert_eq!(stats.fastest_win(), Some(5));
        stats.record_win(3);
        assert_eq!(stats.fastest_win(), Some(3));
        stats.record_win(8);
        assert_eq!(stats.fastest_win(), Some(3));
    }

    #[test]
    fn distribution_summary_lists_wins_by_turn() {
        let mut stats = Statistics::default();
        assert_eq!(stats.distribution_summary(), "-");

        stats.record_win(3);
        stats.record_win(3);
        stats.record_win(5);
        assert_eq!(stats.distribution_summary(), "3:2 5:1");

        // Wins past the tracked range still count as wins
        stats.record_win(30);
        assert_eq!(stats.games_won, 4);
        assert_eq!(stats.distribution_summary(), "3:2 5:1");
    }
}
