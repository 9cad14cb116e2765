//! TUI rendering functions

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CODE_LENGTH, Color as PegColor};
use crate::output::formatters::feedback_pegs;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const PEG: &str = "\u{2b24}";

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(main_chunks[0]);

    render_secret_row(f, app, left_chunks[0]);
    render_history(f, app, left_chunks[1]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Min(4),
        ])
        .split(main_chunks[1]);

    render_palette(f, right_chunks[0]);
    render_stats(f, app, right_chunks[1]);
    render_messages(f, app, right_chunks[2]);

    render_input_area(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.input_mode {
        InputMode::WinCelebration => Line::from(vec![
            Span::styled(
                "🎉 MASTERMIND ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "code cracked! 🎉",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        InputMode::Selecting => Line::from(vec![
            Span::styled(
                "🎯 MASTERMIND ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("crack the four-color code", Style::default().fg(Color::Cyan)),
        ]),
    };

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Secret row: solved positions from the latest guess show their color,
/// the rest stay masked
fn render_secret_row(f: &mut Frame, app: &App, area: Rect) {
    let latest = app.session.history().last();
    let mut spans = Vec::with_capacity(CODE_LENGTH * 2);

    for position in 0..CODE_LENGTH {
        let span = match latest.and_then(|record| record.feedback.solved_color_at(position)) {
            Some(color) => Span::styled(PEG, peg_style(color)),
            None => Span::styled(PEG, Style::default().fg(Color::DarkGray)),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }

    let row = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Secret Code"));
    f.render_widget(row, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .history()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut spans = vec![Span::styled(
                format!("{:2}. ", i + 1),
                Style::default().fg(Color::Gray),
            )];
            for &color in record.guess.colors() {
                spans.push(Span::styled(PEG, peg_style(color)));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                feedback_pegs(&record.feedback),
                Style::default().fg(Color::White),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history = List::new(items).block(Block::default().borders(Borders::ALL).title("Guesses"));
    f.render_widget(history, area);
}

fn render_palette(f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = PegColor::ALL
        .iter()
        .map(|&color| {
            let spans = vec![
                Span::styled(PEG, peg_style(color)),
                Span::raw(format!(
                    " {} {} ({})",
                    color.code(),
                    color.name(),
                    color.initial()
                )),
            ];
            ListItem::new(Line::from(spans))
        })
        .collect();

    let palette = List::new(items).block(Block::default().borders(Borders::ALL).title("Palette"));
    f.render_widget(palette, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let turn_line = if app.session.is_won() {
        format!("This game: solved in {}", app.session.history().len())
    } else {
        format!("This game: turn {}", app.session.turn())
    };
    let fastest = app
        .stats
        .fastest_win()
        .map_or_else(|| "-".to_string(), |turn| format!("{turn} turns"));

    let lines = vec![
        Line::from(format!("Games won: {}", app.stats.games_won)),
        Line::from(turn_line),
        Line::from(format!("Fastest win: {fastest}")),
        Line::from(format!(
            "Wins by turn: {}",
            app.stats.distribution_summary()
        )),
    ];

    let stats = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Statistics"));
    f.render_widget(stats, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(message.text.clone(), style)))
        })
        .collect();

    let messages = List::new(items).block(Block::default().borders(Borders::ALL).title("Messages"));
    f.render_widget(messages, area);
}

fn render_input_area(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw("Your guess: ")];
    for i in 0..CODE_LENGTH {
        match app.selected.get(i) {
            Some(&color) => spans.push(Span::styled(PEG, peg_style(color))),
            None => spans.push(Span::styled("_", Style::default().fg(Color::DarkGray))),
        }
        spans.push(Span::raw(" "));
    }

    let hint = match app.input_mode {
        InputMode::WinCelebration => "n: new game | q: quit",
        InputMode::Selecting => "1-6 or r/b/g/y/o/p: pick | Backspace: unpick | Enter: guess",
    };

    let border_style = match app.input_mode {
        InputMode::WinCelebration => Style::default().fg(Color::Green),
        InputMode::Selecting => Style::default().fg(Color::Yellow),
    };

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(hint, Style::default().fg(Color::Gray))),
    ];

    let input = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Input")
            .border_style(border_style),
    );
    f.render_widget(input, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = match app.input_mode {
        InputMode::WinCelebration => format!(
            "🎉 Cracked in {} | Won: {} | n: new game | q: quit",
            app.session.history().len(),
            app.stats.games_won
        ),
        InputMode::Selecting => format!(
            "Turn {} | Won: {} | n: new game | q: quit",
            app.session.turn(),
            app.stats.games_won
        ),
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(bar, area);
}

fn peg_style(color: PegColor) -> Style {
    let fg = match color {
        PegColor::Red => Color::Red,
        PegColor::Blue => Color::Blue,
        PegColor::Green => Color::Green,
        PegColor::Yellow => Color::Yellow,
        PegColor::Orange => Color::Rgb(255, 165, 0),
        PegColor::Purple => Color::Magenta,
    };
    Style::default().fg(fg)
}
