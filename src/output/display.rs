//! Display functions for command results

use super::formatters::{feedback_counts, feedback_pegs, reveal_line};
use crate::commands::ScoreResult;
use crate::core::{Code, Color};
use colored::{ColoredString, Colorize};

/// Render one color as a filled colored dot
#[must_use]
pub fn colored_dot(color: Color) -> ColoredString {
    let dot = "\u{2b24}";
    match color {
        Color::Red => dot.red(),
        Color::Blue => dot.blue(),
        Color::Green => dot.green(),
        Color::Yellow => dot.yellow(),
        Color::Orange => dot.truecolor(255, 165, 0),
        Color::Purple => dot.magenta(),
    }
}

/// Render a code as a row of colored dots
#[must_use]
pub fn colored_code(code: &Code) -> String {
    let dots: Vec<String> = code
        .colors()
        .iter()
        .map(|&color| colored_dot(color).to_string())
        .collect();
    dots.join(" ")
}

/// Print the result of a one-shot scoring run
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}   ({})",
        colored_code(&result.secret),
        result.secret
    );
    println!(
        "Guess:  {}   ({})",
        colored_code(&result.guess),
        result.guess
    );
    println!("{}", "─".repeat(60).cyan());

    let pegs = feedback_pegs(&result.feedback);
    if pegs.is_empty() {
        println!("\n  Pegs:   (none)");
    } else {
        println!("\n  Pegs:   {pegs}");
    }
    println!("  {}", feedback_counts(&result.feedback));
    println!("  Solved: {}", reveal_line(&result.feedback));

    println!();
    if result.feedback.is_win() {
        println!("{}", "✅ Code cracked!".green().bold());
    } else {
        println!(
            "{}",
            format!(
                "{} of 4 positions solved",
                result.feedback.exact()
            )
            .yellow()
        );
    }
}
