//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI.

use crate::core::Code;
use crate::game::Session;
use crate::output::colored_code;
use crate::output::formatters::{feedback_counts, feedback_pegs, masked_secret, reveal_line};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// A seed fixes the secret of the first game and of every rematch in the
/// same run.
///
/// # Errors
///
/// Returns an error if reading user input or flushing stdout fails.
pub fn run_simple(seed: Option<u64>) -> Result<(), String> {
    let mut rng = seed.map(StdRng::seed_from_u64);
    let mut session = next_session(&mut rng);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Mastermind - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I picked a secret code: 4 colors out of red, blue, green, yellow,");
    println!("orange, purple (repeats allowed). Crack it!\n");
    println!("Enter a guess as:");
    println!("  - full names:  red blue green yellow");
    println!("  - initials:    r b g y   (or compact: rbgy)");
    println!("  - digit codes: 1 2 3 4   (or compact: 1234)\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!("Turn {}: secret is {}", session.turn(), secret_row(&session));
        println!("────────────────────────────────────────────────────────────");

        let input = get_user_input("Guess (4 colors)")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = next_session(&mut rng);
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        let guess = match Code::parse(&input) {
            Ok(guess) => guess,
            Err(err) => {
                println!("❌ {err}\n");
                continue;
            }
        };

        let feedback = session.submit(guess);

        if feedback.is_win() {
            print_win(&session);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session = next_session(&mut rng);
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        } else {
            let pegs = feedback_pegs(&feedback);
            if pegs.is_empty() {
                println!("\n   {}   (no matches)", colored_code(&guess));
            } else {
                println!("\n   {}   {pegs}", colored_code(&guess));
            }
            println!("   {}\n", feedback_counts(&feedback));
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

/// The secret row for the turn header: solved positions from the latest
/// feedback are revealed by name, the rest stay masked
fn secret_row(session: &Session) -> String {
    match session.history().last() {
        Some(record) if !session.is_won() && record.feedback.exact() > 0 => {
            reveal_line(&record.feedback)
        }
        _ => masked_secret(),
    }
}

fn print_win(session: &Session) {
    let turn = session.history().len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  C O D E   C R A C K E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match turn {
        1 => ("🏆 Unbelievable!", "A first-guess crack!"),
        2 => ("⭐ Brilliant!", "Two guesses only!"),
        3 | 4 => ("💫 Sharp!", "Master codebreaker!"),
        5..=7 => ("✨ Solid!", "The code gave in."),
        _ => ("✓ Cracked!", "Persistence pays."),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Secret was {}   ({})",
        colored_code(&session.secret()),
        session.secret()
    );
    println!(
        "  Found in {} {}",
        turn.to_string().bright_cyan().bold(),
        if turn == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, record) in session.history().iter().enumerate() {
        println!(
            "    {}. {}  {}",
            (i + 1).to_string().bright_black(),
            colored_code(&record.guess),
            feedback_pegs(&record.feedback)
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
