//! # Mastermind
//!
//! A code-breaking game: crack a hidden code of 4 colors drawn from a
//! 6-color palette. Every guess is scored with exact and misplaced counts,
//! and exactly-placed positions are revealed on the board.
//!
//! ## Features
//!
//! - **Frequency-capped scoring**: duplicate colors never earn more credit
//!   than the secret holds
//! - **Position reveal**: exact matches expose their slot in the secret row
//! - **Seeded games**: reproducible secrets for scripted play
//! - **Two front ends**: a ratatui board and a plain line mode
//!
//! ## Quick Start
//!
//! ```
//! use mastermind::core::{Code, Feedback};
//!
//! let secret: Code = "red blue green yellow".parse()?;
//! let guess: Code = "blue red green purple".parse()?;
//!
//! let feedback = Feedback::score(&secret, &guess);
//! assert_eq!(feedback.exact(), 1);
//! assert_eq!(feedback.misplaced(), 2);
//! # Ok::<(), mastermind::core::CodeError>(())
//! ```

pub mod commands;
pub mod core;
pub mod game;
pub mod interactive;
pub mod output;

// Re-export main types for easier use
pub use commands::{ScoreConfig, ScoreResult, run_score, run_simple};
pub use core::{CODE_LENGTH, Code, CodeError, Color, Feedback};
pub use game::{GuessRecord, Session, Status, generate_secret, generate_secret_with};
pub use interactive::{App, run_tui};
