//! Core domain types for Mastermind
//!
//! The fixed color alphabet, the code sequence type, and the guess scorer.
//! Everything here is pure and deterministic; randomness lives in `game`.

mod code;
mod color;
mod feedback;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use color::Color;
pub use feedback::Feedback;
