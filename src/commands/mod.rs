//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreConfig, ScoreResult, run_score};
pub use simple::run_simple;
