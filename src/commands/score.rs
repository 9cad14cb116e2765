//! One-shot guess scoring command
//!
//! Scores a guess against a known secret and returns the detail for display.
//! Useful for scripting and for checking feedback by hand.

use crate::core::{Code, Feedback};

/// Configuration for a one-shot scoring run
pub struct ScoreConfig {
    pub secret: String,
    pub guess: String,
}

impl ScoreConfig {
    #[must_use]
    pub const fn new(secret: String, guess: String) -> Self {
        Self { secret, guess }
    }
}

/// Result of scoring one guess against one secret
#[derive(Debug)]
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse both codes and score the guess
///
/// # Errors
///
/// Returns an error if either input is not a well-formed code: wrong number
/// of symbols, or a token naming no alphabet color.
pub fn run_score(config: &ScoreConfig) -> Result<ScoreResult, String> {
    let secret = Code::parse(&config.secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = Code::parse(&config.guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let feedback = Feedback::score(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn score_reports_feedback_detail() {
        let config = ScoreConfig::new(
            "red blue green yellow".to_string(),
            "blue red green purple".to_string(),
        );
        let result = run_score(&config).unwrap();

        assert_eq!(result.feedback.exact(), 1);
        assert_eq!(result.feedback.misplaced(), 2);
        assert_eq!(result.feedback.solved_color_at(2), Some(Color::Green));
    }

    #[test]
    fn score_accepts_compact_forms() {
        let config = ScoreConfig::new("rbgy".to_string(), "1234".to_string());
        let result = run_score(&config).unwrap();

        assert_eq!(result.secret, result.guess);
        assert!(result.feedback.is_win());
    }

    #[test]
    fn score_rejects_malformed_secret() {
        let config = ScoreConfig::new("red blue".to_string(), "rbgy".to_string());
        let err = run_score(&config).unwrap_err();

        assert!(err.contains("Invalid secret"));
        assert!(err.contains('2'));
    }

    #[test]
    fn score_rejects_unknown_guess_symbol() {
        let config = ScoreConfig::new("rbgy".to_string(), "red blue teal green".to_string());
        let err = run_score(&config).unwrap_err();

        assert!(err.contains("Invalid guess"));
        assert!(err.contains("teal"));
    }
}
