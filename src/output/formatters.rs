//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Feedback};

/// Peg glyph masking an unsolved secret position
pub const HIDDEN_PEG: &str = "\u{2b24}"; // ⬤

/// Format feedback as a peg row: one ⚫ per exact match, one ⚪ per
/// misplaced match
#[must_use]
pub fn feedback_pegs(feedback: &Feedback) -> String {
    let mut pegs = String::new();
    for _ in 0..feedback.exact() {
        pegs.push('⚫');
    }
    for _ in 0..feedback.misplaced() {
        pegs.push('⚪');
    }
    pegs
}

/// Format the secret row with solved positions named and the rest masked
///
/// Position detail comes from the exact-match map via an explicit presence
/// check; unsolved positions render as [`HIDDEN_PEG`].
#[must_use]
pub fn reveal_line(feedback: &Feedback) -> String {
    let mut parts = Vec::with_capacity(CODE_LENGTH);
    for position in 0..CODE_LENGTH {
        match feedback.solved_color_at(position) {
            Some(color) => parts.push(color.name().to_string()),
            None => parts.push(HIDDEN_PEG.to_string()),
        }
    }
    parts.join(" ")
}

/// The fully masked secret row shown before any position is solved
#[must_use]
pub fn masked_secret() -> String {
    vec![HIDDEN_PEG; CODE_LENGTH].join(" ")
}

/// One-line textual summary of the two feedback counts
#[must_use]
pub fn feedback_counts(feedback: &Feedback) -> String {
    format!(
        "Correct positions: {}, correct colors: {}",
        feedback.exact(),
        feedback.misplaced()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Color};

    fn sample_feedback() -> Feedback {
        // Green exactly placed, red and blue swapped
        let secret = Code::new([Color::Red, Color::Blue, Color::Green, Color::Yellow]);
        let guess = Code::new([Color::Blue, Color::Red, Color::Green, Color::Purple]);
        Feedback::score(&secret, &guess)
    }

    #[test]
    fn pegs_order_exact_before_misplaced() {
        let pegs = feedback_pegs(&sample_feedback());
        assert_eq!(pegs, "⚫⚪⚪");
    }

    #[test]
    fn pegs_empty_when_nothing_matches() {
        let secret = Code::new([Color::Red; 4]);
        let guess = Code::new([Color::Blue; 4]);
        let pegs = feedback_pegs(&Feedback::score(&secret, &guess));
        assert!(pegs.is_empty());
    }

    #[test]
    fn pegs_full_win() {
        let secret = Code::new([Color::Red; 4]);
        let pegs = feedback_pegs(&Feedback::score(&secret, &secret));
        assert_eq!(pegs, "⚫⚫⚫⚫");
    }

    #[test]
    fn reveal_names_solved_positions_only() {
        let line = reveal_line(&sample_feedback());
        assert_eq!(line, format!("{HIDDEN_PEG} {HIDDEN_PEG} green {HIDDEN_PEG}"));
    }

    #[test]
    fn reveal_of_a_win_names_everything() {
        let secret = Code::new([Color::Orange, Color::Purple, Color::Red, Color::Blue]);
        let line = reveal_line(&Feedback::score(&secret, &secret));
        assert_eq!(line, "orange purple red blue");
    }

    #[test]
    fn masked_secret_hides_all_positions() {
        assert_eq!(
            masked_secret(),
            format!("{HIDDEN_PEG} {HIDDEN_PEG} {HIDDEN_PEG} {HIDDEN_PEG}")
        );
    }

    #[test]
    fn counts_line_carries_both_numbers() {
        let line = feedback_counts(&sample_feedback());
        assert_eq!(line, "Correct positions: 1, correct colors: 2");
    }
}
