//! Guess feedback calculation and representation
//!
//! Feedback for a guess carries three things:
//! - the count of exact matches (right color, right position),
//! - the count of misplaced matches (right color, wrong position), capped by
//!   multiset frequency so duplicates are never over-counted,
//! - a map from position to color for every exact match, so callers can
//!   reveal which positions are solved.

use super::{CODE_LENGTH, Code, Color};
use rustc_hash::FxHashMap;

/// Feedback for one guess against one secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    exact: u8,
    misplaced: u8,
    exact_positions: FxHashMap<usize, Color>,
}

impl Feedback {
    /// Score a guess against the secret
    ///
    /// Pure and total: both arguments are fixed-length codes, so there is no
    /// failure mode. Deterministic for fixed inputs.
    ///
    /// # Algorithm
    /// 1. Record every position where guess and secret agree (exact matches).
    /// 2. Count total color matches ignoring position: per color, the smaller
    ///    of its frequency in the secret and in the guess. Subtracting the
    ///    exact count leaves the misplaced count. The frequency cap keeps a
    ///    guess with three reds from claiming three matches against a secret
    ///    holding one red.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color, Feedback};
    ///
    /// let secret = Code::new([Color::Red, Color::Blue, Color::Green, Color::Yellow]);
    /// let guess = Code::new([Color::Blue, Color::Red, Color::Green, Color::Purple]);
    /// let feedback = Feedback::score(&secret, &guess);
    ///
    /// // Green is exactly placed; red and blue are swapped; purple misses.
    /// assert_eq!(feedback.exact(), 1);
    /// assert_eq!(feedback.misplaced(), 2);
    /// assert_eq!(feedback.solved_color_at(2), Some(Color::Green));
    /// ```
    #[must_use]
    pub fn score(secret: &Code, guess: &Code) -> Self {
        let mut exact_positions = FxHashMap::default();
        for (i, (&s, &g)) in secret.colors().iter().zip(guess.colors()).enumerate() {
            if s == g {
                exact_positions.insert(i, s);
            }
        }
        let exact = exact_positions.len() as u8;

        let secret_counts = secret.color_counts();
        let guess_counts = guess.color_counts();

        // Exact matches are a subset of the capped total, so the
        // subtraction cannot underflow.
        let total_matches: u8 = guess_counts
            .iter()
            .map(|(color, &count)| count.min(secret_counts.get(color).copied().unwrap_or(0)))
            .sum();
        let misplaced = total_matches - exact;

        Self {
            exact,
            misplaced,
            exact_positions,
        }
    }

    /// Count of positions matched exactly
    #[inline]
    #[must_use]
    pub const fn exact(&self) -> u8 {
        self.exact
    }

    /// Count of correct colors in wrong positions
    #[inline]
    #[must_use]
    pub const fn misplaced(&self) -> u8 {
        self.misplaced
    }

    /// Map from position to color for every exact match
    #[inline]
    #[must_use]
    pub const fn exact_positions(&self) -> &FxHashMap<usize, Color> {
        &self.exact_positions
    }

    /// The color solved at a position, if that position matched exactly
    ///
    /// An explicit presence check for per-position rendering: `None` means
    /// the position is still hidden.
    #[inline]
    #[must_use]
    pub fn solved_color_at(&self, position: usize) -> Option<Color> {
        self.exact_positions.get(&position).copied()
    }

    /// Whether the guess cracked the code (all positions exact)
    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.exact as usize == CODE_LENGTH
    }
}
