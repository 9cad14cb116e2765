//! Color code sequences
//!
//! A `Code` is an ordered, immutable sequence of exactly four colors. One
//! type serves both roles in a game: the hidden secret and a submitted
//! guess. Construction from untrusted input (slices, text) validates length
//! and symbols, so a `Code` that exists is always well-formed.

use super::Color;
use rustc_hash::FxHashMap;
use std::fmt;

/// Length of every secret and every guess
pub const CODE_LENGTH: usize = 4;

/// A fixed-length sequence of colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    colors: [Color; CODE_LENGTH],
}

/// Error type for malformed code input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// The input did not contain exactly [`CODE_LENGTH`] symbols
    InvalidLength(usize),
    /// A token named no color in the alphabet
    UnknownSymbol(String),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Guess must contain exactly {CODE_LENGTH} colors, got {len}")
            }
            Self::UnknownSymbol(token) => {
                write!(f, "'{token}' is not a color (use red, blue, green, yellow, orange, purple)")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from a typed color array
    ///
    /// Infallible: the array length is the code length by construction.
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self { colors }
    }

    /// Create a code from a color slice
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if the slice does not hold exactly
    /// [`CODE_LENGTH`] colors.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, CodeError, Color};
    ///
    /// let code = Code::from_slice(&[Color::Red, Color::Blue, Color::Green, Color::Yellow]);
    /// assert!(code.is_ok());
    ///
    /// let short = Code::from_slice(&[Color::Red, Color::Blue, Color::Green]);
    /// assert_eq!(short, Err(CodeError::InvalidLength(3)));
    /// ```
    pub fn from_slice(colors: &[Color]) -> Result<Self, CodeError> {
        let colors: [Color; CODE_LENGTH] = colors
            .try_into()
            .map_err(|_| CodeError::InvalidLength(colors.len()))?;
        Ok(Self { colors })
    }

    /// Parse a code from text
    ///
    /// Accepts four tokens separated by whitespace or commas, each a full
    /// color name, an initial, or a digit code. A single unbroken token that
    /// is not itself a color name is read one symbol per character, so
    /// `"rbgy"` and `"1234"` both work.
    ///
    /// # Errors
    /// Returns `CodeError::UnknownSymbol` for a token naming no color, or
    /// `CodeError::InvalidLength` when the input does not yield exactly
    /// [`CODE_LENGTH`] symbols.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color};
    ///
    /// let a = Code::parse("red blue green yellow").unwrap();
    /// let b = Code::parse("r,b,g,y").unwrap();
    /// let c = Code::parse("1234").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a, c);
    ///
    /// assert!(Code::parse("red blue teal green").is_err());
    /// assert!(Code::parse("red blue green").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let tokens: Vec<&str> = input
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|token| !token.is_empty())
            .collect();

        if let [token] = tokens.as_slice()
            && Color::parse_token(token).is_none()
        {
            return Self::parse_compact(token);
        }

        let mut colors = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let color = Color::parse_token(token)
                .ok_or_else(|| CodeError::UnknownSymbol((*token).to_string()))?;
            colors.push(color);
        }
        Self::from_slice(&colors)
    }

    /// Parse an unbroken token one symbol per character (`"rbgy"`, `"1234"`)
    fn parse_compact(token: &str) -> Result<Self, CodeError> {
        let mut colors = Vec::with_capacity(token.chars().count());
        for ch in token.chars() {
            let color = match ch.to_digit(10) {
                Some(digit) => Color::from_code(digit as u8),
                None => Color::from_initial(ch),
            };
            colors.push(color.ok_or_else(|| CodeError::UnknownSymbol(ch.to_string()))?);
        }
        Self::from_slice(&colors)
    }

    /// Get the colors as a fixed-size array
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.colors
    }

    /// Get the color at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if `position >= CODE_LENGTH`
    #[inline]
    #[must_use]
    pub const fn color_at(&self, position: usize) -> Color {
        self.colors[position]
    }

    /// Get the multiset frequency of each color in the code
    ///
    /// Used by the scorer to cap duplicate matches.
    #[inline]
    pub(crate) fn color_counts(&self) -> FxHashMap<Color, u8> {
        let mut counts = FxHashMap::default();
        for &color in &self.colors {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for color in &self.colors {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{color}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Green, Orange, Purple, Red, Yellow};

    #[test]
    fn new_from_array() {
        let code = Code::new([Red, Blue, Green, Yellow]);
        assert_eq!(code.colors(), &[Red, Blue, Green, Yellow]);
        assert_eq!(code.color_at(0), Red);
        assert_eq!(code.color_at(3), Yellow);
    }

    #[test]
    fn from_slice_valid() {
        let code = Code::from_slice(&[Orange, Orange, Purple, Red]).unwrap();
        assert_eq!(code.colors(), &[Orange, Orange, Purple, Red]);
    }

    #[test]
    fn from_slice_invalid_length() {
        assert_eq!(Code::from_slice(&[]), Err(CodeError::InvalidLength(0)));
        assert_eq!(
            Code::from_slice(&[Red, Blue, Green]),
            Err(CodeError::InvalidLength(3))
        );
        assert_eq!(
            Code::from_slice(&[Red, Blue, Green, Yellow, Orange]),
            Err(CodeError::InvalidLength(5))
        );
    }

    #[test]
    fn parse_full_names() {
        let code = Code::parse("red blue green yellow").unwrap();
        assert_eq!(code, Code::new([Red, Blue, Green, Yellow]));
    }

    #[test]
    fn parse_mixed_case_and_commas() {
        let code = Code::parse("Red, BLUE, green,Yellow").unwrap();
        assert_eq!(code, Code::new([Red, Blue, Green, Yellow]));
    }

    #[test]
    fn parse_initials_spaced() {
        let code = Code::parse("o o p r").unwrap();
        assert_eq!(code, Code::new([Orange, Orange, Purple, Red]));
    }

    #[test]
    fn parse_compact_initials() {
        let code = Code::parse("rbgy").unwrap();
        assert_eq!(code, Code::new([Red, Blue, Green, Yellow]));
    }

    #[test]
    fn parse_compact_digits() {
        let code = Code::parse("1234").unwrap();
        assert_eq!(code, Code::new([Red, Blue, Green, Yellow]));
        let code = Code::parse("6655").unwrap();
        assert_eq!(code, Code::new([Purple, Purple, Orange, Orange]));
    }

    #[test]
    fn parse_unknown_symbol() {
        assert_eq!(
            Code::parse("red blue teal green"),
            Err(CodeError::UnknownSymbol("teal".to_string()))
        );
        assert_eq!(
            Code::parse("zzzz"),
            Err(CodeError::UnknownSymbol("z".to_string()))
        );
    }

    #[test]
    fn parse_wrong_count() {
        assert_eq!(Code::parse(""), Err(CodeError::InvalidLength(0)));
        assert_eq!(
            Code::parse("red blue green"),
            Err(CodeError::InvalidLength(3))
        );
        assert_eq!(
            Code::parse("red blue green yellow orange"),
            Err(CodeError::InvalidLength(5))
        );
        // A lone color name is one symbol, not a compact string
        assert_eq!(Code::parse("red"), Err(CodeError::InvalidLength(1)));
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let code: Code = "purple orange yellow green".parse().unwrap();
        assert_eq!(code, Code::new([Purple, Orange, Yellow, Green]));
        assert!("nope".parse::<Code>().is_err());
    }

    #[test]
    fn color_counts_with_duplicates() {
        let code = Code::new([Red, Red, Blue, Green]);
        let counts = code.color_counts();
        assert_eq!(counts.get(&Red), Some(&2));
        assert_eq!(counts.get(&Blue), Some(&1));
        assert_eq!(counts.get(&Green), Some(&1));
        assert_eq!(counts.get(&Yellow), None);
    }

    #[test]
    fn color_counts_all_same() {
        let code = Code::new([Purple; 4]);
        let counts = code.color_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&Purple), Some(&4));
    }

    #[test]
    fn display_joins_names() {
        let code = Code::new([Red, Blue, Green, Yellow]);
        assert_eq!(format!("{code}"), "red blue green yellow");
    }

    #[test]
    fn error_display_mentions_cause() {
        let message = format!("{}", CodeError::InvalidLength(3));
        assert!(message.contains("exactly 4"));
        assert!(message.contains('3'));

        let message = format!("{}", CodeError::UnknownSymbol("teal".to_string()));
        assert!(message.contains("teal"));
    }
}
