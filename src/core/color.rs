//! The fixed color alphabet
//!
//! Six colors, fixed for the lifetime of every game. The table is a
//! process-wide constant (`Color::ALL`) and is never mutated.

use std::fmt;

/// One symbol from the fixed alphabet
///
/// Colors carry three stable identities: a display name, a 1-based numeric
/// code, and a one-letter initial (all six initials are distinct, so compact
/// text entry like `rbgy` is unambiguous).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
}

impl Color {
    /// Number of colors in the alphabet
    pub const COUNT: usize = 6;

    /// The complete alphabet, in code order (1..=6)
    pub const ALL: [Self; Self::COUNT] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
    ];

    /// Get the lowercase display name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Purple => "purple",
        }
    }

    /// Get the one-letter lowercase initial
    #[inline]
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Orange => 'o',
            Self::Purple => 'p',
        }
    }

    /// Get the 1-based numeric code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Red => 1,
            Self::Blue => 2,
            Self::Green => 3,
            Self::Yellow => 4,
            Self::Orange => 5,
            Self::Purple => 6,
        }
    }

    /// Look up a color by its 1-based numeric code
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_code(1), Some(Color::Red));
    /// assert_eq!(Color::from_code(6), Some(Color::Purple));
    /// assert_eq!(Color::from_code(0), None);
    /// assert_eq!(Color::from_code(7), None);
    /// ```
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Red),
            2 => Some(Self::Blue),
            3 => Some(Self::Green),
            4 => Some(Self::Yellow),
            5 => Some(Self::Orange),
            6 => Some(Self::Purple),
            _ => None,
        }
    }

    /// Look up a color by its initial, case-insensitively
    #[must_use]
    pub fn from_initial(ch: char) -> Option<Self> {
        let lower = ch.to_ascii_lowercase();
        Self::ALL.into_iter().find(|color| color.initial() == lower)
    }

    /// Look up a color by its full name, case-insensitively
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }

    /// Parse one token: a full name, an initial, or a digit code
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::parse_token("red"), Some(Color::Red));
    /// assert_eq!(Color::parse_token("B"), Some(Color::Blue));
    /// assert_eq!(Color::parse_token("3"), Some(Color::Green));
    /// assert_eq!(Color::parse_token("teal"), None);
    /// ```
    #[must_use]
    pub fn parse_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            // Single character: digit code or initial
            if let Some(digit) = ch.to_digit(10) {
                return Self::from_code(digit as u8);
            }
            return Self::from_initial(ch);
        }
        Self::from_name(token)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
