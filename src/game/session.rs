//! Game sessions
//!
//! One session owns one secret, the append-only guess history, and the win
//! status. Sessions are plain values: independent games never share state.

use super::secret::{generate_secret, generate_secret_with};
use crate::core::{Code, Feedback};
use rand::Rng;

/// Progress of a session
///
/// `Won` is terminal: once the code is cracked the status never reverts.
/// There is no losing state; a turn limit, if any, is caller policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
}

/// One submitted guess together with the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Code,
    pub feedback: Feedback,
}

/// One game: a secret, the guesses so far, and whether the code is cracked
#[derive(Debug, Clone)]
pub struct Session {
    secret: Code,
    history: Vec<GuessRecord>,
    status: Status,
}

impl Session {
    /// Start a session with a freshly drawn random secret
    #[must_use]
    pub fn new() -> Self {
        Self::with_secret(generate_secret())
    }

    /// Start a session drawing the secret from the given random source
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_secret(generate_secret_with(rng))
    }

    /// Start a session with a known secret
    ///
    /// Used by tests and by scripted scoring, where the secret is supplied
    /// rather than drawn.
    #[must_use]
    pub const fn with_secret(secret: Code) -> Self {
        Self {
            secret,
            history: Vec::new(),
            status: Status::InProgress,
        }
    }

    /// Submit a guess, record it, and return its feedback
    ///
    /// Appends to the history unconditionally and flips the status to `Won`
    /// on a full match. Total: a well-formed `Code` always scores.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color};
    /// use mastermind::game::{Session, Status};
    ///
    /// let secret = Code::new([Color::Red, Color::Blue, Color::Green, Color::Yellow]);
    /// let mut session = Session::with_secret(secret);
    ///
    /// let feedback = session.submit(Code::new([Color::Red; 4]));
    /// assert_eq!(feedback.exact(), 1);
    /// assert_eq!(session.status(), Status::InProgress);
    ///
    /// session.submit(secret);
    /// assert_eq!(session.status(), Status::Won);
    /// ```
    pub fn submit(&mut self, guess: Code) -> Feedback {
        let feedback = Feedback::score(&self.secret, &guess);
        if feedback.is_win() {
            self.status = Status::Won;
        }
        self.history.push(GuessRecord {
            guess,
            feedback: feedback.clone(),
        });
        feedback
    }

    /// The hidden secret
    ///
    /// Exposed for presentation; frontends keep it masked until the game
    /// ends or a position is solved.
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }

    /// Current status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether the code has been cracked
    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == Status::Won
    }

    /// All guesses so far, in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// 1-based number of the next turn to play
    #[inline]
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
