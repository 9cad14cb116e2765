//! Game sessions and secret generation
//!
//! The stateful half of the crate: drawing a secret at game start and
//! tracking one session's guess history and win status.

mod secret;
mod session;

pub use secret::{generate_secret, generate_secret_with};
pub use session::{GuessRecord, Session, Status};
