//! Interactive camp session for Beutezug.
//!
//! A `CampSession` is the single owner of the roster, the loot tables, the
//! session history, and the random source. It exposes a line-command
//! `process` surface the CLI REPL drives, and persists a whole-roster
//! snapshot after every mutating command.

pub mod config;
pub mod error;
pub mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use session::CampSession;
