//! Error types for the camp session.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while processing session commands.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Invalid command arguments; the message carries the usage line.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// The first word did not match any known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// No monster with the given name exists in the loaded tables.
    #[error("unknown monster: \"{0}\"")]
    UnknownMonster(String),

    /// Roster manipulation error.
    #[error("{0}")]
    Core(#[from] bz_core::CoreError),

    /// Loot engine error (including resolution without a selected hero).
    #[error("{0}")]
    Loot(#[from] bz_loot::LootError),

    /// Persistence error.
    #[error("{0}")]
    Store(#[from] bz_store::StoreError),
}
