//! Error types for roster manipulation.

use crate::hero::HeroId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating heroes and the roster.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A hero with the same name already exists in the roster.
    #[error("hero already exists: \"{0}\"")]
    DuplicateName(String),

    /// No hero with the given name exists in the roster.
    #[error("unknown hero: \"{0}\"")]
    UnknownHero(String),

    /// The requested hero ID does not exist in the roster.
    #[error("hero not found: {0}")]
    HeroNotFound(HeroId),

    /// The named hero field is not editable or does not exist.
    #[error("unknown hero field: \"{0}\"")]
    UnknownField(String),
}
