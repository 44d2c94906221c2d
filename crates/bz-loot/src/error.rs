//! Error types for the loot engine.

/// Errors that can occur during loot resolution.
#[derive(Debug, thiserror::Error)]
pub enum LootError {
    /// The tabular source is structurally unreadable (not merely sparse).
    #[error("unreadable loot source: {0}")]
    SourceFormat(String),

    /// A defeat was resolved with no hero to receive the rewards.
    #[error("no hero selected for loot resolution")]
    MissingHero,
}

/// Convenience result type for loot operations.
pub type LootResult<T> = Result<T, LootError>;
