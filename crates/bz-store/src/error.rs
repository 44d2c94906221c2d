//! Error types for the persistence boundary.

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading or saving the roster.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored blob is not a valid roster document.
    #[error("invalid roster document: {0}")]
    Format(#[from] serde_json::Error),
}
