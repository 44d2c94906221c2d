//! In-memory store for tests and embedding hosts.

use crate::error::StoreResult;
use crate::RosterStore;

/// A `RosterStore` that keeps the blob in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a blob.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }
}

impl RosterStore for MemoryStore {
    fn load_blob(&self) -> StoreResult<Option<String>> {
        Ok(self.blob.clone())
    }

    fn save_blob(&mut self, blob: &str) -> StoreResult<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}
