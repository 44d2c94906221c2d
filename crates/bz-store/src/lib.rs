//! Roster persistence for Beutezug.
//!
//! Stores see the roster only as an opaque string blob: one JSON document
//! holding every hero. The session saves a whole snapshot after each
//! mutation (last-write-wins); stores are never authoritative between
//! calls. An absent blob means an empty roster, not an error.

pub mod error;
pub mod file;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use bz_core::Roster;

/// Opaque blob storage for the serialized roster.
pub trait RosterStore {
    /// Fetch the stored blob, or `None` if nothing has been saved yet.
    fn load_blob(&self) -> StoreResult<Option<String>>;

    /// Replace the stored blob.
    fn save_blob(&mut self, blob: &str) -> StoreResult<()>;
}

/// Load the roster from a store; an absent blob yields an empty roster.
pub fn load_roster(store: &dyn RosterStore) -> StoreResult<Roster> {
    match store.load_blob()? {
        Some(blob) => Ok(serde_json::from_str(&blob)?),
        None => Ok(Roster::new()),
    }
}

/// Serialize the full roster and hand it to the store.
pub fn save_roster(store: &mut dyn RosterStore, roster: &Roster) -> StoreResult<()> {
    let blob = serde_json::to_string_pretty(roster)?;
    store.save_blob(&blob)
}
