//! Session-scoped loot history.

use serde::{Deserialize, Serialize};

use crate::resolve::LootRecord;

/// An append-only list of resolution events, most recent first.
///
/// History lives for the session only; it is never written to the roster
/// store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LootHistory {
    records: Vec<LootRecord>,
}

impl LootHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a resolution record.
    pub fn record(&mut self, record: LootRecord) {
        self.records.insert(0, record);
    }

    /// All records, most recent first.
    pub fn records(&self) -> &[LootRecord] {
        &self.records
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&LootRecord> {
        self.records.first()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
