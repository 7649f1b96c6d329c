use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{entry::Entry, period::Period};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Persisted snapshot of the whole ledger: every entry plus the scalar state
/// that must survive a restart. The session-only category filter lives in the
/// controller, not here.
///
/// Every field carries a serde default so a snapshot with missing keys
/// degrades to the all-defaults state instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
    /// Whole-unit budget for the selected period; 0 or below means unset.
    #[serde(default)]
    pub budget: i64,
    #[serde(default = "Period::current")]
    pub selected_period: Period,
    /// Insertion-ordered, unbounded.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            budget: 0,
            selected_period: Period::current(),
            entries: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, entry: Entry) -> Uuid {
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Removes the first entry with the given id, returning it. `None` when
    /// no entry matches; callers treat that as a no-op, not an error.
    pub fn remove_entry(&mut self, id: Uuid) -> Option<Entry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
