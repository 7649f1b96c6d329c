pub mod json_backend;

use crate::{errors::LedgerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing the ledger
/// snapshot. The whole snapshot is written on every save; there is no
/// partial update surface.
pub trait StorageBackend {
    fn save(&self, ledger: &Ledger) -> Result<()>;

    /// Last saved snapshot. A store that has never been written returns the
    /// default ledger, not an error; only an unreadable or corrupt snapshot
    /// errors.
    fn load(&self) -> Result<Ledger>;

    /// Loads the last snapshot, collapsing any failure to the default state.
    /// Storage problems are logged here and never cross this boundary.
    fn load_or_default(&self) -> Ledger {
        match self.load() {
            Ok(ledger) => ledger,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load ledger, starting from defaults");
                Ledger::new()
            }
        }
    }
}

pub use json_backend::JsonStorage;
