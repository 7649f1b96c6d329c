use thiserror::Error;

/// Persistence failures the ledger can run into. All of these are recovered
/// locally by falling back to the last good state or to defaults; nothing in
/// this taxonomy is allowed to surface as a user-facing failure.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
