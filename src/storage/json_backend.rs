use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{config, ledger::Ledger};

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Stores the ledger as a single pretty-printed JSON document. Saves are
/// staged through a temporary file and renamed into place, so a failed write
/// leaves the previous snapshot untouched.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the canonical location, `~/.pocket_ledger/ledger.json`
    /// unless overridden via `POCKET_LEDGER_HOME`.
    pub fn new_default() -> Self {
        Self::new(config::ledger_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            config::ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            entries = ledger.entry_count(),
            "ledger saved"
        );
        Ok(())
    }

    fn load(&self) -> Result<Ledger> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no ledger file yet, using defaults");
            return Ok(Ledger::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
