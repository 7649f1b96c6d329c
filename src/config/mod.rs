use dirs::home_dir;
use std::{env, fs, io, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".pocket_ledger";
const LEDGER_FILE: &str = "ledger.json";
const HOME_ENV_VAR: &str = "POCKET_LEDGER_HOME";

/// Returns the application data directory, defaulting to `~/.pocket_ledger`.
/// `POCKET_LEDGER_HOME` overrides the location.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV_VAR) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Canonical path of the ledger snapshot file.
pub fn ledger_file() -> PathBuf {
    app_data_dir().join(LEDGER_FILE)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
