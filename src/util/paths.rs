//! Path utilities for the roster data directory

use std::path::PathBuf;
use std::sync::OnceLock;

/// Global storage for custom data directory path
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
/// Must be called early in main() before any other path functions are used.
/// If custom_path is None, uses the default ~/.shuttle-roster location.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if DATA_DIR.set(path.clone()).is_err() {
        let existing = DATA_DIR
            .get()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        tracing::debug!(
            path = %path.display(),
            existing = %existing,
            "Data directory already initialized"
        );
    }
}

/// Get the default data directory path (~/.shuttle-roster)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".shuttle-roster"))
        .unwrap_or_else(|| PathBuf::from(".shuttle-roster"))
}

/// Get the base data directory.
/// Returns the custom path if set via init_data_dir(), otherwise ~/.shuttle-roster
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the database file path (~/.shuttle-roster/roster.db)
pub fn database_path() -> PathBuf {
    data_dir().join("roster.db")
}

/// Get the directory used by the file storage backend (~/.shuttle-roster/data)
pub fn blobs_dir() -> PathBuf {
    data_dir().join("data")
}

/// Get the logs directory (~/.shuttle-roster/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the default log file path (~/.shuttle-roster/logs/roster.log)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("roster.log")
}

/// Get the config file path (~/.shuttle-roster/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_data_dir() {
        let base = data_dir();
        assert_eq!(database_path(), base.join("roster.db"));
        assert_eq!(log_file_path(), base.join("logs").join("roster.log"));
        assert!(config_path().starts_with(&base));
        assert!(blobs_dir().starts_with(&base));
    }
}
