use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::{
    BlobStorage, Database, FileStorage, SqliteStorage, StorageError, WeekIndex, CURRENT_KEY,
    LEGACY_KEY,
};
use crate::util::paths::{blobs_dir, config_path};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Where and under which keys the roster blob is kept
    pub storage: StorageConfig,
    /// Week selected when none is given on the command line
    pub default_week: WeekIndex,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub current_key: String,
    pub legacy_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            current_key: CURRENT_KEY.to_string(),
            legacy_key: LEGACY_KEY.to_string(),
        }
    }
}

impl StorageConfig {
    /// Open the configured backend under the current data directory
    pub fn open(&self) -> Result<Box<dyn BlobStorage>, StorageError> {
        let storage: Box<dyn BlobStorage> = match self.backend {
            StorageBackend::Sqlite => Box::new(SqliteStorage::new(Database::open_default()?)),
            StorageBackend::File => Box::new(FileStorage::new(blobs_dir())),
        };
        Ok(storage)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlStorageConfig {
    pub backend: Option<StorageBackend>,
    pub current_key: Option<String>,
    pub legacy_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlViewConfig {
    /// 1-based, as shown to users
    pub default_week: Option<usize>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub storage: Option<TomlStorageConfig>,
    pub view: Option<TomlViewConfig>,
}

impl Config {
    /// Load configuration from the default location, creating it on first run
    pub fn load() -> Self {
        let config_file = config_path();

        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from `path`, merging with defaults.
    ///
    /// A missing or malformed file leaves the defaults in place.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Config::default();
        };
        match toml::from_str::<TomlConfig>(&contents) {
            Ok(toml_config) => Self::from_toml(toml_config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed config");
                Config::default()
            }
        }
    }

    fn from_toml(toml_config: TomlConfig) -> Self {
        let mut config = Config::default();

        if let Some(storage) = toml_config.storage {
            if let Some(backend) = storage.backend {
                config.storage.backend = backend;
            }
            if let Some(key) = storage.current_key {
                config.storage.current_key = key;
            }
            if let Some(key) = storage.legacy_key {
                config.storage.legacy_key = key;
            }
        }

        if let Some(week) = toml_config.view.and_then(|view| view.default_week) {
            match WeekIndex::from_ordinal(week) {
                Ok(index) => config.default_week = index,
                Err(e) => tracing::warn!(error = %e, "Ignoring configured default week"),
            }
        }

        config
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &PathBuf) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_backend(mut self, backend: StorageBackend) -> Self {
        self.storage.backend = backend;
        self
    }
}
