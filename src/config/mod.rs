mod settings;

pub use settings::{
    Config, StorageBackend, StorageConfig, TomlConfig, TomlStorageConfig, TomlViewConfig,
    EXAMPLE_CONFIG,
};
