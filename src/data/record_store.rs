//! Persisted passenger collection
//!
//! The whole roster lives in one serialized blob under a fixed key. Every save
//! replaces the blob wholesale; there is no partial update path.

use serde_json::Value;

use super::models::Passenger;
use super::schema::migrate_collection;
use super::seed::seed_passengers;
use super::storage::{BlobStorage, StorageError};

/// Key holding the current blob
pub const CURRENT_KEY: &str = "transport_schedule_db_v3";
/// Key used by releases before per-day schedules
pub const LEGACY_KEY: &str = "transport_schedule_db_v2";

/// Load/save/reset of the roster over a blob storage backend
#[derive(Debug)]
pub struct RecordStore<S> {
    storage: S,
    current_key: String,
    legacy_key: String,
}

impl<S: BlobStorage> RecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_keys(storage, CURRENT_KEY, LEGACY_KEY)
    }

    pub fn with_keys(
        storage: S,
        current_key: impl Into<String>,
        legacy_key: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            current_key: current_key.into(),
            legacy_key: legacy_key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the roster, migrating older shapes and seeding an empty store.
    ///
    /// Unparseable data never reaches the caller as an error: it is logged and
    /// the seed dataset is returned instead. Only storage I/O failures propagate.
    pub fn load(&self) -> Result<Vec<Passenger>, StorageError> {
        // An empty blob means nothing was ever saved
        let raw = match self.storage.read(&self.current_key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return self.load_legacy_or_seed(),
        };

        let values = match parse_blob(&raw) {
            Ok(values) => values,
            Err(e) => {
                tracing::error!(
                    key = %self.current_key,
                    error = %e,
                    "Failed to parse stored roster, falling back to seed data"
                );
                return Ok(seed_passengers());
            }
        };

        let outcome = migrate_collection(values);
        if outcome.changed {
            tracing::info!(
                key = %self.current_key,
                records = outcome.records.len(),
                "Migrated stored roster to current schema"
            );
            self.save(&outcome.records)?;
        } else {
            tracing::debug!(records = outcome.records.len(), "Loaded roster");
        }
        Ok(outcome.records)
    }

    /// Persist the full collection, replacing whatever was stored
    pub fn save(&self, records: &[Passenger]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(records)?;
        self.storage.write(&self.current_key, &blob)
    }

    /// Discard all stored roster data and persist the seed dataset.
    ///
    /// Callers must confirm with the user first; this cannot be undone.
    pub fn reset(&self) -> Result<Vec<Passenger>, StorageError> {
        tracing::warn!(key = %self.current_key, "Resetting roster to seed data");
        self.storage.remove(&self.legacy_key)?;
        self.persist_seed()
    }

    fn load_legacy_or_seed(&self) -> Result<Vec<Passenger>, StorageError> {
        let legacy = self.storage.read(&self.legacy_key)?;
        if let Some(raw) = legacy.filter(|raw| !raw.trim().is_empty()) {
            match parse_blob(&raw) {
                Ok(values) => {
                    let outcome = migrate_collection(values);
                    tracing::info!(
                        from = %self.legacy_key,
                        to = %self.current_key,
                        records = outcome.records.len(),
                        "Migrated legacy roster"
                    );
                    self.save(&outcome.records)?;
                    return Ok(outcome.records);
                }
                Err(e) => {
                    tracing::error!(
                        key = %self.legacy_key,
                        error = %e,
                        "Legacy roster migration failed"
                    );
                }
            }
        }

        tracing::info!(key = %self.current_key, "Seeding empty roster store");
        self.persist_seed()
    }

    fn persist_seed(&self) -> Result<Vec<Passenger>, StorageError> {
        let seed = seed_passengers();
        self.save(&seed)?;
        Ok(seed)
    }
}

fn parse_blob(raw: &str) -> serde_json::Result<Vec<Value>> {
    serde_json::from_str(raw)
}
