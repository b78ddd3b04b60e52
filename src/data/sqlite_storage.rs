//! SQLite-backed blob storage (key-value table)

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use super::database::Database;
use super::storage::{BlobStorage, StorageError};

/// Blob storage over the `roster_blobs` table
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    db: Database,
}

impl SqliteStorage {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Keys currently stored, sorted
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let keys = self.db.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT key FROM roster_blobs ORDER BY key")?;
            let keys = stmt
                .query_map([], |row| row.get(0))?
                .collect::<rusqlite::Result<Vec<String>>>()?;
            Ok(keys)
        })?;
        Ok(keys)
    }
}

impl BlobStorage for SqliteStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self.db.with_connection(|conn| {
            conn.query_row(
                "SELECT value FROM roster_blobs WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
        })?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let now = Utc::now().to_rfc3339();
        self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO roster_blobs (key, value, updated_at, created_at)
                 VALUES (?1, ?2, ?3, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
                params![key, value, now],
            )
        })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.db.with_connection(|conn| {
            conn.execute("DELETE FROM roster_blobs WHERE key = ?1", params![key])
        })?;
        Ok(())
    }
}
