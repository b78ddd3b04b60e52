//! Stored-blob fixtures and temporary storage backends

use roster::{Database, FileStorage, SqliteStorage};
use serde_json::{json, Value};
use tempfile::TempDir;

use super::determinism::{DeterministicUuidGenerator, TEST_TIMESTAMP};

/// A temporary data directory that is removed on drop
pub struct TempRoster {
    pub dir: TempDir,
}

impl TempRoster {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn sqlite(&self) -> SqliteStorage {
        let db = Database::open(self.dir.path().join("roster.db")).expect("Failed to open db");
        SqliteStorage::new(db)
    }

    pub fn files(&self) -> FileStorage {
        FileStorage::new(self.dir.path().join("data"))
    }
}

impl Default for TempRoster {
    fn default() -> Self {
        Self::new()
    }
}

/// A record in the pre-weekly layout: a single `status`, sometimes no `day`
pub fn legacy_record(
    ids: &DeterministicUuidGenerator,
    serial: &str,
    name: &str,
    time: &str,
    status: &str,
    day: Option<&str>,
) -> Value {
    let mut record = json!({
        "id": ids.next().to_string(),
        "serialNumber": serial,
        "name": name,
        "pickupLocation": "Eki",
        "company": "Dai 1",
        "time": time,
        "status": status,
        "lastUpdated": TEST_TIMESTAMP,
    });
    if let Some(day) = day {
        record["day"] = json!(day);
    }
    record
}

/// A small legacy collection mixing days and statuses
pub fn legacy_collection(ids: &DeterministicUuidGenerator) -> Value {
    json!([
        legacy_record(ids, "1", "Alice", "07:30", "ABSENT", None),
        legacy_record(ids, "2", "Bob", "06:10", "DROPPED_OFF", Some("Tuesday")),
        legacy_record(ids, "3", "Chandra", "07:05", "PENDING", None),
    ])
}
