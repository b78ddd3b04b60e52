//! Data persistence layer for the roster
//!
//! The roster is one serialized blob kept behind the [`BlobStorage`] port.
//! SQLite and plain-file backends are provided, plus an in-memory one for tests.

mod database;
mod migrations;
mod models;
mod record_store;
mod schema;
mod seed;
mod sqlite_storage;
mod storage;

pub use database::{Database, DatabaseError};
pub use models::{
    new_passenger_id, timestamp_now, Passenger, RosterError, Status, WeekIndex, Weekday,
    WeeklyStatus, WEEKS_TRACKED,
};
pub use record_store::{RecordStore, CURRENT_KEY, LEGACY_KEY};
pub use schema::{migrate_collection, migrate_record, MigratedCollection, RecordMigration};
pub use seed::{seed_passengers, SEED_TIMESTAMP};
pub use sqlite_storage::SqliteStorage;
pub use storage::{BlobStorage, FileStorage, MemoryStorage, StorageError};
