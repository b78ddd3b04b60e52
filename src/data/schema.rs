//! Record-level schema migrations for stored roster blobs.
//!
//! Older blobs hold records that predate the `day` and `weeklyStatus` fields
//! (a single scalar `status` was used before five-week tracking). Each step
//! below knows how to detect whether a record already has its shape and how
//! to bring it up to date. Steps are pure functions over the raw JSON object
//! and run in version order, so a record that was only partially migrated is
//! picked up from wherever it left off.

use serde_json::{Map, Value};

use super::models::{new_passenger_id, Passenger, Status, Weekday, WEEKS_TRACKED};

type Record = Map<String, Value>;

/// A record migration step
pub struct RecordMigration {
    /// Unique version number (steps run in order)
    pub version: u32,
    /// Human-readable name for the step
    pub name: &'static str,
    /// Whether a record already satisfies this step
    pub is_applied: fn(&Record) -> bool,
    /// Bring a record up to this step's shape
    pub apply: fn(Record) -> Record,
}

/// All steps in order. New steps should be added at the end.
pub const RECORD_MIGRATIONS: &[RecordMigration] = &[
    RecordMigration {
        version: 1,
        name: "default_day",
        is_applied: has_canonical_day,
        apply: default_day,
    },
    RecordMigration {
        version: 2,
        name: "expand_weekly_status",
        is_applied: has_weekly_status,
        apply: expand_weekly_status,
    },
    RecordMigration {
        version: 3,
        name: "normalize_weekly_status",
        is_applied: has_five_known_statuses,
        apply: normalize_weekly_status,
    },
    RecordMigration {
        version: 4,
        name: "assign_missing_id",
        is_applied: has_string_id,
        apply: assign_missing_id,
    },
    RecordMigration {
        version: 5,
        name: "fill_missing_text",
        is_applied: has_all_text_fields,
        apply: fill_missing_text,
    },
];

const TEXT_FIELDS: [&str; 6] = [
    "serialNumber",
    "name",
    "pickupLocation",
    "company",
    "time",
    "lastUpdated",
];

/// Outcome of migrating a whole collection
#[derive(Debug)]
pub struct MigratedCollection {
    pub records: Vec<Passenger>,
    /// True if any record was rewritten or dropped
    pub changed: bool,
}

/// Migrate one raw record, returning it together with whether anything changed
pub fn migrate_record(mut record: Record) -> (Record, bool) {
    let mut changed = false;
    for step in RECORD_MIGRATIONS {
        if (step.is_applied)(&record) {
            continue;
        }
        let id = record.get("id").and_then(Value::as_str).unwrap_or("<none>");
        tracing::debug!(
            version = step.version,
            name = step.name,
            id,
            "Applying record migration"
        );
        record = (step.apply)(record);
        changed = true;
    }
    (record, changed)
}

/// Migrate every entry of a parsed blob.
///
/// Entries that are not JSON objects cannot be recovered and are dropped.
pub fn migrate_collection(values: Vec<Value>) -> MigratedCollection {
    let mut changed = false;
    let mut records = Vec::with_capacity(values.len());

    for value in values {
        let raw = match value {
            Value::Object(raw) => raw,
            other => {
                tracing::warn!(entry = %other, "Dropping non-object roster entry");
                changed = true;
                continue;
            }
        };

        let (migrated, record_changed) = migrate_record(raw);
        changed |= record_changed;

        match serde_json::from_value::<Passenger>(Value::Object(migrated)) {
            Ok(passenger) => records.push(passenger),
            Err(e) => {
                tracing::warn!(error = %e, "Dropping roster entry that failed to decode");
                changed = true;
            }
        }
    }

    MigratedCollection { records, changed }
}

fn has_canonical_day(record: &Record) -> bool {
    record
        .get("day")
        .and_then(Value::as_str)
        .is_some_and(|day| Weekday::ALL.iter().any(|d| d.as_str() == day))
}

/// Missing days become Monday; recognisable spellings are canonicalised.
fn default_day(mut record: Record) -> Record {
    let day = record
        .get("day")
        .and_then(Value::as_str)
        .and_then(|day| day.parse::<Weekday>().ok())
        .unwrap_or(Weekday::Monday);
    record.insert("day".into(), Value::String(day.as_str().into()));
    record
}

fn has_weekly_status(record: &Record) -> bool {
    record.get("weeklyStatus").is_some_and(Value::is_array)
}

/// The legacy scalar `status` carries over as week 0; later weeks start pending.
fn expand_weekly_status(mut record: Record) -> Record {
    let first = match record.remove("status") {
        Some(Value::String(status)) if !status.is_empty() => Value::String(status),
        _ => Value::String(Status::Pending.as_str().into()),
    };
    let mut weeks = vec![Value::String(Status::Pending.as_str().into()); WEEKS_TRACKED];
    weeks[0] = first;
    record.insert("weeklyStatus".into(), Value::Array(weeks));
    record
}

fn is_known_status(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| Status::ALL.iter().any(|status| status.as_str() == s))
}

fn has_five_known_statuses(record: &Record) -> bool {
    record
        .get("weeklyStatus")
        .and_then(Value::as_array)
        .is_some_and(|weeks| weeks.len() == WEEKS_TRACKED && weeks.iter().all(is_known_status))
}

/// Pad or truncate to five weeks; anything unrecognised reads as pending.
fn normalize_weekly_status(mut record: Record) -> Record {
    let existing = match record.remove("weeklyStatus") {
        Some(Value::Array(weeks)) => weeks,
        _ => Vec::new(),
    };
    let pending = Value::String(Status::Pending.as_str().into());
    let weeks: Vec<Value> = existing
        .into_iter()
        .map(|week| if is_known_status(&week) { week } else { pending.clone() })
        .chain(std::iter::repeat(pending.clone()))
        .take(WEEKS_TRACKED)
        .collect();
    record.insert("weeklyStatus".into(), Value::Array(weeks));
    record
}

fn has_string_id(record: &Record) -> bool {
    record
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(|id| !id.is_empty())
}

fn assign_missing_id(mut record: Record) -> Record {
    let id = match record.get("id") {
        Some(Value::Number(n)) => n.to_string(),
        _ => new_passenger_id(),
    };
    record.insert("id".into(), Value::String(id));
    record
}

fn has_all_text_fields(record: &Record) -> bool {
    TEXT_FIELDS
        .iter()
        .all(|field| record.get(*field).is_some_and(Value::is_string))
}

/// Numbers are kept as their decimal text; anything else becomes empty.
fn fill_missing_text(mut record: Record) -> Record {
    for field in TEXT_FIELDS {
        let text = match record.get(field) {
            Some(Value::String(_)) => continue,
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        record.insert(field.into(), Value::String(text));
    }
    record
}
