//! Upgrading older stored layouts

use proptest::prelude::*;
use roster::data::{CURRENT_KEY, LEGACY_KEY};
use roster::{BlobStorage, MemoryStorage, RecordStore, Status, WeekIndex, Weekday};
use serde_json::{json, Value};

use super::common::determinism::{DeterministicUuidGenerator, TEST_TIMESTAMP};
use super::common::fixtures::{legacy_collection, TempRoster};

#[test]
fn test_legacy_key_is_upgraded_on_sqlite() {
    let tmp = TempRoster::new();
    let ids = DeterministicUuidGenerator::new();
    let storage = tmp.sqlite();
    storage
        .write(LEGACY_KEY, &legacy_collection(&ids).to_string())
        .unwrap();

    let store = RecordStore::new(storage);
    let records = store.load().unwrap();
    assert_eq!(records.len(), 3);

    let alice = &records[0];
    assert_eq!(alice.id, uuid::Uuid::from_u128(1).to_string());
    assert_eq!(alice.day, Weekday::Monday);
    assert_eq!(alice.status_for(WeekIndex::new(0).unwrap()), Status::Absent);
    for week in WeekIndex::all().skip(1) {
        assert_eq!(alice.status_for(week), Status::Pending);
    }
    assert_eq!(alice.last_updated, TEST_TIMESTAMP);

    assert_eq!(records[1].day, Weekday::Tuesday);
    assert_eq!(
        records[1].status_for(WeekIndex::new(0).unwrap()),
        Status::DroppedOff
    );

    // Upgraded data now lives under the current key, without the old field
    let raw = store.storage().read(CURRENT_KEY).unwrap().unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();
    assert!(stored[0].get("status").is_none());
    assert_eq!(stored[0]["weeklyStatus"][0], "ABSENT");
}

#[test]
fn test_current_key_wins_over_legacy() {
    let storage = MemoryStorage::new();
    let ids = DeterministicUuidGenerator::new();
    storage
        .write(LEGACY_KEY, &legacy_collection(&ids).to_string())
        .unwrap();
    storage.write(CURRENT_KEY, "[]").unwrap();

    let store = RecordStore::new(storage);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_garbage_current_blob_is_left_alone() {
    let tmp = TempRoster::new();
    let storage = tmp.files();
    storage.write(CURRENT_KEY, "{not json").unwrap();

    let store = RecordStore::new(storage);
    assert_eq!(store.load().unwrap().len(), 26);
    assert_eq!(
        store.storage().read(CURRENT_KEY).unwrap().as_deref(),
        Some("{not json")
    );
}

fn status_text() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!("PENDING")),
        Just(json!("ON_BOARD")),
        Just(json!("DROPPED_OFF")),
        Just(json!("SELF_TRAVEL")),
        Just(json!("ABSENT")),
        Just(json!("LATE")),
        Just(json!(7)),
        Just(Value::Null),
    ]
}

fn legacy_shape() -> impl Strategy<Value = Value> {
    (
        proptest::option::of(status_text()),
        proptest::option::of(proptest::collection::vec(status_text(), 0..9)),
        proptest::option::of(prop_oneof![
            Just(json!("Monday")),
            Just(json!("Friday")),
            Just(Value::Null),
        ]),
        proptest::bool::ANY,
    )
        .prop_map(|(status, weeks, day, has_id)| {
            let mut record = json!({
                "serialNumber": "9",
                "name": "Prop",
                "pickupLocation": "Eki",
                "company": "Akagi",
                "time": "05:00",
            });
            if let Some(status) = status {
                record["status"] = status;
            }
            if let Some(weeks) = weeks {
                record["weeklyStatus"] = Value::Array(weeks);
            }
            if let Some(day) = day {
                record["day"] = day;
            }
            if has_id {
                record["id"] = json!("fixed-id");
            }
            record
        })
}

fn legacy_collections() -> impl Strategy<Value = Vec<Value>> {
    proptest::collection::vec(legacy_shape(), 0..6)
}

proptest! {
    #[test]
    fn prop_every_record_tracks_five_weeks(shapes in legacy_collections()) {
        let storage = MemoryStorage::new();
        storage.write(CURRENT_KEY, &Value::Array(shapes.clone()).to_string()).unwrap();
        let store = RecordStore::new(storage);

        let records = store.load().unwrap();
        prop_assert_eq!(records.len(), shapes.len());
        for record in &records {
            prop_assert_eq!(record.weekly_status.iter().count(), 5);
            prop_assert!(!record.id.is_empty());
        }

        // A second load finds nothing left to migrate
        let writes = store.storage().write_count();
        let again = store.load().unwrap();
        prop_assert_eq!(again, records);
        prop_assert_eq!(store.storage().write_count(), writes);
    }
}
