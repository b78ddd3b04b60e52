//! End-to-end roster usage against the on-disk backends

use roster::data::{seed_passengers, CURRENT_KEY, SEED_TIMESTAMP};
use roster::{
    add_passenger, day_counts, day_schedule, delete_passenger, edit_passenger, group_by_hour,
    set_week_status, summary, BlobStorage, HourBucket, PassengerPatch, RecordStore, Status,
    WeekIndex, Weekday,
};

use super::common::fixtures::TempRoster;

fn check_in_day<S: BlobStorage>(store: &RecordStore<S>) {
    let records = store.load().unwrap();
    assert_eq!(records, seed_passengers());

    let week = WeekIndex::new(2).unwrap();
    let schedule = day_schedule(&records, Weekday::Tuesday, None);
    let john = schedule[0].id.clone();
    let jane = schedule[1].id.clone();

    let records = set_week_status(&records, &john, week, Status::DroppedOff);
    let records = set_week_status(&records, &jane, week, Status::Absent);
    store.save(&records).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded, records);

    let schedule = day_schedule(&reloaded, Weekday::Tuesday, None);
    let counts = day_counts(&schedule, week);
    assert_eq!((counts.dropped, counts.absent, counts.total), (1, 1, 2));

    // Other weeks are untouched
    let first = day_counts(&schedule, WeekIndex::new(0).unwrap());
    assert_eq!((first.dropped, first.absent), (0, 0));

    let groups = group_by_hour(&schedule);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].bucket, HourBucket::Hour(8));

    let totals = summary(&reloaded);
    assert_eq!(totals.total, 130);
    assert_eq!(totals.dropped, 1);
    assert_eq!(totals.pending, 130 - 5 - 2);
}

fn admin_round_trip<S: BlobStorage>(store: &RecordStore<S>) {
    let records = store.load().unwrap();
    let (records, id) = add_passenger(&records, Weekday::Saturday, "23:40");
    let patch = PassengerPatch {
        name: Some("Night Shift".into()),
        company: Some("Souji AK".into()),
        ..Default::default()
    };
    let records = edit_passenger(&records, &id, &patch);
    store.save(&records).unwrap();

    let reloaded = store.load().unwrap();
    let saturday = day_schedule(&reloaded, Weekday::Saturday, None);
    assert_eq!(saturday.len(), 1);
    assert_eq!(saturday[0].name, "Night Shift");
    assert_eq!(group_by_hour(&saturday)[0].bucket.label(), "23:00 - 23:59");

    store.save(&delete_passenger(&reloaded, &id)).unwrap();
    assert_eq!(store.load().unwrap(), seed_passengers());

    let restored = store.reset().unwrap();
    assert!(restored.iter().all(|p| p.last_updated == SEED_TIMESTAMP));
}

#[test]
fn test_sqlite_check_in_flow() {
    let tmp = TempRoster::new();
    check_in_day(&RecordStore::new(tmp.sqlite()));
}

#[test]
fn test_file_check_in_flow() {
    let tmp = TempRoster::new();
    check_in_day(&RecordStore::new(tmp.files()));
}

#[test]
fn test_sqlite_admin_flow() {
    let tmp = TempRoster::new();
    admin_round_trip(&RecordStore::new(tmp.sqlite()));
}

#[test]
fn test_file_admin_flow() {
    let tmp = TempRoster::new();
    admin_round_trip(&RecordStore::new(tmp.files()));
}

#[test]
fn test_sqlite_data_survives_reopen() {
    let tmp = TempRoster::new();
    let id = {
        let store = RecordStore::new(tmp.sqlite());
        let records = store.load().unwrap();
        let id = records[0].id.clone();
        let records = set_week_status(&records, &id, WeekIndex::new(4).unwrap(), Status::OnBoard);
        store.save(&records).unwrap();
        id
    };

    let storage = tmp.sqlite();
    assert_eq!(storage.keys().unwrap(), vec![CURRENT_KEY.to_string()]);

    let records = RecordStore::new(storage).load().unwrap();
    let passenger = records.iter().find(|p| p.id == id).unwrap();
    assert_eq!(passenger.status_for(WeekIndex::new(4).unwrap()), Status::OnBoard);
}

#[test]
fn test_file_blob_is_camel_case_json() {
    let tmp = TempRoster::new();
    let store = RecordStore::new(tmp.files());
    store.load().unwrap();

    let path = tmp.dir.path().join("data").join(format!("{CURRENT_KEY}.json"));
    let raw = std::fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value[0];
    assert_eq!(first["serialNumber"], "1");
    assert_eq!(first["pickupLocation"], "Apart");
    assert_eq!(first["weeklyStatus"].as_array().unwrap().len(), 5);
    assert_eq!(first["day"], "Monday");
}
