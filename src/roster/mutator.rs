//! Single-week status changes, shared by the driver and admin roles

use crate::data::{timestamp_now, Passenger, Status, WeekIndex};

/// Return a copy of `records` where passenger `id` has `status` for `week`.
///
/// Only that passenger's week entry and `lastUpdated` change. An unknown id
/// leaves the collection as it was.
pub fn set_week_status(
    records: &[Passenger],
    id: &str,
    week: WeekIndex,
    status: Status,
) -> Vec<Passenger> {
    set_week_status_at(records, id, week, status, &timestamp_now())
}

/// [`set_week_status`] with an explicit `lastUpdated` value
pub fn set_week_status_at(
    records: &[Passenger],
    id: &str,
    week: WeekIndex,
    status: Status,
    timestamp: &str,
) -> Vec<Passenger> {
    records
        .iter()
        .map(|record| {
            if record.id != id {
                return record.clone();
            }
            let mut updated = record.clone();
            updated.weekly_status.set(week, status);
            updated.last_updated = timestamp.to_string();
            updated
        })
        .collect()
}
