//! Roster editing for the admin role

use chrono::Local;

use crate::data::{timestamp_now, Passenger, Weekday, WeeklyStatus};

/// Companies offered as suggestions; any other value is accepted
pub const COMPANY_OPTIONS: &[&str] = &[
    "Dai 1", "Dai 2", "Dai 3", "Haga-A", "Haga-B", "Akagi", "Ak.rejoko", "Okara", "Souji AK",
];

/// Pickup locations offered as suggestions; any other value is accepted
pub const PICKUP_OPTIONS: &[&str] = &[
    "Apart",
    "Eki",
    "Kodomo",
    "Rokmachi",
    "Mistumata",
    "SHIN MAE",
    "Lowson",
    "Self",
    "Eki Cycle",
    "Self(kodomo)",
    "Dai-3",
    "Ministop",
];

pub const NEW_PASSENGER_NAME: &str = "New Employee";

/// Partial update for one passenger; `None` fields are left as they are
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassengerPatch {
    pub serial_number: Option<String>,
    pub name: Option<String>,
    pub pickup_location: Option<String>,
    pub company: Option<String>,
    pub time: Option<String>,
    pub day: Option<Weekday>,
    pub weekly_status: Option<WeeklyStatus>,
}

impl PassengerPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Current local time as `HH:MM`
pub fn current_time() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Prepend a blank passenger scheduled on `day` at `time`.
///
/// Returns the new collection and the id of the added passenger.
pub fn add_passenger(records: &[Passenger], day: Weekday, time: &str) -> (Vec<Passenger>, String) {
    let passenger = Passenger::new(
        (records.len() + 1).to_string(),
        NEW_PASSENGER_NAME,
        "",
        "",
        time,
        day,
    );
    let id = passenger.id.clone();

    let mut updated = Vec::with_capacity(records.len() + 1);
    updated.push(passenger);
    updated.extend_from_slice(records);
    (updated, id)
}

/// Merge `patch` into passenger `id`. Unknown ids leave the collection as it was.
///
/// `lastUpdated` moves only when the weekly statuses actually change.
pub fn edit_passenger(records: &[Passenger], id: &str, patch: &PassengerPatch) -> Vec<Passenger> {
    records
        .iter()
        .map(|record| {
            if record.id != id {
                return record.clone();
            }
            let mut updated = record.clone();
            if let Some(serial) = &patch.serial_number {
                updated.serial_number = serial.clone();
            }
            if let Some(name) = &patch.name {
                updated.name = name.clone();
            }
            if let Some(pickup) = &patch.pickup_location {
                updated.pickup_location = pickup.clone();
            }
            if let Some(company) = &patch.company {
                updated.company = company.clone();
            }
            if let Some(time) = &patch.time {
                updated.time = time.clone();
            }
            if let Some(day) = patch.day {
                updated.day = day;
            }
            if let Some(weeks) = patch.weekly_status {
                if weeks != updated.weekly_status {
                    updated.weekly_status = weeks;
                    updated.last_updated = timestamp_now();
                }
            }
            updated
        })
        .collect()
}

/// Remove passenger `id`. Unknown ids leave the collection as it was.
pub fn delete_passenger(records: &[Passenger], id: &str) -> Vec<Passenger> {
    records.iter().filter(|r| r.id != id).cloned().collect()
}

pub fn find_passenger<'a>(records: &'a [Passenger], id: &str) -> Option<&'a Passenger> {
    records.iter().find(|r| r.id == id)
}
