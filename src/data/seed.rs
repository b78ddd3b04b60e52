//! Default roster used on first run and on reset

use uuid::Uuid;

use super::models::{Passenger, Status, Weekday, WeeklyStatus};

/// `lastUpdated` stamped on every seed record
pub const SEED_TIMESTAMP: &str = "2024-01-01T00:00:00.000Z";

/// (serial, name, pickup, company, time, day, first-week status)
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Weekday,
    Status,
);

const SEED_ROWS: &[SeedRow] = &[
    ("1", "Kanchan", "Apart", "Dai 1", "03:10", Weekday::Monday, Status::Pending),
    ("2", "Roshan Sharma", "Eki", "Dai 2", "04:20", Weekday::Monday, Status::Pending),
    ("3", "Binaya Adhikari", "Kodomo", "Dai-2", "04:20", Weekday::Monday, Status::Pending),
    ("4", "Laxmi", "Kodomo", "Dai 1", "04:20", Weekday::Monday, Status::Pending),
    ("5", "Sonika Pathak", "Kodomo", "Dai-1", "04:25", Weekday::Monday, Status::Pending),
    ("8", "Kamal Bhandari", "Rokumachi", "Akagi", "04:00", Weekday::Monday, Status::Pending),
    ("9", "Harka", "Rokumachi", "Akagi", "04:00", Weekday::Monday, Status::Pending),
    ("10", "Saleem", "Rokumachi", "Dai-3", "04:00", Weekday::Monday, Status::Pending),
    ("11", "Mohiddin", "Eki", "Dai-3", "04:20", Weekday::Monday, Status::Pending),
    ("12", "Dorje Tamang", "Shi-mae", "Dai-1", "05:00", Weekday::Monday, Status::Pending),
    ("14", "Mina", "Shi-mae", "Akagi", "05:00", Weekday::Monday, Status::Pending),
    ("20", "Kushal", "EKI", "Dai 2", "05:20", Weekday::Monday, Status::Pending),
    ("24", "Niru Dhakal Kharel", "Self", "Haga-A", "05:20", Weekday::Monday, Status::SelfTravel),
    ("26", "Amir Shrestha", "Self", "Dai-3", "05:20", Weekday::Monday, Status::SelfTravel),
    ("30", "Kabir", "Rokumachi", "Dai-1", "06:00", Weekday::Monday, Status::Pending),
    ("34", "Bikram Bogati", "EKI", "Dai 3", "06:20", Weekday::Monday, Status::Pending),
    ("38", "Rome", "Eki", "Haga-B", "06:20", Weekday::Monday, Status::SelfTravel),
    ("45", "Harris", "Rokumachi", "Dai-3", "07:00", Weekday::Monday, Status::Pending),
    ("50", "Hein", "Eki", "Dai 1", "07:20", Weekday::Monday, Status::Pending),
    ("60", "Kushal Thapa", "Eki", "Dai-1", "09:20", Weekday::Monday, Status::Pending),
    ("70", "Dumidu", "EKI", "DAI 3", "13:20", Weekday::Monday, Status::Pending),
    ("72", "Prashan", "Eki", "Haga-A", "13:20", Weekday::Monday, Status::SelfTravel),
    ("74", "Manoj Tiwari", "Eki Cycle Park", "Akagi", "14:20", Weekday::Monday, Status::Pending),
    ("100", "Deinaru", "Eki Cycle Park", "Dai 3", "15:20", Weekday::Monday, Status::SelfTravel),
    ("T1", "John Doe", "Eki", "Dai 1", "08:00", Weekday::Tuesday, Status::Pending),
    ("T2", "Jane Smith", "Kodomo", "Dai 2", "08:30", Weekday::Tuesday, Status::Pending),
];

/// Seed ids are name-based UUIDs so every reset yields byte-identical data.
fn seed_id(serial: &str, day: Weekday) -> String {
    Uuid::new_v5(
        &Uuid::NAMESPACE_OID,
        format!("shuttle-roster:seed:{serial}:{day}").as_bytes(),
    )
    .to_string()
}

/// The fixed default dataset
pub fn seed_passengers() -> Vec<Passenger> {
    SEED_ROWS
        .iter()
        .map(
            |&(serial, name, pickup, company, time, day, first_week)| Passenger {
                id: seed_id(serial, day),
                serial_number: serial.to_string(),
                name: name.to_string(),
                pickup_location: pickup.to_string(),
                company: company.to_string(),
                time: time.to_string(),
                day,
                weekly_status: WeeklyStatus::starting_with(first_week),
                last_updated: SEED_TIMESTAMP.to_string(),
            },
        )
        .collect()
}
