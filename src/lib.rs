pub mod cli;
pub mod config;
pub mod data;
pub mod roster;
pub mod util;
pub mod view;

pub use config::Config;
pub use data::{
    BlobStorage, Database, FileStorage, MemoryStorage, Passenger, RecordStore, RosterError,
    SqliteStorage, Status, StorageError, WeekIndex, Weekday, WeeklyStatus,
};
pub use roster::{add_passenger, delete_passenger, edit_passenger, set_week_status, PassengerPatch};
pub use view::{day_counts, day_schedule, group_by_hour, summary, DayCounts, HourBucket, Summary};
