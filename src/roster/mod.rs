//! Pure roster operations over an in-memory passenger collection.
//!
//! Every function takes the current collection and returns a new one; callers
//! persist the result through [`crate::data::RecordStore::save`].

mod admin;
mod mutator;

pub use admin::{
    add_passenger, current_time, delete_passenger, edit_passenger, find_passenger,
    PassengerPatch, COMPANY_OPTIONS, NEW_PASSENGER_NAME, PICKUP_OPTIONS,
};
pub use mutator::{set_week_status, set_week_status_at};
