//! Derived views over the passenger collection.
//!
//! Everything here is a pure function of its inputs; nothing is cached and the
//! collection is never mutated.

mod buckets;
mod filter;
mod presentation;
mod stats;

pub use buckets::{group_by_hour, HourBucket, HourGroup, UNSCHEDULED_LABEL};
pub use filter::{day_schedule, filter_by_day, matches_search, sort_by_time};
pub use presentation::{status_from_short, style_for, StatusStyle, STATUS_STYLES};
pub use stats::{day_counts, summary, DayCounts, Summary};
