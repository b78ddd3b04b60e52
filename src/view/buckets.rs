//! Hour-bucket grouping for the daily schedule

use std::collections::BTreeMap;
use std::fmt;

use crate::data::Passenger;

pub const UNSCHEDULED_LABEL: &str = "Unscheduled";

/// Display group for passengers sharing a scheduled hour.
///
/// Hours order numerically and `Unscheduled` always sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HourBucket {
    Hour(u32),
    Unscheduled,
}

impl HourBucket {
    /// Bucket for an `HH:MM` string.
    ///
    /// The hour is the leading digits of the text before `:`; no digits there
    /// means unscheduled. A sign is not a digit, so `-1:00` is unscheduled
    /// rather than a negative hour.
    pub fn for_time(time: &str) -> Self {
        let hour_part = time.split(':').next().unwrap_or_default().trim_start();
        let digits_end = hour_part
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(hour_part.len());
        match hour_part[..digits_end].parse::<u32>() {
            Ok(hour) => HourBucket::Hour(hour),
            Err(_) => HourBucket::Unscheduled,
        }
    }

    /// `HH:00 - HH:59`, or `Unscheduled`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HourBucket::Hour(hour) => write!(f, "{hour:02}:00 - {hour:02}:59"),
            HourBucket::Unscheduled => f.write_str(UNSCHEDULED_LABEL),
        }
    }
}

/// Passengers in one hour bucket, in the order they were given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourGroup<'a> {
    pub bucket: HourBucket,
    pub passengers: Vec<&'a Passenger>,
}

/// Group an already sorted schedule into hour buckets, earliest first
pub fn group_by_hour<'a>(schedule: &[&'a Passenger]) -> Vec<HourGroup<'a>> {
    let mut groups: BTreeMap<HourBucket, Vec<&'a Passenger>> = BTreeMap::new();
    for &passenger in schedule {
        groups
            .entry(HourBucket::for_time(&passenger.time))
            .or_default()
            .push(passenger);
    }
    groups
        .into_iter()
        .map(|(bucket, passengers)| HourGroup { bucket, passengers })
        .collect()
}
