//! Data models for the passenger roster

use chrono::{Datelike, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Number of rolling weeks tracked per passenger
pub const WEEKS_TRACKED: usize = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Week index {0} is out of range (expected 0-4)")]
    WeekOutOfRange(usize),
    #[error("Unknown weekday: {0}")]
    InvalidWeekday(String),
    #[error("Unknown status: {0}")]
    InvalidStatus(String),
    #[error("Invalid time {0:?} (expected HH:MM)")]
    InvalidTime(String),
}

/// Attendance status for one passenger in one week
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Pending,
    /// In transit. Tracked, but left out of the dashboard tally.
    OnBoard,
    DroppedOff,
    SelfTravel,
    Absent,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Pending,
        Status::OnBoard,
        Status::DroppedOff,
        Status::SelfTravel,
        Status::Absent,
    ];

    /// Stored representation (`PENDING`, `ON_BOARD`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::OnBoard => "ON_BOARD",
            Status::DroppedOff => "DROPPED_OFF",
            Status::SelfTravel => "SELF_TRAVEL",
            Status::Absent => "ABSENT",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = RosterError;

    /// Accepts the stored names case-insensitively, with `-` or `_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| RosterError::InvalidStatus(s.to_string()))
    }
}

/// Day of week a pickup is scheduled on
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// The local day of week
    pub fn today() -> Self {
        Self::from(Local::now().weekday())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = RosterError;

    /// Case-insensitive full names, or three-letter abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| {
                let name = day.as_str().to_ascii_lowercase();
                name == needle || (needle.len() == 3 && name.starts_with(&needle))
            })
            .ok_or_else(|| RosterError::InvalidWeekday(s.to_string()))
    }
}

/// Validated index into the five tracked weeks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekIndex(usize);

impl WeekIndex {
    pub fn new(index: usize) -> Result<Self, RosterError> {
        if index < WEEKS_TRACKED {
            Ok(Self(index))
        } else {
            Err(RosterError::WeekOutOfRange(index))
        }
    }

    /// Build from a 1-based week number as shown to users ("Week 1".."Week 5")
    pub fn from_ordinal(week: usize) -> Result<Self, RosterError> {
        match week.checked_sub(1) {
            Some(index) => Self::new(index),
            None => Err(RosterError::WeekOutOfRange(week)),
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn ordinal(&self) -> usize {
        self.0 + 1
    }

    pub fn all() -> impl Iterator<Item = WeekIndex> {
        (0..WEEKS_TRACKED).map(WeekIndex)
    }
}

impl TryFrom<usize> for WeekIndex {
    type Error = RosterError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

/// Statuses for the five rolling weeks, oldest first
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct WeeklyStatus([Status; WEEKS_TRACKED]);

impl WeeklyStatus {
    pub fn new(weeks: [Status; WEEKS_TRACKED]) -> Self {
        Self(weeks)
    }

    /// First week set to `status`, the rest pending
    pub fn starting_with(status: Status) -> Self {
        let mut weeks = [Status::Pending; WEEKS_TRACKED];
        weeks[0] = status;
        Self(weeks)
    }

    pub fn get(&self, week: WeekIndex) -> Status {
        self.0[week.get()]
    }

    pub fn set(&mut self, week: WeekIndex, status: Status) {
        self.0[week.get()] = status;
    }

    pub fn iter(&self) -> impl Iterator<Item = Status> + '_ {
        self.0.iter().copied()
    }

    pub fn as_array(&self) -> &[Status; WEEKS_TRACKED] {
        &self.0
    }
}

/// One roster entry: a passenger's pickup schedule and attendance history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    /// Opaque unique identifier, never reassigned
    pub id: String,
    /// Display label only; not unique
    pub serial_number: String,
    pub name: String,
    pub pickup_location: String,
    pub company: String,
    /// Zero-padded `HH:MM`
    pub time: String,
    pub day: Weekday,
    pub weekly_status: WeeklyStatus,
    /// RFC 3339 timestamp of the last status change
    pub last_updated: String,
}

impl Passenger {
    /// Create a passenger with a fresh id and every week pending
    pub fn new(
        serial_number: impl Into<String>,
        name: impl Into<String>,
        pickup_location: impl Into<String>,
        company: impl Into<String>,
        time: impl Into<String>,
        day: Weekday,
    ) -> Self {
        Self {
            id: new_passenger_id(),
            serial_number: serial_number.into(),
            name: name.into(),
            pickup_location: pickup_location.into(),
            company: company.into(),
            time: time.into(),
            day,
            weekly_status: WeeklyStatus::default(),
            last_updated: timestamp_now(),
        }
    }

    pub fn status_for(&self, week: WeekIndex) -> Status {
        self.weekly_status.get(week)
    }
}

pub fn new_passenger_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC time in the stored `lastUpdated` format (`2024-01-01T00:00:00.000Z`)
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
