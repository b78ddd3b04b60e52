//! Attendance tallies

use crate::data::{Passenger, Status, WeekIndex, WEEKS_TRACKED};

/// Counts for the passengers currently on screen, for one week
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayCounts {
    pub dropped: usize,
    pub absent: usize,
    pub total: usize,
}

/// Tally `week` over the visible (already filtered) passengers
pub fn day_counts(visible: &[&Passenger], week: WeekIndex) -> DayCounts {
    let mut counts = DayCounts {
        total: visible.len(),
        ..Default::default()
    };
    for passenger in visible {
        match passenger.status_for(week) {
            Status::DroppedOff => counts.dropped += 1,
            Status::Absent => counts.absent += 1,
            _ => {}
        }
    }
    counts
}

/// Dashboard tally across every passenger and every tracked week
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Passenger-week slots (passengers x 5)
    pub total: usize,
    pub pending: usize,
    pub dropped: usize,
    pub self_travel: usize,
}

/// Summarise the whole collection regardless of day. `ON_BOARD` and `ABSENT`
/// slots count toward `total` only.
pub fn summary(records: &[Passenger]) -> Summary {
    let mut summary = Summary {
        total: records.len() * WEEKS_TRACKED,
        ..Default::default()
    };
    for status in records.iter().flat_map(|r| r.weekly_status.iter()) {
        match status {
            Status::Pending => summary.pending += 1,
            Status::DroppedOff => summary.dropped += 1,
            Status::SelfTravel => summary.self_travel += 1,
            Status::OnBoard | Status::Absent => {}
        }
    }
    summary
}
