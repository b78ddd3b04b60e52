//! Plain-text rendering of roster views

use std::fmt::Write;

use crate::data::{Passenger, WeekIndex, Weekday};
use crate::roster::{COMPANY_OPTIONS, PICKUP_OPTIONS};
use crate::view::{style_for, DayCounts, HourGroup, Summary, STATUS_STYLES};

/// Driver view: one week's status per passenger, grouped by hour
pub fn render_schedule(
    day: Weekday,
    week: WeekIndex,
    groups: &[HourGroup<'_>],
    counts: DayCounts,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{day} - Week {}", week.ordinal());
    let _ = writeln!(
        out,
        "Done: {}  Absent: {}  Total: {}",
        counts.dropped, counts.absent, counts.total
    );

    if groups.is_empty() {
        let _ = writeln!(out, "\nNo passengers found for {day}.");
        return out;
    }

    for group in groups {
        let _ = writeln!(out, "\n{} ({} pax)", group.bucket, group.passengers.len());
        for passenger in &group.passengers {
            let style = style_for(passenger.status_for(week));
            let _ = writeln!(
                out,
                "  [{:<4}] {:>4}  {:<20} {:<15} {:<10} {}  {}",
                style.short,
                passenger.serial_number,
                passenger.name,
                passenger.pickup_location,
                passenger.company,
                passenger.time,
                passenger.id
            );
        }
    }
    let _ = write!(out, "\n{}", render_legend());
    out
}

/// Admin view: every field plus all five weeks
pub fn render_roster(day: Weekday, groups: &[HourGroup<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Schedule: {day}");

    if groups.is_empty() {
        let _ = writeln!(
            out,
            "\nNo shifts scheduled for {day}. Use `roster admin add` to create one."
        );
        return out;
    }

    for group in groups {
        let _ = writeln!(out, "\n{} ({} staff)", group.bucket, group.passengers.len());
        for passenger in &group.passengers {
            let _ = writeln!(
                out,
                "  {:>4}  {:<20} {:<15} {:<10} {}  {}  {}",
                passenger.serial_number,
                passenger.name,
                passenger.pickup_location,
                passenger.company,
                passenger.time,
                week_codes(passenger),
                passenger.id
            );
        }
    }
    let _ = write!(out, "\n{}", render_legend());
    out
}

/// Key to the short status codes, with the colour each status is shown in
pub fn render_legend() -> String {
    let entries: Vec<String> = STATUS_STYLES
        .iter()
        .map(|style| format!("{} = {} ({})", style.short, style.label, style.color))
        .collect();
    format!("Key: {}\n", entries.join(", "))
}

fn week_codes(passenger: &Passenger) -> String {
    passenger
        .weekly_status
        .iter()
        .map(|status| format!("{:<4}", style_for(status).short))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_summary(summary: &Summary) -> String {
    format!(
        "Total slots: {}\nPending: {}\nDropped off: {}\nSelf travel: {}\n",
        summary.total, summary.pending, summary.dropped, summary.self_travel
    )
}

pub fn render_options() -> String {
    format!(
        "Companies: {}\nPickup locations: {}\n",
        COMPANY_OPTIONS.join(", "),
        PICKUP_OPTIONS.join(", ")
    )
}
