//! Status labels, short codes and colour names for front ends.
//!
//! Kept apart from [`crate::data::Status`] so the model carries no display
//! concerns.

use crate::data::Status;

/// How a status is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub status: Status,
    pub label: &'static str,
    /// Compact code used in week grids
    pub short: &'static str,
    pub color: &'static str,
}

pub const STATUS_STYLES: [StatusStyle; 5] = [
    StatusStyle {
        status: Status::Pending,
        label: "Pending",
        short: "-",
        color: "yellow",
    },
    StatusStyle {
        status: Status::OnBoard,
        label: "On board",
        short: "Bus",
        color: "blue",
    },
    StatusStyle {
        status: Status::DroppedOff,
        label: "Dropped off",
        short: "Ok",
        color: "green",
    },
    StatusStyle {
        status: Status::SelfTravel,
        label: "Self travel",
        short: "Self",
        color: "slate",
    },
    StatusStyle {
        status: Status::Absent,
        label: "Absent",
        short: "X",
        color: "red",
    },
];

pub fn style_for(status: Status) -> &'static StatusStyle {
    STATUS_STYLES
        .iter()
        .find(|style| style.status == status)
        .unwrap_or(&STATUS_STYLES[0])
}

/// Look a status up by its short code, case-insensitively
pub fn status_from_short(code: &str) -> Option<Status> {
    let code = code.trim();
    STATUS_STYLES
        .iter()
        .find(|style| style.short.eq_ignore_ascii_case(code))
        .map(|style| style.status)
}
