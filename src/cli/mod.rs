//! `roster` command-line front end for the driver and admin roles

mod render;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use regex::Regex;

use crate::config::StorageBackend;
use crate::data::{BlobStorage, Passenger, RecordStore, Status, WeekIndex, Weekday};
use crate::roster::{
    add_passenger, current_time, delete_passenger, edit_passenger, find_passenger,
    set_week_status, PassengerPatch,
};
use crate::view::{day_counts, day_schedule, group_by_hour, status_from_short, summary};

pub use render::{
    render_legend, render_options, render_roster, render_schedule, render_summary,
};

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Shuttle pickup roster and weekly attendance tracker", long_about = None)]
pub struct Cli {
    /// Directory holding the database, config and logs (default ~/.shuttle-roster)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Override the configured storage backend
    #[arg(long, global = true, value_enum)]
    pub backend: Option<BackendArg>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Sqlite,
    File,
}

impl From<BackendArg> for StorageBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Sqlite => StorageBackend::Sqlite,
            BackendArg::File => StorageBackend::File,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show one day's pickups for a week, grouped by hour
    List {
        /// Day to show (default today)
        #[arg(long, value_parser = parse_day)]
        day: Option<Weekday>,

        /// Week number 1-5 (default from config)
        #[arg(long, value_parser = parse_week)]
        week: Option<WeekIndex>,

        /// Filter by name or serial number
        #[arg(long)]
        search: Option<String>,
    },

    /// Set one passenger's status for one week
    Mark {
        id: String,

        #[arg(long, value_parser = parse_week)]
        week: WeekIndex,

        /// PENDING, ON_BOARD, DROPPED_OFF, SELF_TRAVEL, ABSENT or a short code
        #[arg(long, value_parser = parse_status)]
        status: Status,
    },

    /// Tally statuses across every passenger and week
    Summary,

    /// Edit the roster
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Show every field and all five weeks for one day
    Show {
        #[arg(long, value_parser = parse_day)]
        day: Option<Weekday>,
    },

    /// Add a passenger to a day
    Add {
        #[arg(long, value_parser = parse_day)]
        day: Option<Weekday>,

        /// Pickup time HH:MM (default now)
        #[arg(long, value_parser = parse_time)]
        time: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        serial: Option<String>,

        #[arg(long)]
        pickup: Option<String>,

        #[arg(long)]
        company: Option<String>,
    },

    /// Change fields of an existing passenger
    Edit {
        id: String,

        #[arg(long)]
        serial: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        pickup: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long, value_parser = parse_time)]
        time: Option<String>,

        #[arg(long, value_parser = parse_day)]
        day: Option<Weekday>,

        /// Week status as WEEK=STATUS, e.g. 2=absent (repeatable)
        #[arg(long = "set-week", value_parser = parse_week_status)]
        set_week: Vec<(WeekIndex, Status)>,
    },

    /// Remove a passenger
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Replace the whole roster with the default data
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List the suggested company and pickup values
    Options,
}

fn parse_day(s: &str) -> Result<Weekday, String> {
    s.parse().map_err(|e: crate::data::RosterError| e.to_string())
}

fn parse_week(s: &str) -> Result<WeekIndex, String> {
    let week: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Week must be a number from 1 to 5, got {s:?}"))?;
    WeekIndex::from_ordinal(week).map_err(|_| format!("Week must be from 1 to 5, got {week}"))
}

fn parse_status(s: &str) -> Result<Status, String> {
    match status_from_short(s) {
        Some(status) => Ok(status),
        None => s.parse().map_err(|e: crate::data::RosterError| e.to_string()),
    }
}

fn parse_week_status(s: &str) -> Result<(WeekIndex, Status), String> {
    let (week, status) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected WEEK=STATUS, got {s:?}"))?;
    Ok((parse_week(week)?, parse_status(status)?))
}

fn time_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").ok())
        .as_ref()
}

fn parse_time(s: &str) -> Result<String, String> {
    let s = s.trim();
    match time_pattern() {
        Some(pattern) if pattern.is_match(s) => Ok(s.to_string()),
        _ => Err(crate::data::RosterError::InvalidTime(s.to_string()).to_string()),
    }
}

/// Ask a yes/no question; anything but `y`/`yes` (including EOF) is a no
pub fn confirm(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    write!(out, "{prompt} [y/N] ")?;
    out.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(out)?;
        return Ok(false);
    }
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Run one command against `store`.
///
/// `input` feeds confirmation prompts; all user-facing text goes to `out`.
pub fn execute<S: BlobStorage>(
    command: Command,
    store: &RecordStore<S>,
    default_week: WeekIndex,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::List { day, week, search } => {
            let records = store.load()?;
            let day = day.unwrap_or_else(Weekday::today);
            let week = week.unwrap_or(default_week);
            let schedule = day_schedule(&records, day, search.as_deref());
            let counts = day_counts(&schedule, week);
            let groups = group_by_hour(&schedule);
            write!(out, "{}", render_schedule(day, week, &groups, counts))?;
        }
        Command::Mark { id, week, status } => {
            let records = store.load()?;
            let Some(passenger) = find_passenger(&records, &id) else {
                writeln!(out, "No passenger with id {id}")?;
                return Ok(());
            };
            let name = passenger.name.clone();
            let records = set_week_status(&records, &id, week, status);
            store.save(&records)?;
            tracing::info!(id = %id, week = week.ordinal(), status = %status, "Marked passenger");
            writeln!(out, "{name}: week {} set to {status}", week.ordinal())?;
        }
        Command::Summary => {
            let records = store.load()?;
            write!(out, "{}", render_summary(&summary(&records)))?;
        }
        Command::Admin { command } => execute_admin(command, store, input, out)?,
    }
    Ok(())
}

fn execute_admin<S: BlobStorage>(
    command: AdminCommand,
    store: &RecordStore<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        AdminCommand::Show { day } => {
            let records = store.load()?;
            let day = day.unwrap_or_else(Weekday::today);
            let schedule = day_schedule(&records, day, None);
            write!(out, "{}", render_roster(day, &group_by_hour(&schedule)))?;
        }
        AdminCommand::Add {
            day,
            time,
            name,
            serial,
            pickup,
            company,
        } => {
            let records = store.load()?;
            let day = day.unwrap_or_else(Weekday::today);
            let time = time.unwrap_or_else(current_time);
            let (records, id) = add_passenger(&records, day, &time);

            let patch = PassengerPatch {
                serial_number: serial,
                name,
                pickup_location: pickup,
                company,
                ..Default::default()
            };
            let records = if patch.is_empty() {
                records
            } else {
                edit_passenger(&records, &id, &patch)
            };

            store.save(&records)?;
            tracing::info!(id = %id, day = %day, "Added passenger");
            writeln!(out, "Added passenger {id} on {day} at {time}")?;
        }
        AdminCommand::Edit {
            id,
            serial,
            name,
            pickup,
            company,
            time,
            day,
            set_week,
        } => {
            let records = store.load()?;
            let Some(passenger) = find_passenger(&records, &id) else {
                writeln!(out, "No passenger with id {id}")?;
                return Ok(());
            };

            let weekly_status = (!set_week.is_empty()).then(|| {
                let mut weeks = passenger.weekly_status;
                for &(week, status) in &set_week {
                    weeks.set(week, status);
                }
                weeks
            });
            let patch = PassengerPatch {
                serial_number: serial,
                name,
                pickup_location: pickup,
                company,
                time,
                day,
                weekly_status,
            };
            if patch.is_empty() {
                writeln!(out, "Nothing to change")?;
                return Ok(());
            }

            let records = edit_passenger(&records, &id, &patch);
            store.save(&records)?;
            tracing::info!(id = %id, "Edited passenger");
            if let Some(updated) = find_passenger(&records, &id) {
                write!(out, "{}", describe(updated))?;
            }
        }
        AdminCommand::Delete { id, yes } => {
            let records = store.load()?;
            let Some(passenger) = find_passenger(&records, &id) else {
                writeln!(out, "No passenger with id {id}")?;
                return Ok(());
            };
            let prompt = format!("Delete {} ({})?", passenger.name, passenger.serial_number);
            if !yes && !confirm(&prompt, input, out)? {
                writeln!(out, "Delete cancelled.")?;
                return Ok(());
            }

            let records = delete_passenger(&records, &id);
            store.save(&records)?;
            tracing::info!(id = %id, "Deleted passenger");
            writeln!(out, "Deleted passenger {id}")?;
        }
        AdminCommand::Reset { yes } => {
            let prompt = "Reset the roster to the default data? This cannot be undone.";
            if !yes && !confirm(prompt, input, out)? {
                writeln!(out, "Reset cancelled.")?;
                return Ok(());
            }
            let records = store.reset()?;
            writeln!(out, "Roster reset to {} default passengers.", records.len())?;
        }
        AdminCommand::Options => write!(out, "{}", render_options())?,
    }
    Ok(())
}

fn describe(passenger: &Passenger) -> String {
    let weeks: Vec<&str> = passenger.weekly_status.iter().map(|s| s.as_str()).collect();
    format!(
        "{} {} | {} | {} | {} {} | {}\n",
        passenger.serial_number,
        passenger.name,
        passenger.pickup_location,
        passenger.company,
        passenger.day,
        passenger.time,
        weeks.join(" ")
    )
}
