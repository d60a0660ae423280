//! Recurring calendar export.
//!
//! Turns the grouped schedule into an iCalendar document with one weekly
//! event per meeting day, bounded by the semester dates.
//!
//! # Example
//!
//! ```ignore
//! use calendify::config::ExportConfig;
//! use calendify::export::export_calendar;
//!
//! let ics = export_calendar(state.grouped(), start, end, "America/Chicago", &ExportConfig::default())?;
//! ```

pub mod events;
pub mod ics;
pub mod recurrence;
pub mod vtimezone;

pub use events::{build_events, check_date_range, event_uid, parse_time_zone};
pub use ics::{IcsWriter, RecurringEvent};
pub use recurrence::{byday_token, first_occurrence, until_stamp, weekly_rule};
pub use vtimezone::{observances, Observance};

use chrono::NaiveDate;
use log::info;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::model::ScheduleEntry;

/// Build a ready-to-write calendar writer for the grouped schedule.
pub fn calendar_writer(
    grouped: &[ScheduleEntry],
    semester_start: NaiveDate,
    semester_end: NaiveDate,
    time_zone: &str,
    config: &ExportConfig,
) -> Result<IcsWriter> {
    let tz = parse_time_zone(time_zone)?;
    let events = build_events(grouped, semester_start, semester_end, tz)?;

    info!(
        "Exporting {} recurring events from {} grouped entries ({} to {}, {})",
        events.len(),
        grouped.len(),
        semester_start,
        semester_end,
        tz.name()
    );

    let mut writer = IcsWriter::new(config.product_id.clone(), semester_start)
        .with_time_zone(tz.name())
        .with_span_end(semester_end);
    if let Some(ref name) = config.calendar_name {
        writer = writer.with_calendar_name(name.clone());
    }
    writer.extend_events(events);
    Ok(writer)
}

/// Render the grouped schedule as iCalendar text.
pub fn export_calendar(
    grouped: &[ScheduleEntry],
    semester_start: NaiveDate,
    semester_end: NaiveDate,
    time_zone: &str,
    config: &ExportConfig,
) -> Result<String> {
    Ok(calendar_writer(grouped, semester_start, semester_end, time_zone, config)?.to_ics())
}
