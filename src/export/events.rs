//! Grouped entries to recurring calendar events.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use log::debug;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::export::recurrence::{first_occurrence, weekly_rule};
use crate::export::ics::RecurringEvent;
use crate::model::{ScheduleEntry, Weekday};
use crate::text::time::minutes_of_day;

/// Suffix appended to every generated `UID`.
pub const UID_DOMAIN: &str = "calendify";

/// Parse an IANA zone name.
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::InvalidTimeZone(name.to_string()))
}

/// Reject a semester that ends before it starts.
pub fn check_date_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if end < start {
        return Err(Error::InvalidDateRange { start, end });
    }
    Ok(())
}

/// Expand grouped entries into one recurring event per meeting day.
///
/// Entries with missing or malformed times, a zero or negative duration,
/// or an unknown day are skipped, as are days whose first local start or
/// end does not exist in `tz`. Skips are logged at debug level.
pub fn build_events(
    grouped: &[ScheduleEntry],
    semester_start: NaiveDate,
    semester_end: NaiveDate,
    tz: Tz,
) -> Result<Vec<RecurringEvent>> {
    check_date_range(semester_start, semester_end)?;

    let mut events = Vec::new();
    for (ordinal, entry) in grouped.iter().enumerate() {
        let (start, end) = match entry.time_range() {
            Some((start, end)) if end > start => (start, end),
            _ => {
                debug!(
                    "Skipping {:?}: unusable time range {:?}-{:?}",
                    entry.course, entry.start_time, entry.end_time
                );
                continue;
            },
        };

        for label in &entry.days {
            let Some(day) = label.weekday() else {
                debug!("Skipping {:?}: unknown day", entry.course);
                continue;
            };

            let date = first_occurrence(semester_start, day);
            let (Some(dt_start), Some(dt_end)) =
                (localize(tz, date, start), localize(tz, date, end))
            else {
                debug!("Skipping {:?} on {}: local time does not exist in {}", entry.course, day, tz.name());
                continue;
            };

            events.push(RecurringEvent {
                uid: event_uid(entry, day, ordinal),
                summary: entry.course.clone(),
                location: if entry.location.trim().is_empty() {
                    None
                } else {
                    Some(entry.location.clone())
                },
                start: dt_start,
                end: dt_end,
                rule: weekly_rule(day, semester_end),
            });
        }
    }

    Ok(events)
}

/// Stable identifier for one meeting day of a grouped entry.
pub fn event_uid(entry: &ScheduleEntry, day: Weekday, ordinal: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(entry.course.as_bytes());
    hasher.update([0]);
    hasher.update(day.short_name().as_bytes());
    hasher.update([0]);
    hasher.update(entry.start_time.as_bytes());
    hasher.update([0]);
    hasher.update(entry.end_time.as_bytes());
    hasher.update([0]);
    hasher.update(ordinal.to_le_bytes());
    let digest = hasher.finalize();

    let mut hex = String::with_capacity(digest.len() * 2 + UID_DOMAIN.len() + 1);
    for byte in digest.iter() {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex.push('@');
    hex.push_str(UID_DOMAIN);
    hex
}

fn localize(tz: Tz, date: NaiveDate, minutes: u32) -> Option<chrono::DateTime<Tz>> {
    let time = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)?;
    tz.from_local_datetime(&NaiveDateTime::new(date, time)).earliest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DayLabel;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn grouped(course: &str, days: &[Weekday], start: &str, end: &str) -> ScheduleEntry {
        ScheduleEntry {
            course: course.to_string(),
            days: days.iter().map(|&d| d.into()).collect(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            ..Default::default()
        }
    }

    fn chicago() -> Tz {
        parse_time_zone("America/Chicago").unwrap()
    }

    #[test]
    fn test_one_event_per_day() {
        let entries = vec![grouped("MATH 221", &[Weekday::Mon, Weekday::Wed, Weekday::Fri], "09:55", "10:45")];
        let events = build_events(&entries, date(2025, 9, 3), date(2025, 12, 10), chicago()).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].start.date_naive(), date(2025, 9, 8));
        assert_eq!(events[1].start.date_naive(), date(2025, 9, 3));
        assert_eq!(events[2].start.date_naive(), date(2025, 9, 5));
        assert_eq!(events[0].start.hour(), 9);
        assert_eq!(events[0].end.minute(), 45);
        assert!(events[2].rule.contains("BYDAY=FR"));
    }

    #[test]
    fn test_skips_unusable_entries() {
        let mut unknown = grouped("ART 100", &[], "10:00", "11:00");
        unknown.days = vec![DayLabel::Unknown];
        let entries = vec![
            grouped("TBA 1", &[Weekday::Mon], "", ""),
            grouped("BAD 2", &[Weekday::Mon], "25:00", "26:00"),
            grouped("BACK 3", &[Weekday::Mon], "11:00", "10:00"),
            grouped("ZERO 4", &[Weekday::Mon], "11:00", "11:00"),
            unknown,
            grouped("OK 5", &[Weekday::Tue], "08:00", "08:50"),
        ];
        let events = build_events(&entries, date(2025, 9, 3), date(2025, 12, 10), chicago()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, "OK 5");
    }

    #[test]
    fn test_dst_gap_is_skipped() {
        // 2025-03-09 02:30 does not exist in America/Chicago
        let entries = vec![grouped("NIGHT 1", &[Weekday::Mon], "02:30", "03:30")];
        let tz = chicago();
        let sunday = date(2025, 3, 9);
        assert!(localize(tz, sunday, 150).is_none());
        // Monday after the change is fine
        let events = build_events(&entries, sunday, date(2025, 5, 1), tz).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_weekday_dst_gap_skips_event() {
        // Tehran moved clocks forward at midnight on Monday 2021-03-22
        let tz = parse_time_zone("Asia/Tehran").unwrap();
        let entries = vec![
            grouped("EARLY 1", &[Weekday::Mon], "00:15", "00:45"),
            grouped("LATE 2", &[Weekday::Mon], "10:00", "11:00"),
        ];
        let events = build_events(&entries, date(2021, 3, 22), date(2021, 6, 1), tz).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, "LATE 2");
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(parse_time_zone("Mars/Olympus"), Err(Error::InvalidTimeZone(_))));
        let err = build_events(&[], date(2025, 12, 10), date(2025, 9, 3), chicago()).unwrap_err();
        assert!(matches!(err, Error::InvalidDateRange { .. }));
        assert!(check_date_range(date(2025, 9, 3), date(2025, 9, 3)).is_ok());
    }

    #[test]
    fn test_uid_is_stable_and_distinct() {
        let entry = grouped("CS 400", &[Weekday::Tue], "13:00", "14:15");
        let a = event_uid(&entry, Weekday::Tue, 0);
        assert_eq!(a, event_uid(&entry, Weekday::Tue, 0));
        assert_ne!(a, event_uid(&entry, Weekday::Thu, 0));
        assert_ne!(a, event_uid(&entry, Weekday::Tue, 1));
        assert!(a.ends_with("@calendify"));
        assert_eq!(a.len(), 64 + "@calendify".len());
    }

    #[test]
    fn test_blank_location_omitted() {
        let mut entry = grouped("CS 400", &[Weekday::Tue], "13:00", "14:15");
        entry.location = "   ".to_string();
        let events = build_events(&[entry], date(2025, 9, 3), date(2025, 12, 10), chicago()).unwrap();
        assert_eq!(events[0].location, None);
    }
}
