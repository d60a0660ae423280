//! iCalendar (RFC 5545) document writer.
//!
//! Generates `VCALENDAR` documents with one weekly-recurring `VEVENT` per
//! class meeting day. Every zone named by an event `TZID` gets a
//! `VTIMEZONE` definition. Output is UTF-8 with CRLF line endings; long
//! content lines are folded at 75 octets.

use std::path::Path;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::error::Result;
use crate::export::vtimezone::{format_utc_offset, observances};

/// Maximum octets per content line before folding.
const MAX_LINE_OCTETS: usize = 75;

/// One weekly-recurring calendar event.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringEvent {
    /// Stable unique identifier
    pub uid: String,
    /// Event title (course name)
    pub summary: String,
    /// Room or building
    pub location: Option<String>,
    /// First occurrence start
    pub start: DateTime<Tz>,
    /// First occurrence end
    pub end: DateTime<Tz>,
    /// `RRULE` value, e.g. `FREQ=WEEKLY;BYDAY=MO;UNTIL=20251212T235959Z`
    pub rule: String,
}

/// iCalendar document writer.
///
/// # Example
///
/// ```ignore
/// use calendify::export::IcsWriter;
///
/// let mut writer = IcsWriter::new("-//Calendify//Schedule Export//EN", stamp_date);
/// writer.add_event(event);
/// writer.write_to_file("schedule.ics")?;
/// ```
#[derive(Debug, Clone)]
pub struct IcsWriter {
    /// `PRODID` value
    product_id: String,
    /// `DTSTAMP` date (midnight UTC)
    stamp_date: NaiveDate,
    /// Time zone advertised for the whole calendar
    time_zone: Option<String>,
    /// Calendar display name
    calendar_name: Option<String>,
    /// Last date the `VTIMEZONE` definitions must cover
    span_end: Option<NaiveDate>,
    /// Events to write
    events: Vec<RecurringEvent>,
}

impl IcsWriter {
    /// Create a writer. `stamp_date` fixes every event's `DTSTAMP` so output
    /// is reproducible.
    pub fn new(product_id: impl Into<String>, stamp_date: NaiveDate) -> Self {
        Self {
            product_id: product_id.into(),
            stamp_date,
            time_zone: None,
            calendar_name: None,
            span_end: None,
            events: Vec::new(),
        }
    }

    /// Advertise a calendar-wide time zone (`X-WR-TIMEZONE`).
    pub fn with_time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }

    /// Set the calendar display name (`X-WR-CALNAME`).
    pub fn with_calendar_name(mut self, name: impl Into<String>) -> Self {
        self.calendar_name = Some(name.into());
        self
    }

    /// Extend `VTIMEZONE` coverage to `end`. Without it, coverage stops at
    /// the last event's first occurrence.
    pub fn with_span_end(mut self, end: NaiveDate) -> Self {
        self.span_end = Some(end);
        self
    }

    /// Add an event.
    pub fn add_event(&mut self, event: RecurringEvent) {
        self.events.push(event);
    }

    /// Add several events.
    pub fn extend_events(&mut self, events: impl IntoIterator<Item = RecurringEvent>) {
        self.events.extend(events);
    }

    /// Number of events queued.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Generate the calendar document.
    pub fn to_ics(&self) -> String {
        let mut out = String::new();

        push_line(&mut out, "BEGIN:VCALENDAR");
        push_line(&mut out, "VERSION:2.0");
        push_line(&mut out, &format!("PRODID:{}", self.product_id));
        push_line(&mut out, "CALSCALE:GREGORIAN");
        push_line(&mut out, "METHOD:PUBLISH");
        if let Some(ref name) = self.calendar_name {
            push_line(&mut out, &format!("X-WR-CALNAME:{}", escape_text(name)));
        }
        if let Some(ref tz) = self.time_zone {
            push_line(&mut out, &format!("X-WR-TIMEZONE:{}", tz));
        }

        for tz in self.event_zones() {
            self.write_time_zone(&mut out, tz);
        }

        let stamp = format!("{}T000000Z", self.stamp_date.format("%Y%m%d"));
        for event in &self.events {
            self.write_event(&mut out, event, &stamp);
        }

        push_line(&mut out, "END:VCALENDAR");
        out
    }

    /// Distinct event zones in first-appearance order.
    fn event_zones(&self) -> Vec<Tz> {
        let mut zones: Vec<Tz> = Vec::new();
        for event in &self.events {
            let tz = event.start.timezone();
            if !zones.contains(&tz) {
                zones.push(tz);
            }
        }
        zones
    }

    fn write_time_zone(&self, out: &mut String, tz: Tz) {
        let from = self
            .events
            .iter()
            .map(|e| e.start.date_naive())
            .chain(std::iter::once(self.stamp_date))
            .min()
            .unwrap_or(self.stamp_date);
        let until = self
            .events
            .iter()
            .map(|e| e.end.date_naive())
            .chain(self.span_end)
            .max()
            .unwrap_or(from);

        push_line(out, "BEGIN:VTIMEZONE");
        push_line(out, &format!("TZID:{}", tz.name()));
        for observance in observances(tz, from, until) {
            push_line(out, &format!("BEGIN:{}", observance.component()));
            push_line(out, &format!("DTSTART:{}", observance.start.format("%Y%m%dT%H%M%S")));
            push_line(out, &format!("TZOFFSETFROM:{}", format_utc_offset(observance.offset_from)));
            push_line(out, &format!("TZOFFSETTO:{}", format_utc_offset(observance.offset_to)));
            push_line(out, &format!("TZNAME:{}", escape_text(&observance.name)));
            push_line(out, &format!("END:{}", observance.component()));
        }
        push_line(out, "END:VTIMEZONE");
    }

    fn write_event(&self, out: &mut String, event: &RecurringEvent, stamp: &str) {
        let tzid = event.start.timezone().name();

        push_line(out, "BEGIN:VEVENT");
        push_line(out, &format!("UID:{}", event.uid));
        push_line(out, &format!("DTSTAMP:{}", stamp));
        push_line(out, &format!("SUMMARY:{}", escape_text(&event.summary)));
        if let Some(ref location) = event.location {
            push_line(out, &format!("LOCATION:{}", escape_text(location)));
        }
        push_line(
            out,
            &format!("DTSTART;TZID={}:{}", tzid, event.start.format("%Y%m%dT%H%M%S")),
        );
        push_line(out, &format!("DTEND;TZID={}:{}", tzid, event.end.format("%Y%m%dT%H%M%S")));
        push_line(out, &format!("RRULE:{}", event.rule));
        push_line(out, "END:VEVENT");
    }

    /// Generate the document as UTF-8 bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_ics().into_bytes()
    }

    /// Write the document to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_bytes())?;
        Ok(())
    }
}

/// Append a content line, folded and CRLF-terminated.
fn push_line(out: &mut String, line: &str) {
    out.push_str(&fold_line(line));
    out.push_str("\r\n");
}

/// Fold a content line so no physical line exceeds 75 octets.
///
/// Continuation lines start with a single space. Folds never split a UTF-8
/// character.
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut used = 0;
    for c in line.chars() {
        if used + c.len_utf8() > MAX_LINE_OCTETS {
            folded.push_str("\r\n ");
            used = 1;
        }
        folded.push(c);
        used += c.len_utf8();
    }
    folded
}

/// Escape a TEXT property value.
fn escape_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {},
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(summary: &str, location: Option<&str>) -> RecurringEvent {
        let tz: Tz = "America/Chicago".parse().unwrap();
        RecurringEvent {
            uid: "abc@calendify".to_string(),
            summary: summary.to_string(),
            location: location.map(str::to_string),
            start: tz.with_ymd_and_hms(2025, 9, 8, 8, 0, 0).unwrap(),
            end: tz.with_ymd_and_hms(2025, 9, 8, 9, 15, 0).unwrap(),
            rule: "FREQ=WEEKLY;BYDAY=MO;UNTIL=20251212T235959Z".to_string(),
        }
    }

    fn writer() -> IcsWriter {
        IcsWriter::new("-//Test//EN", NaiveDate::from_ymd_opt(2025, 9, 3).unwrap())
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("Plain"), "Plain");
        assert_eq!(escape_text("a,b;c\\d"), "a\\,b\\;c\\\\d");
        assert_eq!(escape_text("two\r\nlines"), "two\\nlines");
    }

    #[test]
    fn test_fold_short_line_untouched() {
        assert_eq!(fold_line("SUMMARY:Short"), "SUMMARY:Short");
    }

    #[test]
    fn test_fold_long_line() {
        let line = format!("SUMMARY:{}", "x".repeat(200));
        let folded = fold_line(&line);
        for physical in folded.split("\r\n") {
            assert!(physical.len() <= MAX_LINE_OCTETS);
        }
        assert_eq!(folded.replace("\r\n ", ""), line);
    }

    #[test]
    fn test_fold_respects_char_boundaries() {
        let line = format!("LOCATION:{}", "é".repeat(60));
        let folded = fold_line(&line);
        for physical in folded.split("\r\n") {
            assert!(physical.len() <= MAX_LINE_OCTETS);
        }
        assert_eq!(folded.replace("\r\n ", ""), line);
    }

    #[test]
    fn test_empty_calendar() {
        let ics = writer().to_ics();
        assert_eq!(
            ics,
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Test//EN\r\nCALSCALE:GREGORIAN\r\nMETHOD:PUBLISH\r\nEND:VCALENDAR\r\n"
        );
    }

    #[test]
    fn test_event_lines() {
        let mut w = writer().with_time_zone("America/Chicago").with_calendar_name("Fall, 2025");
        w.add_event(event("STAT 453 (LEC 001)", Some("SMI 133")));
        let ics = w.to_ics();

        assert!(ics.contains("X-WR-CALNAME:Fall\\, 2025\r\n"));
        assert!(ics.contains("X-WR-TIMEZONE:America/Chicago\r\n"));
        assert!(ics.contains("DTSTAMP:20250903T000000Z\r\n"));
        assert!(ics.contains("SUMMARY:STAT 453 (LEC 001)\r\n"));
        assert!(ics.contains("LOCATION:SMI 133\r\n"));
        assert!(ics.contains("DTSTART;TZID=America/Chicago:20250908T080000\r\n"));
        assert!(ics.contains("DTEND;TZID=America/Chicago:20250908T091500\r\n"));
        assert!(ics.contains("RRULE:FREQ=WEEKLY;BYDAY=MO;UNTIL=20251212T235959Z\r\n"));
        assert!(!ics.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn test_time_zone_defined_before_events() {
        let mut w = writer().with_span_end(NaiveDate::from_ymd_opt(2025, 12, 12).unwrap());
        w.add_event(event("STAT 453", None));
        w.add_event(event("CS 300", None));
        let ics = w.to_ics();

        assert_eq!(ics.matches("BEGIN:VTIMEZONE\r\n").count(), 1);
        assert!(ics.contains("TZID:America/Chicago\r\n"));
        assert!(ics.contains(
            "BEGIN:STANDARD\r\nDTSTART:20251102T020000\r\nTZOFFSETFROM:-0500\r\nTZOFFSETTO:-0600\r\nTZNAME:CST\r\nEND:STANDARD\r\n"
        ));
        let zone = ics.find("END:VTIMEZONE").unwrap();
        assert!(zone < ics.find("BEGIN:VEVENT").unwrap());
    }

    #[test]
    fn test_time_zone_per_distinct_zone() {
        let mut w = writer();
        w.add_event(event("STAT 453", None));
        let tokyo = chrono_tz::Asia::Tokyo;
        w.add_event(RecurringEvent {
            start: tokyo.with_ymd_and_hms(2025, 9, 8, 8, 0, 0).unwrap(),
            end: tokyo.with_ymd_and_hms(2025, 9, 8, 9, 0, 0).unwrap(),
            ..event("Seminar", None)
        });
        let ics = w.to_ics();

        assert_eq!(ics.matches("BEGIN:VTIMEZONE\r\n").count(), 2);
        assert!(ics.find("TZID:America/Chicago").unwrap() < ics.find("TZID:Asia/Tokyo").unwrap());
        assert!(ics.contains("TZOFFSETTO:+0900\r\nTZNAME:JST\r\n"));
    }

    #[test]
    fn test_location_omitted_when_absent() {
        let mut w = writer();
        w.add_event(event("CS 300", None));
        assert!(!w.to_ics().contains("LOCATION"));
        assert_eq!(w.event_count(), 1);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.ics");
        let mut w = writer();
        w.add_event(event("CS 300", None));
        w.write_to_file(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), w.to_bytes());
    }
}
