//! `VTIMEZONE` observances derived from the IANA database.
//!
//! Events carry `TZID` local times, so every zone they name needs a
//! `VTIMEZONE` definition. Offsets are sampled from `chrono-tz` over the
//! exported date span; each offset change becomes one `STANDARD` or
//! `DAYLIGHT` observance.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone};
use chrono_tz::{OffsetComponents, Tz, TzOffset};

const SECONDS_PER_DAY: i64 = 86_400;

/// One `STANDARD` or `DAYLIGHT` sub-component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observance {
    /// Daylight saving is in effect
    pub daylight: bool,
    /// Local wall time the observance begins, in the previous offset
    pub start: NaiveDateTime,
    /// UTC offset in seconds before the change
    pub offset_from: i32,
    /// UTC offset in seconds after the change
    pub offset_to: i32,
    /// Abbreviation, e.g. `CST`
    pub name: String,
}

impl Observance {
    fn new(start: NaiveDateTime, before: TzOffset, after: TzOffset) -> Self {
        Self {
            daylight: after.dst_offset() != Duration::zero(),
            start,
            offset_from: before.fix().local_minus_utc(),
            offset_to: after.fix().local_minus_utc(),
            name: after.to_string(),
        }
    }

    /// Component name, `DAYLIGHT` or `STANDARD`.
    pub fn component(&self) -> &'static str {
        if self.daylight {
            "DAYLIGHT"
        } else {
            "STANDARD"
        }
    }
}

/// Observances of `tz` covering `from..=until`, padded by one day each side.
///
/// The first observance is the offset already in force at the start of the
/// span (`TZOFFSETFROM` equals `TZOFFSETTO`). Each later one marks a change
/// found inside the span.
pub fn observances(tz: Tz, from: NaiveDate, until: NaiveDate) -> Vec<Observance> {
    let first = from.pred_opt().unwrap_or(from);
    let last = until.succ_opt().unwrap_or(until);
    let first_midnight = first.and_time(NaiveTime::MIN);
    let span_start = first_midnight.and_utc().timestamp();
    let span_end = last.and_time(NaiveTime::MIN).and_utc().timestamp() + SECONDS_PER_DAY;

    let Some(mut current) = offset_at(tz, span_start) else {
        return Vec::new();
    };
    let mut list = vec![Observance::new(first_midnight, current, current)];

    let mut lo = span_start;
    while lo < span_end {
        let hi = (lo + SECONDS_PER_DAY).min(span_end);
        match offset_at(tz, hi) {
            Some(offset) if offset != current => {},
            Some(_) => {
                lo = hi;
                continue;
            },
            None => break,
        }

        let change = first_change(tz, lo, hi, current);
        let Some(next) = offset_at(tz, change) else {
            break;
        };
        if let Some(utc) = DateTime::from_timestamp(change, 0) {
            let local = utc.naive_utc() + Duration::seconds(i64::from(current.fix().local_minus_utc()));
            list.push(Observance::new(local, current, next));
        }
        current = next;
        lo = change;
    }

    list
}

/// Format a UTC offset as `+HHMM` (or `+HHMMSS` for sub-minute offsets).
pub fn format_utc_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    let (hours, minutes, secs) = (abs / 3600, abs / 60 % 60, abs % 60);
    if secs == 0 {
        format!("{}{:02}{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}{:02}{:02}", sign, hours, minutes, secs)
    }
}

fn offset_at(tz: Tz, timestamp: i64) -> Option<TzOffset> {
    let utc = DateTime::from_timestamp(timestamp, 0)?;
    Some(tz.offset_from_utc_datetime(&utc.naive_utc()))
}

/// First second in `(lo, hi]` whose offset differs from `current`.
///
/// Requires the offset at `lo` to be `current` and the offset at `hi` not.
fn first_change(tz: Tz, mut lo: i64, mut hi: i64, current: TzOffset) -> i64 {
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if offset_at(tz, mid) == Some(current) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    hi
}
