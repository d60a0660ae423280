//! Weekly recurrence arithmetic.

use chrono::{Datelike, Duration, NaiveDate};

use crate::model::Weekday;

/// Longest forward search for a matching weekday.
const MAX_DAYS_AHEAD: u32 = 6;

/// First date on or after `semester_start` falling on `day`.
///
/// # Examples
///
/// ```
/// use calendify::export::first_occurrence;
/// use calendify::model::Weekday;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 9, 3).unwrap(); // a Wednesday
/// assert_eq!(first_occurrence(start, Weekday::Wed), start);
/// assert_eq!(
///     first_occurrence(start, Weekday::Mon),
///     NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()
/// );
/// ```
pub fn first_occurrence(semester_start: NaiveDate, day: Weekday) -> NaiveDate {
    let from = semester_start.weekday().num_days_from_monday();
    let to = day.to_chrono().num_days_from_monday();
    let ahead = (to + 7 - from) % 7;
    debug_assert!(ahead <= MAX_DAYS_AHEAD);
    semester_start + Duration::days(i64::from(ahead))
}

/// Two-letter `BYDAY` token for a weekday.
pub fn byday_token(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
    }
}

/// `UNTIL` value bounding a rule at the end of `semester_end`, in UTC.
pub fn until_stamp(semester_end: NaiveDate) -> String {
    format!("{}T235959Z", semester_end.format("%Y%m%d"))
}

/// Full weekly `RRULE` value for `day`, bounded by `semester_end`.
///
/// # Examples
///
/// ```
/// use calendify::export::weekly_rule;
/// use calendify::model::Weekday;
/// use chrono::NaiveDate;
///
/// let end = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
/// assert_eq!(weekly_rule(Weekday::Thu, end), "FREQ=WEEKLY;BYDAY=TH;UNTIL=20251210T235959Z");
/// ```
pub fn weekly_rule(day: Weekday, semester_end: NaiveDate) -> String {
    format!("FREQ=WEEKLY;BYDAY={};UNTIL={}", byday_token(day), until_stamp(semester_end))
}
