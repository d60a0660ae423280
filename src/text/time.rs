//! Clock-time normalization.
//!
//! OCR produces times in a variety of shapes (`1:20PM`, `01:20 PM`, `13:20`).
//! Everything downstream works with zero-padded 24-hour `HH:MM` strings, with
//! the empty string standing for "no usable time".

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// hour(1-2 digits):minute(2 digits), optional AM/PM suffix
    static ref RE_CLOCK_TOKEN: Regex =
        Regex::new(r"^([0-9]{1,2}):([0-9]{2})\s*([AaPp][Mm])?$").unwrap();

    /// Strict 24-hour `HH:MM`
    static ref RE_24_HOUR: Regex = Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").unwrap();
}

/// Convert a free-form clock token into a zero-padded 24-hour `HH:MM` string.
///
/// Returns an empty string when the token does not have the
/// `H:MM` / `HH:MM` shape. Hour and minute ranges are not validated beyond
/// that shape; the editable table is where bad values get fixed.
///
/// # Examples
///
/// ```
/// use calendify::text::time::normalize_time;
///
/// assert_eq!(normalize_time("1:20PM"), "13:20");
/// assert_eq!(normalize_time("01:20 PM"), "13:20");
/// assert_eq!(normalize_time("12:05 AM"), "00:05");
/// assert_eq!(normalize_time("13:20"), "13:20");
/// assert_eq!(normalize_time("noon"), "");
/// ```
pub fn normalize_time(token: &str) -> String {
    let caps = match RE_CLOCK_TOKEN.captures(token.trim()) {
        Some(caps) => caps,
        None => return String::new(),
    };

    // Both groups are all-digit and at most two characters wide
    let mut hour: u32 = caps[1].parse().unwrap_or(0);
    let minute = &caps[2];

    let suffix = caps.get(3).map(|m| m.as_str().to_ascii_uppercase());
    match suffix.as_deref() {
        Some("PM") if hour != 12 => hour += 12,
        Some("AM") if hour == 12 => hour = 0,
        _ => {},
    }

    format!("{:02}:{}", hour, minute)
}

/// Minutes after midnight for a well-formed 24-hour `HH:MM` string.
///
/// # Examples
///
/// ```
/// use calendify::text::time::minutes_of_day;
///
/// assert_eq!(minutes_of_day("09:15"), Some(555));
/// assert_eq!(minutes_of_day("24:00"), None);
/// assert_eq!(minutes_of_day(""), None);
/// ```
pub fn minutes_of_day(time: &str) -> Option<u32> {
    let caps = RE_24_HOUR.captures(time)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    Some(hour * 60 + minute)
}

/// True for a well-formed 24-hour `HH:MM` string.
pub fn is_valid_24_hour(time: &str) -> bool {
    RE_24_HOUR.is_match(time)
}

/// Format a 24-hour `HH:MM` string as a 12-hour label, e.g. `"1:05 PM"`.
///
/// Returns `None` for anything that is not a well-formed 24-hour time.
pub fn format_12_hour(time: &str) -> Option<String> {
    let minutes = minutes_of_day(time)?;
    let (hour, minute) = (minutes / 60, minutes % 60);
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = if hour % 12 == 0 { 12 } else { hour % 12 };
    Some(format!("{}:{:02} {}", hour12, minute, meridiem))
}

/// Format minutes after midnight as `HH:MM`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
