//! Weekday enumeration for a five-day academic week.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One day of the Monday-to-Friday teaching week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday
    Mon,
    /// Tuesday
    Tue,
    /// Wednesday
    Wed,
    /// Thursday
    Thu,
    /// Friday
    Fri,
}

impl Weekday {
    /// All weekdays in canonical (left-to-right column) order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Weekday for a left-to-right column index, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendify::model::Weekday;
    ///
    /// assert_eq!(Weekday::from_index(2), Some(Weekday::Wed));
    /// assert_eq!(Weekday::from_index(5), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Weekday> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based position in the week.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Three-letter label used in tables and JSON.
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
        }
    }

    /// The matching `chrono` weekday for date arithmetic.
    pub fn to_chrono(self) -> chrono::Weekday {
        match self {
            Weekday::Mon => chrono::Weekday::Mon,
            Weekday::Tue => chrono::Weekday::Tue,
            Weekday::Wed => chrono::Weekday::Wed,
            Weekday::Thu => chrono::Weekday::Thu,
            Weekday::Fri => chrono::Weekday::Fri,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Weekday {
    type Err = Error;

    /// Accepts short and full English names, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mon" | "monday" => Ok(Weekday::Mon),
            "tue" | "tues" | "tuesday" => Ok(Weekday::Tue),
            "wed" | "wednesday" => Ok(Weekday::Wed),
            "thu" | "thur" | "thurs" | "thursday" => Ok(Weekday::Thu),
            "fri" | "friday" => Ok(Weekday::Fri),
            _ => Err(Error::InvalidDay(s.to_string())),
        }
    }
}

/// Day assigned to a schedule entry: a weekday, or the unknown-day marker
/// for blocks whose position fell outside every inferred day column.
///
/// Ordering follows the week, with `Unknown` sorting after Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DayLabel {
    /// A known weekday
    Day(Weekday),
    /// Position could not be mapped to a weekday column
    Unknown,
}

impl DayLabel {
    /// Text used for the unknown-day marker.
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    /// The weekday, unless this is the unknown marker.
    pub fn weekday(self) -> Option<Weekday> {
        match self {
            DayLabel::Day(day) => Some(day),
            DayLabel::Unknown => None,
        }
    }

    /// True for the unknown-day marker.
    pub fn is_unknown(self) -> bool {
        matches!(self, DayLabel::Unknown)
    }
}

impl From<Weekday> for DayLabel {
    fn from(day: Weekday) -> Self {
        DayLabel::Day(day)
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayLabel::Day(day) => fmt::Display::fmt(day, f),
            DayLabel::Unknown => f.write_str(Self::UNKNOWN_NAME),
        }
    }
}

impl FromStr for DayLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(Self::UNKNOWN_NAME) {
            return Ok(DayLabel::Unknown);
        }
        s.parse::<Weekday>().map(DayLabel::Day)
    }
}

impl From<DayLabel> for String {
    fn from(day: DayLabel) -> Self {
        day.to_string()
    }
}

impl TryFrom<String> for DayLabel {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Parse a user-typed, comma-separated day list such as `"Mon, Wed"`.
///
/// Empty tokens are ignored. The result is deduplicated and in canonical
/// week order.
///
/// # Examples
///
/// ```
/// use calendify::model::{parse_day_list, DayLabel, Weekday};
///
/// let days = parse_day_list("wed, Mon,,").unwrap();
/// assert_eq!(days, vec![DayLabel::Day(Weekday::Mon), DayLabel::Day(Weekday::Wed)]);
/// ```
pub fn parse_day_list(input: &str) -> Result<Vec<DayLabel>> {
    let mut days = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::parse::<DayLabel>)
        .collect::<Result<Vec<_>>>()?;
    days.sort();
    days.dedup();
    Ok(days)
}

/// Join a day list for display, e.g. `"Mon, Wed"`.
pub fn format_day_list(days: &[DayLabel]) -> String {
    days.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
