//! Schedule entry records.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;
use crate::model::weekday::DayLabel;
use crate::text::time::minutes_of_day;

/// One class meeting reconstructed from an OCR block.
///
/// While flat, `days` holds exactly one label (one entry per weekday
/// occurrence). Once grouped, `days` holds the union of every weekday that
/// shares the same course and time range, in canonical week order.
///
/// `start_time`/`end_time` are either empty or 24-hour `HH:MM` strings as
/// produced by [`crate::text::time::normalize_time`]. User edits may leave
/// other text in them; consumers check with [`ScheduleEntry::time_range`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Course label, e.g. `"STAT 453 (LEC 001)"`
    pub course: String,
    /// Section designator taken from the parenthesized part of the label
    pub section: String,
    /// Days this meeting occurs on
    pub days: Vec<DayLabel>,
    /// Start time, `HH:MM` or empty
    pub start_time: String,
    /// End time, `HH:MM` or empty
    pub end_time: String,
    /// Room or building, possibly empty
    pub location: String,
    /// Raw OCR text the entry was derived from
    pub source_text: String,
    /// OCR bounding box the entry was derived from
    pub source_position: Position,
}

/// Identity of a class meeting across days: `(course, start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    /// Course label
    pub course: String,
    /// Start time text
    pub start_time: String,
    /// End time text
    pub end_time: String,
}

impl ScheduleEntry {
    /// The grouping key shared by all occurrences of this meeting.
    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            course: self.course.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }

    /// True if `key` identifies this entry's meeting.
    pub fn matches_key(&self, key: &GroupKey) -> bool {
        self.course == key.course && self.start_time == key.start_time && self.end_time == key.end_time
    }

    /// True when both times are filled in (possibly still malformed).
    pub fn has_times(&self) -> bool {
        !self.start_time.is_empty() && !self.end_time.is_empty()
    }

    /// Start and end as minutes after midnight, if both are well-formed
    /// 24-hour times.
    pub fn time_range(&self) -> Option<(u32, u32)> {
        Some((minutes_of_day(&self.start_time)?, minutes_of_day(&self.end_time)?))
    }

    /// True if the entry occurs on `day`.
    pub fn occurs_on(&self, day: DayLabel) -> bool {
        self.days.contains(&day)
    }

    /// A copy of this entry restricted to a single day.
    pub fn with_single_day(&self, day: DayLabel) -> ScheduleEntry {
        ScheduleEntry {
            days: vec![day],
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Weekday;

    fn entry(start: &str, end: &str) -> ScheduleEntry {
        ScheduleEntry {
            course: "CS 240".to_string(),
            days: vec![Weekday::Tue.into()],
            start_time: start.to_string(),
            end_time: end.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_time_range() {
        assert_eq!(entry("08:30", "09:45").time_range(), Some((510, 585)));
        assert_eq!(entry("", "09:45").time_range(), None);
        assert_eq!(entry("8.30", "09:45").time_range(), None);
    }

    #[test]
    fn test_group_key_match() {
        let a = entry("10:00", "11:00");
        let mut b = a.with_single_day(Weekday::Thu.into());
        assert!(b.matches_key(&a.group_key()));
        b.end_time = "11:15".to_string();
        assert!(!b.matches_key(&a.group_key()));
    }

    #[test]
    fn test_camel_case_json() {
        let json = serde_json::to_value(entry("10:00", "11:00")).unwrap();
        assert_eq!(json["startTime"], "10:00");
        assert_eq!(json["days"][0], "Tue");
        assert!(json.get("sourcePosition").is_some());
    }
}
