//! Derive the grouped (editable) view from flat entries.

use indexmap::IndexMap;

use crate::model::{GroupKey, ScheduleEntry};

/// Merge flat entries sharing `(course, start_time, end_time)`.
///
/// Groups appear in the order their key is first seen. Each group takes its
/// non-key fields (section, location, source) from its first member, and its
/// `days` is the union of all members' days in canonical week order.
///
/// # Examples
///
/// ```
/// use calendify::grouping::derive_grouped;
/// use calendify::model::{DayLabel, ScheduleEntry, Weekday};
///
/// let wed = ScheduleEntry {
///     course: "STAT 453 (LEC 001)".into(),
///     days: vec![Weekday::Wed.into()],
///     start_time: "08:00".into(),
///     end_time: "09:15".into(),
///     ..Default::default()
/// };
/// let mon = wed.with_single_day(Weekday::Mon.into());
///
/// let grouped = derive_grouped(&[wed, mon]);
/// assert_eq!(grouped.len(), 1);
/// assert_eq!(grouped[0].days, vec![DayLabel::Day(Weekday::Mon), DayLabel::Day(Weekday::Wed)]);
/// ```
pub fn derive_grouped(flat: &[ScheduleEntry]) -> Vec<ScheduleEntry> {
    let mut groups: IndexMap<GroupKey, ScheduleEntry> = IndexMap::new();

    for entry in flat {
        groups
            .entry(entry.group_key())
            .and_modify(|group| group.days.extend(entry.days.iter().copied()))
            .or_insert_with(|| entry.clone());
    }

    groups
        .into_values()
        .map(|mut group| {
            group.days.sort();
            group.days.dedup();
            group
        })
        .collect()
}

/// Expand grouped entries back into one flat entry per day.
pub fn expand_grouped(grouped: &[ScheduleEntry]) -> Vec<ScheduleEntry> {
    grouped
        .iter()
        .flat_map(|group| group.days.iter().map(move |&day| group.with_single_day(day)))
        .collect()
}
