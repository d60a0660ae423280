//! Week-grid geometry for the calendar view.

use crate::config::GridConfig;
use crate::model::{DayLabel, ScheduleEntry, Weekday};
use crate::render::overlap::{layout_day, LayoutRecord};
use crate::text::time::format_minutes;

/// Placement of one event inside its day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventBox {
    /// Left edge as a percentage of the day column width
    pub left_pct: f32,
    /// Width as a percentage of the day column width
    pub width_pct: f32,
    /// Top edge in pixels below the grid start
    pub top: f32,
    /// Height in pixels
    pub height: f32,
}

/// `HH:MM` labels for the grid rows, every `slot_minutes` from `start_hour`
/// up to (not including) `end_hour`.
///
/// # Examples
///
/// ```
/// use calendify::config::GridConfig;
/// use calendify::render::time_slots;
///
/// let slots = time_slots(&GridConfig::default());
/// assert_eq!(slots.len(), 18);
/// assert_eq!(slots[0], "08:00");
/// assert_eq!(slots[17], "16:30");
/// ```
pub fn time_slots(grid: &GridConfig) -> Vec<String> {
    let step = grid.slot_minutes.max(1) as usize;
    (grid.start_hour * 60..grid.end_hour * 60)
        .step_by(step)
        .map(format_minutes)
        .collect()
}

/// Entries that occur on `day` and have both times filled in.
pub fn entries_for_day(entries: &[ScheduleEntry], day: DayLabel) -> Vec<&ScheduleEntry> {
    entries
        .iter()
        .filter(|entry| entry.occurs_on(day) && entry.has_times())
        .collect()
}

/// Pixel and percentage placement for a laid-out entry.
pub fn event_box(record: &LayoutRecord<'_>, grid: &GridConfig) -> EventBox {
    let total = record.total_columns.max(1) as f32;
    let pixels_per_minute = grid.hour_height / 60.0;
    EventBox {
        left_pct: record.column as f32 / total * 100.0,
        width_pct: 100.0 / total,
        top: record.start_offset as f32 * pixels_per_minute,
        height: (record.end_offset - record.start_offset) as f32 * pixels_per_minute,
    }
}

/// Overlap layout for every weekday column, Monday first.
pub fn week_layout<'a>(
    entries: &'a [ScheduleEntry],
    grid: &GridConfig,
) -> Vec<(Weekday, Vec<LayoutRecord<'a>>)> {
    Weekday::ALL
        .iter()
        .map(|&day| (day, layout_day(entries, day.into(), grid)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: Weekday, start: &str, end: &str) -> ScheduleEntry {
        ScheduleEntry {
            course: "BIO 151".to_string(),
            days: vec![day.into()],
            start_time: start.to_string(),
            end_time: end.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_custom_slots() {
        let grid = GridConfig {
            slot_minutes: 60,
            ..GridConfig::default().with_hours(9, 12)
        };
        assert_eq!(time_slots(&grid), vec!["09:00", "10:00", "11:00"]);
    }

    #[test]
    fn test_entries_for_day_requires_times() {
        let mut missing = entry(Weekday::Mon, "", "");
        missing.course = "TBA".to_string();
        let entries = vec![entry(Weekday::Mon, "09:00", "10:00"), missing, entry(Weekday::Tue, "09:00", "10:00")];
        let monday = entries_for_day(&entries, Weekday::Mon.into());
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].course, "BIO 151");
    }

    #[test]
    fn test_event_box() {
        let entries = vec![entry(Weekday::Wed, "09:30", "10:45"), entry(Weekday::Wed, "10:00", "11:00")];
        let grid = GridConfig::default();
        let records = layout_day(&entries, Weekday::Wed.into(), &grid);

        let first = event_box(&records[0], &grid);
        assert_eq!(first.left_pct, 0.0);
        assert_eq!(first.width_pct, 50.0);
        assert_eq!(first.top, 90.0);
        assert_eq!(first.height, 75.0);

        let second = event_box(&records[1], &grid);
        assert_eq!(second.left_pct, 50.0);
    }

    #[test]
    fn test_before_grid_start_is_negative_top() {
        let entries = vec![entry(Weekday::Fri, "07:30", "08:20")];
        let grid = GridConfig::default();
        let records = layout_day(&entries, Weekday::Fri.into(), &grid);
        assert_eq!(event_box(&records[0], &grid).top, -30.0);
    }

    #[test]
    fn test_week_layout_covers_five_days() {
        let entries = vec![entry(Weekday::Thu, "13:00", "14:00")];
        let week = week_layout(&entries, &GridConfig::default());
        assert_eq!(week.len(), 5);
        assert_eq!(week[3].0, Weekday::Thu);
        assert_eq!(week[3].1.len(), 1);
        assert!(week[0].1.is_empty());
    }
}
