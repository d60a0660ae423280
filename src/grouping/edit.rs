//! Propagate edits of a grouped entry back into the flat entries.
//!
//! Rules, for an edit replacing grouped entry `previous` with `updated`:
//!
//! - Cosmetic edit (day set and both times unchanged): flat entries are left
//!   untouched. Course and location changes made this way live only in the
//!   grouped view; location in particular is never written to flat entries.
//! - Structural edit (day set or times changed): every flat entry matching
//!   the *previous* `(course, start, end)` key keeps only the days still in
//!   the updated set (and is dropped if none remain), and takes the updated
//!   times. Each day added by the edit gets a new flat entry cloned from
//!   `updated`. Flat entries keep the course text they were read with.

use crate::model::{DayLabel, GroupKey, ScheduleEntry};

/// How an edit affects the flat entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Only fields without per-day meaning changed; flat entries untouched
    Cosmetic,
    /// Days or times changed; flat entries rewritten
    Structural,
}

/// Canonical day set: sorted in week order, without duplicates.
pub fn canonical_days(days: &[DayLabel]) -> Vec<DayLabel> {
    let mut days = days.to_vec();
    days.sort();
    days.dedup();
    days
}

/// Classify the edit from `previous` to `updated`.
pub fn classify_edit(previous: &ScheduleEntry, updated: &ScheduleEntry) -> EditKind {
    let same_days = canonical_days(&previous.days) == canonical_days(&updated.days);
    let same_times =
        previous.start_time == updated.start_time && previous.end_time == updated.end_time;

    if same_days && same_times {
        EditKind::Cosmetic
    } else {
        EditKind::Structural
    }
}

/// Apply an edit of one grouped entry to the flat entries, returning the new
/// flat list. The input slice is not modified.
///
/// # Examples
///
/// ```
/// use calendify::grouping::{apply_edit, derive_grouped};
/// use calendify::model::{DayLabel, ScheduleEntry, Weekday};
///
/// let mon = ScheduleEntry {
///     course: "PHYS 201".into(),
///     days: vec![Weekday::Mon.into()],
///     start_time: "11:00".into(),
///     end_time: "11:50".into(),
///     ..Default::default()
/// };
/// let flat = vec![mon.clone()];
/// let previous = derive_grouped(&flat)[0].clone();
///
/// let mut updated = previous.clone();
/// updated.days = vec![Weekday::Mon.into(), Weekday::Fri.into()];
///
/// let flat = apply_edit(&flat, &previous, &updated);
/// assert_eq!(flat.len(), 2);
/// assert_eq!(flat[1].days, vec![DayLabel::Day(Weekday::Fri)]);
/// ```
pub fn apply_edit(
    flat: &[ScheduleEntry],
    previous: &ScheduleEntry,
    updated: &ScheduleEntry,
) -> Vec<ScheduleEntry> {
    if classify_edit(previous, updated) == EditKind::Cosmetic {
        log::debug!("Cosmetic edit of '{}': flat entries unchanged", previous.course);
        return flat.to_vec();
    }
    apply_keyed_edit(flat, &previous.group_key(), &previous.days, updated).0
}

/// Apply a structural edit to the flat entries stored under `key`.
///
/// Only flat entries matching `key` on one of `previous_days` are touched,
/// so rows that happen to share a key on other days are left alone. Course
/// text is never rewritten: kept and added entries both stay under
/// `key.course`. Returns the new flat list and the key the edited entries
/// now live under.
pub fn apply_keyed_edit(
    flat: &[ScheduleEntry],
    key: &GroupKey,
    previous_days: &[DayLabel],
    updated: &ScheduleEntry,
) -> (Vec<ScheduleEntry>, GroupKey) {
    let previous_days = canonical_days(previous_days);
    let updated_days = canonical_days(&updated.days);

    let mut result = Vec::with_capacity(flat.len() + updated_days.len());
    let mut removed = 0usize;

    for entry in flat {
        let owned = entry.matches_key(key) && entry.days.iter().any(|day| previous_days.contains(day));
        if !owned {
            result.push(entry.clone());
            continue;
        }

        let kept_days: Vec<DayLabel> = entry
            .days
            .iter()
            .copied()
            .filter(|day| updated_days.contains(day))
            .collect();

        if kept_days.is_empty() {
            removed += 1;
            continue;
        }

        result.push(ScheduleEntry {
            days: kept_days,
            start_time: updated.start_time.clone(),
            end_time: updated.end_time.clone(),
            ..entry.clone()
        });
    }

    let mut added = 0usize;
    for &day in updated_days.iter().filter(|day| !previous_days.contains(day)) {
        result.push(ScheduleEntry {
            course: key.course.clone(),
            ..updated.with_single_day(day)
        });
        added += 1;
    }

    log::debug!(
        "Structural edit of '{}' {}-{}: {} flat entries removed, {} added",
        key.course,
        key.start_time,
        key.end_time,
        removed,
        added
    );

    let new_key = GroupKey {
        course: key.course.clone(),
        start_time: updated.start_time.clone(),
        end_time: updated.end_time.clone(),
    };
    (result, new_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::derive_grouped;
    use crate::model::Weekday;

    fn flat_week(days: &[Weekday]) -> Vec<ScheduleEntry> {
        days.iter()
            .map(|&day| ScheduleEntry {
                course: "HIST 101".to_string(),
                days: vec![day.into()],
                start_time: "13:00".to_string(),
                end_time: "14:15".to_string(),
                location: "Humanities 1111".to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_classify() {
        let flat = flat_week(&[Weekday::Tue, Weekday::Thu]);
        let previous = derive_grouped(&flat).remove(0);

        let mut renamed = previous.clone();
        renamed.location = "Van Vleck B102".to_string();
        assert_eq!(classify_edit(&previous, &renamed), EditKind::Cosmetic);

        let mut reordered = previous.clone();
        reordered.days.reverse();
        assert_eq!(classify_edit(&previous, &reordered), EditKind::Cosmetic);

        let mut retimed = previous.clone();
        retimed.end_time = "14:30".to_string();
        assert_eq!(classify_edit(&previous, &retimed), EditKind::Structural);
    }

    #[test]
    fn test_location_edit_not_propagated() {
        let flat = flat_week(&[Weekday::Tue, Weekday::Thu]);
        let previous = derive_grouped(&flat).remove(0);
        let mut updated = previous.clone();
        updated.location = "Van Vleck B102".to_string();

        let after = apply_edit(&flat, &previous, &updated);
        assert_eq!(after, flat);
        assert!(after.iter().all(|e| e.location == "Humanities 1111"));
    }

    #[test]
    fn test_time_change_rewrites_all_days() {
        let flat = flat_week(&[Weekday::Tue, Weekday::Thu]);
        let previous = derive_grouped(&flat).remove(0);
        let mut updated = previous.clone();
        updated.start_time = "13:30".to_string();
        updated.end_time = "14:45".to_string();

        let after = apply_edit(&flat, &previous, &updated);
        assert_eq!(after.len(), 2);
        assert!(after.iter().all(|e| e.start_time == "13:30" && e.end_time == "14:45"));
        assert_eq!(derive_grouped(&after)[0].days, previous.days);
    }

    #[test]
    fn test_remove_and_add_days() {
        let flat = flat_week(&[Weekday::Mon, Weekday::Wed]);
        let previous = derive_grouped(&flat).remove(0);
        let mut updated = previous.clone();
        updated.days = vec![Weekday::Fri.into(), Weekday::Wed.into()];

        let after = apply_edit(&flat, &previous, &updated);
        let days: Vec<DayLabel> = after.iter().map(|e| e.days[0]).collect();
        assert_eq!(days, vec![Weekday::Wed.into(), Weekday::Fri.into()]);
    }

    #[test]
    fn test_other_groups_untouched() {
        let mut flat = flat_week(&[Weekday::Mon]);
        let other = ScheduleEntry {
            course: "ART 100".to_string(),
            days: vec![Weekday::Mon.into()],
            start_time: "13:00".to_string(),
            end_time: "14:15".to_string(),
            ..Default::default()
        };
        flat.push(other.clone());

        let previous = derive_grouped(&flat).remove(0);
        let mut updated = previous.clone();
        updated.days.clear();

        let after = apply_edit(&flat, &previous, &updated);
        assert_eq!(after, vec![other]);
    }

    #[test]
    fn test_keyed_edit_scoped_to_row_days() {
        // Two entries share a key but belong to different rows (Mon and Wed)
        let flat = flat_week(&[Weekday::Mon, Weekday::Wed]);
        let key = flat[0].group_key();
        let mut updated = flat[1].clone();
        updated.days = vec![Weekday::Fri.into()];

        let (after, new_key) = apply_keyed_edit(&flat, &key, &[Weekday::Wed.into()], &updated);
        let days: Vec<DayLabel> = after.iter().map(|e| e.days[0]).collect();
        assert_eq!(days, vec![Weekday::Mon.into(), Weekday::Fri.into()]);
        assert_eq!(new_key, key);
    }

    #[test]
    fn test_keyed_edit_keeps_flat_course() {
        let flat = flat_week(&[Weekday::Tue]);
        let key = flat[0].group_key();
        let mut updated = flat[0].clone();
        updated.course = "HIST 101 (LEC 001)".to_string();
        updated.days = vec![Weekday::Tue.into(), Weekday::Thu.into()];
        updated.start_time = "15:00".to_string();

        let (after, new_key) = apply_keyed_edit(&flat, &key, &[Weekday::Tue.into()], &updated);
        assert_eq!(after.len(), 2);
        assert!(after.iter().all(|e| e.course == "HIST 101" && e.start_time == "15:00"));
        assert_eq!(new_key.course, "HIST 101");
        assert_eq!(new_key.start_time, "15:00");
    }
}
