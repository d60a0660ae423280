//! Side-by-side layout of temporally overlapping events.
//!
//! Events on one day are placed greedily in start order into the lowest
//! column not taken by an overlapping, already placed event (interval graph
//! colouring). Each event's `total_columns` is the width of its connected
//! overlap cluster, so an event only shares horizontal space with the events
//! it is transitively concurrent with:
//!
//! ```text
//!  08:00  ┌─A─┐┌─B─┐          A, B, C form one cluster: 2 columns
//!  09:00  └───┘│   │┌─C─┐
//!  10:00       └───┘└───┘
//!  11:00  ┌────D─────┐        D overlaps nothing: 1 column
//! ```

use std::collections::VecDeque;

use crate::config::GridConfig;
use crate::model::{DayLabel, ScheduleEntry};
use crate::render::grid::entries_for_day;

/// Half-open time interval `[start, end)` in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Start offset in minutes
    pub start: i32,
    /// End offset in minutes (exclusive)
    pub end: i32,
}

impl Interval {
    /// Create a new interval.
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Check whether two intervals share any time.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendify::render::Interval;
    ///
    /// let a = Interval::new(0, 60);
    /// assert!(a.overlaps(&Interval::new(30, 90)));
    /// assert!(!a.overlaps(&Interval::new(60, 120))); // back-to-back
    /// ```
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Column slot assigned to one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSlot {
    /// Zero-based rendering column
    pub column: usize,
    /// Number of columns in this interval's overlap cluster (at least 1)
    pub total_columns: usize,
}

/// Assign rendering columns to a set of intervals.
///
/// The result is indexed like the input. Intervals are processed by start
/// time, ties broken by input position. No two intervals sharing a column
/// overlap.
pub fn assign_columns(intervals: &[Interval]) -> Vec<ColumnSlot> {
    let n = intervals.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| intervals[i].start);

    let mut columns = vec![0usize; n];
    for (pos, &i) in order.iter().enumerate() {
        let mut taken = vec![false; pos + 1];
        for &j in &order[..pos] {
            if intervals[i].overlaps(&intervals[j]) && columns[j] < taken.len() {
                taken[columns[j]] = true;
            }
        }
        // At most `pos` columns are taken, so a free one exists in 0..=pos
        columns[i] = taken.iter().position(|&t| !t).unwrap_or(pos);
    }

    let clusters = overlap_clusters(intervals);
    let mut cluster_width = vec![0usize; clusters.iter().max().map_or(0, |&c| c + 1)];
    for i in 0..n {
        cluster_width[clusters[i]] = cluster_width[clusters[i]].max(columns[i] + 1);
    }

    (0..n)
        .map(|i| ColumnSlot {
            column: columns[i],
            total_columns: cluster_width[clusters[i]],
        })
        .collect()
}

/// Connected-component id of each interval in the overlap graph.
fn overlap_clusters(intervals: &[Interval]) -> Vec<usize> {
    let n = intervals.len();
    let mut cluster = vec![usize::MAX; n];
    let mut next_id = 0;

    for seed in 0..n {
        if cluster[seed] != usize::MAX {
            continue;
        }
        cluster[seed] = next_id;
        let mut queue = VecDeque::from([seed]);
        while let Some(i) = queue.pop_front() {
            for j in 0..n {
                if cluster[j] == usize::MAX && intervals[i].overlaps(&intervals[j]) {
                    cluster[j] = next_id;
                    queue.push_back(j);
                }
            }
        }
        next_id += 1;
    }

    cluster
}

/// Layout of one entry within its day column.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRecord<'a> {
    /// The laid-out entry
    pub entry: &'a ScheduleEntry,
    /// Start, in minutes after the day-start reference
    pub start_offset: i32,
    /// End, in minutes after the day-start reference
    pub end_offset: i32,
    /// Zero-based rendering column
    pub column: usize,
    /// Number of columns in this entry's overlap cluster
    pub total_columns: usize,
}

/// Lay out entries that share one day.
///
/// Offsets are measured from `day_start_minutes` after midnight. Entries
/// without two well-formed times, or whose end is not after their start,
/// cannot be placed on a time axis and are left out. Records come back in
/// processing order (by start, ties by input position).
pub fn layout_entries<'a>(entries: &[&'a ScheduleEntry], day_start_minutes: u32) -> Vec<LayoutRecord<'a>> {
    let reference = day_start_minutes as i32;
    let placeable: Vec<(&'a ScheduleEntry, Interval)> = entries
        .iter()
        .filter_map(|&entry| match entry.time_range() {
            Some((start, end)) if end > start => Some((
                entry,
                Interval::new(start as i32 - reference, end as i32 - reference),
            )),
            _ => {
                log::debug!(
                    "Not laying out '{}': unusable times '{}'-'{}'",
                    entry.course,
                    entry.start_time,
                    entry.end_time
                );
                None
            },
        })
        .collect();

    let intervals: Vec<Interval> = placeable.iter().map(|(_, interval)| *interval).collect();
    let slots = assign_columns(&intervals);

    let mut records: Vec<LayoutRecord<'a>> = placeable
        .into_iter()
        .zip(slots)
        .map(|((entry, interval), slot)| LayoutRecord {
            entry,
            start_offset: interval.start,
            end_offset: interval.end,
            column: slot.column,
            total_columns: slot.total_columns,
        })
        .collect();
    records.sort_by_key(|record| record.start_offset);
    records
}

/// Lay out the entries occurring on `day`.
pub fn layout_day<'a>(
    entries: &'a [ScheduleEntry],
    day: DayLabel,
    grid: &GridConfig,
) -> Vec<LayoutRecord<'a>> {
    layout_entries(&entries_for_day(entries, day), grid.day_start_minutes())
}
