//! Single owner of the flat and grouped schedule state.

use crate::error::{Error, Result};
use crate::grouping::edit::{apply_keyed_edit, canonical_days, classify_edit, EditKind};
use crate::grouping::merge::derive_grouped;
use crate::model::{DayLabel, GroupKey, ScheduleEntry};

/// Live schedule state for one upload.
///
/// Holds the flat per-day entries (rendering and export source) alongside
/// the grouped view the user edits. Edits go through [`ScheduleState::edit`],
/// which applies each one completely before returning, so the two views never
/// observe a half-applied edit.
///
/// Each grouped row remembers the flat key it stands for. Cosmetic edits may
/// change the row's visible course text without touching the flat entries,
/// so later structural edits find their flat entries through that key rather
/// than through the row's current text. Keys are unique across rows: a
/// structural edit that moves a row onto another row's key merges the two.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleState {
    flat: Vec<ScheduleEntry>,
    grouped: Vec<ScheduleEntry>,
    keys: Vec<GroupKey>,
}

impl ScheduleState {
    /// Build the state from freshly reconstructed flat entries.
    pub fn from_entries(flat: Vec<ScheduleEntry>) -> Self {
        let grouped = derive_grouped(&flat);
        let keys = grouped.iter().map(ScheduleEntry::group_key).collect();
        Self { flat, grouped, keys }
    }

    /// Flat entries, one weekday each.
    pub fn flat(&self) -> &[ScheduleEntry] {
        &self.flat
    }

    /// Grouped entries as shown in the editable table.
    pub fn grouped(&self) -> &[ScheduleEntry] {
        &self.grouped
    }

    /// Flat key backing the grouped row at `index`.
    pub fn key_of(&self, index: usize) -> Option<&GroupKey> {
        self.keys.get(index)
    }

    /// Replace the grouped entry at `index` and reconcile the flat entries.
    ///
    /// The grouped entry is always overwritten (its day set stored in
    /// canonical order). Whether the flat entries change depends on the
    /// returned [`EditKind`]; see [`crate::grouping::edit`]. If a structural
    /// edit lands the row on the key of another row, the other row is folded
    /// into it and removed, which shifts later indices down by one.
    pub fn edit(&mut self, index: usize, updated: ScheduleEntry) -> Result<EditKind> {
        let previous = self.grouped.get(index).cloned().ok_or(Error::EditIndexOutOfRange {
            index,
            len: self.grouped.len(),
        })?;

        let mut updated = ScheduleEntry {
            days: canonical_days(&updated.days),
            ..updated
        };

        let kind = classify_edit(&previous, &updated);
        let mut index = index;
        if kind == EditKind::Structural {
            let (flat, new_key) = apply_keyed_edit(&self.flat, &self.keys[index], &previous.days, &updated);
            self.flat = flat;

            let collision = (0..self.keys.len()).find(|&i| i != index && self.keys[i] == new_key);
            if let Some(other) = collision {
                log::debug!(
                    "Grouped entry {} now shares '{}' {}-{} with entry {}; merging",
                    index,
                    new_key.course,
                    new_key.start_time,
                    new_key.end_time,
                    other
                );
                let mut days = updated.days.clone();
                days.extend(self.grouped[other].days.iter().copied());
                updated.days = canonical_days(&days);
                self.grouped.remove(other);
                self.keys.remove(other);
                if other < index {
                    index -= 1;
                }
            }
            self.keys[index] = new_key;
        }
        self.grouped[index] = updated;

        log::debug!("Applied {:?} edit to grouped entry {}", kind, index);
        Ok(kind)
    }

    /// Rebuild the grouped view from the flat entries, discarding any
    /// cosmetic divergence.
    pub fn regroup(&mut self) {
        self.grouped = derive_grouped(&self.flat);
        self.keys = self.grouped.iter().map(ScheduleEntry::group_key).collect();
    }

    /// Flat entries occurring on `day`.
    pub fn entries_on(&self, day: DayLabel) -> Vec<&ScheduleEntry> {
        self.flat.iter().filter(|entry| entry.occurs_on(day)).collect()
    }

    /// Consume the state, returning `(flat, grouped)`.
    pub fn into_parts(self) -> (Vec<ScheduleEntry>, Vec<ScheduleEntry>) {
        (self.flat, self.grouped)
    }
}
