//! Grouped view of schedule entries and its synchronization with the flat
//! per-day entries.
//!
//! The flat list (one entry per weekday occurrence) feeds rendering and
//! export; the grouped list (one entry per course and time range, carrying a
//! day set) is what the user edits. [`derive_grouped`] builds the grouped
//! view, [`apply_edit`] carries an edit back to the flat list, and
//! [`ScheduleState`] owns both so edits apply one at a time.

pub mod edit;
pub mod merge;
pub mod state;

pub use edit::{apply_edit, canonical_days, classify_edit, EditKind};
pub use merge::{derive_grouped, expand_grouped};
pub use state::ScheduleState;
