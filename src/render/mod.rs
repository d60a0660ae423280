//! Rendering support for the weekly calendar view.
//!
//! - [`overlap`]: column assignment for concurrent events
//! - [`grid`]: time-slot rows and event boxes
//! - [`palette`]: stable per-course colours

pub mod grid;
pub mod overlap;
pub mod palette;

pub use grid::{entries_for_day, event_box, time_slots, week_layout, EventBox};
pub use overlap::{assign_columns, layout_day, layout_entries, ColumnSlot, Interval, LayoutRecord};
pub use palette::{palette_color, palette_index, PALETTE};
