//! Data model shared by every stage of the engine.

pub mod entry;
pub mod weekday;

pub use entry::{GroupKey, ScheduleEntry};
pub use weekday::{format_day_list, parse_day_list, DayLabel, Weekday};
