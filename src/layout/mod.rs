//! Layout analysis for timetable images.
//!
//! This module recovers the weekday column structure of a scanned schedule
//! from OCR block positions:
//! - Gap-based column inference (x-coordinates → day bands)
//! - Day assignment (x-coordinate → weekday)

pub mod day_assigner;
pub mod day_bands;

// Re-export main types
pub use day_assigner::assign_day;
pub use day_bands::{infer_bands, infer_day_bands, DayBand, WEEKDAY_COLUMNS};
