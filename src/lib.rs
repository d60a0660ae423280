// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::needless_range_loop)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::should_implement_trait)]

//! # Calendify
//!
//! Turns a screenshot of a weekly class timetable into a structured schedule
//! and a recurring calendar file.
//!
//! ## Core Features
//!
//! - **Reconstruction**: OCR text blocks with positions → flat schedule entries,
//!   one weekday per entry, using gap-based column inference
//! - **Normalization**: `9:55AM`-style times → canonical `HH:MM`; course, section
//!   and location split out of each block
//! - **Synchronized views**: a flat list and a grouped list (one row per course and
//!   time slot) kept consistent across edits
//! - **Calendar layout**: side-by-side columns for overlapping classes, per-course
//!   colours, week-grid geometry
//! - **Export**: RFC 5545 iCalendar with one weekly `RRULE` per meeting day
//!
//! ## Quick Start
//!
//! ```ignore
//! use calendify::config::EngineConfig;
//! use calendify::export::export_calendar;
//! use calendify::grouping::ScheduleState;
//! use calendify::ocr::read_response;
//! use calendify::pipeline::reconstruct;
//!
//! # fn main() -> calendify::Result<()> {
//! let response = read_response("blocks.json")?;
//! let result = reconstruct(&response.schedule);
//! let state = ScheduleState::from_entries(result.entries);
//!
//! let start = "2025-09-03".parse().unwrap();
//! let end = "2025-12-10".parse().unwrap();
//! let ics = export_calendar(state.grouped(), start, end, "America/Chicago",
//!     &EngineConfig::default().export)?;
//! print!("{}", ics);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Core data model
pub mod geometry;
pub mod model;

// OCR collaborator boundary
pub mod ocr;

// Text normalization
pub mod text;

// Column inference and day assignment
pub mod layout;

// Blocks → flat entries
pub mod pipeline;

// Flat/grouped synchronization
pub mod grouping;

// Calendar view layout
pub mod render;

// iCalendar export
pub mod export;

// Re-exports
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use grouping::ScheduleState;
pub use model::{DayLabel, ScheduleEntry, Weekday};
pub use ocr::OcrBlock;
pub use pipeline::{reconstruct, Reconstruction};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Total order on `f32` for sorting: NaN is equal to NaN and greater than
    /// every number.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_safe_float_cmp_normal() {
            assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
            assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(1.5, 1.5), Ordering::Equal);
        }

        #[test]
        fn test_safe_float_cmp_nan() {
            assert_eq!(safe_float_cmp(f32::NAN, f32::NAN), Ordering::Equal);
            assert_eq!(safe_float_cmp(f32::NAN, 0.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(0.0, f32::NAN), Ordering::Less);
        }

        #[test]
        fn test_safe_float_cmp_infinity() {
            assert_eq!(safe_float_cmp(f32::NEG_INFINITY, -1e30), Ordering::Less);
            assert_eq!(safe_float_cmp(f32::INFINITY, f32::INFINITY), Ordering::Equal);
        }
    }
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
