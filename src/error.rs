//! Error types for the schedule engine.
//!
//! Reconstruction itself never fails: unreadable blocks, unassignable
//! positions and malformed times degrade to fewer or blanker entries. The
//! variants here cover the caller-facing boundaries only (collaborator JSON,
//! user-typed input, edit indices, export parameters and file I/O).

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types surfaced to callers of the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A time string is not a 24-hour `HH:MM` value
    #[error("Invalid time: '{0}'")]
    InvalidTime(String),

    /// A day token could not be parsed
    #[error("Invalid day: '{0}'")]
    InvalidDay(String),

    /// The export time zone is not a known IANA identifier
    #[error("Invalid time zone: '{0}'")]
    InvalidTimeZone(String),

    /// Semester end precedes semester start
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        /// Semester start date
        start: chrono::NaiveDate,
        /// Semester end date
        end: chrono::NaiveDate,
    },

    /// An edit referenced a grouped entry that does not exist
    #[error("Edit index {index} out of range for {len} grouped entries")]
    EditIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of grouped entries
        len: usize,
    },

    /// The OCR collaborator reported a failure
    #[error("OCR error: {0}")]
    Ocr(String),

    /// Configuration could not be applied
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
