//! Text normalization for OCR output.
//!
//! - [`block`]: split a block into course label, time range and location
//! - [`time`]: canonical 24-hour clock times

pub mod block;
pub mod time;

pub use block::{parse_block, ParsedBlock};
pub use time::{format_12_hour, minutes_of_day, normalize_time};
