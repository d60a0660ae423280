//! Stable per-course colours for the calendar view.
//!
//! Presentation only: the colour never influences reconstruction, grouping
//! or export.

/// Colour classes, indexed by [`palette_index`].
pub const PALETTE: [&str; 15] = [
    "blue-600",
    "green-700",
    "red-800",
    "amber-600",
    "purple-600",
    "pink-600",
    "cyan-700",
    "indigo-700",
    "teal-700",
    "yellow-600",
    "gray-700",
    "lime-700",
    "orange-700",
    "fuchsia-700",
    "rose-700",
];

/// Palette slot for a course and section.
///
/// Hashes `"{course} {section}"` over UTF-16 code units with the
/// `c + ((h << 5) - h)` recurrence (shift in 32-bit arithmetic), then takes
/// the absolute value modulo the palette size. The same key always maps to
/// the same slot.
///
/// # Examples
///
/// ```
/// use calendify::render::{palette_index, PALETTE};
///
/// let a = palette_index("STAT 453 (LEC 001)", "LEC 001");
/// assert_eq!(a, palette_index("STAT 453 (LEC 001)", "LEC 001"));
/// assert!(a < PALETTE.len());
/// ```
pub fn palette_index(course: &str, section: &str) -> usize {
    let key = format!("{} {}", course, section);
    let mut hash: i64 = 0;
    for unit in key.encode_utf16() {
        let shifted = ((hash as i32) << 5) as i64;
        hash = i64::from(unit) + (shifted - hash);
    }
    (hash.unsigned_abs() % PALETTE.len() as u64) as usize
}

/// Colour class for a course and section.
pub fn palette_color(course: &str, section: &str) -> &'static str {
    PALETTE[palette_index(course, section)]
}
