//! Block normalization: raw OCR text to course label and time range.
//!
//! A schedule cell reads, top to bottom:
//!
//! ```text
//! STAT 453 (LEC 001)      <- course label
//! 8:00AM-9:15AM           <- time range
//! SOC SCI 5208            <- optional location
//! ```
//!
//! OCR noise is expected. Blocks with fewer than two non-empty lines are
//! dropped; a time line that does not match leaves both times empty.

use lazy_static::lazy_static;
use regex::Regex;

use crate::text::time::normalize_time;

lazy_static! {
    /// Two clock tokens separated by a hyphen or en-dash
    static ref RE_TIME_RANGE: Regex = Regex::new(
        r"([0-9]{1,2}:[0-9]{2}(?:\s?[AaPp][Mm])?)\s*[-\u{2013}]\s*([0-9]{1,2}:[0-9]{2}(?:\s?[AaPp][Mm])?)"
    )
    .unwrap();

    /// Parenthesized section designator, e.g. "(LEC 001)"
    static ref RE_SECTION: Regex = Regex::new(r"\(([^)]*)\)").unwrap();
}

/// Fields recovered from one OCR block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedBlock {
    /// Cleaned course label
    pub course: String,
    /// Section designator, empty if the label has none
    pub section: String,
    /// Normalized start time or empty
    pub start_time: String,
    /// Normalized end time or empty
    pub end_time: String,
    /// Third line of the block, empty if absent
    pub location: String,
}

/// Parse the text of one OCR block.
///
/// Returns `None` when the block has fewer than two non-empty lines.
///
/// # Examples
///
/// ```
/// use calendify::text::block::parse_block;
///
/// let parsed = parse_block("STAT 453 (LEC 001)\n8:00AM-9:15AM").unwrap();
/// assert_eq!(parsed.course, "STAT 453 (LEC 001)");
/// assert_eq!(parsed.section, "LEC 001");
/// assert_eq!(parsed.start_time, "08:00");
/// assert_eq!(parsed.end_time, "09:15");
///
/// assert!(parse_block("just one line").is_none());
/// ```
pub fn parse_block(text: &str) -> Option<ParsedBlock> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return None;
    }

    let course = clean_course_label(lines[0]);
    let section = extract_section(&course);
    let (start_time, end_time) = parse_time_range(lines[1]).unwrap_or_default();
    let location = lines.get(2).map(|line| line.to_string()).unwrap_or_default();

    Some(ParsedBlock {
        course,
        section,
        start_time,
        end_time,
        location,
    })
}

/// Strip leading punctuation and anything after the first closing parenthesis.
///
/// # Examples
///
/// ```
/// use calendify::text::block::clean_course_label;
///
/// assert_eq!(clean_course_label("| CS 577 (LEC 002) ]'"), "CS 577 (LEC 002)");
/// assert_eq!(clean_course_label("~MATH 340"), "MATH 340");
/// ```
pub fn clean_course_label(line: &str) -> String {
    let trimmed = line.trim_start_matches(|c: char| !c.is_alphanumeric());
    let label = match trimmed.find(')') {
        Some(close) => &trimmed[..=close],
        None => trimmed,
    };
    label.trim().to_string()
}

/// Section designator inside the first pair of parentheses, if any.
pub fn extract_section(course: &str) -> String {
    RE_SECTION
        .captures(course)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

/// Find a time range in a line and normalize both ends.
///
/// Returns `None` when the line has no `start-end` pair.
pub fn parse_time_range(line: &str) -> Option<(String, String)> {
    let caps = RE_TIME_RANGE.captures(line)?;
    Some((normalize_time(&caps[1]), normalize_time(&caps[2])))
}
