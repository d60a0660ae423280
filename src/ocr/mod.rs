//! Input boundary: text blocks from the OCR collaborator.
//!
//! The collaborator runs text recognition over the uploaded image and answers
//! with JSON of the form
//!
//! ```text
//! { "schedule": [ { "text": "...", "position": { "x": .., "y": .., "width": .., "height": .. } } ],
//!   "warning": "optional message" }
//! ```
//!
//! or `{ "error": "message" }` when recognition failed. Block order is not
//! guaranteed to follow reading order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Position;

/// One positioned text fragment produced by OCR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrBlock {
    /// Recognized text, lines separated by `\n`
    pub text: String,
    /// Bounding box in image space
    pub position: Position,
}

impl OcrBlock {
    /// Create a block from text and position.
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// A successful OCR collaborator response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrResponse {
    /// Recognized blocks; may be empty
    #[serde(default)]
    pub schedule: Vec<OcrBlock>,
    /// Non-fatal message, e.g. "No text could be extracted from the image"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    schedule: Vec<OcrBlock>,
    #[serde(default)]
    warning: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a collaborator response.
///
/// An `error` field becomes [`Error::Ocr`]; a `warning` is logged and kept.
///
/// # Examples
///
/// ```
/// use calendify::ocr::parse_response;
///
/// let json = r#"{"schedule": [{"text": "CS 400\n9:30AM-10:45AM",
///                "position": {"x": 100, "y": 40, "width": 90, "height": 50}}]}"#;
/// let response = parse_response(json).unwrap();
/// assert_eq!(response.schedule.len(), 1);
///
/// assert!(parse_response(r#"{"error": "File not found"}"#).is_err());
/// ```
pub fn parse_response(json: &str) -> Result<OcrResponse> {
    let raw: RawResponse = serde_json::from_str(json)?;

    if let Some(message) = raw.error {
        return Err(Error::Ocr(message));
    }
    if let Some(ref warning) = raw.warning {
        log::warn!("OCR collaborator warning: {}", warning);
    }

    log::debug!("Decoded {} OCR blocks", raw.schedule.len());

    Ok(OcrResponse {
        schedule: raw.schedule,
        warning: raw.warning,
    })
}

/// Read and decode a collaborator response stored on disk.
pub fn read_response(path: impl AsRef<Path>) -> Result<OcrResponse> {
    let json = std::fs::read_to_string(path.as_ref())?;
    parse_response(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_with_empty_schedule() {
        let response = parse_response(
            r#"{"warning": "No text could be extracted from the image", "schedule": []}"#,
        )
        .unwrap();
        assert!(response.schedule.is_empty());
        assert_eq!(
            response.warning.as_deref(),
            Some("No text could be extracted from the image")
        );
    }

    #[test]
    fn test_error_field() {
        let err = parse_response(r#"{"error": "Image processing failed: too small"}"#).unwrap_err();
        assert!(matches!(err, Error::Ocr(ref msg) if msg.contains("too small")));
    }

    #[test]
    fn test_missing_schedule_is_empty() {
        assert!(parse_response("{}").unwrap().schedule.is_empty());
    }

    #[test]
    fn test_degenerate_box_accepted() {
        let response = parse_response(
            r#"{"schedule": [{"text": "A\nB", "position": {"x": 5.5, "y": 0, "width": 0, "height": 0}}]}"#,
        )
        .unwrap();
        assert_eq!(response.schedule[0].position.x, 5.5);
        assert!(response.schedule[0].position.is_degenerate());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_response("[1, 2"), Err(Error::Json(_))));
    }
}
