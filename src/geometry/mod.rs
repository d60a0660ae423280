//! Geometric primitives for OCR block positions.
//!
//! The OCR collaborator reports one axis-aligned bounding box per text
//! region, in image pixel space with the origin at the top-left corner.

use serde::{Deserialize, Serialize};

/// Bounding box of an OCR text block in image space.
///
/// Only `x` takes part in day-column inference; `width` and `height` may be
/// degenerate (zero or negative) without affecting reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate of the left edge
    pub x: f32,
    /// Y coordinate of the top edge
    pub y: f32,
    /// Width of the box
    pub width: f32,
    /// Height of the box
    pub height: f32,
}

impl Position {
    /// Create a new position from its left/top corner and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendify::geometry::Position;
    ///
    /// let pos = Position::new(100.0, 40.0, 120.0, 60.0);
    /// assert_eq!(pos.x, 100.0);
    /// assert_eq!(pos.right(), 220.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A zero-sized position at the given horizontal offset.
    pub fn at_x(x: f32) -> Self {
        Self::new(x, 0.0, 0.0, 0.0)
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when the box has no usable area.
    pub fn is_degenerate(&self) -> bool {
        self.width.is_nan() || self.height.is_nan() || self.width <= 0.0 || self.height <= 0.0
    }
}
