//! Planar geometry types for the side-view collision model.

use serde::{Deserialize, Serialize};

/// A 2D point in the robot's side-view frame.
///
/// Origin is the bottom-left corner of the drive base, x rightward
/// (out the umbrella side), y upward. Units are meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate in meters
    pub x: f32,
    /// Y coordinate in meters
    pub y: f32,
}

impl Point2D {
    /// Create a new point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum, producing a new point.
    ///
    /// Pure: neither operand is mutated, so the same point can appear on
    /// both sides without aliasing surprises.
    #[inline]
    pub fn add(&self, other: &Point2D) -> Point2D {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Axis-aligned rectangle in the side-view frame.
///
/// Stored as origin corner plus extents; the side coordinates are always
/// derived from the four primary fields, never held separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect2D {
    /// X of the bottom-left corner in meters
    pub x: f32,
    /// Y of the bottom-left corner in meters
    pub y: f32,
    /// Extent along x in meters, >= 0
    pub width: f32,
    /// Extent along y in meters, >= 0
    pub height: f32,
}

impl Rect2D {
    /// Create a new rectangle.
    ///
    /// `width` and `height` must be non-negative; config loading rejects
    /// negative extents before they reach this type.
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the left side.
    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    /// X coordinate of the right side.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom side.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y
    }

    /// Y coordinate of the top side.
    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Whether `x` lies within the horizontal span `[left, right]`.
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.left() && x <= self.right()
    }
}
