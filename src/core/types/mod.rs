//! Core data types for the collision limiter.
//!
//! - [`Point2D`]: 2D point in the side-view frame, meters
//! - [`Rect2D`]: axis-aligned rectangle (drive-base footprint)
//! - [`StemState`]: pivot/wrist/telescope joint configuration
//! - [`RobotGeometry`]: static calibrated geometry snapshot

mod geometry;
mod stem;

pub use geometry::{Point2D, Rect2D};
pub use stem::{RobotGeometry, StemState};
