//! Joint configuration and robot geometry types.

use super::{Point2D, Rect2D};
use serde::{Deserialize, Serialize};

/// A configuration of the three controllable stem joints.
///
/// Can describe either a measured state or a commanded candidate. Carries no
/// intrinsic bounds; whether a configuration is collision-free is decided by
/// [`crate::limiter::is_valid_state`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StemState {
    /// Pivot joint angle in radians. 0 is horizontal toward the umbrella
    /// side, positive raises the stem.
    pub pivot_rads: f32,
    /// Wrist joint angle in radians, measured in the same frame as the pivot.
    pub wrist_rads: f32,
    /// Telescope extension in meters, from pivot axle to wrist axle.
    pub telescope_m: f32,
}

impl StemState {
    /// Create a new joint configuration.
    #[inline]
    pub fn new(pivot_rads: f32, wrist_rads: f32, telescope_m: f32) -> Self {
        Self {
            pivot_rads,
            wrist_rads,
            telescope_m,
        }
    }
}

/// Static calibrated geometry of the robot, viewed from the side.
///
/// Origin is the bottom-left corner of the drive base with the umbrella
/// extending out the right side. The caller owns this snapshot and keeps it
/// current every control cycle; the limiter only reads it for the duration
/// of a call. Per-cycle joint values live in [`StemState`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobotGeometry {
    /// Footprint of the drive-base chassis in the side-view frame.
    pub drive_base: Rect2D,
    /// Location of the pivot axle relative to the drive-base origin.
    pub pivot_axle: Point2D,
    /// Reach of the umbrella from the wrist axle, in meters.
    pub umbrella_length: f32,
    /// Thickness of the umbrella bounding box beyond its underside, in meters.
    pub umbrella_height: f32,
}

impl RobotGeometry {
    /// Create a new geometry snapshot.
    pub fn new(
        drive_base: Rect2D,
        pivot_axle: Point2D,
        umbrella_length: f32,
        umbrella_height: f32,
    ) -> Self {
        Self {
            drive_base,
            pivot_axle,
            umbrella_length,
            umbrella_height,
        }
    }
}
