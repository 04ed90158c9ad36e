//! Collision-validity check for a single joint configuration.
//!
//! Models the stem as two rigid segments in the side-view plane and answers
//! whether either one strikes the drive-base chassis or the floor:
//!
//! ```text
//!                      wrist axle
//!                          o────────────o wrist end (umbrella underside)
//!                         /              `o umbrella top corner
//!                        /  telescope
//!                       /
//!          ┌───────────o──────┐  ← pivot axle on the chassis
//!          │     drive base   │
//!   ───────┴──────────────────┴───────  floor (y = 0)
//! ```

use crate::core::math::{intersect_at_y, AXIS_EPSILON};
use crate::core::types::{Point2D, Rect2D, RobotGeometry, StemState};

/// Key points of the stem for one joint configuration, in the side-view
/// frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StemPoints {
    /// Wrist axle: far end of the telescope segment.
    pub wrist_axle: Point2D,
    /// Far bottom corner of the umbrella.
    pub wrist_end: Point2D,
    /// Far top corner of the umbrella bounding box.
    pub umbrella_top: Point2D,
}

/// Forward kinematics for the stem's collision-relevant points.
pub(crate) fn stem_points(state: &StemState, geometry: &RobotGeometry) -> StemPoints {
    let (sin_p, cos_p) = state.pivot_rads.sin_cos();
    let wrist_axle = geometry.pivot_axle.add(&Point2D::new(
        state.telescope_m * cos_p,
        state.telescope_m * sin_p,
    ));

    // The wrist angle is measured in the same frame as the pivot, so the
    // umbrella's own angle relative to the telescope is the difference.
    let bend = state.wrist_rads - state.pivot_rads;
    let (sin_b, cos_b) = bend.sin_cos();

    let wrist_end = wrist_axle.add(&Point2D::new(
        geometry.umbrella_length * cos_b,
        -geometry.umbrella_length * sin_b,
    ));
    let umbrella_top = wrist_end.add(&Point2D::new(
        geometry.umbrella_height * cos_b,
        geometry.umbrella_height * sin_b,
    ));

    StemPoints {
        wrist_axle,
        wrist_end,
        umbrella_top,
    }
}

/// Whether the segment from `inner` to `outer` stays clear of the chassis
/// rectangle.
///
/// A segment is only a collision risk when its outer endpoint reaches down
/// into the chassis height band (`outer.y <= rect.top()`); a segment held
/// entirely above the chassis cannot hit it no matter where its supporting
/// line lands. Risky segments collide when the supporting line's intercept
/// at the rectangle's top or bottom edge falls inside `[left, right]`.
///
/// Vertical segments have no intercept form and are tested directly against
/// the horizontal span. Horizontal supporting lines never cross a distinct
/// edge height and are treated as clear.
fn segment_clears_chassis(inner: Point2D, outer: Point2D, rect: &Rect2D) -> bool {
    if outer.y > rect.top() {
        return true;
    }

    if (outer.x - inner.x).abs() < AXIS_EPSILON {
        // Vertical segment: the supporting line is x = inner.x.
        return !rect.spans_x(inner.x);
    }

    let crosses_within = |edge_y: f32| {
        intersect_at_y(inner, outer, edge_y)
            .map(|x| rect.spans_x(x))
            .unwrap_or(false)
    };

    !(crosses_within(rect.top()) || crosses_within(rect.bottom()))
}

/// Whether `state` produces no collision between the stem/umbrella and the
/// drive base or the floor.
///
/// Checks, in order, returning `false` on the first failure:
/// 1. Floor: both umbrella corners must be at or above y = 0.
/// 2. Umbrella segment clear of the chassis rectangle.
/// 3. Telescope segment clear of the chassis rectangle.
///
/// # Example
/// ```
/// use raksha_stem::{is_valid_state, Point2D, Rect2D, RobotGeometry, StemState};
///
/// let geometry = RobotGeometry::new(
///     Rect2D::new(0.0, 0.0, 0.6, 0.3),
///     Point2D::new(0.3, 0.3),
///     0.5,
///     0.0,
/// );
/// // Arm straight up: clear of everything.
/// assert!(is_valid_state(&StemState::new(1.57, 1.57, 0.5), &geometry));
/// // Arm swept to horizontal with the umbrella hanging down: strikes the floor.
/// assert!(!is_valid_state(&StemState::new(0.0, 1.57, 0.5), &geometry));
/// ```
pub fn is_valid_state(state: &StemState, geometry: &RobotGeometry) -> bool {
    let points = stem_points(state, geometry);

    if points.wrist_end.y < 0.0 || points.umbrella_top.y < 0.0 {
        return false;
    }

    if !segment_clears_chassis(points.wrist_axle, points.wrist_end, &geometry.drive_base) {
        return false;
    }

    segment_clears_chassis(geometry.pivot_axle, points.wrist_axle, &geometry.drive_base)
}
