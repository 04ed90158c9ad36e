//! Mathematical primitives for the side-view collision model.
//!
//! Line-intercept helper used by the chassis band check.

use crate::core::types::Point2D;

/// Below this delta a segment is treated as vertical (or horizontal)
/// for intercept purposes.
pub const AXIS_EPSILON: f32 = 1e-6;

/// X coordinate where the infinite line through `p1` and `p2` crosses the
/// horizontal line at `y`.
///
/// Returns `None` when the supporting line has no single crossing with a
/// distinct horizontal:
/// - vertical line (`p1.x == p2.x`): callers must test `x` against the
///   interval directly instead
/// - horizontal line (`p1.y == p2.y`): never crosses a different `y`
///
/// Never produces NaN or infinity.
///
/// # Example
/// ```
/// use raksha_stem::core::math::intersect_at_y;
/// use raksha_stem::core::types::Point2D;
///
/// let x = intersect_at_y(Point2D::new(0.0, 0.0), Point2D::new(2.0, 2.0), 1.0);
/// assert_eq!(x, Some(1.0));
/// ```
#[inline]
pub fn intersect_at_y(p1: Point2D, p2: Point2D, y: f32) -> Option<f32> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dx.abs() < AXIS_EPSILON || dy.abs() < AXIS_EPSILON {
        return None;
    }
    let slope = dy / dx;
    Some(p1.x + (y - p1.y) / slope)
}
