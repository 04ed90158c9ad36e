//! Per-cycle incremental motion limiter.
//!
//! [`step_towards_target`] is called once per control tick with the measured
//! and the desired joint configurations. Each joint's motion is gated
//! independently, and an invalidated pivot move gets a closed-form corrected
//! angle instead of a flat hold, so the arm keeps creeping toward the target
//! while staying collision-free.

use crate::core::math::AXIS_EPSILON;
use crate::core::types::{RobotGeometry, StemState};
use crate::limiter::validity::{is_valid_state, stem_points};

/// Outcome of one limiter cycle.
///
/// `command` is the configuration safe to command this tick. The flags
/// report which per-joint moves were individually valid and whether the
/// pivot hold was replaced by a corrected angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    /// Configuration to command this cycle.
    pub command: StemState,

    /// Moving only the pivot to its target was collision-free.
    pub pivot_ok: bool,

    /// Moving only the wrist to its target was collision-free.
    pub wrist_ok: bool,

    /// Moving only the telescope to its target was collision-free.
    pub telescope_ok: bool,

    /// The pivot was replaced by a closed-form corrected angle that itself
    /// passed the validity check. `pivot_ok == false` with this unset means
    /// the pivot held at current: the target cannot be satisfied this cycle.
    pub pivot_corrected: bool,

    /// The corrective angle's asin argument left [-1, 1] and the commanded
    /// correction is the clamped boundary angle.
    pub correction_clamped: bool,
}

impl StepResult {
    /// All three joint moves were individually valid.
    pub fn all_valid(&self) -> bool {
        self.pivot_ok && self.wrist_ok && self.telescope_ok
    }
}

/// Compute the largest safe step toward `target` for this control cycle.
///
/// Each joint is tested independently: a candidate state moves only that
/// joint to its target while holding the other two at `current`. Joints
/// whose candidate is valid take their target value; invalid wrist and
/// telescope moves hold at current. An invalid pivot move instead receives
/// a corrected angle: the smallest pivot raise that lifts the umbrella's
/// far corner back to the chassis top, found in closed form from the
/// candidate's penetration depth. The corrected angle is re-validated with
/// the wrist and telescope held at current, and the pivot falls back to a
/// plain hold when even the correction collides.
///
/// Single-shot, no iteration: the caller applies the returned command and
/// calls again next tick with fresh state, which retries naturally.
///
/// # Example
/// ```
/// use raksha_stem::{step_towards_target, Point2D, Rect2D, RobotGeometry, StemState};
///
/// let geometry = RobotGeometry::new(
///     Rect2D::new(0.0, 0.0, 0.6, 0.3),
///     Point2D::new(0.3, 0.3),
///     0.5,
///     0.0,
/// );
/// let current = StemState::new(1.57, 1.57, 0.5);
/// let target = StemState::new(0.0, 1.57, 0.5);
///
/// let step = step_towards_target(&current, &target, &geometry);
/// assert!(!step.pivot_ok);
/// // Pivot gets a corrected angle rather than a flat hold, and the
/// // resulting command is itself collision-free.
/// assert!(step.pivot_corrected);
/// assert!(raksha_stem::is_valid_state(&step.command, &geometry));
/// ```
pub fn step_towards_target(
    current: &StemState,
    target: &StemState,
    geometry: &RobotGeometry,
) -> StepResult {
    let pivot_candidate =
        StemState::new(target.pivot_rads, current.wrist_rads, current.telescope_m);
    let wrist_candidate =
        StemState::new(current.pivot_rads, target.wrist_rads, current.telescope_m);
    let telescope_candidate =
        StemState::new(current.pivot_rads, current.wrist_rads, target.telescope_m);

    let pivot_ok = is_valid_state(&pivot_candidate, geometry);
    let wrist_ok = is_valid_state(&wrist_candidate, geometry);
    let telescope_ok = is_valid_state(&telescope_candidate, geometry);

    let mut pivot_rads = if pivot_ok {
        target.pivot_rads
    } else {
        current.pivot_rads
    };
    let wrist_rads = if wrist_ok {
        target.wrist_rads
    } else {
        current.wrist_rads
    };
    let telescope_m = if telescope_ok {
        target.telescope_m
    } else {
        current.telescope_m
    };

    let mut pivot_corrected = false;
    let mut correction_clamped = false;

    if !pivot_ok {
        if let Some(correction) = correct_pivot(&pivot_candidate, geometry) {
            // The closed form only covers umbrella penetration below the
            // chassis top; a candidate invalidated by the telescope segment
            // yields an angle that can still collide. Re-validate before
            // commanding it.
            let corrected =
                StemState::new(correction.pivot_rads, current.wrist_rads, current.telescope_m);
            if is_valid_state(&corrected, geometry) {
                pivot_rads = correction.pivot_rads;
                pivot_corrected = true;
                correction_clamped = correction.clamped;
            } else {
                log::warn!(
                    "corrected pivot {:.3} rad still collides, holding pivot at {:.3} rad",
                    correction.pivot_rads,
                    current.pivot_rads
                );
            }
        }
    }

    StepResult {
        command: StemState::new(pivot_rads, wrist_rads, telescope_m),
        pivot_ok,
        wrist_ok,
        telescope_ok,
        pivot_corrected,
        correction_clamped,
    }
}

struct PivotCorrection {
    pivot_rads: f32,
    clamped: bool,
}

/// Closed-form corrective pivot angle for an invalidated pivot move.
///
/// The candidate's umbrella corner penetrates the chassis band by
/// `|wrist_end.y - top|`; raising the wrist axle by that much puts the
/// corner back at the top edge. The pivot angle achieving that height is
/// `asin((telescope * sin(candidate_pivot) + penetration) / telescope)`.
///
/// The asin argument is clamped to [-1, 1]: outside that range no pivot
/// angle can reach the required clearance this cycle, so the limiter
/// commands the boundary angle and reports the clamp. Returns `None` when
/// the telescope is fully retracted, where no pivot angle changes the
/// wrist axle height and the pivot holds at current instead.
///
/// The closed form models one failure mode only, the umbrella corner
/// dipping below the chassis top. When the candidate was invalidated by
/// the telescope segment, `wrist_end.y` sits above the top and the
/// penetration term measures clearance instead; the caller re-validates
/// the returned angle and discards it when it still collides.
fn correct_pivot(candidate: &StemState, geometry: &RobotGeometry) -> Option<PivotCorrection> {
    if candidate.telescope_m.abs() < AXIS_EPSILON {
        log::warn!(
            "pivot correction impossible with retracted telescope ({} m), holding pivot",
            candidate.telescope_m
        );
        return None;
    }

    let points = stem_points(candidate, geometry);
    let penetration = (points.wrist_end.y - geometry.drive_base.top()).abs();
    let min_clearance = candidate.telescope_m * candidate.pivot_rads.sin() + penetration;

    let ratio = min_clearance / candidate.telescope_m;
    let clamped = !(-1.0..=1.0).contains(&ratio);
    if clamped {
        log::warn!(
            "corrective pivot out of reach (asin argument {:.3}), clamping to boundary angle",
            ratio
        );
    }

    Some(PivotCorrection {
        pivot_rads: ratio.clamp(-1.0, 1.0).asin(),
        clamped,
    })
}
