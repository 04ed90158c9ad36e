//! Step Limiter Scenario Tests
//!
//! End-to-end scenarios for the collision limiter, exercised through the
//! public API the control loop uses: a geometry snapshot plus current and
//! target joint configurations, once per simulated cycle.
//!
//! Reference geometry (side view, meters):
//! - drive base 0.6 wide, 0.3 tall, origin at its bottom-left corner
//! - pivot axle centered on top of the chassis at (0.3, 0.3)
//! - telescope and umbrella reach 0.5 each
//!
//! Run with: `cargo test --test step_limiter`

use approx::assert_relative_eq;
use raksha_stem::{
    is_valid_state, step_towards_target, Point2D, Rect2D, RobotGeometry, StemState,
};
use std::f32::consts::FRAC_PI_2;

/// Reference geometry used by most scenarios.
fn reference_geometry() -> RobotGeometry {
    RobotGeometry::new(
        Rect2D::new(0.0, 0.0, 0.6, 0.3),
        Point2D::new(0.3, 0.3),
        0.5,
        0.0,
    )
}

/// Arm raised straight up, a known-good resting configuration.
fn arm_straight_up() -> StemState {
    StemState::new(1.57, 1.57, 0.5)
}

// ============================================================================
// Validity
// ============================================================================

#[test]
fn straight_up_configuration_is_valid() {
    assert!(is_valid_state(&arm_straight_up(), &reference_geometry()));
}

#[test]
fn horizontal_sweep_with_hanging_umbrella_is_invalid() {
    // Pivot at horizontal with the wrist still vertical points the umbrella
    // straight down through the chassis band and the floor.
    let swept = StemState::new(0.0, 1.57, 0.5);
    assert!(!is_valid_state(&swept, &reference_geometry()));
}

#[test]
fn exact_right_angle_pivot_does_not_panic_or_nan() {
    // Vertical telescope segment has no line-intercept form; the checker
    // must branch instead of dividing.
    let geometry = reference_geometry();
    assert!(is_valid_state(
        &StemState::new(FRAC_PI_2, FRAC_PI_2, 0.5),
        &geometry
    ));
    assert!(!is_valid_state(
        &StemState::new(-FRAC_PI_2, -FRAC_PI_2, 0.2),
        &geometry
    ));
}

// ============================================================================
// Step limiter scenarios
// ============================================================================

#[test]
fn resting_at_a_valid_state_is_a_fixed_point() {
    let state = arm_straight_up();
    let step = step_towards_target(&state, &state, &reference_geometry());
    assert_eq!(step.command, state);
    assert!(step.all_valid());
    assert!(!step.pivot_corrected);
    assert!(!step.correction_clamped);
}

#[test]
fn safe_target_passes_through_unchanged() {
    // Telescope retraction with pivot and wrist already valid: the move is
    // safe, so the target is commanded verbatim.
    let current = arm_straight_up();
    let target = StemState::new(1.57, 1.57, 0.1);
    let step = step_towards_target(&current, &target, &reference_geometry());

    assert!(step.telescope_ok);
    assert!(step.all_valid());
    assert_eq!(step.command, target);
}

#[test]
fn blocked_pivot_sweep_gets_corrected_angle() {
    // Sweeping the pivot from vertical to horizontal drives the hanging
    // umbrella into the chassis. The limiter must neither pass the target
    // through nor freeze the pivot: it commands the closed-form corrected
    // angle partway down.
    let geometry = reference_geometry();
    let current = arm_straight_up();
    let target = StemState::new(0.0, 1.57, 0.5);

    let step = step_towards_target(&current, &target, &geometry);

    assert!(!step.pivot_ok);
    assert!(step.wrist_ok);
    assert!(step.telescope_ok);
    assert!(step.pivot_corrected);
    assert!(step.command.pivot_rads > 0.0);
    assert!(step.command.pivot_rads < FRAC_PI_2);
    // Wrist and telescope untouched.
    assert_relative_eq!(step.command.wrist_rads, 1.57);
    assert_relative_eq!(step.command.telescope_m, 0.5);
    // The corrected configuration re-validates.
    assert!(is_valid_state(&step.command, &geometry));
}

#[test]
fn feedback_cycles_reach_target_safely() {
    // Feed each cycle's command back as the next cycle's current state, the
    // way the control loop does. Every intermediate command must stay valid
    // and the wrist/telescope must reach their targets.
    let geometry = reference_geometry();
    let mut current = arm_straight_up();
    let target = StemState::new(0.9, 0.9, 0.3);

    for _ in 0..50 {
        let step = step_towards_target(&current, &target, &geometry);
        assert!(is_valid_state(&step.command, &geometry));
        current = step.command;
    }

    assert_relative_eq!(current.wrist_rads, target.wrist_rads);
    assert_relative_eq!(current.telescope_m, target.telescope_m);
}

#[test]
fn floor_invariant_holds_for_every_command() {
    // The command must never put the umbrella below the floor or through
    // the chassis, whatever the target asks for. Covers forward-bent
    // configurations and backward-bent wrists (wrist far from pivot), where
    // pivot candidates get invalidated by the telescope segment rather than
    // umbrella penetration.
    let geometry = reference_geometry();
    let cases = [
        (StemState::new(1.2, 1.2, 0.4), StemState::new(0.0, 1.2, 0.4)),
        (StemState::new(1.2, 1.2, 0.4), StemState::new(1.2, 3.0, 0.4)),
        (StemState::new(1.2, 1.2, 0.4), StemState::new(-0.5, 1.2, 0.4)),
        (StemState::new(1.2, 1.2, 0.4), StemState::new(1.2, 1.2, 2.0)),
        (StemState::new(1.2, 1.2, 0.4), StemState::new(0.2, 2.0, 1.0)),
        (StemState::new(0.0, -3.0, 0.2), StemState::new(-1.6, -3.0, 0.2)),
        (StemState::new(0.0, -3.0, 0.2), StemState::new(-1.6, -3.0, 0.05)),
        (
            StemState::new(0.0, -3.0, 0.05),
            StemState::new(-1.6, -3.0, 0.05),
        ),
    ];
    for (current, target) in cases {
        assert!(
            is_valid_state(&current, &geometry),
            "test premise broken, current state invalid: {:?}",
            current
        );
        let step = step_towards_target(&current, &target, &geometry);
        assert!(
            is_valid_state(&step.command, &geometry),
            "command violated collision invariants for target {:?}",
            target
        );
    }
}

#[test]
fn telescope_blocked_pivot_holds_instead_of_miscorrecting() {
    // With the wrist folded backward and the telescope lying along the
    // chassis top, a downward pivot target fails on the telescope segment.
    // The closed-form correction does not apply there; the limiter must
    // hold the pivot rather than command a partially-lowered angle that
    // sweeps the umbrella into the chassis band.
    let geometry = reference_geometry();
    let current = StemState::new(0.0, -3.0, 0.2);
    let target = StemState::new(-1.6, -3.0, 0.2);
    assert!(is_valid_state(&current, &geometry));

    let step = step_towards_target(&current, &target, &geometry);
    assert!(!step.pivot_ok);
    assert!(!step.pivot_corrected);
    assert_relative_eq!(step.command.pivot_rads, current.pivot_rads);
    assert!(is_valid_state(&step.command, &geometry));
}

#[test]
fn unreachable_correction_is_clamped_and_reported() {
    // An umbrella longer than the telescope can compensate for: the
    // corrective asin argument exceeds 1 and the limiter clamps to the
    // boundary angle instead of crashing.
    let geometry = RobotGeometry::new(
        Rect2D::new(0.0, 0.0, 0.6, 0.3),
        Point2D::new(0.3, 0.3),
        1.0,
        0.0,
    );
    let current = StemState::new(FRAC_PI_2, FRAC_PI_2, 0.5);
    let target = StemState::new(0.0, FRAC_PI_2, 0.5);

    let step = step_towards_target(&current, &target, &geometry);

    assert!(!step.pivot_ok);
    assert!(step.correction_clamped);
    assert_relative_eq!(step.command.pivot_rads, FRAC_PI_2, epsilon = 1e-6);
    assert!(is_valid_state(&step.command, &geometry));
}

#[test]
fn independent_joint_gating_only_freezes_the_offender() {
    // Wrist target dives into the floor while the telescope target is fine:
    // the wrist holds, the telescope still moves.
    let geometry = reference_geometry();
    let current = StemState::new(0.35, 0.35, 0.5);
    assert!(is_valid_state(&current, &geometry));

    let target = StemState::new(0.35, 0.35 + FRAC_PI_2, 0.3);
    let step = step_towards_target(&current, &target, &geometry);

    assert!(step.pivot_ok);
    assert!(!step.wrist_ok);
    assert!(step.telescope_ok);
    assert_relative_eq!(step.command.wrist_rads, current.wrist_rads);
    assert_relative_eq!(step.command.telescope_m, target.telescope_m);
}
