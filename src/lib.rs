//! RakshaStem - Kinematic collision limiter for a jointed robot arm
//!
//! Prevents commanded motion of a three-joint arm (the "stem": pivot joint,
//! telescoping extension, wrist joint) from driving its end-effector (the
//! "umbrella") into the robot's own drive-base chassis or the floor. The
//! limiter runs once per control cycle, fast enough to sit inline in a
//! ~20 ms control loop, and is purely computational: no I/O, no threads,
//! no retained state.
//!
//! ## Quick Start
//!
//! ```rust
//! use raksha_stem::{
//!     is_valid_state, step_towards_target, Point2D, Rect2D, RobotGeometry, StemState,
//! };
//!
//! // Calibrated geometry, refreshed by the caller each cycle.
//! let geometry = RobotGeometry::new(
//!     Rect2D::new(0.0, 0.0, 0.6, 0.3), // chassis footprint, side view
//!     Point2D::new(0.3, 0.3),          // pivot axle on top of the chassis
//!     0.5,                             // umbrella reach from the wrist axle
//!     0.05,                            // umbrella bounding-box thickness
//! );
//!
//! let current = StemState::new(1.57, 1.57, 0.5); // arm straight up
//! let target = StemState::new(0.0, 1.57, 0.5);   // sweep toward horizontal
//!
//! let step = step_towards_target(&current, &target, &geometry);
//! assert!(is_valid_state(&step.command, &geometry));
//! ```
//!
//! ## Coordinate Frame
//!
//! Side view of the robot with the umbrella extending out the right side of
//! the drive base. Origin is the chassis' bottom-left corner, x rightward,
//! y upward, the floor at y = 0. Angles in radians, lengths in meters; unit
//! conversions belong to the caller.
//!
//! ## Architecture
//!
//! - [`core`]: geometry types and the line-intercept primitive
//! - [`limiter`]: the validity check and the per-cycle step limiter
//! - [`config`]: TOML loading for the calibrated geometry constants
//!
//! ## Ownership
//!
//! The caller owns both the [`RobotGeometry`] snapshot and every
//! [`StemState`]; the limiter reads them for the duration of one call and
//! mutates nothing.

pub mod config;
pub mod core;
pub mod error;
pub mod limiter;

pub use config::GeometryConfig;
pub use core::types::{Point2D, Rect2D, RobotGeometry, StemState};
pub use error::{RakshaError, Result};
pub use limiter::{is_valid_state, step_towards_target, StepResult};
