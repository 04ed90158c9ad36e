//! Collision limiter layer.
//!
//! The two per-cycle operations of the crate:
//!
//! - [`is_valid_state`]: is this single joint configuration collision-free?
//! - [`step_towards_target`]: what is the largest safe step toward a target
//!   this control cycle?
//!
//! Both are pure functions of the joint configuration(s) plus a
//! [`crate::core::types::RobotGeometry`] snapshot the caller refreshes
//! every cycle.

mod step;
mod validity;

pub use step::{step_towards_target, StepResult};
pub use validity::is_valid_state;
