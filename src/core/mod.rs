//! Core foundation layer.
//!
//! Pure, stateless types and math with no internal dependencies. The
//! limiter layer builds entirely on this.
//!
//! # Contents
//!
//! - [`types`]: geometry and joint-configuration types
//! - [`math`]: line-intercept primitive

pub mod math;
pub mod types;
