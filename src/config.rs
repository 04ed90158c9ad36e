//! Geometry configuration loading for RakshaStem.
//!
//! The calibrated geometry constants live in a TOML file alongside the rest
//! of the robot's configuration. Every field has a default so a partial file
//! (or an empty one) still parses; validation happens when converting into a
//! [`RobotGeometry`].

use crate::core::types::{Point2D, Rect2D, RobotGeometry};
use crate::error::{RakshaError, Result};
use serde::Deserialize;
use std::path::Path;

/// Calibrated geometry constants, as stored on disk.
#[derive(Clone, Debug, Deserialize)]
pub struct GeometryConfig {
    #[serde(default)]
    pub drive_base: DriveBaseConfig,
    #[serde(default)]
    pub pivot_axle: PivotAxleConfig,
    #[serde(default)]
    pub umbrella: UmbrellaConfig,
}

/// Drive-base footprint in the side-view frame
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DriveBaseConfig {
    /// X of the bottom-left corner in meters (default: 0.0)
    #[serde(default)]
    pub x: f32,

    /// Y of the bottom-left corner in meters (default: 0.0)
    #[serde(default)]
    pub y: f32,

    /// Chassis length along x in meters (default: 0.0)
    #[serde(default)]
    pub width: f32,

    /// Chassis height along y in meters (default: 0.0)
    #[serde(default)]
    pub height: f32,
}

/// Pivot axle location relative to the drive-base origin
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PivotAxleConfig {
    /// X offset in meters (default: 0.0)
    #[serde(default)]
    pub x: f32,

    /// Y offset in meters (default: 0.0)
    #[serde(default)]
    pub y: f32,
}

/// Umbrella bounding box seen from the wrist axle
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UmbrellaConfig {
    /// Reach from the wrist axle in meters (default: 0.0)
    #[serde(default)]
    pub length: f32,

    /// Bounding-box thickness in meters (default: 0.0)
    #[serde(default)]
    pub height: f32,
}

impl GeometryConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<GeometryConfig> {
        let contents = std::fs::read_to_string(path)?;
        let config: GeometryConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Validate and convert into the geometry snapshot the limiter consumes.
    pub fn into_geometry(self) -> Result<RobotGeometry> {
        if self.drive_base.width < 0.0 || self.drive_base.height < 0.0 {
            return Err(RakshaError::Config(format!(
                "drive base extents must be non-negative, got {}x{}",
                self.drive_base.width, self.drive_base.height
            )));
        }
        if self.umbrella.length < 0.0 || self.umbrella.height < 0.0 {
            return Err(RakshaError::Config(format!(
                "umbrella dimensions must be non-negative, got length {} height {}",
                self.umbrella.length, self.umbrella.height
            )));
        }

        Ok(RobotGeometry::new(
            Rect2D::new(
                self.drive_base.x,
                self.drive_base.y,
                self.drive_base.width,
                self.drive_base.height,
            ),
            Point2D::new(self.pivot_axle.x, self.pivot_axle.y),
            self.umbrella.length,
            self.umbrella.height,
        ))
    }
}
