use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::snapshot::{CameraSnapshot, ProjectionMode};
use crate::error::CameraError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters used to build the initial pose.
pub struct CameraOptions {
    /// Projection type.
    #[schemars(title = "Projection")]
    pub mode: ProjectionMode,
    /// Field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fov: f32,
    /// Fog distance parameter.
    #[schemars(title = "Fog", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub fog: f32,
    /// Upper clamp for the visible radius.
    #[schemars(skip)]
    pub radius_max: f32,
    /// Viewport aspect ratio (width / height).
    #[schemars(skip)]
    pub aspect: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Perspective,
            fov: 45.0,
            fog: 50.0,
            radius_max: 10.0,
            aspect: 1.6,
        }
    }
}

impl CameraOptions {
    /// Reject values the camera cannot be built from: a field of view
    /// outside `(0, 180)` degrees, a non-positive `radius_max` or `aspect`,
    /// or any non-finite value.
    pub fn validate(&self) -> Result<(), CameraError> {
        let checks = [
            ("fov", self.fov, self.fov > 0.0 && self.fov < 180.0),
            ("fog", self.fog, self.fog.is_finite()),
            ("radius_max", self.radius_max, self.radius_max > 0.0),
            ("aspect", self.aspect, self.aspect > 0.0),
        ];
        for (name, value, valid) in checks {
            if !valid || !value.is_finite() {
                return Err(CameraError::InvalidOption {
                    name,
                    value: f64::from(value),
                });
            }
        }
        Ok(())
    }

    /// Default pose with these projection parameters applied.
    pub fn initial_snapshot(&self) -> CameraSnapshot {
        let mut snapshot = CameraSnapshot {
            mode: self.mode,
            fov: self.fov.to_radians(),
            fog: self.fog,
            radius_max: self.radius_max,
            ..CameraSnapshot::default()
        };
        snapshot.clamp_radii();
        snapshot
    }
}
