//! Camera snapshots: complete, self-sufficient camera poses.

use glam::{Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::sphere::camera_target_distance;

/// Lower bound applied to `radius` and `radius_max` whenever a transition
/// target is accepted.
pub const MIN_RADIUS: f32 = 0.01;

/// Projection type of a camera.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// Parallel projection; `fov` acts as an equivalent framing angle.
    Orthographic,
    /// Pinhole projection.
    #[default]
    Perspective,
}

/// One complete camera pose.
///
/// `up` is kept at unit length by every operation in this crate that writes
/// it; `mode` is never interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSnapshot {
    /// Camera location in world space.
    pub position: Vec3,
    /// Look-at point.
    pub target: Vec3,
    /// Unit "up" direction.
    pub up: Vec3,
    /// Nominal visible-sphere radius (drives clipping and zoom).
    pub radius: f32,
    /// Upper clamp for `radius`.
    pub radius_max: f32,
    /// Projection type.
    pub mode: ProjectionMode,
    /// Field of view in radians.
    pub fov: f32,
    /// Fog distance parameter.
    pub fog: f32,
}

impl Default for CameraSnapshot {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 100.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            radius: 10.0,
            radius_max: 10.0,
            mode: ProjectionMode::Perspective,
            fov: std::f32::consts::FRAC_PI_4,
            fog: 50.0,
        }
    }
}

impl CameraSnapshot {
    /// Distance between camera position and look-at point.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Unit direction from the look-at point towards the camera, or `None`
    /// when the camera sits on its target.
    #[inline]
    pub fn direction(&self) -> Option<Vec3> {
        (self.position - self.target).try_normalize()
    }

    /// Copy of this snapshot with the camera-target distance scaled by
    /// `factor` (values above 1 zoom out).
    #[must_use]
    pub fn zoomed(&self, factor: f32) -> Self {
        Self {
            position: self.target + (self.position - self.target) * factor,
            ..*self
        }
    }

    /// Copy of this snapshot looking at the same target from the frame
    /// described by `rotation`: the camera ends up on that frame's +Z axis at
    /// the current distance, with its up along the frame's +Y axis.
    #[must_use]
    pub fn oriented(&self, rotation: Quat) -> Self {
        let camera_rotation = rotation.normalize().inverse();
        Self {
            position: self.target
                + camera_rotation * Vec3::new(0.0, 0.0, self.distance()),
            up: (camera_rotation * Vec3::Y).normalize(),
            ..*self
        }
    }

    /// Changes that frame a sphere so it exactly fills the view, looking
    /// along `direction` (from camera towards the sphere) with the given
    /// `up`. Keeps this snapshot's projection and field of view.
    pub fn focus_changes(
        &self,
        center: Vec3,
        radius: f32,
        direction: Vec3,
        up: Vec3,
    ) -> SnapshotChanges {
        let look = direction.try_normalize().unwrap_or(Vec3::NEG_Z);
        let distance = camera_target_distance(radius, self.mode, self.fov);
        SnapshotChanges {
            position: Some(center - look * distance),
            target: Some(center),
            up: Some(up),
            radius: Some(radius),
            ..SnapshotChanges::default()
        }
    }

    /// Fieldwise comparison within `epsilon` (absolute, per component).
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.mode == other.mode
            && self.position.abs_diff_eq(other.position, epsilon)
            && self.target.abs_diff_eq(other.target, epsilon)
            && self.up.abs_diff_eq(other.up, epsilon)
            && (self.radius - other.radius).abs() <= epsilon
            && (self.radius_max - other.radius_max).abs() <= epsilon
            && (self.fov - other.fov).abs() <= epsilon
            && (self.fog - other.fog).abs() <= epsilon
    }

    /// Enforce the radius invariants: `radius <= radius_max` and both at
    /// least [`MIN_RADIUS`].
    pub fn clamp_radii(&mut self) {
        if self.radius > self.radius_max {
            self.radius = self.radius_max;
        }
        self.radius = self.radius.max(MIN_RADIUS);
        self.radius_max = self.radius_max.max(MIN_RADIUS);
    }

    /// Rescale `up` to unit length, falling back to +Y when it is zero or
    /// not finite.
    pub fn normalize_up(&mut self) {
        self.up = self.up.normalize_or(Vec3::Y);
    }
}

/// A partial snapshot: only the fields that are `Some` are changed when the
/// set is merged onto a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotChanges {
    /// New camera location.
    pub position: Option<Vec3>,
    /// New look-at point.
    pub target: Option<Vec3>,
    /// New up direction; normalized on merge, ignored if zero-length.
    pub up: Option<Vec3>,
    /// New nominal visible-sphere radius.
    pub radius: Option<f32>,
    /// New radius clamp.
    pub radius_max: Option<f32>,
    /// New projection mode.
    pub mode: Option<ProjectionMode>,
    /// New field of view in radians.
    pub fov: Option<f32>,
    /// New fog parameter.
    pub fog: Option<f32>,
}

impl SnapshotChanges {
    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the present fields onto `snapshot`.
    pub fn apply_to(&self, snapshot: &mut CameraSnapshot) {
        if let Some(position) = self.position {
            snapshot.position = position;
        }
        if let Some(target) = self.target {
            snapshot.target = target;
        }
        if let Some(up) = self.up.and_then(Vec3::try_normalize) {
            snapshot.up = up;
        }
        if let Some(radius) = self.radius {
            snapshot.radius = radius;
        }
        if let Some(radius_max) = self.radius_max {
            snapshot.radius_max = radius_max;
        }
        if let Some(mode) = self.mode {
            snapshot.mode = mode;
        }
        if let Some(fov) = self.fov {
            snapshot.fov = fov;
        }
        if let Some(fog) = self.fog {
            snapshot.fog = fog;
        }
    }

    /// Whether merging these changes would switch projection away from
    /// `current`.
    pub fn changes_mode(&self, current: ProjectionMode) -> bool {
        self.mode.is_some_and(|mode| mode != current)
    }
}

impl From<CameraSnapshot> for SnapshotChanges {
    fn from(s: CameraSnapshot) -> Self {
        Self {
            position: Some(s.position),
            target: Some(s.target),
            up: Some(s.up),
            radius: Some(s.radius),
            radius_max: Some(s.radius_max),
            mode: Some(s.mode),
            fov: Some(s.fov),
            fog: Some(s.fog),
        }
    }
}
