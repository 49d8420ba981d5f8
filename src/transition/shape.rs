//! Transition shape functions.
//!
//! Every shape has the same contract: given eased progress `t` in `[0, 1]`,
//! write a complete interpolated snapshot into `out`. At `t = 0` the result
//! matches `source`, at `t = 1` it matches `target`. `out` always starts as a
//! copy of `target`, so the projection mode is never interpolated.

use glam::{Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::radius::{lerp, lerp_vec3, swelling_cubic, swelling_smart};
use crate::camera::snapshot::CameraSnapshot;
use crate::camera::sphere::{camera_target_distance, visible_sphere_radius};

/// Plain function form of a transition shape: `(out, t, source, target)`.
pub type ShapeFn =
    fn(&mut CameraSnapshot, f32, &CameraSnapshot, &CameraSnapshot);

/// Relative radius difference below which the size-relative remap degrades
/// to the identity.
const SIZE_RELATIVE_EPSILON: f32 = 1e-3;

/// How the camera travels between two snapshots.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum TransitionShape {
    /// Interpolate distance, direction and radius linearly.
    #[default]
    Linear,
    /// Linear, with progress remapped so the relative rate of distance
    /// change stays constant.
    LinearSizeRelative,
    /// Swell the framing radius mid-flight so both endpoints stay in view.
    Leaping {
        /// Decrease leaping for transitions between nearby places.
        #[serde(default = "default_smart")]
        smart: bool,
    },
}

fn default_smart() -> bool {
    true
}

impl TransitionShape {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::LinearSizeRelative => "linear-size-relative",
            Self::Leaping { .. } => "leaping",
        }
    }

    /// The shape as a plain function.
    pub fn function(&self) -> ShapeFn {
        match self {
            Self::Linear => linear,
            Self::LinearSizeRelative => linear_size_relative,
            Self::Leaping { smart: true } => leaping_smart,
            Self::Leaping { smart: false } => leaping_always,
        }
    }

    /// Write the interpolated snapshot at progress `t` into `out`.
    #[inline]
    pub fn apply(
        &self,
        out: &mut CameraSnapshot,
        t: f32,
        source: &CameraSnapshot,
        target: &CameraSnapshot,
    ) {
        (self.function())(out, t, source, target);
    }
}

/// Baseline shape: slerped up vector and view direction, linearly
/// interpolated look-at point, distance, radii, fov and fog.
pub fn linear(
    out: &mut CameraSnapshot,
    t: f32,
    source: &CameraSnapshot,
    target: &CameraSnapshot,
) {
    *out = *target;

    out.up = rotate_up(source.up, target.up, t);
    out.target = lerp_vec3(source.target, target.target, t);

    let dist = lerp(source.distance(), target.distance(), t);
    out.position = out.target + slerp_direction(source, target, t) * dist;

    out.radius = lerp(source.radius, target.radius, t);
    out.radius_max = lerp(source.radius_max, target.radius_max, t);
    out.fov = lerp(source.fov, target.fov, t);
    out.fog = lerp(source.fog, target.fog, t);
}

/// [`linear`] with progress remapped so that the camera distance changes at
/// a constant relative rate, which keeps zooms between very different scales
/// visually even.
pub fn linear_size_relative(
    out: &mut CameraSnapshot,
    t: f32,
    source: &CameraSnapshot,
    target: &CameraSnapshot,
) {
    let q = size_relative_progress(t, source.distance(), target.distance());
    linear(out, q, source, target);
}

/// Leaping shape that swells less between nearby endpoints.
pub fn leaping_smart(
    out: &mut CameraSnapshot,
    t: f32,
    source: &CameraSnapshot,
    target: &CameraSnapshot,
) {
    leaping(out, t, source, target, swelling_smart);
}

/// Leaping shape that always swells to contain both endpoints.
pub fn leaping_always(
    out: &mut CameraSnapshot,
    t: f32,
    source: &CameraSnapshot,
    target: &CameraSnapshot,
) {
    leaping(out, t, source, target, swelling_cubic);
}

fn leaping(
    out: &mut CameraSnapshot,
    t: f32,
    source: &CameraSnapshot,
    target: &CameraSnapshot,
    swell: fn(f32, f32, f32, f32) -> f32,
) {
    *out = *target;

    out.up = rotate_up(source.up, target.up, t);
    out.target = lerp_vec3(source.target, target.target, t);

    let shift = source.target.distance(target.target);

    out.radius = swell(source.radius, target.radius, shift, t);
    out.radius_max = swell(source.radius_max, target.radius_max, shift, t);
    out.fov = lerp(source.fov, target.fov, t);
    out.fog = lerp(source.fog, target.fog, t);

    // Distance follows the visible radius so framing stays consistent while
    // fov changes.
    let vis_radius = swell(
        visible_sphere_radius(source),
        visible_sphere_radius(target),
        shift,
        t,
    );
    let dist = camera_target_distance(vis_radius, out.mode, out.fov);
    out.position = out.target + slerp_direction(source, target, t) * dist;
}

/// Remap progress so that `r(q) = lerp(r0, r1, q)` grows geometrically in
/// `t`, i.e. `r(q(t)) = r0 · (r1 / r0)^t`.
pub fn size_relative_progress(t: f32, r0: f32, r1: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    if r0 <= 0.0
        || r1 <= 0.0
        || ((r0 - r1) / (r0 + r1)).abs() <= SIZE_RELATIVE_EPSILON
    {
        return t;
    }
    r0 / (r1 - r0) * ((r1 / r0).powf(t) - 1.0)
}

/// Rotate `source_up` towards `target_up` along the shortest arc.
fn rotate_up(source_up: Vec3, target_up: Vec3, t: f32) -> Vec3 {
    let rotation =
        Quat::IDENTITY.slerp(Quat::from_rotation_arc(source_up, target_up), t);
    (rotation * source_up).normalize_or(target_up)
}

/// Unit direction from look-at point to camera, rotated from the source's
/// towards the target's along the shortest arc.
fn slerp_direction(
    source: &CameraSnapshot,
    target: &CameraSnapshot,
    t: f32,
) -> Vec3 {
    match (source.direction(), target.direction()) {
        (Some(from), Some(to)) => {
            let rotation =
                Quat::IDENTITY.slerp(Quat::from_rotation_arc(from, to), t);
            rotation * from
        }
        (Some(dir), None) | (None, Some(dir)) => dir,
        (None, None) => Vec3::Z,
    }
}
