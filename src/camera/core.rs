use glam::{Mat4, Vec3};

use super::frustum::Frustum;
use super::snapshot::{CameraSnapshot, ProjectionMode, SnapshotChanges};
use super::sphere::bounding_sphere;
use crate::transition::{CameraTransitionManager, TransitionFunction};

/// Closest allowed near-plane distance.
const MIN_NEAR: f32 = 0.01;

/// Margin applied to the bounding sphere when fitting to a point set.
const FIT_PADDING: f32 = 1.5;

/// Live camera: current pose, viewport aspect and the transition manager
/// that animates the pose.
#[derive(Debug, Clone)]
pub struct Camera {
    state: CameraSnapshot,
    transition: CameraTransitionManager,
    aspect: f32,
}

impl Camera {
    /// Create an idle camera at `snapshot`. Radii are clamped and `up` is
    /// normalized (+Y when degenerate).
    pub fn new(snapshot: CameraSnapshot, aspect: f32) -> Self {
        let mut state = snapshot;
        state.clamp_radii();
        state.normalize_up();
        Self {
            state,
            transition: CameraTransitionManager::new(&state),
            aspect,
        }
    }

    /// Current live pose.
    pub fn snapshot(&self) -> &CameraSnapshot {
        &self.state
    }

    /// Transition manager, for introspection.
    pub fn transition(&self) -> &CameraTransitionManager {
        &self.transition
    }

    /// Viewport aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Whether a transition is running.
    pub fn is_animating(&self) -> bool {
        self.transition.is_in_transition()
    }

    /// Update the aspect ratio from a viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Move towards `changes` over `duration_ms` along a linear path
    /// (instantly when `duration_ms <= 0`).
    pub fn set_state(&mut self, changes: &SnapshotChanges, duration_ms: f64) {
        self.transition
            .apply(&mut self.state, changes, duration_ms, None);
    }

    /// Like [`set_state`](Self::set_state) with an explicit transition
    /// function.
    pub fn set_state_with(
        &mut self,
        changes: &SnapshotChanges,
        duration_ms: f64,
        function: TransitionFunction,
    ) {
        self.transition
            .apply(&mut self.state, changes, duration_ms, Some(function));
    }

    /// Advance any running transition to `timestamp_ms`. Call once per
    /// frame. Returns whether the pose changed.
    pub fn update(&mut self, timestamp_ms: f64) -> bool {
        self.transition.tick(&mut self.state, timestamp_ms)
    }

    /// Frame a sphere, keeping the current view direction and up vector.
    pub fn focus(
        &mut self,
        center: Vec3,
        radius: f32,
        duration_ms: f64,
        function: TransitionFunction,
    ) {
        let look = self.state.direction().map_or(Vec3::NEG_Z, |dir| -dir);
        let mut changes =
            self.state.focus_changes(center, radius, look, self.state.up);
        changes.radius_max = Some(self.state.radius_max.max(radius));
        self.set_state_with(&changes, duration_ms, function);
    }

    /// Frame all `positions` with some padding. Does nothing for an empty
    /// slice.
    pub fn fit_to_positions(
        &mut self,
        positions: &[Vec3],
        duration_ms: f64,
        function: TransitionFunction,
    ) {
        if let Some((center, radius)) = bounding_sphere(positions) {
            let padded = radius.max(MIN_NEAR) * FIT_PADDING;
            self.focus(center, padded, duration_ms, function);
        }
    }

    /// World-to-view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.state.position, self.state.target, self.state.up)
    }

    /// Projection matrix for the current pose and aspect.
    pub fn projection_matrix(&self) -> Mat4 {
        projection_matrix(&self.state, self.aspect)
    }

    /// Combined view-projection matrix.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Clipping frustum for the current pose.
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(self.view_projection())
    }
}

/// Projection of `snapshot` into a viewport with `aspect`.
///
/// The field of view spans the narrower viewport dimension, so the visible
/// sphere fits in both. Near and far planes enclose the sphere of `radius`
/// in front of the camera and `radius_max` behind the target. Depth range is
/// `[0, 1]` (wgpu/Vulkan convention).
pub fn projection_matrix(snapshot: &CameraSnapshot, aspect: f32) -> Mat4 {
    let distance = snapshot.distance();
    let near = (distance - snapshot.radius).max(MIN_NEAR);
    let far = (distance + snapshot.radius_max).max(near + MIN_NEAR);
    let half_fov = 0.5 * snapshot.fov;

    match snapshot.mode {
        ProjectionMode::Perspective => {
            let fovy = if aspect >= 1.0 {
                snapshot.fov
            } else {
                2.0 * (half_fov.tan() / aspect).atan()
            };
            Mat4::perspective_rh(fovy, aspect, near, far)
        }
        ProjectionMode::Orthographic => {
            let half = distance * half_fov.tan();
            let (right, top) = if aspect >= 1.0 {
                (half * aspect, half)
            } else {
                (half, half / aspect)
            };
            Mat4::orthographic_rh(-right, right, -top, top, near, far)
        }
    }
}
