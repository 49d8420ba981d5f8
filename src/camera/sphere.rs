//! Conversions between a visible-sphere radius and camera distance.
//!
//! Interpolating the visible radius and reconstructing the distance keeps
//! on-screen framing consistent while the field of view also changes.

use glam::Vec3;

use super::snapshot::{CameraSnapshot, ProjectionMode};

/// Radius of the largest sphere centered at `snapshot.target` that fits
/// entirely within the view frustum.
pub fn visible_sphere_radius(snapshot: &CameraSnapshot) -> f32 {
    let distance = snapshot.distance();
    let half_fov = 0.5 * snapshot.fov;
    match snapshot.mode {
        ProjectionMode::Orthographic => distance * half_fov.tan(),
        ProjectionMode::Perspective => distance * half_fov.sin(),
    }
}

/// Camera-to-target distance at which a sphere of radius `vis_radius` just
/// fills the frustum. Inverse of [`visible_sphere_radius`].
pub fn camera_target_distance(
    vis_radius: f32,
    mode: ProjectionMode,
    fov: f32,
) -> f32 {
    let half_fov = 0.5 * fov;
    match mode {
        ProjectionMode::Orthographic => vis_radius / half_fov.tan(),
        ProjectionMode::Perspective => vis_radius / half_fov.sin(),
    }
}

/// Bounding sphere `(center, radius)` of a point set, centered on the
/// centroid. `None` for an empty set.
pub fn bounding_sphere(points: &[Vec3]) -> Option<(Vec3, f32)> {
    if points.is_empty() {
        return None;
    }
    let centroid = points.iter().copied().sum::<Vec3>() / points.len() as f32;
    let radius = points
        .iter()
        .map(|p| p.distance(centroid))
        .fold(0.0f32, f32::max);
    Some((centroid, radius))
}
