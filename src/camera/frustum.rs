//! View frustum for framing checks.
//!
//! Extracts frustum planes from a view-projection matrix and tests whether
//! points and spheres lie inside.

use glam::{Mat4, Vec3, Vec4};

use super::core::projection_matrix;
use super::snapshot::CameraSnapshot;

/// A plane `normal · p + distance = 0` with unit normal pointing into the
/// frustum.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed offset from the origin.
    pub distance: f32,
}

impl Plane {
    /// Plane from raw coefficients `(a, b, c, d)`, normalized.
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let normal = coefficients.truncate();
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                distance: coefficients.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from `point` (positive = inside).
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// Six clipping planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Planes with inward-facing normals.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Gribb/Hartmann extraction for a right-handed `[0, 1]`-depth
    /// view-projection matrix.
    pub fn from_view_projection(vp: Mat4) -> Self {
        let rows = [vp.row(0), vp.row(1), vp.row(2), vp.row(3)];
        let [r0, r1, r2, r3] = rows;
        Self {
            planes: [
                Plane::from_coefficients(r3 + r0),
                Plane::from_coefficients(r3 - r0),
                Plane::from_coefficients(r3 + r1),
                Plane::from_coefficients(r3 - r1),
                Plane::from_coefficients(r2),
                Plane::from_coefficients(r3 - r2),
            ],
        }
    }

    /// Frustum of `snapshot` rendered into a viewport with `aspect`.
    pub fn for_snapshot(snapshot: &CameraSnapshot, aspect: f32) -> Self {
        let view =
            Mat4::look_at_rh(snapshot.position, snapshot.target, snapshot.up);
        Self::from_view_projection(projection_matrix(snapshot, aspect) * view)
    }

    /// Whether `point` lies inside.
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Whether the sphere at least partially overlaps the frustum.
    #[inline]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= -radius)
    }

    /// Whether the sphere lies completely inside.
    #[inline]
    pub fn contains_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= radius)
    }
}
