//! Camera state for 3D scene viewing.
//!
//! Provides the snapshot data model, visible-sphere helpers, the live
//! [`Camera`](core::Camera) that owns a transition manager, and frustum
//! tests used to verify framing.

/// Live camera owning its pose, projection and transition manager.
pub mod core;
/// View frustum extraction and intersection tests.
pub mod frustum;
/// Complete and partial camera poses.
pub mod snapshot;
/// Visible-sphere radius and camera distance conversions.
pub mod sphere;

pub use self::core::Camera;
pub use snapshot::{CameraSnapshot, ProjectionMode, SnapshotChanges};
