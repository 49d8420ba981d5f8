//! Transition function: a shape composed with an easing adjustment.

use super::easing::EaseAdjustment;
use super::shape::TransitionShape;
use crate::camera::snapshot::CameraSnapshot;

/// Complete description of how a camera transition progresses.
///
/// Consumers construct functions via [`linear()`](Self::linear),
/// [`leaping()`](Self::leaping), [`new()`](Self::new), or from
/// [`TransitionOptions`](crate::options::TransitionOptions).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionFunction {
    /// Path the camera takes between snapshots.
    pub shape: TransitionShape,
    /// Ease-in/ease-out applied to raw progress before the shape.
    pub ease: EaseAdjustment,
}

impl TransitionFunction {
    /// Compose a shape with an easing adjustment.
    pub fn new(shape: TransitionShape, ease: EaseAdjustment) -> Self {
        Self { shape, ease }
    }

    /// Linear shape without easing (the default).
    pub fn linear() -> Self {
        Self::default()
    }

    /// Leaping shape without easing.
    pub fn leaping(smart: bool) -> Self {
        Self::new(TransitionShape::Leaping { smart }, EaseAdjustment::LINEAR)
    }

    /// Replace the easing adjustment.
    #[must_use]
    pub fn with_ease(mut self, ease: EaseAdjustment) -> Self {
        self.ease = ease;
        self
    }

    /// Write the snapshot at raw progress `t` into `out`.
    #[inline]
    pub fn apply(
        &self,
        out: &mut CameraSnapshot,
        t: f32,
        source: &CameraSnapshot,
        target: &CameraSnapshot,
    ) {
        self.shape.apply(out, self.ease.evaluate(t), source, target);
    }
}
