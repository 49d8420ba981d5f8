//! Ease-in/ease-out adjustment of transition progress.
//!
//! Three-phase velocity profile: constant acceleration for the first
//! `ease_in` of the transition, constant velocity in the middle, constant
//! deceleration for the last `ease_out`.

use crate::error::CameraError;

/// Validated pair of ease-in/ease-out fractions.
///
/// `ease_in = ease_out = 0.5` gives a curve very close to CSS "ease-in-out"
/// (`cubic-bezier(.42,0,.58,1)`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaseAdjustment {
    ease_in: f32,
    ease_out: f32,
}

impl EaseAdjustment {
    /// No easing: progress passes through unchanged.
    pub const LINEAR: Self = Self {
        ease_in: 0.0,
        ease_out: 0.0,
    };

    /// Create an adjustment. Both fractions must lie in `[0, 1]` and sum to
    /// at most 1, otherwise the velocity profile cannot span `[0, 1]`.
    pub fn new(ease_in: f32, ease_out: f32) -> Result<Self, CameraError> {
        let in_range = |x: f32| (0.0..=1.0).contains(&x);
        if in_range(ease_in) && in_range(ease_out) && ease_in + ease_out <= 1.0
        {
            Ok(Self { ease_in, ease_out })
        } else {
            Err(CameraError::InvalidEase { ease_in, ease_out })
        }
    }

    /// Length of the accelerating phase.
    pub fn ease_in(&self) -> f32 {
        self.ease_in
    }

    /// Length of the decelerating phase.
    pub fn ease_out(&self) -> f32 {
        self.ease_out
    }

    /// Whether this adjustment is the identity.
    pub fn is_linear(&self) -> bool {
        self.ease_in == 0.0 && self.ease_out == 0.0
    }

    /// Map linear progress to eased progress. Input is clamped to `[0, 1]`.
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let Self { ease_in, ease_out } = *self;
        let v_max = 1.0 / (1.0 - 0.5 * ease_in - 0.5 * ease_out);
        if t < ease_in {
            0.5 * v_max * t * t / ease_in
        } else if t <= 1.0 - ease_out {
            0.5 * v_max * ease_in + (t - ease_in) * v_max
        } else {
            let rest = 1.0 - t;
            1.0 - 0.5 * v_max * rest * rest / ease_out
        }
    }
}

impl Default for EaseAdjustment {
    fn default() -> Self {
        Self::LINEAR
    }
}
