use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;
use crate::transition::{EaseAdjustment, TransitionFunction, TransitionShape};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Transition", inline)]
#[serde(default)]
/// How camera moves are animated.
pub struct TransitionOptions {
    /// Path the camera takes between poses.
    #[schemars(title = "Shape")]
    pub shape: TransitionShape,
    /// Length of the accelerating phase, relative to the whole transition.
    /// `ease_in + ease_out` must not exceed 1.
    #[schemars(title = "Ease In", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ease_in: f32,
    /// Length of the decelerating phase, relative to the whole transition.
    #[schemars(title = "Ease Out", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ease_out: f32,
    /// Default transition duration in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0.0, max = 5000.0), extend("step" = 50.0))]
    pub duration_ms: f64,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            shape: TransitionShape::Linear,
            ease_in: 0.0,
            ease_out: 0.0,
            duration_ms: 250.0,
        }
    }
}

impl TransitionOptions {
    /// Reject a negative or non-finite `duration_ms` and invalid easing.
    pub fn validate(&self) -> Result<(), CameraError> {
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(CameraError::InvalidOption {
                name: "duration_ms",
                value: self.duration_ms,
            });
        }
        let _ = EaseAdjustment::new(self.ease_in, self.ease_out)?;
        Ok(())
    }

    /// Validated transition function for these options.
    pub fn function(&self) -> Result<TransitionFunction, CameraError> {
        let ease = EaseAdjustment::new(self.ease_in, self.ease_out)?;
        Ok(TransitionFunction::new(self.shape, ease))
    }
}
