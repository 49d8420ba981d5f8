//! Camera transition engine.
//!
//! A [`CameraTransitionManager`] animates a live camera snapshot towards a
//! requested pose. Each frame it evaluates a [`TransitionFunction`]: an
//! [`EaseAdjustment`] of raw progress followed by one of the
//! [`TransitionShape`]s, which interpolate position, orientation, field of
//! view and visible radius together.

pub mod easing;
pub mod function;
pub mod manager;
pub mod radius;
pub mod shape;

pub use easing::EaseAdjustment;
pub use function::TransitionFunction;
pub use manager::{CameraTransitionManager, TransitionState};
pub use shape::{ShapeFn, TransitionShape};
