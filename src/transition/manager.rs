//! Camera transition manager: drives a camera from its current pose to a
//! requested one over time.
//!
//! The manager does no work on its own. The host calls
//! [`apply`](CameraTransitionManager::apply) to start or redirect a
//! transition and [`tick`](CameraTransitionManager::tick) once per rendered
//! frame; each call writes straight into the live snapshot it is handed.

use super::function::TransitionFunction;
use crate::camera::snapshot::{CameraSnapshot, SnapshotChanges};

/// Whether a transition is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    /// Live state is not being driven.
    #[default]
    Idle,
    /// Each tick writes an interpolated snapshot into the live state.
    InTransition,
}

/// Owns the source, target and scratch snapshots of one camera's transition.
#[derive(Debug, Clone)]
pub struct CameraTransitionManager {
    state: TransitionState,
    function: TransitionFunction,
    /// Timestamp of the most recent tick, in milliseconds.
    now_ms: f64,
    start_ms: f64,
    duration_ms: f64,
    source: CameraSnapshot,
    target: CameraSnapshot,
    current: CameraSnapshot,
}

impl CameraTransitionManager {
    /// Create an idle manager for a camera currently at `live`. The stored
    /// snapshots get a unit `up` even if `live` does not have one.
    pub fn new(live: &CameraSnapshot) -> Self {
        let mut initial = *live;
        initial.normalize_up();
        Self {
            state: TransitionState::Idle,
            function: TransitionFunction::default(),
            now_ms: 0.0,
            start_ms: 0.0,
            duration_ms: 0.0,
            source: initial,
            target: initial,
            current: initial,
        }
    }

    /// Current state of the state machine.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Whether a transition is running.
    pub fn is_in_transition(&self) -> bool {
        self.state == TransitionState::InTransition
    }

    /// Snapshot the running (or last) transition started from.
    pub fn source(&self) -> &CameraSnapshot {
        &self.source
    }

    /// Snapshot the running (or last) transition is heading to.
    pub fn target(&self) -> &CameraSnapshot {
        &self.target
    }

    /// Function driving the running (or last) transition.
    pub fn function(&self) -> &TransitionFunction {
        &self.function
    }

    /// Normalized progress of the running transition as of the last tick,
    /// or `None` when idle.
    pub fn progress(&self) -> Option<f32> {
        self.is_in_transition().then(|| self.normalized())
    }

    /// Start a transition, redirect the running one, or snap.
    ///
    /// - A fresh request (or any request with `duration_ms > 0`) re-bases the
    ///   source on the live snapshot, so mid-flight requests start from where
    ///   the camera actually is.
    /// - A fresh request merges `to` onto the live snapshot; a mid-flight one
    ///   merges onto the existing target, keeping its other fields.
    /// - A non-positive or NaN `duration_ms`, or a projection mode change,
    ///   finishes immediately.
    /// - Source and target always get a unit `up`, whatever the live one is.
    ///
    /// `function` defaults to [`TransitionFunction::linear`].
    pub fn apply(
        &mut self,
        live: &mut CameraSnapshot,
        to: &SnapshotChanges,
        duration_ms: f64,
        function: Option<TransitionFunction>,
    ) {
        let in_transition = self.is_in_transition();

        if !in_transition || duration_ms > 0.0 {
            self.source = *live;
            self.source.normalize_up();
        }
        if !in_transition {
            self.target = self.source;
        }
        to.apply_to(&mut self.target);
        self.target.clamp_radii();
        self.target.normalize_up();

        if duration_ms.is_nan()
            || duration_ms <= 0.0
            || to.changes_mode(live.mode)
        {
            log::debug!(
                "camera snap (duration {duration_ms} ms, mode {:?})",
                self.target.mode
            );
            self.finish(live);
            return;
        }

        self.function = function.unwrap_or_default();
        self.start_ms = self.now_ms;
        self.duration_ms = duration_ms;
        self.state = TransitionState::InTransition;
        log::debug!(
            "camera transition {} ({} ms, {})",
            if in_transition { "redirected" } else { "started" },
            duration_ms,
            self.function.shape.name()
        );
    }

    /// Advance to `timestamp_ms`. Returns whether the live snapshot was
    /// written.
    pub fn tick(
        &mut self,
        live: &mut CameraSnapshot,
        timestamp_ms: f64,
    ) -> bool {
        self.now_ms = timestamp_ms;
        if !self.is_in_transition() {
            return false;
        }

        let normalized = self.normalized();
        if normalized >= 1.0 {
            log::debug!("camera transition finished");
            self.finish(live);
            return true;
        }

        self.function
            .apply(&mut self.current, normalized, &self.source, &self.target);
        *live = self.current;
        true
    }

    fn normalized(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let ratio = (self.now_ms - self.start_ms) / self.duration_ms;
        if ratio.is_nan() {
            return 1.0;
        }
        ratio.clamp(0.0, 1.0) as f32
    }

    fn finish(&mut self, live: &mut CameraSnapshot) {
        *live = self.target;
        self.current = self.target;
        self.state = TransitionState::Idle;
    }
}
