use alloc::sync::Arc;

use crate::{NavConfig, ScrollSnapshot};

/// A callback fired after every committed frame with the new scroll snapshot.
///
/// Useful for host-driven secondary effects that do not go through the
/// [`crate::ScrollEffectRunner`].
pub type OnCommitCallback = Arc<dyn Fn(ScrollSnapshot) + Send + Sync>;

/// Thresholds of the reveal/hide snap logic.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapTuning {
    /// Idle gap after which a new scroll gesture starts.
    pub gesture_idle_ms: u64,
    /// Distance from the gesture anchor that permits a snap.
    pub snap_drift_px: f64,
    /// Per-sample delta that permits a snap.
    pub snap_delta_px: f64,
    /// Per-sample deltas at or above this are jumps and never snap.
    pub jump_threshold_px: f64,
    /// Transition applied once the scroll offset passes the collapse distance.
    pub condense_transition_ms: f64,
    /// Upper bound of the velocity-derived snap transition.
    pub max_snap_transition_ms: f64,
    /// How far past its own height a non-fixed header may travel.
    pub overshoot_px: f64,
}

impl Default for SnapTuning {
    fn default() -> Self {
        Self {
            gesture_idle_ms: 300,
            snap_drift_px: 30.0,
            snap_delta_px: 10.0,
            jump_threshold_px: 100.0,
            condense_transition_ms: 250.0,
            max_snap_transition_ms: 300.0,
            overshoot_px: 5.0,
        }
    }
}

/// Configuration for [`crate::BottomNav`].
pub struct NavOptions {
    pub config: NavConfig,

    /// Height of the viewport the bar is anchored to.
    ///
    /// Used as the off-screen translation of the sticky child, and as the provisional header
    /// top until the first scroll sample is persisted.
    pub viewport_height: f64,

    /// Overrides the provisional header top (defaults to `viewport_height`).
    pub initial_top: Option<f64>,

    /// Quiet period before a burst of resize notifications triggers a re-measurement.
    pub resize_debounce_ms: u64,

    pub tuning: SnapTuning,

    pub on_commit: Option<OnCommitCallback>,
}

impl NavOptions {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            config: NavConfig::default(),
            viewport_height,
            initial_top: None,
            resize_debounce_ms: 10,
            tuning: SnapTuning::default(),
            on_commit: None,
        }
    }

    pub(crate) fn provisional_top(&self) -> f64 {
        self.initial_top.unwrap_or(self.viewport_height)
    }

    pub fn with_config(mut self, config: NavConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_condenses(mut self, condenses: bool) -> Self {
        self.config.condenses = condenses;
        self
    }

    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.config.fixed = fixed;
        self
    }

    pub fn with_reveals(mut self, reveals: bool) -> Self {
        self.config.reveals = reveals;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    pub fn with_initial_top(mut self, initial_top: f64) -> Self {
        self.initial_top = Some(initial_top);
        self
    }

    pub fn with_resize_debounce_ms(mut self, delay_ms: u64) -> Self {
        self.resize_debounce_ms = delay_ms;
        self
    }

    pub fn with_tuning(mut self, tuning: SnapTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_on_commit(
        mut self,
        on_commit: Option<impl Fn(ScrollSnapshot) + Send + Sync + 'static>,
    ) -> Self {
        self.on_commit = on_commit.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for NavOptions {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            viewport_height: self.viewport_height,
            initial_top: self.initial_top,
            resize_debounce_ms: self.resize_debounce_ms,
            tuning: self.tuning,
            on_commit: self.on_commit.clone(),
        }
    }
}

impl core::fmt::Debug for NavOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavOptions")
            .field("config", &self.config)
            .field("viewport_height", &self.viewport_height)
            .field("initial_top", &self.initial_top)
            .field("resize_debounce_ms", &self.resize_debounce_ms)
            .field("tuning", &self.tuning)
            .finish_non_exhaustive()
    }
}
