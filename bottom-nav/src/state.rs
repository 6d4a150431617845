use crate::layout::Measurement;
use crate::{ChildId, HeaderTransform, NavConfig, SnapTuning, StickyTransform};

/// Geometry derived from the last successful measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    /// Cached box height; 0 means "never measured".
    pub height: f64,
    /// How far the header may retract while condensing (height minus sticky height).
    pub collapse_distance: f64,
    /// The sticky child's offset within the container.
    pub sticky_top: f64,
}

impl Geometry {
    pub fn from_measurement(m: Measurement, config: &NavConfig) -> Self {
        let collapse_distance = if config.may_move() && m.sticky.is_some() {
            let d = m.height - m.sticky_height;
            if d < 0.0 || d > m.height {
                nwarn!(
                    height = m.height,
                    sticky_height = m.sticky_height,
                    "Geometry: sticky child does not fit the container"
                );
            }
            clamp(d, 0.0, m.height.max(0.0))
        } else {
            0.0
        };
        Self {
            height: m.height,
            collapse_distance,
            sticky_top: m.sticky_offset,
        }
    }

    pub fn is_measured(&self) -> bool {
        self.height != 0.0
    }

    /// Upper bound of the header top.
    pub fn max_top(&self, config: &NavConfig, tuning: &SnapTuning) -> f64 {
        if config.fixed {
            self.collapse_distance
        } else {
            self.height + tuning.overshoot_px
        }
    }
}

/// One scroll position observed by the host, with the host's clock.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSample {
    pub scroll_top: f64,
    pub now_ms: u64,
}

impl ScrollSample {
    pub fn new(scroll_top: f64, now_ms: u64) -> Self {
        Self { scroll_top, now_ms }
    }
}

/// The incremental state of the scroll state machine.
///
/// Every field is replaced wholesale by [`ScrollState::advance`]; nothing else mutates it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Distance the header is retracted by, always `>= 0`.
    pub top: f64,
    /// Last committed condensation progress.
    pub progress: f64,
    /// Last committed signed offset (what the transform stage received).
    pub committed_offset: f64,
    pub last_scroll_top: f64,
    pub last_timestamp_ms: u64,
    /// Anchor of the current continuous gesture.
    pub init_scroll_top: f64,
    pub init_timestamp_ms: u64,
    pub was_scrolling_down: bool,
}

impl ScrollState {
    pub fn new(provisional_top: f64) -> Self {
        Self {
            top: provisional_top,
            progress: 0.0,
            committed_offset: 0.0,
            last_scroll_top: 0.0,
            last_timestamp_ms: 0,
            init_scroll_top: 0.0,
            init_timestamp_ms: 0,
            was_scrolling_down: false,
        }
    }

    /// Computes the state after `sample`.
    ///
    /// A forced step always commits but leaves the baseline (`top`, `last_scroll_top`,
    /// direction and timestamp) untouched, so it can be used to refresh visuals or to
    /// stabilize a measurement. Returns `None` until the container has been measured.
    pub fn advance(
        &self,
        geometry: &Geometry,
        config: &NavConfig,
        tuning: &SnapTuning,
        sample: ScrollSample,
        force: bool,
    ) -> Option<ScrollStep> {
        if !geometry.is_measured() {
            return None;
        }

        let ScrollSample { scroll_top, now_ms } = sample;
        let last_top = self.top;
        let collapse = geometry.collapse_distance;
        let max_top = geometry.max_top(config, tuning);
        let delta = scroll_top - self.last_scroll_top;
        let abs_delta = abs(delta);
        let is_scrolling_down = scroll_top > self.last_scroll_top;

        let mut next = *self;
        let mut transition_ms = None;

        let mut top = if config.may_move() {
            let target = if config.reveals {
                last_top + delta
            } else {
                scroll_top
            };
            clamp(target, 0.0, max_top)
        } else {
            0.0
        };

        if scroll_top >= collapse {
            if config.floors_at_collapse() {
                top = top.max(collapse);
            }
            transition_ms = Some(tuning.condense_transition_ms);
        }

        if config.reveals && !config.fixed && !config.disabled && abs_delta < tuning.jump_threshold_px
        {
            let idle = now_ms.saturating_sub(self.init_timestamp_ms) > tuning.gesture_idle_ms;
            if idle || self.was_scrolling_down != is_scrolling_down {
                next.init_scroll_top = scroll_top;
                next.init_timestamp_ms = now_ms;
            }

            if scroll_top >= max_top {
                let drift = abs(next.init_scroll_top - scroll_top);
                if drift > tuning.snap_drift_px || abs_delta > tuning.snap_delta_px {
                    if is_scrolling_down {
                        top = max_top;
                    } else if scroll_top >= collapse {
                        top = if config.floors_at_collapse() {
                            collapse
                        } else {
                            0.0
                        };
                    }
                    let elapsed_ms = now_ms.saturating_sub(self.last_timestamp_ms);
                    transition_ms = Some(snap_duration_ms(
                        top - last_top,
                        delta,
                        elapsed_ms,
                        tuning.max_snap_transition_ms,
                    ));
                } else {
                    top = clamp(self.top, 0.0, max_top);
                }
            }
        }

        // A disabled header never animates, including the forced steps of a re-measurement.
        if config.disabled {
            transition_ms = Some(0.0);
        }

        let progress = if collapse == 0.0 {
            if scroll_top > 0.0 { 1.0 } else { 0.0 }
        } else {
            top / collapse
        };

        if !force {
            next.last_scroll_top = scroll_top;
            next.top = top;
            next.was_scrolling_down = is_scrolling_down;
            next.last_timestamp_ms = now_ms;
        }

        // The bar hangs from the bottom edge: a positive retraction is a negative offset, and
        // the resting state is exactly zero.
        let offset = if top == 0.0 || scroll_top == 0.0 {
            0.0
        } else {
            -top
        };

        let committed = force
            || progress != self.progress
            || offset != self.committed_offset
            || scroll_top == 0.0;
        if committed {
            next.progress = progress;
            next.committed_offset = offset;
        }

        ntrace!(
            scroll_top,
            top,
            progress,
            committed,
            force,
            "ScrollState::advance"
        );

        Some(ScrollStep {
            state: next,
            top,
            offset,
            progress,
            transition_ms,
            committed,
        })
    }
}

/// The result of one [`ScrollState::advance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStep {
    pub state: ScrollState,
    /// The header top computed for this sample (persisted only for non-forced steps).
    pub top: f64,
    /// Signed offset for the transform and effect stage.
    pub offset: f64,
    pub progress: f64,
    /// Transition duration to apply before the next transform, if this sample set one.
    ///
    /// Always `Some(0.0)` while the header is disabled.
    pub transition_ms: Option<f64>,
    /// Whether effects and the transform must be re-applied.
    pub committed: bool,
}

/// Duration that moves the header `distance` at the scroll's own speed.
///
/// A zero time delta or a zero/non-finite velocity snaps instantly.
pub fn snap_duration_ms(distance: f64, scroll_delta: f64, elapsed_ms: u64, max_ms: f64) -> f64 {
    if elapsed_ms == 0 || scroll_delta == 0.0 {
        return 0.0;
    }
    let velocity = scroll_delta / elapsed_ms as f64;
    let duration = distance / velocity;
    if !duration.is_finite() {
        return 0.0;
    }
    clamp(duration, 0.0, max_ms)
}

/// Builds the container and sticky-child translation for a signed `offset`.
///
/// The sticky child rides with the header only once the offset passes its own top; otherwise
/// it is parked at `bottom` (off-screen).
pub fn header_transform(
    offset: f64,
    geometry: &Geometry,
    config: &NavConfig,
    sticky: Option<ChildId>,
    bottom: f64,
) -> HeaderTransform {
    let sticky = sticky.map(|id| {
        let translate_y = if config.condenses && offset >= geometry.sticky_top {
            offset.min(geometry.collapse_distance) - geometry.sticky_top
        } else {
            bottom
        };
        StickyTransform { id, translate_y }
    });
    HeaderTransform {
        translate_y: if offset == 0.0 { 0.0 } else { -offset },
        sticky,
    }
}

pub(crate) fn clamp(v: f64, min: f64, max: f64) -> f64 {
    v.max(min).min(max)
}

fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}
