use crate::layout::{StickyLocator, measure};
use crate::state::{Geometry, ScrollSample, ScrollState, header_transform};
use crate::{Deferred, NavConfig, NavOptions, NavSurface, ScrollSnapshot};

/// A headless, scroll-reactive bottom navigation container.
///
/// The container holds no UI objects. Your adapter drives it:
/// - `attach`/`detach` when the bar enters or leaves the layout
/// - `on_scroll(surface, scroll_top, now_ms)` for every scroll sample, in arrival order
/// - `notify_resize(now_ms)` on resize/content changes, and `tick(surface, now_ms)` from a
///   timer or frame callback so the debounced re-measurement can run
///
/// Output goes to the [`NavSurface`]: transition durations, effect inputs, transforms and
/// the reflected `shadow` flag.
#[derive(Clone, Debug)]
pub struct BottomNav {
    options: NavOptions,
    attached: bool,
    geometry: Geometry,
    sticky: StickyLocator,
    state: ScrollState,
    scroll_position: f64,
    shadow: bool,
    resize: Deferred,
}

impl BottomNav {
    pub fn new(options: NavOptions) -> Self {
        let state = ScrollState::new(options.provisional_top());
        ndebug!(
            viewport_height = options.viewport_height,
            condenses = options.config.condenses,
            fixed = options.config.fixed,
            reveals = options.config.reveals,
            "BottomNav::new"
        );
        Self {
            options,
            attached: false,
            geometry: Geometry::default(),
            sticky: StickyLocator::new(),
            state,
            scroll_position: 0.0,
            shadow: false,
            resize: Deferred::new(),
        }
    }

    pub fn options(&self) -> &NavOptions {
        &self.options
    }

    pub fn config(&self) -> NavConfig {
        self.options.config
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The full internal state of the scroll state machine.
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The most recently observed scroll position.
    pub fn scroll_position(&self) -> f64 {
        self.scroll_position
    }

    pub fn shadow(&self) -> bool {
        self.shadow
    }

    pub fn attach<S: NavSurface + ?Sized>(&mut self, surface: &mut S) {
        self.set_attached(surface, true);
    }

    pub fn detach<S: NavSurface + ?Sized>(&mut self, surface: &mut S) {
        self.set_attached(surface, false);
    }

    pub fn set_attached<S: NavSurface + ?Sized>(&mut self, surface: &mut S, attached: bool) {
        if self.attached == attached {
            return;
        }
        self.attached = attached;
        if !attached {
            self.resize.cancel();
        }
        self.config_changed(surface);
    }

    pub fn set_condenses<S: NavSurface + ?Sized>(&mut self, surface: &mut S, condenses: bool) {
        if self.options.config.condenses == condenses {
            return;
        }
        self.options.config.condenses = condenses;
        self.config_changed(surface);
    }

    pub fn set_fixed<S: NavSurface + ?Sized>(&mut self, surface: &mut S, fixed: bool) {
        if self.options.config.fixed == fixed {
            return;
        }
        self.options.config.fixed = fixed;
        self.config_changed(surface);
    }

    pub fn set_reveals(&mut self, reveals: bool) {
        self.options.config.reveals = reveals;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.config.disabled = disabled;
    }

    /// Replaces the options, re-measuring when `condenses` or `fixed` changed.
    pub fn set_options<S: NavSurface + ?Sized>(&mut self, surface: &mut S, options: NavOptions) {
        let prev = self.options.config;
        self.options = options;
        if prev.condenses != self.options.config.condenses || prev.fixed != self.options.config.fixed
        {
            self.config_changed(surface);
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options<S: NavSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        f: impl FnOnce(&mut NavOptions),
    ) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(surface, next);
    }

    fn config_changed<S: NavSurface + ?Sized>(&mut self, surface: &mut S) {
        ndebug!(
            attached = self.attached,
            condenses = self.options.config.condenses,
            fixed = self.options.config.fixed,
            "BottomNav::config_changed"
        );
        if self.reset_layout(surface) {
            surface.layout_changed();
        }
    }

    /// Schedules a debounced re-measurement; later notifications push it back.
    pub fn notify_resize(&mut self, now_ms: u64) {
        if !self.attached {
            return;
        }
        self.resize
            .schedule(now_ms, self.options.resize_debounce_ms, ());
    }

    pub fn is_resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Runs the debounced re-measurement if it is due. Returns `true` when it ran.
    pub fn tick<S: NavSurface + ?Sized>(&mut self, surface: &mut S, now_ms: u64) -> bool {
        if self.resize.poll(now_ms).is_none() {
            return false;
        }
        let ran = self.reset_layout(surface);
        if ran {
            surface.layout_changed();
        }
        ran
    }

    /// Re-measures the container and refreshes the visual state.
    ///
    /// Skipped while detached or while the container occupies no box. Returns `true` when the
    /// re-measurement ran. Every step applied meanwhile carries a zero transition duration.
    pub fn reset_layout<S: NavSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.attached {
            return false;
        }
        let size = surface.box_size();
        if size.is_empty() {
            ndebug!("BottomNav::reset_layout deferred: empty box");
            return false;
        }

        let scroll_top = self.scroll_position;
        let first_setup = !self.geometry.is_measured() || scroll_top == 0.0;
        let was_disabled = self.options.config.disabled;
        let now_ms = self.state.last_timestamp_ms;

        self.geometry.height = size.height;
        self.sticky.invalidate();
        self.options.config.disabled = true;

        // Measure with the header at rest.
        if !first_setup {
            self.apply_sample(surface, ScrollSample::new(0.0, now_ms), true);
        }

        let m = measure(&*surface, &mut self.sticky);
        self.geometry = Geometry::from_measurement(m, &self.options.config);
        ndebug!(
            height = self.geometry.height,
            collapse_distance = self.geometry.collapse_distance,
            sticky_top = self.geometry.sticky_top,
            first_setup,
            "BottomNav::reset_layout"
        );

        surface.set_up_effects();

        let target = if first_setup {
            scroll_top
        } else {
            self.state.last_scroll_top
        };
        self.apply_sample(surface, ScrollSample::new(target, now_ms), true);

        self.options.config.disabled = was_disabled;
        true
    }

    /// Feeds one scroll sample. Returns `true` when a frame was committed.
    ///
    /// A due re-measurement runs first, so the sample is always processed against complete
    /// geometry.
    pub fn on_scroll<S: NavSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        scroll_top: f64,
        now_ms: u64,
    ) -> bool {
        self.tick(surface, now_ms);
        self.scroll_position = scroll_top;
        self.apply_sample(surface, ScrollSample::new(scroll_top, now_ms), false)
    }

    /// Re-applies the current scroll position without moving the baseline.
    pub fn refresh<S: NavSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let sample = ScrollSample::new(self.scroll_position, self.state.last_timestamp_ms);
        self.apply_sample(surface, sample, true)
    }

    fn apply_sample<S: NavSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        sample: ScrollSample,
        force: bool,
    ) -> bool {
        let Some(step) = self.state.advance(
            &self.geometry,
            &self.options.config,
            &self.options.tuning,
            sample,
            force,
        ) else {
            return false;
        };
        self.state = step.state;

        if let Some(duration_ms) = step.transition_ms {
            surface.set_transition_duration_ms(duration_ms);
        }

        if step.committed {
            surface.run_effects(step.progress, step.offset);
            let sticky = self.sticky.locate(surface.children()).map(|c| c.id);
            let transform = header_transform(
                step.offset,
                &self.geometry,
                &self.options.config,
                sticky,
                self.options.viewport_height,
            );
            surface.apply_transform(&transform);
            if let Some(cb) = &self.options.on_commit {
                cb(self.scroll_state());
            }
        }

        self.sync_shadow(surface);
        step.committed
    }

    fn sync_shadow<S: NavSurface + ?Sized>(&mut self, surface: &mut S) {
        let shadow = self.is_content_below();
        if shadow != self.shadow {
            self.shadow = shadow;
            surface.set_shadow(shadow);
        }
    }

    /// `true` if the header may move as the user scrolls.
    pub fn may_move(&self) -> bool {
        self.options.config.may_move()
    }

    /// `true` if the header condenses given its measured size and `condenses`.
    pub fn will_condense(&self) -> bool {
        self.geometry.collapse_distance > 0.0 && self.options.config.condenses
    }

    /// `true` if the bar is at least partially inside the viewport.
    ///
    /// Until the first scroll sample the header top is the provisional one (the viewport height
    /// by default), so a freshly attached bar reports `false` even while it rests on screen.
    /// Use [`NavOptions::with_initial_top`] to start from a different top.
    pub fn is_on_screen(&self) -> bool {
        self.geometry.height != 0.0 && self.state.top < self.geometry.height
    }

    /// `true` if there is content scrolled underneath the bar.
    pub fn is_content_below(&self) -> bool {
        if self.state.top == 0.0 {
            return self.scroll_position > 0.0;
        }
        self.scroll_position - self.max_top() >= 0.0
    }

    pub fn max_top(&self) -> f64 {
        self.geometry
            .max_top(&self.options.config, &self.options.tuning)
    }

    /// The committed condensation progress and header top.
    ///
    /// `top` stays at the provisional value, which may lie outside `[0, max_top]`, until the
    /// first scroll sample is persisted; forced steps during a re-measurement do not move it.
    pub fn scroll_state(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            progress: self.state.progress,
            top: self.state.top,
        }
    }
}
