use crate::{HeaderTransform, LayoutMeasurer};

/// Presentation effects driven by scroll progress (shadow opacity, parallax backgrounds, ...).
///
/// The navigation container only computes the inputs; what an effect does with them is up to
/// the implementation.
pub trait ScrollEffectRunner {
    /// Called during every re-measurement, before the refreshed state is applied.
    fn set_up_effects(&mut self) {}

    /// Called on every committed frame with the condensation progress and the signed offset.
    fn run_effects(&mut self, progress: f64, offset: f64);
}

/// Everything the navigation container needs from its host.
pub trait NavSurface: LayoutMeasurer + ScrollEffectRunner {
    fn apply_transform(&mut self, transform: &HeaderTransform);

    fn set_transition_duration_ms(&mut self, duration_ms: f64);

    /// Reflects the `shadow` flag; called only when it changes.
    fn set_shadow(&mut self, _shadow: bool) {}

    /// Called after a re-measurement has completed.
    fn layout_changed(&mut self) {}
}
