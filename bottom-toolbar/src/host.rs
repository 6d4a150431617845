use crate::SelectionChange;

/// Everything the tab strip asks of its host. All methods default to no-ops.
pub trait ToolbarHost {
    /// Starts a ripple on the strip's ripple surface.
    fn ripple_down(&mut self, _x: f64, _y: f64) {}

    fn ripple_up(&mut self) {}

    /// Replaces the mirrored CSS class `old` with `new`.
    fn swap_class(&mut self, _old: Option<&str>, _new: &str) {}

    /// Forwards a click to the anchor inside the tab at `index`.
    fn click_anchor(&mut self, _index: usize) {}

    fn selection_changed(&mut self, _change: SelectionChange) {}

    /// Fired once a deselection has settled without a following reselection.
    fn tab_changed(&mut self, _current: Option<usize>, _previous: Option<usize>) {}

    /// Fired after a burst of tab sizing changes has settled.
    fn tabs_resized(&mut self) {}
}
