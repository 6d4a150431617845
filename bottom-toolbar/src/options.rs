/// Configuration for [`crate::BottomToolbar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolbarOptions {
    /// Disables ripples for every tab.
    pub noink: bool,
    /// Select tabs automatically when focused with the keyboard.
    pub autoselect: bool,
    /// Delay between the last arrow key release and the automatic selection.
    pub autoselect_delay_ms: u64,
    /// Right-to-left layout: arrow keys move focus the other way.
    pub rtl: bool,
    pub selected: Option<usize>,
    /// Quiet period before a deselection without a reselection is reported.
    pub deselect_debounce_ms: u64,
    /// Quiet period before tab sizing changes are reported.
    pub sizing_debounce_ms: u64,
}

impl Default for ToolbarOptions {
    fn default() -> Self {
        Self {
            noink: false,
            autoselect: false,
            autoselect_delay_ms: 0,
            rtl: false,
            selected: None,
            deselect_debounce_ms: 1,
            sizing_debounce_ms: 10,
        }
    }
}

impl ToolbarOptions {
    pub fn with_noink(mut self, noink: bool) -> Self {
        self.noink = noink;
        self
    }

    pub fn with_autoselect(mut self, autoselect: bool, delay_ms: u64) -> Self {
        self.autoselect = autoselect;
        self.autoselect_delay_ms = delay_ms;
        self
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn with_selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}
