use alloc::string::String;
use alloc::vec::Vec;

/// A message from a tab to the strip that owns it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TabMessage {
    /// Show a ripple at the pointer position.
    ActivationRipple { x: f64, y: f64 },
    /// Mirror the tab's CSS class onto the strip.
    SelectedClassUpdate { class_name: Option<String> },
}

/// A pointer activation on a tab.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TapEvent {
    pub x: f64,
    pub y: f64,
    /// The tap originated on the tab's own anchor.
    pub on_anchor: bool,
}

impl TapEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            on_anchor: false,
        }
    }
}

/// What a tab wants done in response to a tap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TapOutcome {
    /// Forward the activation to the tab's anchor.
    pub click_anchor: bool,
    pub messages: Vec<TabMessage>,
}

/// A single tab of a [`crate::BottomToolbar`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BottomTab {
    pub label: Option<String>,
    /// Keep the label visible while the tab is not selected.
    pub show_label: bool,
    pub icon: Option<String>,
    /// Forward activations to the anchor child.
    pub link: bool,
    /// The tab contains an anchor element.
    pub has_anchor: bool,
    /// CSS class mirrored onto the strip while this tab is selected.
    pub selected_class: Option<String>,
    pub noink: bool,
    pub(crate) parent_noink: bool,
    pub(crate) fixed: bool,
}

impl BottomTab {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_show_label(mut self, show_label: bool) -> Self {
        self.show_label = show_label;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Makes the tab a link; `has_anchor` tells whether it actually contains one.
    pub fn with_link(mut self, has_anchor: bool) -> Self {
        self.link = true;
        self.has_anchor = has_anchor;
        self
    }

    pub fn with_selected_class(mut self, class_name: impl Into<String>) -> Self {
        self.selected_class = Some(class_name.into());
        self
    }

    pub fn with_noink(mut self, noink: bool) -> Self {
        self.noink = noink;
        self
    }

    pub fn role(&self) -> &'static str {
        "tab"
    }

    /// No ripple when either the tab or its strip disables ink.
    pub fn is_noink(&self) -> bool {
        self.noink || self.parent_noink
    }

    /// Mirrors the `fixed` flag of the enclosing navigation bar.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn tap(&self, event: TapEvent, is_selected: bool) -> TapOutcome {
        let mut outcome = TapOutcome::default();

        if self.link {
            // A tap delegated back from the anchor must not loop.
            if !self.has_anchor || event.on_anchor {
                return outcome;
            }
            outcome.click_anchor = true;
        }

        if !is_selected && !self.is_noink() {
            outcome.messages.push(TabMessage::ActivationRipple {
                x: event.x,
                y: event.y,
            });
            outcome.messages.push(TabMessage::SelectedClassUpdate {
                class_name: self.selected_class.clone(),
            });
        }
        outcome
    }
}
