use alloc::string::String;
use alloc::vec::Vec;

use bottom_nav::Deferred;

use crate::select::shift_after_removal;
use crate::{
    BottomTab, FocusManaged, Selectable, SelectableList, TabMessage, TapEvent, ToolbarHost,
    ToolbarOptions,
};

/// Keys the strip reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Left,
    Right,
    Enter,
    Space,
    Other,
}

/// A headless tab strip for a bottom navigation bar.
///
/// Selection and focus are delegated to a [`SelectableList`]; the strip adds what is specific
/// to a bottom toolbar:
/// - ripple and class mirroring driven by [`TabMessage`]s from its tabs
/// - keyboard auto-select with a single, cancellable delayed activation
/// - `noink`/`fixed` propagation to the tabs
///
/// Timers are driven by the host through [`BottomToolbar::tick`].
#[derive(Clone, Debug)]
pub struct BottomToolbar {
    options: ToolbarOptions,
    tabs: Vec<BottomTab>,
    list: SelectableList,
    selected_class: Option<String>,
    previous_tab: Option<usize>,
    pending_activation: Deferred<usize>,
    deselect: Deferred,
    sizing: Deferred,
    parent_fixed: bool,
    attached: bool,
}

impl BottomToolbar {
    pub fn new(options: ToolbarOptions, tabs: Vec<BottomTab>) -> Self {
        let mut list = SelectableList::new(tabs.len());
        if let Some(index) = options.selected {
            list.select(index);
        }
        let mut toolbar = Self {
            options,
            tabs,
            list,
            selected_class: None,
            previous_tab: list.selected(),
            pending_activation: Deferred::new(),
            deselect: Deferred::new(),
            sizing: Deferred::new(),
            parent_fixed: false,
            attached: false,
        };
        toolbar.set_noink(options.noink);
        toolbar
    }

    pub fn options(&self) -> &ToolbarOptions {
        &self.options
    }

    pub fn role(&self) -> &'static str {
        "tablist"
    }

    pub fn tabs(&self) -> &[BottomTab] {
        &self.tabs
    }

    pub fn tab(&self, index: usize) -> Option<&BottomTab> {
        self.tabs.get(index)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list.selected()
    }

    pub fn focused(&self) -> Option<usize> {
        self.list.focused()
    }

    /// The CSS class currently mirrored from the selected tab.
    pub fn selected_class(&self) -> Option<&str> {
        self.selected_class.as_deref()
    }

    pub fn pending_activation(&self) -> Option<usize> {
        self.pending_activation.pending().copied()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attaches the strip inside a navigation bar whose `fixed` flag is `parent_fixed`.
    pub fn attach<H: ToolbarHost + ?Sized>(&mut self, host: &mut H, parent_fixed: bool) {
        self.attached = true;
        self.set_parent_fixed(parent_fixed);
        tdebug!(
            tabs = self.tabs.len(),
            selected = ?self.list.selected(),
            parent_fixed,
            "BottomToolbar::attach"
        );

        let class_name = self
            .list
            .selected()
            .and_then(|i| self.tabs.get(i))
            .and_then(|t| t.selected_class.clone());
        if let Some(class_name) = class_name.filter(|c| !c.is_empty()) {
            self.update_class(host, class_name);
        }
    }

    pub fn detach(&mut self) {
        self.attached = false;
        self.cancel_pending_activation();
    }

    pub fn set_noink(&mut self, noink: bool) {
        self.options.noink = noink;
        for tab in &mut self.tabs {
            tab.parent_noink = noink;
        }
    }

    pub fn set_parent_fixed(&mut self, fixed: bool) {
        self.parent_fixed = fixed;
        for tab in &mut self.tabs {
            tab.fixed = fixed;
        }
    }

    pub fn set_autoselect(&mut self, autoselect: bool, delay_ms: u64) {
        self.options.autoselect = autoselect;
        self.options.autoselect_delay_ms = delay_ms;
    }

    /// Appends a tab. Sizing observers are notified after a quiet period.
    pub fn push_tab(&mut self, mut tab: BottomTab, now_ms: u64) {
        tab.parent_noink = self.options.noink;
        tab.fixed = self.parent_fixed;
        self.tabs.push(tab);
        self.list.set_len(self.tabs.len());
        self.notify_sizing_changed(now_ms);
    }

    /// Removes the tab at `index`.
    ///
    /// A selection, focus or pending activation on the removed tab is dropped; indexes past it
    /// shift down so they keep pointing at the same tabs.
    pub fn remove_tab<H: ToolbarHost + ?Sized>(
        &mut self,
        host: &mut H,
        index: usize,
        now_ms: u64,
    ) -> Option<BottomTab> {
        if index >= self.tabs.len() {
            twarn!(index, len = self.tabs.len(), "BottomToolbar: out-of-bounds tab removal");
            return None;
        }
        if self.list.selected() == Some(index) {
            self.clear_selection(host, now_ms);
        }
        let due = self.pending_activation.due_ms();
        if let (Some(target), Some(due)) = (self.pending_activation.cancel(), due) {
            if let Some(target) = shift_after_removal(Some(target), index) {
                self.pending_activation.schedule(due, 0, target);
            }
        }
        self.previous_tab = shift_after_removal(self.previous_tab, index);

        let removed = self.tabs.remove(index);
        self.list.remove(index);
        self.notify_sizing_changed(now_ms);
        Some(removed)
    }

    pub fn notify_sizing_changed(&mut self, now_ms: u64) {
        self.sizing
            .schedule(now_ms, self.options.sizing_debounce_ms, ());
    }

    /// Selects the tab at `index`.
    pub fn select<H: ToolbarHost + ?Sized>(&mut self, host: &mut H, index: usize, now_ms: u64) {
        if index >= self.tabs.len() {
            twarn!(index, len = self.tabs.len(), "BottomToolbar: out-of-bounds selection");
            return;
        }
        let change = self.list.select(index);
        if !change.changed() {
            return;
        }
        if change.previous.is_some() {
            self.on_deselect(now_ms);
        }
        self.on_select(index);
        host.selection_changed(change);
    }

    pub fn clear_selection<H: ToolbarHost + ?Sized>(&mut self, host: &mut H, now_ms: u64) {
        let change = self.list.clear_selection();
        if !change.changed() {
            return;
        }
        self.on_deselect(now_ms);
        host.selection_changed(change);
    }

    fn on_select(&mut self, index: usize) {
        self.previous_tab = Some(index);
        self.deselect.cancel();
    }

    fn on_deselect(&mut self, now_ms: u64) {
        self.deselect
            .schedule(now_ms, self.options.deselect_debounce_ms, ());
    }

    /// Activates the tab at `index`, cancelling any activation scheduled from the keyboard.
    pub fn activate<H: ToolbarHost + ?Sized>(&mut self, host: &mut H, index: usize, now_ms: u64) {
        self.cancel_pending_activation();
        ttrace!(index, now_ms, "BottomToolbar::activate");
        self.select(host, index, now_ms);
    }

    /// Handles a pointer tap on the tab at `index`.
    pub fn tap<H: ToolbarHost + ?Sized>(
        &mut self,
        host: &mut H,
        index: usize,
        event: TapEvent,
        now_ms: u64,
    ) {
        let Some(tab) = self.tabs.get(index) else {
            twarn!(index, len = self.tabs.len(), "BottomToolbar: tap on unknown tab");
            return;
        };
        let outcome = tab.tap(event, self.list.selected() == Some(index));
        if outcome.click_anchor {
            host.click_anchor(index);
        }
        for message in outcome.messages {
            self.handle_message(host, message);
        }
        self.list.focus(index);
        self.activate(host, index, now_ms);
    }

    /// Applies a message sent by one of the tabs.
    pub fn handle_message<H: ToolbarHost + ?Sized>(&mut self, host: &mut H, message: TabMessage) {
        match message {
            TabMessage::ActivationRipple { x, y } => {
                host.ripple_down(x, y);
                host.ripple_up();
            }
            TabMessage::SelectedClassUpdate { class_name } => {
                let Some(class_name) = class_name.filter(|c| !c.is_empty()) else {
                    return;
                };
                if self.selected_class.as_deref() != Some(class_name.as_str()) {
                    self.update_class(host, class_name);
                }
            }
        }
    }

    fn update_class<H: ToolbarHost + ?Sized>(&mut self, host: &mut H, class_name: String) {
        host.swap_class(self.selected_class.as_deref(), &class_name);
        self.selected_class = Some(class_name);
    }

    pub fn key_down<H: ToolbarHost + ?Sized>(&mut self, host: &mut H, key: Key, now_ms: u64) {
        let forward = match key {
            Key::Left => self.options.rtl,
            Key::Right => !self.options.rtl,
            Key::Enter | Key::Space => {
                if let Some(index) = self.list.focused() {
                    self.activate(host, index, now_ms);
                }
                return;
            }
            Key::Other => return,
        };
        if forward {
            self.list.focus_next();
        } else {
            self.list.focus_previous();
        }
    }

    pub fn key_up(&mut self, key: Key, now_ms: u64) {
        if !matches!(key, Key::Left | Key::Right) || !self.options.autoselect {
            return;
        }
        if let Some(index) = self.list.focused() {
            self.schedule_activation(index, now_ms, self.options.autoselect_delay_ms);
        }
    }

    /// Activates `index` after `delay_ms`, replacing any activation already scheduled.
    pub fn schedule_activation(&mut self, index: usize, now_ms: u64, delay_ms: u64) {
        let replaced = self.pending_activation.schedule(now_ms, delay_ms, index);
        if replaced.is_some() {
            ttrace!(?replaced, index, "BottomToolbar: pending activation replaced");
        }
    }

    /// Cancels the scheduled activation. Returns `false` if nothing was scheduled.
    pub fn cancel_pending_activation(&mut self) -> bool {
        self.pending_activation.cancel().is_some()
    }

    /// Focus left the tab at `index`.
    pub fn blur(&mut self, index: usize) {
        if self.pending_activation() == Some(index) {
            self.cancel_pending_activation();
        }
        if self.list.focused() == Some(index) {
            self.list.blur();
        }
    }

    /// Runs every timer that is due at `now_ms`.
    pub fn tick<H: ToolbarHost + ?Sized>(&mut self, host: &mut H, now_ms: u64) {
        if let Some(index) = self.pending_activation.poll(now_ms) {
            ttrace!(index, now_ms, "BottomToolbar: delayed activation");
            self.activate(host, index, now_ms);
        }
        if self.deselect.poll(now_ms).is_some() {
            let previous = self.previous_tab.take();
            host.tab_changed(None, previous);
        }
        if self.sizing.poll(now_ms).is_some() {
            host.tabs_resized();
        }
    }
}
