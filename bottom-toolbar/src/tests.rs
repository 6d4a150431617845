use crate::*;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[derive(Debug, Default)]
struct Host {
    ripples: Vec<(f64, f64)>,
    ripple_ups: usize,
    classes: Vec<(Option<String>, String)>,
    anchor_clicks: Vec<usize>,
    changes: Vec<SelectionChange>,
    tab_changes: Vec<(Option<usize>, Option<usize>)>,
    resized: usize,
}

impl ToolbarHost for Host {
    fn ripple_down(&mut self, x: f64, y: f64) {
        self.ripples.push((x, y));
    }

    fn ripple_up(&mut self) {
        self.ripple_ups += 1;
    }

    fn swap_class(&mut self, old: Option<&str>, new: &str) {
        self.classes.push((old.map(ToString::to_string), new.to_string()));
    }

    fn click_anchor(&mut self, index: usize) {
        self.anchor_clicks.push(index);
    }

    fn selection_changed(&mut self, change: SelectionChange) {
        self.changes.push(change);
    }

    fn tab_changed(&mut self, current: Option<usize>, previous: Option<usize>) {
        self.tab_changes.push((current, previous));
    }

    fn tabs_resized(&mut self) {
        self.resized += 1;
    }
}

fn tabs() -> Vec<BottomTab> {
    alloc::vec![
        BottomTab::new().with_label("Home").with_icon("icons:home").with_selected_class("home"),
        BottomTab::new().with_label("Favorites").with_selected_class("favorites"),
        BottomTab::new().with_label("Recent"),
    ]
}

#[test]
fn selectable_list_wraps_focus() {
    let mut list = SelectableList::new(3);
    assert_eq!(list.focus_next(), Some(0));
    assert_eq!(list.focus_previous(), Some(2));
    assert_eq!(list.focus_next(), Some(0));

    list.blur();
    list.select(1);
    assert_eq!(list.focus_next(), Some(2));

    assert!(!list.focus(3));
    assert_eq!(SelectableList::new(0).focus_next(), None);
}

#[test]
fn selectable_list_ignores_out_of_range_and_shrinks() {
    let mut list = SelectableList::new(2);
    let change = list.select(5);
    assert!(!change.changed());
    assert_eq!(list.selected(), None);

    list.select(1);
    list.focus(1);
    list.set_len(1);
    assert_eq!(list.selected(), None);
    assert_eq!(list.focused(), None);
    assert!(!list.is_empty());
}

#[test]
fn tab_tap_emits_ripple_and_class_when_unselected() {
    let tab = BottomTab::new().with_selected_class("home");
    let outcome = tab.tap(TapEvent::at(3.0, 4.0), false);
    assert!(!outcome.click_anchor);
    assert_eq!(
        outcome.messages,
        [
            TabMessage::ActivationRipple { x: 3.0, y: 4.0 },
            TabMessage::SelectedClassUpdate {
                class_name: Some("home".to_string()),
            },
        ]
    );

    assert!(tab.tap(TapEvent::at(3.0, 4.0), true).messages.is_empty());
    assert!(
        tab.clone()
            .with_noink(true)
            .tap(TapEvent::at(3.0, 4.0), false)
            .messages
            .is_empty()
    );
    assert_eq!(tab.role(), "tab");
}

#[test]
fn link_tab_forwards_to_anchor_without_looping() {
    let tab = BottomTab::new().with_link(true);
    let outcome = tab.tap(TapEvent::at(1.0, 1.0), false);
    assert!(outcome.click_anchor);
    assert_eq!(outcome.messages.len(), 2);

    let from_anchor = TapEvent {
        on_anchor: true,
        ..TapEvent::at(1.0, 1.0)
    };
    assert_eq!(tab.tap(from_anchor, false), TapOutcome::default());

    let no_anchor = BottomTab::new().with_link(false);
    assert_eq!(no_anchor.tap(TapEvent::at(1.0, 1.0), false), TapOutcome::default());
}

#[test]
fn tap_ripples_mirrors_class_and_selects() {
    let mut host = Host::default();
    let mut toolbar = BottomToolbar::new(ToolbarOptions::default(), tabs());
    toolbar.attach(&mut host, false);

    toolbar.tap(&mut host, 1, TapEvent::at(10.0, 20.0), 0);
    assert_eq!(host.ripples, [(10.0, 20.0)]);
    assert_eq!(host.ripple_ups, 1);
    assert_eq!(host.classes, [(None, "favorites".to_string())]);
    assert_eq!(toolbar.selected(), Some(1));
    assert_eq!(toolbar.focused(), Some(1));
    assert_eq!(toolbar.selected_class(), Some("favorites"));

    // Tapping the selected tab again does nothing visible.
    toolbar.tap(&mut host, 1, TapEvent::at(10.0, 20.0), 5);
    assert_eq!(host.ripples.len(), 1);
    assert_eq!(host.changes.len(), 1);

    // A tab without a class keeps the mirrored one.
    toolbar.tap(&mut host, 2, TapEvent::at(0.0, 0.0), 10);
    assert_eq!(host.classes.len(), 1);
    assert_eq!(toolbar.selected_class(), Some("favorites"));

    toolbar.tap(&mut host, 0, TapEvent::at(0.0, 0.0), 15);
    assert_eq!(
        host.classes.last(),
        Some(&(Some("favorites".to_string()), "home".to_string()))
    );
}

#[test]
fn link_taps_click_the_anchor_and_still_select() {
    let mut host = Host::default();
    let mut toolbar = BottomToolbar::new(
        ToolbarOptions::default(),
        alloc::vec![BottomTab::new(), BottomTab::new().with_link(true)],
    );

    toolbar.tap(&mut host, 1, TapEvent::at(2.0, 2.0), 0);
    assert_eq!(host.anchor_clicks, [1]);
    assert_eq!(toolbar.selected(), Some(1));

    let from_anchor = TapEvent {
        on_anchor: true,
        ..TapEvent::at(2.0, 2.0)
    };
    toolbar.tap(&mut host, 1, from_anchor, 5);
    assert_eq!(host.anchor_clicks.len(), 1);

    toolbar.tap(&mut host, 9, TapEvent::at(0.0, 0.0), 10);
    assert_eq!(toolbar.selected(), Some(1));
}

#[test]
fn attach_mirrors_initial_selection_and_parent_fixed() {
    let mut host = Host::default();
    let mut toolbar =
        BottomToolbar::new(ToolbarOptions::default().with_selected(Some(0)), tabs());
    toolbar.attach(&mut host, true);

    assert_eq!(host.classes, [(None, "home".to_string())]);
    assert!(toolbar.tabs().iter().all(BottomTab::is_fixed));
    assert_eq!(toolbar.role(), "tablist");

    toolbar.push_tab(BottomTab::new(), 0);
    assert!(toolbar.tab(3).is_some_and(BottomTab::is_fixed));
}

#[test]
fn noink_propagates_to_tabs() {
    let mut host = Host::default();
    let mut toolbar = BottomToolbar::new(ToolbarOptions::default().with_noink(true), tabs());
    assert!(toolbar.tabs().iter().all(BottomTab::is_noink));

    toolbar.tap(&mut host, 1, TapEvent::at(1.0, 1.0), 0);
    assert!(host.ripples.is_empty());
    assert_eq!(toolbar.selected(), Some(1));

    toolbar.set_noink(false);
    assert!(!toolbar.tabs().iter().any(BottomTab::is_noink));
}

#[test]
fn two_quick_activations_fire_once() {
    let mut host = Host::default();
    let mut toolbar =
        BottomToolbar::new(ToolbarOptions::default().with_autoselect(true, 50), tabs());
    toolbar.attach(&mut host, false);

    toolbar.key_down(&mut host, Key::Right, 0);
    toolbar.key_up(Key::Right, 0);
    toolbar.key_down(&mut host, Key::Right, 10);
    toolbar.key_up(Key::Right, 10);
    assert_eq!(toolbar.pending_activation(), Some(1));

    toolbar.tick(&mut host, 50);
    assert!(host.changes.is_empty());
    toolbar.tick(&mut host, 60);
    toolbar.tick(&mut host, 200);

    assert_eq!(
        host.changes,
        [SelectionChange {
            previous: None,
            current: Some(1),
        }]
    );
    assert_eq!(toolbar.pending_activation(), None);
}

#[test]
fn keyboard_without_autoselect_only_moves_focus() {
    let mut host = Host::default();
    let mut toolbar = BottomToolbar::new(ToolbarOptions::default(), tabs());

    toolbar.key_down(&mut host, Key::Left, 0);
    toolbar.key_up(Key::Left, 0);
    assert_eq!(toolbar.focused(), Some(0));
    toolbar.key_down(&mut host, Key::Left, 0);
    assert_eq!(toolbar.focused(), Some(2));
    assert_eq!(toolbar.pending_activation(), None);

    toolbar.key_down(&mut host, Key::Enter, 5);
    assert_eq!(toolbar.selected(), Some(2));
}

#[test]
fn rtl_reverses_arrow_keys() {
    let mut host = Host::default();
    let mut toolbar = BottomToolbar::new(
        ToolbarOptions::default()
            .with_rtl(true)
            .with_selected(Some(1)),
        tabs(),
    );
    toolbar.key_down(&mut host, Key::Right, 0);
    assert_eq!(toolbar.focused(), Some(0));
    toolbar.key_down(&mut host, Key::Left, 0);
    toolbar.key_down(&mut host, Key::Left, 0);
    assert_eq!(toolbar.focused(), Some(2));
}

#[test]
fn pending_activation_is_cancelled_by_blur_tap_and_detach() {
    let mut host = Host::default();
    let mut toolbar =
        BottomToolbar::new(ToolbarOptions::default().with_autoselect(true, 50), tabs());

    toolbar.schedule_activation(2, 0, 50);
    toolbar.blur(1);
    assert_eq!(toolbar.pending_activation(), Some(2));
    toolbar.blur(2);
    assert_eq!(toolbar.pending_activation(), None);
    assert!(!toolbar.cancel_pending_activation());

    toolbar.schedule_activation(2, 0, 50);
    toolbar.tap(&mut host, 0, TapEvent::at(0.0, 0.0), 10);
    toolbar.tick(&mut host, 100);
    assert_eq!(toolbar.selected(), Some(0));

    toolbar.schedule_activation(2, 100, 50);
    toolbar.detach();
    toolbar.tick(&mut host, 200);
    assert_eq!(toolbar.selected(), Some(0));
}

#[test]
fn deselect_settles_only_without_reselect() {
    let mut host = Host::default();
    let mut toolbar =
        BottomToolbar::new(ToolbarOptions::default().with_selected(Some(0)), tabs());

    toolbar.select(&mut host, 1, 0);
    toolbar.tick(&mut host, 5);
    assert!(host.tab_changes.is_empty());

    toolbar.clear_selection(&mut host, 10);
    toolbar.tick(&mut host, 10);
    assert!(host.tab_changes.is_empty());
    toolbar.tick(&mut host, 11);
    assert_eq!(host.tab_changes, [(None, Some(1))]);

    toolbar.tick(&mut host, 50);
    assert_eq!(host.tab_changes.len(), 1);
}

#[test]
fn sizing_changes_are_debounced() {
    let mut host = Host::default();
    let mut toolbar = BottomToolbar::new(ToolbarOptions::default(), tabs());

    toolbar.push_tab(BottomTab::new().with_label("More"), 0);
    toolbar.notify_sizing_changed(4);
    toolbar.tick(&mut host, 10);
    assert_eq!(host.resized, 0);
    toolbar.tick(&mut host, 14);
    assert_eq!(host.resized, 1);
    assert_eq!(toolbar.len(), 4);
}

fn four_tabs() -> Vec<BottomTab> {
    let mut tabs = tabs();
    tabs.push(BottomTab::new().with_label("Last"));
    tabs
}

fn label(toolbar: &BottomToolbar, index: Option<usize>) -> Option<&str> {
    index
        .and_then(|i| toolbar.tab(i))
        .and_then(|t| t.label.as_deref())
}

#[test]
fn removing_a_tab_keeps_focus_and_pending_activation_on_the_same_tab() {
    let mut host = Host::default();
    let mut toolbar = BottomToolbar::new(
        ToolbarOptions::default()
            .with_autoselect(true, 50)
            .with_selected(Some(3)),
        four_tabs(),
    );
    for _ in 0..3 {
        toolbar.key_down(&mut host, Key::Right, 0);
    }
    toolbar.key_up(Key::Right, 0);
    assert_eq!(label(&toolbar, toolbar.pending_activation()), Some("Recent"));

    toolbar.remove_tab(&mut host, 0, 10);
    assert_eq!(label(&toolbar, toolbar.focused()), Some("Recent"));
    assert_eq!(label(&toolbar, toolbar.pending_activation()), Some("Recent"));
    assert_eq!(label(&toolbar, toolbar.selected()), Some("Last"));

    toolbar.tick(&mut host, 49);
    assert_eq!(label(&toolbar, toolbar.selected()), Some("Last"));
    toolbar.tick(&mut host, 100);
    assert_eq!(label(&toolbar, toolbar.selected()), Some("Recent"));
    assert_eq!(
        host.changes.last(),
        Some(&SelectionChange {
            previous: Some(2),
            current: Some(1),
        })
    );
}

#[test]
fn removing_the_targeted_tab_drops_focus_and_pending_activation() {
    let mut host = Host::default();
    let mut toolbar =
        BottomToolbar::new(ToolbarOptions::default().with_autoselect(true, 50), four_tabs());
    toolbar.key_down(&mut host, Key::Right, 0);
    toolbar.key_down(&mut host, Key::Right, 0);
    toolbar.key_up(Key::Right, 0);
    assert_eq!(toolbar.pending_activation(), Some(1));

    toolbar.remove_tab(&mut host, 1, 10);
    assert_eq!(toolbar.pending_activation(), None);
    assert_eq!(toolbar.focused(), None);
    toolbar.tick(&mut host, 100);
    assert_eq!(toolbar.selected(), None);
}

#[test]
fn settled_deselect_reports_the_shifted_previous_tab() {
    let mut host = Host::default();
    let mut toolbar =
        BottomToolbar::new(ToolbarOptions::default().with_selected(Some(3)), four_tabs());

    toolbar.clear_selection(&mut host, 0);
    toolbar.remove_tab(&mut host, 0, 0);
    toolbar.tick(&mut host, 1);
    assert_eq!(host.tab_changes, [(None, Some(2))]);
    assert_eq!(label(&toolbar, Some(2)), Some("Last"));
}

#[test]
fn selectable_list_remove_shifts_later_indexes() {
    let mut list = SelectableList::new(4);
    list.select(3);
    list.focus(1);
    list.remove(0);
    assert_eq!(list.len(), 3);
    assert_eq!(list.selected(), Some(2));
    assert_eq!(list.focused(), Some(0));

    list.remove(0);
    assert_eq!(list.focused(), None);
    assert_eq!(list.selected(), Some(1));

    list.remove(5);
    assert_eq!(list.len(), 2);
}

#[test]
fn removing_tabs_keeps_selection_consistent() {
    let mut host = Host::default();
    let mut toolbar =
        BottomToolbar::new(ToolbarOptions::default().with_selected(Some(2)), tabs());

    let removed = toolbar.remove_tab(&mut host, 0, 0);
    assert_eq!(removed.and_then(|t| t.label).as_deref(), Some("Home"));
    assert_eq!(toolbar.selected(), Some(1));

    toolbar.remove_tab(&mut host, 1, 5);
    assert_eq!(toolbar.selected(), None);
    assert!(toolbar.remove_tab(&mut host, 7, 5).is_none());
    assert_eq!(toolbar.len(), 1);
}
