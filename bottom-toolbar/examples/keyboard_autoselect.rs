// Example: arrow-key navigation with delayed auto-select.
use bottom_toolbar::{
    BottomTab, BottomToolbar, Key, SelectionChange, TapEvent, ToolbarHost, ToolbarOptions,
};

#[derive(Default)]
struct Log;

impl ToolbarHost for Log {
    fn ripple_down(&mut self, x: f64, y: f64) {
        println!("  ripple at ({x}, {y})");
    }

    fn swap_class(&mut self, old: Option<&str>, new: &str) {
        println!("  class {old:?} -> {new}");
    }

    fn selection_changed(&mut self, change: SelectionChange) {
        println!("  selected {:?} (was {:?})", change.current, change.previous);
    }

    fn tab_changed(&mut self, current: Option<usize>, previous: Option<usize>) {
        println!("  tab changed {previous:?} -> {current:?}");
    }
}

fn main() {
    let tabs = vec![
        BottomTab::new().with_label("Home").with_selected_class("home"),
        BottomTab::new().with_label("Search").with_selected_class("search"),
        BottomTab::new().with_label("Profile").with_selected_class("profile"),
    ];
    let options = ToolbarOptions::default()
        .with_autoselect(true, 50)
        .with_selected(Some(0));
    let mut toolbar = BottomToolbar::new(options, tabs);
    let mut host = Log;

    toolbar.attach(&mut host, false);

    // Two quick presses: only the last focused tab is activated.
    for now_ms in [0, 20] {
        println!("t={now_ms} key Right");
        toolbar.key_down(&mut host, Key::Right, now_ms);
        toolbar.key_up(Key::Right, now_ms);
    }
    for now_ms in [40, 70, 100] {
        println!("t={now_ms} tick");
        toolbar.tick(&mut host, now_ms);
    }

    println!("t=120 tap tab 0");
    toolbar.tap(&mut host, 0, TapEvent::at(12.0, 8.0), 120);
    toolbar.tick(&mut host, 130);
}
