// Example: an adapter feeding a scripted scroll gesture into the bar.
use bottom_nav::{
    BottomNav, BoxSize, ChildDescriptor, HeaderTransform, LayoutMeasurer, NavOptions, NavSurface,
    ScrollEffectRunner,
};

struct Page {
    children: Vec<ChildDescriptor>,
    duration_ms: f64,
}

impl LayoutMeasurer for Page {
    fn box_size(&self) -> BoxSize {
        BoxSize::new(360.0, 112.0)
    }

    fn children(&self) -> &[ChildDescriptor] {
        &self.children
    }
}

impl ScrollEffectRunner for Page {
    fn run_effects(&mut self, progress: f64, _offset: f64) {
        println!("  effect: shadow opacity {:.2}", progress.clamp(0.0, 1.0));
    }
}

impl NavSurface for Page {
    fn apply_transform(&mut self, transform: &HeaderTransform) {
        println!(
            "  transform: translate_y={:.1} over {:.0}ms, sticky={:?}",
            transform.translate_y, self.duration_ms, transform.sticky
        );
    }

    fn set_transition_duration_ms(&mut self, duration_ms: f64) {
        self.duration_ms = duration_ms;
    }

    fn set_shadow(&mut self, shadow: bool) {
        println!("  shadow={shadow}");
    }
}

fn main() {
    let mut page = Page {
        children: vec![
            ChildDescriptor::new(1, 0.0, 56.0).with_sticky(true),
            ChildDescriptor::new(2, 56.0, 56.0),
        ],
        duration_ms: 0.0,
    };

    let mut nav = BottomNav::new(NavOptions::new(640.0).with_condenses(true));
    nav.attach(&mut page);

    // Scroll down at ~60fps, pause, then flick back up.
    let mut now_ms = 0u64;
    let mut samples: Vec<f64> = (0..=20).map(|i| i as f64 * 12.0).collect();
    samples.extend([230.0, 215.0, 190.0]);
    for scroll_top in samples {
        now_ms += 16;
        if scroll_top == 230.0 {
            now_ms += 500;
        }
        println!("t={now_ms}ms scroll_top={scroll_top}");
        nav.on_scroll(&mut page, scroll_top, now_ms);
    }

    let state = nav.scroll_state();
    println!(
        "done: progress={:.2} top={:.1} on_screen={} content_below={}",
        state.progress,
        state.top,
        nav.is_on_screen(),
        nav.is_content_below()
    );
}
