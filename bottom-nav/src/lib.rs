//! A headless, scroll-reactive bottom navigation bar.
//!
//! For the tab strip and tabs that usually live inside the bar, see the `bottom-toolbar` crate.
//!
//! This crate focuses on the scroll-position-to-transform state machine: for every scroll
//! sample it computes the header offset, whether to snap the bar in or out, the transition
//! duration of that move, and a condensation progress value for scroll effects.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - the container's box size and its children (with a `sticky` marker)
//! - scroll offsets and a millisecond clock
//! - somewhere to apply transforms, transition durations and effects
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod layout;
mod nav;
mod options;
mod state;
mod surface;
mod timer;
mod types;


pub use layout::{LayoutMeasurer, Measurement, StickyLocator, find_sticky, measure};
pub use nav::BottomNav;
pub use options::{NavOptions, OnCommitCallback, SnapTuning};
pub use state::{
    Geometry, ScrollSample, ScrollState, ScrollStep, header_transform, snap_duration_ms,
};
pub use surface::{NavSurface, ScrollEffectRunner};
pub use timer::Deferred;
pub use types::{
    BoxSize, ChildDescriptor, ChildId, HeaderTransform, NavConfig, ScrollSnapshot,
    StickyTransform,
};
