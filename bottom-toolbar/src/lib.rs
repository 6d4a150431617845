//! Headless tab strip and tabs for the `bottom-nav` crate.
//!
//! The strip owns selection, keyboard focus and delayed auto-select; tabs turn pointer taps
//! into typed [`TabMessage`]s for the strip. Ripple visuals, CSS classes and anchors stay in the
//! host, reached through [`ToolbarHost`].
//!
//! This crate is framework-agnostic: timers are [`bottom_nav::Deferred`] slots polled with the
//! host's clock via [`BottomToolbar::tick`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod host;
mod options;
mod select;
mod tab;
mod toolbar;

#[cfg(test)]
mod tests;

pub use host::ToolbarHost;
pub use options::ToolbarOptions;
pub use select::{FocusManaged, Selectable, SelectableList, SelectionChange};
pub use tab::{BottomTab, TabMessage, TapEvent, TapOutcome};
pub use toolbar::{BottomToolbar, Key};
