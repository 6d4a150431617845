/// Stable identity of a child element inside the navigation container.
pub type ChildId = u64;

/// The container's border box, as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when the container occupies no box at all (detached or hidden).
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// A direct child of the container, in document order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildDescriptor {
    pub id: ChildId,
    /// Explicitly marked as the element that stays visible while condensing.
    pub sticky: bool,
    /// Offset of the child's top edge within the container.
    pub offset_top: f64,
    pub height: f64,
}

impl ChildDescriptor {
    pub fn new(id: ChildId, offset_top: f64, height: f64) -> Self {
        Self {
            id,
            sticky: false,
            offset_top,
            height,
        }
    }

    pub fn with_sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }
}

/// Header behavior flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavConfig {
    /// Keep the sticky child visible while the rest of the header retracts.
    pub condenses: bool,
    /// Disallow all movement except condensation.
    pub fixed: bool,
    /// Snap the header back in on upward scroll.
    pub reveals: bool,
    /// Suppress transitions and snapping.
    pub disabled: bool,
}

impl NavConfig {
    pub fn may_move(&self) -> bool {
        self.condenses || !self.fixed
    }

    /// Condensing and free to leave the screen: the condense floor applies.
    pub(crate) fn floors_at_collapse(&self) -> bool {
        self.condenses && !self.fixed
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            condenses: false,
            fixed: false,
            reveals: true,
            disabled: false,
        }
    }
}

/// The committed condensation progress and the internal header top.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    pub progress: f64,
    pub top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickyTransform {
    pub id: ChildId,
    pub translate_y: f64,
}

/// A `translate3d(0, y, 0)` for the container and, when present, its sticky child.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderTransform {
    pub translate_y: f64,
    pub sticky: Option<StickyTransform>,
}
