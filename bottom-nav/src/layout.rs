use crate::{BoxSize, ChildDescriptor, ChildId};

/// Read-only access to the container's geometry.
///
/// Implementations must be side-effect free apart from whatever the platform needs to produce
/// up-to-date metrics (e.g. a forced reflow).
pub trait LayoutMeasurer {
    fn box_size(&self) -> BoxSize;

    /// Direct children of the container, in document order.
    fn children(&self) -> &[ChildDescriptor];
}

/// Container metrics taken at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub height: f64,
    /// The resolved sticky child, if the container has any children.
    pub sticky: Option<ChildId>,
    pub sticky_offset: f64,
    pub sticky_height: f64,
}

/// Resolves the child that stays visible while the header condenses.
///
/// The first child marked `sticky` wins, otherwise the first child. The result is cached until
/// [`StickyLocator::invalidate`] is called.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StickyLocator {
    resolved: Option<Option<ChildId>>,
}

impl StickyLocator {
    pub const fn new() -> Self {
        Self { resolved: None }
    }

    pub fn invalidate(&mut self) {
        self.resolved = None;
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    pub fn locate<'a>(&mut self, children: &'a [ChildDescriptor]) -> Option<&'a ChildDescriptor> {
        if let Some(resolved) = self.resolved {
            let cached = resolved.and_then(|id| children.iter().find(|c| c.id == id));
            // A cached child that has since left the list is resolved again.
            if cached.is_some() || resolved.is_none() {
                return cached;
            }
        }
        let found = find_sticky(children);
        self.resolved = Some(found.map(|c| c.id));
        found
    }
}

/// Uncached sticky resolution over `children`.
pub fn find_sticky(children: &[ChildDescriptor]) -> Option<&ChildDescriptor> {
    children
        .iter()
        .find(|c| c.sticky)
        .or_else(|| children.first())
}

/// Measures the container and its sticky child.
///
/// Returns all zeros when the container occupies no box; callers treat that as "measurement
/// deferred".
pub fn measure<L: LayoutMeasurer + ?Sized>(layout: &L, locator: &mut StickyLocator) -> Measurement {
    let size = layout.box_size();
    if size.is_empty() {
        return Measurement::default();
    }
    let sticky = locator.locate(layout.children());
    let (sticky_offset, sticky_height) = sticky.map_or((0.0, 0.0), |c| (c.offset_top, c.height));
    Measurement {
        height: size.height,
        sticky: sticky.map(|c| c.id),
        sticky_offset,
        sticky_height,
    }
}
