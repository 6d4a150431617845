/// A change of the selected index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionChange {
    pub previous: Option<usize>,
    pub current: Option<usize>,
}

impl SelectionChange {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Single selection over a list of items.
pub trait Selectable {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn selected(&self) -> Option<usize>;

    /// Selects `index`; out-of-range indexes leave the selection unchanged.
    fn select(&mut self, index: usize) -> SelectionChange;

    fn clear_selection(&mut self) -> SelectionChange;
}

/// Roving focus over a list of items.
pub trait FocusManaged {
    fn focused(&self) -> Option<usize>;

    /// Focuses `index`. Returns `false` if it is out of range.
    fn focus(&mut self, index: usize) -> bool;

    fn blur(&mut self);

    /// Moves focus to the next item, wrapping around.
    fn focus_next(&mut self) -> Option<usize>;

    /// Moves focus to the previous item, wrapping around.
    fn focus_previous(&mut self) -> Option<usize>;
}

/// The plain "selectable list" capability: one selected index and one focused index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectableList {
    len: usize,
    selected: Option<usize>,
    focused: Option<usize>,
}

impl SelectableList {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected: None,
            focused: None,
        }
    }

    /// Resizes the list, dropping a selection or focus that no longer exists.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.filter(|&i| i < len);
        self.focused = self.focused.filter(|&i| i < len);
    }

    /// Removes the item at `index`: a selection or focus on it is dropped, later ones shift down.
    pub fn remove(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.len -= 1;
        self.selected = shift_after_removal(self.selected, index);
        self.focused = shift_after_removal(self.focused, index);
    }

    fn step_focus(&mut self, forward: bool) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let next = match self.focused.or(self.selected) {
            None => 0,
            Some(i) if forward => (i + 1) % self.len,
            Some(i) => (i + self.len - 1) % self.len,
        };
        self.focused = Some(next);
        self.focused
    }
}

/// Re-indexes `item` after the item at `removed` left the list.
pub(crate) fn shift_after_removal(item: Option<usize>, removed: usize) -> Option<usize> {
    match item {
        Some(i) if i == removed => None,
        Some(i) if i > removed => Some(i - 1),
        other => other,
    }
}

impl Selectable for SelectableList {
    fn len(&self) -> usize {
        self.len
    }

    fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) -> SelectionChange {
        let previous = self.selected;
        if index < self.len {
            self.selected = Some(index);
        }
        SelectionChange {
            previous,
            current: self.selected,
        }
    }

    fn clear_selection(&mut self) -> SelectionChange {
        SelectionChange {
            previous: self.selected.take(),
            current: None,
        }
    }
}

impl FocusManaged for SelectableList {
    fn focused(&self) -> Option<usize> {
        self.focused
    }

    fn focus(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.focused = Some(index);
        true
    }

    fn blur(&mut self) {
        self.focused = None;
    }

    fn focus_next(&mut self) -> Option<usize> {
        self.step_focus(true)
    }

    fn focus_previous(&mut self) -> Option<usize> {
        self.step_focus(false)
    }
}
