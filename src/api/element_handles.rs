use smallvec::SmallVec;

use crate::render::{ElementHandle, Surface};

/// Handles of elements drawn for one purpose, removed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct ElementGroup {
    handles: SmallVec<[ElementHandle; 8]>,
}

impl ElementGroup {
    pub(super) fn push(&mut self, handle: ElementHandle) {
        self.handles.push(handle);
    }

    pub(super) fn len(&self) -> usize {
        self.handles.len()
    }

    /// Removes every owned element from `surface` and forgets the handles.
    pub(super) fn clear_from<S: Surface>(&mut self, surface: &mut S) -> usize {
        let mut removed = 0;
        for handle in self.handles.drain(..) {
            if surface.remove(handle) {
                removed += 1;
            }
        }
        removed
    }
}

/// Everything the chart has drawn, grouped by what invalidates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct ChartHandles {
    pub(super) grid: ElementGroup,
    /// Tick labels and the two main axis lines.
    pub(super) axes: ElementGroup,
    pub(super) area: ElementGroup,
    pub(super) line: ElementGroup,
    pub(super) dots: ElementGroup,
    pub(super) goal: ElementGroup,
    pub(super) title: ElementGroup,
    pub(super) x_label: ElementGroup,
    pub(super) y_label: ElementGroup,
}
