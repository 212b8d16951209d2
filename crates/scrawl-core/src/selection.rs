//! Selection state for the canvas.

use crate::board::Board;
use crate::label::LabelId;

/// At most one selected label.
///
/// Selection gates inline editing and deletion. It is not persisted; the
/// session clears it whenever an add or delete fires and prunes it after
/// undo/redo so it never points at a removed label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<LabelId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a label, replacing any previous selection.
    ///
    /// The id is not validated here; callers pass ids taken from a render of
    /// an existing label.
    pub fn select(&mut self, id: LabelId) {
        self.selected = Some(id);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The selected label id, if any.
    pub fn selected(&self) -> Option<LabelId> {
        self.selected
    }

    /// Check if a specific label is selected.
    pub fn is_selected(&self, id: LabelId) -> bool {
        self.selected == Some(id)
    }

    /// Check if anything is selected.
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Drop the selection if the referenced label no longer exists.
    pub fn prune(&mut self, board: &Board) {
        if let Some(id) = self.selected {
            if !board.contains(id) {
                self.selected = None;
            }
        }
    }
}
