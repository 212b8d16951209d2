//! Undo/redo history over text labels.

use crate::label::TextLabel;
use serde::{Deserialize, Serialize};

/// A reversible action recorded in the history.
///
/// Each variant carries a full snapshot of the label at the moment the action
/// happened, so it is self-reversing: an `Add` is undone by removing the
/// label, a `Delete` by re-inserting the snapshot. The snapshot is immutable
/// once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "text", rename_all = "lowercase")]
pub enum HistoryAction {
    /// A label was added to the board.
    Add(TextLabel),
    /// A label was deleted from the board.
    Delete(TextLabel),
}

impl HistoryAction {
    /// The label snapshot this action carries.
    pub fn label(&self) -> &TextLabel {
        match self {
            HistoryAction::Add(label) | HistoryAction::Delete(label) => label,
        }
    }
}

/// Linear undo/redo history: two LIFO stacks of [`HistoryAction`].
///
/// Recording any new action clears the redo stack, so the timeline never
/// branches. Both stacks pop most-recent-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    /// Actions that can be undone, most recent last.
    #[serde(rename = "undoStack", default)]
    undo: Vec<HistoryAction>,
    /// Undone actions that can be reapplied, most recent last.
    #[serde(rename = "redoStack", default)]
    redo: Vec<HistoryAction>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new action. Clears the redo stack.
    pub fn record(&mut self, action: HistoryAction) {
        self.undo.push(action);
        self.redo.clear();
    }

    /// Pop the most recent undoable action.
    pub fn pop_undo(&mut self) -> Option<HistoryAction> {
        self.undo.pop()
    }

    /// Pop the most recent redoable action.
    pub fn pop_redo(&mut self) -> Option<HistoryAction> {
        self.redo.pop()
    }

    /// Park an undone action on the redo stack.
    pub fn push_redo(&mut self, action: HistoryAction) {
        self.redo.push(action);
    }

    /// Return a redone action to the undo stack.
    ///
    /// Unlike [`History::record`] this does not clear the redo stack, so a
    /// chain of redos can be walked through one step at a time.
    pub fn push_undo(&mut self, action: HistoryAction) {
        self.undo.push(action);
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Undoable actions, oldest first.
    pub fn undo_stack(&self) -> &[HistoryAction] {
        &self.undo
    }

    /// Redoable actions, oldest first.
    pub fn redo_stack(&self) -> &[HistoryAction] {
        &self.redo
    }

    /// All recorded actions across both stacks.
    pub fn actions(&self) -> impl Iterator<Item = &HistoryAction> {
        self.undo.iter().chain(self.redo.iter())
    }

    /// Total number of recorded actions.
    pub fn len(&self) -> usize {
        self.undo.len() + self.redo.len()
    }

    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty() && self.redo.is_empty()
    }
}
