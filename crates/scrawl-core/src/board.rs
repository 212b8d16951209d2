//! Board document: the ordered label collection plus its history.

use crate::history::{History, HistoryAction};
use crate::label::{LabelId, TextLabel};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A canvas board holding all text labels and their undo/redo history.
///
/// This is the persisted document: it serializes to exactly the
/// `{texts, undoStack, redoStack}` blob. The id counter is derived from the
/// blob contents on load rather than stored in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// All labels on the board, in insertion order.
    #[serde(rename = "texts", default)]
    labels: Vec<TextLabel>,
    /// Undo/redo stacks.
    #[serde(flatten)]
    history: History,
    /// Next id to hand out. Not persisted; restored from the blob on load.
    #[serde(skip)]
    next_id: LabelId,
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next label id.
    ///
    /// Ids are monotonic and never reused within a session, so a label deleted
    /// and a label added later can never collide.
    pub fn allocate_id(&mut self) -> LabelId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a label to the board and record it in the history.
    pub fn insert(&mut self, label: TextLabel) {
        self.history.record(HistoryAction::Add(label.clone()));
        self.labels.push(label);
    }

    /// Remove the label with the given id and record the deletion.
    ///
    /// Silent no-op (returns `None`) if no label matches.
    pub fn remove(&mut self, id: LabelId) -> Option<TextLabel> {
        let pos = self.labels.iter().position(|l| l.id == id)?;
        let label = self.labels.remove(pos);
        self.history.record(HistoryAction::Delete(label.clone()));
        Some(label)
    }

    /// Move a label to a new position. Not recorded in history.
    ///
    /// Returns `false` (no-op) if no label matches.
    pub fn update_position(&mut self, id: LabelId, position: Point) -> bool {
        match self.get_mut(id) {
            Some(label) => {
                label.position = position;
                true
            }
            None => false,
        }
    }

    /// Replace a label's content. Not recorded in history.
    ///
    /// Returns `false` (no-op) if no label matches. Empty content is allowed
    /// here; only new labels are rejected for being blank, at add time.
    pub fn update_content(&mut self, id: LabelId, content: &str) -> bool {
        match self.get_mut(id) {
            Some(label) => {
                label.content = content.to_string();
                true
            }
            None => false,
        }
    }

    /// Undo the most recent add or delete.
    ///
    /// An `Add` is reversed by removing the label with the id captured in the
    /// action; a `Delete` by re-appending the snapshot at the end of the
    /// collection. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.history.pop_undo() else {
            return false;
        };
        match &action {
            HistoryAction::Add(label) => {
                let id = label.id;
                self.labels.retain(|l| l.id != id);
            }
            HistoryAction::Delete(label) => {
                self.labels.push(label.clone());
            }
        }
        self.history.push_redo(action);
        true
    }

    /// Redo the most recently undone action.
    ///
    /// Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(action) = self.history.pop_redo() else {
            return false;
        };
        match &action {
            HistoryAction::Add(label) => {
                self.labels.push(label.clone());
            }
            HistoryAction::Delete(label) => {
                let id = label.id;
                self.labels.retain(|l| l.id != id);
            }
        }
        self.history.push_undo(action);
        true
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Get a label by id.
    pub fn get(&self, id: LabelId) -> Option<&TextLabel> {
        self.labels.iter().find(|l| l.id == id)
    }

    /// Get a mutable reference to a label by id.
    pub fn get_mut(&mut self, id: LabelId) -> Option<&mut TextLabel> {
        self.labels.iter_mut().find(|l| l.id == id)
    }

    /// Check if a label with the given id exists.
    pub fn contains(&self, id: LabelId) -> bool {
        self.get(id).is_some()
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// The undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Check if the board has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Get the number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Serialize the board to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a board from JSON and restore the id counter.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut board: Self = serde_json::from_str(json)?;
        board.restore_id_counter();
        Ok(board)
    }

    /// Recompute the id counter from the labels and both history stacks.
    ///
    /// The stacks matter: a deleted label lives on only as a history snapshot,
    /// and redoing its deletion must not let its id be handed out again.
    pub fn restore_id_counter(&mut self) {
        let max_id = self
            .labels
            .iter()
            .map(|l| l.id)
            .chain(self.history.actions().map(|a| a.label().id))
            .max();
        self.next_id = max_id.map_or(0, |id| id + 1);
    }
}
