//! Editor session: owned state with load/save lifecycle.

use crate::board::Board;
use crate::label::{LabelId, LabelStyle, TextLabel};
use crate::selection::Selection;
use crate::storage::Storage;
use kurbo::Point;
use std::sync::Arc;

/// The well-known session key, stable across sessions.
pub const SESSION_KEY: &str = "appState";

/// An editing session over one board.
///
/// Owns the board and the selection, constructed at startup from persisted
/// state and saved back on every board mutation. Views watch the revision
/// counter: it bumps whenever anything render-visible changes, so a view
/// re-renders exactly when its remembered revision goes stale.
pub struct EditorSession<S: Storage> {
    board: Board,
    selection: Selection,
    storage: Arc<S>,
    key: String,
    revision: u64,
}

impl<S: Storage> EditorSession<S> {
    /// Start a session from persisted state.
    ///
    /// An absent or malformed blob degrades to an empty board; the failure is
    /// logged, never surfaced.
    pub fn load_or_default(storage: Arc<S>, key: impl Into<String>) -> Self {
        let key = key.into();
        let board = match storage.load(&key) {
            Ok(board) => board,
            Err(e) => {
                log::warn!("No usable session state for '{}' ({}), starting empty", key, e);
                Board::new()
            }
        };
        Self {
            board,
            selection: Selection::new(),
            storage,
            key,
            revision: 0,
        }
    }

    /// Add a new label built from the draft text and the current pickers.
    ///
    /// A draft that trims to empty is rejected and nothing changes. The
    /// trimming is only the rejection check: the stored content is the raw
    /// draft, surrounding whitespace included. Clears the selection on
    /// success.
    pub fn add_text(&mut self, draft: &str, style: LabelStyle) -> Option<LabelId> {
        if draft.trim().is_empty() {
            return None;
        }

        let id = self.board.allocate_id();
        self.board.insert(TextLabel::new(id, draft).with_style(style));
        self.selection.clear();
        self.commit();
        Some(id)
    }

    /// Delete the selected label, if there is one.
    pub fn delete_selected(&mut self) -> Option<TextLabel> {
        let id = self.selection.selected()?;
        let removed = self.board.remove(id);
        self.selection.clear();
        self.commit();
        removed
    }

    /// Undo the most recent add or delete. No-op if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.board.undo() {
            return false;
        }
        self.selection.prune(&self.board);
        self.commit();
        true
    }

    /// Redo the most recently undone action. No-op if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.board.redo() {
            return false;
        }
        self.selection.prune(&self.board);
        self.commit();
        true
    }

    /// Move a label (drag-end). Not recorded in history.
    pub fn move_label(&mut self, id: LabelId, position: Point) -> bool {
        if !self.board.update_position(id, position) {
            return false;
        }
        self.commit();
        true
    }

    /// Replace a label's content (inline edit). Not recorded in history.
    pub fn edit_label(&mut self, id: LabelId, content: &str) -> bool {
        if !self.board.update_content(id, content) {
            return false;
        }
        self.commit();
        true
    }

    /// Select a label. Selection changes re-render but are not persisted.
    pub fn select(&mut self, id: LabelId) {
        self.selection.select(id);
        self.revision += 1;
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.revision += 1;
    }

    /// The board being edited.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current revision; bumps on every render-visible change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.board.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.board.can_redo()
    }

    /// The session key this session persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get a reference to the storage backend.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    /// Bump the revision and write the full board state through.
    ///
    /// Saves are fire-and-forget: a failed write is logged and dropped, the
    /// next mutation will try again with the then-current state.
    fn commit(&mut self) {
        self.revision += 1;
        if let Err(e) = self.storage.save(&self.key, &self.board) {
            log::warn!("Failed to save session '{}': {}", self.key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError, StorageResult};

    fn session() -> EditorSession<MemoryStorage> {
        EditorSession::load_or_default(Arc::new(MemoryStorage::new()), SESSION_KEY)
    }

    /// Storage that fails every operation, standing in for a corrupt backend.
    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn save(&self, _: &str, _: &Board) -> StorageResult<()> {
            Err(StorageError::Io("disk on fire".into()))
        }
        fn load(&self, key: &str) -> StorageResult<Board> {
            Err(StorageError::Serialization(format!("bad blob at {key}")))
        }
        fn delete(&self, _: &str) -> StorageResult<()> {
            Err(StorageError::Io("disk on fire".into()))
        }
        fn list(&self) -> StorageResult<Vec<String>> {
            Ok(vec![])
        }
        fn exists(&self, _: &str) -> StorageResult<bool> {
            Ok(false)
        }
    }

    #[test]
    fn test_malformed_state_degrades_to_empty() {
        let session = EditorSession::load_or_default(Arc::new(BrokenStorage), SESSION_KEY);
        assert!(session.board().is_empty());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn test_save_failures_are_swallowed() {
        let mut session = EditorSession::load_or_default(Arc::new(BrokenStorage), SESSION_KEY);
        // The mutation itself still applies even though the save fails.
        let id = session.add_text("hello", LabelStyle::default()).unwrap();
        assert!(session.board().contains(id));
    }

    #[test]
    fn test_add_text_rejects_blank_but_stores_verbatim() {
        let mut session = session();
        assert_eq!(session.add_text("   ", LabelStyle::default()), None);
        assert_eq!(session.add_text("", LabelStyle::default()), None);
        assert!(session.board().is_empty());

        // Trimming is only the emptiness gate; the content keeps its padding.
        let id = session.add_text("  padded  ", LabelStyle::default()).unwrap();
        assert_eq!(session.board().get(id).unwrap().content, "  padded  ");
    }

    #[test]
    fn test_every_mutation_persists() {
        let mut session = session();
        let storage = session.storage().clone();

        let id = session.add_text("hello", LabelStyle::default()).unwrap();
        assert_eq!(&storage.load(SESSION_KEY).unwrap(), session.board());

        session.move_label(id, Point::new(120.0, 80.0));
        let saved = storage.load(SESSION_KEY).unwrap();
        assert_eq!(saved.get(id).unwrap().position, Point::new(120.0, 80.0));

        session.edit_label(id, "hello again");
        session.select(id);
        session.delete_selected();
        assert!(storage.load(SESSION_KEY).unwrap().is_empty());

        session.undo();
        let restored = storage.load(SESSION_KEY).unwrap();
        assert_eq!(restored.get(id).unwrap().content, "hello again");
    }

    #[test]
    fn test_resume_from_saved_session() {
        let storage = Arc::new(MemoryStorage::new());
        let mut session = EditorSession::load_or_default(storage.clone(), SESSION_KEY);
        session.add_text("sticky", LabelStyle::default());
        session.undo();

        // A fresh session over the same storage sees the board and the stacks.
        let resumed = EditorSession::load_or_default(storage, SESSION_KEY);
        assert!(resumed.board().is_empty());
        assert!(resumed.can_redo());
    }

    #[test]
    fn test_selection_cleared_on_add_and_delete() {
        let mut session = session();
        let id = session.add_text("one", LabelStyle::default()).unwrap();
        session.select(id);
        assert!(session.selection().is_selected(id));

        session.add_text("two", LabelStyle::default());
        assert_eq!(session.selection().selected(), None);

        session.select(id);
        session.delete_selected();
        assert_eq!(session.selection().selected(), None);
    }

    #[test]
    fn test_selection_pruned_after_undo() {
        let mut session = session();
        let keep = session.add_text("keep", LabelStyle::default()).unwrap();
        let last = session.add_text("last", LabelStyle::default()).unwrap();

        // Undoing the add of an unrelated label leaves the selection alone.
        session.select(keep);
        session.undo();
        assert!(session.selection().is_selected(keep));
        assert!(!session.board().contains(last));

        // Undoing the add of the selected label drops the selection.
        session.select(keep);
        session.undo();
        assert_eq!(session.selection().selected(), None);
    }

    #[test]
    fn test_delete_with_no_selection_is_noop() {
        let mut session = session();
        session.add_text("survivor", LabelStyle::default());
        session.clear_selection();

        assert!(session.delete_selected().is_none());
        assert_eq!(session.board().len(), 1);
    }

    #[test]
    fn test_revision_tracks_visible_changes() {
        let mut session = session();
        let before = session.revision();
        let id = session.add_text("tick", LabelStyle::default()).unwrap();
        assert!(session.revision() > before);

        let before = session.revision();
        session.select(id);
        assert!(session.revision() > before);

        // A rejected draft changes nothing, so views have nothing to redraw.
        let before = session.revision();
        session.add_text("   ", LabelStyle::default());
        assert_eq!(session.revision(), before);
    }
}
