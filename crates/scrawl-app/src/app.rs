//! Editor application: form state and event routing.
//!
//! The front end (the canvas renderer and the style-picker controls) is a
//! thin layer over this: it draws the board at the session's current
//! revision and feeds every interaction back in as a [`UiAction`] or a
//! [`CanvasEvent`].

use kurbo::Point;
use scrawl_core::{
    EditorSession, FontFamily, FontSize, FontStyle, LabelId, LabelStyle, Rgb, Storage,
};

/// Form control state: the draft text input and the four style pickers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Text entered but not yet added to the canvas.
    pub draft: String,
    /// Style applied to the next added label.
    pub style: LabelStyle,
}

/// Actions emitted by the form controls and toolbar buttons.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// The draft text input changed.
    SetDraft(String),
    /// Change the font size picker.
    SetFontSize(FontSize),
    /// Change the font style picker.
    SetFontStyle(FontStyle),
    /// Change the font family picker.
    SetFontFamily(FontFamily),
    /// Change the color picker.
    SetColor(Rgb),
    /// Add the draft text as a new label.
    AddText,
    /// Delete the selected label.
    DeleteSelected,
    /// Undo the last add or delete.
    Undo,
    /// Redo the last undone action.
    Redo,
}

/// Events emitted by the drag-enabled canvas region.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// A label was clicked (select it).
    Clicked(LabelId),
    /// A drag ended with the label at a new position.
    DragEnd { id: LabelId, position: Point },
    /// The selected label's inline editor changed its content.
    Edited { id: LabelId, content: String },
}

/// The editor application: a session plus its form state.
pub struct EditorApp<S: Storage> {
    session: EditorSession<S>,
    ui: UiState,
}

impl<S: Storage> EditorApp<S> {
    /// Wrap a session with fresh form state.
    pub fn new(session: EditorSession<S>) -> Self {
        Self {
            session,
            ui: UiState::default(),
        }
    }

    /// Apply a form or toolbar action.
    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::SetDraft(text) => self.ui.draft = text,
            UiAction::SetFontSize(size) => self.ui.style.font_size = size,
            UiAction::SetFontStyle(style) => self.ui.style.font_style = style,
            UiAction::SetFontFamily(family) => self.ui.style.font_family = family,
            UiAction::SetColor(color) => self.ui.style.color = color,
            UiAction::AddText => {
                if self.session.add_text(&self.ui.draft, self.ui.style).is_some() {
                    self.ui.draft.clear();
                }
            }
            UiAction::DeleteSelected => {
                self.session.delete_selected();
            }
            UiAction::Undo => {
                self.session.undo();
            }
            UiAction::Redo => {
                self.session.redo();
            }
        }
    }

    /// Route an event from the canvas region.
    pub fn handle_canvas(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::Clicked(id) => self.session.select(id),
            CanvasEvent::DragEnd { id, position } => {
                self.session.move_label(id, position);
            }
            CanvasEvent::Edited { id, content } => {
                // Inline editing is gated on the selection.
                if self.session.selection().is_selected(id) {
                    self.session.edit_label(id, &content);
                }
            }
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &EditorSession<S> {
        &self.session
    }

    /// The form control state.
    pub fn ui(&self) -> &UiState {
        &self.ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrawl_core::{MemoryStorage, SESSION_KEY};
    use std::sync::Arc;

    fn app() -> EditorApp<MemoryStorage> {
        let session = EditorSession::load_or_default(Arc::new(MemoryStorage::new()), SESSION_KEY);
        EditorApp::new(session)
    }

    #[test]
    fn test_add_text_consumes_draft() {
        let mut app = app();
        app.apply(UiAction::SetDraft("Hello".to_string()));
        app.apply(UiAction::AddText);

        assert_eq!(app.session().board().len(), 1);
        assert_eq!(app.ui().draft, "");
    }

    #[test]
    fn test_blank_draft_is_kept() {
        let mut app = app();
        app.apply(UiAction::SetDraft("   ".to_string()));
        app.apply(UiAction::AddText);

        assert!(app.session().board().is_empty());
        assert_eq!(app.ui().draft, "   ");
    }

    #[test]
    fn test_pickers_style_the_next_label() {
        let mut app = app();
        app.apply(UiAction::SetFontSize(FontSize::Px40));
        app.apply(UiAction::SetFontStyle(FontStyle::Italic));
        app.apply(UiAction::SetFontFamily(FontFamily::EduAu));
        app.apply(UiAction::SetColor(Rgb::new(0, 128, 255)));
        app.apply(UiAction::SetDraft("styled".to_string()));
        app.apply(UiAction::AddText);

        let label = &app.session().board().labels()[0];
        assert_eq!(label.font_size, FontSize::Px40);
        assert_eq!(label.font_style, FontStyle::Italic);
        assert_eq!(label.font_family, FontFamily::EduAu);
        assert_eq!(label.color, Rgb::new(0, 128, 255));
    }

    #[test]
    fn test_click_then_delete() {
        let mut app = app();
        app.apply(UiAction::SetDraft("doomed".to_string()));
        app.apply(UiAction::AddText);
        let id = app.session().board().labels()[0].id;

        // Delete without a selection does nothing.
        app.apply(UiAction::DeleteSelected);
        assert_eq!(app.session().board().len(), 1);

        app.handle_canvas(CanvasEvent::Clicked(id));
        app.apply(UiAction::DeleteSelected);
        assert!(app.session().board().is_empty());
    }

    #[test]
    fn test_drag_end_moves_label() {
        let mut app = app();
        app.apply(UiAction::SetDraft("movable".to_string()));
        app.apply(UiAction::AddText);
        let id = app.session().board().labels()[0].id;

        app.handle_canvas(CanvasEvent::DragEnd {
            id,
            position: Point::new(300.0, 150.0),
        });
        assert_eq!(
            app.session().board().get(id).unwrap().position,
            Point::new(300.0, 150.0)
        );
        // Dragging is not undoable.
        app.apply(UiAction::Undo);
        assert!(app.session().board().is_empty());
    }

    #[test]
    fn test_inline_edit_requires_selection() {
        let mut app = app();
        app.apply(UiAction::SetDraft("original".to_string()));
        app.apply(UiAction::AddText);
        let id = app.session().board().labels()[0].id;

        app.handle_canvas(CanvasEvent::Edited {
            id,
            content: "ignored".to_string(),
        });
        assert_eq!(app.session().board().get(id).unwrap().content, "original");

        app.handle_canvas(CanvasEvent::Clicked(id));
        app.handle_canvas(CanvasEvent::Edited {
            id,
            content: "edited".to_string(),
        });
        assert_eq!(app.session().board().get(id).unwrap().content, "edited");
    }

    #[test]
    fn test_undo_redo_buttons() {
        let mut app = app();
        app.apply(UiAction::SetDraft("Hello".to_string()));
        app.apply(UiAction::AddText);
        app.apply(UiAction::SetDraft("World".to_string()));
        app.apply(UiAction::AddText);

        app.apply(UiAction::Undo);
        let contents: Vec<_> = app
            .session()
            .board()
            .labels()
            .iter()
            .map(|l| l.content.as_str())
            .collect();
        assert_eq!(contents, ["Hello"]);

        app.apply(UiAction::Redo);
        let contents: Vec<_> = app
            .session()
            .board()
            .labels()
            .iter()
            .map(|l| l.content.as_str())
            .collect();
        assert_eq!(contents, ["Hello", "World"]);
    }
}
