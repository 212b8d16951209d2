//! Scrawl Application
//!
//! The application shell: style-picker form state and the action/event
//! routing that connects a front end to the core editing session.

mod app;

pub use app::{CanvasEvent, EditorApp, UiAction, UiState};
