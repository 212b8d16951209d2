//! Scrawl Core Library
//!
//! Platform-agnostic state and logic for the Scrawl draggable-text canvas:
//! the label model, the undo/redo history engine, selection, the editing
//! session, and session storage backends.

pub mod board;
pub mod history;
pub mod label;
pub mod selection;
pub mod session;
pub mod storage;

pub use board::Board;
pub use history::{History, HistoryAction};
pub use label::{FontFamily, FontSize, FontStyle, LabelId, LabelStyle, Rgb, TextLabel};
pub use selection::Selection;
pub use session::{EditorSession, SESSION_KEY};
pub use storage::{
    MemoryStorage, PlatformStorage, Storage, StorageError, StorageResult, create_default_storage,
};
