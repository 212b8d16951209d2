//! Storage abstraction for session persistence.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(target_arch = "wasm32")]
mod local_storage;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

use crate::board::Board;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for session storage backends.
///
/// Implementations store full board blobs keyed by a session identifier:
/// in memory, on the filesystem, or in the browser's localStorage. All
/// operations are synchronous; the editor model is single-threaded and saves
/// are fire-and-forget (the session layer logs and drops failures).
///
/// Note: On native platforms, implementations must be Send + Sync.
/// On WASM, these bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait Storage: Send + Sync {
    /// Save a board under a session key, overwriting any previous blob.
    fn save(&self, key: &str, board: &Board) -> StorageResult<()>;

    /// Load the board for a session key.
    fn load(&self, key: &str) -> StorageResult<Board>;

    /// Delete a session.
    fn delete(&self, key: &str) -> StorageResult<()>;

    /// List all session keys.
    fn list(&self) -> StorageResult<Vec<String>>;

    /// Check if a session exists.
    fn exists(&self, key: &str) -> StorageResult<bool>;
}

/// Trait for session storage backends (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait Storage {
    /// Save a board under a session key, overwriting any previous blob.
    fn save(&self, key: &str, board: &Board) -> StorageResult<()>;

    /// Load the board for a session key.
    fn load(&self, key: &str) -> StorageResult<Board>;

    /// Delete a session.
    fn delete(&self, key: &str) -> StorageResult<()>;

    /// List all session keys.
    fn list(&self) -> StorageResult<Vec<String>>;

    /// Check if a session exists.
    fn exists(&self, key: &str) -> StorageResult<bool>;
}

/// Platform-specific default storage backend.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = FileStorage;

/// Platform-specific default storage backend.
#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = LocalStorage;

/// Create a platform-appropriate storage backend.
#[cfg(not(target_arch = "wasm32"))]
pub fn create_default_storage() -> StorageResult<PlatformStorage> {
    FileStorage::default_location()
}

/// Create a platform-appropriate storage backend.
#[cfg(target_arch = "wasm32")]
pub fn create_default_storage() -> StorageResult<PlatformStorage> {
    LocalStorage::new()
}
