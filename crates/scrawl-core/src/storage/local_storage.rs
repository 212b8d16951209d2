//! Browser localStorage implementation for WASM.

use super::{Storage, StorageError, StorageResult};
use crate::board::Board;
use wasm_bindgen::JsValue;
use web_sys::Storage as WebStorage;

/// Namespace prefix for session keys, so unrelated localStorage entries are
/// never listed or clobbered.
const KEY_PREFIX: &str = "scrawl.";

/// Session storage backed by the browser's localStorage.
///
/// localStorage is synchronous by nature, which is exactly what the
/// fire-and-forget save path wants.
pub struct LocalStorage {
    store: WebStorage,
}

impl LocalStorage {
    /// Create a localStorage-backed storage.
    ///
    /// Fails if there is no window or localStorage is unavailable (e.g.
    /// blocked by browser settings).
    pub fn new() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Other("No window object".to_string()))?;
        let store = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Other("localStorage unavailable".to_string()))?;
        Ok(Self { store })
    }

    fn storage_key(key: &str) -> String {
        format!("{KEY_PREFIX}{key}")
    }
}

impl Storage for LocalStorage {
    fn save(&self, key: &str, board: &Board) -> StorageResult<()> {
        let json = board
            .to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store
            .set_item(&Self::storage_key(key), &json)
            .map_err(js_error)
    }

    fn load(&self, key: &str) -> StorageResult<Board> {
        let json = self
            .store
            .get_item(&Self::storage_key(key))
            .map_err(js_error)?
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;

        Board::from_json(&json)
            .map_err(|e| StorageError::Serialization(format!("Failed to parse {}: {}", key, e)))
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        self.store
            .remove_item(&Self::storage_key(key))
            .map_err(js_error)
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let len = self.store.length().map_err(js_error)?;
        let mut keys = Vec::new();
        for i in 0..len {
            if let Some(name) = self.store.key(i).map_err(js_error)? {
                if let Some(stripped) = name.strip_prefix(KEY_PREFIX) {
                    keys.push(stripped.to_string());
                }
            }
        }
        Ok(keys)
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self
            .store
            .get_item(&Self::storage_key(key))
            .map_err(js_error)?
            .is_some())
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Other(format!("{:?}", value))
}
