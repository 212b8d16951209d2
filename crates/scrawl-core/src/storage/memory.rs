//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use crate::board::Board;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    sessions: RwLock<HashMap<String, Board>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, key: &str, board: &Board) -> StorageResult<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        sessions.insert(key.to_string(), board.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> StorageResult<Board> {
        let sessions = self
            .sessions
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        sessions
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        sessions.remove(key);
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        Ok(sessions.keys().cloned().collect())
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        let sessions = self
            .sessions
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))?;
        Ok(sessions.contains_key(key))
    }
}
