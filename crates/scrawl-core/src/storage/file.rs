//! File-based storage implementation for native platforms.

use super::{Storage, StorageError, StorageResult};
use crate::board::Board;
use std::fs;
use std::path::PathBuf;

/// File-based storage for native platforms.
///
/// Stores session blobs as JSON files in a specified directory.
pub struct FileStorage {
    /// Base directory for session storage.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the default location.
    ///
    /// On Unix: `~/.local/share/scrawl/sessions/`
    /// On Windows: `%APPDATA%\scrawl\sessions\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;

        let path = base.join("scrawl").join("sessions");
        Self::new(path)
    }

    /// Get the file path for a session key.
    fn session_path(&self, key: &str) -> PathBuf {
        // Sanitize the key to be safe for filenames
        let safe_key: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.json", safe_key))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

impl Storage for FileStorage {
    fn save(&self, key: &str, board: &Board) -> StorageResult<()> {
        let path = self.session_path(key);
        let json = board
            .to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn load(&self, key: &str) -> StorageResult<Board> {
        let path = self.session_path(key);
        if !path.exists() {
            return Err(StorageError::NotFound(key.to_string()));
        }

        let json = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        Board::from_json(&json).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.session_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                StorageError::Io(format!("Failed to delete {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        if !self.base_path.exists() {
            return Ok(vec![]);
        }

        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| StorageError::Io(format!("Failed to read directory: {}", e)))?;

        let mut keys = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(stem.to_string());
                }
            }
        }
        Ok(keys)
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.session_path(key).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::TextLabel;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_save_load() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let mut board = Board::new();
        let id = board.allocate_id();
        board.insert(TextLabel::new(id, "persisted"));

        storage.save("session", &board).unwrap();
        let loaded = storage.load("session").unwrap();
        assert_eq!(loaded, board);
    }

    #[test]
    fn test_file_storage_not_found() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let result = storage.load("nonexistent");
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_file_storage_corrupted_blob() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        fs::write(dir.path().join("session.json"), "{not json").unwrap();
        let result = storage.load("session");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_file_storage_list() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let board = Board::new();
        storage.save("one", &board).unwrap();
        storage.save("two", &board).unwrap();

        let mut keys = storage.list().unwrap();
        keys.sort();
        assert_eq!(keys, ["one", "two"]);
    }

    #[test]
    fn test_file_storage_delete() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let board = Board::new();
        storage.save("session", &board).unwrap();
        assert!(storage.exists("session").unwrap());

        storage.delete("session").unwrap();
        assert!(!storage.exists("session").unwrap());

        // Deleting an absent session is fine.
        storage.delete("session").unwrap();
    }

    #[test]
    fn test_file_storage_sanitizes_key() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let board = Board::new();
        storage.save("app/state:v1", &board).unwrap();

        let loaded = storage.load("app/state:v1").unwrap();
        assert_eq!(loaded, board);
    }
}
