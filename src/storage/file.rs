//! File-backed storage backend.
//!
//! Each key is stored as `<key>.json` under a root directory, the platform
//! data directory by default.

use std::path::{Path, PathBuf};

use super::{SettingsStorage, StorageError};

/// Storage backed by one file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at the platform data directory.
    pub fn new() -> Self {
        Self { root: data_dir() }
    }

    /// Create a store rooted at an explicit directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory entries are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::Read(e.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.root).map_err(|e| StorageError::Write(e.to_string()))?;
        std::fs::write(self.path_for(key), value).map_err(|e| StorageError::Write(e.to_string()))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(());
        }
        std::fs::remove_file(&path).map_err(|e| StorageError::Write(e.to_string()))
    }
}

/// The application data directory.
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "nexus", "Nexus")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
