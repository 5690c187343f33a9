//! Durable key-value storage for persisted settings.
//!
//! The store only needs get/set/remove of strings by key. The web shell
//! implements this over localStorage; this crate ships a file-backed
//! implementation for desktop use and an in-memory one for tests.

pub mod file;
pub mod memory;

// Re-export primary types
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key-value string store keyed by well-known names.
pub trait SettingsStorage {
    /// Read the value for a key. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the value for a key, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key, tolerating absence.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Storage errors. The preference store swallows these and stays
/// authoritative in memory; they are surfaced only to callers using a
/// storage implementation directly.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("read error: {0}")]
    Read(String),

    #[error("write error: {0}")]
    Write(String),
}
