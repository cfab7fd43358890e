//! Persisted key/value state
//!
//! A small string-to-string store standing in for browser local storage.
//! There is at most one writer per session and the last writer wins; reads
//! after writes in the same process are always consistent.
//!
//! Two backends are provided:
//! - [`MemoryStore`]: process-local, used by tests and `--plain` dry runs
//! - [`FileStore`]: a JSON object on disk, written atomically

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A string key/value store.
pub trait StateStore: Send {
    /// Read a value, `None` if the key was never written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Whether the store currently holds no keys.
    fn is_empty(&self) -> bool;
}
