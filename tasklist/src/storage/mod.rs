//! Local key-value storage for persisted state.
//!
//! Defines the [`KeyValueStore`] trait plus two implementations:
//! - [`FileStore`] - one JSON file per key in a data directory
//! - [`MemoryStore`] - in-process map for tests and `--ephemeral` runs

mod file;
mod memory;

use std::path::PathBuf;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem access failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The store cannot be used at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A write was rejected.
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// The key cannot be mapped onto the backing store.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// String-keyed, string-valued persistent storage.
///
/// Values are replaced wholesale by [`set`](Self::set); there is no merge.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
