//! Storage port - the key-value seam between the store and its backend.
//!
//! The store reads and overwrites one string value under one key. Backends:
//! - **MemoryStorage**: in-process map, for tests and embedding
//! - **FileStorage**: one file per key inside a profile directory

mod file;
mod memory;

pub use file::*;
pub use memory::*;

use thiserror::Error;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Check that `key` is a plain identifier: non-empty, made of letters,
/// digits, `_` and `-`. Every backend accepts such keys.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// Read/write access to a string key-value store.
pub trait StoragePort {
    /// Read the value under `key`. `Ok(None)` when the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key` if present.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
