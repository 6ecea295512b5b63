//! Durable key-value storage for user preferences.
//!
//! The localization layer only needs two synchronous calls: `get` and `set`.
//! Both may fail; callers decide whether a failure matters. For the language
//! preference it never does, so the `Localizer` logs and carries on.

mod json_file;
mod memory;

use std::fmt;
use std::path::PathBuf;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors from a storage backend.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io {
        /// Backing file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The backing file exists but does not hold a JSON object of strings.
    Parse {
        /// Backing file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The backend refuses writes (read-only media, quota exhausted).
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "storage I/O error on {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "storage file {} is not valid: {source}", path.display())
            }
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Unavailable(_) => None,
        }
    }
}

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// What: Read a value.
    ///
    /// Output:
    /// - `Ok(Some(value))` if present, `Ok(None)` if absent
    ///
    /// # Errors
    /// - Backend-specific read failures
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// What: Write a value, replacing any previous one.
    ///
    /// # Errors
    /// - Backend-specific write failures
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
