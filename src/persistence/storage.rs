use super::files::{atomic_write, read_file};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read slot `{key}` from {}", .path.display())]
    Read {
        key: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write slot `{key}` to {}", .path.display())]
    Write {
        key: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Local key-value storage holding one text blob per key
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One `<key>.json` file per slot inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key);
        read_file(&path).map_err(|source| StorageError::Read {
            key: key.to_string(),
            path,
            source,
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        atomic_write(&path, value).map_err(|source| StorageError::Write {
            key: key.to_string(),
            path,
            source,
        })
    }
}
