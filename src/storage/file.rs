//! File-backed store: one JSON file per key.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::store::{StatsStore, StorageError};

/// Store writing each key to `<dir>/<key>.json`.
///
/// The directory is created on first write. Reads of keys that were never
/// written return `Ok(None)`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the store's files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StatsStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err.to_string())),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|err| StorageError::Io(err.to_string()))?;
        std::fs::write(self.path_for(key), value).map_err(|err| StorageError::Io(err.to_string()))
    }
}
