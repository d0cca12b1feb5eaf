//! File-backed storage area.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::StorageArea;
use crate::StorageError;

/// Extension of value files. Temp files (`.tmp*`) never carry it.
const VALUE_EXTENSION: &str = "value";

/// Storage area persisted as a directory with one file per key.
///
/// Every operation goes to the filesystem, so several processes pointed at
/// the same directory share one area (the way same-origin tabs share
/// `localStorage`). Writes to different keys touch different files and never
/// conflict. A write goes to a uniquely named temp file in the directory
/// which is then renamed over the key's file, so readers see either the old
/// or the new value and concurrent writers of the same key are
/// last-write-wins.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage area backed by the directory at `dir`. The directory is
    /// created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the backing directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    ///
    /// Keys are percent-encoded, so any key maps to a single file name inside
    /// the directory.
    #[must_use]
    pub fn value_path(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{VALUE_EXTENSION}", urlencoding::encode(key)))
    }

    /// Removes the backing directory, clearing the whole area.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_dir_all(&self.dir) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

impl StorageArea for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.value_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;

        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(value.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(self.value_path(key))
            .map_err(|err| StorageError::Io(err.error))?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.value_path(key)) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}
