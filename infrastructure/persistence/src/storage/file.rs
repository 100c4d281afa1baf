use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use business::domain::wishlist::errors::StorageError;
use business::domain::wishlist::storage::KeyValueStore;

use super::quota::Quota;

const VALUE_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "tmp";

/// Key-value store keeping one file per key under a directory.
///
/// Writes go to a sibling temp file that is renamed over the target, so a
/// reader sees either the old value or the new one, never a partial write.
#[derive(Debug)]
pub struct FileKeyValueStore {
    directory: PathBuf,
    quota: Quota,
}

fn io_error(error: io::Error) -> StorageError {
    tracing::warn!(error = %error, "key-value file access failed");
    StorageError::Io(error.to_string())
}

impl FileKeyValueStore {
    /// Opens the store, creating `directory` when missing.
    pub fn open(directory: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let directory = directory.into();
        fs::create_dir_all(&directory).map_err(io_error)?;
        Ok(Self {
            directory,
            quota: Quota::default(),
        })
    }

    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Quota { limit: Some(bytes) };
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str, extension: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::Io(format!("invalid key: {}", key)));
        }
        Ok(self.directory.join(format!("{}.{}", key, extension)))
    }

    fn used_bytes(&self) -> Result<usize, StorageError> {
        let mut used = 0;
        for entry in fs::read_dir(&self.directory).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(VALUE_EXTENSION) {
                let key_len = path.file_stem().map(|s| s.len()).unwrap_or(0);
                let value_len = fs::metadata(&path).map_err(io_error)?.len() as usize;
                used += key_len + value_len;
            }
        }
        Ok(used)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key, VALUE_EXTENSION)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let target = self.path_for(key, VALUE_EXTENSION)?;

        if self.quota.limit.is_some() {
            let previous = match fs::metadata(&target) {
                Ok(meta) => key.len() + meta.len() as usize,
                Err(_) => 0,
            };
            self.quota
                .check(self.used_bytes()?, previous, key.len() + value.len())?;
        }

        let temp = self.path_for(key, TEMP_EXTENSION)?;
        let mut file = fs::File::create(&temp).map_err(io_error)?;
        file.write_all(value.as_bytes()).map_err(io_error)?;
        file.sync_all().map_err(io_error)?;
        drop(file);

        fs::rename(&temp, &target).map_err(|e| {
            let _ = fs::remove_file(&temp);
            io_error(e)
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key, VALUE_EXTENSION)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(e)),
        }
    }
}
