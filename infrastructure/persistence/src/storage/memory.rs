use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use business::domain::wishlist::errors::StorageError;
use business::domain::wishlist::storage::KeyValueStore;

use super::quota::Quota;

/// Process-local key-value store. Values live as long as the store.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
    quota: Quota,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes once keys and values together exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Mutex::default(),
            quota: Quota { limit: Some(bytes) },
        }
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries.lock().map_err(|_| StorageError::Unavailable)
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries()?;
        let used = entries.iter().map(|(k, v)| k.len() + v.len()).sum();
        let previous = entries.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
        self.quota.check(used, previous, key.len() + value.len())?;

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries()?.remove(key);
        Ok(())
    }
}
