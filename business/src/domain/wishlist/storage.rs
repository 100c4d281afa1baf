use super::errors::StorageError;

/// Client-local key-value store holding string values, e.g. browser local storage.
///
/// Each `set` replaces the whole value of a key atomically.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
