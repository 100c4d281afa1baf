/// Failures of the client-local key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.unavailable")]
    Unavailable,
    #[error("storage.quota_exceeded")]
    QuotaExceeded,
    #[error("storage.io: {0}")]
    Io(String),
}
