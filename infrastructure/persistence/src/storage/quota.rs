use business::domain::wishlist::errors::StorageError;

/// Byte budget shared by every key of a store, like a browser storage origin.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Quota {
    pub limit: Option<usize>,
}

impl Quota {
    /// Checks that replacing `previous` bytes with `next` bytes keeps `used` within the limit.
    pub fn check(&self, used: usize, previous: usize, next: usize) -> Result<(), StorageError> {
        match self.limit {
            Some(limit) if used.saturating_sub(previous) + next > limit => {
                Err(StorageError::QuotaExceeded)
            }
            _ => Ok(()),
        }
    }
}
