use crate::domain::shared::value_objects::ProductId;

pub const ADDED_MESSAGE: &str = "Added to wishlist";
pub const REMOVED_MESSAGE: &str = "Removed from wishlist";
pub const CLEARED_MESSAGE: &str = "Wishlist cleared";

/// Change broadcast to wishlist subscribers after the set was modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistEvent {
    Added(ProductId),
    Removed(ProductId),
    Cleared,
}

/// Transient user-facing confirmation, such as a toast.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
