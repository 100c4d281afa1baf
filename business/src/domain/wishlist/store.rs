use std::sync::Arc;

use crate::domain::catalog::model::Product;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

use super::errors::StorageError;
use super::events::{
    ADDED_MESSAGE, CLEARED_MESSAGE, Notifier, REMOVED_MESSAGE, SubscriptionId, WishlistEvent,
};
use super::storage::KeyValueStore;

/// Key of the persistence slot holding the wishlist.
pub const WISHLIST_STORAGE_KEY: &str = "wishlist";

type Listener = Box<dyn Fn(&WishlistEvent) + Send + Sync>;

/// Shopper's saved products: an insertion-ordered set of product snapshots
/// keyed by product id, mirrored to a single storage slot.
///
/// Every mutation that changes the set is persisted before subscribers are
/// notified. Persistence is best effort: a failed write is logged and the
/// in-memory set stays authoritative for the session.
pub struct WishlistStore {
    entries: Vec<Product>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn Logger>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl WishlistStore {
    /// Reads the persistence slot once. A missing, unreadable or corrupted slot
    /// yields an empty wishlist; the failure is only logged.
    pub fn load(
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let entries = match storage.get(WISHLIST_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Product>>(&raw) {
                Ok(products) => dedupe(products),
                Err(e) => {
                    logger.error(&format!("Discarding corrupted wishlist: {}", e));
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                logger.recovered("Reading wishlist", &e);
                Vec::new()
            }
        };

        logger.debug(&format!("Wishlist loaded with {} items", entries.len()));

        Self {
            entries,
            storage,
            notifier,
            logger,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn items(&self) -> &[Product] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.position(product_id).is_some()
    }

    /// Appends a snapshot of `product`. Returns false when it was already saved.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }

        self.entries.push(product.clone());
        self.persist();
        self.notifier.success(ADDED_MESSAGE);
        self.emit(WishlistEvent::Added(product.id.clone()));
        true
    }

    /// Removes the entry for `product_id`. Returns false when nothing was saved under it.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let Some(index) = self.position(product_id) else {
            return false;
        };

        self.entries.remove(index);
        self.persist();
        self.notifier.success(REMOVED_MESSAGE);
        self.emit(WishlistEvent::Removed(product_id.clone()));
        true
    }

    /// Removes `product` when saved, adds it otherwise. Returns whether it is saved afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            self.remove(&product.id);
            false
        } else {
            self.add(product);
            true
        }
    }

    /// Empties the wishlist and drops its persistence slot.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        self.entries.clear();
        if let Err(e) = self.storage.remove(WISHLIST_STORAGE_KEY) {
            self.logger.recovered("Clearing wishlist slot", &e);
        }
        self.notifier.success(CLEARED_MESSAGE);
        self.emit(WishlistEvent::Cleared);
    }

    /// Writes the full ordered sequence to the persistence slot.
    pub fn save(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.entries).map_err(|e| StorageError::Io(e.to_string()))?;
        self.storage.set(WISHLIST_STORAGE_KEY, &raw)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&WishlistEvent) + Send + Sync + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(subscription, _)| *subscription != id);
    }

    /// Detaches every subscriber. The wishlist itself stays persisted.
    pub fn dispose(&mut self) {
        self.listeners.clear();
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.entries.iter().position(|p| &p.id == product_id)
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            self.logger.recovered("Saving wishlist", &e);
        }
    }

    fn emit(&self, event: WishlistEvent) {
        for (_, listener) in &self.listeners {
            listener(&event);
        }
    }
}

/// Keeps the first snapshot per product id, in stored order.
fn dedupe(products: Vec<Product>) -> Vec<Product> {
    let mut unique: Vec<Product> = Vec::with_capacity(products.len());
    for product in products {
        if !unique.iter().any(|p| p.id == product.id) {
            unique.push(product);
        }
    }
    unique
}
