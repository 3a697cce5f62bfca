//! The mutable wishlist store: rehydrate, mutate, persist, notify.

use vitrine_catalog::{Product, ProductId};

use crate::snapshot::{self, WISHLIST_KEY};
use crate::storage::SnapshotStorage;
use crate::wishlist::Wishlist;

/// Callback invoked synchronously after every effective mutation.
///
/// Subscribers receive the post-mutation sequence and must not call back
/// into the store from inside the callback.
pub type Subscriber = Box<dyn Fn(&Wishlist) + Send>;

/// Session-lifetime wishlist store backed by durable local storage.
///
/// The store exclusively owns the wishlist sequence. On construction it
/// rehydrates from the snapshot under [`WISHLIST_KEY`]; after every
/// effective mutation it overwrites that snapshot in full and notifies
/// subscribers. Storage-content failures never propagate: a malformed or
/// unreadable snapshot is logged and treated as "no prior wishlist", and a
/// failed persist is logged while the in-memory state stays authoritative
/// for the rest of the session.
pub struct WishlistStore {
    wishlist: Wishlist,
    storage: Box<dyn SnapshotStorage>,
    subscribers: Vec<Subscriber>,
}

impl WishlistStore {
    /// Open a store over the given storage, rehydrating any prior snapshot.
    pub fn open(storage: Box<dyn SnapshotStorage>) -> Self {
        let wishlist = match storage.read(WISHLIST_KEY) {
            Ok(Some(raw)) => match snapshot::parse_snapshot(&raw) {
                Ok(wishlist) => {
                    tracing::debug!(items = wishlist.len(), "rehydrated wishlist snapshot");
                    wishlist
                }
                Err(err) => {
                    tracing::warn!("discarding malformed wishlist snapshot: {err}");
                    Wishlist::new()
                }
            },
            Ok(None) => Wishlist::new(),
            Err(err) => {
                tracing::warn!("failed to read wishlist snapshot, starting empty: {err:?}");
                Wishlist::new()
            }
        };

        Self {
            wishlist,
            storage,
            subscribers: Vec::new(),
        }
    }

    /// Current sequence, for rendering.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Append `product` unless already present (idempotent).
    pub fn add_to_wishlist(&mut self, product: Product) {
        if self.wishlist.add(product) {
            self.after_mutation();
        }
    }

    /// Remove the product with the given id; no-op if absent.
    pub fn remove_from_wishlist(&mut self, id: ProductId) {
        if self.wishlist.remove(id) {
            self.after_mutation();
        }
    }

    /// Pure membership test.
    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist.contains(id)
    }

    /// Replace the sequence with empty; the persisted snapshot becomes `[]`.
    pub fn clear_wishlist(&mut self) {
        if self.wishlist.clear() {
            self.after_mutation();
        }
    }

    /// Register a subscriber for effective mutations.
    pub fn subscribe(&mut self, subscriber: impl Fn(&Wishlist) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Persist the full snapshot, then notify subscribers synchronously.
    fn after_mutation(&mut self) {
        match snapshot::encode_snapshot(&self.wishlist) {
            Ok(raw) => {
                if let Err(err) = self.storage.write(WISHLIST_KEY, &raw) {
                    tracing::error!("failed to persist wishlist snapshot: {err:?}");
                }
            }
            Err(err) => {
                tracing::error!("failed to encode wishlist snapshot: {err}");
            }
        }

        for subscriber in &self.subscribers {
            subscriber(&self.wishlist);
        }
    }
}

impl core::fmt::Debug for WishlistStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WishlistStore")
            .field("wishlist", &self.wishlist)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
