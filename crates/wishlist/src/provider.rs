//! Shared wishlist handle and the process-wide provider slot.
//!
//! Every view reads the same store through a [`SharedWishlist`] handle; no
//! view holds an independent copy of the sequence. The handle is explicitly
//! constructed from a [`WishlistStore`] and injected into consumers; for
//! applications that want a single ambient store, [`install`] / [`current`]
//! provide a process-wide slot with a fail-fast initialization contract.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use vitrine_catalog::{Product, ProductId};

use crate::store::WishlistStore;
use crate::wishlist::Wishlist;

/// Cheaply cloneable handle to one shared [`WishlistStore`].
///
/// All clones observe the same state; mutations made through one handle are
/// visible to every other handle immediately, and subscribers run
/// synchronously inside the mutating call.
#[derive(Debug, Clone)]
pub struct SharedWishlist {
    store: Arc<Mutex<WishlistStore>>,
}

impl SharedWishlist {
    pub fn new(store: WishlistStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, WishlistStore> {
        // Poisoning means a subscriber or storage backend panicked mid-mutation;
        // that is a programming error, so fail loudly rather than limp on.
        self.store
            .lock()
            .expect("wishlist store poisoned by an earlier panic")
    }

    /// Snapshot of the current sequence, for rendering.
    pub fn wishlist(&self) -> Wishlist {
        self.lock().wishlist().clone()
    }

    pub fn add_to_wishlist(&self, product: Product) {
        self.lock().add_to_wishlist(product);
    }

    pub fn remove_from_wishlist(&self, id: ProductId) {
        self.lock().remove_from_wishlist(id);
    }

    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.lock().is_in_wishlist(id)
    }

    pub fn clear_wishlist(&self) {
        self.lock().clear_wishlist();
    }

    /// Register a subscriber for effective mutations.
    ///
    /// The callback runs while the store is locked; it must not call back
    /// into this handle.
    pub fn subscribe(&self, subscriber: impl Fn(&Wishlist) + Send + 'static) {
        self.lock().subscribe(subscriber);
    }
}

static PROVIDER: OnceLock<SharedWishlist> = OnceLock::new();

/// Install the process-wide wishlist store.
///
/// Must be called exactly once, before any call to [`current`].
///
/// # Panics
///
/// Panics if a store has already been installed.
pub fn install(store: WishlistStore) -> SharedWishlist {
    let handle = SharedWishlist::new(store);
    if PROVIDER.set(handle.clone()).is_err() {
        panic!("wishlist store installed twice");
    }
    handle
}

/// The process-wide wishlist handle.
///
/// # Panics
///
/// Panics if called before [`install`]; accessing the wishlist outside an
/// initialized provider scope is a programming error, not a recoverable
/// condition.
pub fn current() -> SharedWishlist {
    PROVIDER
        .get()
        .cloned()
        .expect("wishlist store accessed before install()")
}
