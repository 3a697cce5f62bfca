//! `vitrine-wishlist` — the locally persisted wishlist store.
//!
//! The wishlist is an ordered, id-unique sequence of [`Product`] records,
//! rehydrated from durable local storage at startup and written back as a
//! full snapshot after every effective mutation. Views share one store via
//! [`SharedWishlist`] and observe changes synchronously through subscribers.
//!
//! Layering:
//!
//! - [`wishlist`] — the pure sequence type and its invariants
//! - [`snapshot`] — explicit JSON snapshot codec (fixed key, no versioning)
//! - [`storage`] — durable key-value storage backends (memory, file)
//! - [`store`] — the mutable store: rehydrate, mutate, persist, notify
//! - [`provider`] — the shared handle and process-wide provider slot
//!
//! [`Product`]: vitrine_catalog::Product

pub mod provider;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod wishlist;

pub use provider::SharedWishlist;
pub use snapshot::{SnapshotError, WISHLIST_KEY, encode_snapshot, parse_snapshot};
pub use storage::{FileStorage, MemoryStorage, SnapshotStorage};
pub use store::WishlistStore;
pub use wishlist::Wishlist;
