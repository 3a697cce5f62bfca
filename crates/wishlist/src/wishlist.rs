//! The wishlist sequence: ordered, unique by product id.

use vitrine_catalog::{Product, ProductId};

/// An ordered sequence of products, unique by `id`.
///
/// Insertion order is preserved and there is no re-ordering operation.
/// All mutating operations are total: duplicate adds and absent removes are
/// no-ops by contract, not errors. Mutators report whether the sequence
/// actually changed so callers can skip persistence and notification for
/// no-ops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    /// Empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a wishlist from an item sequence, keeping the first occurrence
    /// of each id. Used when rehydrating a snapshot whose producer cannot be
    /// trusted to have upheld the uniqueness invariant.
    pub fn from_items(items: Vec<Product>) -> Self {
        let mut wishlist = Self::new();
        for item in items {
            wishlist.add(item);
        }
        wishlist
    }

    /// Append `product` unless an item with the same id is already present.
    ///
    /// Returns `true` if the sequence changed.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(product.id) {
            return false;
        }
        self.items.push(product);
        true
    }

    /// Remove the item with the given id, if present.
    ///
    /// Returns `true` if the sequence changed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Membership test by id.
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Drop all items.
    ///
    /// Returns `true` if the sequence changed.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        true
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.items.iter().map(|item| item.id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
