//! Snapshot codec for the persisted wishlist.
//!
//! The wire format is a bare UTF-8 JSON array of products stored under one
//! fixed key. There is no schema-version tag; any shape mismatch at parse
//! time is reported as [`SnapshotError`] and the caller decides the fallback
//! policy (the store treats it as absent data).

use thiserror::Error;
use vitrine_catalog::Product;

use crate::wishlist::Wishlist;

/// Fixed storage key for the wishlist snapshot.
pub const WISHLIST_KEY: &str = "wishlist";

#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Stored content is not a JSON array of products.
    #[error("malformed wishlist snapshot: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The current wishlist could not be serialized.
    #[error("failed to encode wishlist snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Parse a raw snapshot into a wishlist.
///
/// Duplicate ids in the snapshot (which a well-behaved writer never
/// produces) are collapsed to the first occurrence.
pub fn parse_snapshot(raw: &str) -> Result<Wishlist, SnapshotError> {
    let items: Vec<Product> = serde_json::from_str(raw).map_err(SnapshotError::Malformed)?;
    Ok(Wishlist::from_items(items))
}

/// Encode the full wishlist as a JSON array.
pub fn encode_snapshot(wishlist: &Wishlist) -> Result<String, SnapshotError> {
    serde_json::to_string(wishlist.items()).map_err(SnapshotError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::{ProductId, Rating};

    fn product(id: u64) -> Product {
        Product {
            id: ProductId(id),
            title: format!("Product {id}"),
            price: 5.0,
            description: "desc".to_string(),
            category: "electronics".to_string(),
            image: "https://example.test/img.jpg".to_string(),
            rating: Rating { rate: 3.2, count: 41 },
        }
    }

    #[test]
    fn round_trip_preserves_elements_and_order() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product(3));
        wishlist.add(product(1));

        let raw = encode_snapshot(&wishlist).unwrap();
        let parsed = parse_snapshot(&raw).unwrap();
        assert_eq!(parsed, wishlist);
    }

    #[test]
    fn empty_wishlist_encodes_as_empty_array() {
        let raw = encode_snapshot(&Wishlist::new()).unwrap();
        assert_eq!(raw, "[]");
        assert!(parse_snapshot(&raw).unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            parse_snapshot("not json"),
            Err(SnapshotError::Malformed(_))
        ));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        // A JSON object rather than an array of products.
        assert!(matches!(
            parse_snapshot(r#"{"wishlist": []}"#),
            Err(SnapshotError::Malformed(_))
        ));
    }

    #[test]
    fn duplicate_ids_in_snapshot_collapse_to_first() {
        let item = serde_json::to_string(&product(1)).unwrap();
        let doubled = format!("[{item},{item}]");

        let parsed = parse_snapshot(&doubled).unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
