//! Client-side filtering over an already-fetched product list.

use crate::category::ALL_CATEGORIES;
use crate::product::Product;

/// Category selection for the catalog view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No category restriction ("All Categories").
    All,
    /// Restrict to products whose `category` equals this value exactly.
    Category(String),
}

impl CategoryFilter {
    /// Build a filter from a selector option value (see
    /// [`crate::category::category_options`]).
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => product.category == *category,
        }
    }
}

/// Filter `products` by free-text query and category, preserving order.
///
/// The query is a case-insensitive substring match against `title` or
/// `description`; a blank query matches everything. Both filters compose.
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();

    products
        .iter()
        .filter(|product| {
            query.is_empty()
                || product.title.to_lowercase().contains(&query)
                || product.description.to_lowercase().contains(&query)
        })
        .filter(|product| category.matches(product))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{ProductId, Rating};

    fn product(id: u64, title: &str, description: &str, category: &str) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            price: 9.99,
            description: description.to_string(),
            category: category.to_string(),
            image: String::new(),
            rating: Rating { rate: 4.0, count: 10 },
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Fjallraven Backpack", "Fits 15 inch laptops", "men's clothing"),
            product(2, "Gold Ring", "Classic created wedding ring", "jewelery"),
            product(3, "Casual T-Shirt", "Slim fit backpack-friendly shirt", "men's clothing"),
        ]
    }

    #[test]
    fn blank_query_and_all_category_match_everything() {
        let products = sample();
        let filtered = filter_products(&products, "   ", &CategoryFilter::All);
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let products = sample();

        let by_title = filter_products(&products, "BACKPACK", &CategoryFilter::All);
        let ids: Vec<_> = by_title.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(3)]);

        let by_description = filter_products(&products, "wedding", &CategoryFilter::All);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, ProductId(2));
    }

    #[test]
    fn category_filter_requires_exact_match() {
        let products = sample();
        let filter = CategoryFilter::Category("men's clothing".to_string());
        let filtered = filter_products(&products, "", &filter);
        let ids: Vec<_> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(3)]);

        let none = filter_products(
            &products,
            "",
            &CategoryFilter::Category("electronics".to_string()),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn from_value_maps_the_sentinel_to_all() {
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_value("jewelery"),
            CategoryFilter::Category("jewelery".to_string())
        );
    }

    #[test]
    fn search_and_category_compose_in_order() {
        let products = sample();
        let filter = CategoryFilter::Category("men's clothing".to_string());
        let filtered = filter_products(&products, "backpack", &filter);
        let ids: Vec<_> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(3)]);
    }
}
