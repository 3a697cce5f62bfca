//! Category selector options derived from the upstream category list.

/// A category as presented in the catalog's category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Human-facing label (first character upper-cased).
    pub name: String,
    /// Raw category value as used by the upstream API, or `"all"`.
    pub value: String,
}

/// Sentinel value for the unrestricted option.
pub const ALL_CATEGORIES: &str = "all";

/// Build selector options from the raw category strings, prepending the
/// "All Categories" sentinel.
pub fn category_options(categories: &[String]) -> Vec<CategoryOption> {
    let mut options = Vec::with_capacity(categories.len() + 1);
    options.push(CategoryOption {
        name: "All Categories".to_string(),
        value: ALL_CATEGORIES.to_string(),
    });
    for category in categories {
        options.push(CategoryOption {
            name: capitalize(category),
            value: category.clone(),
        });
    }
    options
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
