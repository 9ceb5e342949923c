//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Category label used when a product has none.
pub const DEFAULT_CATEGORY: &str = "General";

/// A catalog product.
///
/// Immutable from the client's perspective; owned and mutated only by the
/// catalog store. Cart lines snapshot the fields they need at add time
/// rather than holding a live reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in display units.
    pub price: Price,
    /// Long-form description.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Optional category; [`DEFAULT_CATEGORY`] when absent.
    pub category: Option<String>,
}

impl Product {
    /// The category to display, falling back to [`DEFAULT_CATEGORY`].
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// The well-known synthetic record returned when the catalog store is
    /// unreachable, so the read path degrades instead of failing.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            id: ProductId::new(1),
            name: "Demo product (catalog unavailable)".to_owned(),
            price: Price::new(Decimal::from(100)).unwrap_or(Price::ZERO),
            description: String::new(),
            image: "https://via.placeholder.com/150".to_owned(),
            category: Some("Demo".to_owned()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_fallback() {
        let mut product = Product::placeholder();
        assert_eq!(product.category_label(), "Demo");

        product.category = None;
        assert_eq!(product.category_label(), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_placeholder_is_stable() {
        let placeholder = Product::placeholder();
        assert_eq!(placeholder.id, ProductId::new(1));
        assert_eq!(placeholder.price.amount(), Decimal::from(100));
    }

    #[test]
    fn test_serde_roundtrip() {
        let product = Product::placeholder();
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
