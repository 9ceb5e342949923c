//! The client-held shopping cart state machine.
//!
//! The cart is single-owner and synchronous: one user, one client
//! instance, no concurrent mutation path. Lines snapshot the product at
//! add time; at most one line exists per product id, with repeated adds
//! incrementing the quantity instead of duplicating the line. Nothing
//! here is persisted - the cart lives for the client session and is
//! cleared wholesale on logout.

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// One product plus a quantity entry in the cart.
///
/// The name, price, and image are a snapshot taken when the product was
/// first added, not a live reference into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: Price,
    /// Image URL at add time.
    pub image: String,
    /// Number of units; always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// The line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Totals derived from the current cart state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of quantities over all lines.
    pub total_items: u32,
    /// Sum of price x quantity over all lines.
    pub total_price: Price,
}

/// The cart: a keyed collection of [`CartLine`]s in insertion order.
///
/// Stored as a flat list scanned linearly for existing entries - fine at
/// this scale, and it keeps the display order the user built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a product to the cart.
    ///
    /// If a line for this product id already exists its quantity is
    /// incremented; otherwise a new line is appended with quantity 1,
    /// snapshotting the product's current name, price, and image.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }

        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        });
    }

    /// Remove the line for a product id.
    ///
    /// Removing an id that is not in the cart is a no-op, not an error.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Derive the current totals.
    ///
    /// Pure function of the current state, recomputed on every call -
    /// the state is small, so there is no caching or incremental
    /// maintenance to invalidate.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let total_items = self
            .lines
            .iter()
            .map(|line| line.quantity)
            .fold(0_u32, u32::saturating_add);
        let total_price = self
            .lines
            .iter()
            .map(CartLine::line_total)
            .fold(Price::ZERO, |acc, line| acc + line);

        CartTotals {
            total_items,
            total_price,
        }
    }

    /// Empty all lines (invoked on logout).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Whether the cart holds no lines.
    ///
    /// Checkout availability is exactly `!is_empty()`; checkout itself
    /// has no contract here and stays an unimplemented extension point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The current lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: i64, name: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Price::new(Decimal::from(price)).unwrap(),
            description: String::new(),
            image: format!("https://shop.example/img/{id}.jpg"),
            category: None,
        }
    }

    fn price(n: i64) -> Price {
        Price::new(Decimal::from(n)).unwrap()
    }

    #[test]
    fn test_add_new_product_creates_line_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Mug", 40));

        assert_eq!(cart.lines().len(), 1);
        let line = cart.lines().first().unwrap();
        assert_eq!(line.product_id, ProductId::new(1));
        assert_eq!(line.quantity, 1);
        assert_eq!(line.name, "Mug");
    }

    #[test]
    fn test_repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        let mug = product(1, "Mug", 40);

        for _ in 0..5 {
            cart.add(&mug);
        }

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().quantity, 5);
    }

    #[test]
    fn test_lines_snapshot_product_state_at_add_time() {
        let mut cart = Cart::new();
        let mut mug = product(1, "Mug", 40);
        cart.add(&mug);

        // Catalog-side mutation after the add must not affect the line.
        mug.name = "Renamed Mug".to_owned();
        mug.price = price(99);

        let line = cart.lines().first().unwrap();
        assert_eq!(line.name, "Mug");
        assert_eq!(line.price, price(40));
    }

    #[test]
    fn test_remove_deletes_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Mug", 40));
        cart.add(&product(2, "Shirt", 90));

        cart.remove(ProductId::new(1));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().product_id, ProductId::new(2));
        assert_eq!(cart.totals().total_items, 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Mug", 40));

        cart.remove(ProductId::new(999));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.totals().total_items, 1);
    }

    #[test]
    fn test_totals_example_from_contract() {
        // add A (price 100) twice, add B (price 50) once
        // => total_items = 3, total_price = 250
        let mut cart = Cart::new();
        let a = product(1, "A", 100);
        let b = product(2, "B", 50);

        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        let totals = cart.totals();
        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.total_price, price(250));
    }

    #[test]
    fn test_totals_recomputed_after_any_sequence() {
        let mut cart = Cart::new();
        let a = product(1, "A", 100);
        let b = product(2, "B", 50);
        let c = product(3, "C", 25);

        cart.add(&a);
        cart.add(&b);
        cart.add(&c);
        cart.add(&b);
        cart.remove(ProductId::new(1));
        cart.add(&c);

        let totals = cart.totals();
        assert_eq!(totals.total_items, 4);
        assert_eq!(totals.total_price, price(150));
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let cart = Cart::new();
        let totals = cart.totals();
        assert_eq!(totals.total_items, 0);
        assert_eq!(totals.total_price, Price::ZERO);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_empties_all_lines() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Mug", 40));
        cart.add(&product(2, "Shirt", 90));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.totals().total_items, 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(&product(2, "Shirt", 90));
        cart.add(&product(1, "Mug", 40));
        cart.add(&product(2, "Shirt", 90));

        let ids: Vec<i64> = cart
            .lines()
            .iter()
            .map(|line| line.product_id.as_i64())
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_line_total() {
        let mut cart = Cart::new();
        let a = product(1, "A", 100);
        cart.add(&a);
        cart.add(&a);

        assert_eq!(cart.lines().first().unwrap().line_total(), price(200));
    }
}
