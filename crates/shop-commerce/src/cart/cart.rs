//! Cart and cart line types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Amount;
use serde::{Deserialize, Serialize};

/// A shopping cart for one page session.
///
/// Lines keep insertion order and there is at most one line per product.
/// Every operation is total: unknown ids are ignored and reported only
/// through the `bool` return value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line or appends a new one with quantity 1.
    /// Returns the line's quantity afterwards.
    pub fn add_to_cart(&mut self, product: &Product) -> i64 {
        if let Some(line) = self.line_mut(&product.id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(id = %product.id, quantity = line.quantity, "incremented cart line");
            return line.quantity;
        }

        self.lines.push(CartLine::new(product.clone()));
        tracing::debug!(id = %product.id, "added cart line");
        1
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or less removes the line, exactly as
    /// [`Cart::remove_from_cart`]. Returns whether a line for `id` existed.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_from_cart(id);
        }

        match self.line_mut(id) {
            Some(line) => {
                line.quantity = quantity;
                tracing::debug!(%id, quantity, "set cart line quantity");
                true
            }
            None => {
                tracing::debug!(%id, "ignoring quantity update for product not in cart");
                false
            }
        }
    }

    /// Remove the line for `id`. Returns whether one was removed.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|line| &line.product.id != id);
        let removed = self.lines.len() < len_before;
        if removed {
            tracing::debug!(%id, "removed cart line");
        } else {
            tracing::debug!(%id, "ignoring removal of product not in cart");
        }
        removed
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product.id == id)
    }

    /// Quantity of a product, zero when absent.
    pub fn quantity_of(&self, id: &ProductId) -> i64 {
        self.line(id).map_or(0, |line| line.quantity)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines, saturating at `i64::MAX`.
    pub fn cart_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0, |count: i64, line| count.saturating_add(line.quantity))
    }

    /// Σ price × quantity at full precision. Round only for display.
    pub fn cart_total(&self) -> Amount {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.product.id == id)
    }
}

/// A product and the quantity selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product when first added.
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1.
    pub quantity: i64,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The product's id.
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// price × quantity.
    pub fn subtotal(&self) -> Amount {
        self.product.price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn backpack() -> Product {
        Product::new("1", "Backpack", 109.95).with_category("men's clothing")
    }

    fn tshirt() -> Product {
        Product::new("2", "Slim Fit T-Shirt", 22.3)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.cart_count(), 0);
        assert_eq!(cart.cart_total().value(), 0.0);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_to_cart(&backpack()), 1);
        assert_eq!(cart.add_to_cart(&backpack()), 2);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(&ProductId::new("1")), 2);
    }

    #[test]
    fn test_count_two_of_a_one_of_b() {
        let mut cart = Cart::new();
        cart.add_to_cart(&backpack());
        cart.add_to_cart(&backpack());
        cart.add_to_cart(&tshirt());
        assert_eq!(cart.cart_count(), 3);
    }

    #[test]
    fn test_new_lines_append_in_order() {
        let mut cart = Cart::new();
        cart.add_to_cart(&tshirt());
        cart.add_to_cart(&backpack());
        cart.add_to_cart(&tshirt());

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id().as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_total_19_99_times_3() {
        let mut cart = Cart::new();
        let product = Product::new("9", "Gadget", 19.99);
        cart.add_to_cart(&product);
        cart.update_quantity(&product.id, 3);

        assert_eq!(cart.cart_total().display_amount(), "59.97");
        assert!((cart.cart_total().rounded() - 59.97).abs() < 1e-9);
    }

    #[test]
    fn test_update_quantity_is_absolute() {
        let mut cart = Cart::new();
        cart.add_to_cart(&backpack());
        cart.add_to_cart(&backpack());

        assert!(cart.update_quantity(&ProductId::new("1"), 5));
        assert_eq!(cart.quantity_of(&ProductId::new("1")), 5);
        assert!(cart.update_quantity(&ProductId::new("1"), 1));
        assert_eq!(cart.quantity_of(&ProductId::new("1")), 1);
    }

    #[test]
    fn test_update_to_zero_or_negative_removes() {
        for quantity in [0, -5] {
            let mut via_update = Cart::new();
            via_update.add_to_cart(&backpack());
            via_update.add_to_cart(&tshirt());
            let mut via_remove = via_update.clone();

            assert!(via_update.update_quantity(&ProductId::new("1"), quantity));
            assert!(via_remove.remove_from_cart(&ProductId::new("1")));
            assert_eq!(via_update, via_remove);
        }
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add_to_cart(&backpack());
        let before = cart.clone();

        assert!(!cart.update_quantity(&ProductId::new("404"), 3));
        assert!(!cart.update_quantity(&ProductId::new("404"), 0));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add_to_cart(&backpack());
        let before = cart.clone();

        assert!(!cart.remove_from_cart(&ProductId::new("404")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_twice_same_as_once() {
        let mut once = Cart::new();
        once.add_to_cart(&backpack());
        once.add_to_cart(&tshirt());
        let mut twice = once.clone();

        once.remove_from_cart(&ProductId::new("2"));
        twice.remove_from_cart(&ProductId::new("2"));
        twice.remove_from_cart(&ProductId::new("2"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_removed_product_re_added_goes_last() {
        let mut cart = Cart::new();
        cart.add_to_cart(&backpack());
        cart.add_to_cart(&tshirt());
        cart.remove_from_cart(&ProductId::new("1"));
        cart.add_to_cart(&backpack());

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id().as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(cart.quantity_of(&ProductId::new("1")), 1);
    }

    #[test]
    fn test_line_subtotal_and_total() {
        let mut cart = Cart::new();
        cart.add_to_cart(&backpack());
        cart.add_to_cart(&tshirt());
        cart.update_quantity(&ProductId::new("2"), 2);

        let line = cart.line(&ProductId::new("2")).unwrap();
        assert_eq!(line.subtotal().display(), "$44.60");
        assert_eq!(cart.cart_total().display(), "$154.55");
    }

    #[test]
    fn test_line_serializes_flat() {
        let mut cart = Cart::new();
        cart.add_to_cart(&tshirt());
        let json = serde_json::to_value(&cart.lines()[0]).unwrap();
        assert_eq!(json["id"], "2");
        assert_eq!(json["quantity"], 1);
    }

    #[test]
    fn test_count_saturates_at_max_quantity() {
        let mut cart = Cart::new();
        cart.add_to_cart(&backpack());
        cart.add_to_cart(&tshirt());
        assert!(cart.update_quantity(&ProductId::new("1"), i64::MAX));

        assert_eq!(cart.cart_count(), i64::MAX);
        assert_eq!(cart.add_to_cart(&backpack()), i64::MAX);
        assert_eq!(cart.cart_count(), i64::MAX);
        assert!(cart.cart_total().value().is_finite());
    }
}
