//! Cart and line item types.

use crate::cart::{CartPricing, LineItemPricing};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// `title` and `unit_price` are snapshots taken when the item was added and
/// are not re-fetched while the item sits in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased. Unique key within a cart.
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity, always >= 1.
    pub quantity: i64,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(
        product_id: ProductId,
        title: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Self {
        Self {
            product_id,
            title: title.into(),
            unit_price,
            quantity,
        }
    }

    /// Total price for this line (unit_price * quantity).
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// The in-memory shopping cart.
///
/// A plain owned value: every consumer constructs or is handed its own
/// `Cart`, so tests and views get isolated instances rather than sharing a
/// process-wide singleton. Items are keyed by `product_id`; at most one entry
/// exists per product at any time.
///
/// The cart is reconciled with the backend only at explicit boundaries:
/// [`Cart::hydrate`] replaces contents from an authoritative fetch, and a
/// successful checkout clears the submitted subset via
/// [`Cart::remove_selected`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart.
    items: Vec<LineItem>,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item to the cart.
    ///
    /// If an entry for the same product already exists its quantity is
    /// increased by `item.quantity` (additive merge); otherwise the item is
    /// inserted as a new entry. Quantity is validated by the caller; an item
    /// with a non-positive quantity is ignored.
    pub fn add_item(&mut self, item: LineItem) {
        if item.quantity <= 0 {
            return;
        }
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            self.items.push(item);
        }
    }

    /// Remove the entry for a product.
    ///
    /// Returns `false` (a no-op, not an error) if the product is not in the
    /// cart, so repeated removal is idempotent.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Remove exactly the given subset of products.
    ///
    /// Used after a successful subset checkout: only the submitted entries
    /// are cleared, everything else stays in the cart.
    pub fn remove_selected(&mut self, product_ids: &[ProductId]) {
        self.items.retain(|i| !product_ids.contains(&i.product_id));
    }

    /// Increase a product's quantity by one.
    ///
    /// No-op if the product is not in the cart.
    pub fn increase_quantity(&mut self, product_id: ProductId) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = item.quantity.saturating_add(1);
        }
    }

    /// Decrease a product's quantity by one, stopping at 1.
    ///
    /// An entry at quantity 1 is left unchanged rather than removed;
    /// removal is a separate explicit operation.
    pub fn decrease_quantity(&mut self, product_id: ProductId) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            if item.quantity > 1 {
                item.quantity -= 1;
            }
        }
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the cart contents from an authoritative backend fetch.
    ///
    /// Duplicate product ids in the input are merged additively, preserving
    /// the one-entry-per-product invariant.
    pub fn hydrate(&mut self, items: Vec<LineItem>) {
        self.items.clear();
        for item in items {
            self.add_item(item);
        }
    }

    /// Get total item count (sum of quantities). Shown on the cart badge.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of unique products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Iterate over the items.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Grand total across all items.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        let currency = self.currency();
        let mut total = Money::zero(currency);
        for item in &self.items {
            let subtotal = item.subtotal()?;
            total = total
                .try_add(&subtotal)
                .ok_or_else(|| CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: item.unit_price.currency.code().to_string(),
                })?;
        }
        Ok(total)
    }

    /// Calculate the full pricing breakdown, enough for any view to render
    /// line items, per-line subtotals, and a grand total.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        let mut line_items = Vec::with_capacity(self.items.len());
        for item in &self.items {
            line_items.push(LineItemPricing {
                product_id: item.product_id,
                unit_price: item.unit_price,
                quantity: item.quantity,
                subtotal: item.subtotal()?,
            });
        }
        let grand_total = self.total_price()?;
        Ok(CartPricing {
            line_items,
            grand_total,
        })
    }

    /// The currency of the cart's items.
    ///
    /// An empty cart defaults to IDR. Mixed currencies are rejected at
    /// aggregation time, not insertion time.
    fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|i| i.unit_price.currency)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: i64, price: i64, quantity: i64) -> LineItem {
        LineItem::new(
            ProductId::new(product_id),
            format!("Product {}", product_id),
            Money::new(price, Currency::IDR),
            quantity,
        )
    }

    #[test]
    fn test_cart_starts_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price().unwrap(), Money::zero(Currency::IDR));
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 10_000, 2));

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new();
        cart.add_item(LineItem::new(
            ProductId::new(1),
            "Shirt",
            Money::new(50_000, Currency::IDR),
            2,
        ));
        cart.add_item(LineItem::new(
            ProductId::new(1),
            "Shirt",
            Money::new(50_000, Currency::IDR),
            1,
        ));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 3);
        assert_eq!(
            cart.total_price().unwrap(),
            Money::new(150_000, Currency::IDR)
        );
    }

    #[test]
    fn test_add_item_sums_across_sequence() {
        let mut cart = Cart::new();
        for qty in [1, 4, 2] {
            cart.add_item(item(7, 1000, qty));
        }
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(ProductId::new(7)).unwrap().quantity, 7);
    }

    #[test]
    fn test_add_item_non_positive_quantity_ignored() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 0));
        cart.add_item(item(1, 1000, -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 1));

        assert!(cart.remove_item(ProductId::new(1)));
        assert!(!cart.remove_item(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_item_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 1));
        assert!(!cart.remove_item(ProductId::new(99)));
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_increase_quantity() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 1));
        cart.increase_quantity(ProductId::new(1));
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 2);
    }

    #[test]
    fn test_decrease_quantity_stops_at_one() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 2));

        cart.decrease_quantity(ProductId::new(1));
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 1);

        // At quantity 1 the entry stays put, unchanged.
        cart.decrease_quantity(ProductId::new(1));
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 1);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_quantity_stepping_on_absent_product_is_noop() {
        let mut cart = Cart::new();
        cart.increase_quantity(ProductId::new(1));
        cart.decrease_quantity(ProductId::new(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 2));
        cart.add_item(item(2, 2000, 1));

        cart.clear();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price().unwrap(), Money::zero(Currency::IDR));
    }

    #[test]
    fn test_remove_selected_keeps_the_rest() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 10_000, 2));
        cart.add_item(item(2, 5_000, 1));

        cart.remove_selected(&[ProductId::new(1)]);

        assert!(cart.get(ProductId::new(1)).is_none());
        let remaining = cart.get(ProductId::new(2)).unwrap();
        assert_eq!(remaining.quantity, 1);
    }

    #[test]
    fn test_item_count_and_total_price() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 10_000, 2));
        cart.add_item(item(2, 5_000, 1));

        assert_eq!(cart.item_count(), 3);
        assert_eq!(
            cart.total_price().unwrap(),
            Money::new(25_000, Currency::IDR)
        );
    }

    #[test]
    fn test_hydrate_replaces_contents() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 5));

        cart.hydrate(vec![item(2, 2000, 1), item(3, 3000, 2)]);

        assert!(cart.get(ProductId::new(1)).is_none());
        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_hydrate_merges_duplicate_ids() {
        let mut cart = Cart::new();
        cart.hydrate(vec![item(1, 1000, 1), item(1, 1000, 2)]);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 3);
    }

    #[test]
    fn test_pricing_breakdown() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 10_000, 2));
        cart.add_item(item(2, 5_000, 1));

        let pricing = cart.pricing().unwrap();
        assert_eq!(pricing.line_items.len(), 2);
        assert_eq!(pricing.grand_total, Money::new(25_000, Currency::IDR));

        let line = &pricing.line_items[0];
        assert_eq!(line.subtotal, Money::new(20_000, Currency::IDR));
    }

    #[test]
    fn test_mixed_currency_total_is_rejected() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 1000, 1));
        cart.add_item(LineItem::new(
            ProductId::new(2),
            "Imported",
            Money::new(500, Currency::USD),
            1,
        ));

        assert!(matches!(
            cart.total_price(),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
