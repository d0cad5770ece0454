//! Checkout payload construction.
//!
//! Pure functions from a cart (optionally filtered to a selected subset) to
//! the body of `POST /api/orders/checkout`. An empty selection is refused
//! here, locally, so callers never issue a pointless backend call.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One product-and-quantity pair submitted for order creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// The body of the order-creation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutPayload {
    pub items: Vec<CheckoutItem>,
}

impl CheckoutPayload {
    /// Build a payload covering the whole cart.
    ///
    /// Returns [`CommerceError::EmptySelection`] for an empty cart.
    pub fn from_cart(cart: &Cart) -> Result<Self, CommerceError> {
        let items: Vec<CheckoutItem> = cart
            .items()
            .iter()
            .map(|i| CheckoutItem {
                product_id: i.product_id,
                quantity: i.quantity,
            })
            .collect();
        if items.is_empty() {
            return Err(CommerceError::EmptySelection);
        }
        Ok(Self { items })
    }

    /// Build a payload from the subset of the cart selected for checkout.
    ///
    /// Selected ids with no cart entry are skipped. If the selection yields
    /// no items at all, checkout is refused with
    /// [`CommerceError::EmptySelection`] and no network call should be made.
    pub fn from_selection(
        cart: &Cart,
        selected: &[ProductId],
    ) -> Result<Self, CommerceError> {
        let items: Vec<CheckoutItem> = selected
            .iter()
            .filter_map(|id| cart.get(*id))
            .map(|i| CheckoutItem {
                product_id: i.product_id,
                quantity: i.quantity,
            })
            .collect();
        if items.is_empty() {
            return Err(CommerceError::EmptySelection);
        }
        Ok(Self { items })
    }

    /// The product ids in this payload.
    ///
    /// After a confirmed checkout these are the entries to clear from the
    /// cart via [`Cart::remove_selected`].
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|i| i.product_id).collect()
    }
}
