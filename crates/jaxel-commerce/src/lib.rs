//! E-commerce domain types and cart logic for the Jaxel storefront.
//!
//! This crate holds the view-independent core of the storefront:
//!
//! - **Cart**: in-memory shopping cart keyed by product, with additive
//!   merging, quantity stepping, and derived totals
//! - **Checkout**: pure construction of the order-creation payload from a
//!   cart (optionally filtered to a selected subset)
//! - **Orders**: order-history types as returned by the backend
//!
//! Network access lives in `jaxel-data`; this crate never performs I/O.
//!
//! # Example
//!
//! ```rust
//! use jaxel_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add_item(LineItem::new(
//!     ProductId::new(1),
//!     "Kemeja Flanel",
//!     Money::new(150_000, Currency::IDR),
//!     2,
//! ));
//!
//! assert_eq!(cart.item_count(), 2);
//! let total = cart.total_price().unwrap();
//! assert_eq!(total, Money::new(300_000, Currency::IDR));
//!
//! let payload = CheckoutPayload::from_cart(&cart).unwrap();
//! assert_eq!(payload.items.len(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem, LineItemPricing};

    // Checkout
    pub use crate::checkout::{
        CheckoutItem, CheckoutPayload, Order, OrderLineItem, OrderStatus,
    };
}
