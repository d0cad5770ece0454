//! Checkout module.
//!
//! Contains checkout-payload construction and order-history types.

mod order;
mod payload;

pub use order::{orders_total, Order, OrderLineItem, OrderStatus};
pub use payload::{CheckoutItem, CheckoutPayload};
