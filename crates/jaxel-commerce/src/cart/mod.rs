//! Shopping cart module.
//!
//! Contains the cart aggregator, line items, and pricing breakdown.

mod cart;
mod pricing;

pub use cart::{Cart, LineItem};
pub use pricing::{CartPricing, LineItemPricing};
