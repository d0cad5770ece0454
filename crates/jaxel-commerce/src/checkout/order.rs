//! Order history types.

use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Order status as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order confirmed and processing.
    Confirmed,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse a backend status string. Unknown strings yield `None`; callers
    /// decide how to present them.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
    }
}

/// A line within a past order.
///
/// Price is the per-unit price the order was placed at, not the product's
/// current price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub title: String,
    pub unit_price: Money,
    pub quantity: i64,
}

impl OrderLineItem {
    /// Total for this line (unit_price * quantity).
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// A past order, as shown on the order-history page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    /// Backend-supplied raw status string, kept for display when it does not
    /// map onto [`OrderStatus`].
    pub raw_status: String,
    /// ISO-8601 creation timestamp as sent by the backend.
    pub created_at: String,
    pub items: Vec<OrderLineItem>,
}

impl Order {
    /// Total for this order.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let currency = self
            .items
            .first()
            .map(|i| i.unit_price.currency)
            .unwrap_or(Currency::IDR);
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
}

/// Grand total across a set of orders (the "pay for everything" figure on
/// the order-history page).
pub fn orders_total(orders: &[Order]) -> Result<Money, CommerceError> {
    let currency = orders
        .iter()
        .flat_map(|o| o.items.first())
        .map(|i| i.unit_price.currency)
        .next()
        .unwrap_or(Currency::IDR);
    let mut total = Money::zero(currency);
    for order in orders {
        let order_total = order.total()?;
        total = total
            .try_add(&order_total)
            .ok_or_else(|| CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: order_total.currency.code().to_string(),
            })?;
    }
    Ok(total)
}
