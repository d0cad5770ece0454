//! Cart pricing calculations.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Per-line-item pricing breakdown.
    pub line_items: Vec<LineItemPricing>,
    /// Final total across all lines.
    pub grand_total: Money,
}

impl CartPricing {
    /// Check if there is anything to pay for.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Subtotal (unit_price * quantity).
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_empty_pricing() {
        let pricing = CartPricing {
            line_items: vec![],
            grand_total: Money::zero(Currency::IDR),
        };
        assert!(pricing.is_empty());
        assert!(pricing.grand_total.is_zero());
    }

    #[test]
    fn test_line_item_pricing_fields() {
        let line = LineItemPricing {
            product_id: ProductId::new(1),
            unit_price: Money::new(10_000, Currency::IDR),
            quantity: 2,
            subtotal: Money::new(20_000, Currency::IDR),
        };
        assert_eq!(line.subtotal.amount_minor, line.unit_price.amount_minor * 2);
    }
}
