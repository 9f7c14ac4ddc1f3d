//! Simulated checkout results.

use chrono::{DateTime, Utc};
use serde::Serialize;

use saber_simples_core::{Cart, CartLine, CurrencyCode, OrderId, Price};

use crate::messages;

/// Receipt of a confirmed (simulated) order. No payment is taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReceipt {
    /// Random order number.
    pub order_id: OrderId,
    /// When the shopper confirmed.
    pub placed_at: DateTime<Utc>,
    /// Lines as they were at confirmation.
    pub lines: Vec<CartLine>,
    /// Order total.
    pub total: Price,
}

impl OrderReceipt {
    /// Snapshot `cart` into a receipt stamped now.
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            order_id: OrderId::generate(),
            placed_at: Utc::now(),
            lines: cart.lines().to_vec(),
            total: cart.total(),
        }
    }
}

/// Itemized summary the shopper confirms before the order is placed.
#[must_use]
pub fn order_summary(cart: &Cart, currency: CurrencyCode) -> String {
    messages::order_summary(
        cart.lines()
            .iter()
            .map(|line| (line.name.as_str(), line.price.display(currency))),
        &cart.total().display(currency),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use saber_simples_core::GuideId;

    use super::*;

    #[test]
    fn test_summary_lists_lines_and_total() {
        let cart: Cart = [
            CartLine::new(GuideId::parse("g1").unwrap(), "Guide One", Price::from_cents(100)),
            CartLine::new(GuideId::parse("g2").unwrap(), "Guide Two", Price::from_cents(250)),
        ]
        .into_iter()
        .collect();

        let summary = order_summary(&cart, CurrencyCode::BRL);
        assert!(summary.contains("- Guide One (R$ 1,00)\n- Guide Two (R$ 2,50)"));
        assert!(summary.contains("Total a Pagar: R$ 3,50"));
    }

    #[test]
    fn test_receipt_snapshots_cart() {
        let cart: Cart = [CartLine::new(
            GuideId::parse("g1").unwrap(),
            "Guide One",
            Price::from_cents(100),
        )]
        .into_iter()
        .collect();

        let receipt = OrderReceipt::from_cart(&cart);
        assert_eq!(receipt.lines, cart.lines());
        assert_eq!(receipt.total, Price::from_cents(100));
    }
}
