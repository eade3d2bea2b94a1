//! Simulated checkout.
//!
//! There is no payment processing: placing an order snapshots the cart into
//! an [`Order`] and empties the cart, matching the storefront's
//! order-review then payment-confirmation flow.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use cute_shop_core::OrderId;

use crate::cart::{CartStore, LineItem};

/// Errors from placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout requires at least one line item.
    #[error("cannot place an order from an empty cart")]
    EmptyCart,
}

/// A placed (simulated) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier.
    pub id: OrderId,
    /// Line items at the moment of checkout.
    pub lines: Vec<LineItem>,
    /// Total quantity across all lines.
    pub total_quantity: u32,
    /// Total amount across all lines.
    pub total_amount: Decimal,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

/// Place an order from the current cart contents and clear the cart.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if the cart holds no lines; the
/// cart is left untouched in that case.
pub fn place_order(cart: &mut CartStore) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let totals = cart.totals();
    let order = Order {
        id: OrderId::new(Uuid::new_v4().to_string()),
        lines: cart.lines().to_vec(),
        total_quantity: totals.total_quantity,
        total_amount: totals.total_amount,
        placed_at: Utc::now(),
    };

    cart.clear();
    tracing::info!(order_id = %order.id, total = %order.total_amount, "placed order");
    Ok(order)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cute_shop_core::ProductId;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_place_order_snapshots_cart_and_clears_it() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("P1"), Some("red".into()), 2, dec("10.0"));
        cart.add_item(ProductId::new("P2"), None, 1, dec("4.5"));
        let totals = cart.totals();

        let order = place_order(&mut cart).unwrap();
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.total_quantity, totals.total_quantity);
        assert_eq!(order.total_amount, totals.total_amount);
        assert_eq!(order.total_amount, dec("24.5"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let mut cart = CartStore::new();
        assert!(matches!(place_order(&mut cart), Err(CheckoutError::EmptyCart)));
    }

    #[test]
    fn test_order_ids_are_unique() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("P1"), None, 1, dec("1.0"));
        let first = place_order(&mut cart).unwrap();

        cart.add_item(ProductId::new("P1"), None, 1, dec("1.0"));
        let second = place_order(&mut cart).unwrap();

        assert_ne!(first.id, second.id);
    }
}
