//! Shopping cart state.
//!
//! The cart is an ordered sequence of line items keyed by
//! `(product_id, variant)`. All mutations are synchronous in-memory writes;
//! totals are recomputed from the line sequence on every read, so a reader
//! can never observe stale aggregates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cute_shop_core::ProductId;

/// One product+variant entry in the cart.
///
/// `unit_price` is a snapshot of the catalog price at the time the item was
/// added; it is not re-fetched when the catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog product this line refers to.
    pub product_id: ProductId,
    /// Selected variant (e.g., color or size). Identity-affecting: the same
    /// product with a different variant is a distinct line.
    pub variant: Option<String>,
    /// Number of units, always >= 1 for a surviving line.
    pub quantity: u32,
    /// Price snapshot per unit at time of add.
    pub unit_price: Decimal,
}

impl LineItem {
    /// Total for this line (`quantity * unit_price`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Aggregates derived from the current line sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of all line quantities.
    pub total_quantity: u32,
    /// Sum of all line totals.
    pub total_amount: Decimal,
}

impl CartTotals {
    /// Totals of an empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_quantity: 0,
            total_amount: Decimal::ZERO,
        }
    }
}

/// In-memory cart store.
///
/// Created empty at session start and mutated only through its operations.
/// Insertion order is preserved for display. Invalid inputs (zero quantity,
/// negative price) are normalized rather than surfaced as errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartStore {
    lines: Vec<LineItem>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Current line items in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of a product+variant at the given price snapshot.
    ///
    /// If a line with the same `(product_id, variant)` already exists its
    /// quantity is incremented; otherwise a new line is appended. A zero
    /// `quantity` is normalized to a no-op, and a negative `unit_price` is
    /// clamped to zero.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        variant: Option<String>,
        quantity: u32,
        unit_price: Decimal,
    ) {
        if quantity == 0 {
            tracing::debug!(%product_id, "ignoring add of zero quantity");
            return;
        }

        let unit_price = unit_price.max(Decimal::ZERO);

        if let Some(line) = self.find_mut(&product_id, variant.as_deref()) {
            line.quantity = line.quantity.saturating_add(quantity);
            tracing::debug!(%product_id, quantity = line.quantity, "incremented cart line");
            return;
        }

        tracing::debug!(%product_id, quantity, "added cart line");
        self.lines.push(LineItem {
            product_id,
            variant,
            quantity,
            unit_price,
        });
    }

    /// Remove the line matching `(product_id, variant)`, if present.
    pub fn remove_item(&mut self, product_id: &ProductId, variant: Option<&str>) {
        let before = self.lines.len();
        self.lines
            .retain(|line| !(line.product_id == *product_id && line.variant.as_deref() == variant));
        if self.lines.len() < before {
            tracing::debug!(%product_id, "removed cart line");
        }
    }

    /// Set the quantity of the line matching `(product_id, variant)`.
    ///
    /// A quantity of zero removes the line, so no surviving line can hold a
    /// zero quantity. Absent lines are left alone; a quantity cannot be set
    /// without the price snapshot an add provides.
    pub fn set_quantity(&mut self, product_id: &ProductId, variant: Option<&str>, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id, variant);
            return;
        }

        if let Some(line) = self.find_mut(product_id, variant) {
            line.quantity = quantity;
            tracing::debug!(%product_id, quantity, "set cart line quantity");
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        tracing::debug!(lines = self.lines.len(), "cleared cart");
        self.lines.clear();
    }

    /// Totals recomputed from the current lines.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            total_quantity: self
                .lines
                .iter()
                .fold(0u32, |sum, line| sum.saturating_add(line.quantity)),
            total_amount: self.lines.iter().map(LineItem::line_total).sum(),
        }
    }

    fn find_mut(&mut self, product_id: &ProductId, variant: Option<&str>) -> Option<&mut LineItem> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == *product_id && line.variant.as_deref() == variant)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_merges_matching_lines() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("P1"), Some("red".into()), 2, dec("10.0"));
        cart.add_item(ProductId::new("P1"), Some("red".into()), 1, dec("10.0"));

        assert_eq!(cart.lines().len(), 1);
        let line = cart.lines().first().unwrap();
        assert_eq!(line.quantity, 3);
        assert_eq!(cart.totals().total_amount, dec("30.0"));
    }

    #[test]
    fn test_variant_distinguishes_lines() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("P1"), Some("red".into()), 1, dec("10.0"));
        cart.add_item(ProductId::new("P1"), Some("blue".into()), 1, dec("10.0"));
        cart.add_item(ProductId::new("P1"), None, 1, dec("10.0"));

        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.totals().total_quantity, 3);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("P1"), None, 0, dec("10.0"));

        assert!(cart.is_empty());
        assert_eq!(cart.totals(), CartTotals::empty());
    }

    #[test]
    fn test_add_negative_price_clamped_to_zero() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("P1"), None, 2, dec("-5.0"));

        assert_eq!(cart.totals().total_amount, Decimal::ZERO);
        assert_eq!(cart.totals().total_quantity, 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("P2"), None, 1, dec("1.0"));
        cart.add_item(ProductId::new("P1"), None, 1, dec("1.0"));
        cart.add_item(ProductId::new("P3"), None, 1, dec("1.0"));
        // Merging must not reorder.
        cart.add_item(ProductId::new("P1"), None, 1, dec("1.0"));

        let ids: Vec<&str> = cart
            .lines()
            .iter()
            .map(|line| line.product_id.as_str())
            .collect();
        assert_eq!(ids, vec!["P2", "P1", "P3"]);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("P1"), Some("red".into()), 2, dec("10.0"));
        cart.add_item(ProductId::new("P2"), None, 1, dec("5.0"));

        cart.remove_item(&ProductId::new("P1"), Some("red"));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.totals().total_amount, dec("5.0"));

        // Absent line is a no-op.
        cart.remove_item(&ProductId::new("P9"), None);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("P1"), None, 2, dec("10.0"));

        cart.set_quantity(&ProductId::new("P1"), None, 5);
        assert_eq!(cart.totals().total_quantity, 5);
        assert_eq!(cart.totals().total_amount, dec("50.0"));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("P1"), None, 2, dec("10.0"));

        cart.set_quantity(&ProductId::new("P1"), None, 0);
        assert!(cart.is_empty());
        assert_eq!(cart.totals(), CartTotals::empty());
    }

    #[test]
    fn test_set_quantity_absent_line_is_noop() {
        let mut cart = CartStore::new();
        cart.set_quantity(&ProductId::new("P1"), None, 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("P1"), None, 2, dec("10.0"));
        cart.add_item(ProductId::new("P2"), None, 1, dec("3.5"));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.totals(), CartTotals::empty());
    }

    #[test]
    fn test_totals_consistent_under_interleaving() {
        let mut cart = CartStore::new();
        cart.add_item(ProductId::new("P1"), Some("red".into()), 2, dec("10.0"));
        cart.add_item(ProductId::new("P2"), None, 1, dec("4.25"));
        cart.set_quantity(&ProductId::new("P2"), None, 4);
        cart.add_item(ProductId::new("P1"), Some("red".into()), 1, dec("10.0"));
        cart.remove_item(&ProductId::new("P2"), None);

        let expected: Decimal = cart.lines().iter().map(LineItem::line_total).sum();
        let totals = cart.totals();
        assert_eq!(totals.total_amount, expected);
        assert_eq!(totals.total_amount, dec("30.0"));
        assert_eq!(totals.total_quantity, 3);
    }
}
