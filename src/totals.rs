//! Derived cart totals.
//!
//! Everything here is a pure function of the current line items. Nothing is
//! cached: totals are recomputed on every call.

use serde::{Deserialize, Serialize};

use crate::model::LineItem;

/// Shipping rule: orders strictly above the threshold ship free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingPolicy {
    pub free_shipping_threshold: u64,
    pub flat_shipping_cost: u64,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: 500,
            flat_shipping_cost: 50,
        }
    }
}

impl ShippingPolicy {
    /// `0` when `subtotal > threshold`, the flat cost otherwise.
    ///
    /// A subtotal exactly at the threshold still pays shipping, and so does an
    /// empty cart.
    pub fn shipping_for(&self, subtotal: u64) -> u64 {
        if subtotal > self.free_shipping_threshold {
            0
        } else {
            self.flat_shipping_cost
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: u64,
    pub shipping: u64,
    pub total: u64,
    /// `max(0, threshold - subtotal)`.
    pub amount_to_free_shipping: u64,
    pub line_count: usize,
    pub unit_count: u64,
}

impl Totals {
    pub fn qualifies_for_free_shipping(&self) -> bool {
        self.shipping == 0
    }

    /// Amount still needed for free shipping, shown only while
    /// `0 < subtotal < threshold`.
    pub fn free_shipping_hint(&self) -> Option<u64> {
        (self.subtotal > 0 && self.amount_to_free_shipping > 0)
            .then_some(self.amount_to_free_shipping)
    }
}

/// Computes subtotal, shipping and total for `items` under `policy`.
///
/// Amounts saturate at `u64::MAX` instead of overflowing.
pub fn compute_totals(items: &[LineItem], policy: &ShippingPolicy) -> Totals {
    let subtotal = items
        .iter()
        .map(LineItem::line_total)
        .fold(0u64, u64::saturating_add);
    let shipping = policy.shipping_for(subtotal);
    Totals {
        subtotal,
        shipping,
        total: subtotal.saturating_add(shipping),
        amount_to_free_shipping: policy.free_shipping_threshold.saturating_sub(subtotal),
        line_count: items.len(),
        unit_count: items
            .iter()
            .map(|line| u64::from(line.quantity))
            .fold(0u64, u64::saturating_add),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn line(id: &str, price: u64, quantity: u32) -> LineItem {
        let product = Product::new(id, id, "", price, "", "").unwrap();
        LineItem::from_product(&product, quantity)
    }

    #[test]
    fn test_threshold_is_strict() {
        let policy = ShippingPolicy::default();

        let at = compute_totals(&[line("big", 500, 1)], &policy);
        assert_eq!((at.subtotal, at.shipping, at.total), (500, 50, 550));
        assert!(!at.qualifies_for_free_shipping());
        assert_eq!(at.free_shipping_hint(), None);

        let above = compute_totals(&[line("big", 500, 1), line("tiny", 1, 1)], &policy);
        assert_eq!((above.subtotal, above.shipping, above.total), (501, 0, 501));
        assert!(above.qualifies_for_free_shipping());
        assert_eq!(above.amount_to_free_shipping, 0);
    }

    #[test]
    fn test_empty_cart_still_pays_flat_shipping() {
        // Literal behaviour of the strict rule: 0 is not above the threshold.
        let totals = compute_totals(&[], &ShippingPolicy::default());
        assert_eq!(totals.subtotal, 0);
        assert_eq!(totals.shipping, 50);
        assert_eq!(totals.total, 50);
        assert_eq!(totals.free_shipping_hint(), None);
    }

    #[test]
    fn test_storefront_scenario() {
        let items = [line("bottle-200ml", 40, 3), line("monthly-pack-10", 299, 1)];
        let totals = compute_totals(&items, &ShippingPolicy::default());
        assert_eq!(totals.subtotal, 419);
        assert_eq!(totals.shipping, 50);
        assert_eq!(totals.total, 469);
        assert_eq!(totals.free_shipping_hint(), Some(81));
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.unit_count, 4);
    }

    #[test]
    fn test_huge_prices_saturate() {
        let items = [line("pricey", u64::MAX / 2, 3), line("bottle-200ml", 40, 1)];
        let totals = compute_totals(&items, &ShippingPolicy::default());
        assert_eq!(totals.subtotal, u64::MAX);
        assert_eq!(totals.shipping, 0);
        assert_eq!(totals.total, u64::MAX);

        let policy = ShippingPolicy {
            free_shipping_threshold: u64::MAX,
            flat_shipping_cost: 50,
        };
        let totals = compute_totals(&[line("pricey", u64::MAX - 10, 1)], &policy);
        assert_eq!(totals.shipping, 50);
        assert_eq!(totals.total, u64::MAX);
    }

    #[test]
    fn test_custom_policy() {
        let policy = ShippingPolicy {
            free_shipping_threshold: 100,
            flat_shipping_cost: 15,
        };
        let totals = compute_totals(&[line("a", 60, 2)], &policy);
        assert_eq!(totals.shipping, 0);
        assert_eq!(totals.total, 120);
    }
}
