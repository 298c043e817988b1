//! Checkout boundary.
//!
//! The storefront has no order or payment flow: requesting checkout only
//! acknowledges the request. [`CheckoutTrigger`] is the seam where real order
//! submission plugs in.

use async_trait::async_trait;
use tracing::info;

use crate::model::LineItem;
use crate::totals::Totals;

/// What the cart looked like when the shopper pressed checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub items: Vec<LineItem>,
    pub totals: Totals,
}

/// Reply from a [`CheckoutTrigger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutAck {
    /// The shopper is being handed off. The cart is left untouched.
    Redirecting,
    /// The order went through. The cart is cleared.
    Completed { reference: String },
}

impl CheckoutAck {
    pub fn clears_cart(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

#[async_trait]
pub trait CheckoutTrigger: Send + Sync {
    /// Called only for non-empty carts.
    async fn request_checkout(&self, request: &CheckoutRequest) -> CheckoutAck;
}

/// Acknowledges every request with [`CheckoutAck::Redirecting`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderCheckout;

#[async_trait]
impl CheckoutTrigger for PlaceholderCheckout {
    async fn request_checkout(&self, request: &CheckoutRequest) -> CheckoutAck {
        info!(
            lines = request.items.len(),
            total = request.totals.total,
            "Checkout requested"
        );
        CheckoutAck::Redirecting
    }
}
