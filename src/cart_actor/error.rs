//! Error types for the cart.

use thiserror::Error;

/// Input the cart refuses to act on.
///
/// Every variant is rejected before any state changes. Missing line items are
/// not errors: see [`UpdateOutcome::NotFound`](crate::cart_actor::UpdateOutcome).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// Quantities passed to `add_item` must be at least 1.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Product id must not be empty")]
    EmptyProductId,

    #[error("Invalid price for {id}: {price}")]
    InvalidPrice { id: String, price: u64 },

    /// Two catalog entries share an id.
    #[error("Duplicate product: {0}")]
    DuplicateProduct(String),

    /// The catalog has no product with this id.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Checkout is disabled while the cart is empty.
    #[error("Cart is empty")]
    EmptyCart,
}
