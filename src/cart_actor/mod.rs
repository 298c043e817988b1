//! # Cart Actor
//!
//! The shopping cart: a [`CartLedger`] of [`LineItem`](crate::model::LineItem)s
//! and the factory that puts one behind a [`LedgerActor`].
//!
//! ## Structure
//!
//! - [`ledger`] - [`CartLedger`], the synchronous ledger and its invariants
//! - [`error`] - [`CartError`] for rejected input
//! - [`new()`] - Factory function that creates the actor and its handle
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, handle) = cart_actor::new(32, notifier, ShippingPolicy::default());
//! tokio::spawn(actor.run(Arc::new(PlaceholderCheckout)));
//!
//! let client = CartClient::new(handle);
//! client.add_item(product, 1).await?;
//! ```

pub mod error;
pub mod ledger;

pub use error::*;
pub use ledger::*;

use crate::framework::{LedgerActor, LedgerHandle};
use crate::notify::Notifier;
use crate::totals::ShippingPolicy;
use std::sync::Arc;

/// Creates a new cart actor and its handle.
pub fn new(
    buffer_size: usize,
    notifier: Arc<dyn Notifier>,
    policy: ShippingPolicy,
) -> (LedgerActor, LedgerHandle) {
    LedgerActor::new(buffer_size, CartLedger::new(notifier), policy)
}
