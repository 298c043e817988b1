//! # Ledger Actor
//!
//! The server half: owns the [`CartLedger`] and processes requests
//! sequentially, so ledger state needs no lock.

use crate::cart_actor::{CartError, CartLedger};
use crate::checkout::{CheckoutRequest, CheckoutTrigger};
use crate::framework::{CartSnapshot, LedgerError, LedgerHandle, LedgerRequest};
use crate::notify::CartEvent;
use crate::totals::{compute_totals, ShippingPolicy, Totals};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns one cart for the lifetime of a shopping session.
///
/// # Usage Pattern
///
/// 1.  **Create**: `LedgerActor::new()` returns the actor and a [`LedgerHandle`].
/// 2.  **Wire**: pass the checkout trigger into `actor.run(checkout)`.
/// 3.  **Run**: spawn the run loop; clone the handle for every collaborator.
///
/// The loop ends when the last handle is dropped.
pub struct LedgerActor {
    receiver: mpsc::Receiver<LedgerRequest>,
    ledger: CartLedger,
    policy: ShippingPolicy,
}

impl LedgerActor {
    /// Creates a new `LedgerActor` and its associated `LedgerHandle`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. Callers wait when it is full.
    /// * `ledger` - The ledger to own, usually empty.
    /// * `policy` - Shipping rule used for every totals computation.
    pub fn new(
        buffer_size: usize,
        ledger: CartLedger,
        policy: ShippingPolicy,
    ) -> (Self, LedgerHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            ledger,
            policy,
        };
        (actor, LedgerHandle::new(sender))
    }

    fn totals(&self) -> Totals {
        compute_totals(self.ledger.items(), &self.policy)
    }

    /// Runs the actor's event loop until every handle is dropped.
    ///
    /// The checkout trigger is injected here rather than in `new` so it can
    /// itself hold handles created after the actor.
    pub async fn run(mut self, checkout: Arc<dyn CheckoutTrigger>) {
        info!(
            threshold = self.policy.free_shipping_threshold,
            flat_cost = self.policy.flat_shipping_cost,
            "Cart actor started"
        );

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LedgerRequest::AddItem {
                    product,
                    quantity,
                    respond_to,
                } => {
                    debug!(id = %product.id, quantity, "AddItem");
                    let result: Result<_, LedgerError> =
                        self.ledger.add_item(&product, quantity).map_err(Into::into);
                    if let Err(e) = &result {
                        warn!(id = %product.id, error = %e, "AddItem rejected");
                    }
                    let _ = respond_to.send(result);
                }
                LedgerRequest::UpdateQuantity {
                    id,
                    quantity,
                    respond_to,
                } => {
                    debug!(%id, quantity, "UpdateQuantity");
                    let outcome = self.ledger.update_quantity(&id, quantity);
                    let _ = respond_to.send(Ok(outcome));
                }
                LedgerRequest::RemoveItem { id, respond_to } => {
                    debug!(%id, "RemoveItem");
                    let removed = self.ledger.remove_item(&id);
                    let _ = respond_to.send(Ok(removed));
                }
                LedgerRequest::Clear { respond_to } => {
                    debug!("Clear");
                    let dropped = self.ledger.clear();
                    let _ = respond_to.send(Ok(dropped));
                }
                LedgerRequest::Items { respond_to } => {
                    debug!(lines = self.ledger.len(), "Items");
                    let _ = respond_to.send(Ok(self.ledger.items().to_vec()));
                }
                LedgerRequest::Totals { respond_to } => {
                    let totals = self.totals();
                    debug!(?totals, "Totals");
                    let _ = respond_to.send(Ok(totals));
                }
                LedgerRequest::Snapshot { respond_to } => {
                    let snapshot = CartSnapshot {
                        items: self.ledger.items().to_vec(),
                        totals: self.totals(),
                    };
                    debug!(lines = snapshot.items.len(), total = snapshot.totals.total, "Snapshot");
                    let _ = respond_to.send(Ok(snapshot));
                }
                LedgerRequest::Checkout { respond_to } => {
                    debug!("Checkout");
                    if self.ledger.is_empty() {
                        warn!("Checkout rejected: cart is empty");
                        let _ = respond_to.send(Err(CartError::EmptyCart.into()));
                        continue;
                    }
                    let request = CheckoutRequest {
                        items: self.ledger.items().to_vec(),
                        totals: self.totals(),
                    };
                    self.ledger.notify(CartEvent::checkout_requested());
                    let ack = checkout.request_checkout(&request).await;
                    if ack.clears_cart() {
                        self.ledger.clear();
                    }
                    info!(?ack, "Checkout acknowledged");
                    let _ = respond_to.send(Ok(ack));
                }
            }
        }

        info!(lines = self.ledger.len(), "Shutdown");
    }
}
