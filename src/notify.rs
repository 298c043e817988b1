//! Transient cart notifications.
//!
//! The ledger reports user-visible changes to an injected [`Notifier`]. Delivery
//! is fire-and-forget: a notifier with nobody listening drops the event.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;
use tracing::info;

use crate::model::ProductId;

/// Something the shopper should be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added, either as a new line or on top of an existing one.
    /// Also tells the cart panel to open.
    ItemAdded {
        id: ProductId,
        quantity: u32,
        message: String,
    },
    ItemRemoved { id: ProductId, message: String },
    CheckoutRequested { message: String },
}

impl CartEvent {
    pub fn item_added(id: ProductId, name: &str, quantity: u32, repeat: bool) -> Self {
        let message = if repeat {
            format!("Added another {name} to cart!")
        } else {
            format!("{name} added to cart!")
        };
        Self::ItemAdded { id, quantity, message }
    }

    pub fn item_removed(id: ProductId) -> Self {
        Self::ItemRemoved {
            id,
            message: "Item removed from cart".to_string(),
        }
    }

    pub fn checkout_requested() -> Self {
        Self::CheckoutRequested {
            message: "Redirecting to checkout...".to_string(),
        }
    }

    /// Human-readable text for a toast.
    pub fn message(&self) -> &str {
        match self {
            Self::ItemAdded { message, .. }
            | Self::ItemRemoved { message, .. }
            | Self::CheckoutRequested { message } => message,
        }
    }

    pub fn opens_panel(&self) -> bool {
        matches!(self, Self::ItemAdded { .. })
    }
}

/// Receives cart notifications. Implementations must not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: CartEvent);
}

/// Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: CartEvent) {}
}

/// Writes each message to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, event: CartEvent) {
        info!(message = event.message(), "Cart notification");
    }
}

/// Fans events out to any number of subscribers over a Tokio broadcast channel.
///
/// Lossy: sending with no subscribers is ignored, and a subscriber that falls
/// more than `capacity` events behind skips the oldest ones.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<CartEvent>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.sender.subscribe()
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, event: CartEvent) {
        let _ = self.sender.send(event);
    }
}

/// Keeps every event in memory. Handy for tests and for hosts that poll.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<CartEvent>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn events(&self) -> MutexGuard<'_, Vec<CartEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns and clears the recorded events.
    pub fn take(&self) -> Vec<CartEvent> {
        std::mem::take(&mut *self.events())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: CartEvent) {
        self.events().push(event);
    }
}
