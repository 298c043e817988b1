//! # Ledger Messages
//!
//! The requests a [`LedgerHandle`](crate::framework::LedgerHandle) sends to a
//! [`LedgerActor`](crate::framework::LedgerActor). Each carries a oneshot
//! sender for the reply.

use crate::cart_actor::{LedgerState, UpdateOutcome};
use crate::checkout::CheckoutAck;
use crate::framework::LedgerError;
use crate::model::{LineItem, Product, ProductId};
use crate::totals::Totals;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, LedgerError>>;

/// Items and totals read in the same actor turn, so they always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub totals: Totals,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> LedgerState {
        if self.items.is_empty() {
            LedgerState::Empty
        } else {
            LedgerState::NonEmpty
        }
    }

    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|line| &line.id == id)
    }
}

#[derive(Debug)]
pub enum LedgerRequest {
    AddItem {
        product: Product,
        quantity: u32,
        respond_to: Response<LineItem>,
    },
    UpdateQuantity {
        id: ProductId,
        quantity: u32,
        respond_to: Response<UpdateOutcome>,
    },
    RemoveItem {
        id: ProductId,
        respond_to: Response<Option<LineItem>>,
    },
    Clear {
        respond_to: Response<usize>,
    },
    Items {
        respond_to: Response<Vec<LineItem>>,
    },
    Totals {
        respond_to: Response<Totals>,
    },
    Snapshot {
        respond_to: Response<CartSnapshot>,
    },
    Checkout {
        respond_to: Response<CheckoutAck>,
    },
}
