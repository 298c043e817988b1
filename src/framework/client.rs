//! # Ledger Handle
//!
//! The client half of the actor. Cloning is cheap: it only holds a sender.

use crate::cart_actor::UpdateOutcome;
use crate::checkout::CheckoutAck;
use crate::framework::{CartSnapshot, LedgerError, LedgerRequest, Response};
use crate::model::{LineItem, Product, ProductId};
use crate::totals::Totals;
use tokio::sync::{mpsc, oneshot};

#[derive(Debug, Clone)]
pub struct LedgerHandle {
    sender: mpsc::Sender<LedgerRequest>,
}

impl LedgerHandle {
    pub fn new(sender: mpsc::Sender<LedgerRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> LedgerRequest,
    ) -> Result<T, LedgerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }

    pub async fn add_item(&self, product: Product, quantity: u32) -> Result<LineItem, LedgerError> {
        self.request(|respond_to| LedgerRequest::AddItem {
            product,
            quantity,
            respond_to,
        })
        .await
    }

    pub async fn update_quantity(
        &self,
        id: ProductId,
        quantity: u32,
    ) -> Result<UpdateOutcome, LedgerError> {
        self.request(|respond_to| LedgerRequest::UpdateQuantity {
            id,
            quantity,
            respond_to,
        })
        .await
    }

    pub async fn remove_item(&self, id: ProductId) -> Result<Option<LineItem>, LedgerError> {
        self.request(|respond_to| LedgerRequest::RemoveItem { id, respond_to })
            .await
    }

    pub async fn clear(&self) -> Result<usize, LedgerError> {
        self.request(|respond_to| LedgerRequest::Clear { respond_to }).await
    }

    pub async fn items(&self) -> Result<Vec<LineItem>, LedgerError> {
        self.request(|respond_to| LedgerRequest::Items { respond_to }).await
    }

    pub async fn totals(&self) -> Result<Totals, LedgerError> {
        self.request(|respond_to| LedgerRequest::Totals { respond_to }).await
    }

    pub async fn snapshot(&self) -> Result<CartSnapshot, LedgerError> {
        self.request(|respond_to| LedgerRequest::Snapshot { respond_to }).await
    }

    pub async fn checkout(&self) -> Result<CheckoutAck, LedgerError> {
        self.request(|respond_to| LedgerRequest::Checkout { respond_to }).await
    }
}
