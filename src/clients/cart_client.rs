//! # Cart Client
//!
//! Full read/write access to the cart actor.
use crate::cart_actor::UpdateOutcome;
use crate::checkout::CheckoutAck;
use crate::clients::LedgerClient;
use crate::framework::{LedgerError, LedgerHandle};
use crate::model::{LineItem, Product, ProductId};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct CartClient {
    inner: LedgerHandle,
}

impl CartClient {
    pub fn new(inner: LedgerHandle) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn add_item(&self, product: Product, quantity: u32) -> Result<LineItem, LedgerError> {
        debug!("Sending request");
        self.inner.add_item(product, quantity).await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: ProductId,
        quantity: u32,
    ) -> Result<UpdateOutcome, LedgerError> {
        debug!("Sending request");
        self.inner.update_quantity(id, quantity).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: ProductId) -> Result<Option<LineItem>, LedgerError> {
        debug!("Sending request");
        self.inner.remove_item(id).await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, LedgerError> {
        debug!("Sending request");
        self.inner.clear().await
    }

    /// Requests checkout. Fails with `EmptyCart` while the cart is empty.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<CheckoutAck, LedgerError> {
        debug!("Sending request");
        self.inner.checkout().await
    }
}

#[async_trait]
impl LedgerClient for CartClient {
    fn handle(&self) -> &LedgerHandle {
        &self.inner
    }
}
