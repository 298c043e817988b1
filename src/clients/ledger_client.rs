use crate::framework::{CartSnapshot, LedgerError, LedgerHandle};
use crate::model::LineItem;
use crate::totals::Totals;
use async_trait::async_trait;

/// Read access shared by every client that talks to the cart actor.
///
/// Implementors only provide [`handle`](LedgerClient::handle); the read
/// operations come for free.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Access the inner handle.
    fn handle(&self) -> &LedgerHandle;

    /// Current lines in first-add order.
    #[tracing::instrument(skip(self))]
    async fn items(&self) -> Result<Vec<LineItem>, LedgerError> {
        tracing::debug!("Sending request");
        self.handle().items().await
    }

    #[tracing::instrument(skip(self))]
    async fn totals(&self) -> Result<Totals, LedgerError> {
        tracing::debug!("Sending request");
        self.handle().totals().await
    }

    /// Items and totals from a single actor turn.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<CartSnapshot, LedgerError> {
        tracing::debug!("Sending request");
        self.handle().snapshot().await
    }
}
