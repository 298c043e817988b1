//! # Catalog Client
//!
//! The product listing's side of the cart: looks products up by id and adds
//! them.
use crate::cart_actor::CartError;
use crate::catalog::Catalog;
use crate::clients::LedgerClient;
use crate::framework::{LedgerError, LedgerHandle};
use crate::model::{LineItem, Product, ProductId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone)]
pub struct CatalogClient {
    inner: LedgerHandle,
    catalog: Arc<Catalog>,
}

impl CatalogClient {
    pub fn new(inner: LedgerHandle, catalog: Arc<Catalog>) -> Self {
        Self { inner, catalog }
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// The "Add to Cart" button.
    ///
    /// # Errors
    /// `UnknownProduct` when `id` is not in the catalog, otherwise whatever the
    /// ledger rejects.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, id: ProductId, quantity: u32) -> Result<LineItem, LedgerError> {
        let Some(product) = self.catalog.get(&id) else {
            warn!("Product not in catalog");
            return Err(CartError::UnknownProduct(id.to_string()).into());
        };
        debug!("Sending request");
        self.inner.add_item(product.clone(), quantity).await
    }
}

#[async_trait]
impl LedgerClient for CatalogClient {
    fn handle(&self) -> &LedgerHandle {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockLedger;

    #[tokio::test]
    async fn test_add_to_cart_sends_catalog_snapshot() {
        let catalog = Arc::new(Catalog::storefront());
        let bottle = catalog.get(&"bottle-200ml".into()).unwrap().clone();

        let mut mock = MockLedger::new();
        mock.expect_add("bottle-200ml".into())
            .return_ok(LineItem::from_product(&bottle, 1));

        let client = CatalogClient::new(mock.handle(), catalog);
        let line = client.add_to_cart("bottle-200ml".into(), 1).await.unwrap();

        assert_eq!(line.name, "Tender Coconut Water");
        assert_eq!(line.price, 40);
        mock.verify();
    }

    #[tokio::test]
    async fn test_unknown_product_never_reaches_ledger() {
        let mock = MockLedger::new();
        let client = CatalogClient::new(mock.handle(), Arc::new(Catalog::storefront()));

        let err = client.add_to_cart("mango-juice".into(), 1).await.unwrap_err();
        assert_eq!(err, LedgerError::Cart(CartError::UnknownProduct("mango-juice".into())));
        mock.verify();
    }
}
